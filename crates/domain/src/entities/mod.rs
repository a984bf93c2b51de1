//! Domain entities - Core catalog records

mod class_index;
mod spell;

pub use class_index::{ClassInfo, ClassSpellIndex};
pub use spell::{level_label, Damage, Spell};
