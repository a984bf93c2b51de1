//! Value objects - Immutable types defined by their values

mod asset_urls;
mod filter_state;

pub use asset_urls::AssetUrls;
pub use filter_state::{FilterState, FilterUpdate, Selection, SortKey, ALL};
