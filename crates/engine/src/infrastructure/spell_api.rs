//! HTTP client for the remote spell provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use spellbook_domain::Spell;
use std::time::Duration;
use url::Url;

use crate::infrastructure::ports::{SourceError, SpellSourcePort};

/// Default provider base URL.
pub const DEFAULT_SPELL_API_BASE_URL: &str = "https://inesdi2025-resources-p2.fly.dev/v1";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the provider's read-only JSON endpoints:
///
/// - `GET {base}/classes`
/// - `GET {base}/classes/{class_id}/spells`
/// - `GET {base}/spells/{spell_id}`
#[derive(Clone)]
pub struct HttpSpellSource {
    client: Client,
    base_url: Url,
}

impl HttpSpellSource {
    pub fn with_timeout(base_url: Url, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, base_url }
    }

    /// Append path segments to the base, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SourceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SourceError::network(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, SourceError> {
        let url = self.endpoint(segments)?;
        tracing::debug!(url = %url, "Requesting spell provider");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(SourceError::network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::request_failed(url.path(), status.as_u16()));
        }

        let body = response.bytes().await.map_err(SourceError::network)?;
        serde_json::from_slice(&body)
            .map_err(|e| SourceError::malformed(format!("{}: {}", url.path(), e)))
    }
}

#[async_trait]
impl SpellSourcePort for HttpSpellSource {
    async fn list_classes(&self) -> Result<Vec<String>, SourceError> {
        self.get_json(&["classes"]).await
    }

    async fn list_class_spells(&self, class_id: &str) -> Result<Vec<String>, SourceError> {
        self.get_json(&["classes", class_id, "spells"]).await
    }

    async fn get_spell(&self, spell_id: &str) -> Result<Spell, SourceError> {
        self.get_json(&["spells", spell_id]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Path,
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::get,
        Json, Router,
    };
    use serde_json::json;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    async fn classes() -> Json<Vec<&'static str>> {
        Json(vec!["wizard", "cleric"])
    }

    async fn class_spells(Path(class_id): Path<String>) -> Response {
        match class_id.as_str() {
            "wizard" => Json(vec!["fireball", "shield"]).into_response(),
            "arcane trickster" => Json(vec!["mage-hand"]).into_response(),
            _ => StatusCode::NOT_FOUND.into_response(),
        }
    }

    async fn spell(Path(spell_id): Path<String>) -> Response {
        match spell_id.as_str() {
            "fireball" => Json(json!({
                "id": "fireball",
                "url": "https://example.test/spells/fireball",
                "name": "Fireball",
                "level": 3,
                "upcast": true,
                "action": "1 action",
                "duration": "Instantaneous",
                "range": "150 feet",
                "type": "DEX save",
                "damage": [{ "dice": "8d6", "damageType": "fire" }]
            }))
            .into_response(),
            "garbled" => (StatusCode::OK, "{\"id\": 42").into_response(),
            _ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }

    async fn spawn_provider() -> (SocketAddr, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let router = Router::new()
            .route("/v1/classes", get(classes))
            .route("/v1/classes/{class_id}/spells", get(class_spells))
            .route("/v1/spells/{spell_id}", get(spell));

        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        (addr, handle)
    }

    fn source(addr: SocketAddr) -> HttpSpellSource {
        let base = Url::parse(&format!("http://{}/v1/", addr)).unwrap();
        HttpSpellSource::with_timeout(base, 5)
    }

    #[tokio::test]
    async fn lists_classes_and_class_spells() {
        let (addr, _handle) = spawn_provider().await;
        let source = source(addr);

        assert_eq!(source.list_classes().await.unwrap(), vec!["wizard", "cleric"]);
        assert_eq!(
            source.list_class_spells("wizard").await.unwrap(),
            vec!["fireball", "shield"]
        );
    }

    #[tokio::test]
    async fn path_segments_are_encoded() {
        let (addr, _handle) = spawn_provider().await;
        let source = source(addr);

        assert_eq!(
            source.list_class_spells("arcane trickster").await.unwrap(),
            vec!["mage-hand"]
        );
        let url = source.endpoint(&["classes", "a/b", "spells"]).unwrap();
        assert_eq!(url.path(), "/v1/classes/a%2Fb/spells");
    }

    #[tokio::test]
    async fn decodes_spell_detail_without_icon() {
        let (addr, _handle) = spawn_provider().await;
        let spell = source(addr).get_spell("fireball").await.unwrap();

        assert_eq!(spell.name, "Fireball");
        assert_eq!(spell.damage_count(), 1);
        assert!(spell.icon.is_none());
    }

    #[tokio::test]
    async fn non_success_status_is_request_failure() {
        let (addr, _handle) = spawn_provider().await;
        let source = source(addr);

        match source.list_class_spells("bard").await {
            Err(SourceError::RequestFailed { endpoint, status }) => {
                assert_eq!(status, 404);
                assert_eq!(endpoint, "/v1/classes/bard/spells");
            }
            other => panic!("expected RequestFailed, got {other:?}"),
        }
        assert!(matches!(
            source.get_spell("wish").await,
            Err(SourceError::RequestFailed { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn undecodable_body_is_malformed() {
        let (addr, _handle) = spawn_provider().await;
        let err = source(addr).get_spell("garbled").await.unwrap_err();
        assert!(err.is_malformed());
    }

    #[tokio::test]
    async fn unreachable_provider_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source(addr).list_classes().await.unwrap_err();
        assert!(matches!(err, SourceError::Network(_)));
    }
}
