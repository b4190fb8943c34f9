//! Place search against Open-Meteo geocoding.

use skiscore_core::LocationMatch;

use super::OwmClient;
use crate::error::OwmResult;
use crate::http::HttpBackend;
use crate::mapping::to_locations;
use crate::models::GeocodingResponse;
use crate::url::build_search_url;

impl<B: HttpBackend> OwmClient<B> {
    pub(crate) async fn search(&self, name: &str, count: u32) -> OwmResult<Vec<LocationMatch>> {
        let url = build_search_url(&self.config, name, count)?;
        let response: GeocodingResponse = self.backend.get_json(&url).await?;
        Ok(to_locations(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;
    use crate::models::OwmConfig;
    use serde_json::json;

    #[tokio::test]
    async fn test_search_maps_results() {
        let backend = FakeBackend::new().with_json(
            "v1/search",
            json!({
                "results": [
                    {"id": 1, "name": "Cervinia", "latitude": 45.93, "longitude": 7.63, "country": "Italia"},
                    {"id": 2, "name": "Cervinia", "latitude": 45.0, "longitude": 7.0}
                ]
            }),
        );
        let client = OwmClient::with_backend(OwmConfig::default(), backend);

        let found = client.search("Cervinia", 5).await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].display_name(), "Cervinia, Italia");
        assert!(client.backend.requests()[0].contains("count=5"));
    }

    #[tokio::test]
    async fn test_search_no_results() {
        let backend = FakeBackend::new().with_json("v1/search", json!({"generationtime_ms": 0.3}));
        let client = OwmClient::with_backend(OwmConfig::default(), backend);
        assert!(client.search("zzzz", 5).await.unwrap().is_empty());
    }
}
