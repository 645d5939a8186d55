//! Directory searches: local services and per-business reputation.

use pulse_core::{BusinessListing, SocialComment};
use pulse_genai::GenAiClient;

use crate::list::fetch_json_list;
use crate::schemas;

/// Find local businesses or services matching `query`.
///
/// Degrades to an empty list on any failure.
pub async fn fetch_local_services(
    client: &GenAiClient,
    model: &str,
    query: &str,
) -> Vec<BusinessListing> {
    let prompt = format!("Find local businesses or services for: \"{query}\".");
    fetch_json_list(
        client,
        model,
        prompt,
        Some(schemas::business_listings()),
        "local services",
    )
    .await
}

/// Find recent reviews and reputation data for one business.
///
/// Degrades to an empty list on any failure.
pub async fn fetch_business_reputation(
    client: &GenAiClient,
    model: &str,
    business_name: &str,
) -> Vec<SocialComment> {
    let prompt = format!("Find recent reviews and reputation data for \"{business_name}\".");
    fetch_json_list(
        client,
        model,
        prompt,
        Some(schemas::reputation_comments()),
        "business reputation",
    )
    .await
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_client(base_url: &str) -> GenAiClient {
        GenAiClient::with_base_url("test-key", 30, base_url)
            .expect("client construction should not fail")
    }

    fn json_text_reply(payload: &serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": payload.to_string()}]}}]
        }))
    }

    #[tokio::test]
    async fn local_services_parse_into_listings() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({
                "tools": [{"googleSearch": {}}]
            })))
            .respond_with(json_text_reply(&serde_json::json!([
                {
                    "id": "b1",
                    "businessName": "Lumina Dental",
                    "category": "Health",
                    "description": "Cosmetic dentistry",
                    "location": "New York, NY",
                    "rating": 4.9,
                    "isVerified": true,
                    "image": "https://img"
                }
            ])))
            .mount(&server)
            .await;

        let listings =
            fetch_local_services(&test_client(&server.uri()), "m", "dentist nyc").await;
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].business_name, "Lumina Dental");
        assert_eq!(listings[0].slug(), "lumina-dental");
    }

    #[tokio::test]
    async fn failed_service_search_is_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let listings = fetch_local_services(&test_client(&server.uri()), "m", "q").await;
        assert!(listings.is_empty());
    }

    #[tokio::test]
    async fn non_array_reputation_payload_is_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(json_text_reply(&serde_json::json!({"oops": true})))
            .mount(&server)
            .await;

        let comments =
            fetch_business_reputation(&test_client(&server.uri()), "m", "Lumina Dental").await;
        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn reputation_comments_parse_sources() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(json_text_reply(&serde_json::json!([
                {"user": "pat", "text": "gentle and fast", "score": 5, "date": "2024-03-01", "source": "yelp"},
                {"user": "sky", "text": "pricey", "score": 3, "date": "2024-02-12", "source": "somewhere-new"}
            ])))
            .mount(&server)
            .await;

        let comments =
            fetch_business_reputation(&test_client(&server.uri()), "m", "Lumina Dental").await;
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].source, pulse_core::Source::Yelp);
        // Unknown platform tags fold into the generic bucket.
        assert_eq!(comments[1].source, pulse_core::Source::Internet);
    }
}
