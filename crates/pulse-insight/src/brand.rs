//! Brand-path insight fetch.

use pulse_core::BrandInsight;
use pulse_genai::{GenAiClient, GenerateRequest};

use crate::outcome::{FetchFailure, FetchOutcome};
use crate::schemas;

/// Fetch the brand insight record for `query`.
///
/// Same shape as the product path, including the identity gate: a payload
/// without a non-empty `brandName` is [`FetchOutcome::Empty`]. Both search
/// branches share one "valid result" rule.
pub async fn fetch_brand_insight(
    client: &GenAiClient,
    model: &str,
    query: &str,
) -> FetchOutcome<BrandInsight> {
    let prompt = format!("Quick Brand Pulse Audit for: \"{query}\". Return data in JSON format.");
    let request = GenerateRequest::text(prompt)
        .with_grounding()
        .with_json_schema(schemas::brand_insight());

    let response = match client.generate(model, &request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, query, "brand insight fetch failed");
            return FetchOutcome::Failed(e.into());
        }
    };

    let Some(text) = response.text() else {
        tracing::warn!(query, "brand insight response had no text part");
        return FetchOutcome::Failed(FetchFailure::EmptyResponse);
    };

    match serde_json::from_str::<BrandInsight>(text) {
        Ok(insight) if insight.brand_name.trim().is_empty() => {
            tracing::debug!(query, "brand insight had no identity — treating as no result");
            FetchOutcome::Empty
        }
        Ok(insight) => FetchOutcome::Found(insight),
        Err(e) => {
            tracing::warn!(error = %e, query, "brand insight payload did not match schema");
            FetchOutcome::Failed(FetchFailure::SchemaMismatch(e.to_string()))
        }
    }
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
    async fn successful_fetch_is_found() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({
                "tools": [{"googleSearch": {}}]
            })))
            .respond_with(json_text_reply(&serde_json::json!({
                "brandName": "Nike",
                "industry": "Apparel",
                "marketTrustScore": 88
            })))
            .mount(&server)
            .await;

        let outcome = fetch_brand_insight(&test_client(&server.uri()), "m", "Nike").await;
        let insight = outcome.into_found().expect("should be found");
        assert_eq!(insight.brand_name, "Nike");
        assert_eq!(insight.market_trust_score, 88.0);
    }

    #[tokio::test]
    async fn empty_object_is_gated_to_empty() {
        // The brand path applies the same identity gate as the product path:
        // a bare `{}` is "no result", never a usable record.
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(json_text_reply(&serde_json::json!({})))
            .mount(&server)
            .await;

        let outcome = fetch_brand_insight(&test_client(&server.uri()), "m", "q").await;
        assert!(matches!(outcome, FetchOutcome::Empty));
    }

    #[tokio::test]
    async fn api_error_is_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let outcome = fetch_brand_insight(&test_client(&server.uri()), "m", "q").await;
        assert!(matches!(
            outcome,
            FetchOutcome::Failed(FetchFailure::Api { status: 500, .. })
        ));
    }
}
