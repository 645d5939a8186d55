//! Influencer search and collaboration matchmaking.

use pulse_core::{CollabMatch, InfluencerProfile};
use pulse_genai::GenAiClient;

use crate::list::fetch_json_list;
use crate::schemas;

/// Which side of the collaboration market to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollabTarget {
    Influencers,
    Brands,
}

impl std::fmt::Display for CollabTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollabTarget::Influencers => write!(f, "influencers"),
            CollabTarget::Brands => write!(f, "brands"),
        }
    }
}

/// Identify top influencers or bloggers for a category.
///
/// The upstream reply is schema-less JSON; unparseable replies degrade to
/// an empty list like every other list search.
pub async fn search_influencers(
    client: &GenAiClient,
    model: &str,
    query: &str,
) -> Vec<InfluencerProfile> {
    let prompt = format!("Identify top 5 influencers or food bloggers for category: \"{query}\".");
    fetch_json_list(client, model, prompt, None, "influencer search").await
}

/// Find collaboration candidates for `query` on the given side of the market.
pub async fn find_collab_matches(
    client: &GenAiClient,
    model: &str,
    query: &str,
    target: CollabTarget,
) -> Vec<CollabMatch> {
    let prompt =
        format!("Find potential collaboration matches for: \"{query}\". Target Type: {target}.");
    fetch_json_list(
        client,
        model,
        prompt,
        Some(schemas::collab_matches()),
        "collab matchmaking",
    )
    .await
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_string_contains, method};
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
    async fn influencer_search_parses_profiles() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(json_text_reply(&serde_json::json!([
                {"id": "i1", "name": "Maya K", "handle": "@mayak", "trustScore": 92, "followers": 150000, "isVerified": true}
            ])))
            .mount(&server)
            .await;

        let profiles = search_influencers(&test_client(&server.uri()), "m", "vegan food").await;
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].handle, "@mayak");
    }

    #[tokio::test]
    async fn collab_search_targets_requested_side() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("Target Type: brands"))
            .respond_with(json_text_reply(&serde_json::json!([
                {"id": "c1", "name": "GlowCo", "category": "Beauty", "reach": "2M",
                 "description": "skincare", "matchedPulse": 87, "email": "hi@glow.co"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let matches = find_collab_matches(
            &test_client(&server.uri()),
            "m",
            "skincare reviewers",
            CollabTarget::Brands,
        )
        .await;
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].matched_pulse, 87.0);
    }

    #[tokio::test]
    async fn failed_matchmaking_is_empty_list() {
        let matches = find_collab_matches(
            &test_client("http://127.0.0.1:1"),
            "m",
            "q",
            CollabTarget::Influencers,
        )
        .await;
        assert!(matches.is_empty());
    }
}
