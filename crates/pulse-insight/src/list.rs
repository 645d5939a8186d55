//! Shared helper for list-shaped fetches.

use serde_json::Value;

use pulse_genai::{GenAiClient, GenerateRequest};

/// Issue a grounded JSON-list request and parse the reply into `Vec<T>`.
///
/// Degrades to an empty vector on every failure (transport, no text,
/// unparseable payload), logging the reason. List searches are
/// supplementary surfaces; they never block or error the caller.
pub(crate) async fn fetch_json_list<T>(
    client: &GenAiClient,
    model: &str,
    prompt: String,
    schema: Option<Value>,
    context: &str,
) -> Vec<T>
where
    T: serde::de::DeserializeOwned,
{
    let mut request = GenerateRequest::text(prompt).with_grounding();
    request = match schema {
        Some(schema) => request.with_json_schema(schema),
        None => request.with_json_response(),
    };

    let response = match client.generate(model, &request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, context, "list fetch failed — returning empty");
            return Vec::new();
        }
    };

    let Some(text) = response.text() else {
        tracing::warn!(context, "list fetch response had no text part");
        return Vec::new();
    };

    match serde_json::from_str::<Vec<T>>(text) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(error = %e, context, "list payload did not parse — returning empty");
            Vec::new()
        }
    }
}
