//! Product-path insight fetch.

use pulse_core::ProductInsight;
use pulse_genai::{GenAiClient, GenerateRequest};

use crate::outcome::{FetchFailure, FetchOutcome};
use crate::schemas;

fn extraction_prompt(query: &str) -> String {
    format!(
        "ACT AS A HIGH-SPEED DATA EXTRACTOR.\n\
         TARGET: \"{query}\"\n\n\
         CORE TASK:\n\
         1. REVIEWS: Extract as many unique, organic user reviews as possible (MAX 10 per \
         category) for: 'topRelevantReviews', 'topPositiveReviews', and 'topNegativeReviews'.\n\
         2. MIXED SOURCES: You MUST find and include reviews from Amazon, eBay, Pinterest, \
         Reddit, and Google. Map the 'source' field correctly.\n\
         3. PRICING: Find current market prices from at least 3 distinct retailers. Order \
         'priceComparison' best value first.\n\
         4. CATEGORIZED PULSE: Score Quality, Durability, Value, and Utility from 0-100 based \
         on community consensus.\n\
         5. ATTRIBUTES: If this is a fragrance/scent, include 'notes' in specifications. If \
         food, include nutrition.\n\n\
         OUTPUT: Valid JSON only. Do not provide markdown commentary."
    )
}

/// Fetch the product insight record for `query`.
///
/// Issues one grounded, schema-pinned generate call. The parsed record is
/// accepted only with a non-empty `name`; a nameless payload is
/// [`FetchOutcome::Empty`], not a failure. All failure reasons are logged
/// here, so callers can collapse the outcome without losing diagnostics.
pub async fn fetch_product_insight(
    client: &GenAiClient,
    model: &str,
    query: &str,
) -> FetchOutcome<ProductInsight> {
    let request = GenerateRequest::text(extraction_prompt(query))
        .with_grounding()
        .with_json_schema(schemas::product_insight());

    let response = match client.generate(model, &request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, query, "product insight fetch failed");
            return FetchOutcome::Failed(e.into());
        }
    };

    let Some(text) = response.text() else {
        tracing::warn!(query, "product insight response had no text part");
        return FetchOutcome::Failed(FetchFailure::EmptyResponse);
    };

    match serde_json::from_str::<ProductInsight>(text) {
        Ok(insight) if insight.name.trim().is_empty() => {
            tracing::debug!(query, "product insight had no identity — treating as no result");
            FetchOutcome::Empty
        }
        Ok(insight) => FetchOutcome::Found(insight),
        Err(e) => {
            tracing::warn!(error = %e, query, "product insight payload did not match schema");
            FetchOutcome::Failed(FetchFailure::SchemaMismatch(e.to_string()))
        }
    }
}
