//! Query classification: product line vs. brand entity.

use pulse_genai::{GenAiClient, GenerateRequest};

/// The two search branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Product,
    Brand,
}

impl std::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryKind::Product => write!(f, "product"),
            QueryKind::Brand => write!(f, "brand"),
        }
    }
}

fn classify_prompt(query: &str) -> String {
    format!(
        "Classify query: \"{query}\".\n\
         If the user is asking about a specific model, version, flavor, scent, or product line \
         (e.g. \"Dior Homme\", \"iPhone 15\", \"Woody Dior\"), respond \"product\".\n\
         If the user is asking about the company/entity broadly (e.g. \"Dior\", \"Apple\", \
         \"Nike\"), respond \"brand\".\n\
         Respond ONLY: \"product\" or \"brand\"."
    )
}

/// Classify a free-text query as a product or brand ask.
///
/// Fail-open: any transport error, empty reply, or unrecognizable answer
/// yields [`QueryKind::Product`] so the rest of the pipeline always runs.
/// This never returns an error.
pub async fn classify_query(client: &GenAiClient, model: &str, query: &str) -> QueryKind {
    let request = GenerateRequest::text(classify_prompt(query)).with_thinking_budget(0);

    match client.generate_text(model, &request).await {
        Ok(text) if text.to_lowercase().contains("brand") => QueryKind::Brand,
        Ok(_) => QueryKind::Product,
        Err(e) => {
            tracing::debug!(error = %e, query, "classification failed — defaulting to product");
            QueryKind::Product
        }
    }
}
