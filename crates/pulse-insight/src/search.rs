//! Search orchestration: classify, then fetch exactly one insight.

use pulse_core::{BrandInsight, ProductInsight};
use pulse_genai::GenAiClient;

use crate::brand::fetch_brand_insight;
use crate::classify::{classify_query, QueryKind};
use crate::outcome::FetchOutcome;
use crate::product::fetch_product_insight;

/// The result of one full search: which branch ran, and what it resolved to.
#[derive(Debug)]
pub enum SearchOutcome {
    Product(FetchOutcome<ProductInsight>),
    Brand(FetchOutcome<BrandInsight>),
}

impl SearchOutcome {
    #[must_use]
    pub fn kind(&self) -> QueryKind {
        match self {
            SearchOutcome::Product(_) => QueryKind::Product,
            SearchOutcome::Brand(_) => QueryKind::Brand,
        }
    }
}

/// Run the full search pipeline for one query.
///
/// Classification is fail-open, so this always issues exactly one insight
/// fetch and never returns an error; failures live inside the outcome.
pub async fn run_search(client: &GenAiClient, model: &str, query: &str) -> SearchOutcome {
    let kind = classify_query(client, model, query).await;
    tracing::info!(query, %kind, "query classified");

    match kind {
        QueryKind::Brand => SearchOutcome::Brand(fetch_brand_insight(client, model, query).await),
        QueryKind::Product => {
            SearchOutcome::Product(fetch_product_insight(client, model, query).await)
        }
    }
}
