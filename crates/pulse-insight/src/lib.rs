//! The TrustPulse insight pipeline.
//!
//! Classifies a free-text query as a product or brand ask, fetches the
//! matching structured insight from the generative model, and exposes the
//! supplementary searches (local services, reputation, influencers,
//! collaboration matches) and studio image operations.
//!
//! Every boundary here degrades instead of propagating: classification
//! fails open to the product branch, insight fetches resolve to a tagged
//! [`FetchOutcome`], list searches resolve to empty vectors, and image
//! operations resolve to `None`. Failure reasons are logged before being
//! collapsed so diagnostics survive without reaching the caller.

pub mod brand;
pub mod classify;
pub mod collab;
pub mod directory;
mod list;
pub mod outcome;
pub mod product;
pub mod schemas;
pub mod search;
pub mod studio;

pub use brand::fetch_brand_insight;
pub use classify::{classify_query, QueryKind};
pub use collab::{find_collab_matches, search_influencers, CollabTarget};
pub use directory::{fetch_business_reputation, fetch_local_services};
pub use outcome::{FetchFailure, FetchOutcome};
pub use product::fetch_product_insight;
pub use search::{run_search, SearchOutcome};
pub use studio::{
    estimate_measurement, generate_business_asset, virtual_try_on, AssetKind, TryOnMode,
};
