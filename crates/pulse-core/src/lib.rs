//! Core domain types and configuration for TrustPulse.
//!
//! Everything the pipeline fetches is modeled here as an immutable view
//! record: product and brand insight reports, social comments, business
//! listings, influencer profiles. The application config loads from
//! environment variables; seeded directory listings load from YAML.

use thiserror::Error;

pub mod app_config;
pub mod comment;
pub mod config;
pub mod directory;
pub mod influencer;
pub mod insight;
pub mod user;

pub use app_config::AppConfig;
pub use comment::{CategorizedPulse, Keyword, KeywordSentiment, SocialComment, Source};
pub use config::{load_app_config, load_app_config_from_env};
pub use directory::{load_listings, BusinessListing, ListingsFile};
pub use influencer::{BlogPost, CollabMatch, InfluencerProfile};
pub use insight::{
    BrandInsight, BrandService, BudgetAlternative, CatalogProduct, InfluencerQuote,
    InfluencerReview, Macro, NutritionalFacts, PricePoint, ProductInsight, ProductSpec,
    ProductTier, PulseEvent, Recipe, SentimentHistoryPoint, SentimentStats, SimilarProduct,
};
pub use user::{Provider, User};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read listings file {path}: {source}")]
    ListingsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse listings file: {0}")]
    ListingsFileParse(#[from] serde_yaml::Error),

    #[error("listings validation failed: {0}")]
    Validation(String),
}
