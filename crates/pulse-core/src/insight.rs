//! Product and brand insight reports.
//!
//! These are the two canonical records the model returns for a search. Both
//! are treated as immutable once parsed; the application replaces them
//! wholesale on every new search. Field names mirror the camelCase wire
//! schema requested from the model. Collections default to empty so a
//! sparse model response still parses.

use serde::{Deserialize, Serialize};

use crate::comment::{CategorizedPulse, SocialComment};

/// One retailer price entry.
///
/// `price_comparison` is requested best-value-first from the model, so the
/// head of the list is the best offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub store: String,
    pub price: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub availability: bool,
    #[serde(default)]
    pub previous_price: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// One point of the sentiment-over-time series.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentHistoryPoint {
    pub date: String,
    pub positive: f32,
    pub neutral: f32,
    pub negative: f32,
    #[serde(default)]
    pub net_score: Option<f32>,
}

/// Aggregate review sentiment stats.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentStats {
    #[serde(default)]
    pub positive: f32,
    #[serde(default)]
    pub neutral: f32,
    #[serde(default)]
    pub negative: f32,
    #[serde(default)]
    pub average_rating: f32,
    #[serde(default)]
    pub total_reviews_analyzed: u32,
    #[serde(default)]
    pub history: Vec<SentimentHistoryPoint>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalFacts {
    #[serde(default)]
    pub calories: Option<String>,
    #[serde(default)]
    pub macros: Vec<Macro>,
    #[serde(default)]
    pub health_benefits: Vec<String>,
    #[serde(default)]
    pub health_warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Macro {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    #[serde(default)]
    pub servings: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// A label/value spec row, optionally grouped by category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSpec {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// A comparable alternative product.
///
/// `style_category` is kept as the raw wire string; the shaper buckets it
/// into the four fixed display categories and routes anything unrecognized
/// to Casual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarProduct {
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub price_estimate: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub style_category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAlternative {
    pub store: String,
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTier {
    pub tier: String,
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub store: String,
    #[serde(default)]
    pub image: String,
}

/// A scheduled or recorded community event surfaced with an insight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PulseEvent {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub recommendation_reason: String,
}

/// An expert/influencer take on a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerReview {
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub platform: String,
    pub content: String,
    #[serde(default)]
    pub trust_score: f32,
    #[serde(default)]
    pub video_url: Option<String>,
}

/// The canonical report for a specific product or product line.
///
/// `name` defaults to empty so that a payload with no identity still parses;
/// the fetcher treats an empty name as "no result", not a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInsight {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub is_consumable: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price_comparison: Vec<PricePoint>,
    #[serde(default)]
    pub product_tiers: Vec<ProductTier>,
    #[serde(default)]
    pub budget_alternatives: Vec<BudgetAlternative>,
    #[serde(default)]
    pub sentiment: SentimentStats,
    #[serde(default)]
    pub categorized_pulse: Option<CategorizedPulse>,
    #[serde(default)]
    pub nutritional_facts: Option<NutritionalFacts>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub pairings: Vec<String>,
    #[serde(default)]
    pub top_relevant_reviews: Vec<SocialComment>,
    #[serde(default)]
    pub top_positive_reviews: Vec<SocialComment>,
    #[serde(default)]
    pub top_negative_reviews: Vec<SocialComment>,
    #[serde(default)]
    pub influencer_reviews: Vec<InfluencerReview>,
    #[serde(default)]
    pub similar_products: Vec<SimilarProduct>,
    #[serde(default)]
    pub specifications: Vec<ProductSpec>,
    #[serde(default)]
    pub events: Vec<PulseEvent>,
    #[serde(default)]
    pub video_reviews: Vec<String>,
    /// 0–100 aggregate credibility score, sourced from the model.
    #[serde(default)]
    pub brand_score: f32,
    #[serde(default)]
    pub total_verified_reviews: Option<u32>,
    #[serde(default)]
    pub last_price_refresh: Option<String>,
}

/// A catalog item inside a brand report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price_range: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub trust_pulse: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandService {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price_range: String,
}

/// A quoted expert opinion with its own trust score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerQuote {
    pub name: String,
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub score: f32,
}

/// The canonical report for a brand entity.
///
/// `brand_name` defaults to empty for the same reason as
/// [`ProductInsight::name`]: the identity gate lives in the fetcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandInsight {
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mission: Option<String>,
    /// 0–100 aggregate trust score, sourced from the model.
    #[serde(default)]
    pub market_trust_score: f32,
    #[serde(default)]
    pub product_catalog: Vec<CatalogProduct>,
    #[serde(default)]
    pub services: Vec<BrandService>,
    #[serde(default)]
    pub events: Vec<PulseEvent>,
    #[serde(default)]
    pub influencer_pulse: Vec<InfluencerQuote>,
    #[serde(default)]
    pub web_mentions: Vec<SocialComment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_insight_parses_from_sparse_payload() {
        let insight: ProductInsight = serde_json::from_str(
            r#"{"name": "Aurora Lamp", "category": "Home", "brandScore": 84}"#,
        )
        .unwrap();
        assert_eq!(insight.name, "Aurora Lamp");
        assert_eq!(insight.brand_score, 84.0);
        assert!(insight.price_comparison.is_empty());
        assert!(insight.categorized_pulse.is_none());
        assert!(!insight.is_consumable);
    }

    #[test]
    fn product_insight_parses_nested_collections() {
        let insight: ProductInsight = serde_json::from_str(
            r#"{
                "name": "Trail Mix",
                "isConsumable": true,
                "priceComparison": [
                    {"store": "MegaMart", "price": "$4.99", "link": "https://m", "availability": true},
                    {"store": "CornerShop", "price": "$5.49", "link": "https://c", "availability": false}
                ],
                "sentiment": {"positive": 62, "neutral": 20, "negative": 18, "averageRating": 4.1, "totalReviewsAnalyzed": 412, "history": []},
                "similarProducts": [{"name": "Nut Blend", "styleCategory": "Comfort"}],
                "topRelevantReviews": [{"user": "sam", "text": "tasty", "score": 5, "date": "2024-01-02", "source": "amazon"}]
            }"#,
        )
        .unwrap();
        assert!(insight.is_consumable);
        assert_eq!(insight.price_comparison.len(), 2);
        assert!(insight.price_comparison[0].availability);
        assert_eq!(insight.sentiment.total_reviews_analyzed, 412);
        assert_eq!(insight.similar_products[0].style_category, "Comfort");
        assert_eq!(insight.top_relevant_reviews.len(), 1);
    }

    #[test]
    fn brand_insight_parses_catalog_and_mentions() {
        let insight: BrandInsight = serde_json::from_str(
            r#"{
                "brandName": "Nike",
                "industry": "Apparel",
                "marketTrustScore": 88,
                "productCatalog": [{"name": "Air Max", "category": "Shoes", "trustPulse": 91}],
                "webMentions": [{"user": "r/sneakers", "text": "classic", "source": "reddit"}]
            }"#,
        )
        .unwrap();
        assert_eq!(insight.brand_name, "Nike");
        assert_eq!(insight.product_catalog[0].trust_pulse, 91.0);
        assert_eq!(insight.web_mentions.len(), 1);
    }

    #[test]
    fn empty_object_parses_with_empty_identity() {
        // A bare `{}` payload is a valid parse with an empty identity field;
        // the fetcher downgrades it to "no result" rather than an error.
        let product: ProductInsight = serde_json::from_str("{}").unwrap();
        assert!(product.name.is_empty());
        let brand: BrandInsight = serde_json::from_str("{}").unwrap();
        assert!(brand.brand_name.is_empty());
    }
}
