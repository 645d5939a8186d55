//! Structured-output schemas sent with each fetch.
//!
//! The model is asked to emit JSON conforming to these shapes, which are the
//! wire-side mirror of the `pulse-core` record types. Keeping them in one
//! module makes the request contract reviewable next to the parse types.

use serde_json::{json, Value};

fn string() -> Value {
    json!({"type": "STRING"})
}

fn number() -> Value {
    json!({"type": "NUMBER"})
}

fn integer() -> Value {
    json!({"type": "INTEGER"})
}

fn boolean() -> Value {
    json!({"type": "BOOLEAN"})
}

fn array(items: Value) -> Value {
    json!({"type": "ARRAY", "items": items})
}

fn object(properties: Value) -> Value {
    json!({"type": "OBJECT", "properties": properties})
}

fn object_requiring(properties: Value, required: &[&str]) -> Value {
    json!({"type": "OBJECT", "properties": properties, "required": required})
}

fn comment_schema() -> Value {
    object(json!({
        "user": string(),
        "text": string(),
        "score": number(),
        "date": string(),
        "source": string(),
        "sourceUrl": string(),
    }))
}

fn short_comment_schema() -> Value {
    object(json!({
        "user": string(),
        "text": string(),
        "score": number(),
        "source": string(),
    }))
}

/// Schema for the full product insight record.
#[must_use]
pub fn product_insight() -> Value {
    object(json!({
        "name": string(),
        "category": string(),
        "isConsumable": boolean(),
        "description": string(),
        "totalVerifiedReviews": integer(),
        "priceComparison": array(object(json!({
            "store": string(),
            "price": string(),
            "link": string(),
            "availability": boolean(),
        }))),
        "categorizedPulse": object(json!({
            "quality": number(),
            "durability": number(),
            "value": number(),
            "utility": number(),
        })),
        "nutritionalFacts": object(json!({
            "calories": string(),
            "macros": array(object(json!({"label": string(), "value": string()}))),
            "healthBenefits": array(string()),
            "healthWarnings": array(string()),
        })),
        "recipes": array(object(json!({
            "title": string(),
            "servings": string(),
            "ingredients": array(string()),
            "steps": array(string()),
        }))),
        "pairings": array(string()),
        "sentiment": object(json!({
            "positive": number(),
            "neutral": number(),
            "negative": number(),
            "averageRating": number(),
            "totalReviewsAnalyzed": integer(),
            "history": array(object(json!({
                "date": string(),
                "positive": number(),
                "neutral": number(),
                "negative": number(),
                "netScore": number(),
            }))),
        })),
        "topRelevantReviews": array(comment_schema()),
        "topPositiveReviews": array(short_comment_schema()),
        "topNegativeReviews": array(short_comment_schema()),
        "influencerReviews": array(object(json!({
            "name": string(),
            "platform": string(),
            "content": string(),
            "trustScore": number(),
        }))),
        "videoReviews": array(string()),
        "specifications": array(object(json!({"label": string(), "value": string()}))),
        "similarProducts": array(object(json!({
            "name": string(),
            "imageUrl": string(),
            "priceEstimate": string(),
            "styleCategory": string(),
        }))),
        "brandScore": number(),
    }))
}

/// Schema for the brand insight record.
#[must_use]
pub fn brand_insight() -> Value {
    object(json!({
        "brandName": string(),
        "industry": string(),
        "description": string(),
        "mission": string(),
        "marketTrustScore": number(),
        "productCatalog": array(object(json!({
            "name": string(),
            "category": string(),
            "priceRange": string(),
            "trustPulse": number(),
        }))),
        "services": array(object(json!({
            "name": string(),
            "description": string(),
            "priceRange": string(),
        }))),
        "influencerPulse": array(object(json!({
            "name": string(),
            "handle": string(),
            "quote": string(),
            "score": number(),
        }))),
        "webMentions": array(short_comment_schema()),
    }))
}

/// Schema for a local-services directory search.
#[must_use]
pub fn business_listings() -> Value {
    array(object_requiring(
        json!({
            "id": string(),
            "businessName": string(),
            "category": string(),
            "description": string(),
            "slogan": string(),
            "location": string(),
            "rating": number(),
            "isVerified": boolean(),
            "image": string(),
        }),
        &[
            "id",
            "businessName",
            "category",
            "description",
            "location",
            "rating",
            "isVerified",
            "image",
        ],
    ))
}

/// Schema for a business reputation lookup.
#[must_use]
pub fn reputation_comments() -> Value {
    array(object_requiring(
        json!({
            "user": string(),
            "text": string(),
            "score": number(),
            "date": string(),
            "source": string(),
        }),
        &["user", "text", "score", "date", "source"],
    ))
}

/// Schema for collaboration matchmaking.
#[must_use]
pub fn collab_matches() -> Value {
    array(object_requiring(
        json!({
            "id": string(),
            "name": string(),
            "category": string(),
            "reach": string(),
            "description": string(),
            "matchedPulse": number(),
            "email": string(),
        }),
        &["id", "name", "category", "reach", "description", "matchedPulse", "email"],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_schema_declares_identity_and_reviews() {
        let schema = product_insight();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["properties"]["name"]["type"], "STRING");
        assert_eq!(schema["properties"]["topRelevantReviews"]["type"], "ARRAY");
        assert_eq!(
            schema["properties"]["priceComparison"]["items"]["properties"]["availability"]["type"],
            "BOOLEAN"
        );
    }

    #[test]
    fn brand_schema_declares_catalog_scores() {
        let schema = brand_insight();
        assert_eq!(
            schema["properties"]["productCatalog"]["items"]["properties"]["trustPulse"]["type"],
            "NUMBER"
        );
    }

    #[test]
    fn listing_schema_requires_identity_fields() {
        let schema = business_listings();
        let required = schema["items"]["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "businessName"));
        assert!(required.iter().any(|v| v == "rating"));
    }
}
