//! Social comments: one user- or model-sourced review.
//!
//! Wire format is camelCase JSON produced by the model's structured output.
//! The `source` tag is a closed platform enumeration; anything outside it
//! deserializes to [`Source::Internet`] rather than failing the whole record.

use serde::{Deserialize, Serialize};

/// Platform a comment was collected from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Source {
    Reddit,
    Google,
    TrustPulse,
    #[default]
    Internet,
    YouTube,
    Website,
    Yelp,
    UberEats,
    TripAdvisor,
    Amazon,
    Ebay,
    Pinterest,
}

impl Source {
    /// The lowercase wire tag for this platform.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Reddit => "reddit",
            Source::Google => "google",
            Source::TrustPulse => "trustpulse",
            Source::Internet => "internet",
            Source::YouTube => "youtube",
            Source::Website => "website",
            Source::Yelp => "yelp",
            Source::UberEats => "ubereats",
            Source::TripAdvisor => "tripadvisor",
            Source::Amazon => "amazon",
            Source::Ebay => "ebay",
            Source::Pinterest => "pinterest",
        }
    }
}

impl From<String> for Source {
    fn from(tag: String) -> Self {
        match tag.to_lowercase().as_str() {
            "reddit" => Source::Reddit,
            "google" => Source::Google,
            "trustpulse" => Source::TrustPulse,
            "youtube" => Source::YouTube,
            "website" => Source::Website,
            "yelp" => Source::Yelp,
            "ubereats" => Source::UberEats,
            "tripadvisor" => Source::TripAdvisor,
            "amazon" => Source::Amazon,
            "ebay" => Source::Ebay,
            "pinterest" => Source::Pinterest,
            // The model occasionally invents tags; fold them into the
            // generic web bucket instead of rejecting the record.
            _ => Source::Internet,
        }
    }
}

impl From<Source> for String {
    fn from(source: Source) -> Self {
        source.as_str().to_owned()
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Four-pillar community score breakdown, each 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategorizedPulse {
    pub quality: f32,
    pub durability: f32,
    pub value: f32,
    pub utility: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordSentiment {
    Positive,
    Negative,
}

/// A sentiment-tagged keyword extracted from a comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub sentiment: KeywordSentiment,
}

/// One review, either fetched from the model or authored locally.
///
/// Locally authored comments carry `source: trustpulse` and live only in
/// session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialComment {
    #[serde(default)]
    pub id: Option<String>,
    pub user: String,
    pub text: String,
    /// Star rating in 1–5.
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub detailed_rating: Option<CategorizedPulse>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub is_verified: Option<bool>,
    #[serde(default)]
    pub is_buyer: Option<bool>,
    /// Marks a paid/sponsored influencer-brand relationship.
    #[serde(default)]
    pub is_collaboration: Option<bool>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub keywords: Vec<Keyword>,
    #[serde(default)]
    pub replies: Vec<SocialComment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_known_tag_round_trips() {
        let source: Source = serde_json::from_str("\"reddit\"").unwrap();
        assert_eq!(source, Source::Reddit);
        assert_eq!(serde_json::to_string(&source).unwrap(), "\"reddit\"");
    }

    #[test]
    fn source_unknown_tag_falls_back_to_internet() {
        let source: Source = serde_json::from_str("\"mastodon\"").unwrap();
        assert_eq!(source, Source::Internet);
    }

    #[test]
    fn source_tag_is_case_insensitive() {
        let source: Source = serde_json::from_str("\"Reddit\"").unwrap();
        assert_eq!(source, Source::Reddit);
    }

    #[test]
    fn comment_parses_from_minimal_wire_shape() {
        let comment: SocialComment = serde_json::from_str(
            r#"{"user": "jo", "text": "solid", "score": 4, "date": "2024-05-01", "source": "amazon"}"#,
        )
        .unwrap();
        assert_eq!(comment.user, "jo");
        assert_eq!(comment.source, Source::Amazon);
        assert!(comment.keywords.is_empty());
        assert!(comment.is_verified.is_none());
    }

    #[test]
    fn comment_tolerates_missing_optional_fields() {
        let comment: SocialComment =
            serde_json::from_str(r#"{"user": "a", "text": "b"}"#).unwrap();
        assert_eq!(comment.source, Source::Internet);
        assert_eq!(comment.score, 0.0);
        assert!(comment.date.is_empty());
    }

    #[test]
    fn detailed_rating_parses_when_present() {
        let comment: SocialComment = serde_json::from_str(
            r#"{"user": "a", "text": "b", "detailedRating": {"quality": 80, "durability": 70, "value": 90, "utility": 60}}"#,
        )
        .unwrap();
        let rating = comment.detailed_rating.unwrap();
        assert_eq!(rating.quality, 80.0);
        assert_eq!(rating.utility, 60.0);
    }
}
