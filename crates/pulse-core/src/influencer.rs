//! Influencer, collaboration, and creator-hub records.

use serde::{Deserialize, Serialize};

use crate::comment::SocialComment;

/// An influencer surfaced by the matchmaking search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerProfile {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub trust_score: f32,
    #[serde(default)]
    pub total_reviews: u32,
    #[serde(default)]
    pub collaborations: u32,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub alignment_score: Option<f32>,
    #[serde(default)]
    pub top_reviews: Vec<SocialComment>,
}

/// A collaboration candidate returned by the matchmaker; either side of the
/// influencer/brand pairing uses the same shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollabMatch {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub reach: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub matched_pulse: f32,
    #[serde(default)]
    pub email: String,
}

/// A locally authored blog post. Never leaves session memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    #[serde(default)]
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub read_time: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub video_url: Option<String>,
}
