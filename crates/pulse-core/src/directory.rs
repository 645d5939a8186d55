//! Business directory listings.
//!
//! Seeded entries ship in a YAML file loaded at startup; entries created
//! through the studio wizard are prepended in session state. Neither kind is
//! ever written back to disk.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::comment::SocialComment;
use crate::ConfigError;

/// A directory entry, fetched, seeded, or locally created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessListing {
    #[serde(default)]
    pub id: String,
    pub business_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub slogan: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub verified_reviews: Vec<SocialComment>,
}

impl BusinessListing {
    /// Generate a URL-safe slug from the business name.
    #[must_use]
    pub fn slug(&self) -> String {
        self.business_name
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else if c == ' ' {
                    '-'
                } else {
                    '\0'
                }
            })
            .filter(|&c| c != '\0')
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[derive(Debug, Deserialize)]
pub struct ListingsFile {
    pub listings: Vec<BusinessListing>,
}

/// Load and validate the seeded directory listings from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation (empty names or duplicate slugs).
pub fn load_listings(path: &Path) -> Result<ListingsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ListingsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let listings_file: ListingsFile = serde_yaml::from_str(&content)?;

    validate_listings(&listings_file)?;

    Ok(listings_file)
}

fn validate_listings(listings_file: &ListingsFile) -> Result<(), ConfigError> {
    let mut seen_slugs = HashSet::new();

    for listing in &listings_file.listings {
        if listing.business_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "business name must be non-empty".to_string(),
            ));
        }

        if !(0.0..=5.0).contains(&listing.rating) {
            return Err(ConfigError::Validation(format!(
                "listing '{}' has invalid rating {}; must be in 0–5",
                listing.business_name, listing.rating
            )));
        }

        let slug = listing.slug();
        if !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate listing slug: '{}' (from '{}')",
                slug, listing.business_name
            )));
        }
    }

    Ok(())
}
