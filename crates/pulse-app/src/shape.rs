//! Pure view transformations over already-fetched data.
//!
//! Every function here is referentially transparent: same input, same
//! output, no hidden counters. Outputs are recomputed from current state on
//! every evaluation; callers may memoize for performance, never for
//! correctness.

use pulse_core::{BusinessListing, PricePoint, ProductInsight, SimilarProduct, SocialComment};

/// Similar products partitioned into the four fixed display categories.
///
/// Partitioning is total and exhaustive: every input item lands in exactly
/// one bucket, with unrecognized style categories routed to `casual`.
#[derive(Debug, Default)]
pub struct StyleBuckets<'a> {
    pub luxury: Vec<&'a SimilarProduct>,
    pub comfort: Vec<&'a SimilarProduct>,
    pub aesthetics: Vec<&'a SimilarProduct>,
    pub casual: Vec<&'a SimilarProduct>,
}

impl StyleBuckets<'_> {
    /// Total number of bucketed items; always equals the input length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.luxury.len() + self.comfort.len() + self.aesthetics.len() + self.casual.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Buckets in display order, paired with their labels.
    #[must_use]
    pub fn labeled(&self) -> [(&'static str, &[&SimilarProduct]); 4] {
        [
            ("Luxury", self.luxury.as_slice()),
            ("Comfort", self.comfort.as_slice()),
            ("Aesthetics", self.aesthetics.as_slice()),
            ("Casual", self.casual.as_slice()),
        ]
    }
}

/// Partition similar products by their own `style_category` field.
#[must_use]
pub fn style_buckets(similar: &[SimilarProduct]) -> StyleBuckets<'_> {
    let mut buckets = StyleBuckets::default();
    for product in similar {
        match product.style_category.as_str() {
            "Luxury" => buckets.luxury.push(product),
            "Comfort" => buckets.comfort.push(product),
            "Aesthetics" => buckets.aesthetics.push(product),
            _ => buckets.casual.push(product),
        }
    }
    buckets
}

/// Build the "relevant" review tab: locally authored reviews (newest first)
/// ahead of fetched reviews, each sublist keeping its own order. The
/// positive/negative tabs show fetched data only and bypass this merge.
#[must_use]
pub fn merge_relevant_reviews(
    local: &[SocialComment],
    fetched: &[SocialComment],
) -> Vec<SocialComment> {
    let mut merged = Vec::with_capacity(local.len() + fetched.len());
    merged.extend_from_slice(local);
    merged.extend_from_slice(fetched);
    merged
}

/// Whether one listing passes the directory filter.
///
/// Pure conjunction: case-insensitive substring match on name OR
/// description, AND (`category == "All"` OR exact category match). An empty
/// term always passes the search half.
#[must_use]
pub fn listing_matches(listing: &BusinessListing, term: &str, category: &str) -> bool {
    let term = term.to_lowercase();
    let matches_search = listing.business_name.to_lowercase().contains(&term)
        || listing.description.to_lowercase().contains(&term);
    let matches_category = category == "All" || listing.category == category;
    matches_search && matches_category
}

/// Filter directory listings by search term and category. No ranking.
#[must_use]
pub fn filter_listings<'a>(
    listings: &'a [BusinessListing],
    term: &str,
    category: &str,
) -> Vec<&'a BusinessListing> {
    listings
        .iter()
        .filter(|listing| listing_matches(listing, term, category))
        .collect()
}

/// Map a 0–100 metric to a proportional visual width percentage.
///
/// A direct linear identity; values outside the assumed 0–100 domain pass
/// through unguarded.
#[must_use]
pub fn score_width(score: f32) -> f32 {
    score
}

/// The best-value offer: the head of `price_comparison`, which the fetch
/// prompt orders best value first.
#[must_use]
pub fn best_price(insight: &ProductInsight) -> Option<&PricePoint> {
    insight.price_comparison.first()
}

#[cfg(test)]
mod tests {
    use pulse_core::Source;

    use super::*;

    fn similar(name: &str, style: &str) -> SimilarProduct {
        SimilarProduct {
            name: name.to_string(),
            image_url: String::new(),
            price_estimate: None,
            details: None,
            style_category: style.to_string(),
        }
    }

    fn comment(user: &str, text: &str) -> SocialComment {
        SocialComment {
            id: None,
            user: user.to_string(),
            text: text.to_string(),
            score: 4.0,
            detailed_rating: None,
            date: "2024-01-01".to_string(),
            source: Source::Internet,
            source_url: None,
            is_verified: None,
            is_buyer: None,
            is_collaboration: None,
            video_url: None,
            keywords: Vec::new(),
            replies: Vec::new(),
        }
    }

    fn listing(name: &str, description: &str, category: &str) -> BusinessListing {
        BusinessListing {
            id: String::new(),
            business_name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            slogan: None,
            location: String::new(),
            address: None,
            website: None,
            phone: None,
            contact: String::new(),
            rating: 4.5,
            is_verified: false,
            image: String::new(),
            verified_reviews: Vec::new(),
        }
    }

    #[test]
    fn buckets_route_known_categories() {
        let items = vec![
            similar("A", "Luxury"),
            similar("B", "Comfort"),
            similar("C", "Aesthetics"),
            similar("D", "Casual"),
        ];
        let buckets = style_buckets(&items);
        assert_eq!(buckets.luxury[0].name, "A");
        assert_eq!(buckets.comfort[0].name, "B");
        assert_eq!(buckets.aesthetics[0].name, "C");
        assert_eq!(buckets.casual[0].name, "D");
    }

    #[test]
    fn unknown_category_lands_in_casual() {
        let items = vec![similar("A", "Luxury"), similar("B", "Unknown")];
        let buckets = style_buckets(&items);
        assert_eq!(buckets.luxury.len(), 1);
        assert_eq!(buckets.casual.len(), 1);
        assert_eq!(buckets.casual[0].name, "B");
    }

    #[test]
    fn bucketing_is_total_and_exhaustive() {
        let items = vec![
            similar("A", "Luxury"),
            similar("B", ""),
            similar("C", "luxury"), // case mismatch is not a known bucket
            similar("D", "Comfort"),
            similar("E", "weird"),
        ];
        let buckets = style_buckets(&items);
        assert_eq!(buckets.len(), items.len());
        // Lowercase "luxury" is not the Luxury key; it falls back to Casual.
        assert!(buckets.casual.iter().any(|p| p.name == "C"));
    }

    #[test]
    fn bucketing_is_idempotent() {
        let items = vec![similar("A", "Luxury"), similar("B", "???")];
        let first = style_buckets(&items);
        let second = style_buckets(&items);
        assert_eq!(
            first.labeled().map(|(_, b)| b.len()),
            second.labeled().map(|(_, b)| b.len())
        );
        assert_eq!(first.casual[0].name, second.casual[0].name);
    }

    #[test]
    fn merge_puts_local_before_fetched_preserving_order() {
        let local = vec![comment("new-local", "n"), comment("old-local", "o")];
        let fetched = vec![comment("f1", "x"), comment("f2", "y")];
        let merged = merge_relevant_reviews(&local, &fetched);
        let users: Vec<&str> = merged.iter().map(|c| c.user.as_str()).collect();
        assert_eq!(users, vec!["new-local", "old-local", "f1", "f2"]);
    }

    #[test]
    fn merge_with_no_local_reviews_is_fetched_order() {
        let fetched = vec![comment("f1", "x"), comment("f2", "y")];
        let merged = merge_relevant_reviews(&[], &fetched);
        assert_eq!(merged, fetched);
    }

    #[test]
    fn merge_is_idempotent() {
        let local = vec![comment("l", "a")];
        let fetched = vec![comment("f", "b")];
        assert_eq!(
            merge_relevant_reviews(&local, &fetched),
            merge_relevant_reviews(&local, &fetched)
        );
    }

    #[test]
    fn filter_matches_name_substring_case_insensitive() {
        let listings = vec![listing("Lumina Dental", "Premium dentistry", "Health")];
        assert!(listing_matches(&listings[0], "dent", "All"));
        assert!(listing_matches(&listings[0], "LUMINA", "All"));
        assert_eq!(filter_listings(&listings, "dent", "All").len(), 1);
    }

    #[test]
    fn filter_matches_description_when_name_misses() {
        let entry = listing("EcoTech", "net-zero logistics consulting", "Services");
        assert!(listing_matches(&entry, "logistics", "All"));
    }

    #[test]
    fn filter_requires_both_halves() {
        let entry = listing("Lumina Dental", "Premium dentistry", "Health");
        // Search matches, category does not.
        assert!(!listing_matches(&entry, "dent", "Services"));
        // Category matches, search does not.
        assert!(!listing_matches(&entry, "plumbing", "Health"));
        // Both match.
        assert!(listing_matches(&entry, "dent", "Health"));
    }

    #[test]
    fn empty_term_passes_search_half() {
        let entry = listing("Lumina Dental", "Premium dentistry", "Health");
        assert!(listing_matches(&entry, "", "All"));
        assert!(listing_matches(&entry, "", "Health"));
        assert!(!listing_matches(&entry, "", "Services"));
    }

    #[test]
    fn score_width_is_linear_identity() {
        assert_eq!(score_width(0.0), 0.0);
        assert_eq!(score_width(42.5), 42.5);
        assert_eq!(score_width(100.0), 100.0);
    }

    #[test]
    fn best_price_is_list_head() {
        let insight: ProductInsight = serde_json::from_str(
            r#"{"name": "X", "priceComparison": [
                {"store": "First", "price": "$1"},
                {"store": "Second", "price": "$2"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(best_price(&insight).unwrap().store, "First");
    }

    #[test]
    fn best_price_empty_list_is_none() {
        let insight: ProductInsight = serde_json::from_str(r#"{"name": "X"}"#).unwrap();
        assert!(best_price(&insight).is_none());
    }
}
