//! Plain-text rendering for CLI output.
//!
//! The terminal stands in for the marketplace view: the same shaped data,
//! printed instead of drawn. Failures never reach here — an empty state
//! renders the idle message.

use pulse_app::{best_price, merge_relevant_reviews, score_width, style_buckets, AppState};
use pulse_core::{BusinessListing, CollabMatch, InfluencerProfile};

/// A 20-char bar proportional to a 0–100 score.
fn score_bar(score: f32) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = (score_width(score) / 5.0).round().clamp(0.0, 20.0) as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled))
}

pub(crate) fn print_search_result(state: &AppState, query: &str) {
    if let Some(insight) = state.insight() {
        println!("{} — {}", insight.name, insight.category);
        println!("Pulse score {} {:.0}%", score_bar(insight.brand_score), insight.brand_score);
        if !insight.description.is_empty() {
            println!("\"{}\"", insight.description);
        }

        if let Some(best) = best_price(insight) {
            println!("\nBest value: {} at {}", best.price, best.store);
        }
        for price in insight.price_comparison.iter().skip(1) {
            let stock = if price.availability { "in stock" } else { "out of stock" };
            println!("            {} at {} ({stock})", price.price, price.store);
        }

        let sentiment = &insight.sentiment;
        if sentiment.total_reviews_analyzed > 0 {
            println!(
                "\nSentiment: {:.0}% positive / {:.0}% neutral / {:.0}% negative over {} reviews",
                sentiment.positive,
                sentiment.neutral,
                sentiment.negative,
                sentiment.total_reviews_analyzed
            );
        }

        let reviews = merge_relevant_reviews(state.local_reviews(), &insight.top_relevant_reviews);
        if !reviews.is_empty() {
            println!("\nTop reviews:");
            for review in reviews.iter().take(5) {
                println!("  {:.1}★ [{}] {} — {}", review.score, review.source, review.user, review.text);
            }
        }

        let buckets = style_buckets(&insight.similar_products);
        if !buckets.is_empty() {
            println!("\nAlternatives:");
            for (label, items) in buckets.labeled() {
                if items.is_empty() {
                    continue;
                }
                let names: Vec<&str> = items.iter().map(|p| p.name.as_str()).collect();
                println!("  {label}: {}", names.join(", "));
            }
        }
    } else if let Some(brand) = state.brand_insight() {
        println!("{} — {}", brand.brand_name, brand.industry);
        println!(
            "Market trust {} {:.0}%",
            score_bar(brand.market_trust_score),
            brand.market_trust_score
        );
        if !brand.description.is_empty() {
            println!("\"{}\"", brand.description);
        }

        if !brand.product_catalog.is_empty() {
            println!("\nCatalog:");
            for product in &brand.product_catalog {
                println!(
                    "  {} ({}) — trust {:.0}%",
                    product.name, product.category, product.trust_pulse
                );
            }
        }
        if !brand.web_mentions.is_empty() {
            println!("\nWeb mentions:");
            for mention in brand.web_mentions.iter().take(5) {
                println!("  [{}] {} — {}", mention.source, mention.user, mention.text);
            }
        }
    } else {
        println!("No pulse found for \"{query}\" — try another search.");
    }
}

pub(crate) fn print_listings(listings: &[&BusinessListing], category: &str) {
    if listings.is_empty() {
        println!("No businesses found in category \"{category}\".");
        return;
    }
    for listing in listings {
        let badge = if listing.is_verified { " ✓" } else { "" };
        println!(
            "{}{badge} ({}) — {:.1}★ — {}",
            listing.business_name, listing.category, listing.rating, listing.location
        );
        if !listing.description.is_empty() {
            println!("    {}", listing.description);
        }
    }
}

pub(crate) fn print_influencers(profiles: &[InfluencerProfile]) {
    if profiles.is_empty() {
        println!("No influencers identified.");
        return;
    }
    for profile in profiles {
        println!(
            "{} {} — trust {:.0}% — {} followers",
            profile.name, profile.handle, profile.trust_score, profile.followers
        );
    }
}

pub(crate) fn print_collab_matches(matches: &[CollabMatch]) {
    if matches.is_empty() {
        println!("No collaboration matches found.");
        return;
    }
    for matched in matches {
        println!(
            "{} ({}) — match {:.0}% — reach {}",
            matched.name, matched.category, matched.matched_pulse, matched.reach
        );
        if !matched.description.is_empty() {
            println!("    {}", matched.description);
        }
    }
}
