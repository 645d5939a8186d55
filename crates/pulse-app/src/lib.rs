//! Application state and presentation shaping for TrustPulse.
//!
//! [`state::AppState`] is the single in-memory store for a session: current
//! insight, local submissions, directory listings, the signed-in user, and
//! the active view. All mutation happens through named transition methods;
//! overlapping searches are serialized by monotonic tickets so the latest
//! search always wins regardless of response arrival order.
//!
//! [`shape`] holds the pure view transformations applied on every render:
//! style bucketing, review merging, directory filtering, score widths.

pub mod shape;
pub mod state;

pub use shape::{
    best_price, filter_listings, listing_matches, merge_relevant_reviews, score_width,
    style_buckets, StyleBuckets,
};
pub use state::{AppState, BusinessDraft, SearchTicket, SubmitError, View};
