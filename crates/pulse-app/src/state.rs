//! The session state store.
//!
//! One `AppState` per session. Every mutation is a named transition method;
//! nothing outside this crate touches the fields directly. There is no
//! persistence: dropping the state is the reload semantics.

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use pulse_core::{
    BlogPost, BrandInsight, BusinessListing, ProductInsight, SocialComment, Source, User,
};
use pulse_insight::{FetchOutcome, SearchOutcome};

/// The top-level navigation views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Marketplace,
    Business,
    Influencers,
    CollabHub,
    CreatorHub,
}

/// Identifies one search request. Tickets are monotonic; only the most
/// recently issued ticket may mutate state when its response arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// Synchronous boundary-validation failures for local submissions. The only
/// error class that is actively prevented rather than tolerated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("sign in to submit")]
    LoginRequired,

    #[error("review text must be non-empty")]
    EmptyText,

    #[error("review score must be between 1 and 5")]
    ScoreOutOfRange,

    #[error("business name must be non-empty")]
    MissingBusinessName,

    #[error("blogger status required to publish")]
    BloggerRequired,
}

/// Input for a locally created directory listing.
#[derive(Debug, Clone, Default)]
pub struct BusinessDraft {
    pub business_name: String,
    pub category: String,
    pub description: String,
    pub slogan: Option<String>,
    pub location: String,
    pub website: Option<String>,
    pub contact: String,
}

/// In-memory session state.
#[derive(Debug, Default)]
pub struct AppState {
    insight: Option<ProductInsight>,
    brand_insight: Option<BrandInsight>,
    local_reviews: Vec<SocialComment>,
    businesses: Vec<BusinessListing>,
    posts: Vec<BlogPost>,
    current_user: Option<User>,
    view: View,
    loading: bool,
    tickets_issued: u64,
}

impl AppState {
    /// Fresh session state with the seeded directory listings.
    #[must_use]
    pub fn new(seeded_listings: Vec<BusinessListing>) -> Self {
        Self {
            businesses: seeded_listings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn insight(&self) -> Option<&ProductInsight> {
        self.insight.as_ref()
    }

    #[must_use]
    pub fn brand_insight(&self) -> Option<&BrandInsight> {
        self.brand_insight.as_ref()
    }

    #[must_use]
    pub fn local_reviews(&self) -> &[SocialComment] {
        &self.local_reviews
    }

    #[must_use]
    pub fn businesses(&self) -> &[BusinessListing] {
        &self.businesses
    }

    #[must_use]
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Start a new search: clears both insights and local reviews, switches
    /// to the marketplace view, and returns the ticket the eventual response
    /// must present.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.tickets_issued += 1;
        self.view = View::Marketplace;
        self.loading = true;
        self.insight = None;
        self.brand_insight = None;
        self.local_reviews.clear();
        SearchTicket(self.tickets_issued)
    }

    /// Apply a resolved search.
    ///
    /// A ticket older than the latest issued one belongs to a superseded
    /// search; its outcome is discarded untouched. The latest ticket stores
    /// `Found` payloads and leaves the empty/idle state for anything else.
    pub fn resolve_search(&mut self, ticket: SearchTicket, outcome: SearchOutcome) {
        if ticket.0 != self.tickets_issued {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.tickets_issued,
                "stale search response discarded"
            );
            return;
        }

        self.loading = false;
        match outcome {
            SearchOutcome::Product(fetch) => self.insight = fetch.into_found(),
            SearchOutcome::Brand(fetch) => self.brand_insight = fetch.into_found(),
        }
    }

    /// Convenience for the common single-branch case in tests and drivers.
    pub fn resolve_product(&mut self, ticket: SearchTicket, fetch: FetchOutcome<ProductInsight>) {
        self.resolve_search(ticket, SearchOutcome::Product(fetch));
    }

    /// Submit a review against the current insight.
    ///
    /// Validated synchronously at the boundary: requires a signed-in user,
    /// non-empty text, and a score in 1–5. On success the comment is
    /// prepended (newest first) to the session's local reviews and a
    /// reference to it is returned. Never issues a network call.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] when validation fails; state is untouched.
    pub fn submit_review(&mut self, text: &str, score: f32) -> Result<&SocialComment, SubmitError> {
        let user = self.current_user.as_ref().ok_or(SubmitError::LoginRequired)?;

        if text.trim().is_empty() {
            return Err(SubmitError::EmptyText);
        }
        if !(1.0..=5.0).contains(&score) {
            return Err(SubmitError::ScoreOutOfRange);
        }

        let review = SocialComment {
            id: Some(Uuid::new_v4().to_string()),
            user: user.name.clone(),
            text: text.trim().to_string(),
            score,
            detailed_rating: None,
            date: Utc::now().format("%Y-%m-%d").to_string(),
            source: Source::TrustPulse,
            source_url: None,
            is_verified: Some(user.is_verified),
            is_buyer: None,
            is_collaboration: None,
            video_url: None,
            keywords: Vec::new(),
            replies: Vec::new(),
        };

        self.local_reviews.insert(0, review);
        Ok(&self.local_reviews[0])
    }

    /// Create a directory listing from the studio wizard.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::MissingBusinessName`] for a blank name.
    pub fn add_business(&mut self, draft: BusinessDraft) -> Result<&BusinessListing, SubmitError> {
        if draft.business_name.trim().is_empty() {
            return Err(SubmitError::MissingBusinessName);
        }

        let listing = BusinessListing {
            id: Uuid::new_v4().to_string(),
            business_name: draft.business_name.trim().to_string(),
            category: draft.category,
            description: draft.description,
            slogan: draft.slogan,
            location: draft.location,
            address: None,
            website: draft.website,
            phone: None,
            contact: draft.contact,
            rating: 0.0,
            is_verified: false,
            image: String::new(),
            verified_reviews: Vec::new(),
        };

        self.businesses.insert(0, listing);
        Ok(&self.businesses[0])
    }

    /// Publish a blog post. Requires a signed-in user with blogger status.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] when the gate or validation fails.
    pub fn publish_post(
        &mut self,
        title: &str,
        content: &str,
        category: &str,
    ) -> Result<&BlogPost, SubmitError> {
        let user = self.current_user.as_ref().ok_or(SubmitError::LoginRequired)?;
        if !user.is_blogger {
            return Err(SubmitError::BloggerRequired);
        }
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(SubmitError::EmptyText);
        }

        let words = content.split_whitespace().count();
        let post = BlogPost {
            id: Uuid::new_v4().to_string(),
            title: title.trim().to_string(),
            author: user.name.clone(),
            content: content.to_string(),
            category: category.to_string(),
            date: Utc::now().format("%Y-%m-%d").to_string(),
            is_verified: user.is_verified,
            read_time: format!("{} min read", (words / 200).max(1)),
            likes: 0,
            video_url: None,
        };

        self.posts.insert(0, post);
        Ok(&self.posts[0])
    }

    pub fn login(&mut self, user: User) {
        self.current_user = Some(user);
    }

    pub fn logout(&mut self) {
        self.current_user = None;
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// Navigate home: drop both insights and return to the marketplace.
    /// Directory listings, posts, and the signed-in user survive.
    pub fn clear_search(&mut self) {
        self.insight = None;
        self.brand_insight = None;
        self.local_reviews.clear();
        self.loading = false;
        self.view = View::Marketplace;
    }
}
