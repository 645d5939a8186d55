//! Tagged fetch results.
//!
//! A fetch resolves to exactly one of: a valid record, "the model found
//! nothing", or a failure with a preserved reason. Callers that only care
//! about the neutral empty-state behavior collapse the outcome with
//! [`FetchOutcome::into_found`]; the reason has already been logged by the
//! fetch layer by then.

use thiserror::Error;

use pulse_genai::GenAiError;

/// Why a fetch failed. Distinguished so diagnostics survive the collapse
/// to the user-visible empty state.
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// Transport-level failure: DNS, connect, TLS, timeout.
    #[error("network failure: {0}")]
    Network(String),

    /// The model API rejected the call.
    #[error("model API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The model answered, but the payload did not match the declared schema.
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    /// The model answered with no usable content at all.
    #[error("model returned no usable content")]
    EmptyResponse,
}

impl From<GenAiError> for FetchFailure {
    fn from(err: GenAiError) -> Self {
        match err {
            GenAiError::Http(e) => FetchFailure::Network(e.to_string()),
            GenAiError::Api { status, message } => FetchFailure::Api { status, message },
            GenAiError::Deserialize { context, source } => {
                FetchFailure::SchemaMismatch(format!("{context}: {source}"))
            }
            GenAiError::EmptyResponse => FetchFailure::EmptyResponse,
        }
    }
}

/// The result of one insight fetch.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    /// A record that passed the identity gate.
    Found(T),
    /// The model responded but had no result (missing identity field).
    Empty,
    /// The call failed; the reason is preserved for logging.
    Failed(FetchFailure),
}

impl<T> FetchOutcome<T> {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, FetchOutcome::Found(_))
    }

    /// Collapse to the neutral `Option` the presentation layer renders from.
    /// `Empty` and `Failed` both become `None`.
    #[must_use]
    pub fn into_found(self) -> Option<T> {
        match self {
            FetchOutcome::Found(value) => Some(value),
            FetchOutcome::Empty | FetchOutcome::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn as_found(&self) -> Option<&T> {
        match self {
            FetchOutcome::Found(value) => Some(value),
            FetchOutcome::Empty | FetchOutcome::Failed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_collapses_to_some() {
        assert_eq!(FetchOutcome::Found(7).into_found(), Some(7));
    }

    #[test]
    fn empty_and_failed_collapse_to_none() {
        assert_eq!(FetchOutcome::<i32>::Empty.into_found(), None);
        assert_eq!(
            FetchOutcome::<i32>::Failed(FetchFailure::EmptyResponse).into_found(),
            None
        );
    }

    #[test]
    fn genai_errors_map_to_distinct_reasons() {
        let api = GenAiError::Api {
            status: 429,
            message: "quota".to_owned(),
        };
        assert!(matches!(
            FetchFailure::from(api),
            FetchFailure::Api { status: 429, .. }
        ));

        let parse_err = serde_json::from_str::<()>("nope").unwrap_err();
        let deser = GenAiError::Deserialize {
            context: "test".to_owned(),
            source: parse_err,
        };
        assert!(matches!(
            FetchFailure::from(deser),
            FetchFailure::SchemaMismatch(_)
        ));

        assert!(matches!(
            FetchFailure::from(GenAiError::EmptyResponse),
            FetchFailure::EmptyResponse
        ));
    }
}
