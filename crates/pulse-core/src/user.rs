//! Ephemeral session identity.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Facebook,
    Guest,
}

/// A signed-in user. Lives only in session state; there is no account
/// backend. Capability flags gate UI affordances such as review submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub provider: Provider,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_blogger: bool,
    #[serde(default)]
    pub is_influencer: bool,
    #[serde(default)]
    pub influence_score: Option<f32>,
}

impl User {
    /// A throwaway guest identity with no capabilities.
    #[must_use]
    pub fn guest(name: &str) -> Self {
        Self {
            id: format!("guest-{}", name.to_lowercase().replace(' ', "-")),
            name: name.to_owned(),
            email: String::new(),
            provider: Provider::Guest,
            is_verified: false,
            is_blogger: false,
            is_influencer: false,
            influence_score: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_has_no_capabilities() {
        let user = User::guest("Ada Lovelace");
        assert_eq!(user.provider, Provider::Guest);
        assert!(!user.is_verified);
        assert!(!user.is_blogger);
        assert_eq!(user.id, "guest-ada-lovelace");
    }
}
