// Session module
// Logged-in user context passed explicitly to whatever needs it

use serde::{Deserialize, Serialize};

use crate::models::capabilities::{Capabilities, Tier};

/// Cached copy of the backend's user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub tier: Tier,
}

impl UserProfile {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        tier: Tier,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            tier,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
}

impl Session {
    pub fn login(&mut self, token: impl Into<String>, profile: UserProfile) {
        self.token = Some(token.into());
        self.profile = Some(profile);
    }

    /// Drop the token and cached profile, returning the profile that was
    /// logged in.
    pub fn logout(&mut self) -> Option<UserProfile> {
        self.token = None;
        self.profile.take()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Tier of the cached profile; anonymous sessions count as free.
    pub fn tier(&self) -> Tier {
        self.profile
            .as_ref()
            .map(|profile| profile.tier)
            .unwrap_or_default()
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::for_tier(self.tier())
    }

    /// Value for the `Authorization` header of backend requests.
    pub fn bearer_header(&self) -> Option<String> {
        self.token
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| format!("Bearer {}", t))
    }
}
