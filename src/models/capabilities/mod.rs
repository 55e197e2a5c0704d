// Capabilities module
// Subscription tier and the feature gates derived from it

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Free,
    Pro,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Free => write!(f, "free"),
            Tier::Pro => write!(f, "pro"),
        }
    }
}

/// Feature gates resolved once from the account tier and handed to every
/// component that needs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub can_view_future_dates: bool,
    pub can_plan_future_meals: bool,
    pub can_view_nutrition_history: bool,
}

impl Capabilities {
    pub fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Free => Self {
                can_view_future_dates: false,
                can_plan_future_meals: false,
                can_view_nutrition_history: false,
            },
            Tier::Pro => Self {
                can_view_future_dates: true,
                can_plan_future_meals: true,
                can_view_nutrition_history: true,
            },
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::for_tier(Tier::Free)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_tier_has_no_future_access() {
        let caps = Capabilities::for_tier(Tier::Free);
        assert!(!caps.can_view_future_dates);
        assert!(!caps.can_plan_future_meals);
        assert_eq!(caps, Capabilities::default());
    }

    #[test]
    fn test_pro_tier_unlocks_everything() {
        let caps = Capabilities::for_tier(Tier::Pro);
        assert!(caps.can_view_future_dates);
        assert!(caps.can_plan_future_meals);
        assert!(caps.can_view_nutrition_history);
    }

    #[test]
    fn test_tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::Pro).unwrap(), "\"pro\"");
        let tier: Tier = serde_json::from_str("\"free\"").unwrap();
        assert_eq!(tier, Tier::Free);
    }
}
