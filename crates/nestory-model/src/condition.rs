//! Fixed condition vocabulary for inventory items.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Physical condition of an item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ItemCondition {
    New,
    LikeNew,
    Good,
    Fair,
    Poor,
}

impl ItemCondition {
    /// Fallback for condition text that matches no known keyword.
    ///
    /// Unknown text never blocks an otherwise-valid row; it degrades to
    /// this value instead.
    pub const DEFAULT: ItemCondition = ItemCondition::Good;

    /// All conditions, best first.
    pub const ALL: [ItemCondition; 5] = [
        ItemCondition::New,
        ItemCondition::LikeNew,
        ItemCondition::Good,
        ItemCondition::Fair,
        ItemCondition::Poor,
    ];

    /// Stable string key used in archives.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            ItemCondition::New => "new",
            ItemCondition::LikeNew => "like_new",
            ItemCondition::Good => "good",
            ItemCondition::Fair => "fair",
            ItemCondition::Poor => "poor",
        }
    }

    /// Human-readable name for tables and CSV export.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            ItemCondition::New => "New",
            ItemCondition::LikeNew => "Like New",
            ItemCondition::Good => "Good",
            ItemCondition::Fair => "Fair",
            ItemCondition::Poor => "Poor",
        }
    }
}

impl Default for ItemCondition {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ItemCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ItemCondition {
    type Err = String;

    /// Parses a stable key back into a condition. Free-text normalization
    /// lives in the parsing crate; this accepts exact keys only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemCondition::ALL
            .into_iter()
            .find(|condition| condition.key() == s)
            .ok_or_else(|| format!("unknown condition key: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_stable_keys() {
        for condition in ItemCondition::ALL {
            let json = serde_json::to_string(&condition).unwrap();
            assert_eq!(json, format!("\"{}\"", condition.key()));
            let back: ItemCondition = serde_json::from_str(&json).unwrap();
            assert_eq!(back, condition);
        }
    }

    #[test]
    fn key_round_trips_through_from_str() {
        for condition in ItemCondition::ALL {
            assert_eq!(condition.key().parse::<ItemCondition>(), Ok(condition));
        }
        assert!("pristine".parse::<ItemCondition>().is_err());
    }

    #[test]
    fn display_names_are_title_case() {
        assert_eq!(ItemCondition::LikeNew.to_string(), "Like New");
        assert_eq!(ItemCondition::Poor.to_string(), "Poor");
    }
}
