use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The value stored under `cookie-consent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentChoice {
    All,
    Necessary,
    Rejected,
    Custom,
}

impl ConsentChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            ConsentChoice::All => "all",
            ConsentChoice::Necessary => "necessary",
            ConsentChoice::Rejected => "rejected",
            ConsentChoice::Custom => "custom",
        }
    }
}

impl fmt::Display for ConsentChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsentChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ConsentChoice::All),
            "necessary" => Ok(ConsentChoice::Necessary),
            "rejected" => Ok(ConsentChoice::Rejected),
            "custom" => Ok(ConsentChoice::Custom),
            other => Err(format!("unknown consent value: {}", other)),
        }
    }
}

/// Per-category flags stored as JSON under `cookie-consent-details`.
/// Necessary cookies cannot be declined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentCategories {
    #[serde(default = "always")]
    pub necessary: bool,
    #[serde(default)]
    pub analytics: bool,
    #[serde(default)]
    pub marketing: bool,
}

fn always() -> bool {
    true
}

impl ConsentCategories {
    pub fn optional(analytics: bool, marketing: bool) -> Self {
        Self {
            necessary: true,
            analytics,
            marketing,
        }
    }

    /// Implied flags for the fixed choices.
    pub fn implied_by(choice: ConsentChoice) -> Self {
        match choice {
            ConsentChoice::All => Self::optional(true, true),
            _ => Self::optional(false, false),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsentRecord {
    pub choice: ConsentChoice,
    pub categories: ConsentCategories,
    /// Absent only when reading a record written without a timestamp.
    pub decided_at: Option<DateTime<Utc>>,
}

impl ConsentRecord {
    pub fn new(choice: ConsentChoice, now: DateTime<Utc>) -> Self {
        Self {
            choice,
            categories: ConsentCategories::implied_by(choice),
            decided_at: Some(now),
        }
    }

    pub fn custom(analytics: bool, marketing: bool, now: DateTime<Utc>) -> Self {
        Self {
            choice: ConsentChoice::Custom,
            categories: ConsentCategories::optional(analytics, marketing),
            decided_at: Some(now),
        }
    }
}

/// What the banner is showing. `Hidden` is terminal until storage is cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerState {
    Hidden,
    Shown,
    Customizing { analytics: bool, marketing: bool },
}

impl BannerState {
    pub fn initial(has_decision: bool) -> Self {
        if has_decision {
            BannerState::Hidden
        } else {
            BannerState::Shown
        }
    }

    pub fn open_settings(self) -> Self {
        match self {
            BannerState::Shown => BannerState::Customizing {
                analytics: false,
                marketing: false,
            },
            other => other,
        }
    }

    pub fn close_settings(self) -> Self {
        match self {
            BannerState::Customizing { .. } => BannerState::Shown,
            other => other,
        }
    }

    pub fn toggle_analytics(self) -> Self {
        match self {
            BannerState::Customizing { analytics, marketing } => BannerState::Customizing {
                analytics: !analytics,
                marketing,
            },
            other => other,
        }
    }

    pub fn toggle_marketing(self) -> Self {
        match self {
            BannerState::Customizing { analytics, marketing } => BannerState::Customizing {
                analytics,
                marketing: !marketing,
            },
            other => other,
        }
    }

    /// The record "Save preferences" commits, if the settings panel is open.
    pub fn custom_record(self, now: DateTime<Utc>) -> Option<ConsentRecord> {
        match self {
            BannerState::Customizing { analytics, marketing } => Some(ConsentRecord::custom(analytics, marketing, now)),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn is_visible(self) -> bool {
        self != BannerState::Hidden
    }
}
