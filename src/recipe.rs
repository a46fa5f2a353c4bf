//! Recipe records and the small closed vocabulary around them: filter
//! tokens and the persisted theme flag.

use serde::{Deserialize, Serialize};

/// One recipe as projected from the data source. Read-only to the rest of
/// the system; nothing is ever written back to a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub category: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub difficulty: String,
    /// Minutes.
    pub prep_time: u32,
    /// Minutes.
    pub cook_time: u32,
    pub servings: u32,
    /// Kept as the source's numeric string, displayed verbatim.
    pub cost: String,
    pub cost_currency: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub tips: Vec<String>,
}

impl Recipe {
    pub fn total_time(&self) -> u32 {
        self.prep_time + self.cook_time
    }
}

/// Which visibility predicate is active over the card list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterToken {
    All,
    /// Total time at or under the configured quick threshold.
    Quick,
    /// Exact, case-sensitive category match.
    Category(String),
}

impl FilterToken {
    pub fn parse(token: &str) -> Self {
        match token {
            "all" => FilterToken::All,
            "quick" => FilterToken::Quick,
            other => FilterToken::Category(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterToken::All => "all",
            FilterToken::Quick => "quick",
            FilterToken::Category(c) => c,
        }
    }

    /// Visibility decision for one summary unit.
    pub fn matches(&self, category: &str, total_time: u32, quick_max: u32) -> bool {
        match self {
            FilterToken::All => true,
            FilterToken::Quick => total_time <= quick_max,
            FilterToken::Category(c) => category == c,
        }
    }
}

/// The single persisted user preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}
