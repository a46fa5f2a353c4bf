//! Application state: the one place page-session state lives.

use serde::{Deserialize, Serialize};

use crate::recipe::{FilterToken, Recipe, Theme};

/// Cached per-card view, used only for filter predicate evaluation. Never
/// written back to the record it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSummary {
    pub id: String,
    pub category: String,
    pub total_time: u32,
}

impl CardSummary {
    pub fn of(r: &Recipe) -> Self {
        Self {
            id: r.id.clone(),
            category: r.category.clone(),
            total_time: r.total_time(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub theme: Theme,
    pub menu_open: bool,
    pub contact: ContactForm,
    /// Projected records from the last successful card-list load.
    pub records: Vec<Recipe>,
    /// One summary unit per record, in document order.
    pub cards: Vec<CardSummary>,
    /// Exactly one filter token is active at a time.
    pub filter: FilterToken,
    /// At most one detail view open at a time.
    pub open_detail: Option<String>,
    /// Monotonic counter tagging detail fetches, for log correlation.
    pub seq: u64,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            menu_open: false,
            contact: ContactForm::default(),
            records: Vec::new(),
            cards: Vec::new(),
            filter: FilterToken::All,
            open_detail: None,
            seq: 0,
        }
    }

    /// Ids of the summary units visible under the active filter.
    pub fn visible_ids(&self, quick_max: u32) -> Vec<&str> {
        self.cards
            .iter()
            .filter(|c| self.filter.matches(&c.category, c.total_time, quick_max))
            .map(|c| c.id.as_str())
            .collect()
    }
}
