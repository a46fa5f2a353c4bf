//! Commands and effects: the full vocabulary between the driver and the
//! reducer.

use crate::fetch::FetchError;
use crate::logging::Level;
use crate::recipe::{FilterToken, Recipe, Theme};

/// A discrete user interaction or I/O completion.
#[derive(Debug)]
pub enum Command {
    ToggleTheme,
    ToggleMenu,
    CloseMenu,
    SubmitContact { name: String, email: String },
    /// Completion of the page-load card-list fetch.
    RecipesLoaded(Result<Vec<Recipe>, FetchError>),
    SelectFilter(FilterToken),
    OpenDetail(String),
    /// Completion of one detail fetch. Arrival order decides which view
    /// ends up in the container when opens overlap.
    DetailLoaded {
        id: String,
        result: Result<Vec<Recipe>, FetchError>,
    },
    /// All three dismissal paths (control, cancel key, outside activation)
    /// and both activation modalities collapse into this one command.
    CloseDetail,
}

/// Side effects the reducer requests instead of performing.
#[derive(Debug, PartialEq)]
pub enum Effect {
    /// Issue an independent fetch for a detail open.
    FetchDetail { id: String, seq: u64 },
    PersistTheme(Theme),
    ApplyTheme(Theme),
    /// Replace the card-list container (full rebuild).
    RenderCards(String),
    /// Replace the detail container and show the overlay.
    RenderDetail(String),
    HideDetail,
    /// Move accessibility focus to the dismissal control.
    FocusDismiss,
    /// Replace the card-list container with a static error message.
    RenderListError(String),
    /// Surface a user-facing notice, e.g. the contact-form confirmation.
    Notice(String),
    Log { level: Level, msg: String },
}
