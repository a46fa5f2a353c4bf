//! recipefx: a recipe-page core rebuilt as an explicit state machine.
//!
//! Fetches a static XML catalog of recipes, projects it into records,
//! renders summary cards and a detail overlay as HTML, and drives theme,
//! menu, contact-form, and filter interactions through discrete commands
//! consumed by a pure reducer.

pub mod app;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod recipe;
pub mod render;
pub mod source;
pub mod storage;
