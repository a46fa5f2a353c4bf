//! Event-driven page core.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Interactions │────►│   Commands   │────►│   Reducer    │
//! │ + completions│     │  (discrete)  │     │  (pure fn)   │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                                  │
//!                                                  ▼
//!                      ┌──────────────┐     ┌──────────────┐
//!                      │   Effects    │◄────│   AppState   │
//!                      │ (fetch/render│     │              │
//!                      │  /persist)   │     └──────────────┘
//!                      └──────────────┘
//! ```
//!
//! Every user action is a discrete command; completions of the two fetch
//! suspension points come back in as commands too. The reducer owns all
//! state transitions; the driver executes the effects it emits. Overlapping
//! detail fetches are therefore visible as ordinary command interleavings:
//! the last completion to arrive wins the detail container.

pub mod events;
pub mod reducer;
pub mod state;
