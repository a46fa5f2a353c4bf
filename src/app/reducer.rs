//! Pure reducer: (AppState, Command) -> effects.
//!
//! All state transitions happen here; the driver executes the returned
//! effects and feeds fetch completions back in as commands.

use crate::config::Config;
use crate::logging::Level;
use crate::render;
use crate::source;

use super::events::{Command, Effect};
use super::state::{AppState, CardSummary};

pub fn reduce(state: &mut AppState, cmd: Command, cfg: &Config) -> Vec<Effect> {
    let mut effects = Vec::new();

    match cmd {
        Command::ToggleTheme => {
            state.theme = state.theme.toggle();
            effects.push(Effect::PersistTheme(state.theme));
            effects.push(Effect::ApplyTheme(state.theme));
        }

        Command::ToggleMenu => {
            state.menu_open = !state.menu_open;
        }

        Command::CloseMenu => {
            state.menu_open = false;
        }

        Command::SubmitContact { name, email } => {
            effects.push(Effect::Notice(format!(
                "Thank you {name}! Your message has been received. \
                 We'll contact you at {email} soon."
            )));
            state.contact.name.clear();
            state.contact.email.clear();
        }

        Command::RecipesLoaded(Ok(records)) => {
            state.cards = records.iter().map(CardSummary::of).collect();
            state.records = records;
            effects.push(Effect::RenderCards(render::render_cards(
                &state.records,
                &state.filter,
                cfg.quick_max_minutes,
            )));
        }

        Command::RecipesLoaded(Err(err)) => {
            effects.push(Effect::Log {
                level: Level::Error,
                msg: format!("card list load failed: {err}"),
            });
            effects.push(Effect::RenderListError(render::render_error(&err)));
        }

        Command::SelectFilter(token) => {
            state.filter = token;
            effects.push(Effect::Log {
                level: Level::Debug,
                msg: format!(
                    "filter {} visible={}",
                    state.filter.as_str(),
                    state.visible_ids(cfg.quick_max_minutes).len()
                ),
            });
            effects.push(Effect::RenderCards(render::render_cards(
                &state.records,
                &state.filter,
                cfg.quick_max_minutes,
            )));
        }

        Command::OpenDetail(id) => {
            // Each open issues its own independent fetch of the document.
            state.seq += 1;
            effects.push(Effect::FetchDetail { id, seq: state.seq });
        }

        Command::DetailLoaded { id, result } => match result {
            Ok(records) => match source::find_recipe(&records, &id) {
                Some(recipe) => {
                    state.open_detail = Some(recipe.id.clone());
                    effects.push(Effect::RenderDetail(render::render_detail(recipe)));
                    effects.push(Effect::FocusDismiss);
                }
                None => {
                    // Lookup miss: surfaced in the log, but the view state
                    // (including any open detail) stays untouched.
                    effects.push(Effect::Log {
                        level: Level::Warn,
                        msg: format!("detail lookup miss: id={id}"),
                    });
                }
            },
            Err(err) => {
                effects.push(Effect::Log {
                    level: Level::Warn,
                    msg: format!("detail load failed: id={id} err={err}"),
                });
            }
        },

        Command::CloseDetail => {
            // Idempotent: dismissing an already-closed view does nothing.
            if state.open_detail.take().is_some() {
                effects.push(Effect::HideDetail);
            }
        }
    }

    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use crate::recipe::{FilterToken, Recipe, Theme};
    use crate::source::{parse_document, SourceError};

    const DOC: &str = r#"<recipes>
        <recipe id="1" category="quick">
            <name>Avocado Toast</name>
            <description>Fast.</description>
            <image>a.jpg</image>
            <prepTime>5</prepTime><cookTime>10</cookTime>
            <servings>2</servings><cost currency="KES">150</cost>
            <difficulty>Easy</difficulty>
            <ingredients><ingredient>bread</ingredient></ingredients>
            <steps><step>Toast.</step></steps>
            <tips><tip>Ripe fruit.</tip></tips>
        </recipe>
        <recipe id="2" category="global">
            <name>Beef Stew</name>
            <description>Slow.</description>
            <image>b.jpg</image>
            <prepTime>20</prepTime><cookTime>20</cookTime>
            <servings>4</servings><cost currency="KES">600</cost>
            <difficulty>Medium</difficulty>
            <ingredients><ingredient>beef</ingredient></ingredients>
            <steps><step>Simmer.</step></steps>
            <tips><tip>Rest.</tip></tips>
        </recipe>
    </recipes>"#;

    fn records() -> Vec<Recipe> {
        parse_document(DOC).unwrap()
    }

    fn loaded_state() -> (AppState, Config) {
        let mut state = AppState::new(Theme::Light);
        let cfg = Config::default();
        reduce(&mut state, Command::RecipesLoaded(Ok(records())), &cfg);
        (state, cfg)
    }

    fn parse_error() -> FetchError {
        FetchError::Source(SourceError::MissingField {
            index: 0,
            field: "name",
        })
    }

    #[test]
    fn test_theme_toggle_round_trip() {
        let mut state = AppState::new(Theme::Light);
        let cfg = Config::default();

        let effects = reduce(&mut state, Command::ToggleTheme, &cfg);
        assert_eq!(state.theme, Theme::Dark);
        assert!(effects.contains(&Effect::PersistTheme(Theme::Dark)));
        assert!(effects.contains(&Effect::ApplyTheme(Theme::Dark)));

        reduce(&mut state, Command::ToggleTheme, &cfg);
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut state = AppState::new(Theme::Light);
        let cfg = Config::default();

        reduce(&mut state, Command::ToggleMenu, &cfg);
        assert!(state.menu_open);
        reduce(&mut state, Command::CloseMenu, &cfg);
        assert!(!state.menu_open);
        // Closing a closed menu stays closed.
        reduce(&mut state, Command::CloseMenu, &cfg);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_contact_submit_notices_and_resets() {
        let mut state = AppState::new(Theme::Light);
        state.contact.name = "Wanjiku".to_string();
        state.contact.email = "w@example.com".to_string();
        let cfg = Config::default();

        let effects = reduce(
            &mut state,
            Command::SubmitContact {
                name: "Wanjiku".to_string(),
                email: "w@example.com".to_string(),
            },
            &cfg,
        );

        assert!(matches!(
            &effects[0],
            Effect::Notice(msg) if msg.contains("Wanjiku") && msg.contains("w@example.com")
        ));
        assert!(state.contact.name.is_empty());
        assert!(state.contact.email.is_empty());
    }

    #[test]
    fn test_load_builds_one_card_per_record() {
        let (state, _cfg) = loaded_state();
        assert_eq!(state.cards.len(), 2);
        assert_eq!(state.cards[0].id, "1");
        assert_eq!(state.cards[0].total_time, 15);
        assert_eq!(state.cards[1].total_time, 40);
    }

    #[test]
    fn test_load_failure_renders_static_message() {
        let mut state = AppState::new(Theme::Light);
        let cfg = Config::default();
        let effects = reduce(&mut state, Command::RecipesLoaded(Err(parse_error())), &cfg);
        assert!(state.cards.is_empty());
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::RenderListError(html) if html.contains("Error parsing recipes")
        )));
    }

    #[test]
    fn test_select_filter_rerenders_with_predicate() {
        let (mut state, cfg) = loaded_state();

        let effects = reduce(
            &mut state,
            Command::SelectFilter(FilterToken::Quick),
            &cfg,
        );
        assert_eq!(state.filter, FilterToken::Quick);
        assert_eq!(state.visible_ids(cfg.quick_max_minutes), vec!["1"]);
        let html = effects
            .iter()
            .find_map(|e| match e {
                Effect::RenderCards(html) => Some(html),
                _ => None,
            })
            .unwrap();
        assert_eq!(html.matches("display:none").count(), 1);

        reduce(
            &mut state,
            Command::SelectFilter(FilterToken::Category("global".to_string())),
            &cfg,
        );
        assert_eq!(state.visible_ids(cfg.quick_max_minutes), vec!["2"]);
    }

    #[test]
    fn test_open_detail_issues_independent_fetches() {
        let (mut state, cfg) = loaded_state();

        let first = reduce(&mut state, Command::OpenDetail("1".to_string()), &cfg);
        let second = reduce(&mut state, Command::OpenDetail("2".to_string()), &cfg);

        assert_eq!(
            first,
            vec![Effect::FetchDetail {
                id: "1".to_string(),
                seq: 1
            }]
        );
        assert_eq!(
            second,
            vec![Effect::FetchDetail {
                id: "2".to_string(),
                seq: 2
            }]
        );
        // Nothing opens until a completion arrives.
        assert!(state.open_detail.is_none());
    }

    #[test]
    fn test_detail_loaded_opens_and_focuses_dismissal() {
        let (mut state, cfg) = loaded_state();

        let effects = reduce(
            &mut state,
            Command::DetailLoaded {
                id: "2".to_string(),
                result: Ok(records()),
            },
            &cfg,
        );

        assert_eq!(state.open_detail.as_deref(), Some("2"));
        assert!(matches!(
            &effects[0],
            Effect::RenderDetail(html) if html.contains("Beef Stew")
        ));
        assert_eq!(effects[1], Effect::FocusDismiss);
    }

    #[test]
    fn test_lookup_miss_leaves_open_view_unchanged() {
        let (mut state, cfg) = loaded_state();
        reduce(
            &mut state,
            Command::DetailLoaded {
                id: "1".to_string(),
                result: Ok(records()),
            },
            &cfg,
        );
        assert_eq!(state.open_detail.as_deref(), Some("1"));

        let effects = reduce(
            &mut state,
            Command::DetailLoaded {
                id: "404".to_string(),
                result: Ok(records()),
            },
            &cfg,
        );
        assert_eq!(state.open_detail.as_deref(), Some("1"));
        assert!(effects
            .iter()
            .all(|e| matches!(e, Effect::Log { level: Level::Warn, .. })));
    }

    #[test]
    fn test_overlapping_detail_fetches_last_writer_wins() {
        let (mut state, cfg) = loaded_state();

        // Two opens in flight; completions arrive out of open order.
        reduce(&mut state, Command::OpenDetail("1".to_string()), &cfg);
        reduce(&mut state, Command::OpenDetail("2".to_string()), &cfg);

        reduce(
            &mut state,
            Command::DetailLoaded {
                id: "2".to_string(),
                result: Ok(records()),
            },
            &cfg,
        );
        reduce(
            &mut state,
            Command::DetailLoaded {
                id: "1".to_string(),
                result: Ok(records()),
            },
            &cfg,
        );

        // Whichever completion lands last owns the container.
        assert_eq!(state.open_detail.as_deref(), Some("1"));
    }

    #[test]
    fn test_detail_fetch_failure_keeps_state() {
        let (mut state, cfg) = loaded_state();
        let effects = reduce(
            &mut state,
            Command::DetailLoaded {
                id: "1".to_string(),
                result: Err(parse_error()),
            },
            &cfg,
        );
        assert!(state.open_detail.is_none());
        assert!(matches!(effects[0], Effect::Log { level: Level::Warn, .. }));
    }

    #[test]
    fn test_close_detail_idempotent() {
        let (mut state, cfg) = loaded_state();
        reduce(
            &mut state,
            Command::DetailLoaded {
                id: "1".to_string(),
                result: Ok(records()),
            },
            &cfg,
        );

        let effects = reduce(&mut state, Command::CloseDetail, &cfg);
        assert!(state.open_detail.is_none());
        assert_eq!(effects, vec![Effect::HideDetail]);

        // Second dismissal is a no-op, whichever path triggered it.
        let effects = reduce(&mut state, Command::CloseDetail, &cfg);
        assert!(effects.is_empty());
    }
}
