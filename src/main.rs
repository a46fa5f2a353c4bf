//! Driver loop: translates input lines into commands, runs the reducer,
//! and executes the effects it emits. Rendered HTML goes to file-backed
//! container sinks under the site directory; everything else is logged.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, oneshot};

use recipefx::app::events::{Command, Effect};
use recipefx::app::reducer::reduce;
use recipefx::app::state::AppState;
use recipefx::config::Config;
use recipefx::fetch::{source_for, DocumentSource};
use recipefx::logging::{json_log, obj, v_num, v_str, Domain, Level};
use recipefx::recipe::FilterToken;
use recipefx::storage::PrefStore;

/// File-backed stand-ins for the page's DOM containers.
struct Containers {
    dir: PathBuf,
}

impl Containers {
    fn new(dir: &str) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: PathBuf::from(dir),
        })
    }

    fn write(&self, name: &str, content: &str) -> Result<()> {
        fs::write(self.dir.join(name), content)?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    let mut store = PrefStore::new(&cfg.prefs_path)?;
    store.init()?;
    let theme = store.load_theme(cfg.default_theme)?;
    let mut state = AppState::new(theme);
    let containers = Containers::new(&cfg.site_dir)?;
    containers.write("theme.txt", theme.as_str())?;
    let source = source_for(&cfg.recipes_location, cfg.fetch_timeout_secs);

    json_log(
        Level::Info,
        Domain::System,
        "startup",
        obj(&[
            ("source", v_str(&cfg.recipes_location)),
            ("theme", v_str(theme.as_str())),
        ]),
    );

    let (tx, mut rx) = mpsc::channel::<Command>(16);
    let (quit_tx, mut quit_rx) = oneshot::channel::<()>();

    // Page-load card-list fetch.
    {
        let tx = tx.clone();
        let source = Arc::clone(&source);
        tokio::spawn(async move {
            let result = source.fetch_recipes().await;
            let _ = tx.send(Command::RecipesLoaded(result)).await;
        });
    }

    // Interactions arrive as lines on stdin.
    {
        let tx = tx.clone();
        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                let line = line.trim().to_string();
                if line == "quit" {
                    break;
                }
                match parse_line(&line) {
                    Some(cmd) => {
                        if tx.send(cmd).await.is_err() {
                            break;
                        }
                    }
                    None => json_log(
                        Level::Warn,
                        Domain::System,
                        "unknown_input",
                        obj(&[("line", v_str(&line))]),
                    ),
                }
            }
            let _ = quit_tx.send(());
        });
    }

    loop {
        tokio::select! {
            maybe = rx.recv() => match maybe {
                Some(cmd) => {
                    for effect in reduce(&mut state, cmd, &cfg) {
                        run_effect(effect, &mut store, &containers, &source, &tx)?;
                    }
                }
                None => break,
            },
            _ = &mut quit_rx => break,
        }
    }

    json_log(Level::Info, Domain::System, "shutdown", obj(&[]));
    Ok(())
}

fn run_effect(
    effect: Effect,
    store: &mut PrefStore,
    containers: &Containers,
    source: &Arc<dyn DocumentSource>,
    tx: &mpsc::Sender<Command>,
) -> Result<()> {
    match effect {
        Effect::FetchDetail { id, seq } => {
            json_log(
                Level::Debug,
                Domain::Fetch,
                "detail_fetch",
                obj(&[("id", v_str(&id)), ("seq", v_num(seq))]),
            );
            let source = Arc::clone(source);
            let tx = tx.clone();
            // No cancellation: a stale completion still renders, and the
            // last one to arrive wins the container.
            tokio::spawn(async move {
                let result = source.fetch_recipes().await;
                let _ = tx.send(Command::DetailLoaded { id, result }).await;
            });
        }
        Effect::PersistTheme(theme) => {
            store.save_theme(theme)?;
            json_log(
                Level::Debug,
                Domain::Store,
                "theme_saved",
                obj(&[("theme", v_str(theme.as_str()))]),
            );
        }
        Effect::ApplyTheme(theme) => containers.write("theme.txt", theme.as_str())?,
        Effect::RenderCards(html) => {
            containers.write("recipe-list.html", &html)?;
            json_log(
                Level::Info,
                Domain::Render,
                "cards_rendered",
                obj(&[("bytes", v_num(html.len() as u64))]),
            );
        }
        Effect::RenderDetail(html) => {
            containers.write("recipe-modal.html", &html)?;
            json_log(Level::Info, Domain::Render, "detail_rendered", obj(&[]));
        }
        Effect::HideDetail => containers.write("recipe-modal.html", "")?,
        Effect::FocusDismiss => json_log(Level::Debug, Domain::View, "focus_dismiss", obj(&[])),
        Effect::RenderListError(html) => {
            containers.write("recipe-list.html", &html)?;
            json_log(Level::Warn, Domain::Render, "list_error_rendered", obj(&[]));
        }
        Effect::Notice(msg) => {
            json_log(Level::Info, Domain::View, "notice", obj(&[("msg", v_str(&msg))]));
        }
        Effect::Log { level, msg } => {
            json_log(level, Domain::View, "view", obj(&[("msg", v_str(&msg))]));
        }
    }
    Ok(())
}

/// One line per interaction. `close`, `esc`, and `outside` are the three
/// dismissal paths; all map to the same command.
fn parse_line(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "theme" => Some(Command::ToggleTheme),
        "menu" => Some(Command::ToggleMenu),
        "nav" => Some(Command::CloseMenu),
        "filter" => Some(Command::SelectFilter(FilterToken::parse(
            parts.next().unwrap_or("all"),
        ))),
        "open" => parts.next().map(|id| Command::OpenDetail(id.to_string())),
        "close" | "esc" | "outside" => Some(Command::CloseDetail),
        "contact" => {
            let name = parts.next()?.to_string();
            let email = parts.next()?.to_string();
            Some(Command::SubmitContact { name, email })
        }
        _ => None,
    }
}
