//! Line-driven terminal control surface for a select control.
//!
//! This binary is a thin shell over the library: it loads options and
//! configuration, maps commands read from stdin to [`Event`]s, hands them to a
//! [`Dispatcher`] and prints every commit plus the re-rendered control.
//!
//! # Usage
//!
//! ```text
//! selectkit <options.json> [config.toml]
//! ```
//!
//! `options.json` holds an array of records; the config's `field_map` names
//! the id and label fields.
//!
//! # Commands
//!
//! - `open` / `close`: Show or hide the option menu (close commits in multiple mode)
//! - `type <text>`: Replace the search query (`type` alone clears it)
//! - `toggle <id>`: Pick an option (single) or flip it in the selection (multiple)
//! - `all`: Select-all / unselect-all over the visible options
//! - `clear`: Clear a single-select
//! - `seed <id>[,<id>...]`: Feed a new initial selection
//! - `quit`: Exit
//!
//! Commits are printed as `commit <json>` lines. Single-selects close after
//! each pick.

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use selectkit::app::SelectionValue;
use selectkit::observability::init_tracing;
use selectkit::{
    initialize, parse_options, render, Config, Dispatcher, Event, EventQueue, Identifier,
    InitialSelection, Result, SelectError, SelectMode, SelectState, ToggleValue,
};

/// A parsed stdin line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Event(Event),
    /// Flip one id; resolved against the current state before dispatch.
    Toggle(Identifier),
    Seed(Vec<Identifier>),
    Quit,
}

fn parse_ids(list: &str) -> Vec<Identifier> {
    list.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(Identifier::from)
        .collect()
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match verb {
        "open" => Command::Event(Event::Open),
        "close" => Command::Event(Event::Close),
        "type" => Command::Event(Event::QueryChanged(rest.to_string())),
        "toggle" if !rest.is_empty() => Command::Toggle(Identifier::from(rest)),
        "all" => Command::Event(Event::ToggleAll),
        "clear" => Command::Event(Event::Clear),
        "seed" => Command::Seed(parse_ids(rest)),
        "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Builds the event for a toggle gesture.
///
/// Single mode forwards the raw id. Multiple mode computes the full next
/// selection: the id is removed if selected, otherwise appended using the
/// catalog's own id when one matches.
fn toggle_event(state: &SelectState, raw: Identifier) -> Event {
    match state.mode() {
        SelectMode::Single => Event::Toggle(ToggleValue::One(raw)),
        SelectMode::Multiple => {
            let mut ids = state.selection.ids();
            if let Some(position) = ids.iter().position(|id| id.matches(&raw)) {
                ids.remove(position);
            } else {
                let id = state
                    .catalog()
                    .iter()
                    .find(|option| option.id.matches(&raw))
                    .map_or(raw, |option| option.id.clone());
                ids.push(id);
            }
            Event::Toggle(ToggleValue::Many(ids))
        }
    }
}

fn seed_event(mode: SelectMode, ids: Vec<Identifier>) -> Event {
    let initial = match mode {
        SelectMode::Single => InitialSelection::One(ids.into_iter().next()),
        SelectMode::Multiple => InitialSelection::Many(ids),
    };
    Event::InitialSelectionChanged(initial)
}

fn load(args: &[String]) -> Result<(Config, String)> {
    let [options_path, rest @ ..] = args else {
        return Err(SelectError::Config(
            "usage: selectkit <options.json> [config.toml]".to_string(),
        ));
    };

    let config = match rest.first() {
        Some(config_path) => Config::from_file(config_path)?,
        None => Config::default(),
    };
    let options = std::fs::read_to_string(options_path)?;
    Ok((config, options))
}

fn run(args: &[String]) -> Result<()> {
    let (config, options) = load(args)?;
    init_tracing(&config)?;

    let catalog = parse_options(&options, &config.field_map)?;
    tracing::info!(options = catalog.len(), mode = %config.mode, "options loaded");

    let stdout = io::stdout();
    let on_commit = |value: &SelectionValue, queue: &mut EventQueue| {
        match serde_json::to_string(value) {
            Ok(json) => println!("commit {json}"),
            Err(e) => tracing::warn!(error = %e, "failed to serialize commit"),
        }
        if matches!(value, SelectionValue::Single(_)) {
            queue.push(Event::Close);
        }
    };

    let mut dispatcher = Dispatcher::new(initialize(&config), on_commit);
    dispatcher.dispatch(Event::OptionsChanged(catalog))?;
    print!("{}", render(dispatcher.state()));
    stdout.lock().flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            if !line.trim().is_empty() {
                eprintln!("unknown command: {}", line.trim());
            }
            continue;
        };

        let event = match command {
            Command::Quit => break,
            Command::Event(event) => event,
            Command::Toggle(raw) => toggle_event(dispatcher.state(), raw),
            Command::Seed(ids) => seed_event(dispatcher.state().mode(), ids),
        };

        match dispatcher.dispatch(event) {
            Ok(true) => print!("{}", render(dispatcher.state())),
            Ok(false) => {}
            Err(e) => eprintln!("{e}"),
        }
        stdout.lock().flush()?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("selectkit: {e}");
            ExitCode::FAILURE
        }
    }
}
