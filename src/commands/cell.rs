use anyhow::{Context, Result};
use maintcal_core::events_for_cell;
use owo_colors::OwoColorize;

use super::{Session, print_json};
use crate::render::Render;
use crate::view::ViewState;

/// Show the events booked into one (date, slot) cell.
pub fn run(session: &Session, state: ViewState, time: &str) -> Result<()> {
    let time = session
        .slots
        .parse(time)
        .with_context(|| format!("Cannot look up cell at '{time}'"))?;

    let events = events_for_cell(state.anchor, time, &session.events);

    if session.json {
        return print_json(&events);
    }

    if events.is_empty() {
        println!("{}", "No events in this slot".dimmed());
        return Ok(());
    }

    for event in events {
        println!("{}", event.render());
    }
    Ok(())
}
