use anyhow::Result;
use maintcal_core::summary::upcoming;

use super::{Session, print_json};
use crate::render::render_upcoming;
use crate::view::ViewState;

pub fn run(session: &Session, state: ViewState, limit: Option<usize>) -> Result<()> {
    let limit = limit.unwrap_or(session.config.upcoming_limit);
    let events = upcoming(&session.events, state.anchor, limit);

    if session.json {
        return print_json(&events);
    }

    println!("{}", render_upcoming(&events));
    Ok(())
}
