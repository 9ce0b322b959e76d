use anyhow::Result;

use super::{Session, print_json};
use crate::render::render_day;
use crate::view::ViewState;

pub fn run(session: &Session, state: ViewState) -> Result<()> {
    let grid = session.day_grid(state.anchor)?;

    if session.json {
        return print_json(&grid.day(state.anchor).unwrap_or_default());
    }

    println!("{}", render_day(&grid, &state));
    Ok(())
}
