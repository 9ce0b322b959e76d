use anyhow::Result;
use maintcal_core::month::month_grid;

use super::{Session, print_json};
use crate::render::render_month;
use crate::view::ViewState;

pub fn run(session: &Session, state: ViewState) -> Result<()> {
    let grid = month_grid(state.anchor)?;

    if session.json {
        return print_json(&grid);
    }

    println!("{}", render_month(&grid, &session.events, &state));
    Ok(())
}
