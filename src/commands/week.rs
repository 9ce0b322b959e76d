use anyhow::Result;

use super::{Session, print_json};
use crate::render::render_week;
use crate::view::ViewState;

pub fn run(session: &Session, state: ViewState) -> Result<()> {
    let grid = session.week_grid(state.anchor)?;

    if session.json {
        return print_json(&grid);
    }

    println!("{}", render_week(&grid, &state));
    Ok(())
}
