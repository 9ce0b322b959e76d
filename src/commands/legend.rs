use anyhow::Result;
use maintcal_core::summary::PriorityCounts;

use super::{Session, print_json};
use crate::render::render_legend;

pub fn run(session: &Session) -> Result<()> {
    let counts = PriorityCounts::tally(&session.events);

    if session.json {
        return print_json(&counts);
    }

    println!("{}", render_legend(&counts));
    Ok(())
}
