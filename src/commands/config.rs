use anyhow::Result;
use maintcal_core::config::MaintcalConfig;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let config_path = MaintcalConfig::config_path()?;
    let config = MaintcalConfig::load()?;
    let slots = config.time_slots()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!(
        "  Events:  {}",
        config
            .events_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in sample data)".to_string())
    );

    println!("{}", "Grid".bold());
    println!(
        "  Slots:   {}",
        slots
            .iter()
            .map(maintcal_core::date::format_time)
            .collect::<Vec<_>>()
            .join(" ")
    );
    println!("  Strict:  {}", config.strict_slots);
    println!("  Upcoming limit: {}", config.upcoming_limit);

    Ok(())
}
