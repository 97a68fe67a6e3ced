//! Light report
//!
//! Runs light classification and attachment over a RON list of effect shader
//! records and reports which light each one received.

use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::collections::BTreeMap;

use effect_lights::foundation::logging;
use effect_lights::prelude::*;

mod records;
use records::load_records;

fn main() -> Result<()> {
    let matches = Command::new("light_report")
        .about("Classifies effect shaders and attaches light addon models")
        .arg(
            Arg::new("shaders")
                .short('s')
                .long("shaders")
                .value_name("FILE")
                .help("RON file with effect shader records")
                .required_unless_present("dump-config"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Light configuration (.toml or .ron), built-in tables when omitted"),
        )
        .arg(
            Arg::new("dump-config")
                .long("dump-config")
                .value_name("FILE")
                .help("Write the effective configuration to FILE and exit"),
        )
        .get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(path) => LightsConfig::load(path)
            .with_context(|| format!("Failed to load light configuration from {}", path))?,
        None => LightsConfig::default(),
    };

    logging::init_with_level(&config.log_level);

    if let Some(path) = matches.get_one::<String>("dump-config") {
        config
            .save_to_file(path)
            .with_context(|| format!("Failed to write configuration to {}", path))?;
        log::info!("Wrote configuration to {}", path);
        return Ok(());
    }

    let shaders_path = matches
        .get_one::<String>("shaders")
        .context("--shaders is required")?;
    let records = load_records(shaders_path)?;
    log::info!("Loaded {} effect shaders from {}", records.len(), shaders_path);

    let manager = LightManager::from_config(&config);
    let mut lit: BTreeMap<LightCategory, usize> = BTreeMap::new();
    let mut unlit = 0usize;

    for record in records {
        let mut shader = record.into_descriptor();
        let light = manager.resolve_light(&shader);

        if manager.apply_light(&mut shader) {
            *lit.entry(light).or_default() += 1;
        } else {
            log::debug!("{}: no light", shader.form);
            unlit += 1;
        }
    }

    println!("Light summary:");
    for (light, count) in &lit {
        println!("  {:<8} {}", light.to_string(), count);
    }
    println!("  {:<8} {}", "unlit", unlit);

    Ok(())
}
