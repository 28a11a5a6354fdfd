use anyhow::Result;

use openplate::models::config::Config;

pub fn run() -> Result<()> {
    let mut config = Config::load()?;

    if config.aliases.is_empty() {
        config.aliases = Config::default_aliases();
    }

    config.save()?;
    println!("Config initialized at {:?}", Config::path());
    Ok(())
}
