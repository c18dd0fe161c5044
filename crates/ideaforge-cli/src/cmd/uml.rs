use anyhow::Context;
use ideaforge_core::config::Config;
use ideaforge_core::plantuml;
use std::io::Read;

pub fn run(config: &Config, with_url: bool) -> anyhow::Result<()> {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read PlantUML from stdin")?;

    let source = plantuml::sanitize(&raw);
    println!("{source}");
    if with_url {
        println!("{}", plantuml::image_url(&config.plantuml.server, &source));
    }
    Ok(())
}
