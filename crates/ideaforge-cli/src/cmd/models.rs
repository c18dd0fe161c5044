use crate::output::print_json;
use ideaforge_core::config::Config;
use ideaforge_server::routes::models::available_models;

pub fn run(config: Config, json: bool) -> anyhow::Result<()> {
    let models = super::block_on(config, |app| async move { available_models(&app).await })?;

    if json {
        return print_json(&serde_json::json!({ "models": models }));
    }
    for model in models {
        println!("{model}");
    }
    Ok(())
}
