use crate::output::{print_json, Table};
use anyhow::Context;
use ideaforge_core::config::Config;

pub fn run(config: Config, json: bool) -> anyhow::Result<()> {
    let projects = super::block_on(config, |app| async move {
        let client = app.jira()?;
        client
            .list_projects()
            .await
            .context("Failed to fetch Jira projects")
    })?;

    if json {
        return print_json(&projects);
    }
    if projects.is_empty() {
        println!("No Jira projects.");
        return Ok(());
    }

    let mut table = Table::new(&["KEY", "NAME", "ID"]);
    for p in projects {
        table.row(vec![p.key, p.name, p.id]);
    }
    table.print();
    Ok(())
}
