use crate::output::{print_json, Table};
use ideaforge_core::config::Config;
use ideaforge_core::types::Requirements;
use ideaforge_server::routes::requirements::requirements_for;

pub fn run(config: Config, idea: &str, model: &str, json: bool) -> anyhow::Result<()> {
    let value = super::block_on(config, |app| async move {
        requirements_for(&app, idea, model).await
    })?;

    if json {
        return print_json(&value);
    }

    // Tables need the typed shape; anything else is shown as the model sent it.
    let requirements: Requirements = match serde_json::from_value(value.clone()) {
        Ok(r) => r,
        Err(_) => return print_json(&value),
    };

    let mut epics = Table::new(&["ID", "EPIC", "DESCRIPTION"]);
    for e in &requirements.epics {
        epics.row(vec![e.id.clone(), e.summary.clone(), e.description.clone()]);
    }
    epics.print();
    println!();

    let mut tasks = Table::new(&["ID", "EPIC", "TASK", "ACCEPTANCE CRITERIA"]);
    for t in &requirements.tasks {
        tasks.row(vec![
            t.id.clone(),
            t.epic_id.clone(),
            t.summary.clone(),
            t.acceptance_criteria.clone(),
        ]);
    }
    tasks.print();
    println!();

    let mut stories = Table::new(&["ID", "EPIC", "STORY", "DESCRIPTION"]);
    for s in &requirements.stories {
        stories.row(vec![
            s.id.clone(),
            s.epic_id.clone(),
            s.summary.clone(),
            s.description.clone(),
        ]);
    }
    stories.print();
    Ok(())
}
