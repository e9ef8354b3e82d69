use anyhow::{anyhow, Context, Result};
use clap::Parser;

use gridlite::cli::{CliArgs, OutputFormat, StartupConfig};
use gridlite::commands::ACTIONS;
use gridlite::config::GridConfig;
use gridlite::io::export_json;
use gridlite::messages::{Action, GridMsg, Msg};
use gridlite::model::{AppModel, GridKind};
use gridlite::render::{render_records, render_sheet};
use gridlite::runtime::Runtime;

fn main() -> Result<()> {
    gridlite::tracing::init();

    let startup = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;

    if startup.list_actions {
        for def in ACTIONS {
            let usage = if def.takes_payload { "=PAYLOAD" } else { "" };
            println!("{:<14} {}{}", def.label, def.name, usage);
        }
        return Ok(());
    }

    let mut config = GridConfig::load();
    if let Some(budget) = startup.empty_row_budget {
        config.empty_row_budget = budget;
    }

    let out_dir = startup
        .export_dir
        .clone()
        .unwrap_or_else(|| std::path::PathBuf::from("."));
    let mut runtime = Runtime::new(AppModel::new(config), out_dir);

    run(&mut runtime, &startup);

    let model = runtime.model_mut();
    for notification in model.take_notifications() {
        eprintln!("{}", notification);
    }

    let output = match (startup.output, model.active) {
        (OutputFormat::Json, _) => {
            export_json(model.records.records()).context("Failed to serialize records")?
        }
        (OutputFormat::Table, GridKind::Records) => {
            render_records(&model.record_view(), &model.record_state)
        }
        (OutputFormat::Table, GridKind::Sheet) => render_sheet(&model.sheet, &model.sheet_state),
    };
    print!("{}", output);

    for path in runtime.written_files() {
        tracing::info!("Wrote {}", path.display());
    }

    Ok(())
}

/// Replay the startup options as messages, in the order a user would act
fn run(runtime: &mut Runtime, startup: &StartupConfig) {
    if let Some(path) = &startup.input {
        runtime.dispatch(Msg::Action(Action::Import { path: path.clone() }));
        runtime.wait_idle();
    }

    if let Some(sort) = startup.sort {
        runtime.dispatch(Msg::Action(Action::Sort(sort)));
    }
    if let Some(filter) = &startup.filter {
        runtime.dispatch(Msg::Action(Action::Filter(filter.clone())));
    }
    for field in &startup.hidden {
        runtime.dispatch(Msg::Action(Action::HideField(*field)));
    }
    for action in &startup.actions {
        runtime.dispatch(Msg::Action(action.clone()));
        runtime.wait_idle();
    }

    runtime.dispatch(Msg::SwitchGrid(startup.grid));

    if let Some(cell) = startup.select {
        runtime.dispatch(Msg::Grid(GridMsg::SelectCell(cell)));
    }
    for key in &startup.keys {
        runtime.dispatch(Msg::Key(*key));
    }

    if startup.export_dir.is_some() {
        runtime.dispatch(Msg::Action(Action::Export));
    }
}
