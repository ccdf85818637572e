use std::io::{stdin, stdout};
use std::process::ExitCode;

use cake_collate_cli::cli_args::Args;
use cake_collate_cli::error::Result;
use cake_collate_cli::session::{run_command, run_session, Outcome};
use cake_collate_core::config::{get_config_path, load_settings};
use cake_collate_core::file_handling::load_model;
use cake_collate_core::logic::Logic;
use chrono::Local;
use clap::Parser;
use log::debug;

/// Returns whether everything that ran succeeded.
fn execute() -> Result<bool> {
    let args = Args::parse();

    let config_path = get_config_path(args.config_path.as_deref());
    debug!("Config path: `{config_path}`");

    let settings = load_settings(&config_path)?
        .with_overrides(args.orders_path.clone(), args.order_items_path.clone());
    let storage = settings.storage();
    debug!(
        "Data files: `{}` and `{}`",
        storage.orders_path(),
        storage.order_items_path()
    );

    let model = load_model(&storage, Local::now().date_naive());
    let mut logic = Logic::new(model, storage);

    let stdout = stdout();
    let mut out = stdout.lock();

    match args.one_shot_command() {
        Some(command) => Ok(run_command(&mut logic, &command, &mut out)? != Outcome::Failed),
        None => {
            run_session(&mut logic, stdin().lock(), &mut out)?;
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
