use std::io::stdout;
use std::process::ExitCode;

use arrow_menu_cli::cli_args::Args;
use arrow_menu_cli::{flow, prompt, selector};
use arrow_menu_core::config;
use arrow_menu_core::error::{Error, Result};
use arrow_menu_core::file_handling;
use clap::Parser;
use log::info;

/// Exit status after Ctrl+C, as a shell reports for SIGINT
const FORCED_EXIT_CODE: u8 = 130;

fn execute() -> Result<()> {
    let args = Args::parse();

    let menu = file_handling::load_menu(&config::get_menu_source(&args.menu_path))?;
    let colors = args.color_overrides().or(&menu.colors).to_scheme();

    let name = match &args.name {
        Some(name) => name.clone(),
        None => prompt::prompt_text(&menu.question, menu.default_answer.as_deref())?,
    };

    let choice = flow::choose(&menu, colors, selector::select)?;
    info!("Chose `{}` from `{}`", choice.option.value, choice.category.value);

    flow::print_summary(&mut stdout(), &name, &choice)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Cancelled) => {
            println!("No selection made.");
            ExitCode::SUCCESS
        }
        Err(Error::ForcedExit) => ExitCode::from(FORCED_EXIT_CODE),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
