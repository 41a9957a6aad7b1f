use std::io::stdout;
use std::process::ExitCode;

use clap::Parser;
use console_ui_cli::cli_args::Args;
use console_ui_cli::commands::run_command;
use console_ui_cli::output::write_answer;
use console_ui_core::error::Result;
use console_ui_core::Console;
use log::debug;

fn execute() -> Result<()> {
    let args = Args::parse();
    debug!("Arguments: {args:?}");

    let mut console = Console::stdio();
    let answer = run_command(&mut console, args.command.as_ref(), &args.menu_file)?;

    write_answer(&mut stdout(), &answer)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
