//! assemble-release - stage a distributable OpenGML release folder
//!
//! Usage: assemble-release [OPTIONS] [SOURCE_ROOT] [DESTINATION] [BUILD_SUBDIR]
//!
//! Exit status: 0 on success, 1 when the inputs or config are invalid,
//! 2 when assembly fails part-way.

mod commands;
mod ui;

use clap::Parser;
use ogm_release::presentation::Cli;

use crate::ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);

    if let Err(err) = commands::assemble::cmd_assemble(&cli, &ui) {
        ui::error::print_error(&err, &ui);
        std::process::exit(ui::error::exit_code(&err));
    }
}
