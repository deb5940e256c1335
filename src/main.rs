use clap::Parser;
use dcl::commands::Cli;
use dcl::libs::logging;
use dcl::libs::messages::Message;
use dcl::msg_error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            msg_error!(Message::CommandFailed(format!("{:#}", err)));
            ExitCode::FAILURE
        }
    }
}
