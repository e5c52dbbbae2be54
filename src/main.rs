use anyhow::Result;

use round_robin_league::cli::Command;
use round_robin_league::{
    handle_add_player, handle_completions, handle_confirm, handle_init, handle_report, handle_reset,
    handle_serve, handle_standings, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Init => handle_init(),
        Command::Reset => handle_reset(),
        Command::AddPlayer { name } => handle_add_player(name),
        Command::Report {
            first_player,
            second_player,
            first_score,
            second_score,
        } => handle_report(first_player, second_player, first_score, second_score),
        Command::Confirm => handle_confirm(),
        Command::Standings => handle_standings(),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
