use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "round-robin league backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (defaults to 8080)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Create the database schema if it does not exist yet
    Init,
    /// Drop all players and matches and recreate the schema
    Reset,
    /// Register a player (only before the first match is reported)
    AddPlayer {
        name: String,
    },
    /// Report a match result; confirms the round once every pair has played
    Report {
        first_player: String,
        second_player: String,
        first_score: String,
        second_score: String,
    },
    /// Re-run the round confirmation pass
    Confirm,
    /// Print the current standings
    Standings,
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}
