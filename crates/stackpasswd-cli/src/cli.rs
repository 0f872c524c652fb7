use clap::{Parser, Subcommand};
use clap_complete::Shell;

use stackpasswd_core::VERSION;

/// stackpasswd - derive a salted PBKDF2 password hash as `salt:key:iterations`
#[derive(Parser)]
#[command(name = "stackpasswd")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the record as a JSON object instead of a colon-delimited line
    #[arg(long)]
    pub json: bool,

    /// Log derivation steps to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
