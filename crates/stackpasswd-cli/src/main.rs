//! stackpasswd - derive a salted PBKDF2 password hash
//!
//! Reads a password twice from the terminal, generates a random salt and
//! prints `<salt-b64>:<key-b64>:<iterations>` on stdout.

mod cli;
mod constants;
mod errors;
mod logging;
mod output;
mod terminal;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use stackpasswd_core::{generate_record, KdfParams, OsRandom};

use crate::cli::{Cli, Commands};
use crate::errors::CliError;
use crate::terminal::DialoguerTerminal;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        err.exit();
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "stackpasswd", &mut std::io::stdout());
        }
        None => {
            let params = KdfParams::DEFAULT;
            tracing::debug!(
                iterations = params.iterations,
                key_len = params.key_len,
                salt_len = params.salt_len,
                "generating credential record"
            );
            let mut terminal = DialoguerTerminal::new();
            let record = generate_record(&mut terminal, &mut OsRandom, &params)?;
            output::write_record(&mut std::io::stdout().lock(), &record, cli.json)?;
        }
    }

    Ok(())
}
