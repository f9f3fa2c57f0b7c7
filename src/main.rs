use anyhow::Result;
use clap::{Parser, Subcommand};
use shiftr::{cipher, session};
use std::io;

/// shiftr - message encoding with a fixed 15-letter shift cipher
///
/// Run without arguments for an interactive session.
#[derive(Parser)]
#[command(name = "shiftr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a single message and print the results
    Encode {
        /// The message to encode
        message: String,
    },

    /// Decode a message that was encoded with this cipher
    Decode {
        /// The encoded message
        message: String,
    },

    /// Show version information
    Version,
}

fn handle_encode(message: String) -> Result<()> {
    let encoded = cipher::encode(&message)?;
    print!("{}", session::format_results(message.trim(), &encoded));
    Ok(())
}

fn handle_decode(message: String) -> Result<()> {
    let decoded = cipher::decode(&message)?;
    println!("{}", decoded);
    Ok(())
}

fn handle_interactive() -> Result<()> {
    let stdin = io::stdin();
    session::run(stdin.lock(), io::stdout())?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Encode { message }) => handle_encode(message),
        Some(Commands::Decode { message }) => handle_decode(message),
        Some(Commands::Version) => {
            println!("shiftr {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => handle_interactive(),
    }
}
