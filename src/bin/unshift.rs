//! Standalone decoder binary for shiftr
//!
//! Minimal binary that reverses the 15-letter shift and prints the
//! original message to stdout.
//!
//! Usage:
//!   unshift <MESSAGE>
//!   unshift            (reads the message from stdin)

use std::env;
use std::io::{self, Read};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let message = match args.len() {
        1 => {
            // No argument: read the whole message from stdin
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        2 => args[1].clone(),
        _ => {
            eprintln!("Usage: unshift [MESSAGE]");
            process::exit(1);
        }
    };

    let decoded = shiftr::decode(&message)?;
    println!("{}", decoded);

    Ok(())
}
