//! Session module: the interactive encode loop
//!
//! Reads messages from the terminal, encodes them, shows the result, and
//! asks whether to continue. Parsing of user responses is kept in pure
//! helpers so the loop itself stays a thin driver.

use crate::cipher::{self, CIPHER_SHIFT};
use std::io::{self, BufRead, Write};

/// Keywords that end the session, matched case-insensitively
const QUIT_WORDS: &[&str] = &["quit", "exit", "q"];

/// What the user typed at the message prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// A message to encode (already trimmed)
    Message(String),
    /// A quit keyword
    Quit,
}

/// Classify a line from the message prompt
pub fn parse_message(line: &str) -> Prompt {
    let trimmed = line.trim();
    if QUIT_WORDS.contains(&trimmed.to_lowercase().as_str()) {
        Prompt::Quit
    } else {
        Prompt::Message(trimmed.to_string())
    }
}

/// Interpret a yes/no response; `None` means the answer was not recognized
pub fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Render the results block for an encoded message
pub fn format_results(original: &str, encoded: &str) -> String {
    let separator = "=".repeat(60);

    format!(
        "\n{separator}\n\
         THE MESSAGE ENCODING RESULTS\n\
         {separator}\n\
         Original Message:  {original}\n\
         Encoded Message:   {encoded}\n\
         Cipher Shift:      {shift} letters forward\n\
         Message Length:    {len} characters\n\
         {separator}\n",
        separator = separator,
        original = original,
        encoded = encoded,
        shift = CIPHER_SHIFT,
        len = original.chars().count(),
    )
}

/// Run the interactive session over arbitrary input/output streams
///
/// Returns when the user quits, declines another message, or the input
/// stream ends (closed stdin or an interrupted terminal read both surface
/// here as end-of-input and end the session cleanly).
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "Welcome to the Message Encoder!")?;
    writeln!(
        output,
        "This program encodes messages using a {}-letter shift cipher.\n",
        CIPHER_SHIFT
    )?;

    loop {
        writeln!(output, "The Message Encoder")?;
        writeln!(output, "{}", "-".repeat(20))?;
        writeln!(output, "Enter a message to encode (or 'quit' to exit)")?;
        write!(output, "\nMessage: ")?;
        output.flush()?;

        let line = match read_line(&mut input)? {
            Some(line) => line,
            None => break,
        };

        let message = match parse_message(&line) {
            Prompt::Quit => break,
            Prompt::Message(message) => message,
        };

        match cipher::encode(&message) {
            Ok(encoded) => {
                write!(output, "{}", format_results(&message, &encoded))?;
            }
            Err(e) => {
                writeln!(output, "\nInput Error: {}", e)?;
                writeln!(output, "Please try again with a valid message.\n")?;
                continue;
            }
        }

        if !ask_continue(&mut input, &mut output)? {
            break;
        }
    }

    writeln!(output, "\nThank you for using the Message Encoder!")?;
    writeln!(output, "Goodbye!")?;

    Ok(())
}

/// Ask whether to encode another message, reprompting until the answer is
/// recognized. End-of-input counts as "no".
fn ask_continue<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    loop {
        write!(output, "Would you like to encode another message? (y/n): ")?;
        output.flush()?;

        let line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(false),
        };

        match parse_answer(&line) {
            Some(answer) => return Ok(answer),
            None => writeln!(output, "Please enter 'y' for yes or 'n' for no.")?,
        }
    }
}

/// Read one line, returning `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    match input.read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line)),
    }
}
