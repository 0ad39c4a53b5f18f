//! Command-line front end for the Gödel-numbering codec.

use clap::{Parser, Subcommand};
use num_bigint::BigUint;

#[derive(Parser)]
#[command(name = "godel", version, about = "Encode and decode Gödel numbers")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a formal-notation string as its Gödel number.
    Encode { text: String },
    /// Decode a Gödel number back into its string.
    Decode { number: BigUint },
}

fn main() {
    let cli = Cli::parse();
    let outcome = match cli.command {
        Some(Command::Encode { text }) => godelnum::encode(&text).map(|n| println!("{n}")),
        Some(Command::Decode { number }) => godelnum::decode(&number).map(|s| println!("{s}")),
        None => demo(),
    };
    if let Err(err) = outcome {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Round-trip the two strings the book walks through.
fn demo() -> godelnum::Result<()> {
    for text in ["0=0", "(∃pPx)(x=sy)"] {
        let number = godelnum::encode(text)?;
        let back = godelnum::decode(&number)?;
        println!("{text} -> {number}");
        println!("{number} -> {back}");
    }
    Ok(())
}
