use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use vigenere::{decrypt, encrypt, normalize};

#[derive(Parser)]
#[command(name = "vigenere", about = "Vigenère cipher over the A-Z alphabet")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Encrypt text under a key
    Encrypt { text: String, key: String },
    /// Decrypt text under a key
    Decrypt { text: String, key: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Some(Command::Encrypt { text, key }) => {
            debug!("normalized input: {}", normalize(&text));
            let cipher = encrypt(&text, &key).context("encryption failed")?;
            println!("{}", cipher);
        }
        Some(Command::Decrypt { text, key }) => {
            debug!("normalized input: {}", normalize(&text));
            let plain = decrypt(&text, &key).context("decryption failed")?;
            println!("{}", plain);
        }
        None => demo()?,
    }
    Ok(())
}

/// Sample round trip for manual verification.
fn demo() -> Result<()> {
    let message = "Hello World!";
    let key = "SECRET";

    let encrypted = encrypt(message, key)?;
    let decrypted = decrypt(&encrypted, key)?;

    println!("Original message: {}", message);
    println!("Key: {}", key);
    println!("Encrypted text: {}", encrypted);
    println!("Decrypted text: {}", decrypted);
    Ok(())
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}
