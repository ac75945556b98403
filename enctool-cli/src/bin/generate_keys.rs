#![deny(missing_docs)]
//! Generates an RSA key pair and saves it as `public.pem` and `private.pem`.

use clap::Parser;
use enctool_core::keygen;
use log::{error, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Create and save public and private keys into the folder")]
#[command(
    after_help = "EXAMPLES:\n  \n# Generate a 1024-bit key pair into ./keys\ngenerate-keys ./keys\n\n# Generate a 2048-bit key pair\ngenerate-keys ./keys --bits 2048"
)]
struct Cli {
    /// Path to the folder the keys are written into. Created if missing.
    #[arg()]
    keys_folder: PathBuf,

    /// Size of the RSA modulus in bits
    #[arg(short, long, default_value_t = keygen::DEFAULT_KEY_BITS)]
    bits: usize,
}

fn run(cli: &Cli) -> enctool_core::Result<()> {
    let pair = keygen::generate_key_pair(cli.bits)?;
    let saved = keygen::save_key_pair(&pair, &cli.keys_folder)?;
    info!(
        "Public key: '{}', private key: '{}'",
        saved.public_path.display(),
        saved.private_path.display()
    );
    println!(
        "RSA key pair generated and saved successfully. Keys are saved in the folder: {}",
        cli.keys_folder.display()
    );
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}
