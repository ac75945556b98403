#![deny(missing_docs)]
//! Signs a message file or verifies a signature file against it.

use clap::{Args, Parser};
use enctool_core::{signing, utils};
use log::{error, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Sign or verify a file.")]
#[command(
    after_help = "EXAMPLES:\n  \n# Sign message.txt, writing the signature to message.sig\nsign-tool -s ./keys/private.pem ./message.sig ./message.txt\n\n# Verify the signature\nsign-tool -v ./keys/public.pem ./message.sig ./message.txt"
)]
struct Cli {
    #[command(flatten)]
    mode: Mode,

    /// Path to the key file (private key to sign, public key to verify)
    #[arg()]
    key_path: PathBuf,

    /// Path to the signature file (written when signing, read when verifying)
    #[arg()]
    signature_path: PathBuf,

    /// Path to the file with the message
    #[arg()]
    message_path: PathBuf,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct Mode {
    /// Sign mode. Make a signature file
    #[arg(short, long)]
    sign: bool,

    /// Verify mode. Verify a signature file
    #[arg(short, long)]
    verify: bool,
}

fn sign(cli: &Cli) -> enctool_core::Result<()> {
    let private_key = utils::load_private_key(&cli.key_path)?;
    let message = utils::read_text_from_file(&cli.message_path)?;
    let signature = signing::sign_text(&private_key, &message)?;
    signing::create_signature_file(&signature, &cli.signature_path)?;
    info!(
        "Signature for '{}' written to '{}'",
        cli.message_path.display(),
        cli.signature_path.display()
    );
    println!("Signature created successfully.");
    Ok(())
}

fn verify(cli: &Cli) -> enctool_core::Result<()> {
    let public_key = utils::load_public_key(&cli.key_path)?;
    let message = utils::read_text_from_file(&cli.message_path)?;
    let signature = utils::read_bytes_from_file(&cli.signature_path)?;

    if signing::verify_text(&public_key, &message, &signature) {
        println!("Signature is valid.");
    } else {
        println!("Signature is not valid.");
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = if cli.mode.sign { sign(&cli) } else { verify(&cli) };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}
