#![deny(missing_docs)]
//! Encrypts a text file with a public key or decrypts it with a private key.

use clap::{Args, Parser};
use enctool_core::{cipher, utils};
use log::{error, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Encrypt or decrypt text using an RSA key file.")]
#[command(
    after_help = "EXAMPLES:\n  \n# Encrypt and print the ciphertext as base64\nenctool --encrypt ./keys/public.pem ./message.txt\n\n# Encrypt into a file\nenctool --encrypt ./keys/public.pem ./message.txt -w ./message.enc\n\n# Encrypt text piped on stdin\necho hello | enctool --encrypt ./keys/public.pem -\n\n# Decrypt and print the text\nenctool --decrypt ./keys/private.pem ./message.enc\n\n# Decrypt into a file\nenctool --decrypt ./keys/private.pem ./message.enc -w ./message.txt"
)]
struct Cli {
    #[command(flatten)]
    mode: Mode,

    /// Path to the PEM key file (public key to encrypt, private key to decrypt)
    #[arg()]
    key_file: PathBuf,

    /// Path to the file to encrypt or decrypt, or '-' for stdin
    #[arg()]
    input_file: PathBuf,

    /// Path to the file where the result will be written
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    write: Option<PathBuf>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct Mode {
    /// Encrypt mode
    #[arg(short, long)]
    encrypt: bool,

    /// Decrypt mode
    #[arg(short, long)]
    decrypt: bool,
}

fn encrypt(cli: &Cli) -> enctool_core::Result<()> {
    let public_key = utils::load_public_key(&cli.key_file)?;
    let text = utils::read_text_input(&cli.input_file)?;
    let ciphertext = cipher::encrypt_text(&public_key, &text)?;
    info!("Encrypted '{}'", cli.input_file.display());

    match &cli.write {
        Some(output) => {
            cipher::write_encrypted_file(&ciphertext, output)?;
            println!(
                "Text encrypted successfully. Encrypted text written into {}",
                output.display()
            );
        }
        None => println!("{}", cipher::encode_ciphertext(&ciphertext)),
    }
    Ok(())
}

fn decrypt(cli: &Cli) -> enctool_core::Result<()> {
    let private_key = utils::load_private_key(&cli.key_file)?;
    let ciphertext = utils::read_bytes_input(&cli.input_file)?;
    let text = cipher::decrypt_text(&private_key, &ciphertext)?;
    info!("Decrypted '{}'", cli.input_file.display());

    match &cli.write {
        Some(output) => {
            cipher::write_decrypted_file(&text, output)?;
            println!(
                "Text decrypted successfully. Decrypted text written into {}",
                output.display()
            );
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = if cli.mode.encrypt {
        encrypt(&cli)
    } else {
        decrypt(&cli)
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}
