// File:    cipher.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Encrypts and decrypts UTF-8 text with RSA PKCS#1 v1.5 and writes the results to files.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Text encryption with a public key and decryption with the matching private key.
//!
//! Each message is a single PKCS#1 v1.5 block, so a text can be at most
//! [`max_message_len`] bytes long once encoded as UTF-8.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use log::debug;
use rsa::rand_core::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};

use crate::error::{Error, Result};
use crate::utils::write_file;

/// Bytes of every PKCS#1 v1.5 block taken up by padding.
const PKCS1_PADDING_OVERHEAD: usize = 11;

/// The longest plaintext, in bytes, that `public_key` can encrypt.
#[must_use]
pub fn max_message_len(public_key: &RsaPublicKey) -> usize {
    public_key.size().saturating_sub(PKCS1_PADDING_OVERHEAD)
}

/// Encrypts `text` with `public_key`.
///
/// # Errors
///
/// Returns [`Error::MessageTooLong`] if the UTF-8 encoding of `text` exceeds
/// [`max_message_len`], or [`Error::Rsa`] if the library fails.
pub fn encrypt_text(public_key: &RsaPublicKey, text: &str) -> Result<Vec<u8>> {
    let max = max_message_len(public_key);
    if text.len() > max {
        return Err(Error::MessageTooLong {
            len: text.len(),
            max,
        });
    }

    debug!("Encrypting {} bytes of text", text.len());
    Ok(public_key.encrypt(&mut OsRng, Pkcs1v15Encrypt, text.as_bytes())?)
}

/// Decrypts `ciphertext` with `private_key` and returns the text.
///
/// # Errors
///
/// Returns [`Error::Rsa`] if the ciphertext was not made for this key, or
/// [`Error::DecryptedNotUtf8`] if the recovered bytes are not text.
pub fn decrypt_text(private_key: &RsaPrivateKey, ciphertext: &[u8]) -> Result<String> {
    debug!("Decrypting {} bytes of ciphertext", ciphertext.len());
    let plaintext = private_key.decrypt(Pkcs1v15Encrypt, ciphertext)?;
    Ok(String::from_utf8(plaintext)?)
}

/// Writes the raw ciphertext bytes to `path`.
///
/// # Errors
///
/// Returns [`Error::FileWrite`] if the file cannot be written.
pub fn write_encrypted_file(ciphertext: &[u8], path: &Path) -> Result<()> {
    write_file(path, ciphertext)
}

/// Writes the decrypted text to `path`.
///
/// # Errors
///
/// Returns [`Error::FileWrite`] if the file cannot be written.
pub fn write_decrypted_file(text: &str, path: &Path) -> Result<()> {
    write_file(path, text)
}

/// Renders ciphertext as standard base64 for printing on a terminal.
#[must_use]
pub fn encode_ciphertext(ciphertext: &[u8]) -> String {
    STANDARD.encode(ciphertext)
}
