// File:    signing.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Signs text with RSA PKCS#1 v1.5 over SHA-256 and verifies such signatures.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use std::path::Path;

use log::debug;
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

use crate::error::Result;
use crate::utils::write_file;

/// Signs the UTF-8 bytes of `text` with `private_key`.
///
/// # Errors
///
/// Returns [`crate::Error::Signing`] if the library cannot produce a signature,
/// e.g. when the key is too small to hold a SHA-256 digest.
pub fn sign_text(private_key: &RsaPrivateKey, text: &str) -> Result<Vec<u8>> {
    let signing_key = SigningKey::<Sha256>::new(private_key.clone());
    let signature = signing_key.try_sign(text.as_bytes())?;
    Ok(signature.to_vec())
}

/// Checks `signature` over `text` against `public_key`.
///
/// A malformed signature is reported the same way as a forged one.
#[must_use]
pub fn verify_text(public_key: &RsaPublicKey, text: &str, signature: &[u8]) -> bool {
    let Ok(signature) = Signature::try_from(signature) else {
        debug!("Signature bytes could not be decoded");
        return false;
    };

    let verifying_key = VerifyingKey::<Sha256>::new(public_key.clone());
    match verifying_key.verify(text.as_bytes(), &signature) {
        Ok(()) => true,
        Err(e) => {
            debug!("Signature rejected: {e}");
            false
        }
    }
}

/// Writes the raw signature bytes to `path`.
///
/// # Errors
///
/// Returns [`crate::Error::FileWrite`] if the file cannot be written.
pub fn create_signature_file(signature: &[u8], path: &Path) -> Result<()> {
    write_file(path, signature)
}
