// File:    error.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Defines the error type returned by file, key and RSA operations.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// A specialised `Result` type for enctool operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while loading keys, reading input or calling into RSA.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be opened or read (not found, permission denied, ...).
    #[error("Error reading file '{}': {source}", .path.display())]
    FileAccess {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// A file or directory could not be created or written.
    #[error("Error writing file '{}': {source}", .path.display())]
    FileWrite {
        /// The file that was being written.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// A text input did not contain valid UTF-8.
    #[error("File '{}' is not valid UTF-8 text: {source}", .path.display())]
    NotUtf8 {
        /// The offending file.
        path: PathBuf,
        /// The underlying decoding error.
        source: FromUtf8Error,
    },

    /// A key could not be decoded from, or encoded to, PKCS#1 PEM.
    #[error("Invalid PKCS#1 key: {0}")]
    Key(#[from] rsa::pkcs1::Error),

    /// The requested modulus is larger than a public key file may hold.
    #[error("Key size of {bits} bits is too large (at most {max} bits)")]
    KeyTooLarge {
        /// The requested modulus size.
        bits: usize,
        /// The largest supported modulus size.
        max: usize,
    },

    /// The plaintext does not fit into a single PKCS#1 v1.5 block.
    #[error("Message of {len} bytes is too long for this key (at most {max} bytes)")]
    MessageTooLong {
        /// Length of the message in bytes.
        len: usize,
        /// The largest message the key can encrypt.
        max: usize,
    },

    /// The RSA library rejected an operation.
    #[error("RSA operation failed: {0}")]
    Rsa(#[from] rsa::Error),

    /// The RSA library failed to produce a signature.
    #[error("Signing failed: {0}")]
    Signing(#[from] rsa::signature::Error),

    /// Decryption succeeded but the payload is not UTF-8 text.
    #[error("Decrypted data is not valid UTF-8: {0}")]
    DecryptedNotUtf8(#[from] FromUtf8Error),
}

impl Error {
    /// Returns `true` for the "file not found or inaccessible" class of errors.
    #[must_use]
    pub const fn is_file_access(&self) -> bool {
        matches!(self, Self::FileAccess { .. })
    }
}
