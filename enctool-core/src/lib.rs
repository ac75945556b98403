// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: The main library crate for enctool-core, exposing key generation, encryption, decryption and signing of text files.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Enctool Core Library
//!
//! This library provides the shared functionality behind the `generate-keys`,
//! `enctool` and `sign-tool` binaries: PKCS#1 key pair generation, PKCS#1 v1.5
//! encryption and decryption of UTF-8 text, and SHA-256 signatures.
//!
//! All RSA primitives come from the [`rsa`] crate; this crate only moves bytes
//! between files and that library.

/// Encryption and decryption of text with RSA keys.
pub mod cipher;
/// The error type shared by every operation in this crate.
pub mod error;
/// Generation and storage of RSA key pairs.
pub mod keygen;
/// Signing messages and verifying signatures.
pub mod signing;
/// File reading and key loading helpers.
pub mod utils;

pub use error::{Error, Result};
pub use rsa::{RsaPrivateKey, RsaPublicKey};
