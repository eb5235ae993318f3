//! SPKI pin fingerprints (RFC 7469 format).

use base64::{engine::general_purpose::STANDARD, Engine};
use sha2::{Digest, Sha256};
use x509_parser::prelude::*;

use crate::error::QueryError;

/// Base64 of the SHA-256 over the certificate's SubjectPublicKeyInfo.
///
/// Sessions log this at debug level after the handshake so an operator can
/// compare the peer key against a pin published out-of-band.
pub fn spki_pin(certificate_der: &[u8]) -> Result<String, QueryError> {
    let (_, certificate) = X509Certificate::from_der(certificate_der)
        .map_err(|e| QueryError::Certificate(e.to_string()))?;

    let spki = certificate.public_key().raw;
    Ok(STANDARD.encode(Sha256::digest(spki)))
}
