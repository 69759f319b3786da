//! Cryptographic Utilities
//!
//! Signed tokens have the shape `<payload>.<base64url(HMAC-SHA256(payload))>`.
//! The payload is opaque to this module; auth puts a session UUID in it.

use base64::{Engine, engine::general_purpose};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Generate a random 32-byte secret (session signing keys, client keys)
pub fn random_secret() -> [u8; 32] {
    let mut secret = [0u8; 32];
    OsRng.fill_bytes(&mut secret);
    secret
}

/// Compute SHA-256 hash
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Encode bytes as URL-safe base64 without padding (cookie-safe)
pub fn to_base64_url(bytes: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

fn mac_for(secret: &[u8; 32], payload: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    mac
}

/// Sign `payload`, producing `payload.signature`.
///
/// `payload` must not contain `.`.
pub fn sign_token(secret: &[u8; 32], payload: &str) -> String {
    let signature = mac_for(secret, payload).finalize().into_bytes();
    format!("{}.{}", payload, to_base64_url(&signature))
}

/// Verify a token produced by [`sign_token`] and return its payload.
///
/// Signature comparison is constant-time.
pub fn verify_token<'a>(secret: &[u8; 32], token: &'a str) -> Option<&'a str> {
    let (payload, signature_b64) = token.split_once('.')?;
    if signature_b64.contains('.') {
        return None;
    }

    let signature = general_purpose::URL_SAFE_NO_PAD
        .decode(signature_b64)
        .ok()?;

    mac_for(secret, payload)
        .verify_slice(&signature)
        .ok()
        .map(|_| payload)
}
