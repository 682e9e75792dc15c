//! Webhook signature verification for payment-provider events.
//!
//! The provider signs the raw request body with HMAC-SHA256 and sends the
//! result in a `t=<unix>,v1=<hex>` header. The signed message is
//! `"{t}.{body}"`; any of the `v1` entries matching passes.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("signature header missing")]
    MissingHeader,

    #[error("malformed signature header")]
    Malformed,

    #[error("signature mismatch")]
    Mismatch,
}

/// Computes the hex-encoded HMAC-SHA256 signature over `"{timestamp}.{payload}"`.
pub fn compute(payload: &[u8], timestamp: i64, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("hmac accepts any key length");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

/// Verifies a `t=...,v1=...` header against the raw request body.
pub fn verify(payload: &[u8], header: &str, secret: &str) -> Result<(), SignatureError> {
    if header.is_empty() {
        return Err(SignatureError::MissingHeader);
    }

    let mut timestamp: Option<i64> = None;
    let mut candidates: Vec<&str> = Vec::new();

    for part in header.split(',') {
        match part.trim().split_once('=') {
            Some(("t", value)) => timestamp = value.parse().ok(),
            Some(("v1", value)) => candidates.push(value),
            _ => {}
        }
    }

    let timestamp = timestamp.ok_or(SignatureError::Malformed)?;
    if candidates.is_empty() {
        return Err(SignatureError::Malformed);
    }

    let expected = compute(payload, timestamp, secret);
    if candidates.iter().any(|c| constant_time_eq(c, &expected)) {
        Ok(())
    } else {
        Err(SignatureError::Mismatch)
    }
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes().zip(b.bytes()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test";

    fn signed_header(payload: &[u8], timestamp: i64) -> String {
        format!("t={timestamp},v1={}", compute(payload, timestamp, SECRET))
    }

    #[test]
    fn verify_accepts_valid_signature() {
        let payload = br#"{"type":"charge.succeeded","created":1700000000}"#;
        let header = signed_header(payload, 1700000000);
        assert!(verify(payload, &header, SECRET).is_ok());
    }

    #[test]
    fn verify_accepts_any_matching_v1() {
        let payload = b"body";
        let good = compute(payload, 42, SECRET);
        let header = format!("t=42,v1=deadbeef,v1={good}");
        assert!(verify(payload, &header, SECRET).is_ok());
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let payload = b"body";
        let header = format!("t=42,v1={}", compute(payload, 42, "other_secret"));
        assert_eq!(verify(payload, &header, SECRET), Err(SignatureError::Mismatch));
    }

    #[test]
    fn verify_rejects_tampered_payload() {
        let header = signed_header(b"original", 42);
        assert_eq!(
            verify(b"tampered", &header, SECRET),
            Err(SignatureError::Mismatch)
        );
    }

    #[test]
    fn verify_rejects_missing_or_malformed_header() {
        assert_eq!(verify(b"x", "", SECRET), Err(SignatureError::MissingHeader));
        assert_eq!(verify(b"x", "garbage", SECRET), Err(SignatureError::Malformed));
        assert_eq!(verify(b"x", "t=42", SECRET), Err(SignatureError::Malformed));
        assert_eq!(verify(b"x", "v1=abc", SECRET), Err(SignatureError::Malformed));
    }
}
