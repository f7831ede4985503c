// webhook.rs
//! Verification of inbound Resend webhooks.
//!
//! Resend signs webhook deliveries with the Svix scheme. Each delivery carries
//! three headers:
//!
//! * `svix-id` - the message identifier
//! * `svix-timestamp` - Unix seconds at signing time
//! * `svix-signature` - space separated `<version>,<base64>` entries
//!
//! The signature is HMAC-SHA256 over `"{id}.{timestamp}.{payload}"` keyed with
//! the base64-decoded signing secret. Several entries may be present while a
//! secret is being rotated; any one of them matching is enough.
//!
//! ```ignore
//! use resend_client::webhook::{WebhookHeaders, WebhookVerifier};
//!
//! let headers = WebhookHeaders::new(msg_id, timestamp, signature);
//! WebhookVerifier::default().verify(body, &headers, "whsec_...")?;
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;
use subtle::ConstantTimeEq;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

pub const ID_HEADER: &str = "svix-id";
pub const TIMESTAMP_HEADER: &str = "svix-timestamp";
pub const SIGNATURE_HEADER: &str = "svix-signature";

/// Prefix Resend puts in front of the base64 signing secret.
pub const SECRET_PREFIX: &str = "whsec_";

/// Replay window applied when no tolerance is given.
pub const DEFAULT_TOLERANCE_SECS: u64 = 300;

/// One of the three headers a signed delivery must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    Id,
    Timestamp,
    Signature,
}

impl HeaderKind {
    pub fn name(self) -> &'static str {
        match self {
            HeaderKind::Id => ID_HEADER,
            HeaderKind::Timestamp => TIMESTAMP_HEADER,
            HeaderKind::Signature => SIGNATURE_HEADER,
        }
    }
}

impl fmt::Display for HeaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reasons a delivery is rejected. None of them are retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("payload cannot be empty")]
    MissingPayload,

    #[error("webhook secret cannot be empty")]
    MissingSecret,

    #[error("{0} header is required")]
    MissingHeader(HeaderKind),

    #[error("invalid svix-timestamp header: {0:?}")]
    InvalidTimestamp(String),

    #[error("failed to decode webhook secret: {0}")]
    InvalidSecretEncoding(#[source] base64::DecodeError),

    /// `delta` is `now - timestamp`; negative for deliveries dated in the future.
    #[error("timestamp outside tolerance window (delta {delta}s)")]
    TimestampOutOfTolerance { delta: i64 },

    #[error("no matching signature found")]
    NoMatchingSignature,
}

/// The signature headers of one delivery, as received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebhookHeaders<'a> {
    pub id: Option<&'a str>,
    pub timestamp: Option<&'a str>,
    pub signature: Option<&'a str>,
}

impl<'a> WebhookHeaders<'a> {
    pub fn new(id: &'a str, timestamp: &'a str, signature: &'a str) -> Self {
        Self {
            id: Some(id),
            timestamp: Some(timestamp),
            signature: Some(signature),
        }
    }

    /// Pulls the three headers out of any header container, keyed by the
    /// lowercase `svix-*` names.
    pub fn from_fn<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<&'a str>,
    {
        Self {
            id: lookup(ID_HEADER),
            timestamp: lookup(TIMESTAMP_HEADER),
            signature: lookup(SIGNATURE_HEADER),
        }
    }

    fn require(value: Option<&'a str>, kind: HeaderKind) -> Result<&'a str, VerificationError> {
        value
            .filter(|v| !v.is_empty())
            .ok_or(VerificationError::MissingHeader(kind))
    }
}

/// A single `<version>,<signature>` entry of the signature header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureEntry<'a> {
    pub version: &'a str,
    pub signature: &'a str,
}

/// Decodes a signing secret into key bytes, with or without the `whsec_` prefix.
pub fn decode_secret(secret: &str) -> Result<Vec<u8>, VerificationError> {
    let encoded = secret.strip_prefix(SECRET_PREFIX).unwrap_or(secret);
    STANDARD
        .decode(encoded)
        .map_err(VerificationError::InvalidSecretEncoding)
}

/// The exact bytes the sender signed: `{id}.{timestamp}.{payload}`.
pub fn signed_content(id: &str, timestamp: &str, payload: &[u8]) -> Vec<u8> {
    let mut content = Vec::with_capacity(id.len() + timestamp.len() + payload.len() + 2);
    content.extend_from_slice(id.as_bytes());
    content.push(b'.');
    content.extend_from_slice(timestamp.as_bytes());
    content.push(b'.');
    content.extend_from_slice(payload);
    content
}

fn digest(key: &[u8], content: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(content);
    mac.finalize().into_bytes().to_vec()
}

/// Base64 HMAC-SHA256 of `content` under `key`.
pub fn compute_signature(key: &[u8], content: &[u8]) -> String {
    STANDARD.encode(digest(key, content))
}

/// Splits a signature header into its entries. Malformed tokens are skipped.
pub fn parse_signature_header(header: &str) -> impl Iterator<Item = SignatureEntry<'_>> {
    header.split(' ').filter_map(|token| {
        let (version, signature) = token.split_once(',')?;
        if version.is_empty() || signature.is_empty() || signature.contains(',') {
            return None;
        }
        Some(SignatureEntry { version, signature })
    })
}

/// Byte equality whose running time does not depend on where the inputs differ.
pub fn constant_time_eq(expected: &[u8], candidate: &[u8]) -> bool {
    if expected.len() != candidate.len() {
        return false;
    }
    expected.ct_eq(candidate).into()
}

/// Rejects timestamps more than `tolerance_secs` away from `now`, either side.
pub fn check_timestamp(
    timestamp: i64,
    now: i64,
    tolerance_secs: u64,
) -> Result<(), VerificationError> {
    let delta = now.saturating_sub(timestamp);
    if delta.unsigned_abs() > tolerance_secs {
        return Err(VerificationError::TimestampOutOfTolerance { delta });
    }
    Ok(())
}

/// Verifies signed webhook deliveries against a replay window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebhookVerifier {
    tolerance_secs: u64,
}

impl Default for WebhookVerifier {
    fn default() -> Self {
        Self::with_tolerance(DEFAULT_TOLERANCE_SECS)
    }
}

impl WebhookVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(tolerance_secs: u64) -> Self {
        Self { tolerance_secs }
    }

    pub fn tolerance_secs(&self) -> u64 {
        self.tolerance_secs
    }

    /// Verifies `payload` against the current wall clock.
    ///
    /// `payload` must be the body exactly as received, before any JSON
    /// parsing.
    pub fn verify(
        &self,
        payload: &[u8],
        headers: &WebhookHeaders<'_>,
        secret: &str,
    ) -> Result<(), VerificationError> {
        self.verify_at(payload, headers, secret, Utc::now().timestamp())
    }

    /// Same as [`verify`](Self::verify) with `now` given in Unix seconds.
    pub fn verify_at(
        &self,
        payload: &[u8],
        headers: &WebhookHeaders<'_>,
        secret: &str,
        now: i64,
    ) -> Result<(), VerificationError> {
        if payload.is_empty() {
            return Err(VerificationError::MissingPayload);
        }
        if secret.is_empty() {
            return Err(VerificationError::MissingSecret);
        }
        let id = WebhookHeaders::require(headers.id, HeaderKind::Id)?;
        let timestamp = WebhookHeaders::require(headers.timestamp, HeaderKind::Timestamp)?;
        let signature = WebhookHeaders::require(headers.signature, HeaderKind::Signature)?;

        let signed_at: i64 = timestamp
            .parse()
            .map_err(|_| VerificationError::InvalidTimestamp(timestamp.to_owned()))?;
        check_timestamp(signed_at, now, self.tolerance_secs)?;

        let content = signed_content(id, timestamp, payload);
        let key = decode_secret(secret)?;
        let expected = digest(&key, &content);

        let matched = parse_signature_header(signature)
            .filter_map(|entry| STANDARD.decode(entry.signature).ok())
            .any(|candidate| constant_time_eq(&expected, &candidate));

        if matched {
            Ok(())
        } else {
            Err(VerificationError::NoMatchingSignature)
        }
    }
}

/// Verifies with the default 300 second tolerance.
pub fn verify(
    payload: impl AsRef<[u8]>,
    headers: &WebhookHeaders<'_>,
    secret: &str,
) -> Result<(), VerificationError> {
    WebhookVerifier::default().verify(payload.as_ref(), headers, secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_MfKQ9r8GKYqrTwjUPD8ILPZIo2LaLaSw";
    const MSG_ID: &str = "msg_2Lh9KX9FZ5Z5Z5Z5Z5Z5Z5Z5Z";
    const PAYLOAD: &str = r#"{"type":"email.sent","created_at":"2024-01-01T00:00:00.000Z"}"#;
    const NOW: i64 = 1_704_067_200;

    fn sign(timestamp: &str) -> String {
        let key = decode_secret(SECRET).unwrap();
        let content = signed_content(MSG_ID, timestamp, PAYLOAD.as_bytes());
        format!("v1,{}", compute_signature(&key, &content))
    }

    #[test]
    fn decode_secret_strips_prefix() {
        let with_prefix = decode_secret(SECRET).unwrap();
        let without_prefix = decode_secret("MfKQ9r8GKYqrTwjUPD8ILPZIo2LaLaSw").unwrap();

        assert_eq!(with_prefix, without_prefix);
        assert_eq!(with_prefix.len(), 24);
    }

    #[test]
    fn decode_secret_rejects_invalid_base64() {
        let result = decode_secret("whsec_not_valid_base64!!!");

        assert!(matches!(
            result,
            Err(VerificationError::InvalidSecretEncoding(_))
        ));
    }

    #[test]
    fn signed_content_is_plain_concatenation() {
        let content = signed_content("msg_1", "1700000000", b" {\"a\":1}\r\n");

        assert_eq!(content, b"msg_1.1700000000. {\"a\":1}\r\n".to_vec());
    }

    #[test]
    fn signed_content_keeps_non_utf8_payload() {
        let content = signed_content("id", "1", &[0xff, 0xfe]);

        assert_eq!(content, vec![b'i', b'd', b'.', b'1', b'.', 0xff, 0xfe]);
    }

    #[test]
    fn compute_signature_matches_known_vector() {
        // RFC 4231 test case 2
        let signature = compute_signature(b"Jefe", b"what do ya want for nothing?");

        assert_eq!(signature, "W9zBRr9gdU5qBCQmCJV1x1oAPwidJzmDnexYuWTsOEM=");
    }

    #[test]
    fn parse_signature_header_yields_entries_in_order() {
        let entries: Vec<_> = parse_signature_header("v1,abc= v2,def==").collect();

        assert_eq!(
            entries,
            vec![
                SignatureEntry {
                    version: "v1",
                    signature: "abc="
                },
                SignatureEntry {
                    version: "v2",
                    signature: "def=="
                },
            ]
        );
    }

    #[test]
    fn parse_signature_header_skips_malformed_tokens() {
        let entries: Vec<_> =
            parse_signature_header("garbage  v1, ,sig v1,a,b v1,ok").collect();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].signature, "ok");
    }

    #[test]
    fn parse_signature_header_empty_is_empty() {
        assert_eq!(parse_signature_header("").count(), 0);
    }

    #[test]
    fn constant_time_eq_compares_contents_and_length() {
        assert!(constant_time_eq(b"abcdef", b"abcdef"));
        assert!(!constant_time_eq(b"abcdef", b"abcdeg"));
        assert!(!constant_time_eq(b"abcdef", b"abcde"));
        assert!(constant_time_eq(b"", b""));
    }

    #[test]
    fn check_timestamp_is_inclusive_on_both_sides() {
        assert!(check_timestamp(NOW - 300, NOW, 300).is_ok());
        assert!(check_timestamp(NOW + 300, NOW, 300).is_ok());
        assert_eq!(
            check_timestamp(NOW - 301, NOW, 300),
            Err(VerificationError::TimestampOutOfTolerance { delta: 301 })
        );
        assert_eq!(
            check_timestamp(NOW + 301, NOW, 300),
            Err(VerificationError::TimestampOutOfTolerance { delta: -301 })
        );
    }

    #[test]
    fn check_timestamp_handles_extreme_values() {
        assert!(check_timestamp(i64::MIN, NOW, 300).is_err());
        assert!(check_timestamp(i64::MAX, NOW, 300).is_err());
    }

    #[test]
    fn verify_at_accepts_valid_signature() {
        let ts = NOW.to_string();
        let sig = sign(&ts);
        let headers = WebhookHeaders::new(MSG_ID, &ts, &sig);

        let result =
            WebhookVerifier::default().verify_at(PAYLOAD.as_bytes(), &headers, SECRET, NOW);

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn verify_at_rejects_non_numeric_timestamp() {
        let headers = WebhookHeaders::new(MSG_ID, "yesterday", "v1,sig");

        let result =
            WebhookVerifier::default().verify_at(PAYLOAD.as_bytes(), &headers, SECRET, NOW);

        assert_eq!(
            result,
            Err(VerificationError::InvalidTimestamp("yesterday".to_string()))
        );
    }

    #[test]
    fn verify_at_checks_timestamp_before_secret() {
        let ts = (NOW - 1_000).to_string();
        let headers = WebhookHeaders::new(MSG_ID, &ts, "v1,sig");

        let result = WebhookVerifier::default().verify_at(
            PAYLOAD.as_bytes(),
            &headers,
            "whsec_not_valid_base64!!!",
            NOW,
        );

        assert_eq!(
            result,
            Err(VerificationError::TimestampOutOfTolerance { delta: 1_000 })
        );
    }

    #[test]
    fn verify_at_ignores_undecodable_candidates() {
        let ts = NOW.to_string();
        let header = format!("v1,!!notbase64!! {}", sign(&ts));
        let headers = WebhookHeaders::new(MSG_ID, &ts, &header);

        let result =
            WebhookVerifier::default().verify_at(PAYLOAD.as_bytes(), &headers, SECRET, NOW);

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn custom_tolerance_is_applied() {
        let ts = (NOW - 10).to_string();
        let sig = sign(&ts);
        let headers = WebhookHeaders::new(MSG_ID, &ts, &sig);
        let verifier = WebhookVerifier::with_tolerance(5);

        let result = verifier.verify_at(PAYLOAD.as_bytes(), &headers, SECRET, NOW);

        assert_eq!(
            result,
            Err(VerificationError::TimestampOutOfTolerance { delta: 10 })
        );
        assert_eq!(verifier.tolerance_secs(), 5);
    }

    #[test]
    fn from_fn_reads_svix_header_names() {
        let headers = WebhookHeaders::from_fn(|name| match name {
            "svix-id" => Some("msg_1"),
            "svix-timestamp" => Some("123"),
            "svix-signature" => Some("v1,abc"),
            _ => None,
        });

        assert_eq!(headers, WebhookHeaders::new("msg_1", "123", "v1,abc"));
    }

    #[test]
    fn error_messages_name_the_header() {
        assert_eq!(
            VerificationError::MissingHeader(HeaderKind::Timestamp).to_string(),
            "svix-timestamp header is required"
        );
    }
}
