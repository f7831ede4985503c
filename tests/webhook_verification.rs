use chrono::Utc;
use resend_client::webhook::{
    self, compute_signature, decode_secret, signed_content, HeaderKind, VerificationError,
    WebhookHeaders, WebhookVerifier,
};

const SECRET: &str = "whsec_MfKQ9r8GKYqrTwjUPD8ILPZIo2LaLaSw";
const MSG_ID: &str = "msg_2Lh9KX9FZ5Z5Z5Z5Z5Z5Z5Z5Z";
const PAYLOAD: &str = r#"{"type":"email.sent","created_at":"2024-01-01T00:00:00.000Z"}"#;
const NOW: i64 = 1_704_067_200;

fn sign(id: &str, timestamp: &str, payload: &str) -> String {
    let key = decode_secret(SECRET).unwrap();
    let content = signed_content(id, timestamp, payload.as_bytes());
    format!("v1,{}", compute_signature(&key, &content))
}

fn verify_at(
    payload: &str,
    id: &str,
    timestamp: &str,
    signature: &str,
    now: i64,
) -> Result<(), VerificationError> {
    let headers = WebhookHeaders::new(id, timestamp, signature);
    WebhookVerifier::default().verify_at(payload.as_bytes(), &headers, SECRET, now)
}

#[test]
fn end_to_end_with_current_time() {
    let ts = Utc::now().timestamp().to_string();
    let sig = sign(MSG_ID, &ts, PAYLOAD);
    let headers = WebhookHeaders::new(MSG_ID, &ts, &sig);

    assert_eq!(webhook::verify(PAYLOAD, &headers, SECRET), Ok(()));
}

#[test]
fn round_trip_for_various_inputs() {
    let cases = [
        ("msg_1", "{}"),
        ("msg_unicode", r#"{"subject":"héllo wörld ✓"}"#),
        ("msg_whitespace", "  {\n  \"type\": \"email.bounced\"\r\n}\n"),
        ("msg_2Lh9KX9FZ5Z5Z5Z5Z5Z5Z5Z5Z", PAYLOAD),
    ];

    for (id, payload) in cases {
        let ts = NOW.to_string();
        let sig = sign(id, &ts, payload);

        assert_eq!(verify_at(payload, id, &ts, &sig, NOW), Ok(()), "case {id}");
    }
}

#[test]
fn tampered_payload_is_rejected() {
    let ts = NOW.to_string();
    let sig = sign(MSG_ID, &ts, PAYLOAD);
    let tampered = r#"{"type":"email.delivered","created_at":"2024-01-01T00:00:00.000Z"}"#;

    assert_eq!(
        verify_at(tampered, MSG_ID, &ts, &sig, NOW),
        Err(VerificationError::NoMatchingSignature)
    );
}

#[test]
fn single_byte_changes_are_rejected() {
    let ts = NOW.to_string();
    let sig = sign(MSG_ID, &ts, PAYLOAD);

    let mut payload = PAYLOAD.to_string();
    payload.push(' ');
    assert_eq!(
        verify_at(&payload, MSG_ID, &ts, &sig, NOW),
        Err(VerificationError::NoMatchingSignature)
    );

    assert_eq!(
        verify_at(PAYLOAD, "msg_2Lh9KX9FZ5Z5Z5Z5Z5Z5Z5Z5Y", &ts, &sig, NOW),
        Err(VerificationError::NoMatchingSignature)
    );

    let other_ts = (NOW + 1).to_string();
    assert_eq!(
        verify_at(PAYLOAD, MSG_ID, &other_ts, &sig, NOW),
        Err(VerificationError::NoMatchingSignature)
    );
}

#[test]
fn invalid_signature_is_rejected() {
    let ts = NOW.to_string();

    assert_eq!(
        verify_at(PAYLOAD, MSG_ID, &ts, "v1,invalid_signature", NOW),
        Err(VerificationError::NoMatchingSignature)
    );
}

#[test]
fn replay_window_boundaries_in_the_past() {
    for (age, accepted) in [(299, true), (300, true), (301, false), (400, false)] {
        let ts = (NOW - age).to_string();
        let sig = sign(MSG_ID, &ts, PAYLOAD);

        let result = verify_at(PAYLOAD, MSG_ID, &ts, &sig, NOW);

        if accepted {
            assert_eq!(result, Ok(()), "age {age}");
        } else {
            assert_eq!(
                result,
                Err(VerificationError::TimestampOutOfTolerance { delta: age }),
                "age {age}"
            );
        }
    }
}

#[test]
fn replay_window_boundaries_in_the_future() {
    for (ahead, accepted) in [(299, true), (300, true), (301, false), (400, false)] {
        let ts = (NOW + ahead).to_string();
        let sig = sign(MSG_ID, &ts, PAYLOAD);

        let result = verify_at(PAYLOAD, MSG_ID, &ts, &sig, NOW);

        if accepted {
            assert_eq!(result, Ok(()), "ahead {ahead}");
        } else {
            assert_eq!(
                result,
                Err(VerificationError::TimestampOutOfTolerance { delta: -ahead }),
                "ahead {ahead}"
            );
        }
    }
}

#[test]
fn stale_timestamp_with_wall_clock() {
    let ts = (Utc::now().timestamp() - 400).to_string();
    let sig = sign(MSG_ID, &ts, PAYLOAD);
    let headers = WebhookHeaders::new(MSG_ID, &ts, &sig);

    let result = webhook::verify(PAYLOAD, &headers, SECRET);

    assert!(matches!(
        result,
        Err(VerificationError::TimestampOutOfTolerance { .. })
    ));
}

#[test]
fn rotated_keys_any_entry_may_match() {
    let ts = NOW.to_string();
    let valid = sign(MSG_ID, &ts, PAYLOAD);

    let header = format!("v1,bad {valid}");
    assert_eq!(verify_at(PAYLOAD, MSG_ID, &ts, &header, NOW), Ok(()));

    let header = format!("v1,invalid_signature_here {valid}");
    assert_eq!(verify_at(PAYLOAD, MSG_ID, &ts, &header, NOW), Ok(()));

    let header = format!("{valid} v1,bad");
    assert_eq!(verify_at(PAYLOAD, MSG_ID, &ts, &header, NOW), Ok(()));
}

#[test]
fn signature_from_another_secret_is_rejected() {
    let ts = NOW.to_string();
    let other_key = decode_secret("whsec_LCirqMN5FjMrOGiAqbUfBAdbEdA0Iezg").unwrap();
    let content = signed_content(MSG_ID, &ts, PAYLOAD.as_bytes());
    let sig = format!("v1,{}", compute_signature(&other_key, &content));

    assert_eq!(
        verify_at(PAYLOAD, MSG_ID, &ts, &sig, NOW),
        Err(VerificationError::NoMatchingSignature)
    );
}

#[test]
fn missing_inputs_fail_fast_with_specific_variant() {
    let ts = NOW.to_string();
    let verifier = WebhookVerifier::default();
    let full = WebhookHeaders::new(MSG_ID, &ts, "v1,sig");

    assert_eq!(
        verifier.verify_at(b"", &full, SECRET, NOW),
        Err(VerificationError::MissingPayload)
    );
    assert_eq!(
        verifier.verify_at(PAYLOAD.as_bytes(), &full, "", NOW),
        Err(VerificationError::MissingSecret)
    );

    let cases = [
        (WebhookHeaders { id: None, ..full }, HeaderKind::Id),
        (WebhookHeaders { id: Some(""), ..full }, HeaderKind::Id),
        (WebhookHeaders { timestamp: None, ..full }, HeaderKind::Timestamp),
        (WebhookHeaders { timestamp: Some(""), ..full }, HeaderKind::Timestamp),
        (WebhookHeaders { signature: None, ..full }, HeaderKind::Signature),
        (WebhookHeaders { signature: Some(""), ..full }, HeaderKind::Signature),
    ];
    for (headers, kind) in cases {
        assert_eq!(
            verifier.verify_at(PAYLOAD.as_bytes(), &headers, SECRET, NOW),
            Err(VerificationError::MissingHeader(kind))
        );
    }
}

#[test]
fn missing_inputs_win_over_bad_secret_and_stale_timestamp() {
    let stale = (NOW - 10_000).to_string();
    let headers = WebhookHeaders::new(MSG_ID, &stale, "v1,sig");

    let result = WebhookVerifier::default().verify_at(b"", &headers, "whsec_!!!", NOW);

    assert_eq!(result, Err(VerificationError::MissingPayload));
}

#[test]
fn secret_prefix_is_optional() {
    let ts = NOW.to_string();
    let sig = sign(MSG_ID, &ts, PAYLOAD);
    let headers = WebhookHeaders::new(MSG_ID, &ts, &sig);
    let bare = SECRET.strip_prefix("whsec_").unwrap();
    let verifier = WebhookVerifier::default();

    assert_eq!(
        verifier.verify_at(PAYLOAD.as_bytes(), &headers, SECRET, NOW),
        verifier.verify_at(PAYLOAD.as_bytes(), &headers, bare, NOW)
    );
    assert_eq!(
        verifier.verify_at(PAYLOAD.as_bytes(), &headers, bare, NOW),
        Ok(())
    );
}

#[test]
fn invalid_secret_encoding_is_reported() {
    let ts = NOW.to_string();
    let headers = WebhookHeaders::new(MSG_ID, &ts, "v1,sig");

    let result = WebhookVerifier::default().verify_at(
        PAYLOAD.as_bytes(),
        &headers,
        "whsec_not_valid_base64!!!",
        NOW,
    );

    let err = result.unwrap_err();
    assert!(matches!(err, VerificationError::InvalidSecretEncoding(_)));
    assert!(err.to_string().starts_with("failed to decode webhook secret"));
}

#[test]
fn verifier_is_shareable_across_threads() {
    let verifier = WebhookVerifier::default();
    let ts = NOW.to_string();
    let sig = sign(MSG_ID, &ts, PAYLOAD);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let headers = WebhookHeaders::new(MSG_ID, &ts, &sig);
                assert_eq!(
                    verifier.verify_at(PAYLOAD.as_bytes(), &headers, SECRET, NOW),
                    Ok(())
                );
            });
        }
    });
}
