use crate::ApiKey;

/// **VALUE**: Verifies the key never shows up in Debug or Display output.
///
/// **WHY THIS MATTERS**: Endpoint descriptors hold the key and are logged at debug
/// level. A leaky Debug impl would write the key to `moviedb.log`.
///
/// **BUG THIS CATCHES**: Would catch a switch to `#[derive(Debug)]`.
#[test]
fn given_api_key_when_formatted_then_value_is_redacted() {
    // GIVEN: A key with a recognisable value
    let key = ApiKey::new("super-secret-123");

    // WHEN: Formatting with Debug and Display
    let debug = format!("{key:?}");
    let display = format!("{key}");

    // THEN: Neither contains the secret
    assert!(!debug.contains("super-secret-123"));
    assert!(!display.contains("super-secret-123"));
    assert_eq!(key.expose(), "super-secret-123");
    assert_eq!(key.len(), 16);
}

/// **VALUE**: Verifies placeholder detection for blank and template values.
///
/// **WHY THIS MATTERS**: A `.env` copied from a template should be treated as
/// "no key configured", not sent to the server.
///
/// **BUG THIS CATCHES**: Would catch case-sensitive or whitespace-sensitive matching.
#[test]
fn given_template_values_when_is_placeholder_then_returns_true() {
    assert!(ApiKey::new("").is_placeholder());
    assert!(ApiKey::new("   ").is_placeholder());
    assert!(ApiKey::new("CHANGEME").is_placeholder());
    assert!(ApiKey::new(" your-api-key ").is_placeholder());

    assert!(!ApiKey::new("0123456789abcdef").is_placeholder());
}

/// **VALUE**: Verifies `len` and `is_empty` describe the same buffer.
///
/// **BUG THIS CATCHES**: Would catch `is_empty` trimming while `len` counts whitespace,
/// which reports a two-byte key as empty.
#[test]
fn given_whitespace_key_when_len_and_is_empty_then_they_agree() {
    let key = ApiKey::new("  ");

    assert_eq!(key.len(), 2);
    assert!(!key.is_empty());
    assert!(key.is_placeholder());
    assert!(ApiKey::new("").is_empty());
}
