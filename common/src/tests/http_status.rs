use crate::HttpStatusCode;

/// **VALUE**: Verifies the success band is exactly 200..=299.
///
/// **WHY THIS MATTERS**: Only success codes proceed to body decoding. An off-by-one
/// would decode error bodies or reject valid 299 responses.
///
/// **BUG THIS CATCHES**: Would catch an inclusive/exclusive range mistake.
#[test]
fn given_status_codes_when_is_success_then_only_2xx_band_matches() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(204).is_success());
    assert!(HttpStatusCode(299).is_success());

    assert!(!HttpStatusCode(199).is_success());
    assert!(!HttpStatusCode(300).is_success());
    assert!(!HttpStatusCode(403).is_success());
    assert!(!HttpStatusCode(-1004).is_success());
}

/// **VALUE**: Verifies negative platform codes are representable and displayed as-is.
///
/// **WHY THIS MATTERS**: Transports may report codes like -1004; they must reach the
/// classifier unchanged so they fall into the "unexpected" bucket.
///
/// **BUG THIS CATCHES**: Would catch a switch back to an unsigned representation.
#[test]
fn given_negative_code_when_converted_and_displayed_then_value_is_preserved() {
    let status = HttpStatusCode::from(-1004);

    assert_eq!(status.as_i32(), -1004);
    assert_eq!(status.to_string(), "-1004");
}

/// **VALUE**: Verifies u16 conversion (as reported by HTTP libraries) maps to the same code.
///
/// **BUG THIS CATCHES**: Would catch a lossy or shifted conversion.
#[test]
fn given_u16_status_when_converted_then_matches_named_constant() {
    assert_eq!(HttpStatusCode::from(403u16), HttpStatusCode::FORBIDDEN);
    assert_eq!(HttpStatusCode::from(404u16), HttpStatusCode::NOT_FOUND);
    assert_eq!(
        HttpStatusCode::from(500u16),
        HttpStatusCode::INTERNAL_SERVER_ERROR
    );
}
