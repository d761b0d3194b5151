use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures file, line, and column.
///
/// **WHY THIS MATTERS**: Every setup, config and application error in the workspace
/// carries an ErrorLocation. If capture breaks, all of them lose their debugging value.
///
/// **BUG THIS CATCHES**: Would catch if `Location::caller()` stops being propagated or
/// the file/line/column fields are mixed up.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN: Current caller location
    // WHEN: Creating ErrorLocation from caller
    let (location, expected_line) = (ErrorLocation::from(Location::caller()), line!());

    // THEN: Should capture file, line, and column
    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert_eq!(location.line, expected_line, "Should capture correct line number");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies the Display format `[file:line:column]`.
///
/// **WHY THIS MATTERS**: Error messages append this suffix. A format change makes
/// every log line harder to grep.
///
/// **BUG THIS CATCHES**: Would catch if brackets or separators are dropped.
#[test]
fn given_error_location_when_displayed_then_uses_bracketed_format() {
    // GIVEN: A hand-built location
    let location = ErrorLocation {
        file: "src/http_client/mod.rs",
        line: 42,
        column: 7,
    };

    // WHEN: Formatting
    let formatted = location.to_string();

    // THEN: Bracketed file:line:column
    assert_eq!(formatted, "[src/http_client/mod.rs:42:7]");
}
