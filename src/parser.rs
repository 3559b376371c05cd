//! Free-text build messages sometimes embed structured data inline; the
//! parsers here pull it back out.

mod common;
mod code;

use tracing::{event, Level};

/// Splits an inline diagnostic code off the front of a message.
///
/// An explicit code wins and leaves the message untouched. Otherwise a
/// leading `XX9999:` prefix is stripped and returned as the code. With no
/// match the code is empty and the message is unchanged.
pub fn extract_code<'a>(message: &'a str, explicit_code: Option<&'a str>) -> (&'a str, &'a str) {
    if let Some(code) = explicit_code.filter(|c| !c.trim().is_empty()) {
        return (message, code);
    }

    match code::code_prefix(message) {
        Ok((rest, code)) => {
            event!(Level::TRACE, "Extracted inline diagnostic code '{}'", code);
            (rest, code)
        }
        Err(_) => (message, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_inline_code() {
        let (message, code) = extract_code("CS1234: missing semicolon", None);
        assert_eq!(code, "CS1234");
        assert_eq!(message, "missing semicolon");
    }

    #[test]
    fn test_extract_no_match() {
        let (message, code) = extract_code("hello world", None);
        assert_eq!(code, "");
        assert_eq!(message, "hello world");
    }

    #[test]
    fn test_explicit_code_wins() {
        let (message, code) = extract_code("CS1234: missing semicolon", Some("XY0001"));
        assert_eq!(code, "XY0001");
        assert_eq!(message, "CS1234: missing semicolon");
    }

    #[test]
    fn test_blank_explicit_code_is_ignored() {
        let (message, code) = extract_code("CS1234: missing semicolon", Some("  "));
        assert_eq!(code, "CS1234");
        assert_eq!(message, "missing semicolon");

        let (message, code) = extract_code("CS1234: missing semicolon", Some(""));
        assert_eq!(code, "CS1234");
        assert_eq!(message, "missing semicolon");
    }

    #[test]
    fn test_code_must_be_anchored() {
        let (message, code) = extract_code("error CS1234: missing semicolon", None);
        assert_eq!(code, "");
        assert_eq!(message, "error CS1234: missing semicolon");
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(extract_code("", None), ("", ""));
    }
}
