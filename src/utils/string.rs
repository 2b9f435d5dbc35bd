//! String manipulation utilities
//!
//! This module provides the placeholder formatter and the character-level
//! helpers. Absent input is modelled with `Option<&str>` and is kept distinct
//! from the empty string.

use std::fmt::{Display, Write};

/// Placeholder token substituted by [`format`]
pub const PLACEHOLDER: &str = "{}";

const ESCAPE: u8 = b'\\';

/// Substitute `{}` placeholders in a pattern, left to right
///
/// This is a runtime, lenient formatter: placeholder and argument counts do
/// not have to match.
/// - A `None`, empty or whitespace-only pattern yields `""`.
/// - With no arguments the pattern is returned untouched.
/// - Placeholders without a matching argument stay as a literal `{}`.
/// - Arguments without a matching placeholder are ignored.
/// - `\{}` is printed as a literal `{}` and consumes no argument, while
///   `\\{}` prints one backslash followed by the argument.
/// - An argument whose `Display` impl fails contributes only what it wrote
///   before failing.
///
/// # Arguments
/// * `pattern` - Pattern containing `{}` placeholders
/// * `args` - Values substituted in order, rendered with `Display`
///
/// # Example
/// ```rust
/// use strutil::utils::string::format;
///
/// assert_eq!(format(Some("Hello {}, you are {}"), &[&"Ann", &42]), "Hello Ann, you are 42");
/// assert_eq!(format(Some("{} and {}"), &[&1]), "1 and {}");
/// assert_eq!(format(None, &[&1]), "");
/// ```
pub fn format(pattern: Option<&str>, args: &[&dyn Display]) -> String {
    let pattern = match pattern {
        Some(pattern) if !is_blank(pattern) => pattern,
        _ => return String::new(),
    };

    if args.is_empty() {
        return pattern.to_string();
    }

    let mut result = String::with_capacity(pattern.len() + args.len() * 8);
    let mut cursor = 0;
    let mut next_arg = 0;

    while next_arg < args.len() {
        let at = match pattern[cursor..].find(PLACEHOLDER) {
            Some(offset) => cursor + offset,
            None => break,
        };

        if is_escaped(pattern, at) {
            if !is_escaped(pattern, at - 1) {
                // Literal "{" here, the "}" is copied with the following text
                result.push_str(&pattern[cursor..at - 1]);
                result.push('{');
                cursor = at + 1;
                continue;
            }
            // Double escape: keep a single backslash, then substitute
            result.push_str(&pattern[cursor..at - 1]);
        } else {
            result.push_str(&pattern[cursor..at]);
        }

        let _ = write!(result, "{}", args[next_arg]);
        next_arg += 1;
        cursor = at + PLACEHOLDER.len();
    }

    result.push_str(&pattern[cursor..]);
    result
}

/// Whether a pattern holds only blank characters
///
/// Non-breaking spaces (U+00A0, U+2007, U+202F) and NEL (U+0085) are not
/// blank; the information separators U+001C..U+001F are.
fn is_blank(pattern: &str) -> bool {
    pattern.chars().all(|c| match c {
        '\u{1c}'..='\u{1f}' => true,
        '\u{85}' | '\u{a0}' | '\u{2007}' | '\u{202f}' => false,
        _ => c.is_whitespace(),
    })
}

fn is_escaped(pattern: &str, at: usize) -> bool {
    at > 0 && pattern.as_bytes()[at - 1] == ESCAPE
}

/// Format with [`format`] using inline arguments
///
/// # Example
/// ```rust
/// use strutil::lenient_format;
///
/// assert_eq!(lenient_format!("{}-{}", 1, 2, 3), "1-2");
/// assert_eq!(lenient_format!("no args {}"), "no args {}");
/// ```
#[macro_export]
macro_rules! lenient_format {
    ($pattern:expr $(,)?) => {
        $crate::utils::string::format(::std::option::Option::Some($pattern), &[])
    };
    ($pattern:expr, $($arg:expr),+ $(,)?) => {
        $crate::utils::string::format(
            ::std::option::Option::Some($pattern),
            &[$(&$arg as &dyn ::std::fmt::Display),+],
        )
    };
}

/// Replace the last occurrence of a character
///
/// Returns `None` when `input` is `None`. When `target` does not occur the
/// input is returned unchanged. Works on `char`s, so the replacement may have
/// a different UTF-8 width than the target.
///
/// # Arguments
/// * `input` - String to search
/// * `target` - Character to look for
/// * `replacement` - Character written in place of the last `target`
///
/// # Example
/// ```rust
/// use strutil::utils::string::replace_last;
///
/// assert_eq!(replace_last(Some("banana"), 'a', 'o').as_deref(), Some("banano"));
/// assert_eq!(replace_last(None, 'a', 'o'), None);
/// ```
pub fn replace_last(input: Option<&str>, target: char, replacement: char) -> Option<String> {
    let input = input?;

    let index = match input.rfind(target) {
        Some(index) => index,
        None => return Some(input.to_string()),
    };

    let mut result = String::with_capacity(input.len() + replacement.len_utf8());
    result.push_str(&input[..index]);
    result.push(replacement);
    result.push_str(&input[index + target.len_utf8()..]);
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_blank_pattern() {
        assert_eq!(format(None, &[&1]), "");
        assert_eq!(format(Some(""), &[&1]), "");
        assert_eq!(format(Some("  \t\n"), &[&1, &2]), "");
        assert_eq!(format(Some(""), &[]), "");
    }

    #[test]
    fn test_format_non_breaking_space_is_not_blank() {
        assert_eq!(format(Some("\u{a0}"), &[&1]), "\u{a0}");
        assert_eq!(format(Some("\u{2007}\u{202f}"), &[&1]), "\u{2007}\u{202f}");
        assert_eq!(format(Some("\u{85}"), &[&1]), "\u{85}");
        assert_eq!(format(Some("\u{1f}\u{3000}\u{2028}"), &[&1]), "");
        assert_eq!(format(Some("\u{a0}{}"), &[&1]), "\u{a0}1");
    }

    #[test]
    fn test_format_failing_display() {
        struct Failing;

        impl Display for Failing {
            fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                Err(std::fmt::Error)
            }
        }

        assert_eq!(format(Some("a{}b{}"), &[&Failing, &1]), "ab1");
    }

    #[test]
    fn test_format_without_args() {
        assert_eq!(format(Some("a{}b"), &[]), "a{}b");
        assert_eq!(format(Some("plain"), &[]), "plain");
    }

    #[test]
    fn test_format_substitution() {
        assert_eq!(format(Some("a{}b"), &[&5]), "a5b");
        assert_eq!(format(Some("{}{}"), &[&"x", &'y']), "xy");
        assert_eq!(format(Some("{} = {:.2}"), &[&"pi", &3.5]), "pi = {:.2}");
        assert_eq!(format(Some("héllo {} wörld"), &[&"ü"]), "héllo ü wörld");
    }

    #[test]
    fn test_format_count_mismatch() {
        // Extra arguments are dropped
        assert_eq!(format(Some("{}-{}"), &[&1, &2, &3]), "1-2");
        // Extra placeholders stay literal
        assert_eq!(format(Some("{} {} {}"), &[&"a"]), "a {} {}");
        // No placeholder at all
        assert_eq!(format(Some("nothing here"), &[&1]), "nothing here");
    }

    #[test]
    fn test_format_escapes() {
        assert_eq!(format(Some(r"\{}{}"), &[&1]), "{}1");
        assert_eq!(format(Some(r"set \{} to {}"), &[&"x"]), "set {} to x");
        assert_eq!(format(Some(r"C:\\{}"), &[&"dir"]), r"C:\dir");
        assert_eq!(format(Some(r"\{"), &[&1]), r"\{");
    }

    #[test]
    fn test_format_partial_braces() {
        assert_eq!(format(Some("{ }{}"), &[&1]), "{ }1");
        assert_eq!(format(Some("{{}}"), &[&1]), "{1}");
    }

    #[test]
    fn test_lenient_format_macro() {
        assert_eq!(lenient_format!("a{}b", 5), "a5b");
        assert_eq!(lenient_format!("{}-{}", 1, 2, 3), "1-2");
        assert_eq!(lenient_format!("a{}b"), "a{}b");
        assert_eq!(lenient_format!("  "), "");
    }

    #[test]
    fn test_replace_last() {
        assert_eq!(replace_last(Some("banana"), 'a', 'o').as_deref(), Some("banano"));
        assert_eq!(replace_last(Some("abc"), 'z', 'y').as_deref(), Some("abc"));
        assert_eq!(replace_last(Some(""), 'a', 'b').as_deref(), Some(""));
        assert_eq!(replace_last(Some("a"), 'a', 'b').as_deref(), Some("b"));
        assert_eq!(replace_last(None, 'x', 'y'), None);
    }

    #[test]
    fn test_replace_last_multibyte() {
        assert_eq!(replace_last(Some("café, café"), 'é', 'e').as_deref(), Some("café, cafe"));
        assert_eq!(replace_last(Some("a-b-c"), '-', '→').as_deref(), Some("a-b→c"));
    }
}
