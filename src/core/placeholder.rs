//! `{}` placeholder substitution for the format-string logging calls

use std::fmt::{self, Write};

/// Token replaced by the next argument.
pub const PLACEHOLDER: &str = "{}";

/// Replace every `{}` in `format` with the next argument's `Display` output.
///
/// Placeholders left without an argument stay in the output verbatim and
/// surplus arguments are ignored.
///
/// ```
/// use gog::core::placeholder::substitute;
///
/// assert_eq!(substitute("Hello, {} !", &[&"gog"]), "Hello, gog !");
/// ```
pub fn substitute(format: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(format.len());
    let mut args = args.iter();
    let mut rest = format;

    while let Some(pos) = rest.find(PLACEHOLDER) {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => {
                let _ = write!(out, "{}", arg);
            }
            None => out.push_str(PLACEHOLDER),
        }
        rest = &rest[pos + PLACEHOLDER.len()..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_substitution() {
        assert_eq!(substitute("{} + {} = {}", &[&1, &2, &3]), "1 + 2 = 3");
        assert_eq!(substitute("Error {}", &[&"err..."]), "Error err...");
    }

    #[test]
    fn test_no_placeholders() {
        assert_eq!(substitute("plain text", &[]), "plain text");
        assert_eq!(substitute("", &[&1]), "");
    }

    #[test]
    fn test_missing_and_extra_arguments() {
        assert_eq!(substitute("{} and {}", &[&"one"]), "one and {}");
        assert_eq!(substitute("only {}", &[&"a", &"b"]), "only a");
    }

    #[test]
    fn test_argument_containing_placeholder_is_not_expanded() {
        assert_eq!(substitute("{}-{}", &[&"{}", &"x"]), "{}-x");
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(substitute("日志{}级别", &[&"INFO"]), "日志INFO级别");
    }
}
