//! Column padding used by the text formatter
//!
//! Widths are counted in characters.

/// Right-align `item` in a column of `width`, filling the gap with
/// `connector` and a space on each side of the fill.
///
/// Items already at least `width` long are returned unchanged.
///
/// ```
/// use gog::formatters::padding::with_connectors;
///
/// assert_eq!(with_connectors("INFO", '-', 8), " ---- INFO");
/// ```
pub fn with_connectors(item: &str, connector: char, width: usize) -> String {
    let len = item.chars().count();
    if len >= width {
        return item.to_string();
    }

    let mut out = String::with_capacity(width + 2);
    out.push(' ');
    out.extend(std::iter::repeat(connector).take(width - len));
    out.push(' ');
    out.push_str(item);
    out
}

/// Right-pad `src` with `fill` up to `width`.
pub fn fill_suffix(src: &str, fill: char, width: usize) -> String {
    let len = src.chars().count();
    if len >= width {
        return src.to_string();
    }
    let mut out = src.to_string();
    out.extend(std::iter::repeat(fill).take(width - len));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_connectors() {
        assert_eq!(with_connectors("ERROR", '-', 8), " --- ERROR");
        assert_eq!(with_connectors("main.rs", '-', 10), " --- main.rs");
        assert_eq!(with_connectors("exactly8", '-', 8), "exactly8");
        assert_eq!(with_connectors("", '-', 3), " ---  ");
    }

    #[test]
    fn test_fill() {
        assert_eq!(fill_suffix("12", ' ', 4), "12  ");
        assert_eq!(fill_suffix("12345", ' ', 4), "12345");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(fill_suffix("日志", '.', 4), "日志..");
    }
}
