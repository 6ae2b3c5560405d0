/// Line-break markup emitted for both escaped and real newlines.
pub const LINE_BREAK: &str = "<br>";

/// Turns free text into line-broken markup.
///
/// Literal `\n` sequences become `<br>` first, then any remaining backslashes
/// are dropped, then real newlines become `<br>`. HTML-significant characters
/// are left alone so operators can embed their own tags.
pub fn format_text(input: &str) -> String {
    input
        .replace("\\n", LINE_BREAK)
        .replace('\\', "")
        .replace('\n', LINE_BREAK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_empty() {
        assert_eq!(format_text(""), "");
    }

    #[test]
    fn test_escaped_newline_becomes_break() {
        assert_eq!(format_text("line1\\nline2"), "line1<br>line2");
    }

    #[test]
    fn test_stray_backslash_is_removed() {
        assert_eq!(format_text("a\\b"), "ab");
    }

    #[test]
    fn test_real_newline_becomes_break() {
        assert_eq!(format_text("x\ny"), "x<br>y");
    }

    #[test]
    fn test_escape_runs_before_backslash_removal() {
        // "\\\\n" is backslash, backslash, n: the second pair is an escaped newline.
        assert_eq!(format_text("a\\\\nb"), "a<br>b");
    }

    #[test]
    fn test_html_is_not_escaped() {
        assert_eq!(
            format_text("<b>Fett</b> & \"zitiert\""),
            "<b>Fett</b> & \"zitiert\""
        );
    }

    #[test]
    fn test_carriage_return_is_kept() {
        assert_eq!(format_text("a\r\nb"), "a\r<br>b");
    }
}
