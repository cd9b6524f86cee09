//! HTML escaping for interpolated template values.

use std::borrow::Cow;

/// Escape `& < > " '` so a value can sit in element text or a quoted attribute.
///
/// Borrowed when there is nothing to replace.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(&['&', '<', '>', '"', '\''][..]) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 16);
    out.push_str(&text[..first]);
    for ch in text[first..].chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape_html("AWS Cloud Practitioner"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_all_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_existing_entities_are_escaped_again() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_multibyte_text_survives() {
        assert_eq!(escape_html("Zertifikat – München <1>"), "Zertifikat – München &lt;1&gt;");
    }
}
