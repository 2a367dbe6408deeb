use super::{Formatter, ToGo};

use std::borrow::Cow;

/// A MySQL identifier, quoted with backticks.
pub(crate) struct BackQuoted<S>(pub(crate) S);

/// A Go interpreted string literal, escaped like `%q`.
pub(crate) struct Quoted<S>(pub(crate) S);

const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Suffixes Go keywords with `_` so they can be used as identifiers.
pub(crate) fn escape(name: &str) -> Cow<'_, str> {
    if GO_KEYWORDS.contains(&name) {
        Cow::Owned(format!("{name}_"))
    } else {
        Cow::Borrowed(name)
    }
}

impl<S: AsRef<str>> ToGo for BackQuoted<S> {
    fn to_go(self, f: &mut Formatter<'_>) {
        fmt!(f, "`" self.0.as_ref() "`");
    }
}

impl<S: AsRef<str>> ToGo for Quoted<S> {
    fn to_go(self, f: &mut Formatter<'_>) {
        use std::fmt::Write;

        f.dst.push('"');
        for c in self.0.as_ref().chars() {
            match c {
                '"' => f.dst.push_str("\\\""),
                '\\' => f.dst.push_str("\\\\"),
                '\n' => f.dst.push_str("\\n"),
                '\r' => f.dst.push_str("\\r"),
                '\t' => f.dst.push_str("\\t"),
                '\u{7}' => f.dst.push_str("\\a"),
                '\u{8}' => f.dst.push_str("\\b"),
                '\u{b}' => f.dst.push_str("\\v"),
                '\u{c}' => f.dst.push_str("\\f"),
                c if (c as u32) < 0x20 || c == '\u{7f}' => {
                    let _ = write!(f.dst, "\\x{:02x}", c as u32);
                }
                c => f.dst.push(c),
            }
        }
        f.dst.push('"');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_keywords_only() {
        assert_eq!(escape("type"), "type_");
        assert_eq!(escape("range"), "range_");
        assert_eq!(escape("name"), "name");
        assert_eq!(escape("Type"), "Type");
    }

    #[test]
    fn quoted_escapes_like_go() {
        let quoted = Formatter::render(Quoted("say \"hi\"\n\\"));
        assert_eq!(quoted, r#""say \"hi\"\n\\""#);

        let quoted = Formatter::render(Quoted("tab\there\u{1}"));
        assert_eq!(quoted, r#""tab\there\x01""#);
    }
}
