//! `${{name}}` placeholder substitution.
//!
//! A single-pass scanner, not a templating engine: no escaping, no nesting,
//! no conditionals. Substitution policy:
//!
//! - a token whose name is in the value map is replaced with the value;
//! - a well-formed token with no mapping is dropped (replaced with the
//!   empty string) — render what you can, silently drop the rest;
//! - a malformed token (no closing `}}` before a newline or end of input)
//!   is left untouched.

use std::collections::HashMap;

const OPEN: &str = "${{";
const CLOSE: &str = "}}";

/// Substitute every `${{name}}` token in `template` using `values`.
pub fn substitute(template: &str, values: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        match token_end(after_open) {
            Some(end) => {
                let name = &after_open[..end];
                if let Some(value) = values.get(name) {
                    out.push_str(value);
                }
                // unmapped token: emit nothing
                rest = &after_open[end + CLOSE.len()..];
            }
            None => {
                // malformed: keep the opener literally and continue after it
                out.push_str(OPEN);
                rest = after_open;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Byte offset of the closing `}}` within `s`, or `None` if the token is
/// malformed (a newline or end of input comes first).
fn token_end(s: &str) -> Option<usize> {
    let end = s.find(CLOSE)?;
    if s[..end].contains('\n') {
        return None;
    }
    Some(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_mapped_token() {
        let out = substitute(
            "Tagihan untuk ${{customer_name}}.",
            &values(&[("customer_name", "PT. Contoh")]),
        );
        assert_eq!(out, "Tagihan untuk PT. Contoh.");
        assert!(!out.contains("${{"));
    }

    #[test]
    fn drops_unmapped_token() {
        let out = substitute("a${{missing}}b", &values(&[]));
        assert_eq!(out, "ab");
    }

    #[test]
    fn malformed_token_left_untouched() {
        let out = substitute("a${{never closed", &values(&[]));
        assert_eq!(out, "a${{never closed");
    }

    #[test]
    fn token_spanning_lines_is_malformed() {
        let tpl = "a${{bad\nname}}b";
        assert_eq!(substitute(tpl, &values(&[("bad\nname", "x")])), tpl);
    }

    #[test]
    fn adjacent_tokens() {
        let out = substitute(
            "${{a}}${{b}}",
            &values(&[("a", "1"), ("b", "2")]),
        );
        assert_eq!(out, "12");
    }
}
