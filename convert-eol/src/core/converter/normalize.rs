// src/core/converter/normalize.rs
use crate::models::Eol;

/// Rewrites every line terminator in `text` to `eol`.
///
/// CRLF, bare CR and bare LF are all treated as one terminator each, which
/// makes the operation idempotent.
#[must_use]
pub fn normalize_eol(text: &str, eol: Eol) -> String {
    let target = eol.as_str();
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find(['\r', '\n']) {
        let (line, tail) = rest.split_at(idx);
        out.push_str(line);
        out.push_str(target);
        rest = tail
            .strip_prefix("\r\n")
            .or_else(|| tail.strip_prefix('\r'))
            .or_else(|| tail.strip_prefix('\n'))
            .unwrap_or_default();
    }
    out.push_str(rest);

    out
}
