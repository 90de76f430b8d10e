//! Placeholder resolution over free-form body text.
//!
//! Bodies carry `${identifier}` tokens, where `identifier` is one or more
//! alphanumeric/underscore characters. Resolution is a single hand-written
//! scanner pass: replacement values are inserted verbatim and never
//! re-scanned, so expansion is bounded and substituted text cannot inject
//! further placeholders. Text that merely looks like a placeholder
//! (`$x`, `${`, `${not-an-ident}`) passes through unchanged.

use crate::{Context, Error, Result};

/// Resolve `${identifier}` tokens in `text`.
///
/// Each identifier is looked up first in `locals` (fragment-local bindings)
/// and then in `context`. An identifier found in neither fails the whole
/// resolution with [`Error::UnresolvedPlaceholder`], naming the key and the
/// originating fragment via `origin`. Context keys that are never
/// referenced are ignored.
pub fn resolve(
    text: &str,
    origin: &str,
    locals: &[(&str, &str)],
    context: &Context,
) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find("${") {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 2..];
        let end = after
            .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
            .unwrap_or(after.len());

        if end > 0 && after[end..].starts_with('}') {
            let key = &after[..end];
            let value = locals
                .iter()
                .find(|(local, _)| *local == key)
                .map(|(_, value)| *value)
                .or_else(|| context.get(key));
            match value {
                Some(value) => out.push_str(value),
                None => return Err(Error::unresolved(key, origin)),
            }
            rest = &after[end + 1..];
        } else {
            // Not a placeholder token, emit the marker verbatim
            out.push_str("${");
            rest = after;
        }
    }

    out.push_str(rest);
    Ok(out)
}

/// Substitute bare identifier words that match context keys.
///
/// This lenient pass backs per-render rewriting of guard expressions such
/// as `len(d) > LIMIT` with context `{LIMIT: "self.MAX"}`. Whole words only;
/// words absent from the context stay as they are. Well-formed
/// `${identifier}` tokens are copied through untouched so that [`resolve`]
/// still sees them - the word pass must not rewrite a token's interior.
pub fn resolve_words(text: &str, context: &Context) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find("${") {
        substitute_words(&rest[..pos], context, &mut out);
        let after = &rest[pos + 2..];
        let end = after
            .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
            .unwrap_or(after.len());
        if end > 0 && after[end..].starts_with('}') {
            out.push_str("${");
            out.push_str(&after[..end]);
            out.push('}');
            rest = &after[end + 1..];
        } else {
            out.push_str("${");
            rest = after;
        }
    }

    substitute_words(rest, context, &mut out);
    out
}

fn substitute_words(text: &str, context: &Context, out: &mut String) {
    let mut rest = text;
    while let Some(start) = rest.find(|c: char| c.is_ascii_alphabetic() || c == '_') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let end = tail
            .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
            .unwrap_or(tail.len());
        let word = &tail[..end];
        match context.get(word) {
            Some(value) => out.push_str(value),
            None => out.push_str(word),
        }
        rest = &tail[end..];
    }
    out.push_str(rest);
}
