//! Left-to-right `require()` scanner.
//!
//! The scan maintains a single cursor over the raw bytes. Comments and
//! free-standing string literals are skipped wholesale; identifier runs are
//! compared against `require` as whole tokens only. On a match the call's
//! argument span is located with a balanced-delimiter walk and reduced to
//! its literal content layer by layer. Spans that do not reduce to a quoted
//! string literal are discarded and the scan resumes just past them.

use memchr::{memchr, memmem};

use crate::lexer::{is_identifier_part, is_identifier_start};

/// Extract module specifiers from `text`, in encounter order.
///
/// Duplicates are preserved; the caller owns deduplication policy. Never
/// panics: malformed input produces a best-effort (possibly empty) result.
///
/// ```rust
/// let deps = skein_scan::parse("require('./../'); require('./../');");
/// assert_eq!(deps, vec!["./../", "./../"]);
/// ```
pub fn parse(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut specifiers = Vec::new();
    let mut cursor = 0;

    while cursor < bytes.len() {
        let byte = bytes[cursor];

        if byte == b'/' && cursor + 1 < bytes.len() {
            match bytes[cursor + 1] {
                b'/' => {
                    cursor = skip_line_comment(bytes, cursor);
                    continue;
                }
                b'*' => {
                    cursor = skip_block_comment(bytes, cursor);
                    continue;
                }
                _ => {}
            }
        }

        if byte == b'\'' || byte == b'"' {
            cursor = skip_string_literal(bytes, cursor);
            continue;
        }

        if is_identifier_part(byte) {
            let start = cursor;
            cursor += 1;
            while cursor < bytes.len() && is_identifier_part(bytes[cursor]) {
                cursor += 1;
            }
            // Whole-token match only: `myrequire` and `require2` are
            // single runs and never compare equal.
            if is_identifier_start(byte) && &bytes[start..cursor] == b"require" {
                let arg_start = skip_trivia(bytes, cursor);
                let arg_end = next_token(bytes, arg_start);
                if let Some(specifier) =
                    trim_semicolon_parens_and_quotes(&text[arg_start..arg_end])
                {
                    specifiers.push(specifier.to_string());
                }
                cursor = cursor.max(arg_end);
            }
            continue;
        }

        cursor += 1;
    }

    specifiers
}

/// Skip `//` to end of line. Returns the index just past the newline, or
/// end of input.
fn skip_line_comment(bytes: &[u8], start: usize) -> usize {
    match memchr(b'\n', &bytes[start..]) {
        Some(offset) => start + offset + 1,
        None => bytes.len(),
    }
}

/// Skip `/*` to the matching `*/`. An unterminated comment swallows the
/// rest of the input, same as the tail of a broken file would be dead text.
fn skip_block_comment(bytes: &[u8], start: usize) -> usize {
    match memmem::find(&bytes[start + 2..], b"*/") {
        Some(offset) => start + 2 + offset + 2,
        None => bytes.len(),
    }
}

/// Skip a quoted string literal, honoring backslash escapes. `start` must
/// point at the opening quote. Returns the index just past the closing
/// quote, or end of input if unterminated.
fn skip_string_literal(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut cursor = start + 1;
    while cursor < bytes.len() {
        match bytes[cursor] {
            b'\\' => cursor += 2,
            byte if byte == quote => return cursor + 1,
            _ => cursor += 1,
        }
    }
    bytes.len()
}

/// Skip whitespace and comments between the `require` identifier and its
/// argument span, so `require /*c*/ ("x")` still matches.
fn skip_trivia(bytes: &[u8], start: usize) -> usize {
    let mut cursor = start;
    loop {
        while cursor < bytes.len() && bytes[cursor].is_ascii_whitespace() {
            cursor += 1;
        }
        if cursor + 1 < bytes.len() && bytes[cursor] == b'/' {
            match bytes[cursor + 1] {
                b'/' => {
                    cursor = skip_line_comment(bytes, cursor);
                    continue;
                }
                b'*' => {
                    cursor = skip_block_comment(bytes, cursor);
                    continue;
                }
                _ => {}
            }
        }
        return cursor;
    }
}

/// Balanced-delimiter scan for the call's argument span.
///
/// Walks forward from `start` tracking parenthesis nesting depth and quote
/// state; stops at the first position where depth is back to zero and the
/// current byte is whitespace, a `;` terminator, or end of input. Parens
/// inside string literals do not affect the depth, so `require('./../')`
/// spans cleanly.
fn next_token(bytes: &[u8], start: usize) -> usize {
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut cursor = start;

    while cursor < bytes.len() {
        let byte = bytes[cursor];
        if let Some(open) = quote {
            match byte {
                b'\\' => cursor += 2,
                _ if byte == open => {
                    quote = None;
                    cursor += 1;
                }
                _ => cursor += 1,
            }
            continue;
        }
        match byte {
            b'\'' | b'"' => {
                quote = Some(byte);
                cursor += 1;
            }
            b'(' => {
                depth += 1;
                cursor += 1;
            }
            b')' => {
                depth = depth.saturating_sub(1);
                cursor += 1;
            }
            _ if depth == 0 && (byte.is_ascii_whitespace() || byte == b';') => break,
            _ => cursor += 1,
        }
    }

    cursor
}

/// Reduce an argument span to its literal content, one layer at a time.
///
/// Priority per pass: an outer parenthesis layer (the trailing `)` plus
/// its opener when present), then an outer quote layer, then a trailing
/// semicolon. The quote layer is terminal: its content is the specifier,
/// and only the first literal is taken, so extra call arguments are
/// ignored. Returns `None` when the span does not reduce to a quoted
/// string literal - that match is not a static dependency declaration.
fn trim_semicolon_parens_and_quotes(span: &str) -> Option<&str> {
    let mut rest = span;
    loop {
        let bytes = rest.as_bytes();
        let (first, last) = match (bytes.first(), bytes.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return None,
        };
        if first == b'\'' || first == b'"' {
            return unquote(rest);
        }
        if last == b')' {
            let inner = &rest[..rest.len() - 1];
            rest = match inner.as_bytes().first() {
                Some(b'(') => &inner[1..],
                _ => inner,
            };
            continue;
        }
        if last == b';' {
            rest = &rest[..rest.len() - 1];
            continue;
        }
        return None;
    }
}

/// Take the content of the leading quoted literal in `span`, verbatim
/// (escapes are kept as written). Anything after the closing quote is
/// dropped. `None` if the literal never closes.
fn unquote(span: &str) -> Option<&str> {
    let bytes = span.as_bytes();
    let quote = bytes[0];
    let mut cursor = 1;
    while cursor < bytes.len() {
        match bytes[cursor] {
            b'\\' => cursor += 2,
            byte if byte == quote => return Some(&span[1..cursor]),
            _ => cursor += 1,
        }
    }
    None
}
