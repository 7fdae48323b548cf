//! HTML escaping utilities.
//!
//! Fast-path optimized: scans for first escapable character,
//! then bulk-copies segments between escapes.
//!
//! Three strengths are used by the renderer:
//! - code blocks escape only `<` and `>`;
//! - hardened text (opt-in) escapes `<`, `>`, `&` and `"`;
//! - citation attributes and titles go through `html-escape`.

use memchr::{memchr, memchr2, memchr3};

/// Lookup table for escapable characters in hardened text content.
const TEXT_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table
};

/// Escape code block content into `out`.
///
/// Only angle brackets are replaced; everything else, `&` included,
/// passes through untouched.
///
/// # Example
/// ```
/// use livemark::escape::escape_code_into;
///
/// let mut out = String::new();
/// escape_code_into(&mut out, "if a < b && c > d");
/// assert_eq!(out, "if a &lt; b && c &gt; d");
/// ```
#[inline]
pub fn escape_code_into(out: &mut String, input: &str) {
    let bytes = input.as_bytes();
    let mut start = 0;

    while let Some(offset) = memchr2(b'<', b'>', &bytes[start..]) {
        let pos = start + offset;
        out.push_str(&input[start..pos]);
        out.push_str(if bytes[pos] == b'<' { "&lt;" } else { "&gt;" });
        start = pos + 1;
    }

    out.push_str(&input[start..]);
}

/// Escape text content into `out` (`<`, `>`, `&`, `"`).
///
/// # Example
/// ```
/// use livemark::escape::escape_text_into;
///
/// let mut out = String::new();
/// escape_text_into(&mut out, "<b>\"x\" & y</b>");
/// assert_eq!(out, "&lt;b&gt;&quot;x&quot; &amp; y&lt;/b&gt;");
/// ```
#[inline]
pub fn escape_text_into(out: &mut String, input: &str) {
    let bytes = input.as_bytes();

    let Some(mut pos) = first_text_escape(bytes) else {
        out.push_str(input);
        return;
    };
    out.push_str(&input[..pos]);

    while pos < bytes.len() {
        let scan_start = pos;
        while pos < bytes.len() && !TEXT_ESCAPE_TABLE[bytes[pos] as usize] {
            pos += 1;
        }
        if pos > scan_start {
            out.push_str(&input[scan_start..pos]);
        }

        if pos < bytes.len() {
            out.push_str(match bytes[pos] {
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'&' => "&amp;",
                _ => "&quot;",
            });
            pos += 1;
        }
    }
}

/// Escape a double-quoted attribute value (citation URLs).
#[inline]
pub fn escape_attr_into(out: &mut String, input: &str) {
    html_escape::encode_double_quoted_attribute_to_string(input, out);
}

/// Escape display text coming from outside the Markdown stream
/// (citation titles).
#[inline]
pub fn escape_external_text_into(out: &mut String, input: &str) {
    html_escape::encode_text_to_string(input, out);
}

#[inline]
fn first_text_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr(b'"', input);
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
