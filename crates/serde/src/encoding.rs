//! String escaping primitives.
//!
//! Three encodings are provided, all appending to an existing `String`:
//!
//! - [`append_xml_encoded_string`] for attribute values and text in markup
//! - [`append_utf8_encoded_string`] for line based formats where only a
//!   conservative set of characters may appear unquoted
//! - [`append_debug_encoded_string`] for human readable dumps
//!
//! The last two work per Unicode code point, never per byte.

/// Escapes `&`, `"`, `'`, `<`, `>`, newline, carriage return and tab.
///
/// Every other character is copied unchanged.
pub fn append_xml_encoded_string(out: &mut String, data: &str) {
    for c in data.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            '\t' => out.push_str("&#x9;"),
            c => out.push(c),
        }
    }
}

/// Returns `data` escaped with [`append_xml_encoded_string`].
pub fn xml_encode(data: &str) -> String {
    let mut out = String::with_capacity(data.len());
    append_xml_encoded_string(&mut out, data);
    out
}

fn is_utf8_safe(c: char) -> bool {
    matches!(
        u32::from(c),
        0x0021..=0x0024
            | 0x0026..=0x002b
            | 0x002d..=0x003c
            | 0x003e..=0x003f
            | 0x0041..=0x007e
            | 0x00a1..=0x00ac
            | 0x00ae..=0x05ff
    )
}

fn is_debug_printable(c: char) -> bool {
    matches!(
        u32::from(c),
        0x0020..=0x0021
            | 0x0023..=0x003b
            | 0x003d
            | 0x003f..=0x007e
            | 0x00a1..=0x00ac
            | 0x00ae..=0x05ff
    )
}

/// Percent-escapes every code point outside a conservative safe set.
///
/// An escaped code point is written as `%`, its lowercase hex value with at
/// least two digits, and a closing `%`: a space becomes `%20%` and
/// U+1D11E becomes `%1d11e%`.
pub fn append_utf8_encoded_string(out: &mut String, data: &str) {
    for c in data.chars() {
        if is_utf8_safe(c) {
            out.push(c);
        } else {
            out.push('%');
            out.push_str(&format!("{:02x}", u32::from(c)));
            out.push('%');
        }
    }
}

/// Replaces unprintable code points with `prefix<U+XXXX>suffix`.
///
/// The code point is written in uppercase hex with at least four digits.
pub fn append_debug_encoded_string(out: &mut String, data: &str, prefix: &str, suffix: &str) {
    for c in data.chars() {
        if is_debug_printable(c) {
            out.push(c);
        } else {
            out.push_str(prefix);
            out.push_str(&format!("<U+{:04X}>", u32::from(c)));
            out.push_str(suffix);
        }
    }
}
