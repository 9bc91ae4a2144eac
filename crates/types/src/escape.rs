const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Appends every byte of `bytes` as a `\xNN` escape.
pub fn hex_escape(bytes: &[u8], out: &mut String) {
    out.reserve(bytes.len() * 4);
    for &b in bytes {
        out.push('\\');
        out.push('x');
        out.push(HEX_DIGITS[(b >> 4) as usize] as char);
        out.push(HEX_DIGITS[(b & 0xf) as usize] as char);
    }
}

fn push_octal(b: u8, out: &mut String) {
    out.push('\\');
    out.push((b'0' + (b >> 6)) as char);
    out.push((b'0' + ((b >> 3) & 7)) as char);
    out.push((b'0' + (b & 7)) as char);
}

/// Appends `bytes` with C-style escapes for quotes, backslashes and ASCII
/// control characters. Valid non-ASCII UTF-8 passes through unchanged; bytes
/// outside a valid sequence are octal-escaped.
pub fn utf8_safe_c_escape(bytes: &[u8], out: &mut String) {
    for chunk in bytes.utf8_chunks() {
        for c in chunk.valid().chars() {
            match c {
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                '"' => out.push_str("\\\""),
                '\'' => out.push_str("\\'"),
                '\\' => out.push_str("\\\\"),
                c if c.is_ascii_control() => push_octal(c as u8, out),
                c => out.push(c),
            }
        }
        for &b in chunk.invalid() {
            push_octal(b, out);
        }
    }
}
