//! Percent-encoding of uri components
//! SPEC: RFC 3986 - 2.1. Percent-Encoding

const HEX_CHARS_UPPER: &[u8] = b"0123456789ABCDEF";

pub(crate) fn is_unreserved(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~')
}

pub(crate) fn is_sub_delim(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// ABNF: userinfo = *( unreserved / pct-encoded / sub-delims / ":" )
pub(crate) fn is_user_info_char(b: u8) -> bool {
    is_unreserved(b) || is_sub_delim(b) || b == b':'
}

/// ABNF: pchar = unreserved / pct-encoded / sub-delims / ":" / "@"
pub(crate) fn is_path_char(b: u8) -> bool {
    is_user_info_char(b) || matches!(b, b'@' | b'/')
}

/// ABNF: query = *( pchar / "/" / "?" ), the fragment shares the grammar
pub(crate) fn is_query_char(b: u8) -> bool {
    is_path_char(b) || b == b'?'
}

pub(crate) fn is_hex(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Encodes every byte that `allowed` rejects, leaving existing `%HH` escapes untouched
pub(crate) fn encode_component(input: &str, allowed: fn(u8) -> bool) -> String {
    let bytes = input.as_bytes();
    if bytes.iter().all(|&b| allowed(b)) {
        return input.to_owned();
    }

    let mut encoded = Vec::with_capacity(bytes.len() * 3); // Max 3 bytes per char (e.g., %FF)
    for (i, &byte) in bytes.iter().enumerate() {
        let escape = byte == b'%'
            && bytes.get(i + 1).copied().is_some_and(is_hex)
            && bytes.get(i + 2).copied().is_some_and(is_hex);
        if allowed(byte) || escape {
            encoded.push(byte);
        } else {
            encoded.push(b'%');
            encoded.push(HEX_CHARS_UPPER[(byte >> 4) as usize]);
            encoded.push(HEX_CHARS_UPPER[(byte & 0xF) as usize]);
        }
    }

    // Only ASCII bytes were pushed for anything outside the input's own ASCII
    String::from_utf8(encoded).unwrap_or_default()
}
