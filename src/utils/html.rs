//! HTML payload detection.

/// Byte-order mark stripped before sniffing.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Check whether a response body is an HTML document.
///
/// Looks for a leading `<!DOCTYPE` or `<html` marker after optional BOM
/// and whitespace, case-insensitively. Content sniffing stays deliberately
/// shallow; a body that buries its markup deeper than that is not what an
/// icon endpoint returning an HTML page looks like.
pub fn is_html(body: &[u8]) -> bool {
    let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);
    let start = body
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(body.len());
    let head = &body[start..];

    starts_with_ignore_case(head, b"<!doctype") || starts_with_ignore_case(head, b"<html")
}

/// Check whether a declared content type announces HTML.
pub fn is_html_content_type(value: &str) -> bool {
    let value = value.to_ascii_lowercase();
    value.contains("text/html") || value.contains("application/xhtml")
}

fn starts_with_ignore_case(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.len() >= needle.len() && haystack[..needle.len()].eq_ignore_ascii_case(needle)
}
