//! Minimal `multipart/form-data` reader.
//!
//! Only what a browser file upload needs: find the boundary, walk the
//! parts, and return the body of the part with a given field name.

/// Boundary parameter of a `multipart/form-data` content type.
pub fn boundary(content_type: &str) -> Option<&str> {
    let mut params = content_type.split(';');
    let mime = params.next()?.trim();
    if !mime.eq_ignore_ascii_case("multipart/form-data") {
        return None;
    }

    params
        .filter_map(|p| p.split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("boundary"))
        .map(|(_, value)| value.trim().trim_matches('"'))
        .filter(|b| !b.is_empty())
}

/// Body of the first part whose `Content-Disposition` names `field`.
pub fn find_field<'a>(body: &'a [u8], boundary: &str, field: &str) -> Option<&'a [u8]> {
    let delimiter = format!("--{}", boundary);
    let delimiter = delimiter.as_bytes();

    let mut rest = &body[find(body, delimiter)? + delimiter.len()..];
    loop {
        // "--" right after a delimiter closes the body
        if rest.starts_with(b"--") {
            return None;
        }
        let rest_after_crlf = rest.strip_prefix(b"\r\n").unwrap_or(rest);
        let next = find(rest_after_crlf, delimiter)?;
        let part = &rest_after_crlf[..next];
        // the CRLF before a delimiter belongs to the delimiter
        let part = part.strip_suffix(b"\r\n").unwrap_or(part);

        if let Some((headers, content)) = split_headers(part) {
            if field_name(headers).as_deref() == Some(field) {
                return Some(content);
            }
        }
        rest = &rest_after_crlf[next + delimiter.len()..];
    }
}

fn split_headers(part: &[u8]) -> Option<(&[u8], &[u8])> {
    let end = find(part, b"\r\n\r\n")?;
    Some((&part[..end], &part[end + 4..]))
}

fn field_name(headers: &[u8]) -> Option<String> {
    let headers = String::from_utf8_lossy(headers);
    headers
        .split("\r\n")
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-disposition"))
        .and_then(|(_, value)| {
            value
                .split(';')
                .filter_map(|p| p.split_once('='))
                .find(|(key, _)| key.trim() == "name")
                .map(|(_, v)| v.trim().trim_matches('"').to_string())
        })
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
