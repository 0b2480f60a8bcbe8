//! Pick the `Location` header out of collected response header lines.

/// Decode one raw header line as libcurl hands it over.
///
/// Servers do send Latin-1 in `Location`; invalid UTF-8 becomes U+FFFD so the
/// header still counts.
pub(crate) fn header_line(data: &[u8]) -> String {
    String::from_utf8_lossy(data).trim_end().to_string()
}

/// Returns the `Location` value of the last response block.
///
/// libcurl hands over every block it reads, including interim `1xx` ones, so a
/// new `HTTP/` status line discards what was seen before it.
pub(crate) fn location(lines: &[String]) -> Option<String> {
    let mut location = None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            location = None;
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("location") {
                let value = value.trim();
                location = (!value.is_empty()).then(|| value.to_string());
            }
        }
    }

    location
}
