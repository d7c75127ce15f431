//! Human-readable HTTP status lines.

/// Reason phrases for the status codes common servers actually send.
const REASON_PHRASES: &[(u32, &str)] = &[
    (200, "OK"),
    (201, "Created"),
    (202, "Accepted"),
    (203, "Non-Authoritative Information"),
    (204, "No Content"),
    (205, "Reset Content"),
    (206, "Partial Content"),
    (300, "Multiple Choices"),
    (301, "Moved Permanently"),
    (302, "Found"),
    (303, "See Other"),
    (304, "Not Modified"),
    (305, "Use Proxy"),
    (307, "Temporary Redirect"),
    (308, "Permanent Redirect"),
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (402, "Payment Required"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Method Not Allowed"),
    (406, "Not Acceptable"),
    (407, "Proxy Authentication Required"),
    (408, "Request Timeout"),
    (409, "Conflict"),
    (410, "Gone"),
    (411, "Length Required"),
    (412, "Precondition Failed"),
    (413, "Payload Too Large"),
    (414, "URI Too Long"),
    (415, "Unsupported Media Type"),
    (416, "Range Not Satisfiable"),
    (417, "Expectation Failed"),
    (418, "I'm a teapot"),
    (421, "Misdirected Request"),
    (422, "Unprocessable Entity"),
    (423, "Locked"),
    (424, "Failed Dependency"),
    (425, "Too Early"),
    (426, "Upgrade Required"),
    (428, "Precondition Required"),
    (429, "Too Many Requests"),
    (431, "Request Header Fields Too Large"),
    (451, "Unavailable For Legal Reasons"),
    (500, "Internal Server Error"),
    (501, "Not Implemented"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
    (504, "Gateway Timeout"),
    (505, "HTTP Version Not Supported"),
    (506, "Variant Also Negotiates"),
    (507, "Insufficient Storage"),
    (508, "Loop Detected"),
    (510, "Not Extended"),
    (511, "Network Authentication Required"),
];

const UNKNOWN_STATUS: &str = "Status not in program dictionary";

/// Looks up the reason phrase for `code`, if the table has one.
pub fn reason_phrase(code: u32) -> Option<&'static str> {
    REASON_PHRASES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, phrase)| *phrase)
}

/// Formats `"<code> - <reason phrase>"`; never fails.
pub fn status_code_message(code: u32) -> String {
    format!("{} - {}", code, reason_phrase(code).unwrap_or(UNKNOWN_STATUS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(status_code_message(200), "200 - OK");
        assert_eq!(status_code_message(404), "404 - Not Found");
        assert_eq!(status_code_message(418), "418 - I'm a teapot");
        assert_eq!(status_code_message(511), "511 - Network Authentication Required");
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(
            status_code_message(499),
            "499 - Status not in program dictionary"
        );
        assert_eq!(
            status_code_message(0),
            "0 - Status not in program dictionary"
        );
        assert!(status_code_message(u32::MAX).ends_with(UNKNOWN_STATUS));
        // 306 is reserved and 509 non-standard; neither is in the table.
        assert_eq!(reason_phrase(306), None);
        assert_eq!(reason_phrase(509), None);
    }

    #[test]
    fn every_message_starts_with_its_code() {
        for code in 100..600 {
            assert!(status_code_message(code).starts_with(&format!("{code} - ")));
        }
    }

    #[test]
    fn table_has_no_duplicates() {
        let mut codes: Vec<u32> = REASON_PHRASES.iter().map(|(c, _)| *c).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), REASON_PHRASES.len());
    }
}
