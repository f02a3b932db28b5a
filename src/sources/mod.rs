//! Upstream plumbing: request pacing and the Entrez HTTP gateway.

pub(crate) mod entrez;
pub(crate) mod rate_limit;

const ERROR_BODY_MAX_BYTES: usize = 2048;

/// Trims an upstream error body to a single-line excerpt for error messages.
pub(crate) fn body_excerpt(bytes: &[u8]) -> String {
    let full = String::from_utf8_lossy(bytes);

    let truncated: &str = if full.len() > ERROR_BODY_MAX_BYTES {
        let mut end = ERROR_BODY_MAX_BYTES;
        while end > 0 && !full.is_char_boundary(end) {
            end -= 1;
        }
        &full[..end]
    } else {
        full.as_ref()
    };

    let mut s = truncated.trim().replace(['\n', '\r', '\t'], " ");
    if full.len() > ERROR_BODY_MAX_BYTES {
        s.push_str(" …");
    }
    s
}

#[cfg(test)]
mod tests {
    use super::{ERROR_BODY_MAX_BYTES, body_excerpt};

    #[test]
    fn body_excerpt_flattens_whitespace() {
        let excerpt = body_excerpt(b"  <error>\n\tbad\rrequest</error>  ");
        assert_eq!(excerpt, "<error>  bad request</error>");
    }

    #[test]
    fn body_excerpt_truncates_long_bodies() {
        let long = "x".repeat(ERROR_BODY_MAX_BYTES * 2);
        let excerpt = body_excerpt(long.as_bytes());
        assert!(excerpt.len() < long.len());
        assert!(excerpt.ends_with('…'));
    }

    #[test]
    fn body_excerpt_respects_char_boundaries() {
        let mut long = "é".repeat(ERROR_BODY_MAX_BYTES / 2);
        long.push_str("tail");
        let excerpt = body_excerpt(long.as_bytes());
        assert!(excerpt.starts_with('é'));
    }
}
