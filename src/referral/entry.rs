//! Entry-link query parameter handling.

/// Extract the inbound referral code from a raw query string.
///
/// `query` is everything after the `?` (a leading `?` is tolerated).
/// Returns the value of the first non-empty `ref` parameter. No
/// percent-decoding happens here — referral codes are short opaque ids,
/// and decoding belongs to the web layer that owns the URL.
pub fn ref_code_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, value)| *key == "ref" && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ref() {
        assert_eq!(ref_code_from_query("ref=2"), Some("2".into()));
    }

    #[test]
    fn leading_question_mark() {
        assert_eq!(ref_code_from_query("?ref=2"), Some("2".into()));
    }

    #[test]
    fn among_other_params() {
        assert_eq!(
            ref_code_from_query("utm_source=insta&ref=4&utm_medium=bio"),
            Some("4".into())
        );
    }

    #[test]
    fn missing_or_empty() {
        assert_eq!(ref_code_from_query(""), None);
        assert_eq!(ref_code_from_query("utm_source=insta"), None);
        assert_eq!(ref_code_from_query("ref="), None);
        assert_eq!(ref_code_from_query("ref"), None);
    }

    #[test]
    fn first_nonempty_wins() {
        assert_eq!(ref_code_from_query("ref=&ref=3"), Some("3".into()));
        assert_eq!(ref_code_from_query("ref=1&ref=2"), Some("1".into()));
    }

    #[test]
    fn prefix_keys_do_not_match() {
        assert_eq!(ref_code_from_query("referral=9"), None);
        assert_eq!(ref_code_from_query("xref=9"), None);
    }
}
