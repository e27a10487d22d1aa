//! Substring search and location-name resolution.
//!
//! Resolves a user's fuzzy text query ("poll", "tsu") to a canonical
//! building name by checking whether the query occurs as a substring of
//! each candidate name. Substring semantics are deliberate: partial names
//! resolve, not just prefixes or exact matches.
//!
//! # Algorithm
//!
//! Knuth-Morris-Pratt. A failure table (longest proper prefix that is
//! also a suffix, per needle position) is built once per needle, then the
//! haystack is scanned left to right with no backtracking. Worst case
//! O(|haystack| + |needle|).
//!
//! The search is byte-exact; case folding is the caller's job.
//! [`resolve_location`] lowercases both sides before matching.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 32.4

/// Returns the byte index of the first occurrence of `needle` in
/// `haystack`, or `None`.
///
/// An empty needle matches at index 0. A needle longer than the haystack
/// never matches.
///
/// # Example
///
/// ```
/// use campus_nav::search::find;
///
/// assert_eq!(find("pollak", "poll"), Some(0));
/// assert_eq!(find("tsu", "xyz"), None);
/// assert_eq!(find("anything", ""), Some(0));
/// ```
pub fn find(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.len() > haystack.len() {
        return None;
    }

    let lps = build_lps(needle);
    let mut j = 0; // needle cursor
    for (i, &byte) in haystack.iter().enumerate() {
        while j > 0 && needle[j] != byte {
            j = lps[j - 1];
        }
        if needle[j] == byte {
            j += 1;
        }
        if j == needle.len() {
            return Some(i + 1 - needle.len());
        }
    }
    None
}

/// Builds the KMP failure table: `lps[i]` is the length of the longest
/// proper prefix of `needle[..=i]` that is also a suffix of it.
fn build_lps(needle: &[u8]) -> Vec<usize> {
    let mut lps = vec![0; needle.len()];
    let mut len = 0;
    for i in 1..needle.len() {
        while len > 0 && needle[i] != needle[len] {
            len = lps[len - 1];
        }
        if needle[i] == needle[len] {
            len += 1;
        }
        lps[i] = len;
    }
    lps
}

/// Resolves a query to the first candidate name containing it,
/// case-insensitively, in iteration order.
///
/// This is the navigator's lookup pattern: the user types a fragment and
/// the first building whose name contains it wins.
///
/// # Example
///
/// ```
/// use campus_nav::search::resolve_location;
///
/// let names = ["Pollak", "TSU", "SGMH"];
/// assert_eq!(resolve_location(names, "poll"), Some("Pollak"));
/// assert_eq!(resolve_location(names, "gm"), Some("SGMH"));
/// assert_eq!(resolve_location(names, "stadium"), None);
/// ```
pub fn resolve_location<'a, I>(names: I, query: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let query = query.to_lowercase();
    names
        .into_iter()
        .find(|name| find(&name.to_lowercase(), &query).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_at_start() {
        assert_eq!(find("pollak", "poll"), Some(0));
    }

    #[test]
    fn test_match_in_middle() {
        assert_eq!(find("language hall", "age"), Some(5));
    }

    #[test]
    fn test_match_at_end() {
        assert_eq!(find("sgmh", "mh"), Some(2));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(find("tsu", "xyz"), None);
    }

    #[test]
    fn test_empty_needle_matches_at_zero() {
        assert_eq!(find("tsu", ""), Some(0));
        assert_eq!(find("", ""), Some(0));
    }

    #[test]
    fn test_needle_longer_than_haystack() {
        assert_eq!(find("mh", "sgmh"), None);
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(find("khs", "khs"), Some(0));
    }

    #[test]
    fn test_case_sensitive_by_itself() {
        assert_eq!(find("Pollak", "poll"), None);
        assert_eq!(find("pollak", "poll"), Some(0));
    }

    #[test]
    fn test_repetitive_needle_uses_fallback() {
        // Prefix overlaps force the LPS fallback path.
        assert_eq!(find("aabaaabaaac", "aabaaac"), Some(4));
        assert_eq!(find("aaaaab", "aaab"), Some(2));
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(find("abcabc", "abc"), Some(0));
        assert_eq!(find("xabcabc", "abc"), Some(1));
    }

    #[test]
    fn test_lps_table() {
        assert_eq!(build_lps(b"aabaaac"), vec![0, 1, 0, 1, 2, 2, 0]);
        assert_eq!(build_lps(b"abab"), vec![0, 0, 1, 2]);
        assert_eq!(build_lps(b"x"), vec![0]);
    }

    #[test]
    fn test_resolve_first_in_iteration_order() {
        // "h" occurs in SGMH before KHS in listed order.
        let names = ["Pollak", "TSU", "SGMH", "KHS"];
        assert_eq!(resolve_location(names, "h"), Some("SGMH"));
    }

    #[test]
    fn test_resolve_case_insensitive() {
        let names = ["Pollak", "TSU"];
        assert_eq!(resolve_location(names, "POLL"), Some("Pollak"));
        assert_eq!(resolve_location(names, "tsu"), Some("TSU"));
    }

    #[test]
    fn test_resolve_not_found() {
        let names = ["Pollak", "TSU"];
        assert_eq!(resolve_location(names, "stadium"), None);
    }

    #[test]
    fn test_resolve_against_graph_locations() {
        let g = crate::graph::campus_graph();
        let resolved = resolve_location(g.locations(), "ecs");
        assert_eq!(resolved, Some("ECS"));
    }
}
