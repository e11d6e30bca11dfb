//! Wildcard matching of normalized paths against compiled masks.
//!
//! Masks understand two wildcards: `*` matches any run of characters
//! (including none and including separators) and `?` matches exactly one
//! character. Everything else is literal. Both inputs must already be
//! normalized with the same [`PathPolicy`](crate::PathPolicy).

/// Decides where a mask is allowed to stop relative to the end of the path.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MatchMode {
    /// The mask describes the whole path.
    Full,
    /// The mask describes a strict ancestor directory of the final component.
    ParentFolder,
    /// The mask describes the whole path or one of its ancestor directories.
    Any,
}

impl MatchMode {
    /// Accepts the remaining path once every mask character was consumed.
    fn accepts_mask_end(self, rest: &str, sep: char) -> bool {
        match self {
            Self::Full => rest.is_empty(),
            Self::ParentFolder => rest.starts_with(sep),
            Self::Any => rest.is_empty() || rest.starts_with(sep),
        }
    }

    /// Accepts the remaining path when the mask ends in `*`.
    fn accepts_trailing_star(self, rest: &str, sep: char) -> bool {
        match self {
            Self::Full | Self::Any => true,
            Self::ParentFolder => rest.contains(sep),
        }
    }
}

/// Returns `true` when `mask` matches `path` under `mode`.
///
/// # Examples
///
/// ```
/// use filters::{MatchMode, matches_mask};
///
/// assert!(matches_mask("src/lib.rs", "*.rs", MatchMode::Full, '/'));
/// assert!(matches_mask("target/debug/app", "target", MatchMode::Any, '/'));
/// assert!(!matches_mask("target", "target", MatchMode::ParentFolder, '/'));
/// ```
#[must_use]
pub fn matches_mask(path: &str, mask: &str, mode: MatchMode, sep: char) -> bool {
    let mut path = path;
    let mut mask_chars = mask.chars();

    loop {
        match mask_chars.next() {
            None => return mode.accepts_mask_end(path, sep),
            Some('?') => match skip_one(path) {
                Some(rest) => path = rest,
                None => return false,
            },
            Some('*') => {
                let after_stars = mask_chars.as_str().trim_start_matches('*');
                let mut tail_chars = after_stars.chars();

                return match tail_chars.next() {
                    None => mode.accepts_trailing_star(path, sep),
                    Some('?') => {
                        let tail = tail_chars.as_str();
                        let mut candidate = path.chars();
                        while candidate.next().is_some() {
                            if matches_mask(candidate.as_str(), tail, mode, sep) {
                                return true;
                            }
                        }
                        false
                    }
                    Some(literal) => {
                        let tail = tail_chars.as_str();
                        let mut candidate = path;
                        while let Some(index) = candidate.find(literal) {
                            candidate = &candidate[index + literal.len_utf8()..];
                            if matches_mask(candidate, tail, mode, sep) {
                                return true;
                            }
                        }
                        false
                    }
                };
            }
            Some(literal) => match path.strip_prefix(literal) {
                Some(rest) => path = rest,
                None => return false,
            },
        }
    }
}

/// Returns `true` when `path` could be the beginning of something `mask` fully matches.
///
/// Used only for directory pruning: a `false` result proves that no
/// extension of `path` can ever match.
///
/// # Examples
///
/// ```
/// use filters::matches_mask_begin;
///
/// assert!(matches_mask_begin("2024/", "*/report.pdf"));
/// assert!(matches_mask_begin("docs/", "docs/manual/index.html"));
/// assert!(!matches_mask_begin("src/", "docs/*"));
/// ```
#[must_use]
pub fn matches_mask_begin(path: &str, mask: &str) -> bool {
    let mut path = path.chars();

    for mask_char in mask.chars() {
        match mask_char {
            '*' => return true,
            '?' => {
                if path.next().is_none() {
                    return true;
                }
            }
            literal => match path.next() {
                Some(c) if c == literal => {}
                Some(_) => return false,
                None => return true,
            },
        }
    }

    path.as_str().is_empty()
}

/// Returns `true` when any of `masks` matches `path` under `mode`.
pub(crate) fn matches_any<'a, I>(path: &str, masks: I, mode: MatchMode, sep: char) -> bool
where
    I: IntoIterator<Item = &'a String>,
{
    masks
        .into_iter()
        .any(|mask| matches_mask(path, mask, mode, sep))
}

/// Returns `true` when `path` could begin a match for any of `masks`.
pub(crate) fn matches_any_begin<'a, I>(path: &str, masks: I) -> bool
where
    I: IntoIterator<Item = &'a String>,
{
    masks.into_iter().any(|mask| matches_mask_begin(path, mask))
}

fn skip_one(text: &str) -> Option<&str> {
    let mut chars = text.chars();
    chars.next().map(|_| chars.as_str())
}
