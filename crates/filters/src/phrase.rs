use std::fs;
use std::path::Path;

use crate::PhraseFileError;

/// Splits filter text into trimmed, non-empty phrases.
///
/// Phrases are delimited by `;` or newline.
///
/// # Examples
///
/// ```
/// use filters::split_phrases;
///
/// let phrases: Vec<_> = split_phrases("*.tmp; cache/\n\n  /build/  ").collect();
/// assert_eq!(phrases, ["*.tmp", "cache/", "/build/"]);
/// ```
pub fn split_phrases(text: &str) -> impl Iterator<Item = &str> {
    text.split(';')
        .flat_map(|part| part.split('\n'))
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
}

/// Reads a phrase file, such as a user "always skip" list.
///
/// The returned text can be handed to
/// [`NameFilter::add_exclusion`](crate::NameFilter::add_exclusion) directly;
/// splitting happens there.
///
/// # Errors
///
/// Returns [`PhraseFileError`] when the file cannot be read or is not UTF-8.
pub fn read_phrase_file(path: impl AsRef<Path>) -> Result<String, PhraseFileError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| PhraseFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| PhraseFileError::InvalidUtf8 {
        path: path.to_path_buf(),
        source,
    })
}
