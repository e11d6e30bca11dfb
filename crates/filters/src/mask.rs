use std::fmt;

use crate::PathPolicy;

/// Classification of a compiled mask.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum MaskClass {
    /// Applies to the relative path of files and directories alike.
    FileOrFolder,
    /// Applies to directories and, through them, to everything below.
    FolderOnly,
}

impl fmt::Display for MaskClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileOrFolder => f.write_str("file-or-folder"),
            Self::FolderOnly => f.write_str("folder-only"),
        }
    }
}

/// Masks produced from a single filter phrase.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CompiledPhrase {
    /// Masks matched against file and directory paths.
    pub file_or_folder: Vec<String>,
    /// Masks matched against directory paths and their ancestry only.
    pub folder_only: Vec<String>,
}

impl CompiledPhrase {
    /// Returns `true` when the phrase produced no mask at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.file_or_folder.is_empty() && self.folder_only.is_empty()
    }

    /// Iterates over every mask together with its class.
    pub fn masks(&self) -> impl Iterator<Item = (MaskClass, &str)> {
        self.file_or_folder
            .iter()
            .map(|mask| (MaskClass::FileOrFolder, mask.as_str()))
            .chain(
                self.folder_only
                    .iter()
                    .map(|mask| (MaskClass::FolderOnly, mask.as_str())),
            )
    }
}

/// Compiles one trimmed filter phrase into masks.
///
/// | phrase    | result                              |
/// |-----------|-------------------------------------|
/// | `/abc`    | `abc`, anchored at the filter root  |
/// | `*/abc`   | `*/abc` and `abc`                   |
/// | `abc/`    | `abc`, folder-only                  |
/// | `abc/*`   | `abc`, folder-only                  |
/// | `abc*`    | `abc*`                              |
///
/// Degenerate phrases such as `/` compile to nothing. Compilation never fails.
///
/// # Examples
///
/// ```
/// use filters::{PathPolicy, compile_phrase};
///
/// let compiled = compile_phrase("*/build/", PathPolicy::POSIX);
/// assert!(compiled.file_or_folder.is_empty());
/// assert_eq!(compiled.folder_only, ["*/build", "build"]);
/// ```
#[must_use]
pub fn compile_phrase(phrase: &str, policy: PathPolicy) -> CompiledPhrase {
    let mut compiled = CompiledPhrase::default();
    let normalized = policy.normalize(phrase);
    let sep = policy.separator();

    if let Some(rest) = normalized.strip_prefix(sep) {
        process_tail(rest, sep, &mut compiled);
    } else {
        process_tail(&normalized, sep, &mut compiled);
        if let Some(rest) = normalized
            .strip_prefix('*')
            .and_then(|after_star| after_star.strip_prefix(sep))
        {
            process_tail(rest, sep, &mut compiled);
        }
    }

    compiled
}

fn process_tail(phrase: &str, sep: char, compiled: &mut CompiledPhrase) {
    let folder_marker = phrase.ends_with(sep)
        || phrase
            .strip_suffix('*')
            .is_some_and(|head| head.ends_with(sep));

    if folder_marker {
        if let Some((dir_phrase, _)) = phrase.rsplit_once(sep)
            && !dir_phrase.is_empty()
        {
            compiled.folder_only.push(dir_phrase.to_owned());
        }
    } else if !phrase.is_empty() {
        compiled.file_or_folder.push(phrase.to_owned());
    }
}
