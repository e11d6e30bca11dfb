use std::borrow::Cow;

/// Platform policy that decides how phrases and paths are normalized before matching.
///
/// Matching itself is byte-for-byte after normalization. Whether `Report.PDF`
/// and `report.pdf` are the same name is therefore decided here, once, rather
/// than in the matchers.
///
/// The policy is always an explicit value. [`PathPolicy::native`] picks one of
/// the predefined policies at compile time; nothing is probed at run time.
///
/// # Examples
///
/// ```
/// use filters::PathPolicy;
///
/// assert_eq!(PathPolicy::POSIX.normalize("Docs/a.txt"), "Docs/a.txt");
/// assert_eq!(PathPolicy::WINDOWS.normalize("Docs/a.txt"), "DOCS\\A.TXT");
/// assert_eq!(PathPolicy::MACOS.normalize("Docs/a.txt"), "DOCS/A.TXT");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PathPolicy {
    separator: char,
    alternate_separator: Option<char>,
    fold_case: bool,
}

impl PathPolicy {
    /// Case-sensitive matching with `/` as the only separator.
    pub const POSIX: Self = Self {
        separator: '/',
        alternate_separator: None,
        fold_case: false,
    };

    /// Case-insensitive matching with `/` as the only separator.
    pub const MACOS: Self = Self {
        separator: '/',
        alternate_separator: None,
        fold_case: true,
    };

    /// Case-insensitive matching with `\` as separator; `/` is rewritten to `\`.
    pub const WINDOWS: Self = Self {
        separator: '\\',
        alternate_separator: Some('/'),
        fold_case: true,
    };

    /// Returns the policy for the compilation target.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::WINDOWS
        } else if cfg!(target_os = "macos") {
            Self::MACOS
        } else {
            Self::POSIX
        }
    }

    /// Returns the canonical directory separator.
    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator
    }

    /// Returns the separator that is rewritten to [`separator`](Self::separator), if any.
    #[must_use]
    pub const fn alternate_separator(&self) -> Option<char> {
        self.alternate_separator
    }

    /// Returns whether names are compared case-insensitively.
    #[must_use]
    pub const fn folds_case(&self) -> bool {
        self.fold_case
    }

    /// Applies case folding and separator unification to `text`.
    ///
    /// Folding maps one character to one character: characters whose upper
    /// case expands to several (`ß`) are kept as they are, so `?` still
    /// matches them and distinct names never fold together.
    ///
    /// Borrows the input when the policy leaves it unchanged.
    #[must_use]
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.chars().all(|c| self.normalize_char(c) == c) {
            return Cow::Borrowed(text);
        }
        Cow::Owned(text.chars().map(|c| self.normalize_char(c)).collect())
    }

    fn normalize_char(&self, c: char) -> char {
        if self.alternate_separator == Some(c) {
            return self.separator;
        }
        if self.fold_case {
            return fold_char(c);
        }
        c
    }
}

fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

impl Default for PathPolicy {
    fn default() -> Self {
        Self::native()
    }
}

#[cfg(test)]
mod tests {
    use super::PathPolicy;
    use std::borrow::Cow;

    #[test]
    fn posix_policy_borrows_input() {
        assert!(matches!(
            PathPolicy::POSIX.normalize("Mixed/Case.TXT"),
            Cow::Borrowed("Mixed/Case.TXT")
        ));
    }

    #[test]
    fn folding_policy_borrows_already_upper_input() {
        assert!(matches!(
            PathPolicy::MACOS.normalize("UPPER/1.TXT"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn windows_policy_unifies_separators() {
        assert_eq!(PathPolicy::WINDOWS.normalize("a/b\\c"), "A\\B\\C");
        assert_eq!(PathPolicy::WINDOWS.normalize("A/B"), "A\\B");
    }

    #[test]
    fn folding_handles_non_ascii() {
        assert_eq!(PathPolicy::MACOS.normalize("straße/ä"), "STRAßE/Ä");
    }

    #[test]
    fn folding_keeps_one_char_per_char() {
        for text in ["ß", "ŉ", "ﬁle", "straße.txt"] {
            let folded = PathPolicy::WINDOWS.normalize(text);
            assert_eq!(folded.chars().count(), text.chars().count(), "{text:?}");
        }
        assert!(matches!(PathPolicy::MACOS.normalize("ß"), Cow::Borrowed("ß")));
    }

    #[test]
    fn wildcards_survive_normalization() {
        assert_eq!(PathPolicy::WINDOWS.normalize("*/?x*"), "*\\?X*");
    }

    #[test]
    fn native_policy_matches_target() {
        let native = PathPolicy::native();
        if cfg!(windows) {
            assert_eq!(native, PathPolicy::WINDOWS);
        } else if cfg!(target_os = "macos") {
            assert_eq!(native, PathPolicy::MACOS);
        } else {
            assert_eq!(native, PathPolicy::POSIX);
        }
        assert_eq!(PathPolicy::default(), native);
    }
}
