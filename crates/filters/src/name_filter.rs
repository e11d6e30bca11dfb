use std::collections::BTreeSet;

use crate::{
    DirDecision, PathPolicy,
    debug_filter::{
        trace_dir_decision, trace_exclusion_added, trace_file_decision, trace_mask_compiled,
    },
    mask::compile_phrase,
    matcher::{MatchMode, matches_any, matches_any_begin},
    phrase::split_phrases,
};

/// Include/exclude filter compiled from user phrases.
///
/// Each phrase compiles into masks stored in one of four deduplicated sets:
/// include or exclude, crossed with file-or-folder or folder-only. The sets
/// are kept sorted, so filters built from equivalent phrases compare equal
/// regardless of phrase order or repetition.
///
/// Once constructed the filter is immutable apart from
/// [`add_exclusion`](Self::add_exclusion). All predicates take `&self` and may
/// be called concurrently from any number of threads.
///
/// Ordering compares the include file-or-folder set first, then include
/// folder-only, exclude file-or-folder, exclude folder-only and finally the
/// [`PathPolicy`].
///
/// # Examples
///
/// ```
/// use filters::{NameFilter, PathPolicy};
///
/// let filter = NameFilter::with_policy("*", "*.tmp\ncache/", PathPolicy::POSIX);
///
/// assert!(filter.pass_file_filter("src/main.rs"));
/// assert!(!filter.pass_file_filter("src/main.tmp"));
/// assert!(!filter.pass_file_filter("cache/blob"));
/// assert!(filter.pass_file_filter("cache"));
///
/// let decision = filter.pass_dir_filter_with_hint("cache");
/// assert!(!decision.passed());
/// assert!(!decision.should_descend());
/// ```
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NameFilter {
    include_file_or_folder: BTreeSet<String>,
    include_folder_only: BTreeSet<String>,
    exclude_file_or_folder: BTreeSet<String>,
    exclude_folder_only: BTreeSet<String>,
    policy: PathPolicy,
}

impl NameFilter {
    /// Compiles `include` and `exclude` phrase lists using the native [`PathPolicy`].
    #[must_use]
    pub fn new(include: &str, exclude: &str) -> Self {
        Self::with_policy(include, exclude, PathPolicy::native())
    }

    /// Compiles `include` and `exclude` phrase lists using `policy`.
    ///
    /// Phrase lists are split on `;` and newline. Compilation never fails;
    /// phrases that reduce to nothing are dropped.
    #[must_use]
    pub fn with_policy(include: &str, exclude: &str, policy: PathPolicy) -> Self {
        let mut filter = Self::empty(policy);

        for phrase in split_phrases(include) {
            let compiled = compile_phrase(phrase, policy);
            for (class, mask) in compiled.masks() {
                trace_mask_compiled(phrase, mask, class, true);
            }
            filter.include_file_or_folder.extend(compiled.file_or_folder);
            filter.include_folder_only.extend(compiled.folder_only);
        }
        filter.extend_exclusions(exclude);

        filter
    }

    /// Returns the canonical filter that lets every path pass.
    #[must_use]
    pub fn null(policy: PathPolicy) -> Self {
        let mut filter = Self::empty(policy);
        filter.include_file_or_folder.insert("*".to_owned());
        filter
    }

    fn empty(policy: PathPolicy) -> Self {
        Self {
            include_file_or_folder: BTreeSet::new(),
            include_folder_only: BTreeSet::new(),
            exclude_file_or_folder: BTreeSet::new(),
            exclude_folder_only: BTreeSet::new(),
            policy,
        }
    }

    /// Compiles additional exclude phrases into the filter.
    ///
    /// Used to merge lists such as a user's "always skip" phrases into an
    /// existing configuration. Must not race with lookups; `&mut self`
    /// enforces that.
    pub fn add_exclusion(&mut self, exclude: &str) {
        self.extend_exclusions(exclude);
        trace_exclusion_added(
            exclude,
            self.exclude_file_or_folder.len(),
            self.exclude_folder_only.len(),
        );
    }

    fn extend_exclusions(&mut self, exclude: &str) {
        for phrase in split_phrases(exclude) {
            let compiled = compile_phrase(phrase, self.policy);
            for (class, mask) in compiled.masks() {
                trace_mask_compiled(phrase, mask, class, false);
            }
            self.exclude_file_or_folder.extend(compiled.file_or_folder);
            self.exclude_folder_only.extend(compiled.folder_only);
        }
    }

    /// Returns `true` when the file at `rel_path` passes the filter.
    ///
    /// Exclusion wins over inclusion. Folder-only masks only apply to the
    /// ancestry of the path, never to its final component.
    #[must_use]
    pub fn pass_file_filter(&self, rel_path: &str) -> bool {
        let path = self.policy.normalize(rel_path);
        let sep = self.policy.separator();

        let passed = !(matches_any(&path, &self.exclude_file_or_folder, MatchMode::Any, sep)
            || matches_any(&path, &self.exclude_folder_only, MatchMode::ParentFolder, sep))
            && (matches_any(&path, &self.include_file_or_folder, MatchMode::Any, sep)
                || matches_any(&path, &self.include_folder_only, MatchMode::ParentFolder, sep));

        trace_file_decision(rel_path, passed);
        passed
    }

    /// Returns `true` when the directory at `rel_path` passes the filter.
    ///
    /// Identical to `pass_dir_filter_with_hint(rel_path).passed()` but skips
    /// computing the pruning hint.
    #[must_use]
    pub fn pass_dir_filter(&self, rel_path: &str) -> bool {
        let passed = self.evaluate_dir(rel_path, false).passed();
        trace_dir_decision(rel_path, passed, None);
        passed
    }

    /// Evaluates the directory at `rel_path` and computes a pruning hint.
    ///
    /// A directory matching an exclude mask is rejected together with its
    /// whole subtree. A directory matching no include mask is rejected, but
    /// the hint reports whether some descendant could still be included.
    #[must_use]
    pub fn pass_dir_filter_with_hint(&self, rel_path: &str) -> DirDecision {
        let decision = self.evaluate_dir(rel_path, true);
        trace_dir_decision(rel_path, decision.passed(), Some(decision.hint()));
        decision
    }

    fn evaluate_dir(&self, rel_path: &str, want_hint: bool) -> DirDecision {
        let path = self.policy.normalize(rel_path);
        let sep = self.policy.separator();

        if matches_any(&path, &self.exclude_file_or_folder, MatchMode::Any, sep)
            || matches_any(&path, &self.exclude_folder_only, MatchMode::Any, sep)
        {
            return DirDecision::prune();
        }

        if matches_any(&path, &self.include_file_or_folder, MatchMode::Any, sep)
            || matches_any(&path, &self.include_folder_only, MatchMode::Any, sep)
        {
            return DirDecision::pass();
        }

        if !want_hint {
            return DirDecision::reject(false);
        }

        let mut child_prefix = path.into_owned();
        child_prefix.push(sep);
        DirDecision::reject(
            matches_any_begin(&child_prefix, &self.include_file_or_folder)
                || matches_any_begin(&child_prefix, &self.include_folder_only),
        )
    }

    /// Returns `true` when the compiled masks equal those of the null filter.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.include_folder_only.is_empty()
            && self.exclude_file_or_folder.is_empty()
            && self.exclude_folder_only.is_empty()
            && self.include_file_or_folder.len() == 1
            && self.include_file_or_folder.contains("*")
    }

    /// Returns `true` when the raw phrases describe the null filter.
    ///
    /// Cheaper than compiling, but only recognizes the canonical spelling:
    /// an include phrase of exactly `*` and an empty exclude phrase.
    #[must_use]
    pub fn is_null_phrase(include: &str, exclude: &str) -> bool {
        include.trim() == "*" && exclude.trim().is_empty()
    }

    /// Returns the policy used to normalize phrases and paths.
    #[must_use]
    pub const fn policy(&self) -> PathPolicy {
        self.policy
    }

    /// Returns the include masks that apply to files and folders.
    #[must_use]
    pub const fn include_file_or_folder(&self) -> &BTreeSet<String> {
        &self.include_file_or_folder
    }

    /// Returns the include masks that apply to folders only.
    #[must_use]
    pub const fn include_folder_only(&self) -> &BTreeSet<String> {
        &self.include_folder_only
    }

    /// Returns the exclude masks that apply to files and folders.
    #[must_use]
    pub const fn exclude_file_or_folder(&self) -> &BTreeSet<String> {
        &self.exclude_file_or_folder
    }

    /// Returns the exclude masks that apply to folders only.
    #[must_use]
    pub const fn exclude_folder_only(&self) -> &BTreeSet<String> {
        &self.exclude_folder_only
    }
}
