use std::fmt;

/// Pruning hint attached to a directory decision.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ChildHint {
    /// No descendant of the rejected directory can pass the filter.
    NoDescendantMatch,
    /// The directory was rejected, but some descendant might still pass.
    DescendantMayMatch,
    /// The directory passed; descendants are filtered individually.
    NotApplicable,
}

impl fmt::Display for ChildHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDescendantMatch => f.write_str("no-descendant-match"),
            Self::DescendantMayMatch => f.write_str("descendant-may-match"),
            Self::NotApplicable => f.write_str("not-applicable"),
        }
    }
}

/// Outcome of evaluating a directory path, including the pruning hint.
///
/// [`passed`](Self::passed) never depends on whether the hint is consulted:
/// callers that recurse unconditionally still get correct accept/reject
/// answers for every descendant.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DirDecision {
    passed: bool,
    hint: ChildHint,
}

impl DirDecision {
    pub(crate) const fn pass() -> Self {
        Self {
            passed: true,
            hint: ChildHint::NotApplicable,
        }
    }

    pub(crate) const fn prune() -> Self {
        Self {
            passed: false,
            hint: ChildHint::NoDescendantMatch,
        }
    }

    pub(crate) const fn reject(descendant_may_match: bool) -> Self {
        Self {
            passed: false,
            hint: if descendant_may_match {
                ChildHint::DescendantMayMatch
            } else {
                ChildHint::NoDescendantMatch
            },
        }
    }

    /// Returns whether the directory itself passes the filter.
    #[must_use]
    pub const fn passed(self) -> bool {
        self.passed
    }

    /// Returns the pruning hint.
    #[must_use]
    pub const fn hint(self) -> ChildHint {
        self.hint
    }

    /// Returns whether a traversal should visit the directory's children.
    #[must_use]
    pub const fn should_descend(self) -> bool {
        self.passed || matches!(self.hint, ChildHint::DescendantMayMatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_directory_is_descended() {
        let decision = DirDecision::pass();
        assert!(decision.passed());
        assert_eq!(decision.hint(), ChildHint::NotApplicable);
        assert!(decision.should_descend());
    }

    #[test]
    fn pruned_directory_is_skipped() {
        let decision = DirDecision::prune();
        assert!(!decision.passed());
        assert_eq!(decision.hint(), ChildHint::NoDescendantMatch);
        assert!(!decision.should_descend());
    }

    #[test]
    fn rejected_directory_follows_hint() {
        assert!(DirDecision::reject(true).should_descend());
        assert!(!DirDecision::reject(false).should_descend());
        assert_eq!(DirDecision::reject(false), DirDecision::prune());
    }

    #[test]
    fn hint_display_tokens() {
        let cases = [
            (ChildHint::NoDescendantMatch, "no-descendant-match"),
            (ChildHint::DescendantMayMatch, "descendant-may-match"),
            (ChildHint::NotApplicable, "not-applicable"),
        ];

        for (hint, expected) in cases {
            assert_eq!(hint.to_string(), expected);
        }
    }
}
