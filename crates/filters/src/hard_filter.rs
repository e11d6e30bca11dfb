use std::cmp::Ordering;
use std::sync::Arc;

use crate::{ChildHint, DirDecision, NameFilter, PathPolicy};

/// Stable rank of each [`HardFilter`] variant.
///
/// Filters of different kinds order by this rank, which is fixed and may be
/// persisted or compared across processes.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum FilterKind {
    /// [`HardFilter::Null`].
    Null = 0,
    /// [`HardFilter::Name`].
    Name = 1,
    /// [`HardFilter::Combined`].
    Combined = 2,
}

/// Path filter applied during traversal.
///
/// A closed set of strategies sharing the file and directory predicates.
/// Values are cheap to clone; combined filters share their members.
///
/// # Examples
///
/// ```
/// use filters::{HardFilter, NameFilter, PathPolicy};
///
/// let global = HardFilter::from(NameFilter::with_policy("*", "*.bak", PathPolicy::POSIX));
/// let local = HardFilter::from(NameFilter::with_policy("src/", "", PathPolicy::POSIX));
/// let filter = HardFilter::combine(global, local);
///
/// assert!(filter.pass_file_filter("src/main.rs"));
/// assert!(!filter.pass_file_filter("src/main.bak"));
/// assert!(!filter.pass_file_filter("README.md"));
/// ```
#[derive(Clone, Debug, Default)]
pub enum HardFilter {
    /// Lets every path pass.
    #[default]
    Null,
    /// Phrase-based include/exclude filter.
    Name(NameFilter),
    /// Passes only what both members pass.
    Combined(Arc<HardFilter>, Arc<HardFilter>),
}

impl HardFilter {
    /// Returns the variant rank used for ordering.
    #[must_use]
    pub const fn kind(&self) -> FilterKind {
        match self {
            Self::Null => FilterKind::Null,
            Self::Name(_) => FilterKind::Name,
            Self::Combined(..) => FilterKind::Combined,
        }
    }

    /// Returns `true` when the filter lets every path pass.
    ///
    /// Combined filters are never null: [`combine`](Self::combine) drops null
    /// operands before building one.
    #[must_use]
    pub fn is_null(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Name(filter) => filter.is_null(),
            Self::Combined(..) => false,
        }
    }

    /// Returns `true` when the file at `rel_path` passes the filter.
    #[must_use]
    pub fn pass_file_filter(&self, rel_path: &str) -> bool {
        match self {
            Self::Null => true,
            Self::Name(filter) => filter.pass_file_filter(rel_path),
            Self::Combined(first, second) => {
                first.pass_file_filter(rel_path) && second.pass_file_filter(rel_path)
            }
        }
    }

    /// Returns `true` when the directory at `rel_path` passes the filter.
    #[must_use]
    pub fn pass_dir_filter(&self, rel_path: &str) -> bool {
        match self {
            Self::Null => true,
            Self::Name(filter) => filter.pass_dir_filter(rel_path),
            Self::Combined(first, second) => {
                first.pass_dir_filter(rel_path) && second.pass_dir_filter(rel_path)
            }
        }
    }

    /// Evaluates the directory at `rel_path` and computes a pruning hint.
    #[must_use]
    pub fn pass_dir_filter_with_hint(&self, rel_path: &str) -> DirDecision {
        match self {
            Self::Null => DirDecision::pass(),
            Self::Name(filter) => filter.pass_dir_filter_with_hint(rel_path),
            Self::Combined(first, second) => {
                let decision = first.pass_dir_filter_with_hint(rel_path);
                if decision.passed() {
                    return second.pass_dir_filter_with_hint(rel_path);
                }
                if decision.hint() != ChildHint::DescendantMayMatch {
                    return decision;
                }
                let other = second.pass_dir_filter_with_hint(rel_path);
                DirDecision::reject(other.should_descend())
            }
        }
    }

    /// Returns a copy of the filter that additionally excludes `exclude`.
    ///
    /// A [`Null`](Self::Null) filter becomes a name filter using the native
    /// [`PathPolicy`]; see
    /// [`copy_adding_exclusion_with_policy`](Self::copy_adding_exclusion_with_policy).
    #[must_use]
    pub fn copy_adding_exclusion(&self, exclude: &str) -> Self {
        self.copy_adding_exclusion_with_policy(exclude, PathPolicy::native())
    }

    /// Like [`copy_adding_exclusion`](Self::copy_adding_exclusion), but a
    /// [`Null`](Self::Null) filter is replaced by a name filter using `policy`.
    ///
    /// Name filters keep the policy they were compiled with.
    #[must_use]
    pub fn copy_adding_exclusion_with_policy(&self, exclude: &str, policy: PathPolicy) -> Self {
        match self {
            Self::Null => Self::Name(NameFilter::with_policy("*", exclude, policy)),
            Self::Name(filter) => {
                let mut filter = filter.clone();
                filter.add_exclusion(exclude);
                Self::Name(filter)
            }
            Self::Combined(first, second) => Self::Combined(
                Arc::new(first.copy_adding_exclusion_with_policy(exclude, policy)),
                Arc::clone(second),
            ),
        }
    }

    /// Combines two filters so that a path must pass both.
    ///
    /// Null operands are dropped and equal operands collapse into one, so
    /// combining never produces a needlessly nested filter.
    #[must_use]
    pub fn combine(first: Self, second: Self) -> Self {
        if first.is_null() {
            if second.is_null() {
                return Self::Null;
            }
            return second;
        }
        if second.is_null() || first == second {
            return first;
        }
        Self::Combined(Arc::new(first), Arc::new(second))
    }
}

impl From<NameFilter> for HardFilter {
    fn from(filter: NameFilter) -> Self {
        Self::Name(filter)
    }
}

impl PartialEq for HardFilter {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HardFilter {}

impl PartialOrd for HardFilter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HardFilter {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Name(lhs), Self::Name(rhs)) => lhs.cmp(rhs),
            (Self::Combined(lhs_first, lhs_second), Self::Combined(rhs_first, rhs_second)) => {
                lhs_first
                    .cmp(rhs_first)
                    .then_with(|| lhs_second.cmp(rhs_second))
            }
            _ => self.kind().cmp(&other.kind()),
        }
    }
}

impl std::hash::Hash for HardFilter {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Self::Null => {}
            Self::Name(filter) => filter.hash(state),
            Self::Combined(first, second) => {
                first.hash(state);
                second.hash(state);
            }
        }
    }
}
