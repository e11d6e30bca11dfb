use crate::{HardFilter, NameFilter, PathPolicy};

/// Include and exclude phrase lists as supplied by a configuration source.
///
/// The default value is the null configuration: include everything, exclude
/// nothing.
///
/// # Examples
///
/// ```
/// use filters::{FilterConfig, FilterKind, PathPolicy};
///
/// assert!(FilterConfig::default().is_null());
///
/// let config = FilterConfig::new("*", "*.tmp");
/// let filter = config.to_filter(PathPolicy::POSIX);
/// assert_eq!(filter.kind(), FilterKind::Name);
/// assert!(!filter.pass_file_filter("scratch.tmp"));
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterConfig {
    /// Include phrases, separated by `;` or newline.
    pub include: String,
    /// Exclude phrases, separated by `;` or newline.
    pub exclude: String,
}

impl FilterConfig {
    /// Creates a configuration from raw phrase lists.
    #[must_use]
    pub fn new(include: impl Into<String>, exclude: impl Into<String>) -> Self {
        Self {
            include: include.into(),
            exclude: exclude.into(),
        }
    }

    /// Returns `true` when the phrases spell the null configuration.
    #[must_use]
    pub fn is_null(&self) -> bool {
        NameFilter::is_null_phrase(&self.include, &self.exclude)
    }

    /// Compiles the configuration into a filter.
    ///
    /// The null configuration yields [`HardFilter::Null`] without compiling
    /// anything.
    #[must_use]
    pub fn to_filter(&self, policy: PathPolicy) -> HardFilter {
        if self.is_null() {
            HardFilter::Null
        } else {
            HardFilter::Name(NameFilter::with_policy(
                &self.include,
                &self.exclude,
                policy,
            ))
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::new("*", "")
    }
}
