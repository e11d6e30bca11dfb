//! Structured tracing for mask compilation and filter decisions.
//!
//! All helpers are compiled behind the `tracing` feature flag and reduce to
//! inline no-ops when it is disabled, so the matching hot path carries no cost
//! in default builds.

use crate::{ChildHint, MaskClass};

/// Target name for tracing events.
#[cfg(feature = "tracing")]
const FILTER_TARGET: &str = "filters::name";

/// Traces a mask produced while compiling a phrase.
///
/// # Arguments
///
/// * `phrase` - The phrase as written by the user
/// * `mask` - The normalized mask derived from it
/// * `class` - Whether the mask is file-or-folder or folder-only
/// * `is_include` - Whether the phrase came from the include side
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_mask_compiled(phrase: &str, mask: &str, class: MaskClass, is_include: bool) {
    tracing::debug!(
        target: FILTER_TARGET,
        phrase = %phrase,
        mask = %mask,
        class = %class,
        is_include = is_include,
        "mask_compiled"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_mask_compiled(_phrase: &str, _mask: &str, _class: MaskClass, _is_include: bool) {}

/// Traces an exclusion extension and the resulting exclude mask counts.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_exclusion_added(phrase: &str, file_or_folder: usize, folder_only: usize) {
    tracing::debug!(
        target: FILTER_TARGET,
        phrase = %phrase,
        exclude_file_or_folder = file_or_folder,
        exclude_folder_only = folder_only,
        "exclusion_added"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_exclusion_added(_phrase: &str, _file_or_folder: usize, _folder_only: usize) {}

/// Traces the decision for a file path.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_file_decision(path: &str, passed: bool) {
    tracing::trace!(
        target: FILTER_TARGET,
        path = %path,
        passed = passed,
        "file_decision"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_file_decision(_path: &str, _passed: bool) {}

/// Traces the decision for a directory path along with its pruning hint.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_dir_decision(path: &str, passed: bool, hint: Option<ChildHint>) {
    tracing::trace!(
        target: FILTER_TARGET,
        path = %path,
        passed = passed,
        hint = ?hint,
        "dir_decision"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_dir_decision(_path: &str, _passed: bool, _hint: Option<ChildHint>) {}
