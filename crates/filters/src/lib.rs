#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` decides which relative paths a folder comparison visits. Users
//! describe the selection with include and exclude phrase lists (`*.txt`,
//! `/build/`, `*/cache/*`); the crate compiles those phrases into wildcard
//! masks once and then answers two questions for every entry a traversal
//! meets: does this file pass, and does this directory pass. For rejected
//! directories it also reports whether any descendant could still pass, so
//! the traversal can skip whole subtrees.
//!
//! # Design
//!
//! - [`compile_phrase`] turns one phrase into masks classified as
//!   file-or-folder or folder-only ([`MaskClass`]). A leading separator
//!   anchors the phrase to the filter root; a `*/` prefix additionally
//!   matches at any depth; a trailing separator or `/*` marks a folder-only
//!   rule.
//! - [`matches_mask`] implements `*`/`?` wildcard matching with a
//!   [`MatchMode`] describing where the mask may stop: at the end of the
//!   path, at an ancestor boundary, or strictly at an ancestor.
//!   [`matches_mask_begin`] answers the weaker "could this prefix still
//!   match" question used for pruning.
//! - [`NameFilter`] owns the four deduplicated mask sets and exposes
//!   [`pass_file_filter`](NameFilter::pass_file_filter),
//!   [`pass_dir_filter`](NameFilter::pass_dir_filter) and
//!   [`pass_dir_filter_with_hint`](NameFilter::pass_dir_filter_with_hint).
//! - [`HardFilter`] is the closed set of filter strategies (null, name,
//!   combined) with a total order keyed by a stable [`FilterKind`] rank, so
//!   callers can cache per-filter state by value.
//! - [`PathPolicy`] fixes case folding and separator handling per platform.
//!
//! # Invariants
//!
//! - Exclusion always takes precedence over inclusion.
//! - Folder-only masks never match the final component of a file path.
//! - When [`DirDecision::should_descend`] is `false`, no path below the
//!   directory passes either predicate.
//! - The accept/reject answer for a directory is the same whether or not the
//!   pruning hint is requested.
//! - Compiled filters are immutable apart from
//!   [`NameFilter::add_exclusion`] and are safe to share across threads.
//!
//! # Errors
//!
//! Compilation and matching are total. The only fallible operation is
//! [`read_phrase_file`], which reports [`PhraseFileError`].
//!
//! # Examples
//!
//! Include text files anywhere but skip a temporary folder:
//!
//! ```
//! use filters::{NameFilter, PathPolicy};
//!
//! let filter = NameFilter::with_policy("*.txt", "temp/", PathPolicy::POSIX);
//!
//! assert!(filter.pass_file_filter("notes.txt"));
//! assert!(filter.pass_file_filter("a/b/notes.txt"));
//! assert!(!filter.pass_file_filter("notes.doc"));
//! assert!(!filter.pass_file_filter("temp/notes.txt"));
//!
//! let temp = filter.pass_dir_filter_with_hint("temp");
//! assert!(!temp.passed());
//! assert!(!temp.should_descend());
//! ```

mod config;
pub mod debug_filter;
mod decision;
mod error;
mod hard_filter;
mod mask;
mod matcher;
mod name_filter;
mod phrase;
mod policy;

pub use config::FilterConfig;
pub use decision::{ChildHint, DirDecision};
pub use error::PhraseFileError;
pub use hard_filter::{FilterKind, HardFilter};
pub use mask::{CompiledPhrase, MaskClass, compile_phrase};
pub use matcher::{MatchMode, matches_mask, matches_mask_begin};
pub use name_filter::NameFilter;
pub use phrase::{read_phrase_file, split_phrases};
pub use policy::PathPolicy;
