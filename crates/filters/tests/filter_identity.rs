//! Integration tests for filter identity, ordering and combination.
//!
//! Filters compare by compiled content rather than phrase text so callers can
//! key per-folder state by filter value.

use filters::{FilterConfig, FilterKind, HardFilter, NameFilter, PathPolicy};
use std::collections::{BTreeMap, HashMap};

fn name(include: &str, exclude: &str) -> HardFilter {
    HardFilter::from(NameFilter::with_policy(include, exclude, PathPolicy::POSIX))
}

// ============================================================================
// Identity
// ============================================================================

#[test]
fn equivalent_phrases_compile_to_equal_filters() {
    assert_eq!(name("*.txt;*.md", ""), name("*.md\n*.txt;*.txt", ""));
    assert_eq!(name("*", "cache/"), name("*", "cache/*"));
    assert_eq!(name("*", "/abc"), name("*", "abc"));
}

#[test]
fn different_phrases_compile_to_different_filters() {
    assert_ne!(name("*.txt", ""), name("*.md", ""));
    assert_ne!(name("*", "cache/"), name("*", "cache"));
    assert_ne!(name("a", ""), name("", "a"));
}

#[test]
fn filters_key_ordered_maps() {
    let mut cache = BTreeMap::new();
    cache.insert(name("*.rs", "target/"), "rust");
    cache.insert(name("*", ""), "everything");

    assert_eq!(cache.get(&name("*.rs", "target/*")), Some(&"rust"));
    assert_eq!(cache.get(&name(" * ", "")), Some(&"everything"));
    assert_eq!(cache.get(&name("*.c", "")), None);
}

#[test]
fn filters_key_hash_maps() {
    let mut cache = HashMap::new();
    cache.insert(name("*.rs;*.toml", ""), 1);

    assert_eq!(cache.get(&name("*.toml;*.rs", "")), Some(&1));
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn kinds_order_by_fixed_rank() {
    let null = HardFilter::Null;
    let named = name("*.txt", "");
    let combined = HardFilter::combine(name("*.txt", ""), name("docs/", ""));

    assert_eq!(combined.kind(), FilterKind::Combined);
    assert!(null < named);
    assert!(named < combined);
    assert!(null < combined);
}

#[test]
fn name_filters_order_by_include_then_exclude_sets() {
    let mut filters = vec![
        name("b", "a"),
        name("a", "z"),
        name("a", "b"),
        name("a/", ""),
    ];
    filters.sort();

    assert_eq!(
        filters,
        vec![name("a/", ""), name("a", "b"), name("a", "z"), name("b", "a")]
    );
}

#[test]
fn null_name_filter_is_not_the_null_kind() {
    let compiled = name("*", "");
    assert!(compiled.is_null());
    assert_ne!(compiled, HardFilter::Null);
}

// ============================================================================
// Combination
// ============================================================================

#[test]
fn combining_with_null_keeps_other_operand() {
    let filter = name("*.txt", "");

    assert_eq!(HardFilter::combine(HardFilter::Null, filter.clone()), filter);
    assert_eq!(HardFilter::combine(filter.clone(), HardFilter::Null), filter);
    assert_eq!(
        HardFilter::combine(HardFilter::Null, HardFilter::Null),
        HardFilter::Null
    );
}

#[test]
fn combined_filter_intersects_members() {
    let global = name("*", "*.tmp;.git/");
    let local = name("src/;Cargo.toml", "");
    let filter = HardFilter::combine(global, local);

    assert!(filter.pass_file_filter("src/main.rs"));
    assert!(filter.pass_file_filter("Cargo.toml"));
    assert!(!filter.pass_file_filter("src/main.tmp"));
    assert!(!filter.pass_file_filter("README.md"));
    assert!(!filter.pass_dir_filter(".git"));
    assert!(filter.pass_dir_filter("src"));
}

#[test]
fn combined_filter_prunes_when_either_member_rules_out_descendants() {
    let filter = HardFilter::combine(name("src/*.rs", ""), name("*", "src/gen/"));

    let src = filter.pass_dir_filter_with_hint("src");
    assert!(!src.passed());
    assert!(src.should_descend());

    let generated = filter.pass_dir_filter_with_hint("src/gen");
    assert!(!generated.should_descend());
    assert!(!filter.pass_file_filter("src/gen/out.rs"));

    assert!(!filter.pass_dir_filter_with_hint("docs").should_descend());
}

#[test]
fn combined_hint_never_changes_directory_decision() {
    let filter = HardFilter::combine(name("src/*.rs;docs/", "*.bak"), name("*", "docs/old/"));

    for path in ["src", "docs", "docs/old", "x.bak", "other", ""] {
        assert_eq!(
            filter.pass_dir_filter(path),
            filter.pass_dir_filter_with_hint(path).passed(),
            "{path:?}"
        );
    }
}

// ============================================================================
// Exclusion Extension
// ============================================================================

#[test]
fn exclusion_extension_on_every_kind() {
    let null = HardFilter::Null.copy_adding_exclusion("*.tmp");
    assert!(!null.pass_file_filter("a.tmp"));
    assert!(null.pass_file_filter("a.txt"));

    let named = name("*.txt;*.tmp", "").copy_adding_exclusion("*.tmp");
    assert_eq!(named, name("*.txt;*.tmp", "*.tmp"));

    let combined = HardFilter::combine(name("*", "a"), name("*", "b"));
    let extended = combined.copy_adding_exclusion("c");
    assert!(combined.pass_file_filter("c"));
    assert!(!extended.pass_file_filter("c"));
    assert_eq!(extended.kind(), FilterKind::Combined);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn configuration_builds_matching_filter() {
    let config = FilterConfig::new("*.rs", "target/");
    assert_eq!(
        config.to_filter(PathPolicy::POSIX),
        name("*.rs", "target/")
    );
    assert_eq!(
        FilterConfig::default().to_filter(PathPolicy::POSIX),
        HardFilter::Null
    );
}
