// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Name-keyed merging of pod sub-resource lists.
//!
//! Several reconcilers contribute containers, volumes, and volume mounts to
//! the same pod specification over separate calls. These helpers let each
//! contributor reconcile its own entries by name without disturbing entries
//! owned by anyone else, and without producing a changed list when nothing
//! actually changed. The latter matters: a merge that rebuilds an identical
//! list every pass shows up as a diff against the server object and causes
//! update storms.
//!
//! Entries are opaque to this module except for their name. Whether an entry
//! changed is judged by whole-value structural equality (`PartialEq`), order
//! included.
//!
//! # Example
//!
//! ```rust
//! use k8s_openapi::api::core::v1::Volume;
//! use postgres_operator::merge::merge_by_name;
//!
//! let existing = vec![Volume { name: "certs".into(), ..Default::default() }];
//! let incoming = vec![Volume { name: "backups".into(), ..Default::default() }];
//!
//! let merged = merge_by_name(existing, &incoming);
//! assert_eq!(merged.len(), 2);
//! ```

use k8s_openapi::api::core::v1::{Container, Volume, VolumeMount};
use std::collections::BTreeSet;
use tracing::debug;

/// A pod sub-resource entry identified by a name unique within its list.
///
/// Everything besides the name is opaque to the merge helpers and compared
/// only through `PartialEq`.
pub trait NamedItem: Clone + PartialEq {
    /// The entry's name.
    fn name(&self) -> &str;

    /// A new entry carrying only the given name, all other fields defaulted.
    fn named(name: &str) -> Self;
}

impl NamedItem for Container {
    fn name(&self) -> &str {
        &self.name
    }

    fn named(name: &str) -> Self {
        Container {
            name: name.to_string(),
            ..Container::default()
        }
    }
}

impl NamedItem for Volume {
    fn name(&self) -> &str {
        &self.name
    }

    fn named(name: &str) -> Self {
        Volume {
            name: name.to_string(),
            ..Volume::default()
        }
    }
}

impl NamedItem for VolumeMount {
    fn name(&self) -> &str {
        &self.name
    }

    fn named(name: &str) -> Self {
        VolumeMount {
            name: name.to_string(),
            ..VolumeMount::default()
        }
    }
}

/// Returns a mutable reference to the first entry named `name`, appending a
/// new entry with only the name set when none exists.
///
/// The list grows by at most one; existing entries are never moved. If the
/// list holds several entries with the same name, the first one wins and the
/// later duplicates are ignored.
pub fn find_or_append<'a, T: NamedItem>(items: &'a mut Vec<T>, name: &str) -> &'a mut T {
    match items.iter().position(|item| item.name() == name) {
        Some(index) => &mut items[index],
        None => {
            items.push(T::named(name));
            let last = items.len() - 1;
            &mut items[last]
        }
    }
}

/// Merges `incoming` entries into `existing` by name.
///
/// Entries of `existing` whose names do not appear in `incoming` are kept in
/// their original relative order; they belong to other contributors. The
/// entries that do share a name with `incoming` are compared, as an ordered
/// subsequence, against `incoming` itself:
///
/// - equal (same entries, same order): `existing` is handed back untouched,
///   same allocation and all, so repeated merges with unchanged input are
///   observable no-ops;
/// - anything else (changed values, different count, reordered): the kept
///   entries are followed by every `incoming` entry in the caller's order,
///   which discards the previous positions of the replaced entries.
#[must_use]
pub fn merge_by_name<T: NamedItem>(existing: Vec<T>, incoming: &[T]) -> Vec<T> {
    let names: BTreeSet<&str> = incoming.iter().map(NamedItem::name).collect();

    let matched: Vec<&T> = existing
        .iter()
        .filter(|item| names.contains(item.name()))
        .collect();

    if matched.len() == incoming.len()
        && matched.iter().zip(incoming).all(|(ours, theirs)| **ours == *theirs)
    {
        return existing;
    }

    debug!(
        incoming = incoming.len(),
        matched = matched.len(),
        "replacing named entries"
    );

    let mut merged: Vec<T> = existing
        .into_iter()
        .filter(|item| !names.contains(item.name()))
        .collect();
    merged.extend(incoming.iter().cloned());
    merged
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod merge_tests;
