// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Label selector construction for operator-managed resources.
//!
//! This module builds the list/watch queries the reconcilers hand to the
//! Kubernetes API when they need "all instances of this cluster", "the pods of
//! one instance set", or "the members of this cluster's Patroni group". Every
//! query is assembled from the label key constants in [`crate::labels`], so a
//! selector can only ever match resources the operator itself labeled.
//!
//! # Architecture
//!
//! Building a [`Selector`] never fails; the constructors are plain data
//! assembly and stay composable. Validation happens once, in
//! [`Selector::as_selector`], when the selector is turned into the wire string
//! for the API server. Serialization is canonical: requirements are rendered
//! in ascending key order, so two selectors built from the same requirements
//! always produce the same query string regardless of construction order.
//!
//! # Example
//!
//! ```rust
//! use postgres_operator::selector::Selector;
//!
//! let query = Selector::cluster_instances("hippo")
//!     .as_selector()
//!     .expect("valid cluster name");
//! assert_eq!(
//!     query,
//!     "postgres-operator.crunchydata.com/cluster=hippo,\
//!      postgres-operator.crunchydata.com/instance"
//! );
//! ```

use crate::constants::{PATRONI_SCOPE_SUFFIX, ROLE_REPLICA};
use crate::crd::PostgresCluster;
use crate::labels::{LABEL_CLUSTER, LABEL_INSTANCE, LABEL_INSTANCE_SET, LABEL_PATRONI, LABEL_ROLE};
use kube::ResourceExt;
use thiserror::Error;

/// Errors that can occur when serializing a [`Selector`] to a query string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A literal used as a label value does not satisfy Kubernetes label
    /// value syntax.
    ///
    /// Returned from [`Selector::as_selector`] when an equality requirement
    /// carries a value that is empty, longer than 63 characters, or contains
    /// characters outside the permitted set. The selector itself is left
    /// intact; only its serialization is refused.
    #[error(
        "invalid label value {value:?}: must be no more than 63 characters, begin and end \
         with an alphanumeric character, and contain only alphanumeric characters, '-', '_' or '.'"
    )]
    InvalidLabelValue {
        /// The offending value
        value: String,
    },
}

/// A label key the operator stamps onto the resources it manages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LabelKey {
    /// Which `PostgresCluster` a resource belongs to
    Cluster,
    /// Which PostgreSQL instance a pod runs
    Instance,
    /// Which instance set an instance was created for
    InstanceSet,
    /// Which Patroni scope (high-availability group) a pod participates in
    Patroni,
    /// The instance's current Patroni role
    Role,
}

impl LabelKey {
    /// The domain-qualified key string from [`crate::labels`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LabelKey::Cluster => LABEL_CLUSTER,
            LabelKey::Instance => LABEL_INSTANCE,
            LabelKey::InstanceSet => LABEL_INSTANCE_SET,
            LabelKey::Patroni => LABEL_PATRONI,
            LabelKey::Role => LABEL_ROLE,
        }
    }
}

/// How a [`Requirement`] matches a label.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operator {
    /// Matches any resource carrying the key, regardless of value
    Exists,
    /// Matches only resources carrying the key with exactly this value
    Equals(String),
}

/// One key-based condition within a [`Selector`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Requirement {
    /// The label key to test
    pub key: LabelKey,
    /// The match operator (and value, for equality tests)
    pub operator: Operator,
}

impl Requirement {
    /// An existence requirement on `key`.
    #[must_use]
    pub const fn exists(key: LabelKey) -> Self {
        Requirement {
            key,
            operator: Operator::Exists,
        }
    }

    /// An equality requirement on `key`.
    #[must_use]
    pub fn equals(key: LabelKey, value: impl Into<String>) -> Self {
        Requirement {
            key,
            operator: Operator::Equals(value.into()),
        }
    }
}

/// A conjunctive label query over operator-managed resources.
///
/// Requirements are logically `ANDed`. Two selectors compare equal when they
/// hold the same set of requirements, regardless of the order they were
/// assembled in; serialization is likewise order-independent.
#[derive(Clone, Debug)]
pub struct Selector {
    requirements: Vec<Requirement>,
}

impl PartialEq for Selector {
    fn eq(&self, other: &Self) -> bool {
        let mut ours = self.requirements.clone();
        let mut theirs = other.requirements.clone();
        ours.sort();
        theirs.sort();
        ours == theirs
    }
}

impl Eq for Selector {}

impl Selector {
    /// A selector over an explicit set of requirements.
    #[must_use]
    pub fn new(requirements: Vec<Requirement>) -> Self {
        Selector { requirements }
    }

    /// Selects every resource belonging to any `PostgresCluster`.
    #[must_use]
    pub fn any_cluster() -> Self {
        Selector {
            requirements: vec![Requirement::exists(LabelKey::Cluster)],
        }
    }

    /// Selects all PostgreSQL instance pods of the named cluster.
    #[must_use]
    pub fn cluster_instances(cluster_name: &str) -> Self {
        Selector {
            requirements: vec![
                Requirement::equals(LabelKey::Cluster, cluster_name),
                Requirement::exists(LabelKey::Instance),
            ],
        }
    }

    /// Selects the instances of one instance set of the named cluster.
    #[must_use]
    pub fn cluster_instance_set(cluster_name: &str, set_name: &str) -> Self {
        Selector {
            requirements: vec![
                Requirement::equals(LabelKey::Cluster, cluster_name),
                Requirement::equals(LabelKey::InstanceSet, set_name),
            ],
        }
    }

    /// Selects the members of `cluster`'s Patroni high-availability group.
    ///
    /// The Patroni scope is the cluster name with the `-ha` suffix; Patroni
    /// stamps it onto every pod participating in the group.
    #[must_use]
    pub fn cluster_patroni(cluster: &PostgresCluster) -> Self {
        let name = cluster.name_any();
        Selector {
            requirements: vec![
                Requirement::equals(LabelKey::Cluster, name.clone()),
                Requirement::equals(LabelKey::Patroni, format!("{name}{PATRONI_SCOPE_SUFFIX}")),
            ],
        }
    }

    /// Selects the read-only (replica) instance pods of the named cluster.
    #[must_use]
    pub fn cluster_replicas(cluster_name: &str) -> Self {
        Selector {
            requirements: vec![
                Requirement::equals(LabelKey::Cluster, cluster_name),
                Requirement::exists(LabelKey::Instance),
                Requirement::equals(LabelKey::Role, ROLE_REPLICA),
            ],
        }
    }

    /// Serializes the selector into the query string for the Kubernetes API.
    ///
    /// Requirement clauses are rendered in ascending key order, each as `key`
    /// for an existence test or `key=value` for an equality test, joined by
    /// `,`. Every equality value is validated against Kubernetes label value
    /// syntax first.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidLabelValue`] if any equality
    /// requirement carries a value that is not a valid label value.
    pub fn as_selector(&self) -> Result<String, SelectorError> {
        let mut requirements: Vec<&Requirement> = self.requirements.iter().collect();
        requirements.sort_by(|a, b| a.key.as_str().cmp(b.key.as_str()));

        let mut clauses = Vec::with_capacity(requirements.len());
        for requirement in requirements {
            match &requirement.operator {
                Operator::Exists => clauses.push(requirement.key.as_str().to_string()),
                Operator::Equals(value) => {
                    if !is_valid_label_value(value) {
                        return Err(SelectorError::InvalidLabelValue {
                            value: value.clone(),
                        });
                    }
                    clauses.push(format!("{}={}", requirement.key.as_str(), value));
                }
            }
        }

        Ok(clauses.join(","))
    }
}

/// Checks a string against Kubernetes label value syntax: non-empty, at most
/// 63 characters, alphanumeric at both ends, interior characters limited to
/// alphanumerics, `-`, `_` and `.`.
fn is_valid_label_value(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.is_empty() || bytes.len() > 63 {
        return false;
    }
    if !bytes[0].is_ascii_alphanumeric() || !bytes[bytes.len() - 1].is_ascii_alphanumeric() {
        return false;
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod selector_tests;
