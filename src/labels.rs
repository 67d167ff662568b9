// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Domain-qualified label keys applied to every resource the operator manages.
//!
//! These labels are how the operator finds its own objects again: each child
//! resource (pod, stateful set, config map, ...) carries the subset of these
//! keys that identifies which cluster, instance set, and role it belongs to,
//! and [`crate::selector`] builds list/watch queries from the same constants.
//! Keeping keys and selectors on one set of constants is what guarantees the
//! controller never lists resources it did not label.

// ============================================================================
// Label Keys
// ============================================================================

/// Prefix shared by every operator label key
pub const LABEL_PREFIX: &str = "postgres-operator.crunchydata.com/";

/// Label holding the name of the `PostgresCluster` a resource belongs to
pub const LABEL_CLUSTER: &str = "postgres-operator.crunchydata.com/cluster";

/// Label present on every PostgreSQL instance pod; its value is the
/// instance name
pub const LABEL_INSTANCE: &str = "postgres-operator.crunchydata.com/instance";

/// Label holding the name of the instance set an instance was created for
pub const LABEL_INSTANCE_SET: &str = "postgres-operator.crunchydata.com/instance-set";

/// Label Patroni sets to the scope of the high-availability group it manages
pub const LABEL_PATRONI: &str = "postgres-operator.crunchydata.com/patroni";

/// Label Patroni sets to an instance's current role ("master" or "replica")
pub const LABEL_ROLE: &str = "postgres-operator.crunchydata.com/role";
