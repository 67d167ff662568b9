// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the PostgreSQL operator core.
//!
//! This module contains the string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// API Constants
// ============================================================================

/// API group for all operator CRDs
pub const API_GROUP: &str = "postgres-operator.crunchydata.com";

/// API version for all operator CRDs
pub const API_VERSION: &str = "v1alpha1";

/// Fully qualified API version (group/version)
pub const API_GROUP_VERSION: &str = "postgres-operator.crunchydata.com/v1alpha1";

/// Kind name for the `PostgresCluster` resource
pub const KIND_POSTGRES_CLUSTER: &str = "PostgresCluster";

// ============================================================================
// Patroni Constants
// ============================================================================

/// Suffix appended to the cluster name to form the Patroni scope, the
/// identifier Patroni uses for one high-availability group
pub const PATRONI_SCOPE_SUFFIX: &str = "-ha";

// ============================================================================
// Role Values
// ============================================================================

/// Role value Patroni assigns to the instance currently accepting writes
pub const ROLE_PRIMARY: &str = "master";

/// Role value Patroni assigns to read-only instances
pub const ROLE_REPLICA: &str = "replica";
