// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Custom Resource Definition for managed PostgreSQL clusters.
//!
//! This module defines the `PostgresCluster` resource, the declarative
//! description of a PostgreSQL cluster the operator converges toward. The
//! reconcilers read this spec, derive the per-instance pod specifications
//! (composing volumes and mounts through [`crate::merge`]), and identify the
//! resulting child resources with selectors from [`crate::selector`].
//!
//! # Example
//!
//! ```rust
//! use postgres_operator::crd::{PostgresClusterSpec, PostgresInstanceSetSpec};
//!
//! let spec = PostgresClusterSpec {
//!     postgres_version: 16,
//!     image: Some("registry.example.com/postgres:16".to_string()),
//!     instance_sets: vec![PostgresInstanceSetSpec {
//!         name: "instance1".to_string(),
//!         replicas: Some(3),
//!         volumes: None,
//!         volume_mounts: None,
//!     }],
//! };
//! ```

use k8s_openapi::api::core::v1::{Volume, VolumeMount};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Condition represents an observation of a resource's current state.
///
/// Conditions are used in status subresources to communicate the state of
/// a resource to users and controllers.
#[derive(Clone, Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Condition {
    /// Type of condition. Common types include: Ready, Available, Progressing, Degraded, Failed.
    pub r#type: String,

    /// Status of the condition: True, False, or Unknown.
    pub status: String,

    /// Brief CamelCase reason for the condition's last transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Human-readable message indicating details about the transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Last time the condition transitioned from one status to another (RFC3339 format).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
}

/// One group of PostgreSQL instances sharing a pod specification.
///
/// A cluster may define several instance sets (for example, one per
/// availability zone or storage class). The set name is what the
/// `instance-set` label and its selector carry.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostgresInstanceSetSpec {
    /// Name of the instance set, unique within the cluster.
    ///
    /// Used verbatim as the value of the instance-set label, so it must be a
    /// valid Kubernetes label value.
    pub name: String,

    /// Number of PostgreSQL instances in this set. Defaults to 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,

    /// Additional volumes to project into every instance pod of this set.
    ///
    /// Merged by name into the pod's volume list; an entry with the same name
    /// as an operator-managed volume replaces it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<Volume>>,

    /// Additional volume mounts for the database container of this set.
    ///
    /// Merged by name into the container's mount list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_mounts: Option<Vec<VolumeMount>>,
}

#[derive(CustomResource, Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "postgres-operator.crunchydata.com",
    version = "v1alpha1",
    kind = "PostgresCluster",
    namespaced,
    doc = "PostgresCluster is the declarative description of a PostgreSQL cluster managed by the operator, including its instance sets and the Patroni high-availability group formed from them."
)]
#[kube(status = "PostgresClusterStatus")]
#[serde(rename_all = "camelCase")]
pub struct PostgresClusterSpec {
    /// Major PostgreSQL version to run (e.g. 16).
    pub postgres_version: i32,

    /// Container image for PostgreSQL instances.
    ///
    /// When unset, the operator default for `postgresVersion` is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Groups of PostgreSQL instances that make up the cluster.
    pub instance_sets: Vec<PostgresInstanceSetSpec>,
}

/// `PostgresCluster` status
#[derive(Clone, Debug, Serialize, Deserialize, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostgresClusterStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
    /// Number of instance pods currently labeled with the replica role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
}
