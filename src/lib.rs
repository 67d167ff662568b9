// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # PostgreSQL Operator Core
//!
//! Core library for a Kubernetes operator that manages PostgreSQL clusters
//! with Patroni-based high availability.
//!
//! ## Overview
//!
//! This crate holds the pure, I/O-free pieces the reconcilers are built on:
//!
//! - The `PostgresCluster` Custom Resource Definition
//! - Label selector construction for finding operator-managed resources
//! - Name-keyed, idempotent merging of pod sub-resource lists
//!
//! The reconciliation loops, API clients, and cluster orchestration live in
//! the operator binaries; everything here is synchronous data transformation
//! that can be tested without a cluster.
//!
//! ## Modules
//!
//! - [`crd`] - Custom Resource Definition types for PostgreSQL clusters
//! - [`labels`] - Domain-qualified label key constants
//! - [`selector`] - Label selector construction and serialization
//! - [`merge`] - Idempotent merging of containers, volumes, and mounts
//! - [`constants`] - API group and well-known value constants
//!
//! ## Example
//!
//! ```rust
//! use postgres_operator::selector::Selector;
//!
//! // Query for every replica pod of one cluster.
//! let query = Selector::cluster_replicas("hippo")
//!     .as_selector()
//!     .expect("valid cluster name");
//! ```

pub mod constants;
pub mod crd;
pub mod labels;
pub mod merge;
pub mod selector;
