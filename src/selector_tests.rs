// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `selector.rs`

use crate::crd::{PostgresCluster, PostgresClusterSpec};
use crate::selector::{LabelKey, Requirement, Selector, SelectorError};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

fn create_test_cluster(name: &str) -> PostgresCluster {
    PostgresCluster {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some("postgres-system".to_string()),
            ..Default::default()
        },
        spec: PostgresClusterSpec {
            postgres_version: 16,
            image: None,
            instance_sets: vec![],
        },
        status: None,
    }
}

#[test]
fn test_any_cluster() {
    let query = Selector::any_cluster().as_selector().unwrap();
    assert_eq!(query, "postgres-operator.crunchydata.com/cluster");
}

#[test]
fn test_cluster_instances() {
    let query = Selector::cluster_instances("something").as_selector().unwrap();
    assert_eq!(
        query,
        [
            "postgres-operator.crunchydata.com/cluster=something",
            "postgres-operator.crunchydata.com/instance",
        ]
        .join(",")
    );

    let err = Selector::cluster_instances("--whoa/yikes")
        .as_selector()
        .unwrap_err();
    assert!(err.to_string().contains("invalid"));
    assert!(err.to_string().contains("--whoa/yikes"));
}

#[test]
fn test_cluster_instance_set() {
    let query = Selector::cluster_instance_set("something", "also")
        .as_selector()
        .unwrap();
    assert_eq!(
        query,
        [
            "postgres-operator.crunchydata.com/cluster=something",
            "postgres-operator.crunchydata.com/instance-set=also",
        ]
        .join(",")
    );

    let err = Selector::cluster_instance_set("--whoa/yikes", "ok")
        .as_selector()
        .unwrap_err();
    assert!(err.to_string().contains("invalid"));
}

#[test]
fn test_cluster_patroni() {
    let cluster = create_test_cluster("something");
    let query = Selector::cluster_patroni(&cluster).as_selector().unwrap();
    assert_eq!(
        query,
        [
            "postgres-operator.crunchydata.com/cluster=something",
            "postgres-operator.crunchydata.com/patroni=something-ha",
        ]
        .join(",")
    );

    let cluster = create_test_cluster("--nope--");
    let err = Selector::cluster_patroni(&cluster)
        .as_selector()
        .unwrap_err();
    assert!(err.to_string().contains("invalid"));
}

#[test]
fn test_cluster_replicas() {
    let query = Selector::cluster_replicas("something").as_selector().unwrap();
    assert_eq!(
        query,
        [
            "postgres-operator.crunchydata.com/cluster=something",
            "postgres-operator.crunchydata.com/instance",
            "postgres-operator.crunchydata.com/role=replica",
        ]
        .join(",")
    );
}

#[test]
fn test_construction_never_fails_validation_does() {
    // Building a selector from a bad name succeeds; only serialization is refused.
    let selector = Selector::cluster_instances("");
    assert_eq!(
        selector.as_selector(),
        Err(SelectorError::InvalidLabelValue {
            value: String::new()
        })
    );
}

#[test]
fn test_label_value_boundaries() {
    let longest = "a".repeat(63);
    assert!(Selector::cluster_instances(&longest).as_selector().is_ok());

    let too_long = "a".repeat(64);
    assert!(Selector::cluster_instances(&too_long).as_selector().is_err());

    // Interior punctuation is fine, terminal punctuation is not.
    assert!(Selector::cluster_instances("a-b_c.d").as_selector().is_ok());
    assert!(Selector::cluster_instances("a-b-").as_selector().is_err());
    assert!(Selector::cluster_instances("-a-b").as_selector().is_err());
}

#[test]
fn test_selector_equality_ignores_requirement_order() {
    let forward = Selector::new(vec![
        Requirement::equals(LabelKey::Cluster, "something"),
        Requirement::exists(LabelKey::Instance),
    ]);
    let reversed = Selector::new(vec![
        Requirement::exists(LabelKey::Instance),
        Requirement::equals(LabelKey::Cluster, "something"),
    ]);

    assert_eq!(forward, reversed);
    assert_eq!(forward, Selector::cluster_instances("something"));
    assert_ne!(
        Selector::cluster_instances("a"),
        Selector::cluster_instances("b")
    );

    // The canonical serialization is identical either way.
    assert_eq!(
        forward.as_selector().unwrap(),
        reversed.as_selector().unwrap()
    );
}
