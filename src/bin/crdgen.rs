// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! CRD YAML Generator
//!
//! Generates the Kubernetes CRD YAML file from the Rust types in src/crd.rs.
//! This ensures the YAML in deploy/crds/ is always in sync with the Rust code.
//!
//! Usage:
//!   cargo run --bin crdgen

use kube::CustomResourceExt;
use postgres_operator::crd::PostgresCluster;
use std::fs;
use std::path::Path;

const COPYRIGHT_HEADER: &str = "# Copyright (c) 2025 Erick Bourgeois, firestoned
# SPDX-License-Identifier: MIT
#
# This file is AUTO-GENERATED from src/crd.rs
# DO NOT EDIT MANUALLY - Run `cargo run --bin crdgen` to regenerate
#
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = Path::new("deploy/crds");
    fs::create_dir_all(output_dir)?;

    println!("Generating CRD YAML from src/crd.rs...");

    let crd = PostgresCluster::crd();
    let yaml = serde_yaml::to_string(&crd)?;

    let output_path = output_dir.join("postgresclusters.crd.yaml");
    fs::write(&output_path, format!("{COPYRIGHT_HEADER}{yaml}"))?;

    println!("✓ Wrote {}", output_path.display());
    println!("\nDeploy with: kubectl apply -f deploy/crds/");

    Ok(())
}
