//! Feature matrix test runner
//!
//! This module provides the `test-matrix` subcommand, which runs
//! `cargo test` once per supported feature combination of the library.
//! Rows marked `docs` also run `cargo doc` with warnings denied, which
//! catches doc links to items a feature set compiles out.

use anyhow::{Context, Result, bail};
use clap::Args;
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Arguments for the test-matrix subcommand
#[derive(Args, Debug)]
pub struct TestMatrixArgs {
    /// Run only the named combination (e.g. `fxhash`, `loom`)
    #[arg(long)]
    pub only: Option<String>,

    /// Print the cargo invocations without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Stop at the first failing combination
    #[arg(long)]
    pub fail_fast: bool,
}

/// One row of the matrix
struct Combination {
    name: &'static str,
    no_default_features: bool,
    features: &'static [&'static str],
    /// Restrict to specific test targets; empty means every target
    tests: &'static [&'static str],
    release: bool,
    /// Also build the API docs with warnings denied
    docs: bool,
}

const MATRIX: &[Combination] = &[
    Combination {
        name: "default",
        no_default_features: false,
        features: &[],
        tests: &[],
        release: false,
        docs: true,
    },
    Combination {
        name: "minimal",
        no_default_features: true,
        features: &[],
        tests: &[],
        release: false,
        docs: true,
    },
    Combination {
        name: "fxhash",
        no_default_features: false,
        features: &["fxhash"],
        tests: &[],
        release: false,
        docs: false,
    },
    Combination {
        name: "ahash",
        no_default_features: false,
        features: &["ahash"],
        tests: &[],
        release: false,
        docs: false,
    },
    Combination {
        name: "full",
        no_default_features: false,
        features: &["full", "fxhash", "ahash"],
        tests: &[],
        release: false,
        docs: true,
    },
    Combination {
        name: "loom",
        no_default_features: false,
        features: &["loom"],
        tests: &["concurrent_set_loom_tests"],
        release: true,
        docs: false,
    },
];

impl Combination {
    fn cargo_args(&self) -> Vec<String> {
        let mut args = vec!["test".to_string(), "-p".to_string(), "setkit".to_string()];
        if self.release {
            args.push("--release".to_string());
        }
        if self.no_default_features {
            args.push("--no-default-features".to_string());
        }
        if !self.features.is_empty() {
            args.push("--features".to_string());
            args.push(self.features.join(","));
        }
        for test in self.tests {
            args.push("--test".to_string());
            args.push((*test).to_string());
        }
        args
    }

    fn doc_args(&self) -> Vec<String> {
        let mut args = vec![
            "doc".to_string(),
            "-p".to_string(),
            "setkit".to_string(),
            "--no-deps".to_string(),
        ];
        if self.no_default_features {
            args.push("--no-default-features".to_string());
        }
        if !self.features.is_empty() {
            args.push("--features".to_string());
            args.push(self.features.join(","));
        }
        args
    }
}

/// Run the matrix
pub fn run(args: &TestMatrixArgs) -> Result<()> {
    let root = project_root()?;
    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());

    let selected: Vec<&Combination> = MATRIX
        .iter()
        .filter(|combination| {
            args.only
                .as_deref()
                .is_none_or(|only| combination.name == only)
        })
        .collect();

    if selected.is_empty() {
        let names: Vec<&str> = MATRIX.iter().map(|combination| combination.name).collect();
        bail!(
            "Unknown combination '{}'. Available: {}",
            args.only.as_deref().unwrap_or_default(),
            names.join(", ")
        );
    }

    let mut failures = Vec::new();
    for combination in selected {
        let cargo_args = combination.cargo_args();
        println!("==> [{}] {} {}", combination.name, cargo, cargo_args.join(" "));
        let doc_args = combination.docs.then(|| combination.doc_args());
        if let Some(doc_args) = &doc_args {
            println!(
                "==> [{}] RUSTDOCFLAGS=\"-D warnings\" {} {}",
                combination.name,
                cargo,
                doc_args.join(" ")
            );
        }

        if args.dry_run {
            continue;
        }

        let mut passed = run_cargo(&cargo, &cargo_args, &root, &[])?;
        if passed && let Some(doc_args) = &doc_args {
            passed = run_cargo(&cargo, doc_args, &root, &[("RUSTDOCFLAGS", "-D warnings")])?;
        }

        if !passed {
            eprintln!("  [{}] failed", combination.name);
            failures.push(combination.name);
            if args.fail_fast {
                break;
            }
        }
    }

    if !failures.is_empty() {
        bail!("Failing combinations: {}", failures.join(", "));
    }

    println!("All combinations passed");
    Ok(())
}

fn run_cargo(
    cargo: &str,
    cargo_args: &[String],
    root: &Path,
    envs: &[(&str, &str)],
) -> Result<bool> {
    let status = Command::new(cargo)
        .args(cargo_args)
        .envs(envs.iter().copied())
        .current_dir(root)
        .status()
        .with_context(|| format!("Failed to run {cargo}"))?;
    Ok(status.success())
}

fn project_root() -> Result<PathBuf> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    // xtask is in project_root/xtask, so go up one level
    let root = if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .context("xtask manifest directory has no parent")?
    } else {
        manifest_dir
    };

    Ok(root)
}
