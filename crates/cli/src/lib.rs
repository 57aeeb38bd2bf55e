//! `trobust` CLI -- check and optimize isolation-level allocations for
//! transaction templates.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub mod error;

use error::Error;
use trobust_core::{Allocation, IsolationLevel, TemplateSet, Witness};

/// The concrete, JSON-facing instantiation of the generic core types: every
/// template/variable/relation/attribute identifier is a `String`.
pub type CliTemplateSet = TemplateSet<String, String, String, String>;
pub type CliAllocation = Allocation<String>;
pub type CliWitness = Witness<String, String, String, String>;

/// Check `template_set`'s robustness under a uniform allocation at `level`.
///
/// This is the logic behind the `check` subcommand, factored out of
/// `main.rs` so it can be exercised directly in tests without spawning the
/// binary.
///
/// # Errors
///
/// Propagates any [`trobust_core::Error`] raised by [`trobust_core::is_robust`].
pub fn check(template_set: &CliTemplateSet, level: IsolationLevel) -> Result<(bool, Option<CliWitness>), Error> {
    let alloc = Allocation::uniform(template_set, level);
    Ok(trobust_core::is_robust(template_set, &alloc)?)
}

/// Find the weakest robust allocation for `template_set`.
///
/// This is the logic behind the `optimize` subcommand, factored out of
/// `main.rs` so it can be exercised directly in tests without spawning the
/// binary.
///
/// # Errors
///
/// Propagates any [`trobust_core::Error`] raised by [`trobust_core::optimal_alloc`].
pub fn optimize(template_set: &CliTemplateSet) -> Result<CliAllocation, Error> {
    Ok(trobust_core::optimal_alloc(template_set)?)
}

#[derive(Debug, Parser)]
#[command(name = "trobust", about = "Static robustness analysis for mixed-isolation transaction templates")]
pub struct App {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check whether a template set is robust under an allocation
    Check(CheckArgs),
    /// Find the weakest robust allocation for a template set
    Optimize(OptimizeArgs),
    /// Print the JSON Schema for the template-set input format to stdout
    Schema,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Input file containing a JSON-encoded template set
    #[arg(long)]
    pub input: PathBuf,
    /// Isolation level applied uniformly to every template
    #[arg(long, default_value = "serializable")]
    pub allocation: IsolationLevelArg,
    /// Output the witness (if any) as JSON instead of a human-readable summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct OptimizeArgs {
    /// Input file containing a JSON-encoded template set
    #[arg(long)]
    pub input: PathBuf,
    /// Output the resulting allocation as JSON instead of a human-readable summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum IsolationLevelArg {
    ReadCommitted,
    SnapshotIsolation,
    Serializable,
}

impl From<IsolationLevelArg> for IsolationLevel {
    fn from(level: IsolationLevelArg) -> Self {
        match level {
            IsolationLevelArg::ReadCommitted => Self::ReadCommitted,
            IsolationLevelArg::SnapshotIsolation => Self::SnapshotIsolation,
            IsolationLevelArg::Serializable => Self::Serializable,
        }
    }
}
