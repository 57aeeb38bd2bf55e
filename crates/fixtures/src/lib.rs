//! Fixture generation for robustness tests and tooling: a transcription of
//! the SmallBank benchmark's templates ([`smallbank`]) and a random
//! [`TemplateSet`](trobust_core::TemplateSet)/
//! [`Allocation`](trobust_core::Allocation) generator ([`generator`]) for
//! property-style coverage beyond any single fixed benchmark.

pub mod generator;
pub mod smallbank;

pub use generator::{generate_allocation, generate_many_template_sets, generate_template_set, GenParams};
