//! Operator-Inversion Mutant Generator for Rust
//!
//! This library produces mutants of a Rust source file for mutation testing.
//! Binary and comparison expressions are numbered by a deterministic AST
//! traversal, a seeded shuffle picks which of the eligible ones to mutate,
//! and each mutant is built from a fresh parse with exactly one operator
//! inverted (`+` becomes `-`, `==` becomes `!=`, `<` becomes `>=`, ...).
//!
//! # Example Configuration
//!
//! ```yaml
//! version: "1.0"
//! settings:
//!   seed: 2873465893
//!   output_dir: mutants
//!   sites_per_mutant: 1
//!
//! eligibility:
//!   binary: [add]
//!   compare: [equal]
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use mutant_generator::{generate, write_mutants, Config, Program};
//! use std::path::Path;
//!
//! let config = Config::default();
//! let program = Program::read(Path::new("src/main.rs")).unwrap();
//! let generation = generate(&program, 5, &config).unwrap();
//! write_mutants(&generation.mutants, Path::new("mutants"), "rs").unwrap();
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod generator;
pub mod mutator;
pub mod operators;
pub mod report;
pub mod sites;

// Re-export main types at crate root
pub use codegen::{generate_source, write_mutants};
pub use config::{Config, EligibilityPolicy, Settings};
pub use error::{MutationError, Result};
pub use generator::{generate, select_sites, Generation, Mutant, Program};
pub use mutator::Mutator;
pub use operators::{Operator, OperatorFamily};
pub use report::{print_sites, GenerationReport};
pub use sites::{collect, EligibleSites, Site, SiteId, SiteKind};
