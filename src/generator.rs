//! Mutant generation
//!
//! Coordinates a run:
//! - Parses the program once and collects its eligible sites
//! - Shuffles the sites with a seeded RNG and keeps the requested number
//! - Re-parses the program for every mutant and inverts the chosen site(s)

use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::codegen::generate_source;
use crate::config::{Config, Settings};
use crate::error::{MutationError, Result};
use crate::mutator::Mutator;
use crate::sites::{collect, EligibleSites, Site, SiteId};

/// Source text of a program together with where it came from
#[derive(Debug, Clone)]
pub struct Program {
    pub path: PathBuf,
    pub text: String,
}

impl Program {
    /// Read a program from disk
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| MutationError::FileReadError {
            file: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    pub fn from_source(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Parse the program into a brand-new tree
    pub fn parse(&self) -> Result<syn::File> {
        syn::parse_file(&self.text).map_err(|e| MutationError::ParseError {
            file: self.path.clone(),
            error: e.to_string(),
        })
    }
}

/// A program variant with the operator at one or more sites inverted
#[derive(Debug, Clone)]
pub struct Mutant {
    /// Position in the output sequence
    pub index: usize,
    /// Sites inverted in this mutant
    pub sites: Vec<Site>,
    pub ast: syn::File,
}

impl Mutant {
    /// Render the mutant back to source code
    pub fn source(&self) -> String {
        generate_source(&self.ast)
    }
}

/// Outcome of a generation run
#[derive(Debug)]
pub struct Generation {
    /// Every eligible site of the program, in traversal order
    pub eligible: EligibleSites,
    /// Mutants in selection order
    pub mutants: Vec<Mutant>,
}

/// Choose which sites to mutate, grouped per mutant
///
/// The eligible sites are shuffled with a ChaCha8 stream seeded from
/// `settings.seed`; the first `requested * sites_per_mutant` of them (capped
/// at the number of sites) are split into consecutive groups.
pub fn select_sites(sites: &EligibleSites, requested: usize, settings: &Settings) -> Vec<Vec<Site>> {
    let mut shuffled = sites.sites.clone();
    let mut rng = ChaCha8Rng::seed_from_u64(settings.seed);
    shuffled.shuffle(&mut rng);

    let per_mutant = settings.sites_per_mutant.max(1);
    let take = requested.saturating_mul(per_mutant).min(shuffled.len());
    shuffled.truncate(take);

    shuffled.chunks(per_mutant).map(<[Site]>::to_vec).collect()
}

/// Generate up to `requested` mutants of `program`
///
/// Asking for more mutants than there are sites is not an error; the result
/// is simply capped.
pub fn generate(program: &Program, requested: usize, config: &Config) -> Result<Generation> {
    let ast = program.parse()?;
    let eligible = collect(&ast, &config.eligibility);
    drop(ast);

    info!(
        file = %program.path.display(),
        sites = ?eligible.ids().iter().map(ToString::to_string).collect::<Vec<_>>(),
        "eligible sites"
    );

    let selection = select_sites(&eligible, requested, &config.settings);
    debug!(requested, selected = selection.len(), "selected sites");

    let mut mutants = Vec::with_capacity(selection.len());
    for (index, sites) in selection.into_iter().enumerate() {
        // Start from a fresh tree for every mutant
        let fresh = program.parse()?;
        let targets: Vec<SiteId> = sites.iter().map(|site| site.id).collect();
        let ast = Mutator::apply(fresh, &targets)?;

        mutants.push(Mutant { index, sites, ast });
    }

    Ok(Generation { eligible, mutants })
}
