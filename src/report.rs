//! Report generation for mutant generation runs
//!
//! This module formats and displays what a run produced.

use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::generator::Generation;
use crate::sites::{EligibleSites, Site};

/// A mutant together with the file it was written to
#[derive(Debug)]
pub struct WrittenMutant {
    pub index: usize,
    pub path: PathBuf,
    pub sites: Vec<Site>,
}

/// Summary report of a generation run
#[derive(Debug)]
pub struct GenerationReport {
    pub source_file: PathBuf,
    pub seed: u64,
    pub requested: usize,
    pub eligible: usize,
    pub mutants: Vec<WrittenMutant>,
}

impl GenerationReport {
    /// Create a new report from a run and the paths its mutants were written to
    pub fn new(
        source_file: &Path,
        seed: u64,
        requested: usize,
        generation: &Generation,
        paths: Vec<PathBuf>,
    ) -> Self {
        let mutants = generation
            .mutants
            .iter()
            .zip(paths)
            .map(|(mutant, path)| WrittenMutant {
                index: mutant.index,
                path,
                sites: mutant.sites.clone(),
            })
            .collect();

        Self {
            source_file: source_file.to_path_buf(),
            seed,
            requested,
            eligible: generation.eligible.len(),
            mutants,
        }
    }

    /// Number of mutants generated
    pub fn generated(&self) -> usize {
        self.mutants.len()
    }

    /// Whether fewer mutants were produced than requested
    pub fn capped(&self) -> bool {
        self.generated() < self.requested
    }

    /// Print the report to stdout
    pub fn print(&self) {
        println!();
        println!("{}", "Mutant Generation Report".bold());
        println!("{}", "=".repeat(60));
        println!();

        for mutant in &self.mutants {
            println!(
                "{} {}",
                format!("[MUTANT {}]", mutant.index).green().bold(),
                mutant.path.display()
            );
            for site in &mutant.sites {
                println!("        {}", describe_site(&self.source_file, site));
            }
        }

        // Print summary
        println!();
        println!("{}", "Summary".bold());
        println!("{}", "-".repeat(40));
        println!("Source:            {}", self.source_file.display());
        println!("Eligible sites:    {}", self.eligible);
        println!("Requested:         {}", self.requested);
        println!("Generated:         {}", self.generated());
        println!("Seed:              {}", self.seed);

        if self.eligible == 0 {
            println!();
            println!("{}", "No eligible sites; nothing to mutate".yellow());
        } else if self.capped() {
            println!();
            println!(
                "{}",
                format!("Capped at {} eligible site(s)", self.eligible).dimmed()
            );
        }
    }
}

/// Print every eligible site of a program
pub fn print_sites(source_file: &Path, sites: &EligibleSites) {
    println!();
    println!("{}", "Eligible Sites".bold());
    println!("{}", "-".repeat(40));

    if sites.is_empty() {
        println!("{}", "none".dimmed());
        return;
    }

    for site in sites.iter() {
        println!("  • {}", describe_site(source_file, site));
    }
    println!();
    println!("{} site(s)", sites.len());
}

/// One-line description: `binary#1 src/main.rs:2:15  1 + 2  (+ -> -)`
pub fn describe_site(source_file: &Path, site: &Site) -> String {
    let location = format!("{}:{}:{}", source_file.display(), site.line, site.column);
    format!(
        "{} {}  {}  ({} -> {})",
        site.id.to_string().cyan(),
        location.dimmed(),
        site.snippet,
        site.operator,
        site.operator.inverse()
    )
}
