//! Code generation from AST
//!
//! This module turns mutant trees back into source code and writes them out.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{MutationError, Result};
use crate::generator::Mutant;

/// Generate source code from AST
pub fn generate_source(ast: &syn::File) -> String {
    prettyplease::unparse(ast)
}

/// Path a mutant is written to: `<dir>/<index>.<extension>`
pub fn mutant_path(output_dir: &Path, index: usize, extension: &str) -> PathBuf {
    output_dir.join(format!("{}.{}", index, extension))
}

/// Write each mutant to its own file, overwriting existing ones
pub fn write_mutants(
    mutants: &[Mutant],
    output_dir: &Path,
    extension: &str,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir).map_err(|e| MutationError::WriteError {
        file: output_dir.to_path_buf(),
        error: e.to_string(),
    })?;

    let mut written = Vec::with_capacity(mutants.len());
    for mutant in mutants {
        let path = mutant_path(output_dir, mutant.index, extension);
        std::fs::write(&path, mutant.source()).map_err(|e| MutationError::WriteError {
            file: path.clone(),
            error: e.to_string(),
        })?;
        info!(path = %path.display(), "wrote mutant");
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::generator::{generate, Program};

    const SOURCE: &str = r#"
fn main() {
    let a = 1 + 2;
    let b = (a == 3);
}
"#;

    #[test]
    fn test_generate_source() {
        let ast = syn::parse_file("fn add(a: i32, b: i32) -> i32 { a + b }").unwrap();
        let source = generate_source(&ast);
        assert!(source.contains("fn add(a: i32, b: i32) -> i32"));
        assert!(source.contains("a + b"));
    }

    #[test]
    fn test_mutant_path() {
        assert_eq!(
            mutant_path(Path::new("out"), 3, "rs"),
            PathBuf::from("out").join("3.rs")
        );
    }

    #[test]
    fn test_write_mutants() {
        let dir = tempfile::tempdir().unwrap();
        let program = Program::from_source("main.rs", SOURCE);
        let generation = generate(&program, 5, &Config::default()).unwrap();

        let written = write_mutants(&generation.mutants, dir.path(), "rs").unwrap();
        assert_eq!(written, vec![dir.path().join("0.rs"), dir.path().join("1.rs")]);

        for (path, mutant) in written.iter().zip(&generation.mutants) {
            let content = std::fs::read_to_string(path).unwrap();
            assert_eq!(content, mutant.source());
        }
    }

    #[test]
    fn test_write_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("0.rs"), "stale").unwrap();

        let program = Program::from_source("main.rs", SOURCE);
        let generation = generate(&program, 1, &Config::default()).unwrap();
        write_mutants(&generation.mutants, dir.path(), "rs").unwrap();

        let content = std::fs::read_to_string(dir.path().join("0.rs")).unwrap();
        assert_ne!(content, "stale");
        assert!(content.contains("fn main()"));
    }

    #[test]
    fn test_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("mutants").join("run");

        let program = Program::from_source("main.rs", SOURCE);
        let generation = generate(&program, 1, &Config::default()).unwrap();
        let written = write_mutants(&generation.mutants, &nested, "txt").unwrap();

        assert_eq!(written, vec![nested.join("0.txt")]);
        assert!(written[0].exists());
    }
}
