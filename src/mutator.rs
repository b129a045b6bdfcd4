//! AST mutation application
//!
//! This module inverts the operator at the requested sites of a freshly
//! parsed tree by replaying the collector's traversal.

use syn::visit_mut::VisitMut;
use tracing::warn;

use crate::error::{MutationError, Result};
use crate::operators::invert_bin_op;
use crate::sites::{SiteCounter, SiteId};

/// Applies operator inversions to the AST
pub struct Mutator<'t> {
    /// Sites to invert
    targets: &'t [SiteId],
    /// Replays the collector's numbering
    counter: SiteCounter,
    /// Sites inverted so far
    applied: Vec<SiteId>,
    /// First failure, reported once the traversal is done
    error: Option<MutationError>,
}

impl VisitMut for Mutator<'_> {
    fn visit_expr_binary_mut(&mut self, node: &mut syn::ExprBinary) {
        if self.error.is_some() {
            return;
        }

        syn::visit_mut::visit_expr_binary_mut(self, node);

        let Some(id) = self.counter.observe(&node.op) else {
            return;
        };
        if !self.targets.contains(&id) || self.applied.contains(&id) {
            return;
        }

        match invert_bin_op(&node.op) {
            Ok(inverse) => {
                node.op = inverse;
                self.applied.push(id);
            }
            Err(e) => self.error = Some(e),
        }
    }
}

impl Mutator<'_> {
    /// Invert the operator at each target site of `ast`
    ///
    /// The tree is consumed: it must be a fresh parse of the same program the
    /// targets were collected from. A target that never matches leaves the
    /// tree untouched at that site.
    pub fn apply(mut ast: syn::File, targets: &[SiteId]) -> Result<syn::File> {
        let mut mutator = Mutator {
            targets,
            counter: SiteCounter::default(),
            applied: Vec::new(),
            error: None,
        };

        mutator.visit_file_mut(&mut ast);

        if let Some(e) = mutator.error {
            return Err(e);
        }

        for target in targets {
            if !mutator.applied.contains(target) {
                warn!(site = %target, "site not found during mutation");
            }
        }

        Ok(ast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::generate_source;
    use crate::config::EligibilityPolicy;
    use crate::sites::collect;
    use pretty_assertions::assert_eq;
    use syn::visit::Visit;

    /// Every tracked operator in traversal order
    fn operators(ast: &syn::File) -> Vec<String> {
        struct Ops(Vec<String>);
        impl<'ast> Visit<'ast> for Ops {
            fn visit_expr_binary(&mut self, node: &'ast syn::ExprBinary) {
                syn::visit::visit_expr_binary(self, node);
                self.0.push(quote::ToTokens::to_token_stream(&node.op).to_string());
            }
        }
        let mut ops = Ops(Vec::new());
        ops.visit_file(ast);
        ops.0
    }

    const SOURCE: &str = r#"
fn main() {
    let a = 1 + 2;
    let b = (a == 3);
}
"#;

    #[test]
    fn test_apply_binary_site() {
        let ast = syn::parse_file(SOURCE).unwrap();
        let mutant = Mutator::apply(ast, &[SiteId::binary(1)]).unwrap();

        let mutated_source = generate_source(&mutant);
        assert!(mutated_source.contains("1 - 2"));
        assert!(mutated_source.contains("a == 3"));
    }

    #[test]
    fn test_apply_compare_site() {
        let ast = syn::parse_file(SOURCE).unwrap();
        let mutant = Mutator::apply(ast, &[SiteId::compare(1)]).unwrap();

        let mutated_source = generate_source(&mutant);
        assert!(mutated_source.contains("1 + 2"));
        assert!(mutated_source.contains("a != 3"));
    }

    #[test]
    fn test_exactly_one_node_changes() {
        let source = r#"
fn calc(a: i32, b: i32) -> bool {
    let x = (a + b) * (a + b) + 1;
    x == a || a + 1 == b
}
"#;
        let original = syn::parse_file(source).unwrap();
        let sites = collect(&original, &EligibilityPolicy::default());
        assert_eq!(sites.len(), 6);

        let before = operators(&original);
        for site in sites.iter() {
            let fresh = syn::parse_file(source).unwrap();
            let mutant = Mutator::apply(fresh, &[site.id]).unwrap();
            let after = operators(&mutant);

            assert_eq!(before.len(), after.len());
            let changed = before.iter().zip(&after).filter(|(b, a)| b != a).count();
            assert_eq!(changed, 1, "site {} changed {} nodes", site.id, changed);
        }
    }

    #[test]
    fn test_missing_site_leaves_tree_unchanged() {
        let original = syn::parse_file(SOURCE).unwrap();
        let fresh = syn::parse_file(SOURCE).unwrap();

        let mutant = Mutator::apply(fresh, &[SiteId::binary(7)]).unwrap();
        assert_eq!(generate_source(&mutant), generate_source(&original));
    }

    #[test]
    fn test_multiple_sites() {
        let ast = syn::parse_file(SOURCE).unwrap();
        let mutant = Mutator::apply(ast, &[SiteId::binary(1), SiteId::compare(1)]).unwrap();

        let mutated_source = generate_source(&mutant);
        assert!(mutated_source.contains("1 - 2"));
        assert!(mutated_source.contains("a != 3"));
    }

    #[test]
    fn test_unsupported_operator_fails() {
        let source = r#"
fn rem(a: i32, b: i32) -> i32 {
    a % b
}
"#;
        let ast = syn::parse_file(source).unwrap();
        let result = Mutator::apply(ast, &[SiteId::binary(1)]);
        assert!(matches!(result, Err(MutationError::UnsupportedOperator { .. })));
    }

    #[test]
    fn test_inverting_twice_restores_source() {
        let original = syn::parse_file(SOURCE).unwrap();
        let once = Mutator::apply(original.clone(), &[SiteId::binary(1)]).unwrap();
        let twice = Mutator::apply(once, &[SiteId::binary(1)]).unwrap();

        assert_eq!(generate_source(&twice), generate_source(&original));
    }
}
