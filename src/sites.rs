//! Mutation site collection
//!
//! Sites are identified by replaying a fixed traversal: every binary
//! expression of a tracked kind bumps that kind's counter after its operands
//! have been visited, and the counter value becomes the node's ordinal. The
//! mutator runs the exact same [`SiteCounter`] over a fresh tree, so an
//! ordinal found here points at the same node there.

use std::fmt;

use quote::ToTokens;
use syn::spanned::Spanned;
use syn::visit::Visit;
use syn::BinOp;
use tracing::debug;

use crate::config::EligibilityPolicy;
use crate::operators::Operator;

/// The kind of node a site counter tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteKind {
    /// Arithmetic and bitwise operators (`+`, `%`, `<<`, ...)
    Binary,
    /// Comparison operators (`==`, `<`, ...)
    Compare,
}

impl SiteKind {
    /// Which counter, if any, a binary expression with this operator bumps.
    ///
    /// Short-circuit operators and compound assignments are not tracked.
    pub fn classify(op: &BinOp) -> Option<SiteKind> {
        match op {
            BinOp::Add(_)
            | BinOp::Sub(_)
            | BinOp::Mul(_)
            | BinOp::Div(_)
            | BinOp::Rem(_)
            | BinOp::BitXor(_)
            | BinOp::BitAnd(_)
            | BinOp::BitOr(_)
            | BinOp::Shl(_)
            | BinOp::Shr(_) => Some(SiteKind::Binary),
            BinOp::Eq(_)
            | BinOp::Ne(_)
            | BinOp::Lt(_)
            | BinOp::Le(_)
            | BinOp::Gt(_)
            | BinOp::Ge(_) => Some(SiteKind::Compare),
            _ => None,
        }
    }
}

/// Identifier of a site: its kind plus that kind's counter value (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SiteId {
    pub kind: SiteKind,
    pub ordinal: usize,
}

impl SiteId {
    pub fn binary(ordinal: usize) -> Self {
        Self {
            kind: SiteKind::Binary,
            ordinal,
        }
    }

    pub fn compare(ordinal: usize) -> Self {
        Self {
            kind: SiteKind::Compare,
            ordinal,
        }
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SiteKind::Binary => write!(f, "binary#{}", self.ordinal),
            SiteKind::Compare => write!(f, "compare#{}", self.ordinal),
        }
    }
}

/// An eligible site found during collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub id: SiteId,
    /// Operator at the site before mutation
    pub operator: Operator,
    /// Line number of the operator (1-indexed)
    pub line: usize,
    /// Column number of the operator (1-indexed)
    pub column: usize,
    /// The whole expression as written
    pub snippet: String,
}

/// Per-kind traversal counters shared by collection and application
#[derive(Debug, Default)]
pub struct SiteCounter {
    binary: usize,
    compare: usize,
}

impl SiteCounter {
    /// Count a visited operator, returning its id if the node is tracked
    pub fn observe(&mut self, op: &BinOp) -> Option<SiteId> {
        let kind = SiteKind::classify(op)?;
        let counter = match kind {
            SiteKind::Binary => &mut self.binary,
            SiteKind::Compare => &mut self.compare,
        };
        *counter += 1;
        Some(SiteId {
            kind,
            ordinal: *counter,
        })
    }
}

/// Ordered eligible sites from one collection pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EligibleSites {
    pub sites: Vec<Site>,
}

impl EligibleSites {
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Site> {
        self.sites.iter()
    }

    pub fn ids(&self) -> Vec<SiteId> {
        self.sites.iter().map(|site| site.id).collect()
    }
}

/// Collect all eligible mutation sites of a parsed file
pub fn collect(ast: &syn::File, policy: &EligibilityPolicy) -> EligibleSites {
    let mut collector = SiteCollector {
        policy,
        counter: SiteCounter::default(),
        sites: Vec::new(),
    };

    collector.visit_file(ast);
    EligibleSites {
        sites: collector.sites,
    }
}

struct SiteCollector<'p> {
    policy: &'p EligibilityPolicy,
    counter: SiteCounter,
    sites: Vec<Site>,
}

impl<'ast> Visit<'ast> for SiteCollector<'_> {
    fn visit_expr_binary(&mut self, node: &'ast syn::ExprBinary) {
        // Operands first: ordinals are assigned in post-order
        syn::visit::visit_expr_binary(self, node);

        let Some(id) = self.counter.observe(&node.op) else {
            return;
        };
        let Some(operator) = Operator::from_bin_op(&node.op) else {
            return;
        };

        let eligible = match id.kind {
            SiteKind::Binary => self.policy.is_binary_seed(operator),
            SiteKind::Compare => self.policy.is_compare_seed(operator),
        };
        if !eligible {
            return;
        }

        let start = node.op.span().start();
        let site = Site {
            id,
            operator,
            line: start.line,
            column: start.column + 1, // 1-indexed
            snippet: node.to_token_stream().to_string(),
        };
        debug!(site = %site.id, line = site.line, snippet = %site.snippet, "eligible site");
        self.sites.push(site);
    }
}
