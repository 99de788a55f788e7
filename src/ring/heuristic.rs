//! Candidate ordering.
//!
//! At every decision point the engine ranks the not-yet-placed items that
//! may legally follow the previous one. Rules are applied in order; a later
//! rule is only consulted when every earlier rule ties. Items that tie on
//! all rules keep their remaining-set order (ascending index).
//!
//! Keys follow the "lower explores first" convention, so a rule favoring
//! large values returns their negation.
//!
//! Ordering never filters: forbidden candidates are removed by the engine
//! before the rules run.

use crate::adjacency::AdjacencyMatrix;
use std::cmp::Ordering;
use std::fmt;

/// Read-only data available to ordering rules.
#[derive(Debug, Clone, Copy)]
pub struct OrderingContext<'a> {
    /// The instance's weights.
    pub matrix: &'a AdjacencyMatrix,
    /// Zero entries per matrix row, computed once per solve.
    pub zero_counts: &'a [usize],
}

/// A ranking rule for candidates following `prev` on the ring.
pub trait CandidateRule: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Ranking key for placing `candidate` right after `prev`.
    ///
    /// Lower keys are explored first.
    fn key(&self, prev: usize, candidate: usize, ctx: &OrderingContext<'_>) -> i64;
}

/// Greedy best-first: highest immediate edge weight first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateGain;

impl CandidateRule for ImmediateGain {
    fn name(&self) -> &str {
        "ImmediateGain"
    }

    fn key(&self, prev: usize, candidate: usize, ctx: &OrderingContext<'_>) -> i64 {
        -i64::from(ctx.matrix.weight(prev, candidate))
    }
}

/// Most-constrained first: items with more forbidden neighbors go earlier.
#[derive(Debug, Clone, Copy, Default)]
pub struct Restrictiveness;

impl CandidateRule for Restrictiveness {
    fn name(&self) -> &str {
        "Restrictiveness"
    }

    fn key(&self, _prev: usize, candidate: usize, ctx: &OrderingContext<'_>) -> i64 {
        -(ctx.zero_counts[candidate] as i64)
    }
}

/// Sequential composition of [`CandidateRule`]s.
///
/// # Examples
///
/// ```
/// use ring_layout::ring::{CandidateOrdering, ImmediateGain};
///
/// let ordering = CandidateOrdering::standard();
/// assert_eq!(ordering.rule_names(), vec!["ImmediateGain", "Restrictiveness"]);
///
/// let gain_only = CandidateOrdering::new().with_rule(ImmediateGain);
/// assert_eq!(gain_only.rule_count(), 1);
/// ```
pub struct CandidateOrdering {
    rules: Vec<Box<dyn CandidateRule>>,
}

impl CandidateOrdering {
    /// Creates an ordering without rules (remaining-set order).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Immediate gain, then restrictiveness as tie-breaker.
    pub fn standard() -> Self {
        Self::new().with_rule(ImmediateGain).with_rule(Restrictiveness)
    }

    /// Appends a rule; it only breaks ties left by earlier rules.
    pub fn with_rule<R: CandidateRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the number of rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    fn compare(&self, prev: usize, a: usize, b: usize, ctx: &OrderingContext<'_>) -> Ordering {
        for rule in &self.rules {
            match rule.key(prev, a, ctx).cmp(&rule.key(prev, b, ctx)) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }

    /// Sorts `candidates` in exploration order. The sort is stable.
    pub fn order(&self, prev: usize, candidates: &mut [usize], ctx: &OrderingContext<'_>) {
        if self.rules.is_empty() {
            return;
        }
        candidates.sort_by(|&a, &b| self.compare(prev, a, b, ctx));
    }
}

impl Default for CandidateOrdering {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for CandidateOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateOrdering")
            .field("rules", &self.rule_names())
            .finish()
    }
}
