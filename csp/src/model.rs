//! CSP contract trait and the assignment type.

use std::collections::HashMap;
use std::hash::Hash;

/// Trait implemented by constraint-satisfaction problem authors.
///
/// # Contract
///
/// - `variables` returns the declaration order, which doubles as the
///   deterministic fallback ordering for variable selection and for
///   breaking heuristic ties.
/// - `domain` returns the candidate values for a variable in a stable
///   order. A declared variable with an empty domain makes the
///   problem invalid; the solver rejects it before searching. The
///   solver never mutates these domains — forward checking operates
///   on a solver-private copy.
/// - `is_consistent` must be decidable from the partial assignment
///   alone (no lookahead): true iff assigning `value` to `var`
///   violates no constraint given the entries already present.
pub trait Csp {
    /// Variable identifier (a region name, a cell coordinate, ...).
    type Var: Clone + Eq + Hash;
    /// Candidate value (a color, a digit, ...).
    type Value: Clone + Eq;

    /// All variables that need an assignment, in declaration order.
    fn variables(&self) -> &[Self::Var];

    /// Candidate values for `var`, in a stable order.
    fn domain(&self, var: &Self::Var) -> &[Self::Value];

    /// Whether `var = value` is consistent with the partial
    /// `assignment`. `assignment` never contains `var` at call time.
    fn is_consistent(
        &self,
        var: &Self::Var,
        value: &Self::Value,
        assignment: &Assignment<Self::Var, Self::Value>,
    ) -> bool;
}

/// A partial or complete mapping from variables to chosen values.
///
/// Holds at most one value per variable. During solving it grows by
/// exactly one entry per recursive descent and shrinks by that entry
/// on backtrack, so its size always equals the recursion depth.
#[derive(Debug, Clone)]
pub struct Assignment<V, D> {
    entries: HashMap<V, D>,
}

impl<V: Eq + Hash, D> Assignment<V, D> {
    /// Create an empty assignment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Number of assigned variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no variable is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every one of `variable_count` variables is assigned.
    #[must_use]
    pub fn is_complete(&self, variable_count: usize) -> bool {
        self.entries.len() == variable_count
    }

    /// The value assigned to `var`, if any.
    #[must_use]
    pub fn get(&self, var: &V) -> Option<&D> {
        self.entries.get(var)
    }

    /// Whether `var` is assigned.
    #[must_use]
    pub fn contains(&self, var: &V) -> bool {
        self.entries.contains_key(var)
    }

    /// Assign `value` to `var`, returning any previous value.
    pub fn insert(&mut self, var: V, value: D) -> Option<D> {
        self.entries.insert(var, value)
    }

    /// Unassign `var`, returning its value if it was assigned.
    pub fn remove(&mut self, var: &V) -> Option<D> {
        self.entries.remove(var)
    }

    /// Iterate over assigned `(variable, value)` pairs in no
    /// particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &D)> {
        self.entries.iter()
    }
}

impl<V: Eq + Hash, D> Default for Assignment<V, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash, D: PartialEq> PartialEq for Assignment<V, D> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: Eq + Hash, D: Eq> Eq for Assignment<V, D> {}
