//! Variable- and value-ordering heuristics.
//!
//! Both heuristics are computed against the solver's working domains,
//! so forward-checked prunes sharpen them automatically. Selection is
//! deterministic: every tie falls back to declaration order.

use crate::model::{Assignment, Csp};

/// Which unassigned variable the solver tries next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarOrdering {
    /// First unassigned variable in declaration order.
    Declaration,
    /// Minimum remaining values: the unassigned variable with the
    /// fewest values still consistent with the assignment. Most
    /// constrained first, so dead ends surface early. Ties break by
    /// declaration order.
    MinRemainingValues,
}

/// The order candidate values are tried in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOrdering {
    /// Declared domain order.
    Domain,
    /// Least constraining value: values leaving the most options open
    /// for the other unassigned variables are tried first. Ties keep
    /// domain order (stable sort).
    LeastConstraining,
}

/// Pick the index (into declaration order) of the next variable to
/// assign, or `None` when every variable is assigned.
pub(crate) fn select_variable<C: Csp>(
    csp: &C,
    ordering: VarOrdering,
    vars: &[C::Var],
    assignment: &Assignment<C::Var, C::Value>,
    working: &[Vec<C::Value>],
    checks: &mut u64,
) -> Option<usize> {
    match ordering {
        VarOrdering::Declaration => vars.iter().position(|v| !assignment.contains(v)),
        VarOrdering::MinRemainingValues => {
            let mut best: Option<(usize, usize)> = None;
            for (i, var) in vars.iter().enumerate() {
                if assignment.contains(var) {
                    continue;
                }
                let mut remaining = 0;
                for value in &working[i] {
                    *checks += 1;
                    if csp.is_consistent(var, value, assignment) {
                        remaining += 1;
                    }
                }
                // Strict < keeps the earliest-declared variable on ties.
                if best.is_none_or(|(count, _)| remaining < count) {
                    best = Some((remaining, i));
                }
            }
            best.map(|(_, i)| i)
        }
    }
}

/// Produce the candidate values for `vars[vi]` in trial order.
///
/// Least-constraining scoring tentatively places each value and counts
/// how many options stay legal across the other unassigned variables;
/// the tentative entry is removed before returning, so `assignment`
/// is unchanged on exit.
pub(crate) fn order_values<C: Csp>(
    csp: &C,
    ordering: ValueOrdering,
    vi: usize,
    vars: &[C::Var],
    assignment: &mut Assignment<C::Var, C::Value>,
    working: &[Vec<C::Value>],
    checks: &mut u64,
) -> Vec<C::Value> {
    match ordering {
        ValueOrdering::Domain => working[vi].clone(),
        ValueOrdering::LeastConstraining => {
            let var = vars[vi].clone();
            let mut scored: Vec<(usize, C::Value)> = Vec::with_capacity(working[vi].len());
            for value in &working[vi] {
                assignment.insert(var.clone(), value.clone());
                let mut legal = 0;
                for (wi, wvar) in vars.iter().enumerate() {
                    // Skips vars[vi] too: the tentative entry is present.
                    if assignment.contains(wvar) {
                        continue;
                    }
                    for wvalue in &working[wi] {
                        *checks += 1;
                        if csp.is_consistent(wvar, wvalue, assignment) {
                            legal += 1;
                        }
                    }
                }
                assignment.remove(&var);
                scored.push((legal, value.clone()));
            }
            // Most options left first; stable, so ties keep domain order.
            scored.sort_by(|a, b| b.0.cmp(&a.0));
            scored.into_iter().map(|(_, value)| value).collect()
        }
    }
}
