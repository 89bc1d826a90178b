//! Recursive backtracking solver with optional forward checking.
//!
//! The descent follows a strict Try/Check/Recurse/Undo discipline:
//! every tentative assignment and every forward-checked prune is
//! undone exactly once on backtrack, so the solver's state at any
//! depth is a pure function of the choices on the current path.

use wayfarer_search::policy::CancelToken;

use crate::error::SolverError;
use crate::heuristics::{order_values, select_variable};
use crate::model::{Assignment, Csp};
use crate::policy::SolverPolicy;

/// Deterministic effort counters for one solve.
///
/// `assignments_tried` is the primary cost observable; heuristics pay
/// for their pruning through `consistency_checks`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    /// Tentative variable assignments placed, including ones later
    /// undone.
    pub assignments_tried: u64,
    /// Times the solver exhausted a variable's candidates and
    /// retreated one level.
    pub backtracks: u64,
    /// Calls into the problem's consistency predicate, from the
    /// solver loop and from the ordering heuristics alike.
    pub consistency_checks: u64,
}

/// A complete consistent assignment plus the effort spent finding it.
#[derive(Debug, Clone)]
pub struct CspSolution<V, D> {
    /// One value per declared variable, jointly consistent.
    pub assignment: Assignment<V, D>,
    /// Counters accumulated over the whole solve.
    pub stats: SolverStats,
}

/// Abnormal termination inside the recursion, propagated as `Err` so
/// every level unwinds without trying further values.
enum Halt {
    Budget,
    Cancelled,
}

/// Solve `csp` to completion or prove it unsatisfiable.
///
/// # Errors
///
/// [`SolverError::InvalidPolicy`] or [`SolverError::InvalidProblem`]
/// before any search; [`SolverError::NoSolution`] when the space is
/// exhausted; [`SolverError::BudgetExhausted`] when
/// `max_assignments` trips.
pub fn solve<C: Csp>(
    csp: &C,
    policy: SolverPolicy,
) -> Result<CspSolution<C::Var, C::Value>, SolverError> {
    solve_with_cancel(csp, policy, &CancelToken::new())
}

/// [`solve`] with a cooperative cancellation token, polled between
/// tentative assignments.
///
/// # Errors
///
/// As [`solve`], plus [`SolverError::Cancelled`] when the token is
/// set.
pub fn solve_with_cancel<C: Csp>(
    csp: &C,
    policy: SolverPolicy,
    cancel: &CancelToken,
) -> Result<CspSolution<C::Var, C::Value>, SolverError> {
    policy.validate()?;

    let vars = csp.variables();
    for var in vars {
        if csp.domain(var).is_empty() {
            return Err(SolverError::InvalidProblem {
                detail: "a declared variable has an empty domain".to_owned(),
            });
        }
    }

    let working = vars.iter().map(|v| csp.domain(v).to_vec()).collect();
    let mut ctx = Ctx {
        csp,
        vars,
        policy,
        cancel,
        stats: SolverStats::default(),
        working,
    };

    let mut assignment = Assignment::new();
    match ctx.backtrack(&mut assignment) {
        Ok(true) => Ok(CspSolution {
            assignment,
            stats: ctx.stats,
        }),
        Ok(false) => Err(SolverError::NoSolution { stats: ctx.stats }),
        Err(Halt::Budget) => Err(SolverError::BudgetExhausted { stats: ctx.stats }),
        Err(Halt::Cancelled) => Err(SolverError::Cancelled { stats: ctx.stats }),
    }
}

/// Per-solve state threaded through the recursion.
struct Ctx<'a, C: Csp> {
    csp: &'a C,
    vars: &'a [C::Var],
    policy: SolverPolicy,
    cancel: &'a CancelToken,
    stats: SolverStats,
    /// Solver-private domain copies, indexed by declaration order.
    /// Forward checking prunes these; the caller's domains are never
    /// touched.
    working: Vec<Vec<C::Value>>,
}

impl<C: Csp> Ctx<'_, C> {
    /// Returns `Ok(true)` with `assignment` complete, `Ok(false)` when
    /// this subtree holds no solution, or `Err` on budget or
    /// cancellation.
    fn backtrack(&mut self, assignment: &mut Assignment<C::Var, C::Value>) -> Result<bool, Halt> {
        if assignment.is_complete(self.vars.len()) {
            return Ok(true);
        }
        if self.cancel.is_cancelled() {
            return Err(Halt::Cancelled);
        }

        let Some(vi) = select_variable(
            self.csp,
            self.policy.var_ordering,
            self.vars,
            assignment,
            &self.working,
            &mut self.stats.consistency_checks,
        ) else {
            // Unreachable when is_complete is size equality, kept as a
            // backstop against inconsistent contract implementations.
            return Ok(false);
        };
        let var = self.vars[vi].clone();

        let candidates = order_values(
            self.csp,
            self.policy.value_ordering,
            vi,
            self.vars,
            assignment,
            &self.working,
            &mut self.stats.consistency_checks,
        );

        for value in candidates {
            self.stats.consistency_checks += 1;
            if !self.csp.is_consistent(&var, &value, assignment) {
                continue;
            }
            if self.stats.assignments_tried >= self.policy.max_assignments {
                return Err(Halt::Budget);
            }
            self.stats.assignments_tried += 1;
            assignment.insert(var.clone(), value);

            let solved = if self.policy.forward_checking {
                let (pruned, wiped) = self.forward_check(vi, assignment);
                let solved = if wiped {
                    Ok(false)
                } else {
                    self.backtrack(assignment)
                };
                if !matches!(solved, Ok(true)) {
                    self.restore(pruned);
                }
                solved?
            } else {
                self.backtrack(assignment)?
            };

            if solved {
                return Ok(true);
            }
            assignment.remove(&var);
        }

        self.stats.backtracks += 1;
        Ok(false)
    }

    /// Prune values inconsistent with the newest assignment from every
    /// other unassigned variable's working domain.
    ///
    /// Returns the prune log as `(variable index, position, value)`
    /// triples in removal order, and whether some domain was wiped
    /// empty. Pruning stops at the first wipe.
    fn forward_check(
        &mut self,
        vi: usize,
        assignment: &Assignment<C::Var, C::Value>,
    ) -> (Vec<(usize, usize, C::Value)>, bool) {
        let mut pruned = Vec::new();
        for wi in 0..self.vars.len() {
            if wi == vi || assignment.contains(&self.vars[wi]) {
                continue;
            }
            let mut pos = 0;
            while pos < self.working[wi].len() {
                self.stats.consistency_checks += 1;
                let keep =
                    self.csp
                        .is_consistent(&self.vars[wi], &self.working[wi][pos], assignment);
                if keep {
                    pos += 1;
                } else {
                    let value = self.working[wi].remove(pos);
                    pruned.push((wi, pos, value));
                }
            }
            if self.working[wi].is_empty() {
                return (pruned, true);
            }
        }
        (pruned, false)
    }

    /// Undo a prune log exactly. Replaying removals in reverse with
    /// insert-at-position reconstructs every working domain's original
    /// value order.
    fn restore(&mut self, pruned: Vec<(usize, usize, C::Value)>) {
        for (wi, pos, value) in pruned.into_iter().rev() {
            self.working[wi].insert(pos, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::{ValueOrdering, VarOrdering};

    /// Graph coloring over an explicit adjacency list. Constraint:
    /// adjacent nodes take different colors.
    struct Coloring {
        nodes: Vec<&'static str>,
        edges: Vec<(&'static str, &'static str)>,
        colors: Vec<&'static str>,
        empty: Vec<&'static str>,
        empty_domain_for: Option<&'static str>,
    }

    impl Coloring {
        fn new(
            nodes: Vec<&'static str>,
            edges: Vec<(&'static str, &'static str)>,
            colors: Vec<&'static str>,
        ) -> Self {
            Self {
                nodes,
                edges,
                colors,
                empty: Vec::new(),
                empty_domain_for: None,
            }
        }

        fn triangle(colors: Vec<&'static str>) -> Self {
            Self::new(
                vec!["a", "b", "c"],
                vec![("a", "b"), ("b", "c"), ("a", "c")],
                colors,
            )
        }
    }

    impl Csp for Coloring {
        type Var = &'static str;
        type Value = &'static str;

        fn variables(&self) -> &[&'static str] {
            &self.nodes
        }

        fn domain(&self, var: &&'static str) -> &[&'static str] {
            if self.empty_domain_for == Some(*var) {
                &self.empty
            } else {
                &self.colors
            }
        }

        fn is_consistent(
            &self,
            var: &&'static str,
            value: &&'static str,
            assignment: &Assignment<&'static str, &'static str>,
        ) -> bool {
            self.edges.iter().all(|(x, y)| {
                let neighbor = if x == var {
                    y
                } else if y == var {
                    x
                } else {
                    return true;
                };
                assignment.get(neighbor) != Some(value)
            })
        }
    }

    fn assert_proper_coloring(csp: &Coloring, solution: &CspSolution<&'static str, &'static str>) {
        assert!(solution.assignment.is_complete(csp.nodes.len()));
        for (x, y) in &csp.edges {
            assert_ne!(
                solution.assignment.get(x),
                solution.assignment.get(y),
                "{x} and {y} are adjacent and must differ"
            );
        }
    }

    #[test]
    fn chain_two_colors_solves() {
        let csp = Coloring::new(
            vec!["a", "b", "c"],
            vec![("a", "b"), ("b", "c")],
            vec!["red", "green"],
        );
        let solution = solve(&csp, SolverPolicy::default()).unwrap();
        assert_proper_coloring(&csp, &solution);
        assert_eq!(
            solution.stats.assignments_tried, 3,
            "chain coloring needs no backtracking in declaration order"
        );
        assert_eq!(solution.stats.backtracks, 0);
    }

    #[test]
    fn triangle_two_colors_is_unsolvable() {
        let csp = Coloring::triangle(vec!["red", "green"]);
        let err = solve(&csp, SolverPolicy::default()).unwrap_err();
        match err {
            SolverError::NoSolution { stats } => {
                assert!(stats.assignments_tried > 0);
                assert!(stats.backtracks > 0);
            }
            other => panic!("expected NoSolution, got {other:?}"),
        }
    }

    #[test]
    fn triangle_three_colors_solves_under_every_heuristic_mix() {
        for var_ordering in [VarOrdering::Declaration, VarOrdering::MinRemainingValues] {
            for value_ordering in [ValueOrdering::Domain, ValueOrdering::LeastConstraining] {
                for forward_checking in [false, true] {
                    let csp = Coloring::triangle(vec!["red", "green", "blue"]);
                    let policy = SolverPolicy {
                        var_ordering,
                        value_ordering,
                        forward_checking,
                        ..SolverPolicy::default()
                    };
                    let solution = solve(&csp, policy).unwrap();
                    assert_proper_coloring(&csp, &solution);
                }
            }
        }
    }

    #[test]
    fn empty_domain_is_rejected_before_search() {
        let mut csp = Coloring::triangle(vec!["red", "green", "blue"]);
        csp.empty_domain_for = Some("b");
        let err = solve(&csp, SolverPolicy::default()).unwrap_err();
        assert!(matches!(err, SolverError::InvalidProblem { .. }));
    }

    #[test]
    fn assignment_budget_trips() {
        let csp = Coloring::triangle(vec!["red", "green"]);
        let policy = SolverPolicy {
            max_assignments: 1,
            ..SolverPolicy::default()
        };
        let err = solve(&csp, policy).unwrap_err();
        match err {
            SolverError::BudgetExhausted { stats } => {
                assert_eq!(stats.assignments_tried, 1);
            }
            other => panic!("expected BudgetExhausted, got {other:?}"),
        }
    }

    #[test]
    fn pre_cancelled_token_stops_immediately() {
        let csp = Coloring::triangle(vec!["red", "green", "blue"]);
        let cancel = CancelToken::new();
        cancel.cancel();
        let err = solve_with_cancel(&csp, SolverPolicy::default(), &cancel).unwrap_err();
        match err {
            SolverError::Cancelled { stats } => {
                assert_eq!(stats.assignments_tried, 0);
            }
            other => panic!("expected Cancelled, got {other:?}"),
        }
    }

    #[test]
    fn single_variable_takes_first_value() {
        let csp = Coloring::new(vec!["a"], vec![], vec!["red", "green"]);
        let solution = solve(&csp, SolverPolicy::default()).unwrap();
        assert_eq!(solution.assignment.get(&"a"), Some(&"red"));
        assert_eq!(solution.stats.assignments_tried, 1);
    }

    #[test]
    fn forward_checking_prunes_without_changing_the_answer() {
        let plain = {
            let csp = Coloring::triangle(vec!["red", "green", "blue"]);
            solve(&csp, SolverPolicy::default()).unwrap()
        };
        let checked = {
            let csp = Coloring::triangle(vec!["red", "green", "blue"]);
            let policy = SolverPolicy {
                forward_checking: true,
                ..SolverPolicy::default()
            };
            solve(&csp, policy).unwrap()
        };
        assert_eq!(plain.assignment, checked.assignment);
    }

    #[test]
    fn forward_checking_detects_dead_ends_with_fewer_backtracks() {
        let csp = Coloring::triangle(vec!["red", "green"]);
        let plain = solve(&csp, SolverPolicy::default()).unwrap_err();
        let policy = SolverPolicy {
            forward_checking: true,
            ..SolverPolicy::default()
        };
        let checked = solve(&csp, policy).unwrap_err();
        let (SolverError::NoSolution { stats: plain }, SolverError::NoSolution { stats: checked }) =
            (plain, checked)
        else {
            panic!("both runs must prove unsolvability");
        };
        assert!(checked.assignments_tried <= plain.assignments_tried);
    }

    #[test]
    fn repeated_solves_are_identical() {
        let csp = Coloring::triangle(vec!["red", "green", "blue"]);
        let first = solve(&csp, SolverPolicy::default()).unwrap();
        for _ in 0..4 {
            let again = solve(&csp, SolverPolicy::default()).unwrap();
            assert_eq!(first.assignment, again.assignment);
            assert_eq!(first.stats, again.stats);
        }
    }
}
