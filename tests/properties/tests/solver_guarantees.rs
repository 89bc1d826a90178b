//! Backtracking-solver guarantees locked against the shipped worlds.

use wayfarer_csp::error::SolverError;
use wayfarer_csp::heuristics::{ValueOrdering, VarOrdering};
use wayfarer_csp::model::Csp;
use wayfarer_csp::policy::SolverPolicy;
use wayfarer_csp::solver::solve;
use wayfarer_worlds::map_coloring::MapColoring;

fn all_policies() -> Vec<SolverPolicy> {
    let mut out = Vec::new();
    for var_ordering in [VarOrdering::Declaration, VarOrdering::MinRemainingValues] {
        for value_ordering in [ValueOrdering::Domain, ValueOrdering::LeastConstraining] {
            for forward_checking in [false, true] {
                out.push(SolverPolicy {
                    var_ordering,
                    value_ordering,
                    forward_checking,
                    ..SolverPolicy::default()
                });
            }
        }
    }
    out
}

#[test]
fn returned_assignments_are_complete_and_consistent() {
    let map = MapColoring::australia();
    for policy in all_policies() {
        let solution = solve(&map, policy).unwrap();
        assert!(solution.assignment.is_complete(map.variables().len()));
        for (a, b) in map.borders() {
            assert_ne!(solution.assignment.get(a), solution.assignment.get(b));
        }
    }
}

#[test]
fn unsolvable_instances_fail_under_every_policy() {
    let map = MapColoring::unsolvable_triangle();
    for policy in all_policies() {
        assert!(
            matches!(solve(&map, policy), Err(SolverError::NoSolution { .. })),
            "a complete solver must prove unsatisfiability"
        );
    }
}

#[test]
fn mrv_assignment_count_is_bounded() {
    let map = MapColoring::australia();
    let declaration = solve(&map, SolverPolicy::default()).unwrap();
    let mrv = solve(
        &map,
        SolverPolicy {
            var_ordering: VarOrdering::MinRemainingValues,
            ..SolverPolicy::default()
        },
    )
    .unwrap();

    assert!(mrv.stats.assignments_tried <= 50);
    assert!(mrv.stats.assignments_tried <= declaration.stats.assignments_tried);
}

#[test]
fn solver_outcomes_replay_exactly() {
    let map = MapColoring::australia();
    for policy in all_policies() {
        let first = solve(&map, policy).unwrap();
        let again = solve(&map, policy).unwrap();
        assert_eq!(first.assignment, again.assignment);
        assert_eq!(first.stats, again.stats);
    }
}

#[test]
fn forward_checking_never_tries_more_assignments() {
    let map = MapColoring::australia();
    let plain = solve(&map, SolverPolicy::default()).unwrap();
    let checked = solve(
        &map,
        SolverPolicy {
            forward_checking: true,
            ..SolverPolicy::default()
        },
    )
    .unwrap();
    assert!(checked.stats.assignments_tried <= plain.stats.assignments_tried);
}
