use ngame::{
    ExpressionSolver, GroupingStrategy, Operator, SolverConfig, calculate_solutions,
};

fn solve(target: f64, input: &[f64], strategy: GroupingStrategy) -> Vec<ngame::Solution> {
    let solver = ExpressionSolver::new(SolverConfig {
        strategy,
        ..SolverConfig::with_target(target)
    });
    let result = solver.solve(input);
    assert!(result.is_ok(), "search failed: {:?}", result.err());
    result.unwrap_or_default()
}

#[test]
fn four_times_six() {
    let solutions = calculate_solutions(24.0, &[4.0, 6.0]).unwrap_or_default();
    assert_eq!(solutions.len(), 2);
    let expressions: Vec<String> = solutions.iter().map(|s| s.expression()).collect();
    assert_eq!(expressions, vec!["(4 * 6)", "(6 * 4)"]);
}

#[test]
fn one_two_five_has_no_solution() {
    assert!(calculate_solutions(24.0, &[1.0, 2.0, 5.0]).unwrap_or_default().is_empty());
    assert!(solve(24.0, &[1.0, 2.0, 5.0], GroupingStrategy::Tree).is_empty());
}

#[test]
fn one_five_five_five() {
    let clamped = solve(24.0, &[1.0, 5.0, 5.0, 5.0], GroupingStrategy::Clamped);
    assert_eq!(clamped.len(), 1);
    assert_eq!(clamped[0].permutation, vec![5.0, 1.0, 5.0, 5.0]);
    assert_eq!(
        clamped[0].operators,
        vec![Operator::Division, Operator::Subtraction, Operator::Multiplication]
    );
    assert_eq!(clamped[0].order, vec![1, 0, 2]);

    // the tree enumeration also reaches 5 * (5 - 1 / 5)
    let tree = solve(24.0, &[1.0, 5.0, 5.0, 5.0], GroupingStrategy::Tree);
    let expressions: Vec<String> = tree.iter().map(|s| s.expression()).collect();
    assert_eq!(
        expressions,
        vec!["((5 - (1 / 5)) * 5)", "(5 * (5 - (1 / 5)))"]
    );
}

#[test]
fn one_two_five_six() {
    let clamped = solve(24.0, &[1.0, 2.0, 5.0, 6.0], GroupingStrategy::Clamped);
    assert_eq!(clamped.len(), 42);
    assert_eq!(
        clamped.first().map(|s| s.expression()),
        Some("(((1 - 2) + 5) * 6)".to_string())
    );
    assert!(clamped.iter().all(|s| s.value == 24.0));

    let tree = solve(24.0, &[1.0, 2.0, 5.0, 6.0], GroupingStrategy::Tree);
    assert_eq!(tree.len(), 44);
}

#[test]
fn strategies_diverge_for_four_inputs() {
    let clamped = solve(10.0, &[1.0, 2.0, 3.0, 4.0], GroupingStrategy::Clamped);
    let tree = solve(10.0, &[1.0, 2.0, 3.0, 4.0], GroupingStrategy::Tree);
    assert_eq!(clamped.len(), 298);
    assert_eq!(tree.len(), 244);
}

#[test]
fn strategies_agree_for_three_inputs() {
    let clamped = solve(24.0, &[4.0, 6.0, 1.0], GroupingStrategy::Clamped);
    let tree = solve(24.0, &[4.0, 6.0, 1.0], GroupingStrategy::Tree);
    assert_eq!(clamped.len(), 20);
    assert_eq!(tree.len(), 20);
}

#[test]
fn duplicate_ones_collapse() {
    let solutions = calculate_solutions(2.0, &[1.0, 1.0]).unwrap_or_default();
    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].operators, vec![Operator::Addition]);
}

#[test]
fn division_by_zero_is_excluded() {
    let solutions = calculate_solutions(5.0, &[0.0, 5.0]).unwrap_or_default();
    let expressions: Vec<String> = solutions.iter().map(|s| s.expression()).collect();
    assert_eq!(expressions, vec!["(0 + 5)", "(5 + 0)", "(5 - 0)"]);
    assert!(
        solutions
            .iter()
            .all(|s| !s.operators.contains(&Operator::Division))
    );
}

#[test]
fn signed_zeros_are_not_permuted_apart() {
    // 0 + -0, 0 - -0 and 0 * -0 reach zero, 0 / -0 is NaN
    let solutions = calculate_solutions(0.0, &[0.0, -0.0]).unwrap_or_default();
    assert_eq!(solutions.len(), 3);
}

#[test]
fn inexact_thirds_miss_the_target() {
    // 8 / (3 - 8 / 3) is 24 only in exact arithmetic
    assert!(calculate_solutions(24.0, &[3.0, 3.0, 8.0, 8.0]).unwrap_or_default().is_empty());
    assert!(solve(24.0, &[3.0, 3.0, 8.0, 8.0], GroupingStrategy::Tree).is_empty());
}

#[test]
fn trivial_inputs() {
    assert_eq!(calculate_solutions(24.0, &[]).map(|s| s.len()), Ok(0));
    assert_eq!(calculate_solutions(24.0, &[24.0]).map(|s| s.len()), Ok(1));
    assert_eq!(calculate_solutions(24.0, &[7.0]).map(|s| s.len()), Ok(0));
}

#[test]
fn repeated_calls_are_identical() {
    let first = calculate_solutions(24.0, &[1.0, 2.0, 5.0, 6.0]);
    let second = calculate_solutions(24.0, &[1.0, 2.0, 5.0, 6.0]);
    assert_eq!(first, second);
}

#[test]
fn parallel_tree_search_matches_sequential() {
    let input = [1.0, 2.0, 3.0, 4.0];
    let sequential = solve(10.0, &input, GroupingStrategy::Tree);
    let parallel = ExpressionSolver::new(SolverConfig {
        strategy: GroupingStrategy::Tree,
        parallel: true,
        ..SolverConfig::with_target(10.0)
    })
    .solve(&input);
    assert_eq!(parallel, Ok(sequential));
}
