use std::cell::RefCell;
use std::collections::HashSet;

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::expression::Expression;
use crate::puzzle::{
    Point24, Point24Solver, PuzzleError, PuzzleState, SolverConfig, StateKey, Value,
};
use crate::search::{Problem, SearchConfig, SearchError, Strategy, TreeSearch};

fn rational(numer: i64, denom: i64) -> BigRational {
    BigRational::new(BigInt::from(numer), BigInt::from(denom))
}

fn state_of(values: &[(i64, i64, &str)]) -> PuzzleState {
    PuzzleState::new(
        values
            .iter()
            .map(|&(n, d, e)| Value::new(rational(n, d), e.to_string()))
            .collect(),
    )
}

/// Parse the answer and check it is exactly 24 and uses each input once
fn assert_valid_answer(answer: &str, numbers: &[i64]) {
    let expr = answer.parse::<Expression>();
    assert!(expr.is_ok(), "answer does not parse: {}", answer);
    if let Ok(expr) = expr {
        assert_eq!(expr.evaluate(), Ok(rational(24, 1)), "answer: {}", answer);

        let mut used = expr.literals();
        used.sort();
        let mut expected: Vec<BigRational> = numbers.iter().map(|&n| rational(n, 1)).collect();
        expected.sort();
        assert_eq!(used, expected, "answer: {}", answer);
    }
}

/// Records every node the engine creates; `evaluate` runs once per created node
struct Recording {
    inner: Point24,
    keys: RefCell<Vec<StateKey>>,
    sizes: RefCell<Vec<usize>>,
}

impl Recording {
    fn new() -> Self {
        Self {
            inner: Point24::default(),
            keys: RefCell::new(Vec::new()),
            sizes: RefCell::new(Vec::new()),
        }
    }
}

impl Problem for Recording {
    type State = PuzzleState;
    type Key = StateKey;

    fn expand(&self, state: &PuzzleState) -> Vec<(PuzzleState, String)> {
        self.inner.expand(state)
    }

    fn evaluate(&self, state: &PuzzleState) -> f64 {
        self.keys.borrow_mut().push(self.inner.key(state));
        self.sizes.borrow_mut().push(state.len());
        self.inner.evaluate(state)
    }

    fn is_goal(&self, state: &PuzzleState) -> bool {
        self.inner.is_goal(state)
    }

    fn key(&self, state: &PuzzleState) -> StateKey {
        self.inner.key(state)
    }
}

#[test]
fn test_four_fours_is_solvable() {
    let solver = Point24Solver::default();
    let result = solver.solve(&[4, 4, 4, 4], "bfs");
    assert!(matches!(result, Ok(Some(_))));
    if let Ok(Some(answer)) = result {
        assert_valid_answer(&answer, &[4, 4, 4, 4]);
    }
}

#[test]
fn test_four_ones_has_no_solution() {
    let solver = Point24Solver::default();
    assert_eq!(solver.solve(&[1, 1, 1, 1], "bfs"), Ok(None));
    assert_eq!(solver.solve(&[1, 1, 1, 1], "dfs"), Ok(None));
}

#[test]
fn test_three_three_eight_eight_both_strategies() {
    let solver = Point24Solver::default();
    for strategy in ["bfs", "dfs"] {
        let result = solver.solve(&[3, 3, 8, 8], strategy);
        assert!(matches!(result, Ok(Some(_))), "strategy {}", strategy);
        if let Ok(Some(answer)) = result {
            assert_valid_answer(&answer, &[3, 3, 8, 8]);
        }
    }
}

#[test]
fn test_wrong_arity_is_invalid_input() {
    let solver = Point24Solver::default();
    assert_eq!(
        solver.solve(&[1, 2, 3], "bfs"),
        Err(PuzzleError::InvalidInput {
            expected: 4,
            actual: 3
        })
    );
    assert_eq!(
        solver.solve(&[1, 2, 3, 4, 5], "dfs"),
        Err(PuzzleError::InvalidInput {
            expected: 4,
            actual: 5
        })
    );
    assert!(solver.solve(&[], "bfs").is_err());
}

#[test]
fn test_unknown_strategy_is_invalid_configuration() {
    let solver = Point24Solver::default();
    assert_eq!(
        solver.solve(&[4, 4, 4, 4], "astar"),
        Err(PuzzleError::Search(SearchError::InvalidStrategy(
            "astar".to_string()
        )))
    );

    let search = TreeSearch::new(Point24::default(), SearchConfig::default());
    let result = search.search(PuzzleState::from_numbers(&[4, 4, 4, 4]), "astar");
    assert!(matches!(result, Err(SearchError::InvalidStrategy(_))));
}

#[test]
fn test_four_sixes_solved_at_depth_three() {
    let solver = Point24Solver::default();
    for strategy in ["bfs", "dfs"] {
        let solution = solver.solve_traced(&[6, 6, 6, 6], strategy);
        assert!(matches!(solution, Ok(Some(_))));
        if let Ok(Some(solution)) = solution {
            assert_eq!(solution.depth, 3);
            assert_eq!(solution.steps.len(), 3);
            assert_eq!(solution.steps.last(), Some(&solution.expression));
            assert_valid_answer(&solution.expression, &[6, 6, 6, 6]);
        }
    }
}

#[test]
fn test_known_hands() {
    let solver = Point24Solver::default();
    for hand in [
        [1, 2, 3, 4],
        [1, 5, 5, 5],
        [1, 3, 4, 6],
        [4, 4, 10, 10],
        [2, 2, 2, 3],
        [13, 13, 12, 1],
    ] {
        for strategy in ["bfs", "dfs"] {
            let result = solver.solve(&hand, strategy);
            assert!(
                matches!(result, Ok(Some(_))),
                "{:?} with {}",
                hand,
                strategy
            );
            if let Ok(Some(answer)) = result {
                assert_valid_answer(&answer, &hand);
            }
        }
    }
}

#[test]
fn test_out_of_range_numbers_are_accepted() {
    let solver = Point24Solver::default();
    let result = solver.solve(&[0, 0, 0, 24], "bfs");
    assert!(matches!(result, Ok(Some(_))));
    if let Ok(Some(answer)) = result {
        assert_valid_answer(&answer, &[0, 0, 0, 24]);
    }

    assert_eq!(solver.solve(&[0, 0, 0, 0], "dfs"), Ok(None));
    assert!(solver.solve(&[-3, -8, 100, 7], "bfs").is_ok());
}

#[test]
fn test_solve_is_deterministic() {
    let solver = Point24Solver::default();
    for hand in [[3, 3, 8, 8], [1, 1, 1, 1], [5, 7, 9, 11]] {
        for strategy in ["bfs", "dfs"] {
            let first = solver.solve(&hand, strategy);
            let second = solver.solve(&hand, strategy);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_custom_target() {
    let solver = Point24Solver::new(SolverConfig {
        target: rational(10, 1),
        ..SolverConfig::default()
    });
    let result = solver.solve(&[1, 2, 3, 4], "bfs");
    assert!(matches!(result, Ok(Some(_))));
    if let Ok(Some(answer)) = result
        && let Ok(expr) = answer.parse::<Expression>()
    {
        assert_eq!(expr.evaluate(), Ok(rational(10, 1)));
    }
}

#[test]
fn test_shallow_depth_limit_finds_nothing() {
    let solver = Point24Solver::new(SolverConfig {
        max_depth: 2,
        ..SolverConfig::default()
    });
    assert_eq!(solver.solve(&[4, 4, 4, 4], "bfs"), Ok(None));
}

#[test]
fn test_full_pruning_blocks_expansion() {
    let solver = Point24Solver::new(SolverConfig {
        prune_threshold: 1.1,
        ..SolverConfig::default()
    });
    let solution = solver.solve_traced(&[4, 4, 4, 4], "bfs");
    assert!(matches!(solution, Ok(None)));
}

#[test]
fn test_expand_produces_pairwise_successors() {
    let problem = Point24::default();
    let successors = problem.expand(&PuzzleState::from_numbers(&[1, 2, 3, 4]));
    // 6 pairs, 6 candidates each
    assert_eq!(successors.len(), 36);

    let (first, action) = &successors[0];
    assert_eq!(action, "(1+2)");
    let exprs: Vec<&str> = first
        .values()
        .iter()
        .map(|v| v.expression.as_str())
        .collect();
    assert_eq!(exprs, vec!["3", "4", "(1+2)"]);
    assert_eq!(first.values()[2].magnitude, rational(3, 1));

    for (state, action) in &successors {
        assert_eq!(state.len(), 3);
        assert_eq!(state.values().last().map(|v| &v.expression), Some(action));
    }
}

#[test]
fn test_expand_skips_zero_divisors() {
    let problem = Point24::default();
    let successors = problem.expand(&PuzzleState::from_numbers(&[0, 1, 2, 3]));
    // Three pairs contain the zero and lose one division each
    assert_eq!(successors.len(), 33);

    // Two levels deep, where zero differences appear, nothing divides by zero
    let start = PuzzleState::from_numbers(&[0, 0, 5, 5]);
    for (level_one, _) in problem.expand(&start) {
        for (level_two, action) in problem.expand(&level_one) {
            let expr = action.parse::<Expression>();
            assert!(expr.is_ok(), "unparseable action {}", action);
            if let Ok(expr) = expr {
                let value = expr.evaluate();
                assert!(value.is_ok(), "{} divides by zero", action);
                assert_eq!(
                    value.ok(),
                    level_two.values().last().map(|v| v.magnitude.clone())
                );
            }
        }
    }
}

#[test]
fn test_evaluate_scores() {
    let problem = Point24::default();

    let exact = state_of(&[(24, 1, "24")]);
    assert!((problem.evaluate(&exact) - 0.925).abs() < 1e-12);

    let half = state_of(&[(24, 1, "24"), (1, 2, "(1/2)")]);
    assert!((problem.evaluate(&half) - 0.9).abs() < 1e-12);

    let off_by_one = state_of(&[(23, 1, "23")]);
    assert!((problem.evaluate(&off_by_one) - 0.5).abs() < 1e-12);

    let below = state_of(&[(25, 1, "25"), (-100, 1, "-100")]);
    assert!((problem.evaluate(&below) - 0.5).abs() < 1e-12);

    assert_eq!(problem.evaluate(&PuzzleState::new(Vec::new())), 0.0);
}

#[test]
fn test_evaluate_stays_in_unit_interval() {
    let problem = Point24::default();
    let start = PuzzleState::from_numbers(&[1, 7, 13, 11]);
    for (state, _) in problem.expand(&start) {
        let score = problem.evaluate(&state);
        assert!((0.0..=1.0).contains(&score));
    }
}

#[test]
fn test_is_goal_requires_single_exact_value() {
    let problem = Point24::default();
    assert!(problem.is_goal(&state_of(&[(24, 1, "24")])));
    assert!(problem.is_goal(&state_of(&[(48, 2, "(48/2)")])));
    assert!(!problem.is_goal(&state_of(&[(24, 1, "24"), (1, 1, "1")])));
    assert!(!problem.is_goal(&state_of(&[(23, 1, "23")])));
    assert!(!problem.is_goal(&state_of(&[(2399, 100, "x")])));
    assert!(!problem.is_goal(&PuzzleState::new(Vec::new())));
}

#[test]
fn test_key_ignores_expressions_and_order() {
    let problem = Point24::default();
    let a = state_of(&[(8, 1, "8"), (1, 3, "(1/3)"), (4, 1, "(2+2)")]);
    let b = state_of(&[(4, 1, "(2*2)"), (8, 1, "(4+4)"), (2, 6, "(2/6)")]);
    assert_eq!(problem.key(&a), problem.key(&b));
    assert_eq!(
        problem.key(&a),
        vec![
            (BigInt::from(1), BigInt::from(3)),
            (BigInt::from(4), BigInt::from(1)),
            (BigInt::from(8), BigInt::from(1)),
        ]
    );

    let c = state_of(&[(8, 1, "8"), (1, 3, "(1/3)")]);
    assert_ne!(problem.key(&a), problem.key(&c));
}

#[test]
fn test_created_nodes_are_unique_and_depth_bounded() {
    for (hand, strategy) in [
        ([1, 1, 1, 1], Strategy::BreadthFirst),
        ([1, 1, 1, 1], Strategy::DepthFirst),
        ([5, 7, 9, 11], Strategy::DepthFirst),
    ] {
        let search = TreeSearch::new(Recording::new(), SearchConfig::default());
        let outcome = search.run(PuzzleState::from_numbers(&hand), strategy);

        let keys = search.problem().keys.borrow();
        let distinct: HashSet<&StateKey> = keys.iter().collect();
        assert_eq!(distinct.len(), keys.len(), "duplicate node for {:?}", hand);
        assert_eq!(keys.len(), outcome.stats.nodes_created);

        // Every combination removes one value, so depth = 4 - size
        let sizes = search.problem().sizes.borrow();
        assert!(sizes.iter().all(|&size| (1..=4).contains(&size)));
        assert!(outcome.stats.max_depth_reached <= 3);
    }
}

#[test]
fn test_goal_node_holds_one_value() {
    let search = TreeSearch::new(Point24::default(), SearchConfig::default());
    let goal = search.search_with(PuzzleState::from_numbers(&[3, 3, 8, 8]), Strategy::DepthFirst);
    assert!(goal.is_some());
    if let Some(node) = goal {
        assert_eq!(node.state.len(), 1);
        assert_eq!(node.depth, 3);
        assert_eq!(node.ancestors().count(), 4);
    }
}
