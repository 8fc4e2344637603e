use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct TestSolver;

impl AocParser for TestSolver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.iter().sum::<i64>().into())
    }
}

impl PartSolver<2> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        if shared.is_empty() {
            Err(SolveError::SolveFailed("Empty input".into()))
        } else {
            Ok(shared.iter().product::<i64>().into())
        }
    }
}

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(<TestSolver as Solver>::PARTS, 2);
}

#[test]
fn test_solve_part_dispatches_by_number() {
    let mut parsed = TestSolver::parse("1\n2\n3\n4").unwrap();

    assert_eq!(TestSolver::solve_part(&mut parsed, 1).unwrap(), 10i64);
    assert_eq!(TestSolver::solve_part(&mut parsed, 2).unwrap(), 24i64);
}

#[test]
fn test_negative_answers_survive_dispatch() {
    let mut parsed = TestSolver::parse("-5\n2").unwrap();

    assert_eq!(TestSolver::solve_part(&mut parsed, 1).unwrap(), Answer::Signed(-3));
}

#[test]
fn test_unknown_part_not_implemented() {
    let mut parsed = TestSolver::parse("1").unwrap();

    let result = TestSolver::solve_part(&mut parsed, 3);
    assert!(matches!(result, Err(SolveError::PartNotImplemented(3))));
}

#[test]
fn test_checked_range_rejects_before_dispatch() {
    let mut parsed = TestSolver::parse("1").unwrap();

    let result = TestSolver::solve_part_checked_range(&mut parsed, 0);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(0))));
}

#[test]
fn test_part_error_propagates() {
    let mut parsed: Vec<i64> = Vec::new();

    let result = TestSolver::solve_part(&mut parsed, 2);
    assert!(matches!(result, Err(SolveError::SolveFailed(_))));
}
