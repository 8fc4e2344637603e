//! Property-based tests for the AocSolver derive macro and the registry

use aoc_solver::{
    Answer, AocParser, AocSolver, ParseError, PartSolver, RegistrationError, SolveError, Solver,
    SolverError, SolverRegistryBuilder,
};
use proptest::prelude::*;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct TestSolver;

impl AocParser for TestSolver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.parse()
                    .map_err(|_| ParseError::InvalidFormat("bad int".into()))
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
        Ok(shared.iter().product::<i64>().into())
    }
}

mod part_dispatch {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn solve_part_dispatches_to_matching_part_solver(
            numbers in prop::collection::vec(-9i64..10, 1..6),
            part in 1u8..=2
        ) {
            let mut via_dispatch = numbers.clone();
            let mut direct = numbers;

            let dispatched = TestSolver::solve_part(&mut via_dispatch, part).unwrap();
            let expected = match part {
                1 => <TestSolver as PartSolver<1>>::solve(&mut direct),
                _ => <TestSolver as PartSolver<2>>::solve(&mut direct),
            }
            .unwrap();

            prop_assert_eq!(dispatched, expected);
        }

        #[test]
        fn parts_above_max_are_not_implemented(part in 3u8..=255) {
            let mut shared = vec![1, 2, 3];
            let result = TestSolver::solve_part(&mut shared, part);
            prop_assert!(matches!(result, Err(SolveError::PartNotImplemented(p)) if p == part));
        }
    }
}

mod registry {
    use super::*;

    #[test]
    fn registered_solver_parses_and_times_parts() {
        let registry = SolverRegistryBuilder::new()
            .register_solver::<TestSolver>(2023, 9)
            .unwrap()
            .build();

        let mut solver = registry.create_solver(2023, 9, "2\n-3\n4").unwrap();
        assert_eq!(solver.year(), 2023);
        assert_eq!(solver.day(), 9);
        assert_eq!(solver.parts(), 2);
        assert!(solver.parse_end() >= solver.parse_start());

        let result = solver.solve(1).unwrap();
        assert_eq!(result.answer, 3i64);
        assert!(result.duration() >= chrono::TimeDelta::zero());
        assert_eq!(solver.solve(2).unwrap().answer, -24i64);
        assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn duplicate_and_out_of_range_registrations_fail() {
        let builder = SolverRegistryBuilder::new()
            .register_solver::<TestSolver>(2023, 1)
            .unwrap();

        assert!(matches!(
            builder.register_solver::<TestSolver>(2023, 1),
            Err(RegistrationError::DuplicateFactory(2023, 1))
        ));
        assert!(matches!(
            SolverRegistryBuilder::new().register_solver::<TestSolver>(2023, 26),
            Err(RegistrationError::InvalidYearDay(2023, 26))
        ));
    }

    #[test]
    fn lookup_errors_are_distinguished() {
        let registry = SolverRegistryBuilder::new()
            .register_solver::<TestSolver>(2023, 1)
            .unwrap()
            .build();

        assert!(matches!(
            registry.create_solver(2023, 2, ""),
            Err(SolverError::NotFound(2023, 2))
        ));
        assert!(matches!(
            registry.create_solver(1999, 1, ""),
            Err(SolverError::InvalidYearDay(1999, 1))
        ));
        assert!(matches!(
            registry.create_solver(2023, 1, "x"),
            Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
        ));
    }

    #[test]
    fn storage_reports_registered_days_in_order() {
        let registry = SolverRegistryBuilder::new()
            .register_solver::<TestSolver>(2023, 5)
            .unwrap()
            .register_solver::<TestSolver>(2015, 1)
            .unwrap()
            .build();

        let storage = registry.storage();
        assert_eq!(storage.len(), 2);
        assert!(storage.contains(2023, 5));
        assert!(!storage.contains(2023, 6));
        let days: Vec<_> = storage.iter_info().map(|i| (i.year, i.day)).collect();
        assert_eq!(days, vec![(2015, 1), (2023, 5)]);
    }
}
