use yogic::{
    combinators::{amb, cut, fail, lazy, no, seq, unify, unify_any, unit, Goal},
    procedures::resolve::resolve,
    structures::{term::Term, variable::var},
};

fn count(goal: &Goal) -> usize {
    resolve(goal).count()
}

mod cut {
    use super::*;

    #[test]
    fn prunes_later_alternatives() {
        assert_eq!(count(&amb([seq([cut(), fail()]), unit()])), 0);
        assert_eq!(count(&amb([seq([unit(), cut()]), unit()])), 1);
        assert_eq!(count(&amb([unit(), seq([cut(), fail()]), unit()])), 1);
    }

    #[test]
    fn at_the_top_level_ends_the_resolution() {
        let x = var();
        let goal = seq([unify_any(&x, [1, 2, 3]), cut()]);

        let found = resolve(&goal).map(|s| s.get(&x)).collect::<Vec<_>>();
        assert_eq!(found, [Term::from(1)]);
    }

    #[test]
    fn goals_after_a_cut_still_backtrack() {
        let [x, y] = [var(), var()];
        let goal = amb([
            seq([unify(&x, 1), cut(), unify_any(&y, ["a", "b"])]),
            unify(&x, 2),
        ]);

        let found = resolve(&goal)
            .map(|s| (s.get(&x), s.get(&y)))
            .collect::<Vec<_>>();
        assert_eq!(
            found,
            [
                (Term::from(1), Term::from("a")),
                (Term::from(1), Term::from("b")),
            ]
        );
    }

    #[test]
    fn scope_is_the_innermost_choice_point() {
        let inner = amb([seq([cut(), fail()]), unit()]);

        assert_eq!(count(&amb([inner.clone(), unit()])), 1);
        assert_eq!(count(&amb([unit(), inner, unit()])), 2);
    }

    #[test]
    fn operators_prune_as_a_single_choice_point() {
        let x = var();
        let a = seq([unify(&x, 1), cut()]);
        let b = unify(&x, 2);
        let c = unify(&x, 3);

        let values = |goal: &Goal| resolve(goal).map(|s| s.get(&x).to_string()).collect::<Vec<_>>();

        assert_eq!(values(&amb([a.clone(), b.clone(), c.clone()])), ["1"]);
        assert_eq!(values(&(a.clone() | b.clone() | c.clone())), ["1"]);
        assert_eq!(values(&(a.clone() | (b.clone() | c.clone()))), ["1"]);
        assert_eq!(values(&amb([b.clone() | a.clone() | c.clone(), unify(&x, 4)])), ["2", "1"]);
    }

    #[test]
    fn a_cut_in_a_predicate_body_prunes_the_calling_choice_point() {
        fn first_of(x: Term) -> Goal {
            lazy(move || seq([unify_any(&x, [1, 2, 3]), cut()]) | unify(&x, 4))
        }

        let x = var();
        let goal = amb([first_of(Term::from(&x)), unify(&x, 5)]);

        let found = resolve(&goal).map(|s| s.get(&x)).collect::<Vec<_>>();
        assert_eq!(found, [Term::from(1)]);
    }

    #[test]
    fn regrouping_changes_what_is_pruned() {
        let flat = amb([seq([cut(), fail()]), unit(), unit()]);
        let grouped = amb([amb([seq([cut(), fail()]), unit()]), unit()]);

        assert_eq!(count(&flat), 0);
        assert_eq!(count(&grouped), 1);
    }

    /// A conditional in the manner of if-then-else, given a cut.
    fn max(a: i64, b: i64, m: &Term) -> Goal {
        let a_le_b = if a <= b { unit() } else { fail() };
        amb([seq([a_le_b, cut(), unify(m, b)]), unify(m, a)])
    }

    #[test]
    fn commits_a_conditional() {
        let m = var();

        let found = resolve(&max(1, 2, &Term::from(&m)))
            .map(|s| s.get(&m))
            .collect::<Vec<_>>();
        assert_eq!(found, [Term::from(2)]);

        let found = resolve(&max(3, 2, &Term::from(&m)))
            .map(|s| s.get(&m))
            .collect::<Vec<_>>();
        assert_eq!(found, [Term::from(3)]);
    }
}

mod negation {
    use super::*;

    #[test]
    fn of_success_and_failure() {
        assert_eq!(count(&no(fail())), 1);
        assert_eq!(count(&no(unit())), 0);
        assert_eq!(count(&!unify_any(var(), [1, 2])), 0);
    }

    #[test]
    fn double_negation_does_not_bind() {
        let x = var();
        let solutions = resolve(&no(no(unify(&x, 1)))).collect::<Vec<_>>();

        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].get(&x), Term::from(&x));
    }

    #[test]
    fn filters_bound_values() {
        let x = var();
        let goal = unify_any(&x, [1, 2, 3, 4]) & !unify_any(&x, [2, 4]);

        let found = resolve(&goal).map(|s| s.get(&x)).collect::<Vec<_>>();
        assert_eq!(found, [1, 3].map(Term::from));
    }

    #[test]
    fn does_not_disturb_an_enclosing_choice_point() {
        let x = var();
        let goal = amb([
            seq([unify(&x, 1), no(seq([cut(), fail()]))]),
            unify(&x, 2),
        ]);

        let found = resolve(&goal).map(|s| s.get(&x)).collect::<Vec<_>>();
        assert_eq!(found, [1, 2].map(Term::from));
    }

    #[test]
    fn of_an_infinite_goal_with_a_solution() {
        fn forever() -> Goal {
            lazy(|| amb([unit(), forever()]))
        }

        assert_eq!(count(&no(forever())), 0);
    }
}

mod order {
    use super::*;

    #[test]
    fn depth_first_left_to_right() {
        let [x, y] = [var(), var()];
        let goal = amb([
            seq([unify(&x, "a"), unify_any(&y, [1, 2])]),
            seq([unify(&x, "b"), unify_any(&y, [3])]),
        ]);

        let found = resolve(&goal)
            .map(|s| format!("{}{}", s.get(&x), s.get(&y)))
            .collect::<Vec<_>>();
        assert_eq!(found, ["a1", "a2", "b3"]);
    }

    #[test]
    fn solutions_are_lazy() {
        fn naturals(n: Term, from: i64) -> Goal {
            lazy(move || unify(&n, from) | naturals(n.clone(), from + 1))
        }

        let x = var();
        let first = resolve(&naturals(Term::from(&x), 0))
            .take(5)
            .map(|s| s.get(&x))
            .collect::<Vec<_>>();

        assert_eq!(first, [0, 1, 2, 3, 4].map(|n: i64| Term::from(n)));
    }
}
