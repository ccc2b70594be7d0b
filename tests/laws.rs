use yogic::{
    combinators::{amb, fail, seq, unify, unify_any, unit, Goal},
    procedures::resolve::resolve,
    structures::{
        term::Term,
        variable::{vars, Variable},
    },
};

/// The values of `shown` in each solution of `goal`, in order.
fn answers(goal: &Goal, shown: &[Variable]) -> Vec<Vec<Term>> {
    resolve(goal)
        .map(|solution| shown.iter().map(|v| solution.get(v)).collect())
        .collect()
}

mod monoids {
    use super::*;

    #[test]
    fn unit_is_the_identity_of_then() {
        let [x] = vars();
        let goal = unify_any(&x, [1, 2, 3]);
        let expected = answers(&goal, &[x.clone()]);

        assert_eq!(answers(&seq([unit(), goal.clone()]), &[x.clone()]), expected);
        assert_eq!(answers(&seq([goal.clone(), unit()]), &[x.clone()]), expected);
        assert_eq!(answers(&(unit() & goal.clone()), &[x.clone()]), expected);
    }

    #[test]
    fn fail_is_the_identity_of_choice() {
        let [x] = vars();
        let goal = unify_any(&x, ["a", "b"]);
        let expected = answers(&goal, &[x.clone()]);

        assert_eq!(answers(&amb([fail(), goal.clone()]), &[x.clone()]), expected);
        assert_eq!(answers(&amb([goal.clone(), fail()]), &[x.clone()]), expected);
        assert_eq!(answers(&(goal.clone() | fail()), &[x.clone()]), expected);
    }

    #[test]
    fn fail_annihilates_then() {
        let [x] = vars();
        let goal = unify_any(&x, [1, 2]);

        assert_eq!(resolve(&seq([fail(), goal.clone()])).count(), 0);
        assert_eq!(resolve(&seq([goal, fail()])).count(), 0);
    }

    #[test]
    fn then_is_associative() {
        let [x, y, z] = vars();
        let shown = [x.clone(), y.clone(), z.clone()];
        let a = unify_any(&x, [1, 2]);
        let b = unify_any(&y, ["p", "q"]);
        let c = unify_any(&z, [3, 4]);

        let left = seq([seq([a.clone(), b.clone()]), c.clone()]);
        let right = seq([a.clone(), seq([b.clone(), c.clone()])]);
        let flat = seq([a, b, c]);

        assert_eq!(answers(&left, &shown).len(), 8);
        assert_eq!(answers(&left, &shown), answers(&right, &shown));
        assert_eq!(answers(&left, &shown), answers(&flat, &shown));
    }

    #[test]
    fn choice_is_associative_without_cut() {
        let [x] = vars();
        let a = unify(&x, 1);
        let b = unify(&x, 2);
        let c = unify_any(&x, [3, 4]);

        let left = amb([amb([a.clone(), b.clone()]), c.clone()]);
        let right = amb([a.clone(), amb([b.clone(), c.clone()])]);
        let flat = (a | b) | c;

        let expected = [1, 2, 3, 4].map(|n| vec![Term::from(n)]);
        assert_eq!(answers(&left, &[x.clone()]), expected);
        assert_eq!(answers(&right, &[x.clone()]), expected);
        assert_eq!(answers(&flat, &[x.clone()]), expected);
    }
}

mod lattice {
    use super::*;

    #[test]
    fn then_distributes_over_choice_on_the_right() {
        let [x, y] = vars();
        let shown = [x.clone(), y.clone()];
        let a = unify(&x, 1);
        let b = unify(&x, 2);
        let c = unify_any(&y, ["p", "q"]);

        let factored = seq([amb([a.clone(), b.clone()]), c.clone()]);
        let expanded = amb([seq([a, c.clone()]), seq([b, c])]);

        assert_eq!(answers(&factored, &shown), answers(&expanded, &shown));
    }

    #[test]
    fn choice_is_not_commutative() {
        let [x] = vars();
        let a = unify(&x, 1);
        let b = unify(&x, 2);

        let ab = answers(&(a.clone() | b.clone()), &[x.clone()]);
        let ba = answers(&(b | a), &[x.clone()]);

        assert_eq!(ab, [[Term::from(1)], [Term::from(2)]]);
        assert_eq!(ba, [[Term::from(2)], [Term::from(1)]]);
    }

    #[test]
    fn then_orders_solutions_by_the_first_goal() {
        let [x, y] = vars();
        let shown = [x.clone(), y.clone()];
        let a = unify_any(&x, [1, 2]);
        let b = unify_any(&y, [1, 2]);

        let xy = answers(&(a.clone() & b.clone()), &shown);
        let yx = answers(&(b & a), &shown);

        assert_eq!(xy[1], [Term::from(1), Term::from(2)]);
        assert_eq!(yx[1], [Term::from(2), Term::from(1)]);
    }
}

mod unification {
    use super::*;

    #[test]
    fn symmetric() {
        let [x, y] = vars();
        let shown = [x.clone(), y.clone()];
        let this = Term::from([Term::from(&x), Term::from("b")]);
        let that = Term::from([Term::from("a"), Term::from(&y)]);

        let forward = answers(&unify(&this, &that), &shown);
        let backward = answers(&unify(&that, &this), &shown);

        assert_eq!(forward, [[Term::from("a"), Term::from("b")]]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn idempotent() {
        let [x] = vars();
        let once = unify(&x, "a");
        let twice = once.clone() & once.clone();

        assert_eq!(answers(&once, &[x.clone()]), answers(&twice, &[x.clone()]));
    }

    #[test]
    fn mismatch_fails() {
        let [x] = vars();
        let goal = unify(&x, "a") & unify(&x, "b");

        assert_eq!(resolve(&goal).count(), 0);
        assert_eq!(resolve(&unify([1, 2], [1, 2, 3])).count(), 0);
        assert_eq!(resolve(&unify("a", 1)).count(), 0);
        assert_eq!(resolve(&unify(1, "a")).count(), 0);
        assert_eq!(resolve(&unify("a", "b")).count(), 0);
        assert_eq!(resolve(&unify("b", "a")).count(), 0);
    }

    #[test]
    fn equal_atoms_unify_either_way() {
        for (this, that) in [(Term::from("a"), Term::from("a")), (Term::from(7), Term::from(7))] {
            let forward = resolve(&unify(&this, &that)).collect::<Vec<_>>();
            let backward = resolve(&unify(&that, &this)).collect::<Vec<_>>();

            assert_eq!(forward.len(), 1);
            assert_eq!(backward.len(), 1);
            assert!(forward[0].is_empty());
            assert!(backward[0].is_empty());
        }
    }
}
