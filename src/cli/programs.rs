//! Built-in programs.
//!
//! Each program is a goal together with the variables of interest in a solution.

use std::collections::{BTreeMap, BTreeSet};

use yogic::{
    combinators::{amb, lazy, seq, unify, unify_any, Goal},
    structures::{term::Term, variable::Variable},
};

use crate::args;

pub struct Program {
    pub goal: Goal,
    pub shown: Vec<Variable>,
}

pub fn build(program: args::Program) -> Program {
    match program {
        args::Program::Family => family(),
        args::Program::Mortal => mortal(),
        args::Program::Append => append(),
        args::Program::Puzzle => puzzle(),
    }
}

fn family() -> Program {
    fn child(a: &Term, b: &Term) -> Goal {
        amb([
            unify([a, b], ["jim", "bob"]),
            unify([a, b], ["joe", "bob"]),
            unify([a, b], ["ian", "jim"]),
            unify([a, b], ["ann", "ian"]),
        ])
    }

    fn descendant(a: Term, c: Term) -> Goal {
        lazy(move || {
            let b = Term::from(Variable::fresh());
            child(&a, &c) | (child(&a, &b) & descendant(b, c.clone()))
        })
    }

    let [x, y] = ["x", "y"].map(Variable::named);
    Program {
        goal: descendant(Term::from(&x), Term::from(&y)),
        shown: vec![x, y],
    }
}

fn mortal() -> Program {
    fn human(a: &Term) -> Goal {
        unify_any(a, ["socrates", "plato", "archimedes"])
    }

    fn dog(a: &Term) -> Goal {
        unify_any(a, ["fluffy", "daisy", "fifi"])
    }

    fn child(a: &Term, b: &Term) -> Goal {
        amb([
            unify([a, b], ["jim", "fifi"]),
            unify([a, b], ["fluffy", "daisy"]),
        ])
    }

    fn mortal(a: Term) -> Goal {
        lazy(move || {
            let b = Term::from(Variable::fresh());
            human(&a) | dog(&a) | (child(&a, &b) & mortal(b))
        })
    }

    let x = Variable::named("x");
    let x_term = Term::from(&x);
    Program {
        goal: mortal(x_term.clone()) & !dog(&x_term),
        shown: vec![x],
    }
}

fn append() -> Program {
    fn append(a: Term, b: Term, c: Term) -> Goal {
        lazy(move || {
            let [head, tail, rest] = [(); 3].map(|_| Term::from(Variable::fresh()));
            let empty = unify(&a, Term::nil()) & unify(&b, &c);
            let cons = seq([
                unify(&a, [&head, &tail]),
                unify(&c, [&head, &rest]),
                append(tail.clone(), b.clone(), rest.clone()),
            ]);
            empty | cons
        })
    }

    let list = [1_i64, 2, 3, 4]
        .iter()
        .rev()
        .fold(Term::nil(), |tail, item| Term::from([Term::from(*item), tail]));

    let [x, y] = ["x", "y"].map(Variable::named);
    Program {
        goal: append(Term::from(&x), Term::from(&y), list),
        shown: vec![x, y],
    }
}

/// Groups of letters, each to be assigned the numbers given in some order.
const PUZZLE: [(&str, &[i64]); 5] = [
    ("adefjkl", &[2, 8, 6, 9, 1, 7, 4]),
    ("abcehij", &[11, 1, 12, 8, 4, 5, 10]),
    ("bcdefgh", &[5, 2, 9, 8, 11, 3, 10]),
    ("adfgijk", &[4, 6, 12, 1, 2, 9, 3]),
    ("bcghjl", &[3, 4, 7, 11, 5, 10]),
];

fn puzzle() -> Program {
    let letters = ('a'..='l')
        .map(|letter| Variable::named(&letter.to_string()))
        .collect::<Vec<_>>();

    // A number may only be placed at a letter which is in every group the number is given for.
    let mut candidates: BTreeMap<i64, BTreeSet<usize>> = BTreeMap::new();
    for (group, numbers) in PUZZLE {
        let group = group
            .bytes()
            .map(|letter| (letter - b'a') as usize)
            .collect::<BTreeSet<_>>();

        for number in numbers {
            candidates
                .entry(*number)
                .and_modify(|places| places.retain(|place| group.contains(place)))
                .or_insert_with(|| group.clone());
        }
    }

    let goal = seq(candidates.into_iter().map(|(number, places)| {
        unify_any(number, places.into_iter().map(|place| &letters[place]))
    }));

    Program {
        goal,
        shown: letters,
    }
}
