use proptest::prelude::*;

use propsat::cnf::clause::Clause;
use propsat::cnf::convert::to_cnf;
use propsat::cnf::extract::extract;
use propsat::logic::expr::Expr;
use propsat::logic::parser::parse;

const ATOMS: [&str; 4] = ["A", "B", "C", "D"];

fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop::sample::select(ATOMS.to_vec()).prop_map(Expr::atom);
    leaf.prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Expr::not),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::and(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::or(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::implies(l, r)),
            (inner.clone(), inner).prop_map(|(l, r)| Expr::iff(l, r)),
        ]
    })
}

fn all_valuations() -> impl Iterator<Item = impl Fn(&str) -> bool> {
    (0u32..1 << ATOMS.len()).map(|mask| {
        move |name: &str| {
            let idx = ATOMS.iter().position(|&a| a == name).unwrap_or(0);
            mask & (1 << idx) != 0
        }
    })
}

fn clauses_hold(clauses: &[Clause], value_of: &dyn Fn(&str) -> bool) -> bool {
    clauses.iter().all(|c| c.eval(value_of))
}

proptest! {
    #[test]
    fn conversion_preserves_truth(e in arb_expr()) {
        let cnf = to_cnf(e.clone());
        for v in all_valuations() {
            prop_assert_eq!(e.eval(&v), cnf.eval(&v));
        }
    }

    #[test]
    fn conversion_is_idempotent(e in arb_expr()) {
        let once = to_cnf(e);
        let twice = to_cnf(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn conversion_adds_no_atoms(e in arb_expr()) {
        let atoms = e.atoms();
        prop_assert!(to_cnf(e).atoms().is_subset(&atoms));
    }

    #[test]
    fn extracted_clauses_match_the_sentence(e in arb_expr()) {
        let clauses = extract(&to_cnf(e.clone())).expect("cnf output is clause-shaped");
        for c in &clauses {
            prop_assert!(!c.is_empty());
            prop_assert!(!c.is_tautology());
        }
        for v in all_valuations() {
            prop_assert_eq!(e.eval(&v), clauses_hold(&clauses, &v));
        }
    }

    #[test]
    fn printed_form_reparses(e in arb_expr()) {
        prop_assert_eq!(parse(&e.to_string()).expect("reparse"), e);
    }
}

#[test]
fn excluded_middle_extracts_to_nothing() {
    let clauses = extract(&to_cnf(parse("A | !A").expect("parse"))).expect("extract");
    assert!(clauses.is_empty());
}

#[test]
fn nested_distribution_reaches_cnf() {
    let e = parse("(A & B) | (C & D)").expect("parse");
    let clauses = extract(&to_cnf(e)).expect("extract");
    let text = clauses.iter().map(|c| c.to_string()).collect::<Vec<_>>();
    assert_eq!(text, vec!["C A", "C B", "D A", "D B"]);
}
