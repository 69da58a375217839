use log::debug;
use thiserror::Error;

use crate::logic::expr::{BinOp, Expr};

use super::clause::{Clause, Literal};

/// Split a CNF expression into clauses, dropping tautologies.
///
/// Conjunctions are split wherever they occur on the outer spine; every
/// conjunct is read as a disjunction of literals. `to_cnf` output always has
/// that shape. Anything else under a disjunction (a connective below `!`, or
/// a conjunction) is not a literal and is returned as an error value.
pub fn extract(cnf: &Expr) -> Result<Vec<Clause>, NotCnf> {
    let mut conjuncts = Vec::new();
    collect(cnf, BinOp::And, &mut conjuncts);

    let mut out = Vec::with_capacity(conjuncts.len());
    for conjunct in conjuncts {
        let mut disjuncts = Vec::new();
        collect(conjunct, BinOp::Or, &mut disjuncts);

        let mut clause = Clause::new();
        for d in disjuncts {
            clause.insert(literal(d)?);
        }
        if clause.is_tautology() {
            debug!("dropped tautological clause: {clause}");
            continue;
        }
        out.push(clause);
    }
    Ok(out)
}

/// The subexpression that stopped clause extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a literal")]
pub struct NotCnf(pub Expr);

fn collect<'a>(expr: &'a Expr, op: BinOp, out: &mut Vec<&'a Expr>) {
    match expr {
        Expr::Binary {
            op: node_op,
            left,
            right,
        } if *node_op == op => {
            collect(left, op, out);
            collect(right, op, out);
        }
        _ => out.push(expr),
    }
}

fn literal(expr: &Expr) -> Result<Literal, NotCnf> {
    match expr {
        Expr::Atom(name) => Ok(Literal::positive(name.clone())),
        Expr::Not(inner) => match &**inner {
            Expr::Atom(name) => Ok(Literal::negative(name.clone())),
            _ => Err(NotCnf(expr.clone())),
        },
        Expr::Binary { .. } => Err(NotCnf(expr.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::{NotCnf, extract};
    use crate::cnf::convert::to_cnf;
    use crate::logic::parser::parse;

    fn clauses_of(src: &str) -> Vec<String> {
        let cnf = to_cnf(parse(src).expect("parse"));
        extract(&cnf)
            .expect("extract")
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn splits_on_and_then_or() {
        assert_eq!(clauses_of("A <=> B"), vec!["!A B", "!B A"]);
        assert_eq!(clauses_of("P => Q"), vec!["!P Q"]);
        assert_eq!(clauses_of("!P"), vec!["!P"]);
        assert_eq!(clauses_of("a & (b | !c) & d"), vec!["a", "b !c", "d"]);
    }

    #[test]
    fn tautologies_vanish() {
        assert!(clauses_of("A | !A").is_empty());
        assert_eq!(clauses_of("(A | !A) & B"), vec!["B"]);
        assert_eq!(clauses_of("A | A"), vec!["A"]);
    }

    #[test]
    fn rejects_unconverted_input() {
        let e = parse("A | !(B & C)").expect("parse");
        assert!(matches!(extract(&e), Err(NotCnf(_))));
    }
}
