use log::{debug, trace};

use crate::logic::expr::{BinOp, Expr};

/// Rewrite `expr` into an equivalent conjunction of disjunctions of literals.
///
/// One pass walks the tree top-down, rewriting each node before its children.
/// Passes repeat until one leaves the tree unchanged.
pub fn to_cnf(expr: Expr) -> Expr {
    let mut current = expr;
    let mut passes = 0usize;
    loop {
        let next = rewrite(current.clone());
        passes += 1;
        if next == current {
            debug!("cnf fixpoint after {passes} passes: {next}");
            return next;
        }
        trace!("pass {passes}: {next}");
        current = next;
    }
}

/// A single top-down pass.
pub fn rewrite(expr: Expr) -> Expr {
    match expr {
        Expr::Atom(_) => expr,
        Expr::Binary { .. } => {
            let node = distribute(eliminate_implies(eliminate_iff(expr)));
            match node {
                Expr::Binary { op, left, right } => Expr::Binary {
                    op,
                    left: Box::new(rewrite(*left)),
                    right: Box::new(rewrite(*right)),
                },
                other => rewrite(other),
            }
        }
        Expr::Not(_) => match push_negation(expr) {
            Expr::Not(inner) => Expr::Not(Box::new(rewrite(*inner))),
            other => rewrite(other),
        },
    }
}

/// `A <=> B` becomes `(A => B) & (B => A)`.
pub fn eliminate_iff(expr: Expr) -> Expr {
    match expr {
        Expr::Binary {
            op: BinOp::Iff,
            left,
            right,
        } => {
            let node = Expr::and(
                Expr::implies((*left).clone(), (*right).clone()),
                Expr::implies(*right, *left),
            );
            debug!("eliminated <=>: {node}");
            node
        }
        other => other,
    }
}

/// `A => B` becomes `!A | B`.
pub fn eliminate_implies(expr: Expr) -> Expr {
    match expr {
        Expr::Binary {
            op: BinOp::Implies,
            left,
            right,
        } => {
            let node = Expr::or(Expr::Not(left), *right);
            debug!("eliminated =>: {node}");
            node
        }
        other => other,
    }
}

/// De Morgan on a negated conjunction or disjunction, and `!!A` to `A`.
pub fn push_negation(expr: Expr) -> Expr {
    let Expr::Not(inner) = expr else {
        return expr;
    };
    let node = match *inner {
        Expr::Binary {
            op: BinOp::And,
            left,
            right,
        } => Expr::or(Expr::Not(left), Expr::Not(right)),
        Expr::Binary {
            op: BinOp::Or,
            left,
            right,
        } => Expr::and(Expr::Not(left), Expr::Not(right)),
        Expr::Not(target) => *target,
        other => return Expr::Not(Box::new(other)),
    };
    debug!("applied de morgan: {node}");
    node
}

/// `A | (B & C)` and `(B & C) | A` both become `(A | B) & (A | C)`.
pub fn distribute(expr: Expr) -> Expr {
    let Expr::Binary {
        op: BinOp::Or,
        left,
        right,
    } = expr
    else {
        return expr;
    };
    let (a, b, c) = match (*left, *right) {
        (
            a,
            Expr::Binary {
                op: BinOp::And,
                left: b,
                right: c,
            },
        ) => (a, *b, *c),
        (
            Expr::Binary {
                op: BinOp::And,
                left: b,
                right: c,
            },
            a,
        ) => (a, *b, *c),
        (left, right) => return Expr::or(left, right),
    };
    let node = Expr::and(Expr::or(a.clone(), b), Expr::or(a, c));
    debug!("distributed |: {node}");
    node
}

#[cfg(test)]
mod tests {
    use super::{distribute, push_negation, rewrite, to_cnf};
    use crate::logic::expr::Expr;
    use crate::logic::parser::parse;

    fn cnf_of(src: &str) -> String {
        to_cnf(parse(src).expect("parse")).to_string()
    }

    #[test]
    fn iff_becomes_two_implications() {
        assert_eq!(cnf_of("A <=> B"), "(!A | B) & (!B | A)");
    }

    #[test]
    fn implication_and_negated_implication() {
        assert_eq!(cnf_of("P => Q"), "!P | Q");
        assert_eq!(cnf_of("!(P => Q)"), "P & !Q");
    }

    #[test]
    fn distribution_puts_single_side_first() {
        assert_eq!(cnf_of("(B & C) | A"), "(A | B) & (A | C)");
        assert_eq!(cnf_of("A | B & C"), "(A | B) & (A | C)");
    }

    #[test]
    fn de_morgan_rules() {
        assert_eq!(
            push_negation(parse("!(A & B)").expect("parse")).to_string(),
            "!A | !B"
        );
        assert_eq!(
            push_negation(parse("!(A | B)").expect("parse")).to_string(),
            "!A & !B"
        );
        assert_eq!(push_negation(parse("!!A").expect("parse")), Expr::atom("A"));
        assert_eq!(push_negation(parse("!A").expect("parse")).to_string(), "!A");
        assert_eq!(cnf_of("!!!A"), "!A");
    }

    #[test]
    fn distribute_leaves_other_nodes() {
        let e = parse("A | B").expect("parse");
        assert_eq!(distribute(e.clone()), e);
        let e = parse("A & (B | C)").expect("parse");
        assert_eq!(distribute(e.clone()), e);
    }

    #[test]
    fn cnf_is_a_fixpoint_of_rewrite() {
        let e = to_cnf(parse("(A <=> B) | !(C & D => E)").expect("parse"));
        assert_eq!(rewrite(e.clone()), e);
    }
}
