use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    And,
    Or,
    Implies,
    Iff,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::And => "&",
            BinOp::Or => "|",
            BinOp::Implies => "=>",
            BinOp::Iff => "<=>",
        }
    }

    /// Binding strength, higher binds tighter. Negation sits above all of these.
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Iff => 1,
            BinOp::Implies => 2,
            BinOp::Or => 3,
            BinOp::And => 4,
        }
    }

    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            BinOp::And => a && b,
            BinOp::Or => a || b,
            BinOp::Implies => !a || b,
            BinOp::Iff => a == b,
        }
    }
}

/// A propositional sentence. Every node owns its children, so a rewrite
/// either moves a subtree into its new position or clones it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Atom(String),
    Not(Box<Expr>),
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn atom(name: impl Into<String>) -> Self {
        Expr::Atom(name.into())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: Expr) -> Self {
        Expr::Not(Box::new(inner))
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Self::binary(BinOp::And, left, right)
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Self::binary(BinOp::Or, left, right)
    }

    pub fn implies(left: Expr, right: Expr) -> Self {
        Self::binary(BinOp::Implies, left, right)
    }

    pub fn iff(left: Expr, right: Expr) -> Self {
        Self::binary(BinOp::Iff, left, right)
    }

    pub fn atoms(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        self.collect_atoms(&mut out);
        out
    }

    fn collect_atoms(&self, out: &mut BTreeSet<String>) {
        match self {
            Expr::Atom(name) => {
                out.insert(name.clone());
            }
            Expr::Not(inner) => inner.collect_atoms(out),
            Expr::Binary { left, right, .. } => {
                left.collect_atoms(out);
                right.collect_atoms(out);
            }
        }
    }

    pub fn eval(&self, value_of: &dyn Fn(&str) -> bool) -> bool {
        match self {
            Expr::Atom(name) => value_of(name),
            Expr::Not(inner) => !inner.eval(value_of),
            Expr::Binary { op, left, right } => {
                op.apply(left.eval(value_of), right.eval(value_of))
            }
        }
    }

    pub fn size(&self) -> usize {
        match self {
            Expr::Atom(_) => 1,
            Expr::Not(inner) => 1 + inner.size(),
            Expr::Binary { left, right, .. } => 1 + left.size() + right.size(),
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Atom(_) | Expr::Not(_) => u8::MAX,
            Expr::Binary { op, .. } => op.precedence(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Atom(name) => write!(f, "{name}"),
            Expr::Not(inner) => match **inner {
                Expr::Binary { .. } => write!(f, "!({inner})"),
                _ => write!(f, "!{inner}"),
            },
            Expr::Binary { op, left, right } => {
                let prec = op.precedence();
                // left-associative: only a strictly looser left child needs parens
                if left.precedence() < prec {
                    write!(f, "({left})")?;
                } else {
                    write!(f, "{left}")?;
                }
                write!(f, " {} ", op.symbol())?;
                if right.precedence() <= prec {
                    write!(f, "({right})")
                } else {
                    write!(f, "{right}")
                }
            }
        }
    }
}
