use std::fmt;

use indexmap::IndexSet;

/// A named, signed atom as it appears in clause text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    pub atom: String,
    pub negated: bool,
}

impl Literal {
    pub fn positive(atom: impl Into<String>) -> Self {
        Self {
            atom: atom.into(),
            negated: false,
        }
    }

    pub fn negative(atom: impl Into<String>) -> Self {
        Self {
            atom: atom.into(),
            negated: true,
        }
    }

    pub fn complement(&self) -> Self {
        Self {
            atom: self.atom.clone(),
            negated: !self.negated,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "!{}", self.atom)
        } else {
            write!(f, "{}", self.atom)
        }
    }
}

/// A disjunction of literals. Equality ignores literal order; the insertion
/// order is kept only so that printed clauses follow the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clause {
    lits: IndexSet<Literal>,
}

impl Clause {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the literal was already present.
    pub fn insert(&mut self, lit: Literal) -> bool {
        self.lits.insert(lit)
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.lits.iter()
    }

    pub fn len(&self) -> usize {
        self.lits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }

    pub fn contains(&self, lit: &Literal) -> bool {
        self.lits.contains(lit)
    }

    pub fn is_tautology(&self) -> bool {
        self.lits.iter().any(|l| !l.negated && self.lits.contains(&l.complement()))
    }

    pub fn eval(&self, value_of: &dyn Fn(&str) -> bool) -> bool {
        self.lits.iter().any(|l| value_of(&l.atom) != l.negated)
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Self {
            lits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, lit) in self.lits.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{lit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Clause, Literal};

    #[test]
    fn duplicates_collapse_and_order_is_ignored() {
        let a = [Literal::negative("P"), Literal::positive("Q"), Literal::negative("P")]
            .into_iter()
            .collect::<Clause>();
        let b = [Literal::positive("Q"), Literal::negative("P")]
            .into_iter()
            .collect::<Clause>();
        assert_eq!(a.len(), 2);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "!P Q");
    }

    #[test]
    fn tautology_needs_exact_atom() {
        let taut = [Literal::positive("A"), Literal::negative("A")]
            .into_iter()
            .collect::<Clause>();
        assert!(taut.is_tautology());

        // "A" is a prefix of "AB" but they are different atoms
        let not_taut = [Literal::positive("A"), Literal::negative("AB")]
            .into_iter()
            .collect::<Clause>();
        assert!(!not_taut.is_tautology());
    }
}
