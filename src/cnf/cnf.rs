use std::collections::BTreeSet;

use super::clause::{Clause, Literal};

/// A literal over an interned atom. `var` indexes `Cnf::atoms`, which is
/// sorted by name, so comparing vars compares atom names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lit {
    pub var: u32,
    pub sign: bool,
}

impl Lit {
    pub fn new(var: u32, sign: bool) -> Self {
        Self { var, sign }
    }

    pub fn neg(self) -> Self {
        Self {
            var: self.var,
            sign: !self.sign,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cnf {
    pub atoms: Vec<String>,
    pub clauses: Vec<Vec<Lit>>,
}

impl Cnf {
    /// Intern the atoms of `clauses` in ascending name order.
    pub fn from_clauses(clauses: &[Clause]) -> Self {
        let atoms = clauses
            .iter()
            .flat_map(|c| c.literals().map(|l| l.atom.clone()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();

        let mut cnf = Cnf {
            atoms,
            clauses: Vec::with_capacity(clauses.len()),
        };
        for clause in clauses {
            let lits = clause
                .literals()
                .filter_map(|l| cnf.lit_of(l))
                .collect::<Vec<_>>();
            cnf.clauses.push(lits);
        }
        cnf
    }

    pub fn num_vars(&self) -> usize {
        self.atoms.len()
    }

    pub fn var_of(&self, atom: &str) -> Option<u32> {
        self.atoms
            .binary_search_by(|a| a.as_str().cmp(atom))
            .ok()
            .map(|idx| idx as u32)
    }

    pub fn atom_name(&self, var: u32) -> &str {
        &self.atoms[var as usize]
    }

    fn lit_of(&self, lit: &Literal) -> Option<Lit> {
        self.var_of(&lit.atom).map(|v| Lit::new(v, !lit.negated))
    }

    pub fn to_literal(&self, lit: Lit) -> Literal {
        Literal {
            atom: self.atom_name(lit.var).to_owned(),
            negated: !lit.sign,
        }
    }

    pub fn eval_lit_partial(lit: Lit, assignment: &[Option<bool>]) -> Option<bool> {
        let var = lit.var as usize;
        if var >= assignment.len() {
            return None;
        }
        assignment[var].map(|v| if lit.sign { v } else { !v })
    }

    pub fn eval_clause_partial(clause: &[Lit], assignment: &[Option<bool>]) -> Option<bool> {
        let mut any_unknown = false;
        for &lit in clause {
            match Self::eval_lit_partial(lit, assignment) {
                Some(true) => return Some(true),
                Some(false) => {}
                None => any_unknown = true,
            }
        }
        if any_unknown { None } else { Some(false) }
    }

    pub fn eval_formula_partial(&self, assignment: &[Option<bool>]) -> Option<bool> {
        let mut all_true = true;
        for clause in &self.clauses {
            match Self::eval_clause_partial(clause, assignment) {
                Some(true) => {}
                Some(false) => return Some(false),
                None => all_true = false,
            }
        }
        if all_true { Some(true) } else { None }
    }

    /// Evaluate under a total model indexed by var.
    pub fn eval(&self, model: &[bool]) -> bool {
        let partial = model.iter().map(|&b| Some(b)).collect::<Vec<_>>();
        self.eval_formula_partial(&partial) == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cnf, Lit};
    use crate::cnf::clause::{Clause, Literal};

    #[test]
    fn interning_sorts_atoms() {
        let clauses = vec![
            [Literal::negative("q"), Literal::positive("b")]
                .into_iter()
                .collect::<Clause>(),
            [Literal::positive("a10"), Literal::positive("a2")]
                .into_iter()
                .collect::<Clause>(),
        ];
        let cnf = Cnf::from_clauses(&clauses);
        assert_eq!(cnf.atoms, vec!["a10", "a2", "b", "q"]);
        assert_eq!(cnf.clauses[0], vec![Lit::new(3, false), Lit::new(2, true)]);
        assert_eq!(cnf.to_literal(cnf.clauses[0][0]), Literal::negative("q"));
        assert_eq!(cnf.var_of("zz"), None);
    }

    #[test]
    fn partial_eval() {
        let cnf = Cnf {
            atoms: vec!["a".into(), "b".into()],
            clauses: vec![vec![Lit::new(0, true), Lit::new(1, false)]],
        };
        assert_eq!(cnf.eval_formula_partial(&[None, None]), None);
        assert_eq!(cnf.eval_formula_partial(&[Some(false), Some(true)]), Some(false));
        assert!(cnf.eval(&[false, false]));
    }
}
