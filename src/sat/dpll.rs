use std::collections::BTreeMap;

use crate::cnf::cnf::{Cnf, Lit};

use super::assignment::{Assignment, SatResult, Value};
use super::observer::SearchObserver;

pub fn solve(cnf: &Cnf) -> SatResult {
    solve_with(cnf, &mut ())
}

pub fn is_sat(cnf: &Cnf) -> bool {
    solve(cnf).is_sat()
}

/// Run DPLL over `cnf`, reporting every deduction, guess and conflict to
/// `observer`.
pub fn solve_with(cnf: &Cnf, observer: &mut dyn SearchObserver) -> SatResult {
    let state = State {
        clauses: cnf.clauses.clone(),
        values: vec![Value::Unbound; cnf.num_vars()],
    };
    let mut search = Search { cnf, observer };
    match search.run(state, 0) {
        Some(model) => SatResult::Sat(Assignment::new(cnf.atoms.clone(), model)),
        None => SatResult::Unsat,
    }
}

/// The working clause set and assignment of one branch. Guessing clones it, so
/// sibling branches never share state.
#[derive(Debug, Clone)]
struct State {
    clauses: Vec<Vec<Lit>>,
    values: Vec<Value>,
}

impl State {
    fn bind(&mut self, lit: Lit) {
        self.values[lit.var as usize] = Value::from_bool(lit.sign);
    }

    /// `lit` is now true: drop satisfied clauses, strip its complement.
    fn propagate(&mut self, lit: Lit) {
        self.eliminate(lit);
        let neg = lit.neg();
        for clause in &mut self.clauses {
            clause.retain(|&l| l != neg);
        }
    }

    fn eliminate(&mut self, lit: Lit) {
        self.clauses.retain(|clause| !clause.contains(&lit));
    }

    fn first_unit(&self) -> Option<Lit> {
        self.clauses
            .iter()
            .find(|clause| clause.len() == 1)
            .map(|clause| clause[0])
    }

    /// Literals whose atom occurs with a single polarity, by ascending atom.
    fn pure_literals(&self) -> Vec<Lit> {
        let mut seen = BTreeMap::<u32, (bool, bool)>::new();
        for &lit in self.clauses.iter().flatten() {
            let entry = seen.entry(lit.var).or_default();
            if lit.sign {
                entry.0 = true;
            } else {
                entry.1 = true;
            }
        }
        seen.into_iter()
            .filter(|(_, (pos, neg))| pos != neg)
            .map(|(var, (pos, _))| Lit::new(var, pos))
            .collect()
    }

    fn first_unbound(&self) -> Option<u32> {
        self.values
            .iter()
            .position(|&v| v == Value::Unbound)
            .map(|idx| idx as u32)
    }
}

struct Search<'a> {
    cnf: &'a Cnf,
    observer: &'a mut dyn SearchObserver,
}

impl Search<'_> {
    fn run(&mut self, mut state: State, depth: usize) -> Option<Vec<bool>> {
        let cnf = self.cnf;
        loop {
            if state.clauses.is_empty() {
                return Some(self.finish(&state.values));
            }
            if state.clauses.iter().any(Vec::is_empty) {
                self.observer.conflict(depth);
                return None;
            }

            let mut easy_case = false;
            if let Some(lit) = state.first_unit() {
                self.observer.unit(cnf.atom_name(lit.var), lit.sign);
                state.bind(lit);
                state.propagate(lit);
                easy_case = true;
            }
            for lit in state.pure_literals() {
                self.observer.pure(cnf.atom_name(lit.var), lit.sign);
                state.bind(lit);
                state.eliminate(lit);
                easy_case = true;
            }
            if !easy_case {
                break;
            }
        }

        // clauses remain and only mention unbound atoms
        let var = state.first_unbound()?;
        let name = cnf.atom_name(var);

        self.observer.guess(name, true, depth);
        let mut try_true = state.clone();
        let lit = Lit::new(var, true);
        try_true.bind(lit);
        try_true.propagate(lit);
        if let Some(model) = self.run(try_true, depth + 1) {
            return Some(model);
        }

        self.observer.backtrack(name, depth);
        let lit = lit.neg();
        state.bind(lit);
        state.propagate(lit);
        self.run(state, depth + 1)
    }

    fn finish(&mut self, values: &[Value]) -> Vec<bool> {
        let cnf = self.cnf;
        values
            .iter()
            .enumerate()
            .map(|(var, v)| {
                v.as_bool().unwrap_or_else(|| {
                    self.observer.defaulted(cnf.atom_name(var as u32));
                    false
                })
            })
            .collect()
    }
}
