use varisat::ExtendFormula;

use crate::cnf::cnf::{Cnf, Lit};
use crate::error::{Error, Result};
use crate::sat::assignment::{Assignment, SatResult};
use crate::solver::{SatBackend, SolverStats};

/// Reference backend: hands the clauses to varisat's CDCL solver. Used to
/// cross-check the DPLL search, never as a replacement for it.
#[derive(Debug, Clone, Default)]
pub struct VarisatBackend {
    stats: SolverStats,
}

impl VarisatBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

fn to_lit(vars: &[varisat::Var], lit: Lit) -> varisat::Lit {
    varisat::Lit::from_var(vars[lit.var as usize], lit.sign)
}

impl SatBackend for VarisatBackend {
    fn solve(&mut self, cnf: &Cnf) -> Result<SatResult> {
        self.stats.solve_calls += 1;

        let mut inner = varisat::Solver::new();
        let vars = (0..cnf.num_vars())
            .map(|_| inner.new_var())
            .collect::<Vec<_>>();
        for clause in &cnf.clauses {
            let lits = clause
                .iter()
                .map(|&l| to_lit(&vars, l))
                .collect::<Vec<_>>();
            inner.add_clause(&lits);
        }

        match inner.solve() {
            Ok(true) => {}
            Ok(false) => return Ok(SatResult::Unsat),
            Err(e) => return Err(Error::Internal(format!("varisat: {e}"))),
        }

        let model = inner
            .model()
            .ok_or_else(|| Error::Internal("varisat reported sat without a model".into()))?;
        let values = vars
            .iter()
            .map(|&v| model.contains(&v.lit(true)))
            .collect::<Vec<_>>();
        Ok(SatResult::Sat(Assignment::new(cnf.atoms.clone(), values)))
    }

    fn stats(&self) -> SolverStats {
        self.stats
    }

    fn backend_name(&self) -> &'static str {
        "varisat"
    }
}
