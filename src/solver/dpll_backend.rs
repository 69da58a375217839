use crate::cnf::cnf::Cnf;
use crate::error::Result;
use crate::sat::assignment::SatResult;
use crate::sat::dpll::solve_with;
use crate::sat::observer::LogObserver;
use crate::solver::{SatBackend, SolverStats};

#[derive(Debug, Clone, Default)]
pub struct DpllBackend {
    observer: LogObserver,
}

impl DpllBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SatBackend for DpllBackend {
    fn solve(&mut self, cnf: &Cnf) -> Result<SatResult> {
        self.observer.stats.solve_calls += 1;
        Ok(solve_with(cnf, &mut self.observer))
    }

    fn stats(&self) -> SolverStats {
        self.observer.stats
    }

    fn backend_name(&self) -> &'static str {
        "dpll"
    }
}
