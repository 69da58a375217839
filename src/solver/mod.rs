pub mod dpll_backend;
pub mod varisat;

use std::fmt;
use std::str::FromStr;

use crate::cnf::cnf::Cnf;
use crate::error::Result;
use crate::sat::assignment::SatResult;

pub use crate::sat::observer::SolverStats;

pub trait SatBackend {
    fn solve(&mut self, cnf: &Cnf) -> Result<SatResult>;
    fn stats(&self) -> SolverStats;
    fn backend_name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Dpll,
    Varisat,
}

impl Backend {
    pub fn build(self) -> Box<dyn SatBackend> {
        match self {
            Backend::Dpll => Box::new(self::dpll_backend::DpllBackend::new()),
            Backend::Varisat => Box::new(self::varisat::VarisatBackend::new()),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "dpll" => Ok(Backend::Dpll),
            "varisat" => Ok(Backend::Varisat),
            _ => Err(format!("unknown backend '{}', expected dpll|varisat", s)),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Dpll => write!(f, "dpll"),
            Backend::Varisat => write!(f, "varisat"),
        }
    }
}
