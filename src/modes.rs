use log::{debug, info};

use crate::cnf::clause::Clause;
use crate::cnf::cnf::Cnf;
use crate::cnf::convert::to_cnf;
use crate::cnf::extract::extract;
use crate::cnf::text::{input_lines, parse_clause_line, to_text};
use crate::error::{Error, Result};
use crate::logic::parser::parse;
use crate::sat::assignment::SatResult;
use crate::solver::SatBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// BNF sentences in, clause lines out.
    Cnf,
    /// Clause lines in, assignment out.
    Dpll,
    /// BNF sentences in, assignment out.
    Solve,
}

/// Convert every sentence of `text` and concatenate the clauses in input order.
pub fn convert_lines(text: &str) -> Result<Vec<Clause>> {
    let mut out = Vec::new();
    for (line_no, line) in input_lines(text) {
        debug!("converting sentence: {line}");
        let expr = parse(line).map_err(|error| Error::Syntax {
            line: line_no,
            error,
        })?;
        let cnf = to_cnf(expr);
        let clauses = extract(&cnf)
            .map_err(|e| Error::Internal(format!("line {line_no}: {e}")))?;
        for clause in &clauses {
            debug!("result: {clause}");
        }
        out.extend(clauses);
    }
    Ok(out)
}

/// Read clause lines. Every line is validated before any solving starts.
pub fn read_clause_lines(text: &str) -> Result<Vec<Clause>> {
    input_lines(text)
        .into_iter()
        .map(|(line_no, line)| parse_clause_line(line_no, line))
        .collect()
}

pub fn solve_clauses(clauses: &[Clause], backend: &mut dyn SatBackend) -> Result<SatResult> {
    let cnf = Cnf::from_clauses(clauses);
    info!(
        "solving atoms={} clauses={} backend={}",
        cnf.num_vars(),
        cnf.clauses.len(),
        backend.backend_name()
    );
    backend.solve(&cnf)
}

/// Run one mode over the whole input and return the text it prints.
pub fn run(mode: Mode, text: &str, backend: &mut dyn SatBackend) -> Result<String> {
    let out = match mode {
        Mode::Cnf => to_text(&convert_lines(text)?),
        Mode::Dpll => solve_clauses(&read_clause_lines(text)?, backend)?.to_string(),
        Mode::Solve => solve_clauses(&convert_lines(text)?, backend)?.to_string(),
    };
    Ok(out)
}
