use log::debug;

/// Receives search events from the DPLL solver. All methods default to no-ops.
pub trait SearchObserver {
    fn unit(&mut self, _atom: &str, _value: bool) {}
    fn pure(&mut self, _atom: &str, _value: bool) {}
    fn guess(&mut self, _atom: &str, _value: bool, _depth: usize) {}
    fn backtrack(&mut self, _atom: &str, _depth: usize) {}
    fn conflict(&mut self, _depth: usize) {}
    fn defaulted(&mut self, _atom: &str) {}
}

impl SearchObserver for () {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    pub solve_calls: usize,
    pub decisions: usize,
    pub backtracks: usize,
    pub unit_propagations: usize,
    pub pure_literals: usize,
    pub conflicts: usize,
    pub max_depth: usize,
}

impl SearchObserver for SolverStats {
    fn unit(&mut self, _atom: &str, _value: bool) {
        self.unit_propagations += 1;
    }

    fn pure(&mut self, _atom: &str, _value: bool) {
        self.pure_literals += 1;
    }

    fn guess(&mut self, _atom: &str, _value: bool, depth: usize) {
        self.decisions += 1;
        self.max_depth = self.max_depth.max(depth + 1);
    }

    fn backtrack(&mut self, _atom: &str, _depth: usize) {
        self.backtracks += 1;
    }

    fn conflict(&mut self, _depth: usize) {
        self.conflicts += 1;
    }
}

/// Logs every event at debug level and keeps counters.
#[derive(Debug, Clone, Default)]
pub struct LogObserver {
    pub stats: SolverStats,
}

impl SearchObserver for LogObserver {
    fn unit(&mut self, atom: &str, value: bool) {
        debug!("easy case (unit): {atom}={value}");
        self.stats.unit(atom, value);
    }

    fn pure(&mut self, atom: &str, value: bool) {
        debug!("easy case (pure): {atom}={value}");
        self.stats.pure(atom, value);
    }

    fn guess(&mut self, atom: &str, value: bool, depth: usize) {
        debug!("hard guess at depth {depth}: {atom}={value}");
        self.stats.guess(atom, value, depth);
    }

    fn backtrack(&mut self, atom: &str, depth: usize) {
        debug!("failed hard guess at depth {depth}: try {atom}=false");
        self.stats.backtrack(atom, depth);
    }

    fn conflict(&mut self, depth: usize) {
        debug!("empty clause at depth {depth}");
        self.stats.conflict(depth);
    }

    fn defaulted(&mut self, atom: &str) {
        debug!("unbound default case: {atom}=false");
    }
}
