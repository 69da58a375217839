pub mod assignment;
pub mod dpll;
pub mod observer;

pub use assignment::{Assignment, SatResult, UNSAT_TEXT, Value};
pub use dpll::{solve, solve_with};
pub use observer::{LogObserver, SearchObserver, SolverStats};
