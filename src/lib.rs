pub mod cnf;
pub mod error;
pub mod generate;
pub mod logic;
pub mod modes;
pub mod sat;
pub mod solver;

pub use error::{Error, Result, SyntaxError};
