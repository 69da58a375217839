pub mod clause;
#[allow(clippy::module_inception)]
pub mod cnf;
pub mod convert;
pub mod extract;
pub mod text;

pub use clause::{Clause, Literal};
pub use cnf::{Cnf, Lit};
pub use convert::to_cnf;
pub use extract::extract;
