pub mod expr;
pub mod lexer;
pub mod parser;

pub use expr::{BinOp, Expr};
pub use parser::parse;
