pub mod interpreter;

pub use interpreter::error::EvalError;
pub use interpreter::evaluate;
