// ============================================================================
// Engine Module
// Named-operation dispatch over textual operands
// ============================================================================

mod errors;
mod evaluator;
mod operation;

pub use errors::{CalcError, CalcResult};
pub use evaluator::{evaluate, evaluate_named, Value};
pub use operation::{OperandKind, Operation};
