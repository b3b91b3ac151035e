use thiserror::Error;


/// Raised when a function stays undefined after the guard nudge.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("function undefined at x={x} (f(x)={fx}) and at nudged x={nudged} (f(x)={f_nudged})")]
    Undefined { x: f64, fx: f64, nudged: f64, f_nudged: f64 },
}
