//! Builtin operations - 기본 제공 함수 모음
//!
//! - `arithmetic`: plus / minus / multiply / divide (`(i64, i64) -> i64`, checked)

pub mod arithmetic;

pub use arithmetic::{
    arithmetic_registry, register_arithmetic, ArithmeticError, ArithmeticRegistry, BinaryOp,
};
