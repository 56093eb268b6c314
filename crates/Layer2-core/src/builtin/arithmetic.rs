//! Arithmetic - `(i64, i64) -> i64` 이항 연산
//!
//! 모든 연산은 checked 연산이며, 실패는 `ArithmeticError`로 반환됩니다.
//! 레지스트리는 이 에러를 변환하지 않고 그대로 호출자에게 전달합니다.

use crate::registry::{EntryMetadata, Registry};
use thiserror::Error;

/// 산술 연산 카테고리
pub const CATEGORY: &str = "arithmetic";

/// 이항 정수 연산 시그니처
pub type BinaryOp = dyn Fn(i64, i64) -> Result<i64, ArithmeticError> + Send + Sync;

/// 산술 연산 레지스트리
pub type ArithmeticRegistry = Registry<String, BinaryOp>;

/// 산술 연산 실패
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Integer overflow in {op}")]
    Overflow { op: &'static str },
}

pub fn plus(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    a.checked_add(b).ok_or(ArithmeticError::Overflow { op: "plus" })
}

pub fn minus(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    a.checked_sub(b).ok_or(ArithmeticError::Overflow { op: "minus" })
}

pub fn multiply(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    a.checked_mul(b).ok_or(ArithmeticError::Overflow { op: "multiply" })
}

/// 정수 나눗셈 (0 방향 절사)
pub fn divide(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    if b == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    a.checked_div(b).ok_or(ArithmeticError::Overflow { op: "divide" })
}

type OpFn = fn(i64, i64) -> Result<i64, ArithmeticError>;

/// (이름, 설명, 함수)
const OPERATIONS: [(&str, &str, OpFn); 4] = [
    ("plus", "a + b", plus),
    ("minus", "a - b", minus),
    ("multiply", "a * b", multiply),
    ("divide", "a / b (truncating)", divide),
];

/// 기존 레지스트리에 산술 연산 등록
pub fn register_arithmetic(registry: &mut ArithmeticRegistry) {
    for (name, description, op) in OPERATIONS {
        registry.register_with(
            name.to_string(),
            op,
            EntryMetadata::new(name)
                .with_category(CATEGORY)
                .with_description(description),
        );
    }
}

/// 산술 연산이 등록된 레지스트리 생성
pub fn arithmetic_registry() -> ArithmeticRegistry {
    let mut registry = Registry::named(CATEGORY);
    register_arithmetic(&mut registry);
    registry
}
