//! Registry 시나리오 테스트 - 등록/조회/호출/덮어쓰기
//!
//! `cargo test -p dyncall-core --test registry_scenarios`

use dyncall_core::{arithmetic_registry, ArithmeticError, Error, Registry};

#[test]
fn test_builtin_operations() {
    let registry = arithmetic_registry();

    assert_eq!(registry.invoke("plus", (3, 4)).unwrap(), Ok(7));
    assert_eq!(registry.invoke("minus", (10, 4)).unwrap(), Ok(6));
    assert_eq!(registry.invoke("multiply", (5, 6)).unwrap(), Ok(30));
    assert_eq!(registry.invoke("divide", (20, 4)).unwrap(), Ok(5));
}

#[test]
fn test_unknown_operation() {
    let registry = arithmetic_registry();

    match registry.invoke("modulo", (10, 3)) {
        Err(Error::FunctionNotFound(id)) => assert_eq!(id, "modulo"),
        other => panic!("expected FunctionNotFound, got {:?}", other),
    }
}

#[test]
fn test_overwrite_plus() {
    let mut registry = arithmetic_registry();
    registry.register("plus".to_string(), |a: i64, b: i64| Ok(a + b + 1));

    assert_eq!(registry.invoke("plus", (3, 4)).unwrap(), Ok(8));
    assert_eq!(registry.len(), 4);
}

#[test]
fn test_divide_by_zero_is_callee_failure() {
    let registry = arithmetic_registry();

    // 조회는 성공, callee의 실패가 그대로 전달됨
    let result = registry.invoke("divide", (5, 0)).expect("divide is registered");
    assert_eq!(result, Err(ArithmeticError::DivisionByZero));
}

#[test]
fn test_invoke_equals_lookup_then_call() {
    let registry = arithmetic_registry();
    let pairs = [(0, 1), (7, -3), (-20, 6), (i64::MAX, 1)];

    for id in registry.ids() {
        let f = registry.lookup(id.as_str()).unwrap();
        for (a, b) in pairs {
            assert_eq!(registry.invoke(id.as_str(), (a, b)).unwrap(), f(a, b));
        }
    }
}

#[test]
fn test_every_registration_is_retrievable() {
    let mut registry: Registry<u32, dyn Fn(u32) -> u32> = Registry::new();
    for id in 0..16u32 {
        registry.register(id, move |x: u32| x + id);
    }

    for id in 0..16u32 {
        assert_eq!(registry.invoke(&id, (1,)).unwrap(), 1 + id);
    }
    match registry.lookup(&16u32) {
        Err(Error::FunctionNotFound(id)) => assert_eq!(id, "16"),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("16 should not be registered"),
    }
}
