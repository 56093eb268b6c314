//! Signature - 레지스트리가 보관하는 callable의 고정 시그니처
//!
//! 하나의 `Registry`는 정확히 하나의 시그니처(`dyn Fn(A, B, ..) -> R`)로
//! 파라미터화됩니다. 서로 다른 시그니처는 서로 다른 레지스트리 인스턴스가
//! 필요합니다 (type-erased 저장 없음).
//!
//! ```ignore
//! type BinaryOp = dyn Fn(i32, i32) -> i32;
//!
//! let f: Arc<BinaryOp> = (|a: i32, b: i32| a + b).into_callable();
//! assert_eq!(f.call_with((3, 4)), 7);
//! ```

use std::sync::Arc;

/// 호출 가능한 시그니처 - 인자를 튜플로 받아 호출
pub trait Signature {
    /// 인자 튜플 (`(A, B, ..)`)
    type Args;

    /// 반환 타입
    type Output;

    /// 인자 튜플로 호출
    fn call_with(&self, args: Self::Args) -> Self::Output;
}

/// 시그니처 `F`에 맞는 callable로 변환 (closure, fn item)
pub trait IntoCallable<F: ?Sized> {
    fn into_callable(self) -> Arc<F>;
}

macro_rules! impl_signature {
    (@object [$($bounds:tt)*] $($arg:ident $val:ident),*) => {
        impl<R $(, $arg)*> Signature for dyn Fn($($arg),*) -> R $($bounds)* {
            type Args = ($($arg,)*);
            type Output = R;

            #[inline]
            fn call_with(&self, ($($val,)*): Self::Args) -> R {
                self($($val),*)
            }
        }

        impl<Func, R $(, $arg)*> IntoCallable<dyn Fn($($arg),*) -> R $($bounds)*> for Func
        where
            Func: Fn($($arg),*) -> R $($bounds)* + 'static,
        {
            fn into_callable(self) -> Arc<dyn Fn($($arg),*) -> R $($bounds)*> {
                Arc::new(self)
            }
        }
    };
    ($($arg:ident $val:ident),*) => {
        impl_signature!(@object [] $($arg $val),*);
        impl_signature!(@object [+ Send + Sync] $($arg $val),*);
    };
}

impl_signature!();
impl_signature!(A a);
impl_signature!(A a, B b);
impl_signature!(A a, B b, C c);
impl_signature!(A a, B b, C c, D d);
impl_signature!(A a, B b, C c, D d, E e);
impl_signature!(A a, B b, C c, D d, E e, G g);
