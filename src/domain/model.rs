use std::ops::Mul;

/// Primitive numeric conversion with `as` semantics.
pub trait CastTo<U> {
    fn cast_to(self) -> U;
}

macro_rules! impl_cast_to {
    (@to $from:ty; $($to:ty),*) => {
        $(
            impl CastTo<$to> for $from {
                #[inline]
                fn cast_to(self) -> $to {
                    self as $to
                }
            }
        )*
    };
    ($($from:ty),* $(,)?) => {
        $(
            impl_cast_to!(@to $from; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
        )*
    };
}

impl_cast_to!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Holds a single value and scales it into the multiplier's type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container<T> {
    value: T,
}

impl<T: Copy> Container<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn value(&self) -> T {
        self.value
    }

    /// Returns `(value as U) * multiplier`.
    #[inline(never)]
    pub fn transform<U>(&self, multiplier: U) -> U
    where
        T: CastTo<U>,
        U: Mul<Output = U>,
    {
        self.value.cast_to() * multiplier
    }
}
