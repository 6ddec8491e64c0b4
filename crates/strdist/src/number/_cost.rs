//! A `Cost` is the numeric type of edit penalties and of the distances built
//! from them.

use core::{
    fmt::{Debug, Display},
    ops::{Add, Div, Sub},
};

/// Edit penalties and distances are accumulated as `Cost`s.
///
/// Costs are added with ordinary floating point addition. Nothing is rounded
/// or clamped, and non-negativity is left to the caller.
///
/// `Sub` is only used to turn a normalized distance into a similarity.
pub trait Cost:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Div<Output = Self>
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
    /// The additive identity.
    const ZERO: Self;

    /// The cost of a single edit under the unit cost model.
    const ONE: Self;

    /// The largest finite value. Identity for minimum-reduction.
    const MAX: Self;

    /// The most negative finite value. Identity for maximum-reduction.
    const MIN: Self;
}

/// Macro to implement `Cost` for the floating point types.
macro_rules! impl_cost {
    ($($ty:ty),*) => {
        $(
            impl Cost for $ty {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const MAX: Self = <$ty>::MAX;
                const MIN: Self = <$ty>::MIN;
            }
        )*
    }
}

impl_cost!(f32, f64);
