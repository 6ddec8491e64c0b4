//! The `Cost` trait is used to represent the values of edit penalties.
//!
//! We provide implementations for the primitive floating point numbers: `f32`
//! and `f64`.
//!
//! The reduction helpers in this module are what the dynamic programming
//! recurrence uses to pick the cheapest edit at each cell.

mod _cost;

pub use _cost::Cost;

/// Returns the smallest of three costs, preferring earlier arguments on ties.
///
/// # Examples
///
/// ```
/// use strdist::number::min3;
///
/// assert_eq!(min3(3.0, 1.5, 2.0), 1.5);
/// assert_eq!(min3(1.0_f32, 1.0, 1.0), 1.0);
/// ```
#[must_use]
pub fn min3<F: Cost>(a: F, b: F, c: F) -> F {
    let mut min = a;
    if b < min {
        min = b;
    }
    if c < min {
        min = c;
    }
    min
}

/// Returns the larger of two costs, preferring the first on ties.
#[must_use]
pub fn max2<F: Cost>(a: F, b: F) -> F {
    if a < b {
        b
    } else {
        a
    }
}

/// Returns the smallest cost in `costs`, or `F::MAX` if there are none.
///
/// # Examples
///
/// ```
/// use strdist::number::{min_of, Cost};
///
/// assert_eq!(min_of([4.0, 2.5, 7.0]), 2.5);
/// assert_eq!(min_of(Vec::<f64>::new()), <f64 as Cost>::MAX);
/// ```
pub fn min_of<F: Cost, I: IntoIterator<Item = F>>(costs: I) -> F {
    costs.into_iter().fold(F::MAX, |min, c| if c < min { c } else { min })
}

/// Returns the largest cost in `costs`, or `F::MIN` if there are none.
pub fn max_of<F: Cost, I: IntoIterator<Item = F>>(costs: I) -> F {
    costs.into_iter().fold(F::MIN, |max, c| if c > max { c } else { max })
}
