//! Convenience value transforms for [`apply`](crate::StepVector::apply) and
//! [`apply_range`](crate::StepVector::apply_range).
//!
//! ```
//! use stepvec::{StepVector, mutators};
//!
//! let mut v = StepVector::new(0, 4, 1.5).unwrap();
//! v.apply_range(2, 4, mutators::increment).unwrap();
//! assert_eq!(v.to_string(), "[0:1.5 2:2.5 4:<nil>]");
//! ```

use num_traits::One;
use std::ops::{Add, Sub};

/// Returns `value + 1`.
///
/// Integer overflow follows the usual arithmetic rules of `T`.
pub fn increment<T>(value: &T) -> T
where
    T: Copy + One + Add<Output = T>,
{
    *value + T::one()
}

/// Returns `value - 1`.
pub fn decrement<T>(value: &T) -> T
where
    T: Copy + One + Sub<Output = T>,
{
    *value - T::one()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_kinds() {
        assert_eq!(increment(&1i32), 2);
        assert_eq!(decrement(&0i64), -1);
        assert_eq!(increment(&u8::MIN), 1);
        assert_eq!(increment(&0.5f64), 1.5);
        assert_eq!(decrement(&0.0f32), -1.0);
    }
}
