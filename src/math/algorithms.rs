//! Numeric algorithms.

use num_traits::Zero;
use std::ops::Sub;

/// Sums a sequence of floating-point values with Kahan roundoff error
/// compensation.
///
/// Compared to a plain fold, the accumulated error stays bounded
/// independently of the number of values:
///
/// ```rust
/// use glfb::math::algorithms::kahan_sum;
///
/// let ones = || (0..20_000_000).map(|_| 1.0f32);
/// let naive = ones().fold(0.0f32, |sum, x| sum + x);
/// let compensated = kahan_sum(ones());
/// assert_eq!(naive, 16_777_216.0);
/// assert_eq!(compensated, 20_000_000.0);
/// ```
pub fn kahan_sum<I, T>(values: I) -> T
    where I: IntoIterator<Item = T>,
          T: Copy + Zero + Sub<Output = T>,
{
    let mut compensation = T::zero();
    kahan_sum_with(values, T::zero(), &mut compensation)
}

/// Continues a Kahan summation from `sum` with the given `compensation`.
///
/// The compensation value is updated in place so that a summation may be
/// split over several calls, for example when the inputs are not stored
/// contiguously or are converted on the fly:
///
/// ```rust
/// use glfb::math::algorithms::kahan_sum_with;
///
/// let pixels: [u8; 4] = [0, 51, 102, 255];
/// let (mut sum, mut c) = (0.0f32, 0.0f32);
/// for &pixel in pixels.iter() {
///     let value = pixel as f32 / 255.0;
///     sum = kahan_sum_with(Some(value), sum, &mut c);
/// }
/// assert!((sum - 1.6).abs() < 1.0e-6);
/// ```
pub fn kahan_sum_with<I, T>(values: I, mut sum: T, compensation: &mut T) -> T
    where I: IntoIterator<Item = T>,
          T: Copy + Zero + Sub<Output = T>,
{
    let mut c = *compensation;
    for value in values {
        let y = value - c;
        let t = sum + y;
        c = (t - sum) - y;
        sum = t;
    }
    *compensation = c;
    sum
}
