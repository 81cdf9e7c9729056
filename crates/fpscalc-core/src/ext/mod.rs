//! Algorithms built on top of the engine's public operations.
//!
//! These only use products, inverses and powers; none of them touch the
//! scratch arena directly.

pub mod bostan_mori;
pub mod convolutions;
pub mod euler;
pub mod interpolation;
pub mod lagrange;

pub use bostan_mori::{bostan_mori, linear_recurrence};
pub use convolutions::{
    cyclic_convolution, cyclic_difference_convolution, cyclic_shift, difference_convolution,
    product_of, semi_online_convolution,
};
pub use euler::{euler_transform, product_one_minus_x_pow};
pub use interpolation::{lagrange_consecutive, lagrange_interpolate};
pub use lagrange::{generalized_lagrange_inversion, lagrange_inversion_coeff};
