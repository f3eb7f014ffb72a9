//! # rect_area
//! Two immutable value types, [`Rectangle`] and [`Square`], and the
//! [`HasArea`] capability they share.
//!
//! A `Square` holds a `Rectangle` with equal sides and gets its area from it
//! through [`delegate_area`]. Shapes are compared by area with
//! [`compare_area`], [`Square::compare_to`], or an explicit
//! [`ComparisonPolicy`].
//!
//! ```
//! use std::cmp::Ordering;
//! use rect_area::{Rectangle, Square};
//!
//! assert_eq!(Rectangle::new(3.0, 4.0).area(), 12.0);
//! assert_eq!(Square::new(5.0).area(), 25.0);
//! assert_eq!(Square::new(2.0).compare_to(&Square::new(3.0)), Ordering::Less);
//! ```
//!
//! Constructors come in two flavours: `new` accepts any value, `try_new`
//! rejects dimensions that are not finite and strictly positive.

// lets `delegate_area` expand to `::rect_area::HasArea` inside this crate too
extern crate self as rect_area;

mod area;
pub mod error;
mod rectangle;
mod square;

pub use area::{compare_area, ComparisonPolicy, HasArea};
pub use error::{Error, Result};
pub use rect_area_derive::delegate_area;
pub use rectangle::Rectangle;
pub use square::Square;
