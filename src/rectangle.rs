use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{check_dimension, Error, Result};
use crate::HasArea;

/// A rectangle with a fixed width and length.
///
/// Only valid rectangles cross the serde boundary in either direction:
/// serializing one built by [`new`](Rectangle::new) with a bad dimension
/// fails with the same message [`try_new`](Rectangle::try_new) gives.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawRectangle")]
pub struct Rectangle {
    width: f64,
    length: f64,
}

#[derive(Serialize, Deserialize)]
struct RawRectangle {
    width: f64,
    length: f64,
}

impl TryFrom<RawRectangle> for Rectangle {
    type Error = Error;

    fn try_from(raw: RawRectangle) -> Result<Self> {
        Rectangle::try_new(raw.width, raw.length)
    }
}

impl Serialize for Rectangle {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let width = check_dimension("width", self.width).map_err(serde::ser::Error::custom)?;
        let length = check_dimension("length", self.length).map_err(serde::ser::Error::custom)?;
        RawRectangle { width, length }.serialize(serializer)
    }
}

impl Rectangle {
    /// Creates a rectangle without checking its dimensions.
    ///
    /// Zero, negative or non-finite values are kept as given and flow into
    /// [`area`](Rectangle::area) unchanged. Use [`try_new`](Rectangle::try_new)
    /// to reject them.
    pub const fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }

    /// Creates a rectangle, rejecting dimensions that are not finite and
    /// strictly positive.
    ///
    /// ```
    /// # use rect_area::{Error, Rectangle};
    /// assert!(Rectangle::try_new(3.0, 4.0).is_ok());
    /// assert!(matches!(
    ///     Rectangle::try_new(3.0, -4.0),
    ///     Err(Error::InvalidDimension { name: "length", .. })
    /// ));
    /// ```
    pub fn try_new(width: f64, length: f64) -> Result<Self> {
        let width = check_dimension("width", width)?;
        let length = check_dimension("length", length)?;
        Ok(Self { width, length })
    }

    /// The width as given at construction.
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// The length as given at construction.
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// `width * length`
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Whether both sides are equal.
    pub fn is_square(&self) -> bool {
        self.width == self.length
    }
}

impl HasArea for Rectangle {
    fn area(&self) -> f64 {
        Rectangle::area(self)
    }
}

impl Display for Rectangle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.width, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_is_width_times_length() {
        assert_eq!(Rectangle::new(3.0, 4.0).area(), 12.0);
        assert_eq!(HasArea::area(&Rectangle::new(0.5, 8.0)), 4.0);
    }

    #[test]
    fn unchecked_construction_keeps_bad_values() {
        let rect = Rectangle::new(-2.0, 3.0);
        assert_eq!(rect.width(), -2.0);
        assert_eq!(rect.area(), -6.0);
        assert_eq!(Rectangle::new(0.0, 7.0).area(), 0.0);
    }

    #[test]
    fn try_new_reports_the_first_bad_dimension() {
        assert_eq!(
            Rectangle::try_new(0.0, -1.0),
            Err(Error::InvalidDimension { name: "width", value: 0.0 })
        );
        assert_eq!(
            Rectangle::try_new(1.0, f64::INFINITY),
            Err(Error::InvalidDimension { name: "length", value: f64::INFINITY })
        );
    }

    #[test]
    fn is_square() {
        assert!(Rectangle::new(2.0, 2.0).is_square());
        assert!(!Rectangle::new(2.0, 3.0).is_square());
    }

    #[test]
    fn display() {
        assert_eq!(Rectangle::new(3.0, 4.5).to_string(), "3 x 4.5");
    }

    #[test]
    fn serde_validates_on_the_way_in() {
        let rect: Rectangle = serde_json::from_str(r#"{"width":3.0,"length":4.0}"#).unwrap();
        assert_eq!(rect, Rectangle::new(3.0, 4.0));
        assert_eq!(
            serde_json::to_string(&rect).unwrap(),
            r#"{"width":3.0,"length":4.0}"#
        );

        let err = serde_json::from_str::<Rectangle>(r#"{"width":3.0,"length":0.0}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("length must be a finite positive number"), "{err}");
    }

    #[test]
    fn serde_rejects_unchecked_values_on_the_way_out() {
        let err = serde_json::to_string(&Rectangle::new(0.0, 5.0)).unwrap_err().to_string();
        assert!(err.contains("width must be a finite positive number, got 0"), "{err}");

        // NaN would otherwise be written as `null`
        assert!(serde_json::to_string(&Rectangle::new(3.0, f64::NAN)).is_err());
    }

    #[test]
    fn serde_round_trips_every_value_it_writes() {
        for rect in [Rectangle::new(3.0, 4.0), Rectangle::new(0.1, 1e6), Rectangle::new(-1.0, 2.0)] {
            match serde_json::to_string(&rect) {
                Ok(json) => assert_eq!(serde_json::from_str::<Rectangle>(&json).unwrap(), rect),
                Err(_) => assert!(Rectangle::try_new(rect.width(), rect.length()).is_err()),
            }
        }
    }
}
