use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{check_dimension, Error, Result};
use crate::{delegate_area, ComparisonPolicy, HasArea, Rectangle};

/// A rectangle whose width and length are the same side.
///
/// The area comes straight from the inner [`Rectangle`]. Serialized as
/// `{ "side" }`, validated in both directions like [`Rectangle`].
#[delegate_area(rect)]
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    rect: Rectangle,
}

impl Square {
    /// Creates a square without checking `side`.
    pub const fn new(side: f64) -> Self {
        Self {
            rect: Rectangle::new(side, side),
        }
    }

    /// Creates a square, rejecting a `side` that is not finite and strictly
    /// positive.
    pub fn try_new(side: f64) -> Result<Self> {
        let side = check_dimension("side", side)?;
        Ok(Self::new(side))
    }

    /// The side length, shared by width and length.
    pub const fn side(&self) -> f64 {
        self.rect.width()
    }

    pub fn area(&self) -> f64 {
        HasArea::area(self)
    }

    /// The underlying rectangle.
    pub const fn as_rectangle(&self) -> &Rectangle {
        &self.rect
    }

    /// Orders this square against any shape by area, under
    /// [`ComparisonPolicy::Exact`]: equal areas are `Equal`, and any
    /// difference, however small, is `Less` or `Greater`.
    ///
    /// ```
    /// # use std::cmp::Ordering;
    /// # use rect_area::{Rectangle, Square};
    /// assert_eq!(Square::new(3.0).compare_to(&Square::new(2.0)), Ordering::Greater);
    /// assert_eq!(Square::new(2.0).compare_to(&Rectangle::new(1.0, 4.0)), Ordering::Equal);
    /// ```
    pub fn compare_to<T: HasArea + ?Sized>(&self, other: &T) -> Ordering {
        self.compare_with(other, ComparisonPolicy::Exact)
    }

    /// Orders this square against `other` by area under `policy`.
    ///
    /// Only [`ComparisonPolicy::Exact`] yields a total order; see the other
    /// variants before handing the result to a sort.
    pub fn compare_with<T: HasArea + ?Sized>(&self, other: &T, policy: ComparisonPolicy) -> Ordering {
        policy.compare(self, other)
    }

    /// Always `true`.
    #[deprecated(note = "the type already guarantees equal sides")]
    pub const fn is_square(&self) -> bool {
        true
    }
}

impl From<Square> for Rectangle {
    fn from(square: Square) -> Self {
        square.rect
    }
}

impl AsRef<Rectangle> for Square {
    fn as_ref(&self) -> &Rectangle {
        &self.rect
    }
}

impl TryFrom<Rectangle> for Square {
    type Error = Error;

    fn try_from(rect: Rectangle) -> Result<Self> {
        if rect.is_square() {
            Ok(Self { rect })
        } else {
            Err(Error::NotSquare {
                width: rect.width(),
                length: rect.length(),
            })
        }
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "square {}", self.side())
    }
}

#[derive(Serialize, Deserialize)]
struct RawSquare {
    side: f64,
}

impl TryFrom<RawSquare> for Square {
    type Error = Error;

    fn try_from(raw: RawSquare) -> Result<Self> {
        Square::try_new(raw.side)
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let side = check_dimension("side", self.side()).map_err(serde::ser::Error::custom)?;
        RawSquare { side }.serialize(serializer)
    }
}
