use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Anything that has an area.
pub trait HasArea {
    fn area(&self) -> f64;
}

impl<T: HasArea + ?Sized> HasArea for &T {
    fn area(&self) -> f64 {
        (**self).area()
    }
}

impl<T: HasArea + ?Sized> HasArea for Box<T> {
    fn area(&self) -> f64 {
        (**self).area()
    }
}

/// How two areas are ordered against each other.
///
/// `Exact` is the contract used by [`compare_area`] and
/// [`Square::compare_to`](crate::Square::compare_to). The other two variants
/// reproduce older integer result codes for callers that still depend on
/// them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonPolicy {
    /// Sign of the area difference. Equal areas are `Equal`, `-0.0` equals
    /// `0.0`, and NaN falls back to `f64::total_cmp`.
    #[default]
    Exact,
    /// The area difference truncated toward zero. Differences in `(-1, 1)`
    /// compare `Equal` even when the areas differ.
    ///
    /// Not a total order: `Equal` is not transitive (0.0 ~ 0.6 ~ 1.2 but
    /// 0.0 < 1.2). Do not hand it to `sort_by` or `binary_search_by`.
    Truncating,
    /// `Greater` when the difference is positive, `Less` otherwise,
    /// including for equal areas.
    ///
    /// Not a total order: two equal areas are each `Less` than the other.
    /// Do not hand it to `sort_by` or `binary_search_by`.
    StrictSign,
}

impl ComparisonPolicy {
    /// Whether [`compare`](ComparisonPolicy::compare) is a total order and
    /// therefore safe to sort with. Only `Exact` is.
    pub const fn is_total_order(&self) -> bool {
        matches!(self, ComparisonPolicy::Exact)
    }

    /// Orders `a` against `b`.
    pub fn compare<A, B>(&self, a: &A, b: &B) -> Ordering
    where
        A: HasArea + ?Sized,
        B: HasArea + ?Sized,
    {
        self.indicator(a, b).cmp(&0)
    }

    /// The integer result code for `a` against `b`.
    ///
    /// `Exact` and `StrictSign` only ever return -1, 0 or 1. `Truncating`
    /// returns the truncated difference itself, saturating at the `i32`
    /// bounds; NaN differences give 0.
    pub fn indicator<A, B>(&self, a: &A, b: &B) -> i32
    where
        A: HasArea + ?Sized,
        B: HasArea + ?Sized,
    {
        let (lhs, rhs) = (a.area(), b.area());
        let code = match self {
            ComparisonPolicy::Exact => {
                let ord = lhs.partial_cmp(&rhs).unwrap_or_else(|| lhs.total_cmp(&rhs));
                ord as i32
            }
            // `as` truncates toward zero and saturates
            ComparisonPolicy::Truncating => (lhs - rhs) as i32,
            ComparisonPolicy::StrictSign => {
                if lhs - rhs > 0.0 {
                    1
                } else {
                    -1
                }
            }
        };
        tracing::trace!(policy = ?self, lhs, rhs, code, "compared areas");
        code
    }
}

/// Orders two shapes by area under [`ComparisonPolicy::Exact`].
///
/// ```
/// use rect_area::{compare_area, Rectangle, Square};
///
/// let mut shapes = vec![Rectangle::new(3.0, 4.0), Square::new(2.0).into()];
/// shapes.sort_by(compare_area);
/// assert_eq!(shapes[0], Rectangle::new(2.0, 2.0));
/// ```
pub fn compare_area<A, B>(a: &A, b: &B) -> Ordering
where
    A: HasArea + ?Sized,
    B: HasArea + ?Sized,
{
    ComparisonPolicy::Exact.compare(a, b)
}
