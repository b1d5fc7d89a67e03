use crate::color::ramp::Interpolator;
use crate::color::style::{style_for, BadgeStyle};
use crate::query::coerce_numeric;

/// Color emitted by degenerate scales (empty domain) and by the badge
/// fallback path.
pub const NEUTRAL_COLOR: &str = "#999999";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleKind {
    /// Monotone interpolation over [min, max].
    Sequential,
    /// Interpolation through a midpoint; defaults to the arithmetic
    /// mean of the domain unless fixed by the caller.
    Diverging { midpoint: Option<f64> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Domain {
    Empty,
    Span { min: f64, max: f64 },
}

/// Maps raw field values to colors. Built per field, per dataset load;
/// never persisted.
#[derive(Debug, Clone)]
pub struct Scale {
    domain: Domain,
    interpolator: Interpolator,
    kind: ScaleKind,
}

impl Scale {
    /// Dynamic domain policy: extrema over the currently loaded
    /// dataset, with the same null→0 coercion the sort engine uses.
    /// An empty dataset yields a constant neutral scale.
    pub fn dynamic<I>(values: I, interpolator: Interpolator, kind: ScaleKind) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let mut coerced = values.into_iter().map(coerce_numeric);
        let domain = match coerced.next() {
            None => Domain::Empty,
            Some(first) => {
                let (min, max) = coerced.fold((first, first), |(min, max), value| {
                    (min.min(value), max.max(value))
                });
                Domain::Span { min, max }
            }
        };
        Self {
            domain,
            interpolator,
            kind,
        }
    }

    /// Fixed unit domain policy for fields known to be pre-normalized:
    /// [0, 1], or [0, 0.5, 1] when the kind is diverging.
    pub fn unit(interpolator: Interpolator, kind: ScaleKind) -> Self {
        Self {
            domain: Domain::Span { min: 0.0, max: 1.0 },
            interpolator,
            kind,
        }
    }

    /// Badge style for one value: the mapped color's channels at the
    /// fixed badge alpha. See [`style_for`].
    pub fn style(&self, value: f64) -> BadgeStyle {
        style_for(&self.color(value))
    }

    pub fn color(&self, value: f64) -> String {
        match self.domain {
            Domain::Empty => NEUTRAL_COLOR.to_string(),
            Domain::Span { min, max } => {
                let t = match self.kind {
                    ScaleKind::Sequential => normalize(value, min, max),
                    ScaleKind::Diverging { midpoint } => {
                        let mid = midpoint.unwrap_or((min + max) / 2.0);
                        if value <= mid {
                            0.5 * normalize(value, min, mid)
                        } else {
                            0.5 + 0.5 * normalize(value, mid, max)
                        }
                    }
                };
                (self.interpolator)(t)
            }
        }
    }
}

fn normalize(value: f64, low: f64, high: f64) -> f64 {
    if high <= low {
        // degenerate span collapses to the middle of the ramp
        0.5
    } else {
        ((value - low) / (high - low)).clamp(0.0, 1.0)
    }
}
