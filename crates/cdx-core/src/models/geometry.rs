use nalgebra::Point2;

/// Axis-aligned bounding rectangle in graph coordinate space.
///
/// `min` and `max` are opposite corners with `min.x <= max.x` and
/// `min.y <= max.y` whenever the bounds were produced by the constructors
/// below. Bounds are used both as explicit page-layout input and as the
/// running frame accumulated while a fragment is emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Corner with the smallest coordinates.
    pub min: Point2<f64>,
    /// Corner with the largest coordinates.
    pub max: Point2<f64>,
}

impl Bounds {
    /// Creates bounds from two opposite corners.
    pub fn new(min: Point2<f64>, max: Point2<f64>) -> Self {
        Self { min, max }
    }

    /// Creates degenerate bounds containing exactly one point.
    pub fn around(point: Point2<f64>) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Returns these bounds grown to contain `point`.
    pub fn include(self, point: Point2<f64>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(point.x), self.min.y.min(point.y)),
            max: Point2::new(self.max.x.max(point.x), self.max.y.max(point.y)),
        }
    }

    /// Folds an iterator of points into their common bounds.
    ///
    /// The first point seeds the bounds and every further point widens them,
    /// so an empty iterator yields `None` rather than a bogus zero box.
    pub fn of_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<f64>>,
    {
        points.into_iter().fold(None, |bounds, point| {
            Some(match bounds {
                Some(bounds) => bounds.include(point),
                None => Self::around(point),
            })
        })
    }

    /// Returns these bounds widened by a uniform margin on every side.
    pub fn expand(self, margin: f64) -> Self {
        Self {
            min: Point2::new(self.min.x - margin, self.min.y - margin),
            max: Point2::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// Whether all four coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.min.x.is_finite()
            && self.min.y.is_finite()
            && self.max.x.is_finite()
            && self.max.y.is_finite()
    }
}
