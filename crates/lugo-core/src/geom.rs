/// An absolute position on the field. The side of the field matters.
pub type Point = nalgebra::Vector2<f64>;

/// A free vector, e.g. a direction or a displacement.
pub type Vector = nalgebra::Vector2<f64>;

/// Vectors shorter than this cannot be turned into a direction.
const MIN_NORM: f64 = 1e-9;

/// Euclidean distance between two points.
pub fn distance_between_points(a: &Point, b: &Point) -> f64 {
    (b - a).norm()
}

/// Returns the unit vector pointing from `origin` to `target`, or `None` if the two
/// points coincide.
pub fn direction_between(origin: &Point, target: &Point) -> Option<Vector> {
    normalize(&(target - origin))
}

/// Scales the vector to unit length. Returns `None` for (almost) zero vectors.
pub fn normalize(v: &Vector) -> Option<Vector> {
    let norm = v.norm();
    if norm < MIN_NORM || !norm.is_finite() {
        return None;
    }
    Some(v / norm)
}
