use nalgebra::Vector2;

/// Winding sense of a closed contour in a y-up frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
}

impl Orientation {
    /// +1 for counter-clockwise, -1 for clockwise.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Orientation::CounterClockwise => 1.0,
            Orientation::Clockwise => -1.0,
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Clockwise => Orientation::CounterClockwise,
        }
    }
}

/// Which side of the boundary a normal should face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facing {
    /// Towards the filled region; the direction the advancing front grows in.
    Interior,
    /// Away from the filled region.
    Exterior,
}

/// Rotate by +90°.
#[inline]
pub fn rotate_ccw(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

/// Rotate by -90°.
#[inline]
pub fn rotate_cw(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(v.y, -v.x)
}

/// z-component of `a × b`.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
