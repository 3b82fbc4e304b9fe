use nalgebra::Vector2;

/// Growth direction used when a point carries no normal.
pub const DEFAULT_NORMAL: Vector2<f64> = Vector2::new(1.0, 0.0);

/// Where a point came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointKind {
    /// Start point of a contour segment.
    Vertex,
    /// Evenly spaced point along a segment.
    EdgeSample,
    /// Grown by the advancing front (or produced by merging two such points).
    Interior,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampledPoint {
    pub kind: PointKind,
    pub location: Vector2<f64>,
    /// Unit direction the front grows in from this point, facing the filled
    /// region for boundary points. `None` for merged points and degenerate corners.
    pub normal: Option<Vector2<f64>>,
    /// Strictly increasing within one cloud.
    pub creation_order: u64,
}

impl SampledPoint {
    #[inline]
    pub fn is_interior(&self) -> bool {
        matches!(self.kind, PointKind::Interior)
    }

    #[inline]
    pub fn is_boundary(&self) -> bool {
        !self.is_interior()
    }

    /// `normal`, or `DEFAULT_NORMAL` when undefined.
    #[inline]
    pub fn growth_direction(&self) -> Vector2<f64> {
        self.normal.unwrap_or(DEFAULT_NORMAL)
    }
}

/// Ordered points plus the creation counter that stamps them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<SampledPoint>,
    next_order: u64,
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point, stamping it with the next creation order. Returns its index.
    pub fn push(
        &mut self,
        kind: PointKind,
        location: Vector2<f64>,
        normal: Option<Vector2<f64>>,
    ) -> usize {
        let creation_order = self.stamp();
        self.points.push(SampledPoint {
            kind,
            location,
            normal,
            creation_order,
        });
        self.points.len() - 1
    }

    /// Take the next creation order without storing a point.
    pub(crate) fn stamp(&mut self) -> u64 {
        let order = self.next_order;
        self.next_order += 1;
        order
    }

    /// Rebuild from already-stamped points; the counter continues after `next_order`.
    pub(crate) fn from_parts(points: Vec<SampledPoint>, next_order: u64) -> Self {
        debug_assert!(points.iter().all(|p| p.creation_order < next_order));
        Self { points, next_order }
    }

    pub(crate) fn into_parts(self) -> (Vec<SampledPoint>, u64) {
        (self.points, self.next_order)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[SampledPoint] {
        &self.points
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&SampledPoint> {
        self.points.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SampledPoint> {
        self.points.iter()
    }

    pub fn locations(&self) -> Vec<Vector2<f64>> {
        self.points.iter().map(|p| p.location).collect()
    }

    pub fn count(&self, kind: PointKind) -> usize {
        self.points.iter().filter(|p| p.kind == kind).count()
    }
}

impl std::ops::Index<usize> for PointCloud {
    type Output = SampledPoint;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        &self.points[i]
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a SampledPoint;
    type IntoIter = std::slice::Iter<'a, SampledPoint>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
