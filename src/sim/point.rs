use crate::geom::Pos;

/// A single point mass of the sheet.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Point {
    pub position: Pos,
    pub velocity: Pos,
    /// Lattice position the restoring force pulls towards. Never changes.
    pub rest_position: Pos,
    /// Pinned points are skipped by the integrator and take no spring force.
    pub pinned: bool,
}
impl Point {
    pub const fn at_rest(rest_position: Pos) -> Self {
        Self {
            position: rest_position,
            velocity: Pos::ORIGIN,
            rest_position,
            pinned: false,
        }
    }

    pub fn displacement(&self) -> Pos {
        self.rest_position - self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_rest() {
        let p = Point::at_rest(Pos::new(3., 4.));
        assert_eq!(p.position, p.rest_position);
        assert_eq!(p.velocity, Pos::ORIGIN);
        assert!(!p.pinned);
        assert_eq!(p.displacement(), Pos::ORIGIN);
    }
}
