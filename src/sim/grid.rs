use std::ops::{Index, IndexMut};

use bitvec::{bitvec, vec::BitVec};
use itertools::iproduct;

use super::Point;
use crate::geom::Pos;

/// Fixed-size lattice of point masses joined by structural springs.
///
/// Points are stored row-major. The two top corners are permanent anchors:
/// they are pinned at construction and nothing ever unpins them.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Grid {
    rows: usize,
    cols: usize,
    points: Vec<Point>,
    anchors: BitVec,
    /// Structural springs as flat index pairs, each edge once.
    edges: Vec<(usize, usize)>,
}

impl Grid {
    /// Lays out `rows × cols` points at `origin + (col, row) * spacing`.
    pub fn new(rows: usize, cols: usize, spacing: f32, origin: Pos) -> Self {
        assert!(rows > 0 && cols > 0, "grid must have at least one point");

        let points = iproduct!(0..rows, 0..cols)
            .map(|(row, col)| {
                Point::at_rest(Pos::new(
                    origin.x + col as f32 * spacing,
                    origin.y + row as f32 * spacing,
                ))
            })
            .collect();
        let mut grid = Self {
            rows,
            cols,
            points,
            anchors: bitvec![0; rows * cols],
            edges: Vec::with_capacity(rows * (cols - 1) + (rows - 1) * cols),
        };
        for (row, col) in grid.cells() {
            let a = grid.flat_index(row, col);
            for (r, c) in grid.forward_neighbors(row, col) {
                let b = grid.flat_index(r, c);
                grid.edges.push((a, b));
            }
        }
        for (row, col) in [(0, 0), (0, cols - 1)] {
            let i = grid.flat_index(row, col);
            grid.anchors.set(i, true);
            grid.points[i].pinned = true;
        }
        grid
    }

    /// Same as [`Grid::new`], with the lattice centred on a `canvas`-sized area.
    pub fn centered(rows: usize, cols: usize, spacing: f32, canvas: Pos) -> Self {
        let origin = Pos::new(
            (canvas.x - (cols - 1) as f32 * spacing) / 2.,
            (canvas.y - (rows - 1) as f32 * spacing) / 2.,
        );
        Self::new(rows, cols, spacing, origin)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn flat_index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    pub fn is_anchor(&self, row: usize, col: usize) -> bool {
        self.anchors[self.flat_index(row, col)]
    }

    /// Every `(row, col)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        iproduct!(0..self.rows, 0..self.cols)
    }

    /// Right and down neighbours only, so that each edge is seen from one end.
    pub fn forward_neighbors(
        &self,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = (usize, usize)> {
        [self.right_of(row, col), self.below(row, col)]
            .into_iter()
            .flatten()
    }

    /// Every structural edge exactly once, as flat point indices.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// The edge list alongside mutable points, for the spring pass.
    pub fn springs_mut(&mut self) -> (&[(usize, usize)], &mut [Point]) {
        (&self.edges, &mut self.points)
    }

    /// Sum of squared velocities over the whole sheet.
    pub fn kinetic_energy(&self) -> f32 {
        self.points.iter().map(|p| p.velocity.length_sq()).sum()
    }

    fn right_of(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        (col + 1 < self.cols).then_some((row, col + 1))
    }
    fn below(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        (row + 1 < self.rows).then_some((row + 1, col))
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Point;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.points[self.flat_index(row, col)]
    }
}
impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let i = self.flat_index(row, col);
        &mut self.points[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let grid = Grid::new(3, 4, 10., Pos::new(5., 7.));
        assert_eq!(grid.points().len(), 12);
        assert_eq!(grid[(0, 0)].position, Pos::new(5., 7.));
        assert_eq!(grid[(2, 3)].position, Pos::new(35., 27.));
        assert_eq!(grid[(1, 2)].rest_position, Pos::new(25., 17.));
        for p in grid.points() {
            assert_eq!(p.position, p.rest_position);
            assert_eq!(p.velocity, Pos::ORIGIN);
        }
    }

    #[test]
    fn test_only_top_corners_pinned() {
        let grid = Grid::new(4, 5, 10., Pos::ORIGIN);
        for (row, col) in grid.cells() {
            let corner = row == 0 && (col == 0 || col == 4);
            assert_eq!(grid[(row, col)].pinned, corner, "({row}, {col})");
            assert_eq!(grid.is_anchor(row, col), corner, "({row}, {col})");
        }
    }

    #[test]
    fn test_centered() {
        let grid = Grid::centered(30, 40, 15., Pos::new(800., 600.));
        assert_eq!(grid[(0, 0)].position, Pos::new(107.5, 82.5));
        assert_eq!(grid[(29, 39)].position, Pos::new(692.5, 517.5));
    }

    #[test]
    fn test_forward_neighbors() {
        let grid = Grid::new(3, 3, 1., Pos::ORIGIN);
        assert_eq!(
            grid.forward_neighbors(1, 1).collect::<Vec<_>>(),
            vec![(1, 2), (2, 1)]
        );
        assert_eq!(grid.forward_neighbors(0, 2).collect::<Vec<_>>(), vec![(1, 2)]);
        assert_eq!(grid.forward_neighbors(2, 0).collect::<Vec<_>>(), vec![(2, 1)]);
        assert_eq!(grid.forward_neighbors(2, 2).count(), 0);
    }

    #[test]
    fn test_edges_counted_once() {
        let grid = Grid::new(4, 5, 1., Pos::ORIGIN);
        let edges = grid.edges();
        // rows * (cols - 1) horizontal + (rows - 1) * cols vertical
        assert_eq!(edges.len(), 4 * 4 + 3 * 5);

        let mut normalised: Vec<_> = edges.iter().map(|&(a, b)| (a.min(b), a.max(b))).collect();
        normalised.sort();
        normalised.dedup();
        assert_eq!(normalised.len(), edges.len());

        // Interior points have four springs, edges three, corners two.
        let mut degree = vec![0; 20];
        for &(a, b) in edges {
            degree[a] += 1;
            degree[b] += 1;
        }
        assert_eq!(degree[grid.flat_index(0, 0)], 2);
        assert_eq!(degree[grid.flat_index(0, 2)], 3);
        assert_eq!(degree[grid.flat_index(2, 2)], 4);
        assert_eq!(degree[grid.flat_index(3, 4)], 2);
    }

    #[test]
    fn test_single_column_grid() {
        let grid = Grid::new(3, 1, 10., Pos::ORIGIN);
        assert!(grid.is_anchor(0, 0));
        assert!(!grid[(1, 0)].pinned);
        assert_eq!(grid.edges(), &[(0, 1), (1, 2)]);
    }

    #[test]
    fn test_kinetic_energy() {
        let mut grid = Grid::new(2, 2, 1., Pos::ORIGIN);
        assert_eq!(grid.kinetic_energy(), 0.);
        grid[(1, 0)].velocity = Pos::new(3., 4.);
        grid[(1, 1)].velocity = Pos::new(1., 0.);
        assert_eq!(grid.kinetic_energy(), 26.);
    }
}
