use super::Grid;
use crate::geom::Pos;

/// Pointer and window events, already mapped into canvas coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum InputEvent {
    Close,
    PointerDown(Pos),
    PointerMove(Pos),
    PointerUp,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// The point currently held by the pointer, if any.
///
/// Dragging is active exactly when there is a target. While held, the target
/// is pinned and follows the pointer; releasing it hands it back to the
/// integrator. Anchors are never picked and never unpinned.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DragState {
    target: Option<(usize, usize)>,
    radius: f32,
}

impl DragState {
    pub fn new(radius: f32) -> Self {
        Self {
            target: None,
            radius,
        }
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }
    #[cfg(test)]
    pub fn target(&self) -> Option<(usize, usize)> {
        self.target
    }

    pub fn handle(&mut self, grid: &mut Grid, event: InputEvent) -> Flow {
        match event {
            InputEvent::Close => return Flow::Quit,
            InputEvent::PointerDown(pos) => self.grab(grid, pos),
            InputEvent::PointerMove(pos) => {
                if let Some(cell) = self.target {
                    grid[cell].position = pos;
                }
            }
            InputEvent::PointerUp => self.release(grid),
        }
        Flow::Continue
    }

    fn grab(&mut self, grid: &mut Grid, pos: Pos) {
        self.release(grid);
        let Some(cell) = nearest_free_point(grid, pos, self.radius) else {
            return;
        };
        grid[cell].pinned = true;
        self.target = Some(cell);
        ftlog::debug!("grabbed point {cell:?} at {pos:?}");
    }

    fn release(&mut self, grid: &mut Grid) {
        let Some((row, col)) = self.target.take() else {
            return;
        };
        if !grid.is_anchor(row, col) {
            grid[(row, col)].pinned = false;
        }
        ftlog::debug!(
            "released point {:?}, sheet energy {}",
            (row, col),
            grid.kinetic_energy()
        );
    }
}

/// Closest non-anchor point strictly within `radius` of `pos`. Ties go to
/// the first point in row-major order.
fn nearest_free_point(grid: &Grid, pos: Pos, radius: f32) -> Option<(usize, usize)> {
    let radius_sq = radius * radius;
    let mut best: Option<((usize, usize), f32)> = None;
    for (row, col) in grid.cells() {
        if grid.is_anchor(row, col) {
            continue;
        }
        let d = grid[(row, col)].position.dist_sq(&pos);
        if d < radius_sq && best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some(((row, col), d));
        }
    }
    best.map(|(cell, _)| cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{step, SimParams};

    fn small_grid() -> Grid {
        Grid::new(4, 4, 10., Pos::ORIGIN)
    }

    #[test]
    fn test_grab_nearest_within_radius() {
        let mut grid = small_grid();
        let mut drag = DragState::new(10.);
        let flow = drag.handle(&mut grid, InputEvent::PointerDown(Pos::new(18., 21.)));
        assert_eq!(flow, Flow::Continue);
        assert!(drag.is_active());
        assert_eq!(drag.target(), Some((2, 2)));
        assert!(grid[(2, 2)].pinned);
    }

    #[test]
    fn test_miss_stays_idle() {
        let mut grid = small_grid();
        let before = grid.clone();
        let mut drag = DragState::new(10.);
        drag.handle(&mut grid, InputEvent::PointerDown(Pos::new(200., 200.)));
        assert!(!drag.is_active());
        drag.handle(&mut grid, InputEvent::PointerMove(Pos::new(10., 10.)));
        drag.handle(&mut grid, InputEvent::PointerUp);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_radius_is_exclusive() {
        let mut grid = small_grid();
        let mut drag = DragState::new(10.);
        drag.handle(&mut grid, InputEvent::PointerDown(Pos::new(10., 30.)));
        assert_eq!(drag.target(), Some((3, 1)));
        drag.handle(&mut grid, InputEvent::PointerUp);

        // Exactly `radius` away from (1, 1) and nothing closer.
        let mut grid = Grid::new(2, 2, 100., Pos::ORIGIN);
        drag.handle(&mut grid, InputEvent::PointerDown(Pos::new(100., 90.)));
        assert_eq!(drag.target(), None);
    }

    #[test]
    fn test_tie_goes_to_scan_order() {
        let mut grid = small_grid();
        let mut drag = DragState::new(10.);
        // Halfway between (1, 1) and (1, 2).
        drag.handle(&mut grid, InputEvent::PointerDown(Pos::new(15., 10.)));
        assert_eq!(drag.target(), Some((1, 1)));
    }

    #[test]
    fn test_drag_moves_target_directly() {
        let mut grid = small_grid();
        let mut drag = DragState::new(10.);
        drag.handle(&mut grid, InputEvent::PointerDown(Pos::new(20., 20.)));
        drag.handle(&mut grid, InputEvent::PointerMove(Pos::new(55., 43.)));
        assert_eq!(grid[(2, 2)].position, Pos::new(55., 43.));
        assert_eq!(grid[(2, 2)].velocity, Pos::ORIGIN);

        step(&mut grid, &SimParams::new(0.2, 0.9, 0.01, 10.));
        assert_eq!(grid[(2, 2)].position, Pos::new(55., 43.));

        drag.handle(&mut grid, InputEvent::PointerUp);
        assert!(!drag.is_active());
        assert!(!grid[(2, 2)].pinned);
    }

    #[test]
    fn test_anchors_not_draggable() {
        let mut grid = small_grid();
        let mut drag = DragState::new(10.);
        // Right on top of the (0, 0) anchor, with its neighbours exactly at the radius.
        drag.handle(&mut grid, InputEvent::PointerDown(Pos::new(0., 0.)));
        assert_eq!(drag.target(), None);

        // Closer to the anchor than to anything else, so the next closest wins.
        drag.handle(&mut grid, InputEvent::PointerDown(Pos::new(3., 3.)));
        assert_eq!(drag.target(), Some((0, 1)));
        drag.handle(&mut grid, InputEvent::PointerUp);
        assert!(grid[(0, 0)].pinned);
        assert!(grid[(0, 3)].pinned);
    }

    #[test]
    fn test_release_keeps_anchor_pinned() {
        let mut grid = small_grid();
        let mut drag = DragState {
            target: Some((0, 3)),
            radius: 10.,
        };
        drag.handle(&mut grid, InputEvent::PointerUp);
        assert!(!drag.is_active());
        assert!(grid[(0, 3)].pinned);
    }

    #[test]
    fn test_second_grab_releases_first() {
        let mut grid = small_grid();
        let mut drag = DragState::new(10.);
        drag.handle(&mut grid, InputEvent::PointerDown(Pos::new(10., 10.)));
        drag.handle(&mut grid, InputEvent::PointerDown(Pos::new(30., 30.)));
        assert_eq!(drag.target(), Some((3, 3)));
        assert!(!grid[(1, 1)].pinned);
        assert!(grid[(3, 3)].pinned);
    }

    #[test]
    fn test_close_quits() {
        let mut grid = small_grid();
        let mut drag = DragState::new(10.);
        assert_eq!(drag.handle(&mut grid, InputEvent::Close), Flow::Quit);
    }

    #[test]
    fn test_released_point_settles() {
        let params = SimParams::new(0.2, 0.9, 0.01, 10.);
        let mut grid = small_grid();
        let mut drag = DragState::new(10.);
        drag.handle(&mut grid, InputEvent::PointerDown(Pos::new(20., 10.)));
        drag.handle(&mut grid, InputEvent::PointerMove(Pos::new(26., 14.)));
        for _ in 0..10 {
            step(&mut grid, &params);
        }
        drag.handle(&mut grid, InputEvent::PointerUp);
        for _ in 0..2000 {
            step(&mut grid, &params);
        }
        let p = grid[(1, 2)];
        assert!(p.position.dist(&p.rest_position) < 0.01, "{p:?}");
    }
}
