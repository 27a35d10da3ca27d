//! One fixed-timestep advance of the sheet.
//!
//! The step runs two passes. The integration pass damps, moves and pulls every
//! free point towards its rest position using only that point's own state. The
//! spring pass then reads the positions just written and applies Hooke's law
//! along every structural edge, once per edge, to both endpoints.

use super::{Grid, Point, SimParams};
use crate::geom::Pos;

/// Advances `grid` by one tick. Deterministic and allocation free.
pub(crate) fn step(grid: &mut Grid, params: &SimParams) {
    integrate(grid, params);
    apply_springs(grid, params);
}

fn integrate(grid: &mut Grid, params: &SimParams) {
    for point in grid.points_mut().iter_mut().filter(|p| !p.pinned) {
        point.velocity = params.damping * point.velocity;
        point.position += point.velocity;
        point.velocity += params.restoring * point.displacement();
    }
}

fn apply_springs(grid: &mut Grid, params: &SimParams) {
    let (edges, points) = grid.springs_mut();
    for &(a, b) in edges {
        apply_spring(points, params, a, b);
    }
}

fn apply_spring(points: &mut [Point], params: &SimParams, a: usize, b: usize) {
    let delta = points[b].position - points[a].position;
    let dist = points[a].position.dist(&points[b].position);
    if dist < params.min_distance {
        return;
    }
    let force = (dist - params.rest_length) * params.spring_constant;
    let impulse = Pos::new(force * (delta.x / dist), force * (delta.y / dist));

    if !points[a].pinned {
        points[a].velocity += impulse;
    }
    if !points[b].pinned {
        points[b].velocity -= impulse;
    }
}
