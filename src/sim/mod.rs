//! The mass-spring sheet: its points, the integrator that moves them and the
//! pointer controller that drags them.

mod clock;
mod drag;
mod forces;
mod grid;
mod params;
mod point;

pub(crate) use clock::FixedClock;
pub(crate) use drag::{DragState, Flow, InputEvent};
pub(crate) use forces::step;
pub(crate) use grid::Grid;
pub(crate) use params::SimParams;
pub(crate) use point::Point;
