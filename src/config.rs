//! Compile-time tunables for the sheet, its physics and its window.

pub const WINDOW_TITLE: &str = "Dot Matrix Sheet";
pub const CANVAS_WIDTH: f32 = 800.;
pub const CANVAS_HEIGHT: f32 = 600.;

pub const GRID_ROWS: usize = 30;
pub const GRID_COLS: usize = 40;
/// Lattice spacing and spring rest length, in pixels.
pub const SPRING_LENGTH: f32 = 15.;

pub const SPRING_CONSTANT: f32 = 0.2;
pub const DAMPING: f32 = 0.9;
pub const RESTORING_FORCE: f32 = 0.01;
/// Springs shorter than this contribute no force.
pub const MIN_SPRING_DISTANCE: f32 = 0.001;

/// A pointer-down grabs the nearest free dot strictly closer than this.
pub const CLICK_RADIUS: f32 = 10.;

pub const DOT_RADIUS: f32 = 2.;
pub const BACKGROUND_COLOR: [u8; 3] = [0, 0, 0];
pub const DOT_COLOR: [u8; 3] = [203, 170, 203];

/// Length of one physics tick in wall-clock seconds (~60 ticks per second).
pub const STEP_SECONDS: f32 = 1. / 60.;
pub const MAX_STEPS_PER_FRAME: u32 = 5;

pub const LOG_LEVEL: ftlog::LevelFilter = ftlog::LevelFilter::Info;
