use crate::config;

/// Constants of the force model, one set per simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SimParams {
    /// Hooke constant `k_s` of every structural spring.
    pub spring_constant: f32,
    /// Per-step velocity scale `d`, in `(0, 1)`.
    pub damping: f32,
    /// Pull `k_r` towards the rest position.
    pub restoring: f32,
    pub rest_length: f32,
    /// Springs shorter than this are skipped.
    pub min_distance: f32,
}

impl SimParams {
    pub fn new(spring_constant: f32, damping: f32, restoring: f32, rest_length: f32) -> Self {
        Self {
            spring_constant,
            damping,
            restoring,
            rest_length,
            min_distance: config::MIN_SPRING_DISTANCE,
        }
    }
}

impl Default for SimParams {
    fn default() -> Self {
        Self::new(
            config::SPRING_CONSTANT,
            config::DAMPING,
            config::RESTORING_FORCE,
            config::SPRING_LENGTH,
        )
    }
}
