/// Converts variable frame times into whole fixed-length physics ticks.
///
/// The sheet is tuned for a constant timestep, so frames only ever advance it
/// by an integer number of ticks. Time left over carries into the next frame;
/// after a long stall anything beyond `max_steps` ticks is dropped.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FixedClock {
    step: f32,
    max_steps: u32,
    accumulated: f32,
}

impl FixedClock {
    pub fn new(step: f32, max_steps: u32) -> Self {
        assert!(step > 0., "step must be positive");
        Self {
            step,
            max_steps,
            accumulated: 0.,
        }
    }

    /// Adds `elapsed` seconds and returns how many ticks are due now.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulated += elapsed.max(0.);

        let mut steps = 0;
        while self.accumulated >= self.step && steps < self.max_steps {
            self.accumulated -= self.step;
            steps += 1;
        }
        if self.accumulated >= self.step {
            ftlog::warn!(
                "frame took {elapsed:.3}s, dropping {:.3}s of simulation",
                self.accumulated - self.accumulated % self.step
            );
            self.accumulated %= self.step;
        }
        steps
    }
}
