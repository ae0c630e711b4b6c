use rand::Rng;

/// Frame countdown that re-arms itself with a jittered period.
///
/// Each period is `base + uniform(-jitter, +jitter)` frames, never below one.
#[derive(Clone, Debug)]
pub struct EventTimer {
    base: u32,
    jitter: u32,
    remaining: u32,
}

impl EventTimer {
    pub fn new(base: u32, jitter: u32, rng: &mut impl Rng) -> Self {
        let mut timer = Self {
            base,
            jitter,
            remaining: 0,
        };
        timer.rearm(rng);
        timer
    }

    pub fn rearm(&mut self, rng: &mut impl Rng) {
        let jitter = i64::from(self.jitter.min(self.base));
        let offset = if jitter == 0 {
            0
        } else {
            rng.gen_range(-jitter..=jitter)
        };
        self.remaining = (i64::from(self.base) + offset).max(1) as u32;
    }

    /// Advance one frame; true on the frame the timer fires.
    pub fn tick(&mut self, rng: &mut impl Rng) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.rearm(rng);
            true
        } else {
            false
        }
    }
}
