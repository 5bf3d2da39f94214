use rand::Rng;

/// Source of the random bonuses added to mock scores.
///
/// `roll(upper)` returns a value in `0..upper`. Production uses
/// [`RandomJitter`]; tests pin the value with [`FixedJitter`].
pub trait Jitter: Send + Sync {
    fn roll(&self, upper: u32) -> u32;
}

/// Uniform jitter from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomJitter;

impl Jitter for RandomJitter {
    fn roll(&self, upper: u32) -> u32 {
        if upper == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Always rolls the same value, capped to stay below `upper`.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub u32);

impl Jitter for FixedJitter {
    fn roll(&self, upper: u32) -> u32 {
        self.0.min(upper.saturating_sub(1))
    }
}
