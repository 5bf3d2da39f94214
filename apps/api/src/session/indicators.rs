use std::fmt;

use rand::Rng;

const STRESS_START: f64 = 35.0;
const CONFIDENCE_START: f64 = 75.0;
const STRESS_STEP: f64 = 10.0;
const CONFIDENCE_STEP: f64 = 8.0;
const FLOOR: f64 = 10.0;
const CEILING: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    Moderate,
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Low => "Low",
            Level::Moderate => "Moderate",
            Level::High => "High",
        })
    }
}

/// Simulated stress/confidence readings shown while an answer is recorded.
/// Both are a bounded random walk; nothing is actually measured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveIndicators {
    stress: f64,
    confidence: f64,
}

impl Default for LiveIndicators {
    fn default() -> Self {
        Self {
            stress: STRESS_START,
            confidence: CONFIDENCE_START,
        }
    }
}

impl LiveIndicators {
    pub fn stress(&self) -> f64 {
        self.stress
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// One random-walk step: stress moves within ±5, confidence within ±4,
    /// both held to 10..=90.
    pub fn perturb<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.stress = step(self.stress, rng.gen::<f64>(), STRESS_STEP);
        self.confidence = step(self.confidence, rng.gen::<f64>(), CONFIDENCE_STEP);
    }

    pub fn stress_level(&self) -> Level {
        if self.stress < 30.0 {
            Level::Low
        } else if self.stress < 60.0 {
            Level::Moderate
        } else {
            Level::High
        }
    }

    pub fn confidence_level(&self) -> Level {
        if self.confidence > 70.0 {
            Level::High
        } else if self.confidence > 40.0 {
            Level::Moderate
        } else {
            Level::Low
        }
    }
}

fn step(value: f64, sample: f64, width: f64) -> f64 {
    (value + (sample - 0.5) * width).clamp(FLOOR, CEILING)
}
