//! Temperature state, the acceptance test, and the cooling schedule.

use super::benefit::PairBenefit;

/// Temperature never cools past this point; at the floor the acceptance
/// test degenerates to a strict improvement check.
const FLOOR: f64 = 1.0;

/// Annealing state owned by the round orchestrator.
///
/// The temperature multiplies into the new benefit, so values above 1 let
/// lateral and mildly worsening exchanges through. It drops by `delta` once
/// per completed round and clamps to the floor of 1, after which it never
/// moves again.
#[derive(Debug, Clone)]
pub(super) struct Annealing {
    temperature: f64,
    delta: f64,
}

impl Annealing {
    pub fn new(initial_temperature: f64, delta: f64) -> Self {
        Self {
            temperature: initial_temperature,
            delta,
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// The acceptance test applied to every sampled candidate.
    pub fn accepts(&self, benefit: &PairBenefit) -> bool {
        benefit.new * self.temperature > benefit.old
    }

    /// Linear cooldown, invoked once after every completed round.
    pub fn cool_down(&mut self) {
        if self.temperature > FLOOR {
            self.temperature -= self.delta;
        }
        if self.temperature < FLOOR {
            self.temperature = FLOOR;
        }
    }
}
