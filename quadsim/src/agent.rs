//! Agent-side contract of the driver.
//!
//! The real learning agent lives outside this repository; the driver only
//! needs something that maps a state to an action within the task's bounds.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tasks::Env;

/// Minimal agent contract consumed by the episode loop.
pub trait Agent {
    /// Choose an action for the given state. Components must stay within
    /// the task's action bounds.
    fn act(&mut self, state: &[f32]) -> Vec<f32>;
}

/// Uniform-random agent for smoke-driving environments.
pub struct RandomAgent {
    rng: StdRng,
    action_size: usize,
    low: f32,
    high: f32,
}

impl RandomAgent {
    /// Build an agent matching the task's action space.
    pub fn for_task(task: &impl Env, seed: u64) -> Self {
        let (low, high) = task.action_bounds();
        Self {
            rng: StdRng::seed_from_u64(seed),
            action_size: task.action_size(),
            low,
            high,
        }
    }
}

impl Agent for RandomAgent {
    fn act(&mut self, _state: &[f32]) -> Vec<f32> {
        (0..self.action_size)
            .map(|_| self.rng.gen_range(self.low..=self.high))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasks::Task;

    #[test]
    fn random_actions_stay_in_bounds() {
        let task = Task::takeoff(20.0, 5.0, false, 0);
        let mut agent = RandomAgent::for_task(&task, 0);
        for _ in 0..100 {
            let action = agent.act(&[]);
            assert_eq!(action.len(), 4);
            assert!(action.iter().all(|a| (0.0..=900.0).contains(a)));
        }
    }
}
