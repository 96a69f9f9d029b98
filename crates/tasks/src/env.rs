/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the
/// interface an environment must provide to an agent. Each call to [`step`]
/// applies one action, advances the underlying simulation, and returns the
/// new observation vector, a scalar reward, and whether the episode ended.
///
/// [`step`]: Env::step
pub trait Env {
    /// Advance the environment by one action.
    ///
    /// Returns `(obs, reward, done)`. Once `done` is true the environment
    /// must be [`reset`](Env::reset) before stepping again.
    fn step(&mut self, action: &[f32]) -> (Vec<f32>, f32, bool);

    /// Start a new episode and return the initial observation vector.
    fn reset(&mut self) -> Vec<f32>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Size of the action vector the agent supplies.
    fn action_size(&self) -> usize;

    /// Inclusive `(low, high)` bounds each action component should stay in.
    fn action_bounds(&self) -> (f32, f32);
}
