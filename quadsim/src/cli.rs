//! Command-line configuration for the episode driver.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TaskKind {
    /// Default task: reach a 3D target position.
    ReachTarget,
    /// Lift off and reach a target height.
    Takeoff,
    /// Hold near a target height under the shaped hover reward.
    Hover,
    /// Wrench-driven hover with a sustained-hover completion condition.
    HoverHold,
}

#[derive(Debug, Parser)]
#[command(name = "quadsim", about = "Quadrotor RL environment driver")]
pub struct Args {
    /// Task to run.
    #[arg(long, value_enum, default_value_t = TaskKind::Hover)]
    pub task: TaskKind,

    /// Number of episodes to drive.
    #[arg(long, default_value_t = 10)]
    pub episodes: u32,

    /// Seed for the task's episode perturbations and the agent.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Use the reduced (scalar) action space.
    #[arg(long)]
    pub simplified: bool,

    /// Apply each agent action for this many consecutive simulator steps.
    #[arg(long, default_value_t = 1)]
    pub action_repeat: usize,

    /// Directory trajectory and reward CSV logs are written to.
    #[arg(long, default_value = "results")]
    pub results_dir: PathBuf,

    /// Write a full trajectory log every N-th episode.
    #[arg(long, default_value_t = 10)]
    pub log_every: u32,
}

impl Args {
    /// Build the configured task.
    pub fn build_task(&self) -> tasks::Task {
        let task = match self.task {
            TaskKind::ReachTarget => tasks::Task::reach_target(tasks::TaskConfig {
                simplified: self.simplified,
                seed: self.seed,
                ..tasks::TaskConfig::default()
            }),
            TaskKind::Takeoff => tasks::Task::takeoff(20.0, 5.0, self.simplified, self.seed),
            TaskKind::Hover => tasks::Task::hover(150.0, 100.0, self.simplified, self.seed),
            TaskKind::HoverHold => tasks::Task::hover_hold(5.0, 15.0, self.simplified, self.seed),
        };
        task.with_action_repeat(self.action_repeat)
    }
}
