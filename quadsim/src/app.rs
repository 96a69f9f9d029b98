//! Episode loop and CSV logging.
//!
//! One row per environment step in the trajectory logs, one row per episode
//! in the rewards log. The core crates only expose raw state; everything
//! here is persistence glue.

use crate::agent::{Agent, RandomAgent};
use crate::cli::Args;

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use tasks::{Env, Task};

/// Drive the configured task for the requested number of episodes.
pub fn run(args: &Args) -> Result<()> {
    let mut task = args.build_task();
    let mut agent = RandomAgent::for_task(&task, args.seed);

    fs::create_dir_all(&args.results_dir)
        .with_context(|| format!("creating {}", args.results_dir.display()))?;

    let rewards_path = args.results_dir.join(format!("{}-rewards.csv", task.name()));
    let mut rewards = BufWriter::new(
        File::create(&rewards_path)
            .with_context(|| format!("creating {}", rewards_path.display()))?,
    );
    writeln!(rewards, "episode,reward")?;

    tracing::info!(task = task.name(), episodes = args.episodes, "starting run");
    for episode in 0..args.episodes {
        let trajectory = if episode % args.log_every.max(1) == 0 {
            let path = args
                .results_dir
                .join(format!("{}-ep-{episode:04}.log.csv", task.name()));
            Some(BufWriter::new(File::create(&path).with_context(|| {
                format!("creating {}", path.display())
            })?))
        } else {
            None
        };

        let score = run_episode(&mut task, &mut agent, trajectory)?;
        writeln!(rewards, "{episode},{score}")?;
        tracing::info!(episode, score, "episode complete");
    }
    rewards.flush()?;
    Ok(())
}

/// Run one reset-to-done episode, returning the summed reward.
fn run_episode(
    task: &mut Task,
    agent: &mut impl Agent,
    mut log: Option<BufWriter<File>>,
) -> Result<f32> {
    let mut state = task.reset();
    let mut score = 0.0;

    if let Some(w) = log.as_mut() {
        writeln!(w, "{}", trajectory_header(task.action_size()))?;
    }

    loop {
        let action = agent.act(&state);
        let (next_state, reward, done) = task.step(&action);

        if let Some(w) = log.as_mut() {
            write_trajectory_row(w, task, &action)?;
        }

        score += reward;
        state = next_state;
        if done {
            break;
        }
    }

    if let Some(mut w) = log {
        w.flush()?;
    }
    Ok(score)
}

fn trajectory_header(action_size: usize) -> String {
    let mut header = String::from(
        "time,x,y,z,phi,theta,psi,x_velocity,y_velocity,z_velocity,\
         phi_velocity,theta_velocity,psi_velocity",
    );
    for i in 1..=action_size {
        header.push_str(&format!(",rotor_speed{i}"));
    }
    header
}

fn write_trajectory_row(
    w: &mut BufWriter<File>,
    task: &Task,
    action: &[f32],
) -> Result<()> {
    let sim = task.sim();
    write!(w, "{}", sim.time)?;
    for value in sim.pose() {
        write!(w, ",{value}")?;
    }
    for v in [sim.linear_velocity, sim.angular_velocity] {
        write!(w, ",{},{},{}", v.x, v.y, v.z)?;
    }
    for a in action {
        write!(w, ",{a}")?;
    }
    writeln!(w)?;
    Ok(())
}
