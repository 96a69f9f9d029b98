use tasks::{Env, Task};

/// Full throttle climbs from 5 m to the 20 m target well within the time
/// budget; the episode ends through the task-finished branch and the final
/// step's reward carries the +50 completion bonus.
#[test]
fn full_throttle_reaches_the_target_with_bonus() {
    let mut task = Task::takeoff(20.0, 5.0, false, 42);
    task.reset();

    let mut last_reward = 0.0;
    let mut done = false;
    for _ in 0..60 {
        let (_obs, reward, d) = task.step(&[900.0; 4]);
        last_reward = reward;
        if d {
            done = true;
            break;
        }
    }

    assert!(done, "climb should finish inside the episode budget");
    assert!(task.finished());
    assert!(!task.timeout());
    assert!(!task.out_of_bounds());
    assert!(task.sim().position.z >= 20.0);
    assert!(
        last_reward > 50.0,
        "final reward {last_reward} should include the +50 bonus"
    );
}

/// Zero thrust drops the vehicle onto the ground before the runtime runs
/// out: done through the out-of-bounds branch, not the timeout.
#[test]
fn free_fall_ends_out_of_bounds() {
    let mut task = Task::takeoff(20.0, 5.0, false, 3);
    task.reset();

    let mut done = false;
    for _ in 0..60 {
        let (_obs, _reward, d) = task.step(&[0.0; 4]);
        if d {
            done = true;
            break;
        }
    }

    assert!(done);
    assert!(task.out_of_bounds());
    assert!(!task.timeout());
    assert!(!task.finished());
    assert_eq!(task.sim().position.z, 0.0);
}

/// The simplified takeoff exposes a single broadcast rotor command.
#[test]
fn simplified_takeoff_has_scalar_actions() {
    let mut task = Task::takeoff(20.0, 5.0, true, 0);
    assert_eq!(task.action_size(), 1);
    assert_eq!(task.action_bounds(), (0.0, 900.0));
    assert_eq!(task.name(), "takeoff_simplified");

    task.reset();
    let mut done = false;
    for _ in 0..60 {
        let (_obs, _r, d) = task.step(&[900.0]);
        if d {
            done = true;
            break;
        }
    }
    assert!(done);
    assert!(task.finished(), "broadcast full throttle still climbs");
}
