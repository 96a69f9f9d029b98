use tasks::{Env, Task, TaskConfig};
use physics::Vec3;

/// Two tasks built with the same seed produce identical perturbed starts
/// and, under the same actions, identical trajectories.
#[test]
fn same_seed_reproduces_the_episode() {
    let mut a = Task::hover(150.0, 100.0, false, 1234);
    let mut b = Task::hover(150.0, 100.0, false, 1234);

    assert_eq!(a.reset(), b.reset());
    for _ in 0..10 {
        let (obs_a, r_a, d_a) = a.step(&[500.0, 400.0, 500.0, 400.0]);
        let (obs_b, r_b, d_b) = b.step(&[500.0, 400.0, 500.0, 400.0]);
        assert_eq!(obs_a, obs_b);
        assert_eq!(r_a, r_b);
        assert_eq!(d_a, d_b);
    }
}

/// Consecutive resets draw fresh perturbations from the task-owned RNG, so
/// an episode sequence is reproducible end to end from one seed.
#[test]
fn reset_sequence_is_reproducible() {
    let mut a = Task::takeoff(20.0, 5.0, false, 77);
    let mut b = Task::takeoff(20.0, 5.0, false, 77);

    for _ in 0..5 {
        assert_eq!(a.reset(), b.reset());
    }
}

/// The default reach-target task: 12-float observation ordered as
/// position ++ orientation ++ linear velocity ++ angular velocity.
#[test]
fn observation_ordering_is_the_state_contract() {
    let config = TaskConfig {
        init_position: Vec3::new(1.0, 2.0, 50.0),
        init_velocity: Vec3::new(0.1, 0.2, 0.3),
        init_angular_velocity: Vec3::new(0.4, 0.5, 0.6),
        ..TaskConfig::default()
    };
    let mut task = Task::reach_target(config);
    let obs = task.reset();

    assert_eq!(obs.len(), 12);
    assert_eq!(obs[0], 1.0);
    assert_eq!(obs[1], 2.0);
    // obs[2] is the perturbed height, near 50.
    assert!((obs[2] - 50.0).abs() < 10.0);
    assert_eq!(&obs[3..6], &[0.0, 0.0, 0.0]);
    assert_eq!(&obs[6..9], &[0.1, 0.2, 0.3]);
    assert_eq!(&obs[9..12], &[0.4, 0.5, 0.6]);
}
