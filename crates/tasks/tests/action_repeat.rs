use tasks::{Env, Task};

/// With action repeat K, one `step` must return K tiled per-step states and
/// a reward equal to the sum of the K per-step rewards. A repeat-1 twin with
/// the same seed stepping K times is the reference.
#[test]
fn repeated_step_matches_sum_of_single_steps() {
    let mut repeated = Task::hover(150.0, 100.0, false, 99).with_action_repeat(3);
    let mut single = Task::hover(150.0, 100.0, false, 99);

    let obs_a = repeated.reset();
    let obs_b = single.reset();
    assert_eq!(obs_a.len(), 3 * 12);
    assert_eq!(obs_b.len(), 12);
    assert_eq!(&obs_a[0..12], &obs_b[..], "same seed, same start state");

    let action = [600.0; 4];
    let (obs, reward, done) = repeated.step(&action);
    assert!(!done);

    let mut expected_obs = Vec::new();
    let mut expected_reward = 0.0;
    for _ in 0..3 {
        let (o, r, d) = single.step(&action);
        expected_obs.extend(o);
        expected_reward += r;
        assert!(!d);
    }

    assert_eq!(obs, expected_obs);
    assert!(
        (reward - expected_reward).abs() < 1e-5,
        "reward {reward} != sum of per-step rewards {expected_reward}"
    );
}

/// The initial observation is the per-step state tiled K times.
#[test]
fn reset_tiles_the_initial_state() {
    let mut task = Task::takeoff(20.0, 5.0, false, 1).with_action_repeat(4);
    let obs = task.reset();
    assert_eq!(obs.len(), task.obs_size());
    assert_eq!(obs.len(), 4 * 12);
    for chunk in obs.chunks(12) {
        assert_eq!(chunk, &obs[0..12]);
    }
}

/// If the simulator terminates mid-repeat, the remaining repeats are padded
/// with the final state and no further reward accrues.
#[test]
fn termination_mid_repeat_pads_and_stops_reward() {
    // Zero thrust from a low start: the body hits the ground well before 50
    // steps, and 50 steps also exhaust the 5 s runtime in any case.
    let mut big = Task::takeoff(20.0, 5.0, false, 7).with_action_repeat(50);
    let mut small = Task::takeoff(20.0, 5.0, false, 7);

    big.reset();
    small.reset();

    let (obs, reward, done) = big.step(&[0.0; 4]);
    assert!(done);
    assert_eq!(obs.len(), 50 * 12);

    // The trailing chunks are copies of the state at termination.
    let last = &obs[obs.len() - 12..];
    let second_last = &obs[obs.len() - 24..obs.len() - 12];
    assert_eq!(last, second_last);

    // Reference: accumulate rewards stepping one at a time until done.
    let mut expected_reward = 0.0;
    for _ in 0..50 {
        let (_o, r, d) = small.step(&[0.0; 4]);
        expected_reward += r;
        if d {
            break;
        }
    }
    assert!(
        (reward - expected_reward).abs() < 1e-4,
        "no reward may accrue past termination"
    );
}
