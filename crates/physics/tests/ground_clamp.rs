use physics::{RigidBodySim, SimConfig, Vec3};

/// Once the body is pushed below the ground it stays clamped at `z = 0` with
/// zero vertical velocity under zero net force, step after step.
#[test]
fn ground_clamp_is_idempotent() {
    let config = SimConfig {
        init_position: Vec3::new(0.0, 0.0, 1.0),
        ground_terminates: false,
        runtime: 100.0,
        ..SimConfig::default()
    };
    let mut sim = RigidBodySim::new(config);

    // Let gravity drive it into the ground.
    for _ in 0..10 {
        sim.advance(Vec3::ZERO);
    }
    assert_eq!(sim.position.z, 0.0);
    assert_eq!(sim.linear_velocity.z, 0.0);

    for _ in 0..10 {
        sim.advance(Vec3::ZERO);
        assert_eq!(sim.position.z, 0.0);
        assert_eq!(sim.linear_velocity.z, 0.0);
    }
    assert!(!sim.terminated);
}

/// Horizontal motion survives the ground clamp untouched.
#[test]
fn ground_clamp_leaves_horizontal_velocity_alone() {
    let config = SimConfig {
        init_position: Vec3::new(0.0, 0.0, 1.0),
        init_velocity: Vec3::new(3.0, -2.0, 0.0),
        ground_terminates: false,
        runtime: 100.0,
        ..SimConfig::default()
    };
    let mut sim = RigidBodySim::new(config);

    for _ in 0..10 {
        sim.advance(Vec3::ZERO);
    }
    assert_eq!(sim.position.z, 0.0);
    assert!((sim.linear_velocity.x - 3.0).abs() < 1e-6);
    assert!((sim.linear_velocity.y + 2.0).abs() < 1e-6);
}

/// With `ground_terminates` set, a descending impact ends the episode
/// before the runtime elapses.
#[test]
fn ground_impact_terminates_when_configured() {
    let config = SimConfig {
        init_position: Vec3::new(0.0, 0.0, 1.0),
        runtime: 100.0,
        ..SimConfig::default()
    };
    let mut sim = RigidBodySim::new(config);

    while !sim.terminated {
        sim.advance(Vec3::ZERO);
    }
    assert_eq!(sim.position.z, 0.0);
    assert!(sim.time < sim.config.runtime);
}
