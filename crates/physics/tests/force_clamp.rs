use physics::{RigidBodySim, SimConfig, Vec3};

fn airborne_config() -> SimConfig {
    SimConfig {
        init_position: Vec3::new(0.0, 0.0, 100.0),
        ..SimConfig::default()
    }
}

/// Forces outside the limit behave identically to the clamped value;
/// e.g. (100, -100, 0) with limit 25 is exactly (25, -25, 0).
#[test]
fn out_of_range_forces_behave_like_clamped_ones() {
    let mut wild = RigidBodySim::new(airborne_config());
    let mut tame = RigidBodySim::new(airborne_config());

    for _ in 0..20 {
        wild.advance(Vec3::new(100.0, -100.0, 0.0));
        tame.advance(Vec3::new(25.0, -25.0, 0.0));
    }

    assert_eq!(wild.position, tame.position);
    assert_eq!(wild.linear_velocity, tame.linear_velocity);
}

/// In-range forces pass through the clamp untouched.
#[test]
fn in_range_forces_are_untouched() {
    let mut a = RigidBodySim::new(airborne_config());
    let mut b = RigidBodySim::new(airborne_config());

    a.advance(Vec3::new(10.0, -3.0, 24.9));
    b.advance(Vec3::new(10.0, -3.0, 24.9).clamp_axes(25.0));

    assert_eq!(a.position, b.position);
}
