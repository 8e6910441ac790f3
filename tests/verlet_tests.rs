use squishy::constraint::solve_point_collisions;
use squishy::{Boundary, Link, PointMass, SolverConfig, Vec2, World, WorldConfig};

#[test]
fn free_fall_gravity() {
    let config = SolverConfig::new().with_damping(1.0);
    let mut p: PointMass<f32> = PointMass::new(Vec2::new(0.0, 100.0));
    let g = Vec2::new(0.0, 9.81);
    let dt = 1.0 / 60.0;

    for _ in 0..60 {
        p.apply_acceleration(g);
        p.integrate(dt, &config);
    }

    let expected_y = 100.0 + 0.5 * 9.81 * 1.0;
    assert!((p.pos.y - expected_y).abs() < 1.0, "pos.y = {}, expected ~ {}", p.pos.y, expected_y);
}

#[test]
fn integration_clamps_fast_points_to_max_move() {
    let config = SolverConfig::new().with_damping(1.0).with_max_move(6.0);
    let mut p: PointMass<f32> = PointMass::new(Vec2::new(0.0, 0.0));
    p.prev_pos = Vec2::new(-20.0, 0.0);
    p.integrate(1.0 / 60.0, &config);
    assert_eq!(p.pos - p.prev_pos, Vec2::new(6.0, 0.0));

    let mut diagonal: PointMass<f32> = PointMass::new(Vec2::new(100.0, 100.0));
    diagonal.prev_pos = Vec2::new(130.0, 60.0);
    diagonal.integrate(1.0 / 60.0, &config);
    let moved = (diagonal.pos - diagonal.prev_pos).length();
    assert!((moved - 6.0).abs() < 1e-4, "moved {}", moved);
}

#[test]
fn damped_clamp_never_exceeds_max_move() {
    let config: SolverConfig<f32> = SolverConfig::new();
    let mut p = PointMass::new(Vec2::new(0.0, 0.0));
    p.prev_pos = Vec2::new(0.0, -500.0);
    p.integrate(1.0 / 60.0, &config);
    let moved = (p.pos - p.prev_pos).length();
    assert!(moved <= config.max_move);
    assert!((moved - config.max_move * config.damping).abs() < 1e-4);
}

#[test]
fn link_relaxation_converges_monotonically() {
    let mut points = [
        PointMass::new(Vec2::new(0.0f32, 0.0)),
        PointMass::new(Vec2::new(20.0, 5.0)),
    ];
    let link = Link::new(0, 1, 10.0);
    let config = SolverConfig::new();

    let mut last = link.error(&points).abs();
    for pass in 0..30 {
        link.solve(&mut points, &config);
        let err = link.error(&points).abs();
        assert!(err < last, "pass {}: error {} did not drop below {}", pass, err, last);
        last = err;
    }
    assert!(last < 0.01, "residual error {}", last);
}

#[test]
fn overlapping_points_separate_to_twice_radius() {
    let config = SolverConfig::new().with_particle_radius(5.0);
    let mut points = [
        PointMass::new(Vec2::new(10.0f32, 10.0)),
        PointMass::new(Vec2::new(13.0, 12.0)),
    ];
    solve_point_collisions(&mut points, &config);
    let dist = points[0].pos.distance(points[1].pos);
    assert!((dist - 10.0).abs() < 1e-4, "dist = {}", dist);
}

#[test]
fn floor_clamps_and_reflects_with_bounce() {
    let world: World<f32> = World::new(WorldConfig::new(), SolverConfig::new()).unwrap();
    let floor = world.boundary().max.y;
    assert_eq!(floor, 950.0);

    let mut p = PointMass::new(Vec2::new(400.0, 953.0));
    p.prev_pos = Vec2::new(400.0, 948.0);
    let incoming = p.velocity().y;

    world.boundary().solve(&mut p, world.config().bounce);

    assert_eq!(p.pos.y, floor);
    assert_eq!(p.velocity().y, -incoming * 0.5);
    assert_eq!(p.pos.x, 400.0);
    assert!(world.boundary().contains(p.pos));
    assert!(!world.boundary().contains(Vec2::new(400.0, 953.0)));
}

#[test]
fn pinned_point_ignored_by_every_correction() {
    let config = SolverConfig::new().with_dist_stiffness(1.0);
    let boundary = Boundary::new(Vec2::new(0.0f32, 0.0), Vec2::new(10.0, 10.0));
    let mut points = [
        PointMass::pinned(Vec2::new(50.0, 50.0)),
        PointMass::new(Vec2::new(51.0, 50.0)),
    ];
    Link::new(0, 1, 20.0).solve(&mut points, &config);
    solve_point_collisions(&mut points, &config);
    boundary.solve(&mut points[0], 1.0);
    assert_eq!(points[0].pos, Vec2::new(50.0, 50.0));
    assert_eq!(points[0].prev_pos, Vec2::new(50.0, 50.0));
}
