use squishy::{
    Command, FrameInput, NoOpStepObserver, PointHandle, StepCounter, Tunable, Vec2, World,
};

const DT: f32 = 1.0 / 60.0;

fn scene() -> World<f32> {
    World::with_default_scene().unwrap()
}

#[test]
fn grab_picks_nearest_point_within_radius() {
    let mut world = scene();
    let target = world.bodies()[1].position_at(3, 4).unwrap();

    let handle = world.grab(Vec2::new(target.x + 3.0, target.y - 2.0));
    let id = world.bodies()[1].id();
    assert_eq!(handle, Some(PointHandle { body: id, index: 4 * 10 + 3 }));
    assert_eq!(world.grabbed(), handle);

    assert_eq!(world.grab(Vec2::new(1500.0, 900.0)), None);
    assert_eq!(world.grabbed(), None);
}

#[test]
fn drag_places_point_and_flicks_body() {
    let mut world = scene();
    let start = Vec2::new(301.0, 301.0);
    world.frame(DT, &FrameInput::idle(start), &mut NoOpStepObserver);
    world.frame(DT, &FrameInput { pressed: true, held: true, ..FrameInput::idle(start) }, &mut NoOpStepObserver);
    let handle = world.grabbed().expect("corner point should be grabbed");
    assert_eq!(world.grabbed_position(), Some(start));

    let moved = Vec2::new(311.0, 301.0);
    world.frame(DT, &FrameInput { held: true, ..FrameInput::idle(moved) }, &mut NoOpStepObserver);
    assert_eq!(world.grabbed_position(), Some(moved));

    let throw = world.config().throw_strength;
    let body = world.body(handle.body).unwrap();
    for (i, p) in body.points().iter().enumerate() {
        if i == handle.index {
            continue;
        }
        let v = p.velocity();
        assert!((v.x - 10.0 * throw).abs() < 1e-3, "point {} velocity {:?}", i, v);
        assert!(v.y.abs() < 1e-3, "point {} velocity {:?}", i, v);
    }
}

#[test]
fn release_clears_grab() {
    let mut world = scene();
    let p = world.bodies()[0].position_at(0, 0).unwrap();
    world.apply(Command::Grab(p), &mut NoOpStepObserver);
    assert!(world.grabbed().is_some());
    world.apply(Command::Release, &mut NoOpStepObserver);
    assert!(world.grabbed().is_none());
    assert_eq!(world.grabbed_position(), None);
}

#[test]
fn spawn_key_adds_body_at_pointer() {
    let mut world = scene();
    let mut counter = StepCounter::default();
    let at = Vec2::new(1200.0, 200.0);
    world.frame(DT, &FrameInput { spawn: true, ..FrameInput::idle(at) }, &mut counter);

    assert_eq!(world.body_count(), 3);
    assert_eq!(counter.spawned, 1);
    let corner = world.bodies()[2].position_at(0, 0).unwrap();
    assert!(corner.distance(at) < 3.0, "corner {:?}", corner);
}

#[test]
fn remove_key_deletes_body_under_pointer() {
    let mut world = scene();
    let second = world.bodies()[1].id();
    let centre = world.bodies()[1].centroid();
    let mut counter = StepCounter::default();
    world.frame(DT, &FrameInput { remove: true, ..FrameInput::idle(centre) }, &mut counter);

    assert_eq!(world.body_count(), 1);
    assert!(world.body(second).is_none());
    assert_eq!(counter.removed, 1);

    assert_eq!(world.remove_at(Vec2::new(1700.0, 100.0)), None);
    assert_eq!(world.body_count(), 1);
}

#[test]
fn removing_grabbed_body_clears_grab() {
    let mut world = scene();
    let corner = world.bodies()[0].position_at(0, 0).unwrap();
    let handle = world.grab(corner).unwrap();

    let removed = world.remove_at(world.bodies()[0].centroid());
    assert_eq!(removed, Some(handle.body));
    assert_eq!(world.grabbed(), None);

    // Holding the button after the body is gone is harmless.
    world.frame(DT, &FrameInput { held: true, ..FrameInput::idle(corner) }, &mut NoOpStepObserver);
    assert_eq!(world.grabbed(), None);
    assert_eq!(world.body_count(), 1);
}

#[test]
fn slider_writes_are_clamped() {
    let mut world = scene();
    world.set_tunable(Tunable::ThrowStrength, 50.0);
    assert_eq!(world.config().throw_strength, 10.0);
    world.set_tunable(Tunable::DistStiffness, -1.0);
    assert_eq!(world.config().dist_stiffness, 0.0);
    world.config_mut().iterations = 8;
    assert_eq!(world.config().iterations, 8);
}
