//! The simulation world: live bodies, frame orchestration and interaction.

use crate::body::{Body, BodyConfig, BodyId};
use crate::config::{SolverConfig, Tunable, WorldConfig};
use crate::constraint::Boundary;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::interaction::{self, Command, FrameInput, Interaction, PointHandle};
use crate::observer::StepObserver;
use crate::solver;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Render-side copy of one body after a step.
#[derive(Clone, Debug, PartialEq)]
pub struct BodySnapshot<F: Float> {
    pub id: BodyId,
    pub cols: usize,
    pub rows: usize,
    /// Row-major.
    pub positions: AllocVec<Vec2<F>>,
}

/// An ordered set of soft bodies inside fixed walls.
///
/// A frame is [`World::step`] (physics for every body, then body-body
/// separation) followed by the interaction commands polled for that frame.
/// Tunables live in the [`SolverConfig`] and may be changed between frames.
#[derive(Clone, Debug)]
pub struct World<F: Float> {
    bodies: AllocVec<Body<F>>,
    config: SolverConfig<F>,
    setup: WorldConfig<F>,
    boundary: Boundary<F>,
    interaction: Interaction<F>,
    next_id: u32,
    rng: SmallRng,
}

impl<F: Float> World<F> {
    /// An empty world. The walls sit `margin` inside the world edges.
    ///
    /// The solver config and the spawn body layout are validated here, so a
    /// spawn command cannot fail later.
    pub fn new(setup: WorldConfig<F>, config: SolverConfig<F>) -> Result<Self, PhysicsError> {
        config.validate()?;
        setup.spawn_body.validate()?;
        let min = Vec2::new(setup.margin, setup.margin);
        let max = Vec2::new(setup.width - setup.margin, setup.height - setup.margin);
        let finite = [min.x, min.y, max.x, max.y].iter().all(|v| v.is_finite());
        if !finite || max.x <= min.x || max.y <= min.y {
            return Err(PhysicsError::InvalidWorldSize);
        }
        Ok(World {
            bodies: AllocVec::new(),
            rng: SmallRng::seed_from_u64(setup.seed),
            boundary: Boundary::new(min, max),
            config,
            setup,
            interaction: Interaction::new(),
            next_id: 0,
        })
    }

    /// The default world with two spawn bodies side by side.
    pub fn with_default_scene() -> Result<Self, PhysicsError> {
        let mut world = Self::new(WorldConfig::new(), SolverConfig::new())?;
        world.spawn(Vec2::new(F::from_f32(300.0), F::from_f32(300.0)))?;
        world.spawn(Vec2::new(F::from_f32(900.0), F::from_f32(300.0)))?;
        Ok(world)
    }

    pub fn bodies(&self) -> &[Body<F>] { &self.bodies }
    pub fn body_count(&self) -> usize { self.bodies.len() }
    pub fn boundary(&self) -> &Boundary<F> { &self.boundary }
    pub fn setup(&self) -> &WorldConfig<F> { &self.setup }
    pub fn config(&self) -> &SolverConfig<F> { &self.config }

    /// Tunables for the next frame.
    pub fn config_mut(&mut self) -> &mut SolverConfig<F> { &mut self.config }

    /// Slider write, clamped to the tunable's range.
    pub fn set_tunable(&mut self, tunable: Tunable, value: F) {
        self.config.set_tunable(tunable, value);
    }

    pub fn body(&self, id: BodyId) -> Option<&Body<F>> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body<F>> {
        self.bodies.iter_mut().find(|b| b.id() == id)
    }

    /// Physics for one frame: every body integrates and relaxes, then each
    /// distinct pair of bodies is separated once.
    pub fn step<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        solver::step_bodies(&mut self.bodies, dt, &self.boundary, &self.config, observer);
    }

    /// A full frame: physics, then this frame's input.
    pub fn frame<O: StepObserver>(&mut self, dt: F, input: &FrameInput<F>, observer: &mut O) {
        self.step(dt, observer);
        for command in input.commands() {
            self.apply(command, observer);
        }
        self.interaction.last_pointer = Some(input.pointer);
    }

    /// Apply one interaction command.
    ///
    /// The spawn layout was validated by [`World::new`], so the spawn arm
    /// only skips the callback if that check was bypassed.
    pub fn apply<O: StepObserver>(&mut self, command: Command<F>, observer: &mut O) {
        match command {
            Command::Grab(at) => {
                let handle = self.grab(at);
                observer.on_grab(handle);
            }
            Command::Drag(to) => self.drag(to),
            Command::Release => self.release(),
            Command::Spawn(at) => {
                if let Ok(id) = self.spawn(at) {
                    observer.on_body_spawned(id);
                }
            }
            Command::RemoveAt(at) => {
                if let Some(id) = self.remove_at(at) {
                    observer.on_body_removed(id);
                }
            }
        }
    }

    /// Add the configured spawn body with its grid origin at `origin`.
    pub fn spawn(&mut self, origin: Vec2<F>) -> Result<BodyId, PhysicsError> {
        let config = self.setup.spawn_body.clone();
        self.spawn_with(origin, &config)
    }

    /// Add a body with a custom layout.
    pub fn spawn_with(&mut self, origin: Vec2<F>, config: &BodyConfig<F>) -> Result<BodyId, PhysicsError> {
        let id = BodyId(self.next_id);
        let body = Body::new(id, origin, config, &mut self.rng)?;
        self.next_id += 1;
        self.bodies.push(body);
        Ok(id)
    }

    /// Remove a body by id, clearing the grab first if it points into it.
    pub fn remove(&mut self, id: BodyId) -> Result<Body<F>, PhysicsError> {
        let pos = self
            .bodies
            .iter()
            .position(|b| b.id() == id)
            .ok_or(PhysicsError::BodyNotFound { id })?;
        if self.interaction.grabbed.map_or(false, |h| h.body == id) {
            self.interaction.grabbed = None;
        }
        Ok(self.bodies.remove(pos))
    }

    /// Remove the first body whose centroid lies within the remove radius.
    pub fn remove_at(&mut self, at: Vec2<F>) -> Option<BodyId> {
        let limit = self.setup.remove_radius;
        let id = self
            .bodies
            .iter()
            .find(|b| b.centroid().distance(at) < limit)
            .map(|b| b.id())?;
        self.remove(id).ok().map(|b| b.id())
    }

    /// Capture the nearest point within the grab radius, replacing any
    /// previous grab.
    pub fn grab(&mut self, at: Vec2<F>) -> Option<PointHandle> {
        self.interaction.grabbed = interaction::find_nearest(&self.bodies, at, self.setup.grab_radius);
        self.interaction.grabbed
    }

    /// Follow the pointer with the grabbed point, flicking its whole body by
    /// the pointer travel since the last tracked position times the throw
    /// strength.
    pub fn drag(&mut self, to: Vec2<F>) {
        let flick = self.interaction.pointer_delta(to).scale(self.config.throw_strength);
        self.interaction.last_pointer = Some(to);

        let Some(handle) = self.interaction.grabbed else {
            return;
        };
        match self.bodies.iter_mut().find(|b| b.id() == handle.body) {
            Some(body) if handle.index < body.point_count() => {
                interaction::drag_body(body, handle.index, to, flick);
            }
            _ => self.interaction.grabbed = None,
        }
    }

    pub fn release(&mut self) {
        self.interaction.grabbed = None;
    }

    pub fn grabbed(&self) -> Option<PointHandle> {
        self.interaction.grabbed
    }

    pub fn grabbed_position(&self) -> Option<Vec2<F>> {
        let handle = self.interaction.grabbed?;
        handle
            .resolve(&self.bodies)
            .and_then(|b| b.point(handle.index))
            .map(|p| p.pos)
    }

    /// Owned per-body positions for the renderer.
    pub fn snapshot(&self) -> AllocVec<BodySnapshot<F>> {
        self.bodies
            .iter()
            .map(|b| BodySnapshot {
                id: b.id(),
                cols: b.cols(),
                rows: b.rows(),
                positions: b.positions(),
            })
            .collect()
    }
}
