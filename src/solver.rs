//! Per-body Verlet step and relaxation passes.

use crate::body::Body;
use crate::collision;
use crate::config::SolverConfig;
use crate::constraint::{solve_point_collisions, Boundary};
use crate::float::Float;
use crate::observer::StepObserver;

impl<F: Float> Body<F> {
    /// Gravity, one integration step, then `config.iterations` relaxation
    /// passes.
    pub fn step<O: StepObserver>(
        &mut self,
        dt: F,
        boundary: &Boundary<F>,
        config: &SolverConfig<F>,
        observer: &mut O,
    ) {
        self.apply_acceleration(config.gravity);
        for p in self.points.iter_mut() {
            p.integrate(dt, config);
        }
        observer.on_integrate();

        for i in 0..config.iterations {
            self.relax(boundary, config);
            observer.on_constraint_iteration(i);
        }
    }

    /// One relaxation pass: links, world bounds, cells, then point contact.
    pub fn relax(&mut self, boundary: &Boundary<F>, config: &SolverConfig<F>) {
        for link in self.links.iter() {
            link.solve(&mut self.points, config);
        }
        for p in self.points.iter_mut() {
            boundary.solve(p, config.bounce);
        }
        for cell in self.cells.iter() {
            cell.solve(&mut self.points, config);
        }
        solve_point_collisions(&mut self.points, config);
    }
}

/// Advance every body one frame, then separate overlapping bodies.
pub fn step_bodies<F: Float, O: StepObserver>(
    bodies: &mut [Body<F>],
    dt: F,
    boundary: &Boundary<F>,
    config: &SolverConfig<F>,
    observer: &mut O,
) {
    for body in bodies.iter_mut() {
        body.step(dt, boundary, config, observer);
    }
    collision::resolve_all(bodies, observer);
    observer.on_step_complete();
}
