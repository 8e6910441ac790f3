//! Interactive 2D soft bodies built from Verlet point grids.
//!
//! `squishy` simulates roughly rectangular deformable bodies: each body is a
//! grid of point masses held together by distance links and shape-matching
//! cells, integrated under gravity and kept inside fixed walls. Bodies push
//! each other apart by their bounding boxes, and a pointer can grab a point
//! and flick its body.
//!
//! # Features
//!
//! - **Verlet integration**: implicit velocity, clamped per step against tunnelling
//! - **Relaxation solver**: links, walls with restitution, shape cells, point contact
//! - **Body contact**: least-penetration separation between bounding boxes
//! - **Interaction**: grab / drag / release a point, spawn / remove bodies
//! - **Observable**: monitor physics steps via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! # Example
//! ```
//! use squishy::{FrameInput, NoOpStepObserver, Vec2, World};
//!
//! let mut world: World<f32> = World::with_default_scene().unwrap();
//! let input = FrameInput::idle(Vec2::new(0.0, 0.0));
//! for _ in 0..60 {
//!     world.frame(1.0 / 60.0, &input, &mut NoOpStepObserver);
//! }
//! for body in world.bodies() {
//!     assert_eq!(body.positions().len(), body.cols() * body.rows());
//! }
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod aabb;
pub mod body;
pub mod collision;
pub mod solver;
pub mod interaction;
pub mod world;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::PointMass;
pub use constraint::{Boundary, Cell, Link};
pub use aabb::{Aabb, Axis};
pub use body::{Body, BodyConfig, BodyId};
pub use collision::Contact;
pub use interaction::{Command, FrameInput, PointHandle};
pub use world::{BodySnapshot, World};
pub use config::{SolverConfig, Tunable, WorldConfig};
pub use observer::{StepObserver, NoOpStepObserver, StepCounter};
pub use error::PhysicsError;
