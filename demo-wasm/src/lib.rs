use squishy::{FrameInput, NoOpStepObserver, Tunable, Vec2, World};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct SquishyDemo {
    world: World<f32>,
}

#[wasm_bindgen]
impl SquishyDemo {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SquishyDemo, JsValue> {
        let world = World::with_default_scene().map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(SquishyDemo { world })
    }

    /// One frame: physics, then the input polled by the page.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        dt: f32,
        pointer_x: f32,
        pointer_y: f32,
        pressed: bool,
        held: bool,
        released: bool,
        spawn: bool,
        remove: bool,
    ) {
        let input = FrameInput {
            pointer: Vec2::new(pointer_x, pointer_y),
            pressed,
            held,
            released,
            spawn,
            remove,
        };
        self.world.frame(dt, &input, &mut NoOpStepObserver);
    }

    /// Slider write; `index` follows `Tunable::ALL`.
    pub fn set_tunable(&mut self, index: usize, value: f32) {
        if let Some(&tunable) = Tunable::ALL.get(index) {
            self.world.set_tunable(tunable, value);
        }
    }

    /// Returns [min, max] for the slider at `index`.
    pub fn tunable_range(&self, index: usize) -> Vec<f32> {
        match Tunable::ALL.get(index) {
            Some(t) => {
                let (lo, hi) = t.range::<f32>();
                vec![lo, hi]
            }
            None => Vec::new(),
        }
    }

    pub fn tunable_label(&self, index: usize) -> String {
        Tunable::ALL.get(index).map_or_else(String::new, |t| t.label().to_string())
    }

    /// Returns [min_x, min_y, max_x, max_y] of the walls.
    pub fn bounds(&self) -> Vec<f32> {
        let b = self.world.boundary();
        vec![b.min.x, b.min.y, b.max.x, b.max.y]
    }

    pub fn body_count(&self) -> usize {
        self.world.body_count()
    }

    /// Returns positions for body at index as flat [x0, y0, x1, y1, ...] in row-major order
    pub fn body_positions(&self, index: usize) -> Vec<f32> {
        let Some(body) = self.world.bodies().get(index) else {
            return Vec::new();
        };
        let pos = body.positions();
        let mut out = Vec::with_capacity(pos.len() * 2);
        for p in &pos {
            out.push(p.x);
            out.push(p.y);
        }
        out
    }

    pub fn body_cols(&self, index: usize) -> usize {
        self.world.bodies().get(index).map_or(0, |b| b.cols())
    }

    pub fn body_rows(&self, index: usize) -> usize {
        self.world.bodies().get(index).map_or(0, |b| b.rows())
    }

    /// Returns [x, y] of the grabbed point, or an empty array.
    pub fn grabbed_position(&self) -> Vec<f32> {
        match self.world.grabbed_position() {
            Some(p) => vec![p.x, p.y],
            None => Vec::new(),
        }
    }
}
