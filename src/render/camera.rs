use crate::{
    foundation::core::{Affine, Canvas, Vec2},
    render::scene::Camera,
};

/// Orthographic camera centered on the world origin. `scale` is the half-height of the visible
/// region in world units; the half-width follows the viewport aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrthographicCamera {
    scale: f64,
    viewport: Canvas,
    projection: Affine,
}

impl OrthographicCamera {
    pub fn new(scale: f64, viewport: Canvas) -> Self {
        let mut camera = Self {
            scale,
            viewport,
            projection: Affine::IDENTITY,
        };
        camera.update(viewport);
        camera
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn viewport(&self) -> Canvas {
        self.viewport
    }

    /// Visible half extents in world units.
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.scale * self.viewport.aspect(), self.scale)
    }
}

impl Camera for OrthographicCamera {
    fn update(&mut self, viewport: Canvas) {
        self.viewport = viewport;
        let half = self.half_extents();
        let (w, h) = (f64::from(viewport.width), f64::from(viewport.height));
        // World y points up, screen y points down.
        self.projection = Affine::translate((w * 0.5, h * 0.5))
            * Affine::scale_non_uniform(w * 0.5 / half.x, -h * 0.5 / half.y);
    }

    fn world_to_screen(&self) -> Affine {
        self.projection
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/camera.rs"]
mod tests;
