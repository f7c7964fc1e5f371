use vello_cpu::kurbo::Shape as _;

use crate::{
    foundation::config::RenderConfig,
    foundation::core::{Affine, Canvas, Point},
    foundation::error::{GlyphTrailError, GlyphTrailResult},
    render::{
        frame::FrameRGBA,
        scene::{PointSet, Scene, SegmentSet},
    },
};

/// Colors and sizes used by [`CpuScene`]. Colors are straight RGBA8.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneStyle {
    pub background_rgba8: [u8; 4],
    pub point_rgba8: [u8; 4],
    pub point_radius_px: f64,
    pub line_rgba8: [u8; 4],
    pub line_width_px: f64,
}

impl From<&RenderConfig> for SceneStyle {
    fn from(cfg: &RenderConfig) -> Self {
        Self {
            background_rgba8: cfg.background_rgba8,
            point_rgba8: cfg.point_rgba8,
            point_radius_px: cfg.point_radius_px,
            line_rgba8: cfg.line_rgba8,
            line_width_px: cfg.line_width_px,
        }
    }
}

/// Software scene backed by `vello_cpu`: visible points become filled dots, connectors become
/// stroked hairlines.
pub struct CpuScene {
    width: u16,
    height: u16,
    style: SceneStyle,
    view: Affine,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    drawn_points: usize,
    drawn_segments: usize,
}

impl CpuScene {
    pub fn new(canvas: Canvas, style: SceneStyle) -> GlyphTrailResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| GlyphTrailError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| GlyphTrailError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(GlyphTrailError::render("surface must be non-empty"));
        }
        Ok(Self {
            width,
            height,
            style,
            view: Affine::IDENTITY,
            ctx: vello_cpu::RenderContext::new(width, height),
            pixmap: vello_cpu::Pixmap::new(width, height),
            drawn_points: 0,
            drawn_segments: 0,
        })
    }

    /// Set the world-to-pixel projection, usually from a camera.
    pub fn set_view(&mut self, view: Affine) {
        self.view = view;
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: u32::from(self.width),
            height: u32::from(self.height),
        }
    }

    /// Dots and segments drawn since the last `begin_frame`.
    pub fn draw_counts(&self) -> (usize, usize) {
        (self.drawn_points, self.drawn_segments)
    }

    /// Rasterize everything submitted since `begin_frame` and read the pixels back.
    pub fn finish(&mut self) -> GlyphTrailResult<FrameRGBA> {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

impl Scene for CpuScene {
    fn begin_frame(&mut self) -> GlyphTrailResult<()> {
        self.ctx = vello_cpu::RenderContext::new(self.width, self.height);
        self.drawn_points = 0;
        self.drawn_segments = 0;

        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color(self.style.background_rgba8));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
        Ok(())
    }

    fn submit_points(&mut self, set: PointSet<'_>) -> GlyphTrailResult<()> {
        if set.points.len() != set.visibility.len() {
            return Err(GlyphTrailError::render(format!(
                "point set '{}' has {} points but {} visibility flags",
                set.name,
                set.points.len(),
                set.visibility.len()
            )));
        }

        let to_screen = self.view * set.transform;
        let mut dots = vello_cpu::kurbo::BezPath::new();
        let mut count = 0;
        for (p, _) in set
            .points
            .iter()
            .zip(set.visibility)
            .filter(|(_, v)| **v != 0)
        {
            let center = point_to_cpu(to_screen * p.position);
            let circle = vello_cpu::kurbo::Circle::new(center, self.style.point_radius_px);
            for el in circle.path_elements(0.1) {
                dots.push(el);
            }
            count += 1;
        }
        if count == 0 {
            return Ok(());
        }

        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color(self.style.point_rgba8));
        self.ctx.fill_path(&dots);
        self.drawn_points += count;
        Ok(())
    }

    fn submit_segments(&mut self, set: SegmentSet<'_>) -> GlyphTrailResult<()> {
        if set.vertices.len() % 2 != 0 {
            return Err(GlyphTrailError::render(
                "segment vertex buffer must hold pairs",
            ));
        }
        if set.vertices.is_empty() {
            return Ok(());
        }

        let mut lines = vello_cpu::kurbo::BezPath::new();
        for pair in set.vertices.chunks_exact(2) {
            lines.move_to(point_to_cpu(self.view * pair[0]));
            lines.line_to(point_to_cpu(self.view * pair[1]));
        }

        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_stroke(vello_cpu::kurbo::Stroke::new(self.style.line_width_px));
        self.ctx.set_paint(color(self.style.line_rgba8));
        self.ctx.stroke_path(&lines);
        self.drawn_segments += set.vertices.len() / 2;
        Ok(())
    }
}

fn color([r, g, b, a]: [u8; 4]) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
