pub mod commands;
pub mod path;
pub mod primitives;

use std::sync::Arc;

pub use commands::{Border, DrawCommand, LineBreak, TextAlign, TextRun};
pub use path::{
    tessellate_fill, tessellate_rounded_border, tessellate_rounded_rect, Path, PathCommand,
    Tessellation,
};
pub use primitives::{Mesh, Vertex};

use crate::widgets::image::ImageSource;
use crate::widgets::{Color, Rect};

/// Records the draw commands of one frame.
///
/// Widgets paint in back-to-front order. An opacity stack lets a parent
/// fade its whole subtree: every color recorded while opacities are pushed
/// has its alpha multiplied by their product.
pub struct PaintContext {
    commands: Vec<DrawCommand>,
    opacity_stack: Vec<f32>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::with_capacity(32)
    }

    /// Create a PaintContext with pre-allocated capacity to avoid per-frame allocations
    pub fn with_capacity(commands: usize) -> Self {
        Self {
            commands: Vec::with_capacity(commands),
            opacity_stack: Vec::with_capacity(4),
        }
    }

    /// Clear all buffers for reuse, preserving allocated capacity
    pub fn clear(&mut self) {
        self.commands.clear();
        self.opacity_stack.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn push_opacity(&mut self, opacity: f32) {
        let combined = self.opacity() * opacity.clamp(0.0, 1.0);
        self.opacity_stack.push(combined);
    }

    pub fn pop_opacity(&mut self) {
        if self.opacity_stack.pop().is_none() {
            log::warn!("pop_opacity called with an empty opacity stack");
        }
    }

    /// Effective opacity for commands recorded now.
    pub fn opacity(&self) -> f32 {
        self.opacity_stack.last().copied().unwrap_or(1.0)
    }

    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.draw_rounded_rect(rect, color, 0.0);
    }

    pub fn draw_rounded_rect(&mut self, rect: Rect, color: Color, radius: f32) {
        self.commands.push(DrawCommand::RoundedRect {
            rect,
            color: color.with_opacity(self.opacity()),
            radius,
            border: None,
        });
    }

    /// Draw a rounded rectangle with both fill and border
    pub fn draw_rounded_rect_with_border(
        &mut self,
        rect: Rect,
        fill_color: Color,
        radius: f32,
        border: Border,
    ) {
        let opacity = self.opacity();
        self.commands.push(DrawCommand::RoundedRect {
            rect,
            color: fill_color.with_opacity(opacity),
            radius,
            border: Some(Border::new(border.width, border.color.with_opacity(opacity))),
        });
    }

    /// Draw a tessellated shape whose local origin lands at `origin`.
    pub fn draw_fill(&mut self, tessellation: Arc<Tessellation>, origin: (f32, f32), color: Color) {
        self.commands.push(DrawCommand::Fill {
            tessellation,
            origin,
            color: color.with_opacity(self.opacity()),
        });
    }

    pub fn draw_text(&mut self, mut run: TextRun) {
        run.color = run.color.with_opacity(self.opacity());
        self.commands.push(DrawCommand::Text(run));
    }

    pub fn draw_image(&mut self, source: ImageSource, rect: Rect) {
        self.commands.push(DrawCommand::Image {
            source,
            rect,
            opacity: self.opacity(),
        });
    }

    /// Flatten every solid shape into one triangle mesh, in paint order.
    ///
    /// Text and images are left to their dedicated pipelines.
    pub fn build_mesh(&self, tolerance: f32) -> Mesh {
        let mut mesh = Mesh::new();
        for command in &self.commands {
            match command {
                DrawCommand::RoundedRect {
                    rect,
                    color,
                    radius,
                    border,
                } => {
                    mesh.append(
                        &tessellate_rounded_rect(*rect, *radius, tolerance),
                        (0.0, 0.0),
                        *color,
                    );
                    if let Some(border) = border {
                        mesh.append(
                            &tessellate_rounded_border(*rect, *radius, border.width, tolerance),
                            (0.0, 0.0),
                            border.color,
                        );
                    }
                }
                DrawCommand::Fill {
                    tessellation,
                    origin,
                    color,
                } => mesh.append(tessellation, *origin, *color),
                DrawCommand::Text(_) | DrawCommand::Image { .. } => {}
            }
        }
        mesh
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_stack_multiplies() {
        let mut ctx = PaintContext::new();
        ctx.push_opacity(0.5);
        ctx.push_opacity(0.5);
        ctx.draw_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        ctx.pop_opacity();
        ctx.draw_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        ctx.pop_opacity();
        ctx.draw_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);

        let alphas: Vec<f32> = ctx
            .commands()
            .iter()
            .filter_map(|c| c.color())
            .map(|c| c.a)
            .collect();
        assert_eq!(alphas, vec![0.25, 0.5, 1.0]);
    }

    #[test]
    fn test_border_color_follows_opacity() {
        let mut ctx = PaintContext::new();
        ctx.push_opacity(0.0);
        ctx.draw_rounded_rect_with_border(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Color::BLACK,
            0.0,
            Border::new(1.0, Color::WHITE),
        );

        match &ctx.commands()[0] {
            DrawCommand::RoundedRect {
                border: Some(border),
                ..
            } => assert_eq!(border.color.a, 0.0),
            other => panic!("unexpected command {:?}", other),
        }
        assert!(ctx.build_mesh(0.25).is_empty());
    }

    #[test]
    fn test_build_mesh_skips_text_and_images() {
        let mut ctx = PaintContext::new();
        ctx.draw_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        ctx.draw_image(ImageSource::named("btn-connect"), Rect::new(0.0, 0.0, 10.0, 10.0));

        let mesh = ctx.build_mesh(0.25);
        assert!(!mesh.is_empty());
        assert!(mesh.vertices.iter().all(|v| v.color == [1.0, 1.0, 1.0, 1.0]));
    }

    #[test]
    fn test_clear_resets_commands_and_opacity() {
        let mut ctx = PaintContext::new();
        ctx.push_opacity(0.3);
        ctx.draw_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        ctx.clear();
        assert!(ctx.commands().is_empty());
        assert_eq!(ctx.opacity(), 1.0);
    }
}
