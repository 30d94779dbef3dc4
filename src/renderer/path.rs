//! Vector paths and their fill/stroke tessellation.
//!
//! Paths are built in a widget's local coordinates and tessellated into
//! indexed triangles with lyon. Tessellation output stays in local
//! coordinates; the mesh builder offsets it by the draw origin.

use lyon::math::{point as lyon_point, Box2D};
use lyon::path::builder::BorderRadii;
use lyon::path::{Path as LyonPath, Winding};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

use crate::widgets::Rect;

/// A single segment of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    /// Quadratic bezier through a control point to an end point.
    QuadTo {
        control: (f32, f32),
        end: (f32, f32),
    },
    Close,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(x, y));
        self
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.commands.push(PathCommand::LineTo(x, y));
        self
    }

    pub fn quad_to(&mut self, control: (f32, f32), end: (f32, f32)) -> &mut Self {
        self.commands.push(PathCommand::QuadTo { control, end });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn to_lyon(&self) -> LyonPath {
        let mut builder = LyonPath::builder();
        let mut open = false;

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(x, y) => {
                    if open {
                        builder.end(false);
                    }
                    builder.begin(lyon_point(x, y));
                    open = true;
                }
                PathCommand::LineTo(x, y) => {
                    if !open {
                        builder.begin(lyon_point(x, y));
                        open = true;
                    } else {
                        builder.line_to(lyon_point(x, y));
                    }
                }
                PathCommand::QuadTo { control, end } => {
                    if open {
                        builder.quadratic_bezier_to(
                            lyon_point(control.0, control.1),
                            lyon_point(end.0, end.1),
                        );
                    }
                }
                PathCommand::Close => {
                    if open {
                        builder.end(true);
                        open = false;
                    }
                }
            }
        }

        if open {
            builder.end(false);
        }
        builder.build()
    }
}

/// Indexed triangles in local coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tessellation {
    pub vertices: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl Tessellation {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Sum of triangle areas; used to sanity-check coverage.
    pub fn area(&self) -> f32 {
        self.indices
            .chunks_exact(3)
            .map(|tri| {
                let a = self.vertices[tri[0] as usize];
                let b = self.vertices[tri[1] as usize];
                let c = self.vertices[tri[2] as usize];
                ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])).abs() / 2.0
            })
            .sum()
    }

    /// True if the local point lies inside any triangle, edges included.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.indices.chunks_exact(3).any(|tri| {
            let a = self.vertices[tri[0] as usize];
            let b = self.vertices[tri[1] as usize];
            let c = self.vertices[tri[2] as usize];
            let d1 = edge_side(a, b, x, y);
            let d2 = edge_side(b, c, x, y);
            let d3 = edge_side(c, a, x, y);
            let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
            let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
            !(has_neg && has_pos)
        })
    }
}

fn edge_side(a: [f32; 2], b: [f32; 2], x: f32, y: f32) -> f32 {
    (x - b[0]) * (a[1] - b[1]) - (a[0] - b[0]) * (y - b[1])
}

struct PositionCtor;

impl FillVertexConstructor<[f32; 2]> for PositionCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> [f32; 2] {
        vertex.position().to_array()
    }
}

impl StrokeVertexConstructor<[f32; 2]> for PositionCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> [f32; 2] {
        vertex.position().to_array()
    }
}

/// Tessellate a path's interior. Open subpaths are closed implicitly.
pub fn tessellate_fill(path: &Path, tolerance: f32) -> Tessellation {
    if path.is_empty() {
        return Tessellation::default();
    }
    fill_lyon(&path.to_lyon(), tolerance)
}

/// Tessellate a rounded rectangle's interior.
pub fn tessellate_rounded_rect(rect: Rect, radius: f32, tolerance: f32) -> Tessellation {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Tessellation::default();
    }
    fill_lyon(&rounded_rect_path(rect, radius), tolerance)
}

/// Tessellate the outline of a rounded rectangle, centred on its edge.
pub fn tessellate_rounded_border(
    rect: Rect,
    radius: f32,
    width: f32,
    tolerance: f32,
) -> Tessellation {
    if rect.width <= 0.0 || rect.height <= 0.0 || width <= 0.0 {
        return Tessellation::default();
    }

    let mut buffers: VertexBuffers<[f32; 2], u32> = VertexBuffers::new();
    let options = StrokeOptions::default()
        .with_line_width(width)
        .with_tolerance(tolerance);
    let result = StrokeTessellator::new().tessellate_path(
        &rounded_rect_path(rect, radius),
        &options,
        &mut BuffersBuilder::new(&mut buffers, PositionCtor),
    );

    if let Err(err) = result {
        log::warn!("Border tessellation failed: {:?}", err);
        return Tessellation::default();
    }

    Tessellation {
        vertices: buffers.vertices,
        indices: buffers.indices,
    }
}

fn rounded_rect_path(rect: Rect, radius: f32) -> LyonPath {
    let radius = radius.clamp(0.0, rect.width.min(rect.height) / 2.0);
    let bounds = Box2D::new(
        lyon_point(rect.x, rect.y),
        lyon_point(rect.x + rect.width, rect.y + rect.height),
    );
    let mut builder = LyonPath::builder();
    if radius > 0.0 {
        builder.add_rounded_rectangle(&bounds, &BorderRadii::new(radius), Winding::Positive);
    } else {
        builder.add_rectangle(&bounds, Winding::Positive);
    }
    builder.build()
}

fn fill_lyon(path: &LyonPath, tolerance: f32) -> Tessellation {
    let mut buffers: VertexBuffers<[f32; 2], u32> = VertexBuffers::new();
    let options = FillOptions::default().with_tolerance(tolerance);
    let result = FillTessellator::new().tessellate_path(
        path,
        &options,
        &mut BuffersBuilder::new(&mut buffers, PositionCtor),
    );

    if let Err(err) = result {
        log::warn!("Fill tessellation failed: {:?}", err);
        return Tessellation::default();
    }

    Tessellation {
        vertices: buffers.vertices,
        indices: buffers.indices,
    }
}
