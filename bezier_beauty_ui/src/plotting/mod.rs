mod frame_shapes;

pub use frame_shapes::*;

use std::sync::Arc;

use bezier_beauty::core::math::Vector2;
use egui::epaint;
use log::warn;
use lyon::{
    path::Path,
    tessellation::{
        BuffersBuilder, StrokeOptions, StrokeTessellator, StrokeVertexConstructor, VertexBuffers,
    },
};

/// Maps animation coordinates (origin bottom left, y up) onto a canvas rect (y down).
#[derive(Debug, Clone, Copy)]
pub struct CanvasTransform {
    rect: egui::Rect,
}

impl CanvasTransform {
    pub fn new(rect: egui::Rect) -> Self {
        Self { rect }
    }

    /// Screen position for `v`, `screen_y = height - y` offset by the canvas origin.
    #[inline]
    pub fn to_screen(&self, v: Vector2) -> egui::Pos2 {
        egui::pos2(
            self.rect.min.x + v.x as f32,
            self.rect.min.y + self.rect.height() - v.y as f32,
        )
    }
}

/// Convert a Vector2 to lyon Point adjusted for the canvas using the canvas transform.
fn lyon_point(v: Vector2, transform: &CanvasTransform) -> lyon::math::Point {
    let p = transform.to_screen(v);
    lyon::math::point(p.x, p.y)
}

/// Open lyon path through all `points` in order, `None` if there is no segment to draw.
fn polyline_path(points: &[Vector2], transform: &CanvasTransform) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }

    let mut builder = Path::builder();
    builder.begin(lyon_point(*first, transform));
    for p in rest {
        builder.line_to(lyon_point(*p, transform));
    }
    builder.end(false);
    Some(builder.build())
}

/// Tessellate connected line segments through `points` into a single mesh shape.
///
/// Returns `None` if there is nothing to draw or tessellation fails (failure is logged).
pub fn stroke_polyline(
    points: &[Vector2],
    transform: &CanvasTransform,
    line_width: f32,
    color: epaint::Color32,
) -> Option<egui::Shape> {
    let path = polyline_path(points, transform)?;
    let mut lyon_mesh: VertexBuffers<_, u32> = VertexBuffers::new();
    let mut stroke_tess = StrokeTessellator::new();

    if let Err(err) = stroke_tess.tessellate_path(
        &path,
        &StrokeOptions::DEFAULT.with_line_width(line_width),
        &mut BuffersBuilder::new(&mut lyon_mesh, VertexConstructor { color }),
    ) {
        warn!(
            "failed to tessellate polyline of {} points: {:?}",
            points.len(),
            err
        );
        return None;
    }

    let mesh = epaint::Mesh {
        vertices: lyon_mesh.vertices,
        indices: lyon_mesh.indices,
        texture_id: Default::default(),
    };
    Some(egui::Shape::mesh(Arc::new(mesh)))
}

struct VertexConstructor {
    color: epaint::Color32,
}

impl StrokeVertexConstructor<epaint::Vertex> for VertexConstructor {
    fn new_vertex(&mut self, vertex: lyon::tessellation::StrokeVertex<'_, '_>) -> epaint::Vertex {
        let p = vertex.position();
        let pos = epaint::Pos2::new(p.x, p.y);
        epaint::Vertex {
            pos,
            uv: epaint::WHITE_UV,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> CanvasTransform {
        CanvasTransform::new(egui::Rect::from_min_size(
            egui::pos2(10.0, 20.0),
            egui::vec2(700.0, 700.0),
        ))
    }

    #[test]
    fn y_axis_flipped() {
        let t = canvas();
        assert_eq!(t.to_screen(Vector2::new(0.0, 0.0)), egui::pos2(10.0, 720.0));
        assert_eq!(t.to_screen(Vector2::new(350.0, 650.0)), egui::pos2(360.0, 70.0));
        assert_eq!(t.to_screen(Vector2::new(700.0, 700.0)), egui::pos2(710.0, 20.0));
    }

    #[test]
    fn no_path_without_segments() {
        let t = canvas();
        assert!(polyline_path(&[], &t).is_none());
        assert!(polyline_path(&[Vector2::new(1.0, 1.0)], &t).is_none());
        let single = [Vector2::new(1.0, 1.0)];
        assert!(stroke_polyline(&single, &t, 1.0, epaint::Color32::RED).is_none());
    }

    #[test]
    fn stroke_produces_mesh() {
        let t = canvas();
        let pts = [
            Vector2::new(0.0, 0.0),
            Vector2::new(100.0, 0.0),
            Vector2::new(100.0, 50.0),
        ];
        match stroke_polyline(&pts, &t, 1.0, epaint::Color32::RED) {
            Some(egui::Shape::Mesh(mesh)) => {
                assert!(!mesh.vertices.is_empty());
                assert!(!mesh.indices.is_empty());
                assert!(mesh.vertices.iter().all(|v| v.color == epaint::Color32::RED));
            }
            other => panic!("expected mesh shape, got {other:?}"),
        }
    }
}
