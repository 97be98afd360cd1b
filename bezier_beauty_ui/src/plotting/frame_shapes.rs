use bezier_beauty::animation::FrameData;
use egui::{Shape, Stroke};

use super::{CanvasTransform, stroke_polyline};
use crate::theme::ThemeColors;

/// Shapes for one animation frame: every handle level (circles at each point plus connecting
/// segments) followed by the curve trail.
pub fn frame_shapes(
    frame: &FrameData<'_>,
    transform: &CanvasTransform,
    colors: &ThemeColors,
) -> Vec<Shape> {
    let mut shapes = Vec::new();

    for (i, level) in frame.cascade.iter() {
        let color = colors.level_color(i);
        let circle_stroke = Stroke::new(colors.handle_circle_stroke, color);
        shapes.extend(level.iter().map(|p| {
            Shape::circle_stroke(
                transform.to_screen(*p),
                colors.handle_circle_radius,
                circle_stroke,
            )
        }));

        shapes.extend(stroke_polyline(level, transform, colors.line_stroke, color));
    }

    shapes.extend(stroke_polyline(
        frame.trail,
        transform,
        colors.line_stroke,
        colors.trail_color(frame.sides),
    ));

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use bezier_beauty::animation::Animator;

    fn transform() -> CanvasTransform {
        CanvasTransform::new(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(700.0, 700.0),
        ))
    }

    fn count_shapes(shapes: &[Shape]) -> (usize, usize) {
        let circles = shapes
            .iter()
            .filter(|s| matches!(s, Shape::Circle(_)))
            .count();
        let meshes = shapes
            .iter()
            .filter(|s| matches!(s, Shape::Mesh(_)))
            .count();
        (circles, meshes)
    }

    #[test]
    fn first_frame_has_no_trail_segment() {
        let mut animator = Animator::default();
        let frame = animator.tick();
        let shapes = frame_shapes(&frame, &transform(), &ThemeColors::default());
        let (circles, meshes) = count_shapes(&shapes);
        // triangle: levels of 4, 3 and 2 points
        assert_eq!(circles, 4 + 3 + 2);
        // one mesh per level, single point trail draws nothing
        assert_eq!(meshes, 3);
    }

    #[test]
    fn trail_drawn_once_it_has_a_segment() {
        let mut animator = Animator::default();
        animator.tick();
        let frame = animator.tick();
        assert_eq!(frame.trail.len(), 2);
        let shapes = frame_shapes(&frame, &transform(), &ThemeColors::default());
        let (_, meshes) = count_shapes(&shapes);
        assert_eq!(meshes, 4);
    }

    #[test]
    fn empty_frame_draws_nothing() {
        let animator = Animator::default();
        let shapes = frame_shapes(&animator.frame(), &transform(), &ThemeColors::default());
        assert!(shapes.is_empty());
    }
}
