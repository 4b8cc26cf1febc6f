use egui::{Color32, Pos2};

use crate::renderer::Surface;

// Immutable stroke, as committed to history
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

// Mutable stroke for the one being drawn
#[derive(Clone, Debug, PartialEq)]
pub struct MutableStroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

/// A committed stroke needs at least this many points to be drawable
pub const MIN_STROKE_POINTS: usize = 2;

impl Stroke {
    pub fn new(color: Color32, thickness: f32, points: Vec<Pos2>) -> Self {
        Self {
            points,
            color,
            thickness,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Draws the stroke as a round-capped polyline
    pub fn display(&self, surface: &mut dyn Surface) {
        if self.points.len() < MIN_STROKE_POINTS {
            return;
        }
        surface.polyline(&self.points, self.thickness, self.color);
    }
}

impl MutableStroke {
    // Start a stroke at the pointer-down position
    pub fn new(start: Pos2, color: Color32, thickness: f32) -> Self {
        Self {
            points: vec![start],
            color,
            thickness,
        }
    }

    /// Appends a point; repeating the last point adds nothing
    pub fn add_point(&mut self, point: Pos2) {
        if self.points.last() != Some(&point) {
            self.points.push(point);
        }
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn display(&self, surface: &mut dyn Surface) {
        if self.points.len() < MIN_STROKE_POINTS {
            return;
        }
        surface.polyline(&self.points, self.thickness, self.color);
    }

    /// Freezes the stroke. Strokes too short to draw are dropped.
    pub fn finish(self) -> Option<Stroke> {
        if self.points.len() < MIN_STROKE_POINTS {
            return None;
        }
        Some(Stroke::new(self.color, self.thickness, self.points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_point_stroke_is_dropped() {
        let stroke = MutableStroke::new(Pos2::new(1.0, 1.0), Color32::BLACK, 2.0);
        assert_eq!(stroke.point_count(), 1);
        assert!(stroke.finish().is_none());
    }

    #[test]
    fn test_repeated_point_is_not_added() {
        let mut stroke = MutableStroke::new(Pos2::new(12.0, 12.0), Color32::BLACK, 2.0);
        stroke.add_point(Pos2::new(12.0, 12.0));
        assert_eq!(stroke.point_count(), 1);
        assert!(stroke.finish().is_none());
    }

    #[test]
    fn test_finish_keeps_points_in_order() {
        let mut stroke = MutableStroke::new(Pos2::new(0.0, 0.0), Color32::RED, 8.0);
        stroke.add_point(Pos2::new(5.0, 5.0));
        stroke.add_point(Pos2::new(10.0, 0.0));

        let stroke = stroke.finish().unwrap();
        assert_eq!(
            stroke.points(),
            &[Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0), Pos2::new(10.0, 0.0)]
        );
        assert_eq!(stroke.color(), Color32::RED);
        assert_eq!(stroke.thickness(), 8.0);
    }
}
