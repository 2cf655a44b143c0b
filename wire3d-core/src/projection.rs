/// Fixed-parameter perspective projection to screen space
use nalgebra::{Point2, Point3};

/// Perspective parameters for a target of `width` x `height` pixels.
///
/// Points are pushed `viewer_distance` units away along z and divided by
/// their resulting depth, scaled by `fov`. Screen y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov: f32,
    pub viewer_distance: f32,
    pub width: u32,
    pub height: u32,
}

impl Projection {
    pub fn new(fov: f32, viewer_distance: f32, width: u32, height: u32) -> Self {
        Self {
            fov,
            viewer_distance,
            width,
            height,
        }
    }

    /// Screen centre, using integer halves of the dimensions
    pub fn center(&self) -> (f32, f32) {
        ((self.width / 2) as f32, (self.height / 2) as f32)
    }

    fn project_f32(&self, p: &Point3<f32>) -> (f32, f32) {
        let z = p.z + self.viewer_distance;
        let factor = self.fov / z;
        let (cx, cy) = self.center();
        (p.x * factor + cx, -p.y * factor + cy)
    }

    /// Project without guarding the depth.
    ///
    /// A point at or behind the viewer (`p.z + viewer_distance <= 0`) gives an
    /// unbounded or mirrored result; float-to-int conversion truncates toward
    /// zero and saturates.
    pub fn project(&self, p: &Point3<f32>) -> Point2<i32> {
        let (x, y) = self.project_f32(p);
        Point2::new(x as i32, y as i32)
    }

    /// Project a point, or `None` if it sits at or behind the viewer
    pub fn project_checked(&self, p: &Point3<f32>) -> Option<Point2<i32>> {
        // Prevent division by zero or negative depth values
        if !(p.z + self.viewer_distance > 0.0) {
            return None;
        }

        let (x, y) = self.project_f32(p);
        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        Some(Point2::new(x as i32, y as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_center() {
        for (fov, distance) in [(500.0, 4.0), (1.0, 0.5), (250.0, 100.0)] {
            let projection = Projection::new(fov, distance, 800, 600);
            let origin = Point3::origin();
            assert_eq!(projection.project(&origin), Point2::new(400, 300));
            assert_eq!(projection.project_checked(&origin), Some(Point2::new(400, 300)));
        }
    }

    #[test]
    fn test_odd_dimensions_use_integer_center() {
        let projection = Projection::new(500.0, 4.0, 801, 599);
        assert_eq!(projection.project(&Point3::origin()), Point2::new(400, 299));
    }

    #[test]
    fn test_y_is_flipped() {
        let projection = Projection::new(100.0, 1.0, 200, 200);
        let up = projection.project(&Point3::new(0.0, 1.0, 0.0));
        let right = projection.project(&Point3::new(1.0, 0.0, 0.0));
        assert_eq!(up, Point2::new(100, 0));
        assert_eq!(right, Point2::new(200, 100));
    }

    #[test]
    fn test_farther_points_shrink() {
        let projection = Projection::new(500.0, 4.0, 800, 600);
        let near = projection.project(&Point3::new(1.0, 0.0, -1.0));
        let far = projection.project(&Point3::new(1.0, 0.0, 1.0));
        assert!(near.x > far.x);
        assert_eq!(far, Point2::new(500, 300));
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 0.5 * 3 / 1 = 1.5 from a centre of 1 -> 2.5 -> 2
        let projection = Projection::new(3.0, 1.0, 2, 2);
        assert_eq!(projection.project(&Point3::new(0.5, 0.0, 0.0)), Point2::new(2, 1));
    }

    #[test]
    fn test_checked_rejects_points_behind_viewer() {
        let projection = Projection::new(500.0, 4.0, 800, 600);
        assert_eq!(projection.project_checked(&Point3::new(0.0, 0.0, -4.0)), None);
        assert_eq!(projection.project_checked(&Point3::new(1.0, 1.0, -9.0)), None);
        assert_eq!(projection.project_checked(&Point3::new(f32::NAN, 0.0, 0.0)), None);
        assert!(projection.project_checked(&Point3::new(0.0, 0.0, -3.9)).is_some());
    }

    #[test]
    fn test_unchecked_behind_viewer_is_mirrored() {
        let projection = Projection::new(500.0, 4.0, 800, 600);
        let p = projection.project(&Point3::new(1.0, 0.0, -5.0));
        assert_eq!(p, Point2::new(-100, 300));
    }
}
