/// Scene builders: geometry -> transform -> projection -> rasterization
use nalgebra::Point2;

use crate::color::Color;
use crate::geometry::Wireframe;
use crate::projection::Projection;
use crate::raster::Raster;
use crate::transform::{RotationOrder, RotationState, Transform};

/// Something that can populate a raster target in a single pass
pub trait Scene {
    fn name(&self) -> &'static str;

    fn render(&self, target: &mut dyn Raster) -> DrawReport;
}

/// Colors and marker size for a wireframe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireStyle {
    pub edge_color: Color,
    pub vertex_color: Color,
    pub vertex_radius: i32,
}

impl Default for WireStyle {
    fn default() -> Self {
        Self {
            edge_color: Color::CYAN,
            vertex_color: Color::YELLOW,
            vertex_radius: 4,
        }
    }
}

/// What a scene put into its target
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawReport {
    /// Screen position of each vertex, `None` when it was culled
    pub projected: Vec<Option<Point2<i32>>>,
    pub lines: usize,
    pub disks: usize,
}

/// Rotate, project and draw `wireframe`: all edges first, then a disk on every vertex.
pub fn draw_wireframe(
    target: &mut dyn Raster,
    wireframe: &Wireframe,
    rotation: &RotationState,
    order: RotationOrder,
    projection: &Projection,
    style: &WireStyle,
) -> DrawReport {
    let projected: Vec<Option<Point2<i32>>> = wireframe
        .vertices()
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let rotated = Transform::rotate(v, rotation, order);
            let screen = projection.project_checked(&rotated);
            if screen.is_none() {
                tracing::warn!(vertex = i, z = rotated.z, "vertex behind viewer, culled");
            }
            screen
        })
        .collect();

    let mut report = DrawReport::default();

    for edge in wireframe.edges() {
        if let (Some(p0), Some(p1)) = (projected[edge.a], projected[edge.b]) {
            target.draw_line(p0.x, p0.y, p1.x, p1.y, style.edge_color);
            report.lines += 1;
        }
    }

    for p in projected.iter().flatten() {
        target.draw_disk(p.x, p.y, style.vertex_radius, style.vertex_color);
        report.disks += 1;
    }

    tracing::debug!(
        lines = report.lines,
        disks = report.disks,
        skipped = wireframe.edges().len() - report.lines,
        "wireframe drawn"
    );

    report.projected = projected;
    report
}

/// A rotated, perspective-projected wireframe cube
#[derive(Debug, Clone, PartialEq)]
pub struct CubeScene {
    /// Half the side length
    pub size: f32,
    pub rotation: RotationState,
    pub order: RotationOrder,
    pub fov: f32,
    pub distance: f32,
    pub style: WireStyle,
}

impl Default for CubeScene {
    fn default() -> Self {
        Self {
            size: 1.0,
            rotation: RotationState::new(0.5, 0.8, 0.0),
            order: RotationOrder::XYZ,
            fov: 500.0,
            distance: 4.0,
            style: WireStyle::default(),
        }
    }
}

impl Scene for CubeScene {
    fn name(&self) -> &'static str {
        "cube"
    }

    fn render(&self, target: &mut dyn Raster) -> DrawReport {
        let (width, height) = target.dimensions();
        let projection = Projection::new(self.fov, self.distance, width, height);
        draw_wireframe(
            target,
            &Wireframe::cube(self.size),
            &self.rotation,
            self.order,
            &projection,
            &self.style,
        )
    }
}

/// Four flat markers around the canvas centre
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DotsScene;

impl DotsScene {
    const MARKERS: [(i32, i32, i32, Color); 4] = [
        (0, 0, 10, Color::WHITE),
        (-100, 0, 8, Color::RED),
        (100, 0, 8, Color::GREEN),
        (0, -100, 8, Color::BLUE),
    ];
}

impl Scene for DotsScene {
    fn name(&self) -> &'static str {
        "dots"
    }

    fn render(&self, target: &mut dyn Raster) -> DrawReport {
        let (width, height) = target.dimensions();
        let (cx, cy) = ((width / 2) as i32, (height / 2) as i32);

        let mut report = DrawReport::default();
        for (dx, dy, radius, color) in Self::MARKERS {
            let center = Point2::new(cx + dx, cy + dy);
            target.draw_disk(center.x, center.y, radius, color);
            report.projected.push(Some(center));
            report.disks += 1;
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use crate::geometry::Edge;
    use crate::raster::{disk, line};
    use nalgebra::Point3;

    /// Draws into a framebuffer while counting primitives and writes
    struct Counting {
        fb: Framebuffer,
        lines: usize,
        disks: usize,
        writes: usize,
    }

    impl Counting {
        fn new(width: u32, height: u32) -> Self {
            Self {
                fb: Framebuffer::new(width, height).unwrap(),
                lines: 0,
                disks: 0,
                writes: 0,
            }
        }
    }

    impl Raster for Counting {
        fn dimensions(&self) -> (u32, u32) {
            self.fb.dimensions()
        }

        fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
            self.writes += 1;
            self.fb.set_pixel(x, y, color);
        }

        fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
            self.lines += 1;
            line(self, x0, y0, x1, y1, color);
        }

        fn draw_disk(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
            self.disks += 1;
            disk(self, cx, cy, radius, color);
        }
    }

    #[test]
    fn test_reference_cube() {
        let mut target = Counting::new(800, 600);
        let report = CubeScene::default().render(&mut target);

        let expected = [
            (178, 352),
            (340, 385),
            (468, 74),
            (289, 147),
            (358, 435),
            (537, 490),
            (597, 252),
            (424, 264),
        ];
        let projected: Vec<_> = report.projected.iter().map(|p| p.unwrap()).collect();
        assert_eq!(
            projected,
            expected.iter().map(|&(x, y)| Point2::new(x, y)).collect::<Vec<_>>()
        );
        assert!(projected
            .iter()
            .all(|p| (0..800).contains(&p.x) && (0..600).contains(&p.y)));

        assert_eq!((report.lines, report.disks), (12, 8));
        assert_eq!((target.lines, target.disks), (12, 8));

        let line_pixels: usize = CUBE_EDGE_PAIRS
            .iter()
            .map(|&(a, b)| {
                let (p, q) = (projected[a], projected[b]);
                (p.x - q.x).abs().max((p.y - q.y).abs()) as usize + 1
            })
            .sum();
        assert_eq!(target.writes, line_pixels + 8 * 49);

        let lit = target
            .fb
            .pixels()
            .iter()
            .filter(|&&c| c != Color::BLACK)
            .count();
        // segments share pixels at the corners and disks cover their ends
        assert!(lit > line_pixels, "{lit} lit, {line_pixels} line pixels");
        assert!(lit <= target.writes);

        for p in &projected {
            assert_eq!(target.fb.get_pixel(p.x, p.y), Some(Color::YELLOW));
        }
        let cyan = target
            .fb
            .pixels()
            .iter()
            .filter(|&&c| c == Color::CYAN)
            .count();
        assert!(cyan > 1500);
    }

    const CUBE_EDGE_PAIRS: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];

    #[test]
    fn test_unrotated_cube_is_symmetric() {
        let mut fb = Framebuffer::new(800, 600).unwrap();
        let scene = CubeScene {
            rotation: RotationState::zero(),
            ..CubeScene::default()
        };
        let report = scene.render(&mut fb);
        // front face at depth 5, back face at depth 3
        assert_eq!(report.projected[6], Some(Point2::new(500, 200)));
        assert_eq!(report.projected[4], Some(Point2::new(300, 400)));
        assert_eq!(report.projected[0], Some(Point2::new(233, 466)));
        assert_eq!(report.projected[2], Some(Point2::new(566, 133)));
    }

    #[test]
    fn test_order_changes_output() {
        let rotation = RotationState::new(0.5, 0.8, 0.3);
        let render = |order| {
            let mut fb = Framebuffer::new(200, 200).unwrap();
            CubeScene {
                rotation,
                order,
                fov: 100.0,
                ..CubeScene::default()
            }
            .render(&mut fb);
            fb
        };
        assert_ne!(render(RotationOrder::XYZ), render(RotationOrder::ZYX));
    }

    #[test]
    fn test_vertices_behind_viewer_are_culled() {
        let mut target = Counting::new(100, 100);
        let wireframe = Wireframe::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 0.0, -10.0),
            ],
            vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)],
        )
        .unwrap();
        let report = draw_wireframe(
            &mut target,
            &wireframe,
            &RotationState::zero(),
            RotationOrder::XYZ,
            &Projection::new(10.0, 2.0, 100, 100),
            &WireStyle::default(),
        );
        assert_eq!(report.projected[2], None);
        assert_eq!((report.lines, report.disks), (1, 2));
        assert_eq!((target.lines, target.disks), (1, 2));
    }

    #[test]
    fn test_offscreen_geometry_is_clipped() {
        let mut fb = Framebuffer::new(50, 50).unwrap();
        let scene = CubeScene {
            size: 10.0,
            distance: 40.0,
            ..CubeScene::default()
        };
        let report = scene.render(&mut fb);
        assert_eq!(report.lines, 12);
        assert!(report
            .projected
            .iter()
            .flatten()
            .all(|p| !(0..50).contains(&p.x) || !(0..50).contains(&p.y)));
        assert_eq!(fb.pixels().len(), 2500);
    }

    #[test]
    fn test_dots() {
        let mut target = Counting::new(800, 600);
        let report = DotsScene.render(&mut target);
        assert_eq!(report.disks, 4);
        assert_eq!(target.writes, 317 + 3 * 197);
        assert_eq!(target.fb.get_pixel(400, 300), Some(Color::WHITE));
        assert_eq!(target.fb.get_pixel(300, 300), Some(Color::RED));
        assert_eq!(target.fb.get_pixel(508, 300), Some(Color::GREEN));
        assert_eq!(target.fb.get_pixel(400, 192), Some(Color::BLUE));
        assert_eq!(target.fb.get_pixel(400, 250), Some(Color::BLACK));
    }

    #[test]
    fn test_scene_names() {
        assert_eq!(CubeScene::default().name(), "cube");
        assert_eq!(DotsScene.name(), "dots");
    }
}
