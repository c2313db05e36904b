//! Helper struct for drawing a 3D scene onto the screen.
//! Each axis is scaled so its data range fills one side of the axes box, and
//! the box is viewed through an orthographic camera.

use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, Ui, Vec2, emath::Rot2, pos2, vec2};
use strum::IntoEnumIterator;

use super::scene::{Axis, AxisLimits, Quiver, QuiverStyle, Scene, View};

// relative size of the box sides, horizontal, horizontal, vertical
const BOX_ASPECT: [f64; 3] = [1.0, 1.0, 0.75];
const HEAD_ANGLE_DEGREES: f32 = 15.0;
const VIEW_FILL: f32 = 0.6;
const LABEL_OFFSET: f64 = 0.12;

const BOX_COLOUR: Color32 = Color32::from_rgb(70, 70, 70);

/// Maps data coordinates to a 2D position (x right, y up) and a depth
/// (larger is closer to the camera).
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    limits: AxisLimits,
    vertical_axis: Axis,
    right: [f64; 3],
    up: [f64; 3],
    towards_eye: [f64; 3],
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

impl Projection {
    pub fn new(view: &View, limits: AxisLimits) -> Self {
        let (elev, azim) = (view.elevation.to_radians(), view.azimuth.to_radians());
        Projection {
            limits,
            vertical_axis: view.vertical_axis,
            right: [-azim.sin(), azim.cos(), 0.0],
            up: [-elev.sin() * azim.cos(), -elev.sin() * azim.sin(), elev.cos()],
            towards_eye: [elev.cos() * azim.cos(), elev.cos() * azim.sin(), elev.sin()],
        }
    }

    /// Position inside the axes box, each coordinate in [-0.5, 0.5].
    fn normalise(&self, p: [f64; 3]) -> [f64; 3] {
        let mut n = [0.0; 3];
        for axis in Axis::iter() {
            let i = axis.index();
            n[i] = (p[i] - self.limits.min[i]) / self.limits.span(axis) - 0.5;
        }
        n
    }

    /// Reorders box coordinates so the vertical axis comes last.
    fn roll(&self, n: [f64; 3]) -> [f64; 3] {
        let [x, y, z] = n;
        let rolled = match self.vertical_axis {
            Axis::X => [y, z, x],
            Axis::Y => [z, x, y],
            Axis::Z => [x, y, z],
        };
        [
            rolled[0] * BOX_ASPECT[0],
            rolled[1] * BOX_ASPECT[1],
            rolled[2] * BOX_ASPECT[2],
        ]
    }

    fn project_box(&self, n: [f64; 3]) -> (Vec2, f64) {
        let r = self.roll(n);
        (
            vec2(dot(r, self.right) as f32, dot(r, self.up) as f32),
            dot(r, self.towards_eye),
        )
    }

    pub fn project(&self, p: [f64; 3]) -> (Vec2, f64) {
        self.project_box(self.normalise(p))
    }
}

pub struct Canvas<'a> {
    ui: &'a Ui,
    screen_extent: Rect,
    projection: Projection,
    scale: f32,
}

impl<'a> Canvas<'a> {
    pub fn new(ui: &'a Ui, screen_extent: Rect, scene: &Scene) -> Self {
        Canvas {
            ui,
            screen_extent,
            projection: Projection::new(scene.view(), *scene.limits()),
            scale: VIEW_FILL * screen_extent.width().min(screen_extent.height()),
        }
    }

    fn to_screen(&self, projected: Vec2) -> Pos2 {
        self.screen_extent.center() + self.scale * vec2(projected.x, -projected.y)
    }

    fn box_to_screen(&self, n: [f64; 3]) -> Pos2 {
        self.to_screen(self.projection.project_box(n).0)
    }

    fn text_colour(&self) -> Color32 {
        self.ui.visuals().text_color()
    }

    /// Draws the twelve edges of the axes box.
    pub fn draw_box(&self) {
        let stroke = Stroke::new(1.0, BOX_COLOUR);
        for corner in 0..8u8 {
            let n = corner_coords(corner);
            for axis in Axis::iter() {
                let bit = 1 << axis.index();
                if corner & bit == 0 {
                    let end = corner_coords(corner | bit);
                    self.ui
                        .painter()
                        .line_segment([self.box_to_screen(n), self.box_to_screen(end)], stroke);
                }
            }
        }
    }

    /// Labels each axis just past the end of one of its box edges.
    pub fn draw_axis_labels(&self) {
        for axis in Axis::iter() {
            let mut n = [-0.5; 3];
            n[axis.index()] = 0.5 + LABEL_OFFSET;
            self.ui.painter().text(
                self.box_to_screen(n),
                Align2::CENTER_CENTER,
                axis.label(),
                FontId::proportional(14.0),
                self.text_colour(),
            );
        }
    }

    /// Draws every quiver in the scene, farthest first.
    pub fn draw_quivers(&self, scene: &Scene) {
        let mut arrows: Vec<(f64, Pos2, Pos2, &Quiver)> = scene
            .quivers()
            .map(|q| {
                let tip = [
                    q.origin[0] + q.vector[0],
                    q.origin[1] + q.vector[1],
                    q.origin[2] + q.vector[2],
                ];
                let (start, depth) = self.projection.project(q.origin);
                let (end, _) = self.projection.project(tip);
                (depth, self.to_screen(start), self.to_screen(end), q)
            })
            .collect();
        arrows.sort_by(|a, b| a.0.total_cmp(&b.0));

        for (_, start, end, quiver) in arrows {
            self.draw_arrow(start, end, &quiver.style);
        }
    }

    fn draw_arrow(&self, start: Pos2, end: Pos2, style: &QuiverStyle) {
        if !(start.is_finite() && end.is_finite()) {
            log::error!("Quiver projects outside the screen, skipping it");
            return;
        }
        let stroke = Stroke::new(style.line_width, colour(style));
        let painter = self.ui.painter();
        painter.line_segment([start, end], stroke);

        let shaft = end - start;
        if shaft.length_sq() == 0.0 {
            return;
        }
        let back = -shaft * style.arrow_length_ratio;
        let angle = HEAD_ANGLE_DEGREES.to_radians();
        for rot in [Rot2::from_angle(angle), Rot2::from_angle(-angle)] {
            painter.line_segment([end, end + rot * back], stroke);
        }
    }

    pub fn draw_title(&self, title: &str) {
        self.ui.painter().text(
            pos2(self.screen_extent.center().x, self.screen_extent.top() + 12.0),
            Align2::CENTER_TOP,
            title,
            FontId::proportional(18.0),
            self.text_colour(),
        );
    }

    pub fn draw_legend(&self, scene: &Scene) {
        let Some(entries) = scene.legend_entries() else {
            return;
        };
        let mut row = self.screen_extent.right_top() + vec2(-110.0, 16.0);
        for entry in entries {
            self.ui.painter().line_segment(
                [row, row + vec2(24.0, 0.0)],
                Stroke::new(2.0, colour(&entry.style)),
            );
            self.ui.painter().text(
                row + vec2(32.0, 0.0),
                Align2::LEFT_CENTER,
                &entry.label,
                FontId::proportional(14.0),
                self.text_colour(),
            );
            row.y += 20.0;
        }
    }
}

fn corner_coords(corner: u8) -> [f64; 3] {
    let side = |bit: u8| if corner & bit == 0 { -0.5 } else { 0.5 };
    [side(1), side(2), side(4)]
}

fn colour(style: &QuiverStyle) -> Color32 {
    let (r, g, b) = style.colour;
    Color32::from_rgba_unmultiplied(r, g, b, (style.alpha * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: AxisLimits = AxisLimits {
        min: [-0.02, -0.02, 0.0],
        max: [0.02, 0.02, 5.0],
    };

    fn view(elevation: f64, azimuth: f64, vertical_axis: Axis) -> View {
        View {
            elevation,
            azimuth,
            vertical_axis,
        }
    }

    #[test]
    fn test_vertical_axis_points_up() {
        for azimuth in [-60.0, 0.0, 45.0, 135.0] {
            let projection = Projection::new(&view(0.0, azimuth, Axis::Y), LIMITS);
            let (low, _) = projection.project([0.0, -0.02, 2.5]);
            let (high, _) = projection.project([0.0, 0.02, 2.5]);
            assert!(high.y > low.y);
            assert!((high.x - low.x).abs() < 1e-6);
        }
    }

    #[test]
    fn test_top_down_view_hides_vertical_axis() {
        let projection = Projection::new(&view(90.0, 0.0, Axis::Y), LIMITS);
        let (low, _) = projection.project([0.0, -0.02, 1.0]);
        let (high, high_depth) = projection.project([0.0, 0.02, 1.0]);
        let (_, low_depth) = projection.project([0.0, -0.02, 1.0]);
        assert!((high - low).length() < 1e-6);
        assert!(high_depth > low_depth);
    }

    #[test]
    fn test_centre_projects_to_origin() {
        let projection = Projection::new(&View::default(), LIMITS);
        let (centre, depth) = projection.project([0.0, 0.0, 2.5]);
        assert!(centre.length() < 1e-6);
        assert!(depth.abs() < 1e-9);
    }

    #[test]
    fn test_box_fits_view() {
        let projection = Projection::new(&view(30.0, -60.0, Axis::Y), LIMITS);
        for corner in 0..8 {
            let (p, _) = projection.project_box(corner_coords(corner));
            assert!(p.length() < 0.5 / VIEW_FILL, "corner {corner} at {p:?}");
        }
    }

    #[test]
    fn test_colour_alpha() {
        let opaque = QuiverStyle {
            alpha: 1.0,
            ..Default::default()
        };
        assert_eq!(colour(&opaque), Color32::from_rgb(255, 0, 0));

        let hidden = QuiverStyle {
            alpha: 0.0,
            ..Default::default()
        };
        assert_eq!(colour(&hidden).a(), 0);
    }
}
