//! Object model of the 3D axes the animation draws into.
//! Quivers are owned by the scene and addressed by handle, so whoever created
//! them can remove exactly the ones it added.

use std::collections::HashSet;
use strum_macros::EnumIter;

pub const DEFAULT_ELEVATION: f64 = 30.0;
pub const DEFAULT_AZIMUTH: f64 = -60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuiverStyle {
    pub colour: (u8, u8, u8), // RGB
    pub alpha: f32,
    pub line_width: f32,
    /// Length of the arrow head relative to the arrow
    pub arrow_length_ratio: f32,
}

impl Default for QuiverStyle {
    fn default() -> Self {
        QuiverStyle {
            colour: (255, 0, 0),
            alpha: 0.7,
            line_width: 1.0,
            arrow_length_ratio: 0.1,
        }
    }
}

/// A single arrow anchored at `origin` and pointing along `vector`.
#[derive(Debug, Clone, PartialEq)]
pub struct Quiver {
    pub origin: [f64; 3],
    pub vector: [f64; 3],
    pub label: Option<String>,
    pub style: QuiverStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(u64);

/// Camera orientation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub elevation: f64,
    pub azimuth: f64,
    pub vertical_axis: Axis,
}

impl Default for View {
    fn default() -> Self {
        View {
            elevation: DEFAULT_ELEVATION,
            azimuth: DEFAULT_AZIMUTH,
            vertical_axis: Axis::Z,
        }
    }
}

/// Data range of each axis, in x, y, z order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLimits {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl AxisLimits {
    pub fn span(&self, axis: Axis) -> f64 {
        self.max[axis.index()] - self.min[axis.index()]
    }
}

/// What a legend shows for one labelled quiver.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub style: QuiverStyle,
}

pub struct Scene {
    quivers: Vec<(Handle, Quiver)>,
    next_handle: u64,
    title: String,
    view: View,
    limits: AxisLimits,
    legend: Option<Vec<LegendEntry>>,
}

impl Scene {
    pub fn new(limits: AxisLimits) -> Self {
        Scene {
            quivers: Vec::new(),
            next_handle: 0,
            title: String::new(),
            view: View::default(),
            limits,
            legend: None,
        }
    }

    pub fn add_quiver(&mut self, quiver: Quiver) -> Handle {
        let handle = Handle(self.next_handle);
        self.next_handle += 1;
        self.quivers.push((handle, quiver));
        handle
    }

    /// Removes every listed quiver in one pass, returning how many were found.
    pub fn remove_all(&mut self, handles: &[Handle]) -> usize {
        let outgoing: HashSet<Handle> = handles.iter().copied().collect();
        let before = self.quivers.len();
        self.quivers.retain(|(h, _)| !outgoing.contains(h));
        before - self.quivers.len()
    }

    #[cfg(test)]
    pub fn contains(&self, handle: Handle) -> bool {
        self.quivers.iter().any(|(h, _)| *h == handle)
    }

    pub fn quivers(&self) -> impl Iterator<Item = &Quiver> {
        self.quivers.iter().map(|(_, q)| q)
    }

    pub fn quiver_count(&self) -> usize {
        self.quivers.len()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Sets the vertical axis, then any angle that is given.
    /// An angle left as `None` keeps its current value.
    pub fn view_init(&mut self, vertical_axis: Axis, elevation: Option<f64>, azimuth: Option<f64>) {
        self.view.vertical_axis = vertical_axis;
        if let Some(elevation) = elevation {
            self.view.elevation = elevation;
        }
        if let Some(azimuth) = azimuth {
            self.view.azimuth = azimuth;
        }
    }

    /// Turns the camera by the given angles, keeping it between the poles.
    pub fn rotate(&mut self, d_elevation: f64, d_azimuth: f64) {
        self.view.elevation = (self.view.elevation + d_elevation).clamp(-90.0, 90.0);
        self.view.azimuth = (self.view.azimuth + d_azimuth + 180.0).rem_euclid(360.0) - 180.0;
    }

    pub fn limits(&self) -> &AxisLimits {
        &self.limits
    }

    /// Snapshots the labelled quivers currently in the scene.
    /// The legend outlives the quivers it was built from.
    pub fn legend(&mut self) {
        let entries = self
            .quivers()
            .filter_map(|q| {
                q.label.as_ref().map(|label| LegendEntry {
                    label: label.clone(),
                    style: q.style,
                })
            })
            .collect::<Vec<_>>();
        if entries.is_empty() {
            log::warn!("No labelled quivers found to put in legend");
        }
        self.legend = Some(entries);
    }

    pub fn legend_entries(&self) -> Option<&[LegendEntry]> {
        self.legend.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> AxisLimits {
        AxisLimits {
            min: [-1.0, -1.0, 0.0],
            max: [1.0, 1.0, 5.0],
        }
    }

    fn quiver(label: Option<&str>) -> Quiver {
        Quiver {
            origin: [0.0, 0.0, 1.0],
            vector: [0.5, 0.0, 0.0],
            label: label.map(str::to_owned),
            style: QuiverStyle::default(),
        }
    }

    #[test]
    fn test_remove_by_handle() {
        let mut scene = Scene::new(limits());
        let a = scene.add_quiver(quiver(None));
        let b = scene.add_quiver(quiver(None));
        assert_ne!(a, b);
        assert_eq!(scene.quiver_count(), 2);

        assert_eq!(scene.remove_all(&[a]), 1);
        assert!(!scene.contains(a));
        assert!(scene.contains(b));
        assert_eq!(scene.remove_all(&[a]), 0);
        assert_eq!(scene.quiver_count(), 1);
    }

    #[test]
    fn test_remove_all_keeps_others() {
        let mut scene = Scene::new(limits());
        let old: Vec<_> = (0..150).map(|_| scene.add_quiver(quiver(None))).collect();
        let kept = scene.add_quiver(quiver(Some("wave")));

        assert_eq!(scene.remove_all(&old), 150);
        assert_eq!(scene.quiver_count(), 1);
        assert!(scene.contains(kept));
        assert!(old.iter().all(|h| !scene.contains(*h)));

        // already gone
        assert_eq!(scene.remove_all(&old), 0);
    }

    #[test]
    fn test_handles_never_reused() {
        let mut scene = Scene::new(limits());
        let a = scene.add_quiver(quiver(None));
        scene.remove_all(&[a]);
        let b = scene.add_quiver(quiver(None));
        assert_ne!(a, b);
    }

    #[test]
    fn test_view_init_keeps_unset_angles() {
        let mut scene = Scene::new(limits());
        assert_eq!(*scene.view(), View::default());

        scene.view_init(Axis::Y, None, Some(45.0));
        assert_eq!(scene.view().vertical_axis, Axis::Y);
        assert_eq!(scene.view().elevation, DEFAULT_ELEVATION);
        assert_eq!(scene.view().azimuth, 45.0);

        scene.rotate(10.0, 0.0);
        scene.view_init(Axis::Y, None, None);
        assert_eq!(scene.view().elevation, DEFAULT_ELEVATION + 10.0);
    }

    #[test]
    fn test_rotate_clamps_and_wraps() {
        let mut scene = Scene::new(limits());
        scene.rotate(200.0, 0.0);
        assert_eq!(scene.view().elevation, 90.0);

        scene.view_init(Axis::Y, Some(0.0), Some(170.0));
        scene.rotate(0.0, 20.0);
        assert!((scene.view().azimuth + 170.0).abs() < 1e-9);
    }

    #[test]
    fn test_legend_persists_after_removal() {
        let mut scene = Scene::new(limits());
        let labelled = scene.add_quiver(quiver(Some("wave")));
        scene.add_quiver(quiver(None));
        assert!(scene.legend_entries().is_none());

        scene.legend();
        scene.remove_all(&[labelled]);

        let entries = scene.legend_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "wave");
    }

    #[test]
    fn test_axis_span() {
        let limits = limits();
        assert_eq!(limits.span(Axis::X), 2.0);
        assert_eq!(limits.span(Axis::Z), 5.0);
    }
}
