use serde::{Deserialize, Serialize};

/// An RGBA colour for chart strokes and fills.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with a different alpha (used for area fills).
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// One line on a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub label: String,
    pub values: Vec<f64>,
    pub border_color: Rgba,
    pub background_color: Rgba,
    pub border_width: u8,
    /// Fill the area under the line.
    pub fill: bool,
    /// Name shown in point tooltips when it differs from the legend label.
    #[serde(default)]
    pub tooltip_label: Option<String>,
}

/// Render-ready line chart.
///
/// The core generates these and a frontend only draws them. `labels`
/// and every dataset's `values` have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub title: Option<String>,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
    pub x_axis_title: String,
    pub y_axis_title: String,
    /// Whether the y axis is pinned at zero.
    pub begin_at_zero: bool,
}

impl LineChart {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Tooltip text for a point, e.g. `"Close Price: $187.20"`.
    pub fn tooltip(&self, dataset: usize, index: usize) -> Option<String> {
        let ds = self.datasets.get(dataset)?;
        let value = ds.values.get(index)?;
        let label = ds.tooltip_label.as_deref().unwrap_or(&ds.label);
        Some(format!("{label}: ${value:.2}"))
    }
}
