//! Processed chart data shapes.
//!
//! Each chart type owns its output shape: flat series, category records,
//! hierarchies, matrices, graphs, or quartile summaries. There is no shared
//! supertype; [`ChartData`] only exists so the registry can dispatch
//! uniformly. Every shape is plain owned data, computed fresh per `process`
//! call.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

/// A resolved x-axis value, shaped by the declared scale type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisValue {
    /// Numeric position (linear scale).
    Number(f64),
    /// Categorical position (point scale).
    Text(String),
    /// Temporal position (time scale).
    Date(NaiveDate),
}

/// One point of an x/y series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XyPoint {
    /// Position along the x axis.
    pub x: AxisValue,
    /// Numeric y value.
    pub y: f64,
}

/// A named series of x/y points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XySeries {
    /// Series identifier.
    pub id: String,
    /// Ordered points.
    pub data: Vec<XyPoint>,
}

/// A scalar category record (pie slice, waffle cell).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDatum {
    /// Category identifier.
    pub id: String,
    /// Category value.
    pub value: f64,
}

/// One funnel step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelStep {
    /// Step identifier.
    pub id: String,
    /// Step value.
    pub value: f64,
    /// Display label.
    pub label: String,
}

/// A record keyed by index with one value per mapped column (bar, radar,
/// stream).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyedDatum {
    /// Index (category) label.
    pub index: String,
    /// Value per mapped column, keyed by column name.
    pub values: BTreeMap<String, f64>,
}

/// One swarm plot point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwarmPoint {
    /// Point identifier.
    pub id: String,
    /// Lane the point belongs to.
    pub group: String,
    /// Plotted value.
    pub value: f64,
    /// Optional point size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

/// One voronoi site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoronoiSite {
    /// Site identifier.
    pub id: String,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

/// One calendar day value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDatum {
    /// Day in `YYYY-MM-DD` form.
    pub day: String,
    /// Day value.
    pub value: f64,
}

/// One bullet chart row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulletDatum {
    /// Row identifier.
    pub id: String,
    /// Qualitative range boundaries.
    pub ranges: Vec<f64>,
    /// Measured values.
    pub measures: Vec<f64>,
    /// Target markers.
    pub markers: Vec<f64>,
}

/// One heatmap cell: column label against numeric value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    /// Cell column label.
    pub x: String,
    /// Cell value.
    pub y: f64,
}

/// One heatmap row series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapSeries {
    /// Row identifier.
    pub id: String,
    /// One cell per mapped value column.
    pub data: Vec<HeatmapCell>,
}

/// A node in a hierarchy (treemap, sunburst, circle packing).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchyNode {
    /// Node identifier.
    pub id: String,
    /// Leaf value, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Child nodes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Create a node with no value and no children.
    #[must_use]
    pub fn branch(id: &str) -> Self {
        Self {
            id: id.to_string(),
            value: None,
            children: Vec::new(),
        }
    }

    /// Create a valued leaf node.
    #[must_use]
    pub fn leaf(id: &str, value: f64) -> Self {
        Self {
            id: id.to_string(),
            value: Some(value),
            children: Vec::new(),
        }
    }

    /// The empty hierarchy: a bare synthetic root.
    #[must_use]
    pub fn empty() -> Self {
        Self::branch("root")
    }

    /// Whether this hierarchy carries no data at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }
}

/// A chord diagram matrix with its sorted key labels.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChordMatrix {
    /// Alphabetically sorted node keys.
    pub keys: Vec<String>,
    /// Square matrix, `matrix[from][to] = value`.
    pub matrix: Vec<Vec<f64>>,
}

/// A node in a node-link graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    /// Node identifier.
    pub id: String,
    /// Node radius.
    pub radius: f64,
    /// Node color.
    pub color: String,
}

impl GraphNode {
    /// Default radius for nodes created on demand.
    pub const DEFAULT_RADIUS: f64 = 8.0;
    /// Default color for nodes created on demand.
    pub const DEFAULT_COLOR: &'static str = "#888888";

    /// Create a node with default visual attributes.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            radius: Self::DEFAULT_RADIUS,
            color: Self::DEFAULT_COLOR.to_string(),
        }
    }
}

/// A link in a node-link graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphLink {
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    /// Link weight.
    pub value: f64,
}

/// Nodes plus links (network, sankey).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GraphData {
    /// Graph nodes.
    pub nodes: Vec<GraphNode>,
    /// Graph links.
    pub links: Vec<GraphLink>,
}

/// Quartile summary for one box plot group.
///
/// Quartiles use the index method (`sorted[floor(n * p)]`), not linear
/// interpolation. Outliers use the 1.5 × IQR Tukey fence; whiskers clamp
/// to the most extreme non-outlier values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlotSummary {
    /// Group label.
    pub group: String,
    /// Nested subgroup label, if mapped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subgroup: Option<String>,
    /// Number of aggregated values.
    pub n: usize,
    /// Lower whisker (min non-outlier).
    pub min: f64,
    /// First quartile.
    pub q1: f64,
    /// Median (interpolated for even-length groups).
    pub median: f64,
    /// Third quartile.
    pub q3: f64,
    /// Upper whisker (max non-outlier).
    pub max: f64,
    /// Values beyond the Tukey fences.
    pub outliers: Vec<f64>,
}

/// Dispatch wrapper over every chart output shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartData {
    /// X/y series (line, scatter, bump, areaBump, radialBar).
    Series(Vec<XySeries>),
    /// Category records (pie, waffle).
    Categories(Vec<CategoryDatum>),
    /// Funnel steps.
    Funnel(Vec<FunnelStep>),
    /// Keyed records (bar, radar, stream).
    Keyed(Vec<KeyedDatum>),
    /// Swarm points.
    Swarm(Vec<SwarmPoint>),
    /// Voronoi sites.
    Voronoi(Vec<VoronoiSite>),
    /// Calendar day values.
    Calendar(Vec<CalendarDatum>),
    /// Bullet rows.
    Bullet(Vec<BulletDatum>),
    /// Heatmap row series.
    Heatmap(Vec<HeatmapSeries>),
    /// A hierarchy tree.
    Hierarchy(HierarchyNode),
    /// A chord matrix.
    Matrix(ChordMatrix),
    /// A node-link graph.
    Graph(GraphData),
    /// Box plot summaries.
    BoxPlots(Vec<BoxPlotSummary>),
}

impl ChartData {
    /// Whether this result carries no data.
    ///
    /// Deliberately ambiguous between "no error" and "all rows filtered";
    /// the processor surface never distinguishes the two.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            ChartData::Series(s) => s.is_empty(),
            ChartData::Categories(c) => c.is_empty(),
            ChartData::Funnel(f) => f.is_empty(),
            ChartData::Keyed(k) => k.is_empty(),
            ChartData::Swarm(s) => s.is_empty(),
            ChartData::Voronoi(v) => v.is_empty(),
            ChartData::Calendar(c) => c.is_empty(),
            ChartData::Bullet(b) => b.is_empty(),
            ChartData::Heatmap(h) => h.is_empty(),
            ChartData::Hierarchy(node) => node.is_empty(),
            ChartData::Matrix(m) => m.keys.is_empty(),
            ChartData::Graph(g) => g.nodes.is_empty() && g.links.is_empty(),
            ChartData::BoxPlots(b) => b.is_empty(),
        }
    }

    /// The empty shape for a chart type, used when a processor is skipped
    /// or fails.
    #[must_use]
    pub fn empty(chart_type: crate::config::ChartType) -> Self {
        use crate::config::ChartType;
        match chart_type {
            ChartType::Line
            | ChartType::Scatter
            | ChartType::RadialBar
            | ChartType::Bump
            | ChartType::AreaBump => ChartData::Series(Vec::new()),
            ChartType::Pie | ChartType::Waffle => ChartData::Categories(Vec::new()),
            ChartType::Funnel => ChartData::Funnel(Vec::new()),
            ChartType::Bar | ChartType::Radar | ChartType::Stream => {
                ChartData::Keyed(Vec::new())
            }
            ChartType::SwarmPlot => ChartData::Swarm(Vec::new()),
            ChartType::Voronoi => ChartData::Voronoi(Vec::new()),
            ChartType::Calendar => ChartData::Calendar(Vec::new()),
            ChartType::Bullet => ChartData::Bullet(Vec::new()),
            ChartType::Heatmap => ChartData::Heatmap(Vec::new()),
            ChartType::Treemap | ChartType::Sunburst | ChartType::CirclePacking => {
                ChartData::Hierarchy(HierarchyNode::empty())
            }
            ChartType::Chord => ChartData::Matrix(ChordMatrix::default()),
            ChartType::Network | ChartType::Sankey => ChartData::Graph(GraphData::default()),
            ChartType::BoxPlot => ChartData::BoxPlots(Vec::new()),
        }
    }
}
