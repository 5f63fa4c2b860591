//! Chart configurations and data mappings.
//!
//! Every chart type owns a strict config record: a `data_mapping` sub-record
//! naming which source columns feed which visual channel, plus the handful
//! of non-visual fields that influence processing (sorting, axis scale).
//! The records meet in [`ChartConfig`], a serde-tagged union whose tag
//! matches the chart-type strings used by dashboard payloads
//! (`"areaBump"`, `"circlePacking"`, ...).

use serde::{Deserialize, Serialize};

use crate::sort::SortConfig;

/// Declared x-axis scale, deciding how raw x cells are coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    /// Continuous numeric axis.
    Linear,
    /// Temporal axis.
    Time,
    /// Categorical axis.
    #[default]
    Point,
}

/// Chart type identifier, one per processor module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    /// Grouped/stacked bar chart.
    Bar,
    /// Multi-series line chart.
    Line,
    /// Pie chart.
    Pie,
    /// Scatter plot.
    Scatter,
    /// Radar (spider) chart.
    Radar,
    /// Funnel chart.
    Funnel,
    /// Waffle chart.
    Waffle,
    /// Radial bar chart.
    RadialBar,
    /// Swarm plot.
    SwarmPlot,
    /// Voronoi tessellation.
    Voronoi,
    /// Rank-over-time bump chart.
    Bump,
    /// Value-over-time area bump chart.
    AreaBump,
    /// Matrix heatmap.
    Heatmap,
    /// Calendar heatmap.
    Calendar,
    /// Streamgraph.
    Stream,
    /// Bullet chart.
    Bullet,
    /// Treemap hierarchy.
    Treemap,
    /// Sunburst hierarchy.
    Sunburst,
    /// Circle-packing hierarchy.
    CirclePacking,
    /// Chord diagram.
    Chord,
    /// Node-link network.
    Network,
    /// Sankey flow diagram.
    Sankey,
    /// Box plot.
    BoxPlot,
}

impl ChartType {
    /// All chart types, in registry order.
    pub const ALL: [ChartType; 23] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Pie,
        ChartType::Scatter,
        ChartType::Radar,
        ChartType::Funnel,
        ChartType::Waffle,
        ChartType::RadialBar,
        ChartType::SwarmPlot,
        ChartType::Voronoi,
        ChartType::Bump,
        ChartType::AreaBump,
        ChartType::Heatmap,
        ChartType::Calendar,
        ChartType::Stream,
        ChartType::Bullet,
        ChartType::Treemap,
        ChartType::Sunburst,
        ChartType::CirclePacking,
        ChartType::Chord,
        ChartType::Network,
        ChartType::Sankey,
        ChartType::BoxPlot,
    ];

    /// The wire identifier for this chart type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
            ChartType::Scatter => "scatter",
            ChartType::Radar => "radar",
            ChartType::Funnel => "funnel",
            ChartType::Waffle => "waffle",
            ChartType::RadialBar => "radialBar",
            ChartType::SwarmPlot => "swarmPlot",
            ChartType::Voronoi => "voronoi",
            ChartType::Bump => "bump",
            ChartType::AreaBump => "areaBump",
            ChartType::Heatmap => "heatmap",
            ChartType::Calendar => "calendar",
            ChartType::Stream => "stream",
            ChartType::Bullet => "bullet",
            ChartType::Treemap => "treemap",
            ChartType::Sunburst => "sunburst",
            ChartType::CirclePacking => "circlePacking",
            ChartType::Chord => "chord",
            ChartType::Network => "network",
            ChartType::Sankey => "sankey",
            ChartType::BoxPlot => "boxPlot",
        }
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ChartType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown chart type: {s}"))
    }
}

/// Mapping for index + multi-value-column charts (bar, radar, heatmap,
/// stream).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexedMapping {
    /// Column providing the category index.
    pub index_column: String,
    /// Columns providing one value each.
    pub value_columns: Vec<String>,
}

/// Mapping for id + single-value charts (pie, waffle).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryMapping {
    /// Column providing the slice/cell id.
    pub id_column: String,
    /// Column providing the numeric value.
    pub value_column: String,
}

/// Mapping for x + multi-series-by-column charts (line, bump, areaBump).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct XyMapping {
    /// Column providing the x value.
    pub x_column: String,
    /// Columns providing one series each.
    pub y_columns: Vec<String>,
}

/// Grouped/stacked bar chart configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarConfig {
    /// Column references.
    pub data_mapping: IndexedMapping,
    /// Row reordering applied before shaping.
    pub sort: SortConfig,
}

/// Multi-series line chart configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineConfig {
    /// Column references.
    pub data_mapping: XyMapping,
    /// Declared x-axis scale.
    pub x_scale: ScaleType,
    /// Row reordering applied before shaping.
    pub sort: SortConfig,
}

/// Pie chart configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PieConfig {
    /// Column references.
    pub data_mapping: CategoryMapping,
    /// Sort slices by descending value instead of source order.
    pub sort_by_value: bool,
}

/// Scatter plot configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScatterConfig {
    /// Column references.
    pub data_mapping: ScatterMapping,
    /// Declared x-axis scale.
    pub x_scale: ScaleType,
}

/// Mapping for scatter plots: x/y pairs optionally split into series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScatterMapping {
    /// Column providing the x coordinate.
    pub x_column: String,
    /// Column providing the y coordinate.
    pub y_column: String,
    /// Optional column splitting points into series.
    pub series_column: Option<String>,
}

/// Radar chart configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadarConfig {
    /// Column references.
    pub data_mapping: IndexedMapping,
}

/// Funnel chart configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FunnelConfig {
    /// Column references.
    pub data_mapping: FunnelMapping,
}

/// Mapping for funnel charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FunnelMapping {
    /// Column providing the step id.
    pub id_column: String,
    /// Column providing the step value.
    pub value_column: String,
    /// Optional column providing a display label; falls back to the id.
    pub label_column: Option<String>,
}

/// Waffle chart configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaffleConfig {
    /// Column references.
    pub data_mapping: CategoryMapping,
}

/// Radial bar chart configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadialBarConfig {
    /// Column references.
    pub data_mapping: RadialBarMapping,
}

/// Mapping for radial bar charts: ring id, spoke category, value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadialBarMapping {
    /// Column providing the ring (series) id.
    pub id_column: String,
    /// Column providing the spoke category.
    pub category_column: String,
    /// Column providing the numeric value.
    pub value_column: String,
}

/// Swarm plot configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwarmPlotConfig {
    /// Column references.
    pub data_mapping: SwarmPlotMapping,
}

/// Mapping for swarm plots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwarmPlotMapping {
    /// Column providing the point id.
    pub id_column: String,
    /// Column providing the group lane.
    pub group_column: String,
    /// Column providing the plotted value.
    pub value_column: String,
    /// Optional column providing the point size.
    pub size_column: Option<String>,
}

/// Voronoi tessellation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VoronoiConfig {
    /// Column references.
    pub data_mapping: VoronoiMapping,
}

/// Mapping for voronoi sites.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VoronoiMapping {
    /// Column providing the site id.
    pub id_column: String,
    /// Column providing the x coordinate.
    pub x_column: String,
    /// Column providing the y coordinate.
    pub y_column: String,
}

/// Bump chart configuration (y values are rankings, strictly positive).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BumpConfig {
    /// Column references.
    pub data_mapping: XyMapping,
}

/// Area bump chart configuration (y values are magnitudes, non-negative).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AreaBumpConfig {
    /// Column references.
    pub data_mapping: XyMapping,
}

/// Matrix heatmap configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeatmapConfig {
    /// Column references.
    pub data_mapping: IndexedMapping,
}

/// Calendar heatmap configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarConfig {
    /// Column references.
    pub data_mapping: CalendarMapping,
}

/// Mapping for calendar heatmaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarMapping {
    /// Column providing the day.
    pub date_column: String,
    /// Column providing the day value.
    pub value_column: String,
}

/// Streamgraph configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StreamConfig {
    /// Column references.
    pub data_mapping: IndexedMapping,
    /// Row reordering applied before shaping.
    pub sort: SortConfig,
}

/// Bullet chart configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BulletConfig {
    /// Column references.
    pub data_mapping: BulletMapping,
}

/// Mapping for bullet charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BulletMapping {
    /// Column providing the row id.
    pub id_column: String,
    /// Columns providing the qualitative ranges.
    pub range_columns: Vec<String>,
    /// Columns providing the measured values.
    pub measure_columns: Vec<String>,
    /// Columns providing the target markers.
    pub marker_columns: Vec<String>,
}

/// Mapping shared by the hierarchy charts (treemap, sunburst,
/// circlePacking).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HierarchyMapping {
    /// Column providing the node id.
    pub id_column: String,
    /// Column naming each node's parent id.
    pub parent_column: String,
    /// Optional column providing leaf values.
    pub value_column: Option<String>,
}

/// Treemap configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreemapConfig {
    /// Column references.
    pub data_mapping: HierarchyMapping,
}

/// Sunburst configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SunburstConfig {
    /// Column references.
    pub data_mapping: HierarchyMapping,
}

/// Circle-packing configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CirclePackingConfig {
    /// Column references.
    pub data_mapping: HierarchyMapping,
}

/// Mapping shared by edge-list charts (chord, network, sankey).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EdgeListMapping {
    /// Column providing the edge source id.
    pub source_column: String,
    /// Column providing the edge target id.
    pub target_column: String,
    /// Optional column providing the edge weight; defaults to 1.
    pub value_column: Option<String>,
}

/// Chord diagram configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChordConfig {
    /// Column references.
    pub data_mapping: EdgeListMapping,
}

/// Node-link network configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkConfig {
    /// Column references.
    pub data_mapping: EdgeListMapping,
}

/// Sankey flow configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SankeyConfig {
    /// Column references.
    pub data_mapping: EdgeListMapping,
}

/// Box plot configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoxPlotConfig {
    /// Column references.
    pub data_mapping: BoxPlotMapping,
}

/// Mapping for box plots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoxPlotMapping {
    /// Column providing the group.
    pub group_column: String,
    /// Optional column providing a nested subgroup.
    pub subgroup_column: Option<String>,
    /// Column providing the aggregated numeric values.
    pub value_column: String,
}

/// One chart configuration, tagged by chart type.
///
/// Dashboard payloads carry `{"type": "pie", "dataMapping": {...}, ...}`;
/// the tag selects the variant, and each variant is a strict record, not
/// a loosely-typed property bag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChartConfig {
    /// Bar chart.
    Bar(BarConfig),
    /// Line chart.
    Line(LineConfig),
    /// Pie chart.
    Pie(PieConfig),
    /// Scatter plot.
    Scatter(ScatterConfig),
    /// Radar chart.
    Radar(RadarConfig),
    /// Funnel chart.
    Funnel(FunnelConfig),
    /// Waffle chart.
    Waffle(WaffleConfig),
    /// Radial bar chart.
    RadialBar(RadialBarConfig),
    /// Swarm plot.
    SwarmPlot(SwarmPlotConfig),
    /// Voronoi tessellation.
    Voronoi(VoronoiConfig),
    /// Bump chart.
    Bump(BumpConfig),
    /// Area bump chart.
    AreaBump(AreaBumpConfig),
    /// Matrix heatmap.
    Heatmap(HeatmapConfig),
    /// Calendar heatmap.
    Calendar(CalendarConfig),
    /// Streamgraph.
    Stream(StreamConfig),
    /// Bullet chart.
    Bullet(BulletConfig),
    /// Treemap.
    Treemap(TreemapConfig),
    /// Sunburst.
    Sunburst(SunburstConfig),
    /// Circle packing.
    CirclePacking(CirclePackingConfig),
    /// Chord diagram.
    Chord(ChordConfig),
    /// Network graph.
    Network(NetworkConfig),
    /// Sankey diagram.
    Sankey(SankeyConfig),
    /// Box plot.
    BoxPlot(BoxPlotConfig),
}

impl ChartConfig {
    /// The chart type tag of this configuration.
    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        match self {
            ChartConfig::Bar(_) => ChartType::Bar,
            ChartConfig::Line(_) => ChartType::Line,
            ChartConfig::Pie(_) => ChartType::Pie,
            ChartConfig::Scatter(_) => ChartType::Scatter,
            ChartConfig::Radar(_) => ChartType::Radar,
            ChartConfig::Funnel(_) => ChartType::Funnel,
            ChartConfig::Waffle(_) => ChartType::Waffle,
            ChartConfig::RadialBar(_) => ChartType::RadialBar,
            ChartConfig::SwarmPlot(_) => ChartType::SwarmPlot,
            ChartConfig::Voronoi(_) => ChartType::Voronoi,
            ChartConfig::Bump(_) => ChartType::Bump,
            ChartConfig::AreaBump(_) => ChartType::AreaBump,
            ChartConfig::Heatmap(_) => ChartType::Heatmap,
            ChartConfig::Calendar(_) => ChartType::Calendar,
            ChartConfig::Stream(_) => ChartType::Stream,
            ChartConfig::Bullet(_) => ChartType::Bullet,
            ChartConfig::Treemap(_) => ChartType::Treemap,
            ChartConfig::Sunburst(_) => ChartType::Sunburst,
            ChartConfig::CirclePacking(_) => ChartType::CirclePacking,
            ChartConfig::Chord(_) => ChartType::Chord,
            ChartConfig::Network(_) => ChartType::Network,
            ChartConfig::Sankey(_) => ChartType::Sankey,
            ChartConfig::BoxPlot(_) => ChartType::BoxPlot,
        }
    }
}

/// Drop unset (empty) column references from a mapping-derived list.
///
/// A default-constructed mapping references no columns; requiring the empty
/// string would make every table invalid.
#[must_use]
pub fn filter_unset(columns: Vec<String>) -> Vec<String> {
    columns.into_iter().filter(|c| !c.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_type_roundtrip() {
        for chart_type in ChartType::ALL {
            let parsed: ChartType = chart_type.as_str().parse().unwrap();
            assert_eq!(parsed, chart_type);
        }
    }

    #[test]
    fn test_chart_type_unknown() {
        assert!("nonsense".parse::<ChartType>().is_err());
    }

    #[test]
    fn test_chart_type_count() {
        assert_eq!(ChartType::ALL.len(), 23);
    }

    #[test]
    fn test_tagged_config_decode() {
        let json = r#"{
            "type": "pie",
            "dataMapping": { "idColumn": "cat", "valueColumn": "val" },
            "sortByValue": true
        }"#;
        let config: ChartConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.chart_type(), ChartType::Pie);
        match config {
            ChartConfig::Pie(pie) => {
                assert_eq!(pie.data_mapping.id_column, "cat");
                assert_eq!(pie.data_mapping.value_column, "val");
                assert!(pie.sort_by_value);
            }
            _ => panic!("Expected pie config"),
        }
    }

    #[test]
    fn test_tagged_config_camel_case_tag() {
        let json = r#"{
            "type": "circlePacking",
            "dataMapping": { "idColumn": "id", "parentColumn": "parent" }
        }"#;
        let config: ChartConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.chart_type(), ChartType::CirclePacking);
    }

    #[test]
    fn test_config_defaults_fill_in() {
        let json = r#"{ "type": "line", "dataMapping": { "xColumn": "t" } }"#;
        let config: ChartConfig = serde_json::from_str(json).unwrap();
        match config {
            ChartConfig::Line(line) => {
                assert_eq!(line.data_mapping.x_column, "t");
                assert!(line.data_mapping.y_columns.is_empty());
                assert_eq!(line.x_scale, ScaleType::Point);
                assert!(!line.sort.enabled);
            }
            _ => panic!("Expected line config"),
        }
    }

    #[test]
    fn test_filter_unset() {
        let cols = vec![String::new(), "a".to_string(), String::new()];
        assert_eq!(filter_unset(cols), vec!["a"]);
    }

    #[test]
    fn test_config_encode_has_tag() {
        let config = ChartConfig::Chord(ChordConfig::default());
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""type":"chord""#));
    }
}
