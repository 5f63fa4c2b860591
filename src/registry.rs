//! Chart-type-keyed dispatch over the processor modules.
//!
//! The single surface renderers and configuration UIs talk to. Dispatch is
//! an exhaustive match on the config variant, so adding a chart type
//! without wiring it here is a compile error; there is no dynamic property
//! lookup.
//!
//! The process path never lets an error escape: processors degrade to
//! empty shapes on bad input, and anything unexpected is caught at this
//! boundary, logged, and replaced with the chart's empty shape. Callers
//! must treat an empty result as ambiguous between "no error" and "all
//! rows filtered"; validity is checked separately via
//! [`validate_data_table_for_chart`].

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::charts::{
    area_bump, bar, box_plot, bullet, bump, calendar, chord, circle_packing, funnel, heatmap,
    line, network, pie, radar, radial_bar, sankey, scatter, stream, sunburst, swarm_plot,
    treemap, voronoi, waffle,
};
use crate::config::ChartConfig;
use crate::shape::ChartData;
use crate::table::{validate_data_table_columns, ColumnCheck, DataTable};

/// Process a table into the configured chart's shape.
///
/// Never errors: missing columns, empty tables, and malformed rows all
/// yield the chart's empty shape, and a panicking processor is swallowed
/// and logged.
#[must_use]
pub fn process_chart_data(table: &DataTable, config: &ChartConfig) -> ChartData {
    match catch_unwind(AssertUnwindSafe(|| dispatch(table, config))) {
        Ok(data) => {
            tracing::debug!(
                chart_type = %config.chart_type(),
                rows = table.nrow(),
                empty = data.is_empty(),
                "processed chart data"
            );
            data
        }
        Err(_) => {
            tracing::error!(
                chart_type = %config.chart_type(),
                "chart processor panicked; substituting empty result"
            );
            ChartData::empty(config.chart_type())
        }
    }
}

/// Check the table against the configured chart's required columns.
#[must_use]
pub fn validate_data_table_for_chart(table: &DataTable, config: &ChartConfig) -> ColumnCheck {
    validate_data_table_columns(table, &required_columns_for_chart(config))
}

/// The column dependency list of the configured chart.
#[must_use]
pub fn required_columns_for_chart(config: &ChartConfig) -> Vec<String> {
    match config {
        ChartConfig::Bar(c) => bar::required_columns(c),
        ChartConfig::Line(c) => line::required_columns(c),
        ChartConfig::Pie(c) => pie::required_columns(c),
        ChartConfig::Scatter(c) => scatter::required_columns(c),
        ChartConfig::Radar(c) => radar::required_columns(c),
        ChartConfig::Funnel(c) => funnel::required_columns(c),
        ChartConfig::Waffle(c) => waffle::required_columns(c),
        ChartConfig::RadialBar(c) => radial_bar::required_columns(c),
        ChartConfig::SwarmPlot(c) => swarm_plot::required_columns(c),
        ChartConfig::Voronoi(c) => voronoi::required_columns(c),
        ChartConfig::Bump(c) => bump::required_columns(c),
        ChartConfig::AreaBump(c) => area_bump::required_columns(c),
        ChartConfig::Heatmap(c) => heatmap::required_columns(c),
        ChartConfig::Calendar(c) => calendar::required_columns(c),
        ChartConfig::Stream(c) => stream::required_columns(c),
        ChartConfig::Bullet(c) => bullet::required_columns(c),
        ChartConfig::Treemap(c) => treemap::required_columns(c),
        ChartConfig::Sunburst(c) => sunburst::required_columns(c),
        ChartConfig::CirclePacking(c) => circle_packing::required_columns(c),
        ChartConfig::Chord(c) => chord::required_columns(c),
        ChartConfig::Network(c) => network::required_columns(c),
        ChartConfig::Sankey(c) => sankey::required_columns(c),
        ChartConfig::BoxPlot(c) => box_plot::required_columns(c),
    }
}

fn dispatch(table: &DataTable, config: &ChartConfig) -> ChartData {
    match config {
        ChartConfig::Bar(c) => ChartData::Keyed(bar::process(table, c)),
        ChartConfig::Line(c) => ChartData::Series(line::process(table, c)),
        ChartConfig::Pie(c) => ChartData::Categories(pie::process(table, c)),
        ChartConfig::Scatter(c) => ChartData::Series(scatter::process(table, c)),
        ChartConfig::Radar(c) => ChartData::Keyed(radar::process(table, c)),
        ChartConfig::Funnel(c) => ChartData::Funnel(funnel::process(table, c)),
        ChartConfig::Waffle(c) => ChartData::Categories(waffle::process(table, c)),
        ChartConfig::RadialBar(c) => ChartData::Series(radial_bar::process(table, c)),
        ChartConfig::SwarmPlot(c) => ChartData::Swarm(swarm_plot::process(table, c)),
        ChartConfig::Voronoi(c) => ChartData::Voronoi(voronoi::process(table, c)),
        ChartConfig::Bump(c) => ChartData::Series(bump::process(table, c)),
        ChartConfig::AreaBump(c) => ChartData::Series(area_bump::process(table, c)),
        ChartConfig::Heatmap(c) => ChartData::Heatmap(heatmap::process(table, c)),
        ChartConfig::Calendar(c) => ChartData::Calendar(calendar::process(table, c)),
        ChartConfig::Stream(c) => ChartData::Keyed(stream::process(table, c)),
        ChartConfig::Bullet(c) => ChartData::Bullet(bullet::process(table, c)),
        ChartConfig::Treemap(c) => ChartData::Hierarchy(treemap::process(table, c)),
        ChartConfig::Sunburst(c) => ChartData::Hierarchy(sunburst::process(table, c)),
        ChartConfig::CirclePacking(c) => {
            ChartData::Hierarchy(circle_packing::process(table, c))
        }
        ChartConfig::Chord(c) => ChartData::Matrix(chord::process(table, c)),
        ChartConfig::Network(c) => ChartData::Graph(network::process(table, c)),
        ChartConfig::Sankey(c) => ChartData::Graph(sankey::process(table, c)),
        ChartConfig::BoxPlot(c) => ChartData::BoxPlots(box_plot::process(table, c)),
    }
}
