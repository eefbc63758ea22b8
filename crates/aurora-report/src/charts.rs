//! Vertical bar charts over a shortlist, as standalone SVG.

use aurora_molecules::shortlist::ShortlistEntry;
use serde::Serialize;
use svg::node::element::{Line, Rectangle, Text};
use svg::Document;

const CHART_WIDTH: f32 = 320.0;
const CHART_HEIGHT: f32 = 220.0;
const PLOT_LEFT: f32 = 36.0;
const PLOT_RIGHT: f32 = CHART_WIDTH - 8.0;
const PLOT_TOP: f32 = 30.0;
const PLOT_BOTTOM: f32 = CHART_HEIGHT - 28.0;

const TITLE_COLOR: &str = "#0F172A";
const AXIS_COLOR: &str = "#E5E7EB";
const LABEL_COLOR: &str = "#475467";
const BAR_COLOR: &str = "#27B3B1";

/// Which shortlist column a chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartMetric {
    Activity,
    Safety,
    CompositeScore,
}

impl ChartMetric {
    pub const ALL: [ChartMetric; 3] = [ChartMetric::Activity, ChartMetric::Safety, ChartMetric::CompositeScore];

    pub fn title(&self) -> &'static str {
        match self {
            ChartMetric::Activity => "Activity",
            ChartMetric::Safety => "Safety",
            ChartMetric::CompositeScore => "Composite score",
        }
    }

    pub fn value(&self, entry: &ShortlistEntry) -> f64 {
        match self {
            ChartMetric::Activity => entry.record.activity,
            ChartMetric::Safety => entry.record.safety(),
            ChartMetric::CompositeScore => entry.record.composite_score,
        }
    }
}

/// A rendered chart ready to inline into the page.
#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    pub title: &'static str,
    pub svg: String,
}

/// The three result charts, in page order.
pub fn result_charts(entries: &[ShortlistEntry]) -> Vec<Chart> {
    ChartMetric::ALL
        .iter()
        .map(|metric| Chart {
            title: metric.title(),
            svg: bar_chart(*metric, entries),
        })
        .collect()
}

/// Bars per rank over a fixed [0, 1] axis. Rank labels are rotated to read
/// vertically.
pub fn bar_chart(metric: ChartMetric, entries: &[ShortlistEntry]) -> String {
    let plot_height = PLOT_BOTTOM - PLOT_TOP;
    let slot = (PLOT_RIGHT - PLOT_LEFT) / entries.len().max(1) as f32;
    let bar_width = slot * 0.7;

    let mut doc = Document::new()
        .set("width", CHART_WIDTH)
        .set("height", CHART_HEIGHT)
        .set("viewBox", (0.0, 0.0, CHART_WIDTH, CHART_HEIGHT))
        .add(
            Text::new(metric.title())
                .set("x", 0)
                .set("y", 16)
                .set("font-family", "Inter, sans-serif")
                .set("font-size", 14)
                .set("fill", TITLE_COLOR),
        );

    for tick in [0.0f32, 0.5, 1.0] {
        let y = PLOT_BOTTOM - tick * plot_height;
        doc = doc
            .add(
                Line::new()
                    .set("x1", PLOT_LEFT)
                    .set("y1", y)
                    .set("x2", PLOT_RIGHT)
                    .set("y2", y)
                    .set("stroke", AXIS_COLOR)
                    .set("stroke-width", 1),
            )
            .add(
                Text::new(format!("{tick:.1}"))
                    .set("x", PLOT_LEFT - 6.0)
                    .set("y", y + 4.0)
                    .set("text-anchor", "end")
                    .set("font-size", 10)
                    .set("fill", LABEL_COLOR),
            );
    }

    for (i, entry) in entries.iter().enumerate() {
        let value = metric.value(entry).clamp(0.0, 1.0) as f32;
        let height = value * plot_height;
        let center = PLOT_LEFT + slot * (i as f32 + 0.5);
        let label_y = PLOT_BOTTOM + 6.0;

        doc = doc
            .add(
                Rectangle::new()
                    .set("x", center - bar_width / 2.0)
                    .set("y", PLOT_BOTTOM - height)
                    .set("width", bar_width)
                    .set("height", height)
                    .set("fill", BAR_COLOR)
                    .set("data-molecule", entry.record.name.as_str()),
            )
            .add(
                Text::new(entry.rank.to_string())
                    .set("x", center)
                    .set("y", label_y)
                    .set("transform", format!("rotate(-90 {center} {label_y})"))
                    .set("text-anchor", "end")
                    .set("dominant-baseline", "middle")
                    .set("font-size", 10)
                    .set("fill", LABEL_COLOR),
            );
    }

    doc.to_string()
}
