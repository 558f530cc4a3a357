//! Render a [`ChartSpec`] into a standalone SVG chart.
//!
//! Supports the chart shapes the report uses: line charts with one or two
//! value axes, grouped vertical bars, horizontal bars and doughnuts. Hover
//! text comes from the spec's tooltip rule via `<title>` elements. The
//! card heading is left to the page so it follows the page language.

use std::f64::consts::TAU;

use super::builder::SvgBuilder;
use super::element::{Bar, Line, Point, Rule, Slice, Text};
use super::scale::ValueAxis;
use super::style::{ChartColor, TextAnchor};
use crate::chart::{AxisId, ChartKind, ChartSpec, IndexAxis, Legend, Scale};

const MESSAGE_SIZE: f64 = 14.0;
const TICK_SIZE: f64 = 10.0;
const LEGEND_SIZE: f64 = 11.0;
const SWATCH: f64 = 10.0;
/// Auto-skip x labels closer than this many pixels.
const MIN_LABEL_SPACING: f64 = 48.0;

/// Plot rectangle inside the chart canvas.
#[derive(Debug, Clone, Copy)]
struct Plot {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Plot {
    fn width(self) -> f64 {
        self.right - self.left
    }

    fn height(self) -> f64 {
        self.bottom - self.top
    }
}

/// Chart canvas size and global text defaults.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    pub width: f64,
    pub height: f64,
    pub font_family: String,
    pub text_color: ChartColor,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self {
            width: 560.0,
            height: 300.0,
            font_family: "sans-serif".to_string(),
            text_color: ChartColor::hex("#94a3b8"),
        }
    }
}

impl ChartRenderer {
    /// Render `spec` to an SVG document.
    #[must_use]
    pub fn render(&self, spec: &ChartSpec) -> String {
        let mut svg =
            SvgBuilder::new(self.width, self.height).with_font_family(self.font_family.clone());

        if spec.labels.is_empty() || spec.point_count() == 0 {
            svg.add(
                &Text::new(
                    self.width / 2.0,
                    self.height / 2.0,
                    "No data available",
                    self.text_color.clone(),
                )
                .with_anchor(TextAnchor::Middle)
                .with_font_size(MESSAGE_SIZE),
            );
            return svg.build();
        }

        match (spec.kind, spec.index_axis) {
            (ChartKind::Doughnut, _) => self.doughnut(&mut svg, spec),
            (ChartKind::Bar, IndexAxis::Y) => self.horizontal_bars(&mut svg, spec),
            (ChartKind::Line | ChartKind::Bar, _) => self.vertical(&mut svg, spec),
        }
        svg.build()
    }

    fn plot_area(&self, spec: &ChartSpec, left: f64) -> Plot {
        let right_pad = if spec.scale(AxisId::Y1).is_some() { 56.0 } else { 20.0 };
        let top = if spec.legend == Legend::TopEnd { 56.0 } else { 44.0 };
        Plot {
            left,
            top,
            right: self.width - right_pad,
            bottom: self.height - 36.0,
        }
    }

    // =========================================================================
    // Vertical cartesian charts (line and grouped bar)
    // =========================================================================

    fn vertical(&self, svg: &mut SvgBuilder, spec: &ChartSpec) {
        let plot = self.plot_area(spec, 56.0);
        let left_axis = axis_for(spec, AxisId::Y);
        let right_axis = spec
            .scale(AxisId::Y1)
            .map(|_| axis_for(spec, AxisId::Y1));

        Self::value_ticks(svg, spec.scale(AxisId::Y), &left_axis, plot, false);
        if let Some(axis) = &right_axis {
            Self::value_ticks(svg, spec.scale(AxisId::Y1), axis, plot, true);
        }
        Self::category_labels(svg, spec, plot);

        let n = spec.labels.len();
        for (ds_index, dataset) in spec.datasets.iter().enumerate() {
            let axis = match (dataset.axis, &right_axis) {
                (AxisId::Y1, Some(right)) => right,
                _ => &left_axis,
            };
            if spec.kind == ChartKind::Line {
                Self::line_series(svg, spec, ds_index, axis, plot);
            } else {
                let group = spec.datasets.len();
                Self::column_series(svg, spec, ds_index, group, axis, plot, n);
            }
        }

        if spec.legend == Legend::TopEnd {
            self.top_legend(svg, spec);
        }
    }

    fn line_series(
        svg: &mut SvgBuilder,
        spec: &ChartSpec,
        ds_index: usize,
        axis: &ValueAxis,
        plot: Plot,
    ) {
        let dataset = &spec.datasets[ds_index];
        let n = spec.labels.len();
        let points: Vec<(f64, f64)> = dataset
            .data
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, v)| {
                (
                    line_x(plot, i, n),
                    axis.fraction(*v).mul_add(-plot.height(), plot.bottom),
                )
            })
            .collect();

        let stroke = ChartColor::parse(dataset.stroke());
        let mut line = Line::new(points.clone(), stroke.clone()).with_dashes(dataset.dashed);
        if dataset.fill {
            line = line.with_fill(ChartColor::parse(dataset.color_at(0)), plot.bottom);
        }
        svg.add(&line);

        for (i, (x, y)) in points.into_iter().enumerate() {
            let marker = if dataset.point_radius > 0.0 {
                stroke.clone()
            } else {
                stroke.clone().with_opacity(0.0)
            };
            svg.add(&Point {
                x,
                y,
                radius: dataset.point_radius.max(3.0),
                color: marker,
                tooltip: spec.tooltip_text(ds_index, i).unwrap_or_default(),
            });
        }
    }

    #[allow(clippy::cast_precision_loss)] // Category counts are small
    fn column_series(
        svg: &mut SvgBuilder,
        spec: &ChartSpec,
        ds_index: usize,
        group: usize,
        axis: &ValueAxis,
        plot: Plot,
        n: usize,
    ) {
        let dataset = &spec.datasets[ds_index];
        let slot = plot.width() / n as f64;
        let group_width = slot * 0.8;
        let bar_width = group_width / group.max(1) as f64;
        let zero_y = axis
            .fraction(0.0_f64.clamp(axis.min, axis.max))
            .mul_add(-plot.height(), plot.bottom);

        for (i, value) in dataset.data.iter().take(n).enumerate() {
            let center = slot.mul_add(i as f64 + 0.5, plot.left);
            let x = bar_width.mul_add(ds_index as f64, center - group_width / 2.0);
            let y = axis.fraction(*value).mul_add(-plot.height(), plot.bottom);
            svg.add(&Bar {
                x,
                y: y.min(zero_y),
                width: bar_width,
                height: (zero_y - y).abs(),
                color: ChartColor::parse(dataset.color_at(i)),
                tooltip: spec.tooltip_text(ds_index, i).unwrap_or_default(),
            });
        }
    }

    /// Grid lines and tick labels of a vertical value axis.
    fn value_ticks(
        svg: &mut SvgBuilder,
        scale: Option<&Scale>,
        axis: &ValueAxis,
        plot: Plot,
        right_side: bool,
    ) {
        let Some(scale) = scale else { return };
        let tick_color = ChartColor::parse(&scale.ticks.color);
        let grid_color = ChartColor::parse(&scale.grid.color);

        for tick in &axis.ticks {
            let y = axis.fraction(*tick).mul_add(-plot.height(), plot.bottom);
            if scale.grid.display {
                svg.add(&Rule {
                    x1: plot.left,
                    y1: y,
                    x2: plot.right,
                    y2: y,
                    color: grid_color.clone(),
                });
            }
            let (x, anchor) = if right_side {
                (plot.right + 8.0, TextAnchor::Start)
            } else {
                (plot.left - 8.0, TextAnchor::End)
            };
            svg.add(
                &Text::new(x, y, scale.ticks.format.format(*tick), tick_color.clone())
                    .with_anchor(anchor)
                    .with_font_size(TICK_SIZE)
                    .centered_vertically(),
            );
        }
    }

    /// Category labels along the bottom, thinned to the tick limit.
    fn category_labels(svg: &mut SvgBuilder, spec: &ChartSpec, plot: Plot) {
        let Some(scale) = spec.scale(AxisId::X) else {
            return;
        };
        let n = spec.labels.len();
        let every = label_stride(n, scale.ticks.max_ticks, plot.width());
        let tick_color = ChartColor::parse(&scale.ticks.color);
        let grid_color = ChartColor::parse(&scale.grid.color);

        for (i, label) in spec.labels.iter().enumerate().step_by(every) {
            let x = if spec.kind == ChartKind::Line {
                line_x(plot, i, n)
            } else {
                column_center(plot, i, n)
            };
            if scale.grid.display {
                svg.add(&Rule {
                    x1: x,
                    y1: plot.top,
                    x2: x,
                    y2: plot.bottom,
                    color: grid_color.clone(),
                });
            }
            svg.add(
                &Text::new(x, plot.bottom + 18.0, label.clone(), tick_color.clone())
                    .with_anchor(TextAnchor::Middle)
                    .with_font_size(TICK_SIZE),
            );
        }
    }

    /// Series swatches right-aligned above the plot.
    #[allow(clippy::cast_precision_loss)] // Label lengths are small
    fn top_legend(&self, svg: &mut SvgBuilder, spec: &ChartSpec) {
        let mut x = self.width - 20.0;
        for dataset in spec.datasets.iter().rev() {
            let text_width = dataset.label.chars().count() as f64 * LEGEND_SIZE * 0.6;
            x -= text_width;
            svg.add(
                &Text::new(x, 40.0, dataset.label.clone(), self.text_color.clone())
                    .with_font_size(LEGEND_SIZE),
            );
            x -= SWATCH + 6.0;
            svg.add(&Bar {
                x,
                y: 31.0,
                width: SWATCH,
                height: SWATCH,
                color: ChartColor::parse(dataset.stroke()),
                tooltip: dataset.label.clone(),
            });
            x -= 16.0;
        }
    }

    // =========================================================================
    // Horizontal bars
    // =========================================================================

    #[allow(clippy::cast_precision_loss)] // Category counts are small
    fn horizontal_bars(&self, svg: &mut SvgBuilder, spec: &ChartSpec) {
        let longest = spec
            .labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        let label_width = (longest as f64 * TICK_SIZE * 0.6 + 16.0).min(self.width * 0.4);
        let plot = self.plot_area(spec, label_width);
        let value_scale = spec.scale(AxisId::X);
        let axis = ValueAxis::fit(
            value_scale,
            spec.datasets.iter().flat_map(|d| d.data.iter().copied()),
        );

        if let Some(scale) = value_scale {
            let tick_color = ChartColor::parse(&scale.ticks.color);
            let grid_color = ChartColor::parse(&scale.grid.color);
            for tick in &axis.ticks {
                let x = axis.fraction(*tick).mul_add(plot.width(), plot.left);
                if scale.grid.display {
                    svg.add(&Rule {
                        x1: x,
                        y1: plot.top,
                        x2: x,
                        y2: plot.bottom,
                        color: grid_color.clone(),
                    });
                }
                let text = scale.ticks.format.format(*tick);
                svg.add(
                    &Text::new(x, plot.bottom + 18.0, text, tick_color.clone())
                        .with_anchor(TextAnchor::Middle)
                        .with_font_size(TICK_SIZE),
                );
            }
        }

        let label_color = spec
            .scale(AxisId::Y)
            .map_or_else(|| self.text_color.clone(), |s| ChartColor::parse(&s.ticks.color));
        let n = spec.labels.len();
        let slot = plot.height() / n as f64;
        let group = spec.datasets.len().max(1);
        let thickness = slot * 0.7 / group as f64;

        for (i, label) in spec.labels.iter().enumerate() {
            let center = slot.mul_add(i as f64 + 0.5, plot.top);
            svg.add(
                &Text::new(plot.left - 8.0, center, label.clone(), label_color.clone())
                    .with_anchor(TextAnchor::End)
                    .with_font_size(TICK_SIZE)
                    .centered_vertically(),
            );
            for (ds_index, dataset) in spec.datasets.iter().enumerate() {
                let Some(value) = dataset.data.get(i) else {
                    continue;
                };
                let slot_top = slot.mul_add(0.15, slot.mul_add(i as f64, plot.top));
                let top = thickness.mul_add(ds_index as f64, slot_top);
                svg.add(&Bar {
                    x: plot.left,
                    y: top,
                    width: axis.fraction(*value) * plot.width(),
                    height: thickness,
                    color: ChartColor::parse(dataset.color_at(i)),
                    tooltip: spec.tooltip_text(ds_index, i).unwrap_or_default(),
                });
            }
        }
    }

    // =========================================================================
    // Doughnut
    // =========================================================================

    fn doughnut(&self, svg: &mut SvgBuilder, spec: &ChartSpec) {
        let Some(dataset) = spec.datasets.first() else {
            return;
        };
        let total: f64 = dataset.data.iter().filter(|v| **v > 0.0).sum();
        let legend_right = spec.legend == Legend::Right;
        let chart_width = if legend_right { self.width * 0.55 } else { self.width };
        let top = 44.0;
        let cx = chart_width / 2.0;
        let cy = (self.height + top) / 2.0;
        let radius = ((self.height - top - 16.0) / 2.0).min(chart_width / 2.0 - 16.0);
        let inner_radius = radius * spec.cutout.unwrap_or(0.0).clamp(0.0, 0.95);

        let mut angle = 0.0;
        for (i, value) in dataset.data.iter().enumerate() {
            if total <= 0.0 || *value <= 0.0 {
                continue;
            }
            let sweep = value / total * TAU;
            svg.add(&Slice {
                cx,
                cy,
                radius,
                inner_radius,
                start: angle,
                end: angle + sweep,
                color: ChartColor::parse(dataset.color_at(i)),
                tooltip: spec.tooltip_text(0, i).unwrap_or_default(),
            });
            angle += sweep;
        }

        if legend_right {
            self.side_legend(svg, spec, chart_width, top);
        }
    }

    #[allow(clippy::cast_precision_loss)] // Label counts are small
    fn side_legend(&self, svg: &mut SvgBuilder, spec: &ChartSpec, left: f64, top: f64) {
        let Some(dataset) = spec.datasets.first() else {
            return;
        };
        let row = 22.0;
        let block = row * spec.labels.len() as f64;
        let start = ((self.height + top) / 2.0 - block / 2.0).max(top);
        for (i, label) in spec.labels.iter().enumerate() {
            let y = row.mul_add(i as f64, start);
            svg.add(&Bar {
                x: left,
                y,
                width: SWATCH,
                height: SWATCH,
                color: ChartColor::parse(dataset.color_at(i)),
                tooltip: spec.tooltip_text(0, i).unwrap_or_default(),
            });
            let (text_x, text_y) = (left + SWATCH + 8.0, y + SWATCH / 2.0);
            svg.add(
                &Text::new(text_x, text_y, label.clone(), self.text_color.clone())
                    .with_font_size(LEGEND_SIZE)
                    .centered_vertically(),
            );
        }
    }
}

/// Fit the value axis `id` to the datasets plotted against it.
fn axis_for(spec: &ChartSpec, id: AxisId) -> ValueAxis {
    ValueAxis::fit(
        spec.scale(id),
        spec.datasets
            .iter()
            .filter(|d| d.axis == id)
            .flat_map(|d| d.data.iter().copied()),
    )
}

#[allow(clippy::cast_precision_loss)] // Category counts are small
fn line_x(plot: Plot, index: usize, count: usize) -> f64 {
    if count <= 1 {
        return plot.left + plot.width() / 2.0;
    }
    (plot.width() / (count - 1) as f64).mul_add(index as f64, plot.left)
}

#[allow(clippy::cast_precision_loss)] // Category counts are small
fn column_center(plot: Plot, index: usize, count: usize) -> f64 {
    (plot.width() / count.max(1) as f64).mul_add(index as f64 + 0.5, plot.left)
}

/// Show every n-th label so at most `max_ticks` (or what fits) are drawn.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)] // Pixel widths are small and positive
fn label_stride(count: usize, max_ticks: Option<usize>, plot_width: f64) -> usize {
    let fit = ((plot_width / MIN_LABEL_SPACING).floor() as usize).max(1);
    let limit = max_ticks.map_or(fit, |max| max.min(fit)).max(1);
    count.div_ceil(limit).max(1)
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
