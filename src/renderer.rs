//! # Profile Plotting
//!
//! Sinks that draw a distance/value series as a line plot. Two sinks are
//! provided:
//! - [`AsciiPlot`]: a character grid written to any `io::Write`, for terminals
//! - [`RasterPlot`]: a monochrome polyline on any `embedded-graphics` draw target
//!
//! Both accept the same input: two equal-length, non-empty sequences of finite
//! numbers. Anything else is rejected with a [`PlotError`] before drawing
//! starts.

use crate::config::DisplayConfig;
use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::Point as PixelPoint,
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    primitives::{Line as Segment, Primitive, PrimitiveStyle},
    text::Text,
    Drawable,
};
use std::io::{self, Write};
use thiserror::Error;

/// Errors from validating or drawing a series
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("nothing to plot: the series is empty")]
    EmptySeries,

    #[error("x has {x} values but y has {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("non-finite value at sample {index}")]
    NonFinite { index: usize },

    #[error("canvas of {width}x{height} is too small to hold a chart")]
    CanvasTooSmall { width: u32, height: u32 },

    #[error("output failed: {0}")]
    Io(#[from] io::Error),
}

/// Anything that can display an x/y line plot.
pub trait PlotSink {
    /// Draw `y` against `x`. Both slices have the same length, and `x` is
    /// non-decreasing when it comes from a profile.
    fn plot(&mut self, x: &[f64], y: &[f64]) -> Result<(), PlotError>;
}

/// Reject series a chart cannot be drawn from
fn validate_series(x: &[f64], y: &[f64]) -> Result<(), PlotError> {
    if x.len() != y.len() {
        return Err(PlotError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.is_empty() {
        return Err(PlotError::EmptySeries);
    }
    if let Some(index) = x
        .iter()
        .zip(y)
        .position(|(a, b)| !a.is_finite() || !b.is_finite())
    {
        return Err(PlotError::NonFinite { index });
    }
    Ok(())
}

/// `(min, max)` of a non-empty slice
fn bounds(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        })
}

/// Half the distance from `min` to `max`, computed from halved endpoints so
/// it stays finite for any pair of finite values.
fn half_span(min: f64, max: f64) -> f64 {
    max * 0.5 - min * 0.5
}

/// Position of `value` within `[min, max]` as a fraction in `[0, 1]`.
/// A range too small to divide by maps everything to `flat`.
fn fraction(value: f64, min: f64, max: f64, flat: f64) -> f64 {
    let span = half_span(min, max);
    if span > 0.0 {
        (value * 0.5 - min * 0.5) / span
    } else {
        flat
    }
}

/// Spacing between y-axis labels over `[min, max]`: a 1, 2 or 5 multiple of
/// a power of ten giving roughly four intervals.
fn label_step(min: f64, max: f64) -> f64 {
    let raw = half_span(min, max) * 0.5;
    if !(raw > 0.0) {
        return 1.0;
    }
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    if !(magnitude > 0.0) || !magnitude.is_finite() {
        return 1.0;
    }
    let step = match raw / magnitude {
        r if r <= 1.0 => 1.0,
        r if r <= 2.0 => 2.0,
        r if r <= 5.0 => 5.0,
        _ => 10.0,
    };
    step * magnitude
}

/// Decimal places needed to print multiples of `step` without losing digits
fn label_precision(step: f64) -> usize {
    if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    }
}

/// Fixed-point labels longer than this switch to exponent notation
const MAX_FIXED_LABEL: usize = 12;

/// Format an axis value placed on a grid of `step`, with an explicit sign.
///
/// Values whose fixed-point form would be too long are printed in exponent
/// notation with enough significant digits to tell neighbouring labels apart.
fn format_axis_value(value: f64, step: f64) -> String {
    let fixed = format!("{:.*}", label_precision(step), value.abs());
    if fixed.chars().all(|c| c == '0' || c == '.') {
        return " 0 ".to_string();
    }

    let digits = if fixed.len() > MAX_FIXED_LABEL {
        let significant =
            (value.abs().log10().floor() - step.log10().floor()).clamp(0.0, 16.0) as usize;
        format!("{:.*e}", significant, value.abs())
    } else {
        fixed
    };

    if value > 0.0 {
        format!("+{}", digits)
    } else {
        format!("-{}", digits)
    }
}

/// Upper bound on the number of y-axis labels
const MAX_LABELS: usize = 12;

/// Label values on the `step` grid from the first multiple at or above `min`
/// up to `max`, at most [`MAX_LABELS`] of them.
fn label_values(min: f64, max: f64, step: f64) -> Vec<f64> {
    if max <= min || !(step > 0.0) || !step.is_finite() {
        return vec![min];
    }
    let first_multiple = (min / step).ceil();
    let first = first_multiple * step;
    let intervals = ((max * 0.5 - first * 0.5) / step * 2.0 + 1e-9).floor();
    if !first.is_finite() || !intervals.is_finite() || intervals < 0.0 {
        return vec![min];
    }

    let count = (intervals as usize).saturating_add(1).min(MAX_LABELS);
    (0..count)
        .map(|i| (first_multiple + i as f64) * step)
        .collect()
}

/// Y-axis labels for a value range, formatted and paired with their value
fn axis_labels(min: f64, max: f64) -> Vec<(f64, String)> {
    let step = label_step(min, max);
    label_values(min, max, step)
        .into_iter()
        .map(|value| (value, format_axis_value(value, step)))
        .collect()
}

/// Minimum width reserved on the left of the ASCII chart for y labels and
/// the axis. Wider labels widen the column.
const Y_AXIS_WIDTH: usize = 8;

/// Renders a profile as a character grid.
///
/// Samples are binned into `columns` by their x value, so long profiles fit
/// a terminal line.
pub struct AsciiPlot<W: Write> {
    out: W,
    rows: usize,
    columns: usize,
    title: Option<String>,
}

impl<W: Write> AsciiPlot<W> {
    pub fn new(out: W, rows: usize, columns: usize) -> Self {
        Self {
            out,
            rows: rows.max(2),
            columns: columns.max(2),
            title: None,
        }
    }

    pub fn from_config(out: W, display: &DisplayConfig) -> Self {
        Self::new(out, display.rows, display.columns)
    }

    /// Print `title` above the chart
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PlotSink for AsciiPlot<W> {
    fn plot(&mut self, x: &[f64], y: &[f64]) -> Result<(), PlotError> {
        validate_series(x, y)?;

        let rows = self.rows;
        let columns = self.columns;
        let (x_min, x_max) = bounds(x);
        let (y_min, y_max) = bounds(y);

        let value_to_row = |value: f64| {
            let normalized = fraction(value, y_min, y_max, 0.5);
            ((1.0 - normalized) * (rows as f64 - 1.0)).round() as usize
        };
        let distance_to_column = |distance: f64| {
            let normalized = fraction(distance, x_min, x_max, 0.0);
            (normalized * (columns as f64 - 1.0)).round() as usize
        };

        // Labels are never cut: the axis column grows to the longest one
        let labels = axis_labels(y_min, y_max);
        let axis_width = labels
            .iter()
            .map(|(_, label)| label.chars().count() + 2)
            .max()
            .unwrap_or(0)
            .max(Y_AXIS_WIDTH);

        let mut grid = vec![vec![' '; columns + axis_width]; rows];

        // y labels and the axis line
        for row in grid.iter_mut() {
            row[axis_width - 1] = '│';
        }
        for (value, label) in &labels {
            let row = value_to_row(*value).min(rows - 1);
            for (i, ch) in label.chars().enumerate() {
                grid[row][i] = ch;
            }
            grid[row][axis_width - 1] = '┤';
        }

        for (&distance, &value) in x.iter().zip(y) {
            let row = value_to_row(value).min(rows - 1);
            let column = distance_to_column(distance).min(columns - 1);
            grid[row][column + axis_width] = '•';
        }

        if let Some(title) = &self.title {
            writeln!(self.out, "{}\n", title)?;
        }

        for row in grid {
            writeln!(self.out, "{}", row.into_iter().collect::<String>())?;
        }

        // Distance axis below the chart
        let padding = " ".repeat(axis_width);
        let ticks: String = (0..columns)
            .map(|i| if i % 10 == 0 || i == columns - 1 { '|' } else { '─' })
            .collect();
        writeln!(self.out, "{}{}", padding, ticks)?;

        let left = format!("{:.3}", x_min);
        let right = format!("{:.3}", x_max);
        let right_width = columns.saturating_sub(left.len());
        writeln!(
            self.out,
            "{}{}{:>width$}",
            padding,
            left,
            right,
            width = right_width
        )?;

        self.out.flush()?;
        Ok(())
    }
}

/// Draws a profile onto a monochrome `embedded-graphics` target, the way a
/// chart would be painted on a small e-ink or LCD panel.
pub struct RasterPlot<D> {
    display: D,
    width: u32,
    height: u32,
}

impl<D> RasterPlot<D>
where
    D: DrawTarget<Color = BinaryColor, Error = core::convert::Infallible>,
{
    pub fn new(display: D, width: u32, height: u32) -> Self {
        Self {
            display,
            width,
            height,
        }
    }

    pub fn from_config(display: D, config: &DisplayConfig) -> Self {
        Self::new(display, config.width, config.height)
    }

    pub fn into_inner(self) -> D {
        self.display
    }

    fn segment(&mut self, from: PixelPoint, to: PixelPoint, stroke: u32) {
        Segment::new(from, to)
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, stroke))
            .draw(&mut self.display)
            .ok();
    }

    fn text(&mut self, label: &str, at: PixelPoint) {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        Text::new(label, at, style).draw(&mut self.display).ok();
    }
}

impl<D> PlotSink for RasterPlot<D>
where
    D: DrawTarget<Color = BinaryColor, Error = core::convert::Infallible>,
{
    fn plot(&mut self, x: &[f64], y: &[f64]) -> Result<(), PlotError> {
        validate_series(x, y)?;

        let width = self.width as i32;
        let height = self.height as i32;

        let (x_min, x_max) = bounds(x);
        let (y_min, y_max) = bounds(y);
        let labels = axis_labels(y_min, y_max);

        // Reserve space for y labels on the left and x labels at the bottom
        let longest_label = labels
            .iter()
            .map(|(_, label)| label.chars().count())
            .max()
            .unwrap_or(0) as i32;
        let chart_left = (longest_label * 6 + 4).min(width / 2);
        let chart_right = width - 1;
        let chart_top = 2;
        let chart_bottom = height - 12;
        if chart_right - chart_left < 2 || chart_bottom - chart_top < 2 {
            return Err(PlotError::CanvasTooSmall {
                width: self.width,
                height: self.height,
            });
        }

        let value_to_y = |value: f64| {
            let normalized = fraction(value, y_min, y_max, 0.5);
            chart_bottom - (normalized * (chart_bottom - chart_top) as f64).round() as i32
        };
        let distance_to_x = |distance: f64| {
            let normalized = fraction(distance, x_min, x_max, 0.0);
            chart_left + (normalized * (chart_right - chart_left) as f64).round() as i32
        };

        // Axes
        self.segment(
            PixelPoint::new(chart_left, chart_top),
            PixelPoint::new(chart_left, chart_bottom),
            1,
        );
        self.segment(
            PixelPoint::new(chart_left, chart_bottom),
            PixelPoint::new(chart_right, chart_bottom),
            1,
        );

        // Y ticks with labels
        for (value, label) in &labels {
            let py = value_to_y(*value);
            self.segment(
                PixelPoint::new(chart_left - 3, py),
                PixelPoint::new(chart_left, py),
                1,
            );
            self.text(label, PixelPoint::new(0, py + 3));
        }

        // Distance labels under both ends of the axis
        let left_label = format!("{:.2}", x_min);
        let right_label = format!("{:.2}", x_max);
        self.text(&left_label, PixelPoint::new(chart_left, height - 1));
        let right_x = chart_right - 6 * right_label.len() as i32;
        self.text(&right_label, PixelPoint::new(right_x.max(chart_left), height - 1));

        // The curve itself
        let mut previous: Option<PixelPoint> = None;
        for (&distance, &value) in x.iter().zip(y) {
            let current = PixelPoint::new(distance_to_x(distance), value_to_y(value));
            match previous {
                Some(prev) if prev == current => continue,
                Some(prev) => self.segment(prev, current, 1),
                None => self.segment(current, current, 1),
            }
            previous = Some(current);
        }

        Ok(())
    }
}
