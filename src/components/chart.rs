//! Canvas Chart Backend
//!
//! Draws bar and pie charts onto HTML5 canvas mount points. Implements the
//! `ChartBackend` seam for the dashboard's two chart slots.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::sync::chart_slot::{ChartBackend, ChartData, ChartKind};

/// Fixed categorical palette for pie slices
pub const PIE_COLORS: [&str; 6] = [
    "#3B82F6", // Blue
    "#10B981", // Green
    "#F59E0B", // Amber
    "#EF4444", // Red
    "#A78BFA", // Purple
    "#06B6D4", // Cyan
];

/// Fill used when a bar series carries no color of its own
const FALLBACK_SERIES_COLOR: &str = "#9CA3AF"; // gray-400

/// Element ids of the two chart mount points
pub const MONTHLY_CHART_MOUNT: &str = "monthly-chart";
pub const CATEGORY_CHART_MOUNT: &str = "category-chart";

/// Chart backend bound to one canvas element id.
pub struct CanvasBackend {
    mount_id: &'static str,
}

impl CanvasBackend {
    pub fn new(mount_id: &'static str) -> Self {
        Self { mount_id }
    }
}

/// Handle to a chart drawn on a canvas. Destroying it clears the canvas.
pub struct CanvasChart {
    canvas: HtmlCanvasElement,
}

impl ChartBackend for CanvasBackend {
    type Handle = CanvasChart;

    fn create(&mut self, kind: ChartKind, data: &ChartData) -> Option<CanvasChart> {
        // Mount point absent from the view: silent skip.
        let canvas = lookup_canvas(self.mount_id)?;
        let ctx = context_2d(&canvas)?;

        match kind {
            ChartKind::Bar => draw_bar_chart(&canvas, &ctx, data),
            ChartKind::Pie => draw_pie_chart(&canvas, &ctx, data),
        }

        Some(CanvasChart { canvas })
    }

    fn destroy(&mut self, handle: CanvasChart) {
        if let Some(ctx) = context_2d(&handle.canvas) {
            ctx.clear_rect(
                0.0,
                0.0,
                handle.canvas.width() as f64,
                handle.canvas.height() as f64,
            );
        }
    }
}

fn lookup_canvas(mount_id: &str) -> Option<HtmlCanvasElement> {
    let document = web_sys::window()?.document()?;
    document
        .get_element_by_id(mount_id)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn fill_background(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);
}

/// Draw grouped bars with a zero-based y axis.
fn draw_bar_chart(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, data: &ChartData) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    fill_background(ctx, width, height);

    // Zero-based axis: only the top needs headroom.
    let max = data
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0_f64, f64::max);
    let y_max = if max > 0.0 { max * 1.1 } else { 1.0 };

    // Horizontal grid lines (5 lines)
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels
        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{value:.0}"), 5.0, y + 4.0);
    }

    // Grouped bars, one group per label
    let groups = data.labels.len().max(1) as f64;
    let group_width = chart_width / groups;
    let bar_width = group_width / (data.series.len() as f64 + 1.0);

    for (series_idx, series) in data.series.iter().enumerate() {
        ctx.set_fill_style(&series.color.unwrap_or(FALLBACK_SERIES_COLOR).into());
        ctx.set_global_alpha(0.8);
        for (i, value) in series.values.iter().enumerate() {
            let bar_height = (value.max(0.0) / y_max) * chart_height;
            let x = margin_left
                + i as f64 * group_width
                + (series_idx as f64 + 0.5) * bar_width;
            ctx.fill_rect(
                x,
                margin_top + chart_height - bar_height,
                bar_width * 0.9,
                bar_height,
            );
        }
        ctx.set_global_alpha(1.0);
    }

    // X-axis labels
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    for (i, label) in data.labels.iter().enumerate() {
        let x = margin_left + (i as f64 + 0.5) * group_width;
        let _ = ctx.fill_text(label, x - 18.0, height - 10.0);
    }

    // Series legend, top right
    ctx.set_font("12px sans-serif");
    for (i, series) in data.series.iter().enumerate() {
        let y = margin_top + 8.0 + i as f64 * 18.0;
        ctx.set_fill_style(&series.color.unwrap_or(FALLBACK_SERIES_COLOR).into());
        ctx.fill_rect(width - margin_right - 90.0, y - 9.0, 12.0, 12.0);
        ctx.set_fill_style(&"#d1d5db".into()); // gray-300
        let _ = ctx.fill_text(series.name, width - margin_right - 72.0, y + 2.0);
    }
}

/// Draw a pie from the first series, slices in source order starting at the
/// top, colors cycling through the fixed palette.
fn draw_pie_chart(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, data: &ChartData) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    fill_background(ctx, width, height);

    let Some(series) = data.series.first() else {
        return;
    };
    let total: f64 = series.values.iter().filter(|v| v.is_finite()).sum();
    if total <= 0.0 {
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0) - 40.0;

    let mut start = -std::f64::consts::FRAC_PI_2;
    for (i, value) in series.values.iter().enumerate() {
        let sweep = (value / total) * std::f64::consts::TAU;

        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, start + sweep);
        ctx.close_path();
        ctx.set_fill_style(&PIE_COLORS[i % PIE_COLORS.len()].into());
        ctx.fill();

        // Slice label just outside the rim
        if let Some(label) = data.labels.get(i) {
            let mid = start + sweep / 2.0;
            let lx = cx + (radius + 14.0) * mid.cos();
            let ly = cy + (radius + 14.0) * mid.sin();
            ctx.set_fill_style(&"#d1d5db".into());
            ctx.set_font("12px sans-serif");
            let _ = ctx.fill_text(label, lx - 15.0, ly);
        }

        start += sweep;
    }
}
