use std::f64::consts::PI;
use shared::models::charts::{percentages, palette_color};
use shared::{ChartData, ChartDataContent, ChartSeries, ChartType, DataPoint};
use web_sys::HtmlElement;
use yew::prelude::*;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 280.0;
const PADDING_LEFT: f64 = 44.0;
const PADDING_RIGHT: f64 = 16.0;
const PADDING_TOP: f64 = 16.0;
const PADDING_BOTTOM: f64 = 56.0;
const GRID_LINES: u32 = 4;

/// Draws one dashboard chart as inline SVG
#[derive(Properties, PartialEq)]
pub struct ChartRendererProps {
    pub chart: ChartData,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ChartRenderer)]
pub fn chart_renderer(props: &ChartRendererProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        use_effect_with(props.chart.clone(), move |chart| {
            if let Some(container) = container_ref.cast::<HtmlElement>() {
                container.set_inner_html(&generate_chart_html(chart));
            }
            || ()
        });
    }

    html! {
        <div class={classes!("chart-container", props.class.clone())}>
            <h3 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">
                { &props.chart.title }
            </h3>
            <div class="chart-content" ref={container_ref}></div>
        </div>
    }
}

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// SVG markup (plus legend) for the chart body; the title is rendered by the component
pub fn generate_chart_html(chart: &ChartData) -> String {
    if chart.data.is_empty() {
        return empty_chart_html();
    }

    match (&chart.chart_type, &chart.data) {
        (ChartType::Line, ChartDataContent::MultiSeries(series)) => generate_line_chart_html(chart, series),
        (ChartType::Bar, ChartDataContent::SingleSeries(points)) => generate_bar_chart_html(chart, points),
        (ChartType::Pie, ChartDataContent::SingleSeries(points)) => generate_pie_chart_html(points),
        (chart_type, _) => {
            log::warn!("Unsupported data layout for {:?} chart '{}'", chart_type, chart.title);
            empty_chart_html()
        }
    }
}

fn empty_chart_html() -> String {
    r#"<div class="chart-empty text-sm text-gray-500 dark:text-gray-400 py-12 text-center">No data</div>"#
        .to_string()
}

fn plot_width() -> f64 {
    WIDTH - PADDING_LEFT - PADDING_RIGHT
}

fn plot_height() -> f64 {
    HEIGHT - PADDING_TOP - PADDING_BOTTOM
}

fn y_for(value: f64, max_value: f64) -> f64 {
    let ratio = if max_value > 0.0 { value / max_value } else { 0.0 };
    PADDING_TOP + plot_height() * (1.0 - ratio)
}

fn generate_grid_html(max_value: f64) -> String {
    (0..=GRID_LINES)
        .map(|i| {
            let value = max_value * f64::from(i) / f64::from(GRID_LINES);
            let y = y_for(value, max_value);
            format!(
                r#"<line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" class="grid-line" stroke="currentColor" stroke-opacity="0.1"/><text x="{tx}" y="{ty}" text-anchor="end" class="axis-label" font-size="10" fill="currentColor">{label}</text>"#,
                x1 = PADDING_LEFT,
                x2 = WIDTH - PADDING_RIGHT,
                y = y,
                tx = PADDING_LEFT - 6.0,
                ty = y + 3.0,
                label = value.round(),
            )
        })
        .collect()
}

fn svg_wrapper(chart: &ChartData, body: &str, legend: &str) -> String {
    let aria = escape_html(&chart.title);
    format!(
        r#"<svg viewBox="0 0 {w} {h}" width="100%" role="img" aria-label="{aria}" class="text-gray-700 dark:text-gray-300">{body}</svg><div class="chart-legend flex flex-wrap gap-3 mt-3 text-xs">{legend}</div>"#,
        w = WIDTH,
        h = HEIGHT,
        aria = aria,
        body = body,
        legend = legend,
    )
}

/// Path through the points of one series, spread evenly along the x axis
fn generate_line_path(points: &[DataPoint], max_value: f64) -> String {
    let step = if points.len() > 1 {
        plot_width() / (points.len() - 1) as f64
    } else {
        0.0
    };

    let coords: Vec<String> = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = PADDING_LEFT + step * i as f64;
            format!("{:.1},{:.1}", x, y_for(point.value, max_value))
        })
        .collect();

    if coords.is_empty() {
        String::new()
    } else {
        format!("M {}", coords.join(" L "))
    }
}

fn generate_line_chart_html(chart: &ChartData, series: &[ChartSeries]) -> String {
    let max_value = series
        .iter()
        .flat_map(|s| s.data.iter().map(|p| p.value))
        .fold(0.0, f64::max);

    let x_labels: String = series
        .first()
        .map(|first| {
            let step = if first.data.len() > 1 {
                plot_width() / (first.data.len() - 1) as f64
            } else {
                0.0
            };
            first
                .data
                .iter()
                .enumerate()
                .map(|(i, point)| {
                    format!(
                        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" class="axis-label" font-size="11" fill="currentColor">{}</text>"#,
                        PADDING_LEFT + step * i as f64,
                        HEIGHT - PADDING_BOTTOM + 18.0,
                        escape_html(&point.label)
                    )
                })
                .collect::<String>()
        })
        .unwrap_or_default();

    let lines: String = series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let color = series_color(s.color.as_deref(), i);
            format!(
                r#"<path d="{}" fill="none" stroke="{}" stroke-width="2.5" class="line-series" data-series="{}"/>"#,
                generate_line_path(&s.data, max_value),
                color,
                escape_html(&s.name)
            )
        })
        .collect();

    let legend: String = series
        .iter()
        .enumerate()
        .map(|(i, s)| legend_item(series_color(s.color.as_deref(), i), &s.name, None))
        .collect();

    let body = format!("{}{}{}", generate_grid_html(max_value), lines, x_labels);
    svg_wrapper(chart, &body, &legend)
}

fn generate_bar_chart_html(chart: &ChartData, points: &[DataPoint]) -> String {
    let max_value = points.iter().map(|p| p.value).fold(0.0, f64::max);
    let slot = plot_width() / points.len() as f64;
    let bar_width = slot * 0.7;

    let bars: String = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = PADDING_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
            let y = y_for(point.value, max_value);
            let label_x = x + bar_width / 2.0;
            let label_y = HEIGHT - PADDING_BOTTOM + 12.0;
            format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="4" fill="{}" class="bar"><title>{}: {}</title></rect><text x="{:.1}" y="{:.1}" text-anchor="end" transform="rotate(-35 {:.1} {:.1})" class="axis-label" font-size="10" fill="currentColor">{}</text>"#,
                x,
                y,
                bar_width,
                HEIGHT - PADDING_BOTTOM - y,
                series_color(point.color.as_deref(), i),
                escape_html(&point.label),
                point.value,
                label_x,
                label_y,
                label_x,
                label_y,
                escape_html(&point.label)
            )
        })
        .collect();

    let body = format!("{}{}", generate_grid_html(max_value), bars);
    svg_wrapper(chart, &body, "")
}

fn generate_pie_chart_html(points: &[DataPoint]) -> String {
    let shares = percentages(points);
    if shares.iter().all(|share| *share == 0.0) {
        return empty_chart_html();
    }

    let center_x = WIDTH / 2.0;
    let center_y = (HEIGHT - 40.0) / 2.0 + 8.0;
    let radius = (HEIGHT - 40.0) / 2.0 - 8.0;

    // Start at twelve o'clock
    let mut current_angle = -PI / 2.0;
    let slices: String = points
        .iter()
        .zip(&shares)
        .enumerate()
        .filter(|(_, (_, share))| **share > 0.0)
        .map(|(i, (point, share))| {
            let color = series_color(point.color.as_deref(), i);
            let slice_angle = share / 100.0 * 2.0 * PI;
            let start_angle = current_angle;
            let end_angle = current_angle + slice_angle;
            current_angle = end_angle;

            if *share >= 100.0 {
                return format!(
                    r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" class="slice"/>"#,
                    center_x, center_y, radius, color
                );
            }

            let large_arc_flag = if slice_angle > PI { 1 } else { 0 };
            format!(
                r#"<path d="M {:.1},{:.1} L {:.1},{:.1} A {:.1},{:.1} 0 {},1 {:.1},{:.1} Z" fill="{}" class="slice"><title>{}: {:.1}%</title></path>"#,
                center_x,
                center_y,
                center_x + radius * start_angle.cos(),
                center_y + radius * start_angle.sin(),
                radius,
                radius,
                large_arc_flag,
                center_x + radius * end_angle.cos(),
                center_y + radius * end_angle.sin(),
                color,
                escape_html(&point.label),
                share
            )
        })
        .collect();

    let legend: String = points
        .iter()
        .zip(&shares)
        .enumerate()
        .map(|(i, (point, share))| {
            let detail = format!("{} ({:.1}%)", point.value, share);
            legend_item(series_color(point.color.as_deref(), i), &point.label, Some(&detail))
        })
        .collect();

    format!(
        r#"<svg viewBox="0 0 {w} {h}" width="100%" role="img" aria-label="Win/loss split">{slices}</svg><div class="chart-legend flex flex-wrap justify-center gap-4 mt-3 text-xs">{legend}</div>"#,
        w = WIDTH,
        h = HEIGHT - 40.0,
        slices = slices,
        legend = legend,
    )
}

fn series_color(explicit: Option<&str>, index: usize) -> String {
    escape_html(explicit.unwrap_or_else(|| palette_color(index)))
}

fn legend_item(color: String, label: &str, detail: Option<&str>) -> String {
    format!(
        r#"<div class="legend-item flex items-center gap-1.5"><span class="legend-color inline-block w-3 h-3 rounded-sm" style="background-color: {}"></span><span class="legend-label">{}</span>{}</div>"#,
        color,
        escape_html(label),
        detail
            .map(|d| format!(r#"<span class="legend-value text-gray-500">{}</span>"#, escape_html(d)))
            .unwrap_or_default()
    )
}
