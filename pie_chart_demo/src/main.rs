// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie/donut chart demos for `pie_chart_core`.
//!
//! Drives each chart through its reveal animation on a simulated 60 Hz clock and writes every
//! delivered frame into an HTML filmstrip. Set `RUST_LOG=debug` to watch the lifecycle.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use pie_chart_core::{FrameStatus, PieChart, PieChartSpec};
use pie_chart_svg::{FrameQueue, PIE_CHART_CSS, SvgSurface};

const FRAME_MS: f64 = 1000.0 / 60.0;
const TILE_PX: f64 = 160.0;

struct Section {
    title: &'static str,
    frames: Vec<String>,
}

fn main() {
    env_logger::init();

    let sections = vec![
        animated_demo(
            "Pie",
            "pie",
            &[("data", "1;1;2;4"), ("labels", "One;Two;Three;Four")],
        ),
        animated_demo(
            "Donut with gaps",
            "donut",
            &[
                ("data", "3;5;8;13;21"),
                ("labels", "a;b;c;d;e"),
                ("gap", "0.03"),
                ("donut", "0.55"),
                ("duration", "600"),
            ],
        ),
        animated_demo(
            "Custom colors, unlabelled slices",
            "colors",
            &[
                ("data", "40;25;20;15"),
                ("colors", "#003f5c;#7a5195;#ef5675"),
                ("labels", "North;;South"),
                ("gap", "0.01"),
            ],
        ),
        hover_demo(),
    ];

    let html = render_report("Pie chart demo", &sections);
    std::fs::write("pie_chart_demo.html", html).expect("write pie_chart_demo.html");
    println!("wrote pie_chart_demo.html");
}

fn build(mask_id: &str, attrs: &[(&'static str, &'static str)]) -> PieChart<SvgSurface> {
    let spec = PieChartSpec::from_attributes(attrs.iter().copied())
        .unwrap_or_else(|err| panic!("invalid demo attributes {attrs:?}: {err}"));
    PieChart::init(spec, SvgSurface::new().with_mask_id(mask_id))
        .unwrap_or_else(|err| panic!("invalid demo chart {mask_id}: {err}"))
}

fn animated_demo(
    title: &'static str,
    mask_id: &str,
    attrs: &[(&'static str, &'static str)],
) -> Section {
    let mut chart = build(mask_id, attrs);
    let mut queue = FrameQueue::new();
    let mut frames = Vec::new();

    let mut now = 0.0;
    chart.start(&mut queue, now);
    while !queue.is_idle() {
        now += FRAME_MS;
        for token in queue.take_pending() {
            match chart.on_frame(&mut queue, token, now) {
                Ok(FrameStatus::Ignored) => {}
                Ok(status) => {
                    log::debug!("{mask_id}: {status:?} at {now:.1}ms");
                    frames.push(snapshot(&mut chart, mask_id, frames.len()));
                }
                Err(err) => {
                    log::error!("{mask_id}: frame failed: {err}");
                    chart.teardown(&mut queue);
                }
            }
        }
    }
    chart.teardown(&mut queue);

    Section { title, frames }
}

fn hover_demo() -> Section {
    let mut chart = build(
        "hover",
        &[
            ("data", "2;3;5"),
            ("labels", "Low;Mid;High"),
            ("donut", "0.4"),
        ],
    );
    let hovered = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&hovered);
    chart.subscribe(move |event| sink.borrow_mut().push(event.index));

    if let Err(err) = chart.redraw(1.0) {
        log::error!("hover: draw failed: {err}");
    }
    let mut frames = Vec::new();
    for index in 0..3 {
        chart.hover_enter(index);
        frames.push(snapshot(&mut chart, "hover", frames.len()));
        chart.hover_leave(index);
    }
    log::info!("hover events: {:?}", hovered.borrow());

    Section {
        title: "Hover (label per slice)",
        frames,
    }
}

/// Serializes the chart as one filmstrip tile; every tile gets its own mask id since they
/// all share one document.
fn snapshot(chart: &mut PieChart<SvgSurface>, mask_id: &str, tile: usize) -> String {
    chart.surface_mut().set_mask_id(format!("{mask_id}-{tile}"));
    chart.surface().to_html_string(TILE_PX, TILE_PX)
}

fn render_report(title: &str, sections: &[Section]) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html><head><meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{title}</title>");
    out.push_str("<style>\n");
    out.push_str(
        "body { font-family: sans-serif; margin: 2rem; }\n\
         .strip { display: flex; flex-wrap: wrap; gap: 12px; }\n",
    );
    out.push_str(PIE_CHART_CSS);
    out.push_str("</style>\n</head><body>\n");
    let _ = writeln!(out, "<h1>{title}</h1>");
    for section in sections {
        let _ = writeln!(
            out,
            "<h2>{} ({} frames)</h2>\n<div class=\"strip\">",
            section.title,
            section.frames.len()
        );
        for frame in &section.frames {
            out.push_str(frame);
        }
        out.push_str("</div>\n");
    }
    out.push_str("</body></html>\n");
    out
}
