// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for `tracery_charts`.
//!
//! Renders a small two-series line chart into a [`Scene`], plays the line
//! draw-in tweens, simulates dot and group hovers, and prints the resulting
//! primitive state after each step.

use kurbo::{Point, Size};
use peniko::color::palette::css;
use tracery_charts::{
    HoverBound, HoverPayload, LineSeriesRenderer, border_style, draw_in_path, out_dot_style,
};
use tracery_core::Scene;

fn main() {
    let mut scene = Scene::new();
    let mut renderer = LineSeriesRenderer::new();

    // Positions are normally computed by the chart's scales; here they are
    // hand-picked for a 300x200 plot.
    let group_positions = vec![
        vec![
            Point::new(10.0, 150.0),
            Point::new(110.0, 90.0),
            Point::new(210.0, 120.0),
        ],
        vec![
            Point::new(10.0, 180.0),
            Point::new(110.0, 160.0),
            Point::new(210.0, 60.0),
        ],
    ];
    let colors = [css::CRIMSON.into(), css::STEEL_BLUE.into()];

    // The dots open the render pass; everything animated below is scheduled
    // against it and would be dropped by the next re-render.
    renderer.render_dots(&mut scene, &group_positions, &colors);
    renderer.render_tooltip_line(&mut scene, 200.0);

    // Series strokes, drawn in segment by segment with a 300ms tween each.
    for (positions, color) in group_positions.iter().zip([css::CRIMSON, css::STEEL_BLUE]) {
        for (i, pair) in positions.windows(2).enumerate() {
            let path = draw_in_path(pair[0], pair[1]);
            let line = scene.create_segment(path.start, color, 2.0);
            renderer.animate_line(&mut scene, line, path.end, 300.0, 100.0 * i as f64);
        }
    }

    let out_style = out_dot_style(0.8, border_style(Some(css::WHITE.into()), 0.8).as_ref());
    renderer.attach_event(
        &mut scene,
        &group_positions,
        out_style,
        |position, point, group| {
            println!("hover enter: series {group}, point {point} at {position:?}");
        },
        || println!("hover exit"),
    );

    // Drive the draw-in to completion in four frames.
    for _ in 0..4 {
        scene.advance(150.0);
        println!("t={}ms: {scene:?}", scene.now());
    }

    // A single-dot hover round trip, as the chart's tooltip layer would
    // drive it. Payload fields are historically swapped: this is series 1,
    // point 2.
    let dot = renderer.group_dots()[1][2];
    scene.pointer_enter(dot);
    let payload = HoverPayload {
        group_index: 2,
        index: 1,
    };
    renderer.show_animation(&mut scene, payload);
    print_dot(&scene, &renderer, 1, 2, "shown");
    scene.pointer_exit(dot);
    renderer.hide_animation(&mut scene, payload);
    print_dot(&scene, &renderer, 1, 2, "hidden");

    // A whole hovered column with the tooltip line.
    let bound = HoverBound {
        size: Size::new(300.0, 200.0),
        origin: Point::new(110.0, 60.0),
    };
    renderer.show_group_animation(&mut scene, 1, &bound);
    println!(
        "tooltip line shown: {:?}",
        renderer.tooltip_line().and_then(|line| scene.attrs(line))
    );
    renderer.hide_group_animation(&mut scene, 1);
    println!(
        "tooltip line hidden: {:?}",
        renderer.tooltip_line().and_then(|line| scene.attrs(line))
    );

    renderer.for_each_dot(|dot, group, point| {
        let radius = scene.attrs(dot).and_then(|attrs| attrs.radius);
        println!("dot ({group}, {point}): radius {radius:?}");
    });
}

fn print_dot(scene: &Scene, renderer: &LineSeriesRenderer, group: usize, point: usize, tag: &str) {
    let dot = renderer.group_dots()[group][point];
    println!("dot ({group}, {point}) {tag}: {:?}", scene.attrs(dot));
}
