use std::time::Duration;

use bevy::{
    input::mouse::{MouseScrollUnit, MouseWheel},
    prelude::*,
};
use enum_map::enum_map;

use super::{
    HeaderState, PageLayout, PageScroll, ScrollPlugin, ScrollRequest, ScrollTranslation,
    COMPACT_SCROLL_THRESHOLD,
};
use crate::data::site::SectionId;

fn make_scroll_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_event::<MouseWheel>();
    app.add_plugins(ScrollPlugin);
    app.insert_resource(PageLayout {
        anchors: enum_map! {
            SectionId::Home => 0.0,
            SectionId::Statesman => 800.0,
            SectionId::Artist => 1600.0,
            SectionId::Author => 2400.0,
            SectionId::Contact => 3200.0,
        },
        height: 3640.0,
    });
    app
}

fn set_offset(app: &mut App, offset: f32) {
    app.world_mut().resource_mut::<PageScroll>().offset = offset;
}

fn send_wheel_line(app: &mut App, lines: f32) {
    app.world_mut()
        .resource_mut::<Events<MouseWheel>>()
        .send(MouseWheel {
            unit: MouseScrollUnit::Line,
            x: 0.0,
            y: lines,
            window: Entity::PLACEHOLDER,
        });
}

#[test]
fn header_threshold_is_exact_on_both_sides() {
    let mut app = make_scroll_test_app();

    set_offset(&mut app, COMPACT_SCROLL_THRESHOLD);
    app.update();
    assert!(!app.world().resource::<HeaderState>().compact);

    set_offset(&mut app, COMPACT_SCROLL_THRESHOLD + 1.0);
    app.update();
    assert!(app.world().resource::<HeaderState>().compact);

    set_offset(&mut app, 0.0);
    app.update();
    assert!(!app.world().resource::<HeaderState>().compact);
}

#[test]
fn header_follows_a_full_scroll_round_trip() {
    let mut app = make_scroll_test_app();

    app.update();
    assert!(!app.world().resource::<HeaderState>().compact);

    set_offset(&mut app, 200.0);
    app.update();
    assert!(app.world().resource::<HeaderState>().compact);

    set_offset(&mut app, 0.0);
    app.update();
    assert!(!app.world().resource::<HeaderState>().compact);
}

#[test]
fn wheel_lines_scroll_down_and_clamp_at_the_top() {
    let mut app = make_scroll_test_app();
    app.update();

    send_wheel_line(&mut app, -2.0);
    app.update();
    let offset = app.world().resource::<PageScroll>().offset;
    assert!((offset - 80.0).abs() < 1e-3);

    // Scrolling up past the top pins the offset at zero.
    send_wheel_line(&mut app, 10.0);
    app.update();
    assert_eq!(app.world().resource::<PageScroll>().offset, 0.0);
}

#[test]
fn scroll_bounds_follow_layout_and_viewport() {
    let mut app = make_scroll_test_app();
    app.update();

    let scroll = app.world().resource::<PageScroll>();
    assert!((scroll.max - 2840.0).abs() < 1e-3);

    set_offset(&mut app, 10_000.0);
    app.update();
    assert!(app.world().resource::<PageScroll>().offset <= 2840.0 + 1e-3);
}

#[test]
fn scroll_request_spawns_a_tween_toward_the_anchor() {
    let mut app = make_scroll_test_app();
    app.update();

    app.world_mut()
        .resource_mut::<Events<ScrollRequest>>()
        .send(ScrollRequest(SectionId::Statesman));
    app.update();

    let mut tweens = app.world_mut().query::<&ScrollTranslation>();
    let targets: Vec<f32> = tweens.iter(app.world()).map(|tween| tween.target()).collect();
    assert_eq!(targets, vec![800.0]);
}

#[test]
fn later_scroll_requests_replace_earlier_tweens() {
    let mut app = make_scroll_test_app();
    app.update();

    app.world_mut()
        .resource_mut::<Events<ScrollRequest>>()
        .send(ScrollRequest(SectionId::Statesman));
    app.update();
    app.world_mut()
        .resource_mut::<Events<ScrollRequest>>()
        .send(ScrollRequest(SectionId::Author));
    app.update();

    let mut tweens = app.world_mut().query::<&ScrollTranslation>();
    let targets: Vec<f32> = tweens.iter(app.world()).map(|tween| tween.target()).collect();
    assert_eq!(targets, vec![2400.0]);
}

#[test]
fn wheel_input_cancels_an_in_flight_tween() {
    let mut app = make_scroll_test_app();
    app.update();

    app.world_mut()
        .resource_mut::<Events<ScrollRequest>>()
        .send(ScrollRequest(SectionId::Artist));
    app.update();

    send_wheel_line(&mut app, -1.0);
    app.update();

    let mut tweens = app.world_mut().query::<&ScrollTranslation>();
    assert_eq!(tweens.iter(app.world()).count(), 0);
}

#[test]
fn tween_eases_smoothly_between_endpoints() {
    let tween = ScrollTranslation::new(0.0, 800.0, Duration::from_millis(600));

    assert_eq!(tween.value_at(0.0), 0.0);
    assert_eq!(tween.value_at(1.0), 800.0);
    assert_eq!(tween.value_at(0.5), 400.0);
    assert!(tween.value_at(0.25) < 200.0, "smoothstep starts slow");
    assert!(tween.value_at(0.75) > 600.0, "smoothstep ends slow");
}

#[test]
fn headless_default_stays_expanded_at_the_top() {
    // No window, no wheel input: the offset never moves and the header
    // keeps its fallback state.
    let mut app = make_scroll_test_app();
    app.update();
    app.update();

    assert_eq!(app.world().resource::<PageScroll>().offset, 0.0);
    assert!(!app.world().resource::<HeaderState>().compact);
}
