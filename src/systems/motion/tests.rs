use std::time::Duration;

use bevy::{prelude::*, state::app::StatesPlugin};

use super::{
    composed_transform, ease_out_cubic, Entrance, MotionPlugin, Oscillation, PointerProfile,
    PointerResponse, TransformAnchor, ViewportReveal,
};
use crate::systems::{
    colors::ColorsPlugin,
    interaction::Hoverable,
    scroll::{PageScroll, ViewportExtent},
};

fn make_motion_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.init_resource::<PageScroll>();
    app.init_resource::<ViewportExtent>();
    app.insert_resource(crate::data::rng::GlobalRng::default());
    app.add_plugins(ColorsPlugin);
    app.add_plugins(MotionPlugin);
    app
}

#[test]
fn staggered_siblings_get_monotonically_increasing_phase() {
    let period = Duration::from_secs(4);
    let stagger = Duration::from_millis(500);

    let phases: Vec<Duration> = (0..3)
        .map(|index| Oscillation::staggered(15.0, period, index, stagger).phase_offset())
        .collect();

    assert_eq!(phases[0], Duration::ZERO);
    assert_eq!(phases[1], Duration::from_millis(500));
    assert_eq!(phases[2], Duration::from_millis(1000));
    assert!(phases.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn loop_waveform_returns_to_rest_each_cycle() {
    assert!(Oscillation::offset_at(0.0, 15.0).abs() < 1e-4);
    assert!((Oscillation::offset_at(0.5, 15.0) - 15.0).abs() < 1e-4);
    assert!(Oscillation::offset_at(1.0, 15.0).abs() < 1e-4);
    assert!(Oscillation::offset_at(0.25, 15.0) > 0.0);
}

#[test]
fn phase_offset_delays_the_cycle_start() {
    let mut oscillation =
        Oscillation::staggered(15.0, Duration::from_secs(4), 1, Duration::from_millis(500));

    oscillation.tick(Duration::from_millis(300));
    assert_eq!(oscillation.current_offset(), 0.0);

    // Finish the delay, then run a quarter period into the cycle.
    oscillation.tick(Duration::from_millis(200));
    oscillation.tick(Duration::from_secs(1));
    let expected = Oscillation::offset_at(0.25, 15.0);
    assert!((oscillation.current_offset() - expected).abs() < 1e-3);
}

#[test]
fn entrance_progress_runs_zero_to_one() {
    let mut entrance = Entrance::rise(30.0, Duration::from_millis(800));
    assert_eq!(entrance.progress(), 0.0);
    assert!(!entrance.finished());

    entrance.tick(Duration::from_millis(400));
    let halfway = entrance.progress();
    assert!(halfway > 0.5, "ease-out should be past linear at t=0.5");
    assert!(halfway < 1.0);

    entrance.tick(Duration::from_millis(400));
    assert_eq!(entrance.progress(), 1.0);
    assert!(entrance.finished());
}

#[test]
fn entrance_delay_holds_progress_at_zero() {
    let mut entrance =
        Entrance::new(Vec2::ZERO, Duration::from_millis(500)).with_delay(Duration::from_millis(200));
    entrance.tick(Duration::from_millis(100));
    assert_eq!(entrance.progress(), 0.0);

    entrance.tick(Duration::from_millis(100));
    entrance.tick(Duration::from_millis(500));
    assert!(entrance.finished());
}

#[test]
fn ease_out_cubic_endpoints() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert!(ease_out_cubic(0.5) > 0.5);
}

#[test]
fn profiles_compose_additively_on_the_anchor() {
    let anchor = TransformAnchor(Transform::from_xyz(10.0, 5.0, 1.0));

    let mut oscillation = Oscillation::new(20.0, Duration::from_secs(4));
    oscillation.tick(Duration::from_secs(2));
    let loop_offset = oscillation.current_offset();
    assert!((loop_offset - 20.0).abs() < 1e-3);

    let mut response = PointerResponse::new(
        PointerProfile::lifted(15.0, 1.05),
        PointerProfile::scaled(0.98),
    );
    let hovered = Hoverable {
        region: Vec2::splat(10.0),
        hovered: true,
        pressed: false,
    };
    // Long enough for the exponential ease to settle on the target.
    for _ in 0..120 {
        response.tick(&hovered, 1.0 / 60.0);
    }

    let composed = composed_transform(&anchor, None, Some(&oscillation), Some(&response));

    assert!((composed.translation.y - (5.0 + loop_offset + 15.0)).abs() < 1e-2);
    assert!((composed.translation.x - 10.0).abs() < 1e-3);
    assert!((composed.scale.x - 1.05).abs() < 1e-2);

    // Release: the pointer delta eases back out instead of sticking.
    let idle = Hoverable::new(Vec2::splat(10.0));
    for _ in 0..240 {
        response.tick(&idle, 1.0 / 60.0);
    }
    let released = composed_transform(&anchor, None, Some(&oscillation), Some(&response));
    assert!((released.translation.y - (5.0 + loop_offset)).abs() < 1e-2);
    assert!((released.scale.x - 1.0).abs() < 1e-2);
}

#[test]
fn entrance_displaces_from_offset_until_complete() {
    let anchor = TransformAnchor(Transform::from_xyz(0.0, 0.0, 0.0));
    let entrance = Entrance::rise(30.0, Duration::from_millis(800));

    let composed = composed_transform(&anchor, Some(&entrance), None, None);
    assert!((composed.translation.y - (-30.0)).abs() < 1e-4);

    let mut finished = entrance.clone();
    finished.tick(Duration::from_millis(800));
    let composed = composed_transform(&anchor, Some(&finished), None, None);
    assert!(composed.translation.y.abs() < 1e-4);
}

#[test]
fn viewport_reveal_fires_exactly_once() {
    let mut app = make_motion_test_app();

    let target = app
        .world_mut()
        .spawn(ViewportReveal::new(
            1000.0,
            200.0,
            Entrance::rise(12.0, Duration::from_millis(400)),
        ))
        .id();

    // Band [1000, 1200] never intersects the initial viewport [0, 800].
    app.update();
    app.update();
    assert!(!app.world().entity(target).contains::<Entrance>());

    // Scroll it into view: the reveal arms the entrance and latches.
    app.world_mut().resource_mut::<PageScroll>().offset = 600.0;
    app.update();
    assert!(app.world().entity(target).contains::<Entrance>());
    assert!(app.world().get::<ViewportReveal>(target).unwrap().seen);

    // Scrolling away and back must not re-arm it.
    app.world_mut().entity_mut(target).remove::<Entrance>();
    app.world_mut().resource_mut::<PageScroll>().offset = 0.0;
    app.update();
    app.world_mut().resource_mut::<PageScroll>().offset = 600.0;
    app.update();
    assert!(!app.world().entity(target).contains::<Entrance>());
    assert!(app.world().get::<ViewportReveal>(target).unwrap().seen);
}

#[test]
fn reveal_band_intersection_is_exclusive_at_edges() {
    let reveal = ViewportReveal::new(
        800.0,
        200.0,
        Entrance::rise(12.0, Duration::from_millis(400)),
    );

    assert!(!reveal.intersects(0.0, 800.0));
    assert!(reveal.intersects(1.0, 800.0));
    assert!(reveal.intersects(999.0, 800.0));
    assert!(!reveal.intersects(1000.0, 800.0));
}
