//! The page's scroll signal and everything derived from it.
//!
//! `PageScroll` is an explicitly owned resource, not a window global: wheel
//! input writes it, anchor tweens ease it, and the header state machine and
//! reveal triggers read it. Headless environments simply never mutate it,
//! which leaves the header expanded and nothing revealed.

use std::time::Duration;

use bevy::{
    input::mouse::{MouseScrollUnit, MouseWheel},
    prelude::*,
    window::PrimaryWindow,
};
use enum_map::EnumMap;

use crate::data::site::SectionId;

/// Scroll offsets above this render the compact header; at or below it the
/// header stays expanded. Exact comparison, no hysteresis, no debounce.
pub const COMPACT_SCROLL_THRESHOLD: f32 = 50.0;

/// Pixels per wheel line step.
pub const WHEEL_LINE_STEP: f32 = 40.0;

const ANCHOR_TWEEN_DURATION: Duration = Duration::from_millis(600);

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum ScrollSystems {
    Input,
    Derive,
}

pub struct ScrollPlugin;

impl Plugin for ScrollPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PageScroll>()
            .init_resource::<ViewportExtent>()
            .init_resource::<HeaderState>()
            .init_resource::<PageLayout>()
            .add_event::<ScrollRequest>()
            .configure_sets(Update, ScrollSystems::Derive.after(ScrollSystems::Input))
            .add_systems(
                Update,
                (
                    sync_viewport_extent,
                    update_scroll_bounds,
                    wheel_input,
                    handle_scroll_requests,
                    ScrollTranslation::enact,
                )
                    .chain()
                    .in_set(ScrollSystems::Input),
            )
            .add_systems(
                Update,
                (derive_header_state, HeaderBlend::enact)
                    .chain()
                    .in_set(ScrollSystems::Derive),
            );
    }
}

/// Pixels scrolled from the top of the page, clamped to the scrollable
/// range.
#[derive(Resource, Default)]
pub struct PageScroll {
    pub offset: f32,
    pub max: f32,
}

impl PageScroll {
    pub fn scroll_by(&mut self, delta: f32) {
        self.offset = (self.offset + delta).clamp(0.0, self.max.max(0.0));
    }

    fn clamp(&mut self) {
        self.offset = self.offset.clamp(0.0, self.max.max(0.0));
    }
}

/// Mirror of the primary window's logical size. Stays at its default when no
/// window exists, so every consumer has a sane viewport to reason about.
#[derive(Resource)]
pub struct ViewportExtent {
    pub size: Vec2,
}

impl Default for ViewportExtent {
    fn default() -> Self {
        ViewportExtent {
            size: Vec2::new(1280.0, 800.0),
        }
    }
}

/// Derived every frame from `PageScroll`; never persisted.
#[derive(Resource, Default)]
pub struct HeaderState {
    pub compact: bool,
}

/// Where each active section starts in page space, and the total page
/// height. Inserted by the scene layer once the page is laid out.
#[derive(Resource, Default)]
pub struct PageLayout {
    pub anchors: EnumMap<SectionId, f32>,
    pub height: f32,
}

/// Ask the page to scroll to a section's anchor.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest(pub SectionId);

fn sync_viewport_extent(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut extent: ResMut<ViewportExtent>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    extent.size = Vec2::new(window.width(), window.height());
}

fn update_scroll_bounds(
    layout: Res<PageLayout>,
    extent: Res<ViewportExtent>,
    mut scroll: ResMut<PageScroll>,
) {
    scroll.max = (layout.height - extent.size.y).max(0.0);
    scroll.clamp();
}

/// High-frequency input path: assignment only, no other side effects. A
/// wheel event while an anchor tween is in flight hands control back to the
/// user by cancelling the tween.
fn wheel_input(
    mut commands: Commands,
    mut wheel_events: EventReader<MouseWheel>,
    tweens: Query<Entity, With<ScrollTranslation>>,
    mut scroll: ResMut<PageScroll>,
) {
    let mut moved = false;
    for event in wheel_events.read() {
        let delta = match event.unit {
            MouseScrollUnit::Line => -event.y * WHEEL_LINE_STEP,
            MouseScrollUnit::Pixel => -event.y,
        };
        scroll.scroll_by(delta);
        moved = true;
    }

    if moved {
        for tween in tweens.iter() {
            commands.entity(tween).despawn();
        }
    }
}

fn derive_header_state(scroll: Res<PageScroll>, mut header: ResMut<HeaderState>) {
    header.compact = scroll.offset > COMPACT_SCROLL_THRESHOLD;
}

fn handle_scroll_requests(
    mut commands: Commands,
    mut requests: EventReader<ScrollRequest>,
    layout: Res<PageLayout>,
    scroll: Res<PageScroll>,
    tweens: Query<Entity, With<ScrollTranslation>>,
) {
    // Only one user action can land per frame in practice; if several
    // requests ever do, the last writer wins.
    let Some(ScrollRequest(target)) = requests.read().last().copied() else {
        return;
    };

    for tween in tweens.iter() {
        commands.entity(tween).despawn();
    }

    let destination = layout.anchors[target].clamp(0.0, scroll.max.max(0.0));
    commands.spawn(ScrollTranslation::new(
        scroll.offset,
        destination,
        ANCHOR_TWEEN_DURATION,
    ));
}

/// Eases `PageScroll.offset` toward a section anchor and despawns itself
/// when done. Lives on a helper entity so cancellation is just a despawn.
#[derive(Component)]
pub struct ScrollTranslation {
    initial: f32,
    target: f32,
    timer: Timer,
}

impl ScrollTranslation {
    pub fn new(initial: f32, target: f32, duration: Duration) -> ScrollTranslation {
        ScrollTranslation {
            initial,
            target,
            timer: Timer::new(duration, TimerMode::Once),
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Smoothstep between the endpoints for a timer fraction in `[0, 1]`.
    pub fn value_at(&self, fraction: f32) -> f32 {
        let eased = fraction * fraction * (3.0 - 2.0 * fraction);
        self.initial + (self.target - self.initial) * eased
    }

    pub fn enact(
        mut commands: Commands,
        time: Res<Time>,
        mut scroll: ResMut<PageScroll>,
        mut query: Query<(Entity, &mut ScrollTranslation)>,
    ) {
        for (entity, mut tween) in query.iter_mut() {
            tween.timer.tick(time.delta());
            scroll.offset = tween.value_at(tween.timer.fraction());
            scroll.clamp();
            if tween.timer.finished() {
                scroll.offset = tween.target.clamp(0.0, scroll.max.max(0.0));
                commands.entity(entity).despawn();
            }
        }
    }
}

/// Visual blend between the expanded and compact header, easing toward the
/// state machine's target so the bar never snaps.
#[derive(Component, Default)]
pub struct HeaderBlend {
    pub progress: f32,
}

impl HeaderBlend {
    const RATE: f32 = 10.0;

    pub fn enact(
        time: Res<Time>,
        header: Res<HeaderState>,
        mut query: Query<&mut HeaderBlend>,
    ) {
        let target = if header.compact { 1.0 } else { 0.0 };
        let blend = 1.0 - (-Self::RATE * time.delta_secs()).exp();
        for mut header_blend in query.iter_mut() {
            header_blend.progress += (target - header_blend.progress) * blend;
        }
    }
}

#[cfg(test)]
mod tests;
