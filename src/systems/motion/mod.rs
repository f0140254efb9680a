//! The animation orchestrator.
//!
//! A fixed set of named transition profiles, each a component owning its own
//! timers: `Entrance` (one-shot mount transition), `ViewportReveal`
//! (arms an `Entrance` the first time the element scrolls into view, and
//! never again), `Oscillation` (infinite loop, phase-shiftable for staggered
//! groups) and `PointerResponse` (transient hover/press deltas). Profiles
//! compose additively onto a `TransformAnchor`; none of them replaces
//! another's contribution. Despawning an animated entity takes every timer
//! with it, so an element removed mid-transition needs no cleanup.

use std::time::Duration;

use bevy::{
    ecs::{component::HookContext, world::DeferredWorld},
    prelude::*,
};

use crate::systems::{
    colors::{ColorAnchor, ColorSystems},
    interaction::Hoverable,
    scroll::{PageScroll, ViewportExtent},
};

#[derive(Default, States, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MotionSystemsActive {
    #[default]
    False,
    True,
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum MotionSystems {
    Tick,
    Compose,
    Fade,
}

pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<MotionSystemsActive>()
            .add_systems(Update, activate_systems)
            .configure_sets(
                Update,
                (
                    MotionSystems::Compose.after(MotionSystems::Tick),
                    MotionSystems::Fade
                        .after(MotionSystems::Compose)
                        .after(ColorSystems::Palette),
                ),
            )
            .add_systems(
                Update,
                (
                    Entrance::enact,
                    Oscillation::enact,
                    PointerResponse::enact,
                    ViewportReveal::enact,
                )
                    .in_set(MotionSystems::Tick)
                    .run_if(in_state(MotionSystemsActive::True)),
            )
            .add_systems(
                Update,
                compose_transforms
                    .in_set(MotionSystems::Compose)
                    .run_if(in_state(MotionSystemsActive::True)),
            )
            .add_systems(
                Update,
                apply_fades
                    .in_set(MotionSystems::Fade)
                    .run_if(in_state(MotionSystemsActive::True)),
            )
            .register_required_components::<TransformAnchor, Transform>();
    }
}

fn activate_systems(
    mut state: ResMut<NextState<MotionSystemsActive>>,
    query: Query<
        (),
        Or<(
            With<Entrance>,
            With<Oscillation>,
            With<PointerResponse>,
            With<ViewportReveal>,
        )>,
    >,
) {
    if !query.is_empty() {
        state.set(MotionSystemsActive::True)
    } else {
        state.set(MotionSystemsActive::False)
    }
}

pub fn ease_out_cubic(t: f32) -> f32 {
    let inverse = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inverse * inverse * inverse
}

/// Base pose every profile composes onto, captured when the component lands
/// on the entity.
#[derive(Clone)]
pub struct TransformAnchor(pub Transform);

impl Default for TransformAnchor {
    fn default() -> Self {
        Self(Transform::default())
    }
}

impl Component for TransformAnchor {
    const STORAGE_TYPE: bevy::ecs::component::StorageType =
        bevy::ecs::component::StorageType::Table;
    type Mutability = bevy::ecs::component::Mutable;

    fn register_component_hooks(hooks: &mut bevy::ecs::component::ComponentHooks) {
        hooks.on_insert(|mut world: DeferredWorld, context: HookContext| {
            let transform: Option<Transform> = {
                let entity_ref = world.entity(context.entity);
                entity_ref.get::<Transform>().cloned()
            };

            match transform {
                Some(transform) => {
                    if let Some(mut anchor) =
                        world.entity_mut(context.entity).get_mut::<TransformAnchor>()
                    {
                        anchor.0 = transform;
                    }
                }
                None => {
                    warn!(
                        "TransformAnchor inserted before Transform on entity: {:?}",
                        context.entity
                    );
                }
            }
        });
    }
}

/// One-shot mount transition: the element starts displaced by `from_offset`,
/// scaled by `scale_from` and fully transparent, then eases to its anchored
/// pose. Fires once when inserted; re-renders never restart it.
#[derive(Component, Clone)]
#[require(TransformAnchor)]
pub struct Entrance {
    pub from_offset: Vec2,
    pub scale_from: f32,
    delay: Timer,
    timer: Timer,
}

impl Entrance {
    pub fn new(from_offset: Vec2, duration: Duration) -> Entrance {
        Entrance {
            from_offset,
            scale_from: 1.0,
            delay: Timer::new(Duration::ZERO, TimerMode::Once),
            timer: Timer::new(duration, TimerMode::Once),
        }
    }

    /// Fade + rise used by the hero copy, the page's signature entrance.
    pub fn rise(height: f32, duration: Duration) -> Entrance {
        Entrance::new(Vec2::new(0.0, -height), duration)
    }

    pub fn with_delay(mut self, delay: Duration) -> Entrance {
        self.delay = Timer::new(delay, TimerMode::Once);
        self
    }

    pub fn with_scale_from(mut self, scale_from: f32) -> Entrance {
        self.scale_from = scale_from;
        self
    }

    fn delay_done(&self) -> bool {
        self.delay.duration() == Duration::ZERO || self.delay.finished()
    }

    pub fn progress(&self) -> f32 {
        if self.delay_done() {
            ease_out_cubic(self.timer.fraction())
        } else {
            0.0
        }
    }

    pub fn finished(&self) -> bool {
        self.delay_done() && self.timer.finished()
    }

    fn just_finished(&self) -> bool {
        self.timer.just_finished()
    }

    fn tick(&mut self, delta: Duration) {
        if self.delay_done() {
            self.timer.tick(delta);
        } else {
            self.delay.tick(delta);
        }
    }

    pub fn enact(time: Res<Time>, mut query: Query<&mut Entrance>) {
        for mut entrance in query.iter_mut() {
            entrance.tick(time.delta());
        }
    }
}

/// Fires a mount transition the first time the element's page band crosses
/// the visible band. `seen` latches: scrolling away and back never replays
/// the reveal.
#[derive(Component)]
pub struct ViewportReveal {
    pub band_top: f32,
    pub band_extent: f32,
    pub seen: bool,
    entrance: Entrance,
}

impl ViewportReveal {
    pub fn new(band_top: f32, band_extent: f32, entrance: Entrance) -> ViewportReveal {
        ViewportReveal {
            band_top,
            band_extent,
            seen: false,
            entrance,
        }
    }

    fn intersects(&self, visible_top: f32, visible_extent: f32) -> bool {
        self.band_top < visible_top + visible_extent
            && self.band_top + self.band_extent > visible_top
    }

    pub fn enact(
        mut commands: Commands,
        scroll: Res<PageScroll>,
        extent: Res<ViewportExtent>,
        mut query: Query<(Entity, &mut ViewportReveal)>,
    ) {
        for (entity, mut reveal) in query.iter_mut() {
            if reveal.seen {
                continue;
            }
            if reveal.intersects(scroll.offset, extent.size.y) {
                reveal.seen = true;
                commands.entity(entity).insert(reveal.entrance.clone());
            }
        }
    }
}

/// Infinite vertical bob: `0 → amplitude → 0` each period. Groups of
/// siblings built with `staggered` share the waveform but start
/// `index × stagger` apart, animating as a wave instead of in lockstep.
#[derive(Component, Clone)]
#[require(TransformAnchor)]
pub struct Oscillation {
    pub amplitude: f32,
    delay: Timer,
    cycle: Timer,
}

impl Oscillation {
    pub fn new(amplitude: f32, period: Duration) -> Oscillation {
        Oscillation {
            amplitude,
            delay: Timer::new(Duration::ZERO, TimerMode::Once),
            cycle: Timer::new(period, TimerMode::Repeating),
        }
    }

    pub fn staggered(
        amplitude: f32,
        period: Duration,
        index: usize,
        stagger: Duration,
    ) -> Oscillation {
        let mut oscillation = Oscillation::new(amplitude, period);
        oscillation.delay = Timer::new(stagger * index as u32, TimerMode::Once);
        oscillation
    }

    pub fn phase_offset(&self) -> Duration {
        self.delay.duration()
    }

    /// Waveform sample for a cycle fraction in `[0, 1]`.
    pub fn offset_at(fraction: f32, amplitude: f32) -> f32 {
        amplitude * 0.5 * (1.0 - (std::f32::consts::TAU * fraction).cos())
    }

    fn delay_done(&self) -> bool {
        self.delay.duration() == Duration::ZERO || self.delay.finished()
    }

    pub fn current_offset(&self) -> f32 {
        if self.delay_done() {
            Self::offset_at(self.cycle.fraction(), self.amplitude)
        } else {
            0.0
        }
    }

    fn tick(&mut self, delta: Duration) {
        if self.delay_done() {
            self.cycle.tick(delta);
        } else {
            self.delay.tick(delta);
        }
    }

    pub fn enact(time: Res<Time>, mut query: Query<&mut Oscillation>) {
        for mut oscillation in query.iter_mut() {
            oscillation.tick(time.delta());
        }
    }
}

/// Transform deltas applied while a pointer condition holds. `scale` is a
/// multiplier, `translation` and `rotation` are additive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerProfile {
    pub translation: Vec2,
    pub scale: f32,
    pub rotation: f32,
}

impl PointerProfile {
    pub const IDENTITY: PointerProfile = PointerProfile {
        translation: Vec2::ZERO,
        scale: 1.0,
        rotation: 0.0,
    };

    pub const fn new(translation: Vec2, scale: f32, rotation: f32) -> PointerProfile {
        PointerProfile {
            translation,
            scale,
            rotation,
        }
    }

    pub const fn scaled(scale: f32) -> PointerProfile {
        PointerProfile::new(Vec2::ZERO, scale, 0.0)
    }

    pub const fn lifted(height: f32, scale: f32) -> PointerProfile {
        PointerProfile::new(Vec2::new(0.0, height), scale, 0.0)
    }

    fn approach(self, target: PointerProfile, blend: f32) -> PointerProfile {
        PointerProfile {
            translation: self.translation + (target.translation - self.translation) * blend,
            scale: self.scale + (target.scale - self.scale) * blend,
            rotation: self.rotation + (target.rotation - self.rotation) * blend,
        }
    }
}

/// Hover and press responses ease toward their target while the condition
/// holds and back to identity on release, so they never snap and never
/// persist. They stack on top of whatever the anchor, entrance and loop
/// profiles produce.
#[derive(Component, Clone)]
#[require(Hoverable)]
pub struct PointerResponse {
    pub hover: PointerProfile,
    pub press: PointerProfile,
    rate: f32,
    current: PointerProfile,
}

impl PointerResponse {
    pub fn new(hover: PointerProfile, press: PointerProfile) -> PointerResponse {
        PointerResponse {
            hover,
            press,
            rate: 14.0,
            current: PointerProfile::IDENTITY,
        }
    }

    pub fn hover_only(hover: PointerProfile) -> PointerResponse {
        PointerResponse::new(hover, hover)
    }

    pub fn current(&self) -> PointerProfile {
        self.current
    }

    fn target(&self, hoverable: &Hoverable) -> PointerProfile {
        if hoverable.pressed {
            self.press
        } else if hoverable.hovered {
            self.hover
        } else {
            PointerProfile::IDENTITY
        }
    }

    fn tick(&mut self, hoverable: &Hoverable, delta_secs: f32) {
        let target = self.target(hoverable);
        let blend = 1.0 - (-self.rate * delta_secs).exp();
        self.current = self.current.approach(target, blend);
    }

    pub fn enact(time: Res<Time>, mut query: Query<(&mut PointerResponse, &Hoverable)>) {
        for (mut response, hoverable) in query.iter_mut() {
            response.tick(hoverable, time.delta_secs());
        }
    }
}

/// Anchor ⊕ entrance ⊕ loop ⊕ pointer, in that order. Each profile adds its
/// contribution; none of them overwrites another's.
pub fn composed_transform(
    anchor: &TransformAnchor,
    entrance: Option<&Entrance>,
    oscillation: Option<&Oscillation>,
    pointer: Option<&PointerResponse>,
) -> Transform {
    let mut translation = anchor.0.translation;
    let mut rotation = anchor.0.rotation;
    let mut scale = anchor.0.scale;

    if let Some(entrance) = entrance {
        let progress = entrance.progress();
        translation += (entrance.from_offset * (1.0 - progress)).extend(0.0);
        scale *= entrance.scale_from + (1.0 - entrance.scale_from) * progress;
    }

    if let Some(oscillation) = oscillation {
        translation.y += oscillation.current_offset();
    }

    if let Some(pointer) = pointer {
        let delta = pointer.current();
        translation += delta.translation.extend(0.0);
        scale *= delta.scale;
        rotation *= Quat::from_rotation_z(delta.rotation);
    }

    Transform {
        translation,
        rotation,
        scale,
    }
}

pub fn compose_transforms(
    mut query: Query<
        (
            &TransformAnchor,
            &mut Transform,
            Option<&Entrance>,
            Option<&Oscillation>,
            Option<&PointerResponse>,
        ),
        Or<(With<Entrance>, With<Oscillation>, With<PointerResponse>)>,
    >,
) {
    for (anchor, mut transform, entrance, oscillation, pointer) in query.iter_mut() {
        *transform = composed_transform(anchor, entrance, oscillation, pointer);
    }
}

/// Alpha side of entrances: unseen reveal targets are held invisible, active
/// entrances scale the anchored alpha of every entity in the subtree, and a
/// finished entrance writes the anchored alpha once and then leaves color to
/// the palette systems.
pub fn apply_fades(
    roots: Query<
        (Entity, Option<&Entrance>, Option<&ViewportReveal>),
        Or<(With<Entrance>, With<ViewportReveal>)>,
    >,
    children_q: Query<&Children>,
    mut text_q: Query<(&mut TextColor, &ColorAnchor)>,
    mut sprite_q: Query<(&mut Sprite, &ColorAnchor)>,
) {
    for (root, entrance, reveal) in roots.iter() {
        let factor = match (reveal, entrance) {
            (Some(reveal), _) if !reveal.seen => Some(0.0),
            (_, Some(entrance)) if !entrance.finished() => Some(entrance.progress()),
            (_, Some(entrance)) if entrance.just_finished() => Some(1.0),
            _ => None,
        };
        let Some(factor) = factor else { continue };

        apply_alpha_in_subtree(root, factor, &children_q, &mut text_q, &mut sprite_q);
    }
}

fn apply_alpha_in_subtree(
    entity: Entity,
    factor: f32,
    children_q: &Query<&Children>,
    text_q: &mut Query<(&mut TextColor, &ColorAnchor)>,
    sprite_q: &mut Query<(&mut Sprite, &ColorAnchor)>,
) {
    if let Ok((mut text_color, anchor)) = text_q.get_mut(entity) {
        let base = text_color.0;
        text_color.0 = base.with_alpha(anchor.0.alpha() * factor);
    }
    if let Ok((mut sprite, anchor)) = sprite_q.get_mut(entity) {
        let base = sprite.color;
        sprite.color = base.with_alpha(anchor.0.alpha() * factor);
    }

    if let Ok(children) = children_q.get(entity) {
        for index in 0..children.len() {
            apply_alpha_in_subtree(children[index], factor, children_q, text_q, sprite_q);
        }
    }
}

#[cfg(test)]
mod tests;
