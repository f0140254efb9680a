use bevy::{
    ecs::{component::HookContext, world::DeferredWorld},
    prelude::*,
};
use std::time::Duration;

use crate::{data::rng::GlobalRng, systems::interaction::Hoverable};

pub const BRAND_NAVY: Color = Color::Srgba(Srgba::new(0.059, 0.09, 0.165, 1.0));
pub const BRAND_BLUE: Color = Color::Srgba(Srgba::new(0.0, 0.4, 1.0, 1.0));
pub const BRAND_GOLD: Color = Color::Srgba(Srgba::new(0.831, 0.686, 0.216, 1.0));
pub const BRAND_WHITE: Color = Color::Srgba(Srgba::new(0.98, 0.98, 0.969, 1.0));
pub const ACCENT_RED: Color = Color::Srgba(Srgba::new(0.863, 0.149, 0.149, 1.0));

pub const CARD_RUBY: Color = Color::Srgba(Srgba::new(0.608, 0.106, 0.212, 1.0));
pub const CARD_GOLD: Color = Color::Srgba(Srgba::new(0.706, 0.537, 0.114, 1.0));
pub const CARD_EMERALD: Color = Color::Srgba(Srgba::new(0.016, 0.471, 0.341, 1.0));

pub const INK: Color = Color::Srgba(Srgba::new(0.094, 0.094, 0.106, 1.0));
pub const INK_MUTED: Color = Color::Srgba(Srgba::new(0.443, 0.443, 0.478, 1.0));
pub const NAV_IDLE: Color = Color::Srgba(Srgba::new(1.0, 1.0, 1.0, 0.6));
pub const NAV_ACTIVE: Color = Color::WHITE;

#[derive(Default, States, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorsSystemsActive {
    #[default]
    False,
    True,
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum ColorSystems {
    /// Palette easing and shimmer write full colors here; alpha-only
    /// composition (entrance fades) must run after this set.
    Palette,
}

pub struct ColorsPlugin;
impl Plugin for ColorsPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ColorsSystemsActive>()
            .add_systems(Update, activate_systems)
            .add_systems(
                Update,
                (InteractionPalette::enact, Shimmer::enact)
                    .in_set(ColorSystems::Palette)
                    .run_if(in_state(ColorsSystemsActive::True)),
            );
    }
}

fn activate_systems(
    mut state: ResMut<NextState<ColorsSystemsActive>>,
    query: Query<(), Or<(With<InteractionPalette>, With<Shimmer>)>>,
) {
    if !query.is_empty() {
        state.set(ColorsSystemsActive::True)
    } else {
        state.set(ColorsSystemsActive::False)
    }
}

trait ColorExt {
    fn to_vec4(self) -> Vec4;
    fn from_vec4(vec: Vec4) -> Color;
}

impl ColorExt for Color {
    fn to_vec4(self) -> Vec4 {
        let linear = self.to_linear();
        Vec4::new(linear.red, linear.green, linear.blue, linear.alpha)
    }

    fn from_vec4(vec: Vec4) -> Color {
        Color::LinearRgba(LinearRgba {
            red: vec.x,
            green: vec.y,
            blue: vec.z,
            alpha: vec.w,
        })
    }
}

/// Base color captured when the component lands on an entity, from
/// `TextColor` first, `Sprite` otherwise. Downstream systems (fades,
/// shimmer) derive from the anchor so repeated writes never compound.
#[derive(Clone)]
pub struct ColorAnchor(pub Color);

impl Default for ColorAnchor {
    fn default() -> Self {
        ColorAnchor(Color::WHITE)
    }
}

impl Component for ColorAnchor {
    const STORAGE_TYPE: bevy::ecs::component::StorageType =
        bevy::ecs::component::StorageType::Table;
    type Mutability = bevy::ecs::component::Mutable;

    fn register_component_hooks(hooks: &mut bevy::ecs::component::ComponentHooks) {
        hooks.on_insert(|mut world: DeferredWorld, context: HookContext| {
            let captured = {
                let entity_ref = world.entity(context.entity);
                entity_ref
                    .get::<TextColor>()
                    .map(|text_color| text_color.0)
                    .or_else(|| entity_ref.get::<Sprite>().map(|sprite| sprite.color))
            };

            match captured {
                Some(color) => {
                    if let Some(mut anchor) =
                        world.entity_mut(context.entity).get_mut::<ColorAnchor>()
                    {
                        anchor.0 = color;
                    }
                }
                None => {
                    warn!(
                        "ColorAnchor inserted on entity without TextColor or Sprite: {:?}",
                        context.entity
                    );
                }
            }
        });
    }
}

/// Hover/press tinting that eases toward its target instead of snapping,
/// matching the page's soft color transitions.
#[derive(Component)]
pub struct InteractionPalette {
    pub idle: Color,
    pub hovered: Color,
    pub pressed: Color,
    rate: f32,
    current: Option<Vec4>,
}

impl InteractionPalette {
    pub fn new(idle: Color, hovered: Color, pressed: Color) -> Self {
        Self {
            idle,
            hovered,
            pressed,
            rate: 12.0,
            current: None,
        }
    }

    fn target(&self, hoverable: &Hoverable) -> Color {
        if hoverable.pressed {
            self.pressed
        } else if hoverable.hovered {
            self.hovered
        } else {
            self.idle
        }
    }

    pub fn enact(
        time: Res<Time>,
        mut query: Query<(
            &mut InteractionPalette,
            &Hoverable,
            Option<&mut TextColor>,
            Option<&mut Sprite>,
        )>,
    ) {
        for (mut palette, hoverable, text_color, sprite) in query.iter_mut() {
            let target = palette.target(hoverable).to_vec4();
            let current = palette.current.unwrap_or(palette.idle.to_vec4());
            let blend = 1.0 - (-palette.rate * time.delta_secs()).exp();
            let next = current + (target - current) * blend;
            palette.current = Some(next);

            let color = Color::from_vec4(next);
            if let Some(mut text_color) = text_color {
                text_color.0 = color;
            }
            if let Some(mut sprite) = sprite {
                sprite.color = color;
            }
        }
    }
}

/// Periodic brightness sweep over a sprite, with randomized downtime between
/// sweeps so a row of cards never pulses in unison.
#[derive(Component)]
#[require(ColorAnchor)]
pub struct Shimmer {
    enacting: bool,
    interval_timer: Timer,
    sweep_timer: Timer,
    min_interval_secs: f32,
    max_interval_secs: f32,
    strength: f32,
}

impl Shimmer {
    pub fn new(strength: f32, min_interval: Duration, max_interval: Duration) -> Self {
        Self {
            enacting: false,
            interval_timer: Timer::new(min_interval, TimerMode::Once),
            sweep_timer: Timer::new(Duration::from_millis(900), TimerMode::Once),
            min_interval_secs: min_interval.as_secs_f32(),
            max_interval_secs: max_interval.as_secs_f32(),
            strength,
        }
    }

    pub fn enact(
        time: Res<Time>,
        mut rng: ResMut<GlobalRng>,
        mut query: Query<(&mut Shimmer, &mut Sprite, &ColorAnchor)>,
    ) {
        use rand::Rng;

        for (mut shimmer, mut sprite, anchor) in query.iter_mut() {
            if !shimmer.enacting {
                if shimmer.interval_timer.tick(time.delta()).finished() {
                    shimmer.enacting = true;
                    shimmer.sweep_timer.reset();
                }
                continue;
            }

            shimmer.sweep_timer.tick(time.delta());
            let peak = (std::f32::consts::PI * shimmer.sweep_timer.fraction()).sin();
            sprite.color = anchor.0.mix(&Color::WHITE, shimmer.strength * peak);

            if shimmer.sweep_timer.finished() {
                shimmer.enacting = false;
                sprite.color = anchor.0;
                let next_interval = rng
                    .uniform
                    .random_range(shimmer.min_interval_secs..shimmer.max_interval_secs);
                shimmer
                    .interval_timer
                    .set_duration(Duration::from_secs_f32(next_interval));
                shimmer.interval_timer.reset();
            }
        }
    }
}

impl Default for Shimmer {
    fn default() -> Self {
        Shimmer::new(
            0.25,
            Duration::from_secs_f32(2.5),
            Duration::from_secs_f32(6.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_targets_follow_pointer_state() {
        let palette = InteractionPalette::new(NAV_IDLE, NAV_ACTIVE, BRAND_GOLD);

        let mut hoverable = Hoverable::new(Vec2::splat(10.0));
        assert_eq!(palette.target(&hoverable), NAV_IDLE);

        hoverable.hovered = true;
        assert_eq!(palette.target(&hoverable), NAV_ACTIVE);

        hoverable.pressed = true;
        assert_eq!(palette.target(&hoverable), BRAND_GOLD);
    }

    #[test]
    fn color_vec_round_trip_preserves_channels() {
        let vec = BRAND_BLUE.to_vec4();
        let back = Color::from_vec4(vec).to_linear();
        let original = BRAND_BLUE.to_linear();
        assert!((back.red - original.red).abs() < 1e-6);
        assert!((back.blue - original.blue).abs() < 1e-6);
        assert!((back.alpha - original.alpha).abs() < 1e-6);
    }
}
