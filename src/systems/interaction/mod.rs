//! Shared pointer primitives.
//!
//! Behavioral truth for hover and activation lives here (`Hoverable`,
//! `Clickable<T>`). Visual responses (tinting, lifts, squashes) are
//! downstream consumers in `systems::colors` and `systems::motion` and never
//! feed back into these flags.

use bevy::{prelude::*, window::PrimaryWindow};
use smallvec::SmallVec;

use crate::startup::MainCamera;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum InteractionSystem {
    Hoverable,
    Clickable,
}

/// Registers the hover layer and set ordering. `clickable_system::<T>` is
/// added by whichever plugin owns the action type `T`.
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            InteractionSystem::Clickable.after(InteractionSystem::Hoverable),
        )
        .add_systems(
            Update,
            hoverable_system.in_set(InteractionSystem::Hoverable),
        );
    }
}

/// Canonical hover/press truth for behavior systems. `region` is the hit
/// rectangle in local units, centered on the entity's translation.
#[derive(Component, Clone)]
pub struct Hoverable {
    pub region: Vec2,
    pub hovered: bool,
    pub pressed: bool,
}

impl Default for Hoverable {
    fn default() -> Self {
        Hoverable {
            region: Vec2::ZERO,
            hovered: false,
            pressed: false,
        }
    }
}

impl Hoverable {
    pub fn new(region: Vec2) -> Hoverable {
        Hoverable {
            region,
            ..default()
        }
    }
}

/// Typed activation: spawn sites declare what an element does, dispatch
/// systems downstream interpret the actions. `triggered` is a one-frame flag
/// consumed by whichever dispatcher handles `T`.
#[derive(Component)]
#[require(Hoverable)]
pub struct Clickable<T>
where
    T: Copy + Send + Sync + 'static,
{
    pub actions: SmallVec<[T; 2]>,
    pub triggered: bool,
}

impl<T> Clickable<T>
where
    T: Copy + Send + Sync + 'static,
{
    pub fn new(actions: impl IntoIterator<Item = T>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            triggered: false,
        }
    }

    /// Drains the trigger flag, handing the actions to the caller exactly
    /// once per activation.
    pub fn take_triggered(&mut self) -> Option<SmallVec<[T; 2]>> {
        if self.triggered {
            self.triggered = false;
            Some(self.actions.clone())
        } else {
            None
        }
    }
}

pub fn hoverable_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mouse_input: Res<ButtonInput<MouseButton>>,
    mut hoverable_q: Query<(&GlobalTransform, &mut Hoverable)>,
) {
    let cursor = get_cursor_world_position(&windows, &camera_q);

    for (transform, mut hoverable) in hoverable_q.iter_mut() {
        match cursor {
            Some(cursor) => {
                hoverable.hovered =
                    is_cursor_within_bounds(cursor, transform, hoverable.region);
                hoverable.pressed =
                    hoverable.hovered && mouse_input.pressed(MouseButton::Left);
            }
            None => {
                hoverable.hovered = false;
                hoverable.pressed = false;
            }
        }
    }
}

pub fn clickable_system<T: Copy + Send + Sync + 'static>(
    mouse_input: Res<ButtonInput<MouseButton>>,
    mut clickable_q: Query<(&Hoverable, &mut Clickable<T>)>,
) {
    for (hoverable, mut clickable) in clickable_q.iter_mut() {
        if hoverable.hovered && mouse_input.just_pressed(MouseButton::Left) {
            clickable.triggered = true;
        }
    }
}

fn get_cursor_world_position(
    windows: &Query<&Window, With<PrimaryWindow>>,
    camera_q: &Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) -> Option<Vec2> {
    let window = windows.single().ok()?;
    let cursor_position = window.cursor_position()?;
    let (camera, camera_transform) = camera_q.single().ok()?;
    camera
        .viewport_to_world_2d(camera_transform, cursor_position)
        .ok()
}

fn is_cursor_within_bounds(cursor: Vec2, transform: &GlobalTransform, region: Vec2) -> bool {
    let center = transform.translation().truncate();
    let half = region / 2.0;
    cursor.x >= center.x - half.x
        && cursor.x <= center.x + half.x
        && cursor.y >= center.y - half.y
        && cursor.y <= center.y + half.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_test_is_inclusive_at_edges() {
        let transform = GlobalTransform::from_translation(Vec3::new(10.0, -20.0, 0.0));
        let region = Vec2::new(100.0, 40.0);

        assert!(is_cursor_within_bounds(Vec2::new(10.0, -20.0), &transform, region));
        assert!(is_cursor_within_bounds(Vec2::new(60.0, 0.0), &transform, region));
        assert!(is_cursor_within_bounds(Vec2::new(-40.0, -40.0), &transform, region));
        assert!(!is_cursor_within_bounds(Vec2::new(60.1, 0.0), &transform, region));
        assert!(!is_cursor_within_bounds(Vec2::new(10.0, 0.1), &transform, region));
    }

    #[test]
    fn take_triggered_drains_the_flag() {
        let mut clickable = Clickable::new([1u8, 2]);
        assert!(clickable.take_triggered().is_none());

        clickable.triggered = true;
        let actions = clickable.take_triggered().unwrap();
        assert_eq!(actions.as_slice(), &[1, 2]);
        assert!(clickable.take_triggered().is_none());
    }
}
