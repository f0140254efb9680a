use bevy::prelude::*;

pub struct MenuStatesPlugin;
impl Plugin for MenuStatesPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<MenuState>()
            .enable_state_scoped_entities::<MenuState>();
    }
}

/// Lifecycle of the full-screen navigation overlay. The page always boots
/// with the overlay closed; nothing about it is persisted.
#[derive(Default, States, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}
