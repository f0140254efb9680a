use bevy::{app::AppExit, prelude::*};

use crate::systems::colors::BRAND_WHITE;

#[derive(Component)]
pub struct MainCamera;

pub struct StartupPlugin;

impl Plugin for StartupPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BRAND_WHITE))
            .add_systems(Startup, setup_camera)
            .add_systems(Update, close_on_esc);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

fn close_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
