use bevy::prelude::*;

mod data;
mod scenes;
mod startup;
mod systems;

use data::{rng::RngPlugin, site::SITE, states::MenuStatesPlugin};
use scenes::{ScenePlugin, PAGE_WIDTH};
use startup::StartupPlugin;
use systems::{
    colors::ColorsPlugin, interaction::InteractionPlugin, motion::MotionPlugin,
    scroll::ScrollPlugin,
};

const WINDOW_HEIGHT: f32 = 800.0;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: SITE.name.clone(),
                    resolution: (PAGE_WIDTH, WINDOW_HEIGHT).into(),
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins(ProfilePlugin)
        .run();
}

struct ProfilePlugin;

impl Plugin for ProfilePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            StartupPlugin,
            MenuStatesPlugin,
            RngPlugin,
            ScrollPlugin,
            InteractionPlugin,
            ColorsPlugin,
            MotionPlugin,
            ScenePlugin,
        ));
    }
}
