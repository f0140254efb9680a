use std::time::Duration;

use bevy::{prelude::*, text::TextBounds};

use super::{spawn_section_root, SECTION_EXTENT};
use crate::{
    data::site::{SectionId, SiteConfig},
    systems::{
        colors::{self, ColorAnchor},
        motion::{Entrance, ViewportReveal},
    },
};

const TILE_SIZE: Vec2 = Vec2::new(420.0, 236.0);
const TILE_PITCH: Vec2 = Vec2::new(460.0, 266.0);
/// Each tile's reveal trails the previous one by this much once the row
/// scrolls into view.
const REVEAL_STAGGER: Duration = Duration::from_millis(100);
const REVEAL_DURATION: Duration = Duration::from_millis(500);

pub fn spawn(commands: &mut Commands, page: Entity, site: &SiteConfig, top: f32) {
    let section = spawn_section_root(commands, page, SectionId::Artist, top);

    commands.spawn((
        Text2d::new("MUSICAL JOURNEY"),
        TextFont::from_font_size(12.0),
        TextColor(colors::BRAND_BLUE),
        Transform::from_xyz(0.0, 360.0, 1.0),
        ChildOf(section),
    ));
    commands.spawn((
        Text2d::new("THE ARTIST"),
        TextFont::from_font_size(58.0),
        TextColor(colors::INK),
        Transform::from_xyz(0.0, 300.0, 1.0),
        ChildOf(section),
    ));

    for (index, video_id) in site.videos.iter().enumerate() {
        let column = (index % 2) as f32;
        let row = (index / 2) as f32;
        let x = (column - 0.5) * TILE_PITCH.x;
        let y = 120.0 - row * TILE_PITCH.y;

        // Band in page space, for the one-shot reveal.
        let band_center = top + SECTION_EXTENT / 2.0 - y;

        commands.spawn((
            Sprite::from_color(colors::INK, TILE_SIZE),
            Transform::from_xyz(x, y, 0.5),
            ColorAnchor::default(),
            ViewportReveal::new(
                band_center - TILE_SIZE.y / 2.0,
                TILE_SIZE.y,
                Entrance::new(Vec2::ZERO, REVEAL_DURATION)
                    .with_scale_from(0.95)
                    .with_delay(REVEAL_STAGGER * index as u32),
            ),
            ChildOf(section),
            children![
                (
                    Sprite::from_color(colors::ACCENT_RED, Vec2::new(64.0, 44.0)),
                    ColorAnchor::default(),
                    Transform::from_xyz(0.0, 12.0, 0.1),
                ),
                (
                    Text2d::new(video_id.clone()),
                    TextFont::from_font_size(14.0),
                    TextColor(Color::WHITE.with_alpha(0.5)),
                    ColorAnchor::default(),
                    Transform::from_xyz(0.0, -86.0, 0.1),
                ),
            ],
        ));
    }

    commands.spawn((
        Sprite::from_color(Color::WHITE, Vec2::new(940.0, 150.0)),
        Transform::from_xyz(0.0, -300.0, 0.5),
        ChildOf(section),
        children![
            (
                Text2d::new("A VOICE FOR THE NAGA SPIRIT"),
                TextFont::from_font_size(24.0),
                TextColor(colors::INK),
                Transform::from_xyz(0.0, 40.0, 0.1),
            ),
            (
                Text2d::new(site.artist_blurb.clone()),
                TextFont::from_font_size(14.0),
                TextColor(colors::INK_MUTED),
                TextBounds {
                    width: Some(860.0),
                    ..default()
                },
                Transform::from_xyz(0.0, -25.0, 0.1),
            ),
        ],
    ));
}
