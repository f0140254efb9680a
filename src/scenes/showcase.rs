use bevy::{prelude::*, text::TextBounds};

use super::spawn_section_root;
use crate::{
    data::site::{SectionId, SiteConfig},
    systems::{
        colors,
        interaction::Hoverable,
        motion::{PointerProfile, PointerResponse},
    },
};

const COVER_SIZE: Vec2 = Vec2::new(250.0, 330.0);
const CTA_SIZE: Vec2 = Vec2::new(280.0, 60.0);

pub fn spawn(
    commands: &mut Commands,
    page: Entity,
    site: &SiteConfig,
    assets: &AssetServer,
    top: f32,
) {
    let section = spawn_section_root(commands, page, SectionId::Author, top);
    let publication = &site.publication;

    commands.spawn((
        Text2d::new("LITERARY WORKS"),
        TextFont::from_font_size(12.0),
        TextColor(colors::BRAND_GOLD),
        Transform::from_xyz(0.0, 360.0, 1.0),
        ChildOf(section),
    ));
    commands.spawn((
        Text2d::new("THE AUTHOR"),
        TextFont::from_font_size(58.0),
        TextColor(colors::INK),
        Transform::from_xyz(0.0, 300.0, 1.0),
        ChildOf(section),
    ));

    // Book cover with a placeholder behind the asset slot.
    commands.spawn((
        Sprite::from_color(colors::BRAND_NAVY, COVER_SIZE),
        Transform::from_xyz(0.0, 85.0, 0.5),
        Hoverable::new(COVER_SIZE),
        PointerResponse::hover_only(PointerProfile::scaled(1.04)),
        ChildOf(section),
        children![(
            Sprite {
                image: assets.load(publication.cover.as_str()),
                custom_size: Some(COVER_SIZE),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 0.1),
        )],
    ));

    commands.spawn((
        Text2d::new(format!("\u{201c}{}\u{201d}", publication.title)),
        TextFont::from_font_size(28.0),
        TextColor(colors::INK),
        Transform::from_xyz(0.0, -130.0, 1.0),
        ChildOf(section),
    ));
    commands.spawn((
        Text2d::new(publication.blurb.clone()),
        TextFont::from_font_size(15.0),
        TextColor(colors::INK_MUTED),
        TextBounds {
            width: Some(680.0),
            ..default()
        },
        Transform::from_xyz(0.0, -200.0, 1.0),
        ChildOf(section),
    ));

    let count = publication.stats.len() as f32;
    for (index, stat) in publication.stats.iter().enumerate() {
        let x = (index as f32 - (count - 1.0) / 2.0) * 220.0;
        commands.spawn((
            Text2d::new(stat.value.clone()),
            TextFont::from_font_size(34.0),
            TextColor(colors::BRAND_GOLD),
            Transform::from_xyz(x, -275.0, 1.0),
            ChildOf(section),
        ));
        commands.spawn((
            Text2d::new(stat.caption.to_uppercase()),
            TextFont::from_font_size(10.0),
            TextColor(colors::INK_MUTED),
            Transform::from_xyz(x, -305.0, 1.0),
            ChildOf(section),
        ));
    }

    commands.spawn((
        Sprite::from_color(colors::BRAND_BLUE, CTA_SIZE),
        Transform::from_xyz(0.0, -360.0, 1.0),
        Hoverable::new(CTA_SIZE),
        PointerResponse::new(
            PointerProfile::lifted(2.0, 1.05),
            PointerProfile::scaled(0.98),
        ),
        ChildOf(section),
        children![(
            Text2d::new("VIEW PUBLICATION"),
            TextFont::from_font_size(14.0),
            TextColor(Color::WHITE),
            Transform::from_xyz(0.0, 0.0, 0.1),
        )],
    ));
}
