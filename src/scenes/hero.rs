use std::time::Duration;

use bevy::{prelude::*, text::TextBounds};

use super::{spawn_section_root, NavAction};
use crate::{
    data::site::{SectionId, SiteConfig},
    systems::{
        colors::{self, ColorAnchor, InteractionPalette},
        interaction::{Clickable, Hoverable},
        motion::{Entrance, Oscillation, PointerProfile, PointerResponse},
    },
};

const ENTRANCE_RISE: f32 = 30.0;
const ENTRANCE_DURATION: Duration = Duration::from_millis(800);
const PORTRAIT_BOB: f32 = 15.0;
const PORTRAIT_BOB_PERIOD: Duration = Duration::from_secs(4);
const PORTRAIT_SIZE: f32 = 340.0;
const CTA_SIZE: Vec2 = Vec2::new(240.0, 58.0);

pub fn spawn(
    commands: &mut Commands,
    page: Entity,
    site: &SiteConfig,
    assets: &AssetServer,
    top: f32,
) {
    let section = spawn_section_root(commands, page, SectionId::Home, top);

    commands.spawn((
        Text2d::new(site.badge.to_uppercase()),
        TextFont::from_font_size(13.0),
        TextColor(colors::BRAND_GOLD),
        ColorAnchor::default(),
        Transform::from_xyz(0.0, 330.0, 1.0),
        Entrance::rise(ENTRANCE_RISE, ENTRANCE_DURATION),
        ChildOf(section),
    ));

    commands.spawn((
        Text2d::new(site.name.to_uppercase()),
        TextFont::from_font_size(68.0),
        TextColor(colors::INK),
        ColorAnchor::default(),
        Transform::from_xyz(0.0, 255.0, 1.0),
        Entrance::rise(ENTRANCE_RISE, ENTRANCE_DURATION),
        ChildOf(section),
    ));

    commands.spawn((
        Text2d::new(site.tagline.clone()),
        TextFont::from_font_size(18.0),
        TextColor(colors::INK_MUTED),
        TextBounds {
            width: Some(760.0),
            ..default()
        },
        ColorAnchor::default(),
        Transform::from_xyz(0.0, 170.0, 1.0),
        Entrance::rise(ENTRANCE_RISE, ENTRANCE_DURATION),
        ChildOf(section),
    ));

    // Portrait: placeholder panel behind the image so a missing asset still
    // leaves a composed hero instead of a hole.
    commands.spawn((
        Sprite::from_color(colors::BRAND_NAVY, Vec2::splat(PORTRAIT_SIZE)),
        Transform::from_xyz(0.0, -90.0, 0.5),
        ColorAnchor::default(),
        Entrance::new(Vec2::ZERO, Duration::from_secs(1)).with_scale_from(0.9),
        Oscillation::new(PORTRAIT_BOB, PORTRAIT_BOB_PERIOD),
        Hoverable::new(Vec2::splat(PORTRAIT_SIZE)),
        PointerResponse::hover_only(PointerProfile::new(Vec2::ZERO, 1.05, 0.05)),
        ChildOf(section),
        children![
            (
                Sprite {
                    image: assets.load(site.portrait.as_str()),
                    custom_size: Some(Vec2::splat(PORTRAIT_SIZE)),
                    ..default()
                },
                ColorAnchor::default(),
                Transform::from_xyz(0.0, 0.0, 0.1),
            ),
            (
                Sprite::from_color(colors::BRAND_GOLD.with_alpha(0.2), Vec2::splat(180.0)),
                ColorAnchor::default(),
                Transform::from_xyz(-190.0, -190.0, -0.1),
            ),
            (
                Sprite::from_color(colors::BRAND_BLUE.with_alpha(0.1), Vec2::splat(120.0)),
                ColorAnchor::default(),
                Transform::from_xyz(175.0, 185.0, -0.1),
            ),
        ],
    ));

    let ctas: Vec<(&str, SectionId)> = [
        ("The Statesman", SectionId::Statesman),
        ("The Artist", SectionId::Artist),
    ]
    .into_iter()
    .filter(|(_, target)| site.is_active(*target))
    .collect();

    let count = ctas.len() as f32;
    for (index, (label, target)) in ctas.into_iter().enumerate() {
        let x = (index as f32 - (count - 1.0) / 2.0) * (CTA_SIZE.x + 24.0);
        commands.spawn((
            Sprite::from_color(colors::BRAND_BLUE, CTA_SIZE),
            Transform::from_xyz(x, -330.0, 1.0),
            ColorAnchor::default(),
            Entrance::rise(ENTRANCE_RISE, ENTRANCE_DURATION),
            Hoverable::new(CTA_SIZE),
            PointerResponse::new(
                PointerProfile::lifted(2.0, 1.05),
                PointerProfile::scaled(0.98),
            ),
            Clickable::new([NavAction::Navigate(target)]),
            InteractionPalette::new(
                colors::BRAND_BLUE,
                colors::BRAND_BLUE.mix(&Color::WHITE, 0.15),
                colors::BRAND_BLUE.mix(&Color::BLACK, 0.15),
            ),
            ChildOf(section),
            children![(
                Text2d::new(label.to_uppercase()),
                TextFont::from_font_size(14.0),
                TextColor(Color::WHITE),
                ColorAnchor::default(),
                Transform::from_xyz(0.0, 0.0, 0.1),
            )],
        ));
    }
}
