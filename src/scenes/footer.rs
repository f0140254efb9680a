use bevy::{prelude::*, text::TextBounds};

use super::{spawn_section_root, NavAction, FOOTER_EXTENT, PAGE_WIDTH};
use crate::{
    data::site::{SectionId, SiteConfig},
    systems::{
        colors::{self, InteractionPalette},
        interaction::{Clickable, Hoverable},
        motion::{PointerProfile, PointerResponse},
    },
};

const SOCIAL_SIZE: Vec2 = Vec2::new(44.0, 44.0);

pub fn spawn(commands: &mut Commands, page: Entity, site: &SiteConfig, top: f32) {
    let section = spawn_section_root(commands, page, SectionId::Contact, top);

    let panel = commands
        .spawn((
            Sprite::from_color(colors::BRAND_NAVY, Vec2::new(PAGE_WIDTH, FOOTER_EXTENT)),
            Transform::from_xyz(0.0, 0.0, 0.2),
            ChildOf(section),
        ))
        .id();

    commands.spawn((
        Text2d::new(site.title.clone()),
        TextFont::from_font_size(30.0),
        TextColor(Color::WHITE),
        Transform::from_xyz(-340.0, 120.0, 0.1),
        ChildOf(panel),
    ));
    commands.spawn((
        Text2d::new(site.footer_blurb.clone()),
        TextFont::from_font_size(14.0),
        TextColor(Color::WHITE.with_alpha(0.6)),
        TextBounds {
            width: Some(380.0),
            ..default()
        },
        Transform::from_xyz(-340.0, 50.0, 0.1),
        ChildOf(panel),
    ));

    // Quick links: the same nav list the header and overlay consume.
    commands.spawn((
        Text2d::new("QUICK LINKS"),
        TextFont::from_font_size(12.0),
        TextColor(Color::WHITE.with_alpha(0.4)),
        Transform::from_xyz(280.0, 140.0, 0.1),
        ChildOf(panel),
    ));
    for (row, (link, target)) in site.nav_entries().into_iter().enumerate() {
        commands.spawn((
            Text2d::new(link.label.clone()),
            TextFont::from_font_size(15.0),
            TextColor(colors::NAV_IDLE),
            Transform::from_xyz(280.0, 100.0 - 34.0 * row as f32, 0.1),
            Hoverable::new(Vec2::new(140.0, 26.0)),
            Clickable::new([NavAction::Navigate(target)]),
            InteractionPalette::new(colors::NAV_IDLE, colors::NAV_ACTIVE, colors::BRAND_GOLD),
            ChildOf(panel),
        ));
    }

    for (index, social) in site.social.iter().enumerate() {
        let x = -340.0 + index as f32 * (SOCIAL_SIZE.x + 14.0);
        let hovered = if social.label.eq_ignore_ascii_case("youtube") {
            colors::ACCENT_RED
        } else {
            colors::BRAND_BLUE
        };
        let initial = social.label.chars().next().unwrap_or('•').to_string();

        commands.spawn((
            Sprite::from_color(colors::INK, SOCIAL_SIZE),
            Transform::from_xyz(x, -50.0, 0.1),
            Hoverable::new(SOCIAL_SIZE),
            PointerResponse::new(
                PointerProfile::lifted(3.0, 1.0),
                PointerProfile::scaled(0.9),
            ),
            Clickable::new([NavAction::External(index)]),
            InteractionPalette::new(colors::INK, hovered, hovered),
            ChildOf(panel),
            children![(
                Text2d::new(initial),
                TextFont::from_font_size(18.0),
                TextColor(Color::WHITE),
                Transform::from_xyz(0.0, 0.0, 0.1),
            )],
        ));
    }

    commands.spawn((
        Text2d::new(format!("© {}. All rights reserved.", site.name)),
        TextFont::from_font_size(11.0),
        TextColor(Color::WHITE.with_alpha(0.35)),
        Transform::from_xyz(0.0, -160.0, 0.1),
        ChildOf(panel),
    ));
}
