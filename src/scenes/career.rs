use std::time::Duration;

use bevy::{prelude::*, text::TextBounds};

use super::spawn_section_root;
use crate::{
    data::site::{CardPalette, SectionId, SiteConfig},
    systems::{
        colors::{self, Shimmer},
        interaction::Hoverable,
        motion::{Oscillation, PointerProfile, PointerResponse},
    },
};

/// Sibling cards share one waveform but start this far apart, so the row
/// bobs as a wave rather than in lockstep.
pub const CARD_STAGGER: Duration = Duration::from_millis(500);
const CARD_BOB: f32 = 10.0;
const CARD_BOB_PERIOD: Duration = Duration::from_secs(4);
const CARD_SIZE: Vec2 = Vec2::new(360.0, 400.0);
const CARD_PITCH: f32 = 400.0;
const PANEL_SIZE: Vec2 = Vec2::new(380.0, 180.0);

fn palette_color(palette: CardPalette) -> Color {
    match palette {
        CardPalette::Ruby => colors::CARD_RUBY,
        CardPalette::Gold => colors::CARD_GOLD,
        CardPalette::Emerald => colors::CARD_EMERALD,
    }
}

pub fn spawn(commands: &mut Commands, page: Entity, site: &SiteConfig, top: f32) {
    let section = spawn_section_root(commands, page, SectionId::Statesman, top);

    commands.spawn((
        Text2d::new("PUBLIC SERVICE LEGACY"),
        TextFont::from_font_size(48.0),
        TextColor(colors::INK),
        Transform::from_xyz(0.0, 330.0, 1.0),
        ChildOf(section),
    ));
    commands.spawn((
        Sprite::from_color(colors::BRAND_GOLD, Vec2::new(96.0, 8.0)),
        Transform::from_xyz(-240.0, 290.0, 1.0),
        ChildOf(section),
    ));

    let count = site.career_highlights.len() as f32;
    for (index, highlight) in site.career_highlights.iter().enumerate() {
        let x = (index as f32 - (count - 1.0) / 2.0) * CARD_PITCH;
        commands.spawn((
            Sprite::from_color(palette_color(highlight.palette), CARD_SIZE),
            Transform::from_xyz(x, 40.0, 0.5),
            Oscillation::staggered(CARD_BOB, CARD_BOB_PERIOD, index, CARD_STAGGER),
            Hoverable::new(CARD_SIZE),
            PointerResponse::new(
                PointerProfile::new(Vec2::new(0.0, 15.0), 1.05, 0.017),
                PointerProfile::scaled(0.98),
            ),
            Shimmer::default(),
            ChildOf(section),
            children![
                (
                    Text2d::new(highlight.year.clone()),
                    TextFont::from_font_size(30.0),
                    TextColor(colors::BRAND_GOLD),
                    Transform::from_xyz(0.0, 120.0, 0.1),
                ),
                (
                    Text2d::new(highlight.title.to_uppercase()),
                    TextFont::from_font_size(20.0),
                    TextColor(Color::WHITE),
                    TextBounds {
                        width: Some(CARD_SIZE.x - 48.0),
                        ..default()
                    },
                    Transform::from_xyz(0.0, 50.0, 0.1),
                ),
                (
                    Text2d::new(highlight.detail.clone()),
                    TextFont::from_font_size(15.0),
                    TextColor(Color::WHITE.with_alpha(0.8)),
                    TextBounds {
                        width: Some(CARD_SIZE.x - 48.0),
                        ..default()
                    },
                    Transform::from_xyz(0.0, -70.0, 0.1),
                ),
            ],
        ));
    }

    // Highlight strip under the cards; images would sit here, panels keep
    // the layout legible when none resolve.
    let strip = [("GOVERNANCE", "Nagaland Staff Selection Board"),
        ("34+", "Years of Service"),
        ("IMPACT", "State-wide Legacy")];
    for (index, (headline, caption)) in strip.into_iter().enumerate() {
        let x = (index as f32 - 1.0) * (PANEL_SIZE.x + 20.0);
        commands.spawn((
            Sprite::from_color(colors::INK, PANEL_SIZE),
            Transform::from_xyz(x, -280.0, 0.5),
            Hoverable::new(PANEL_SIZE),
            PointerResponse::hover_only(PointerProfile::scaled(1.05)),
            ChildOf(section),
            children![
                (
                    Text2d::new(headline),
                    TextFont::from_font_size(26.0),
                    TextColor(colors::BRAND_GOLD),
                    Transform::from_xyz(0.0, 20.0, 0.1),
                ),
                (
                    Text2d::new(caption.to_uppercase()),
                    TextFont::from_font_size(11.0),
                    TextColor(Color::WHITE),
                    Transform::from_xyz(0.0, -25.0, 0.1),
                ),
            ],
        ));
    }
}
