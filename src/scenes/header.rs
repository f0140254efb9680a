use bevy::prelude::*;

use super::{NavAction, PAGE_WIDTH};
use crate::{
    data::site::{SectionId, SITE},
    systems::{
        colors::{self, InteractionPalette},
        interaction::{Clickable, Hoverable},
        motion::{PointerProfile, PointerResponse},
        scroll::{HeaderBlend, ScrollSystems, ViewportExtent},
    },
};

pub struct HeaderScenePlugin;

impl Plugin for HeaderScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_header)
            .add_systems(Update, apply_header_surface.after(ScrollSystems::Derive));
    }
}

/// The bar's two visual poses. `HeaderBlend` supplies the 0..1 position
/// between them each frame.
#[derive(Component)]
pub struct HeaderSurface {
    pub expanded_height: f32,
    pub compact_height: f32,
    pub expanded_alpha: f32,
    pub compact_alpha: f32,
}

impl Default for HeaderSurface {
    fn default() -> Self {
        HeaderSurface {
            expanded_height: 96.0,
            compact_height: 64.0,
            expanded_alpha: 0.62,
            compact_alpha: 0.95,
        }
    }
}

impl HeaderSurface {
    pub fn height_at(&self, progress: f32) -> f32 {
        self.expanded_height + (self.compact_height - self.expanded_height) * progress
    }

    pub fn alpha_at(&self, progress: f32) -> f32 {
        self.expanded_alpha + (self.compact_alpha - self.expanded_alpha) * progress
    }
}

fn spawn_header(mut commands: Commands, extent: Res<ViewportExtent>) {
    let site = &*SITE;
    let surface = HeaderSurface::default();
    let bar_y = extent.size.y / 2.0 - surface.expanded_height / 2.0;

    let bar = commands
        .spawn((
            Sprite::from_color(
                colors::BRAND_NAVY.with_alpha(surface.expanded_alpha),
                Vec2::new(PAGE_WIDTH, surface.expanded_height),
            ),
            surface,
            HeaderBlend::default(),
            Transform::from_xyz(0.0, bar_y, 10.0),
        ))
        .id();

    commands.spawn((
        Text2d::new(site.title.clone()),
        TextFont::from_font_size(24.0),
        TextColor(Color::WHITE),
        Transform::from_xyz(-560.0, 0.0, 0.1),
        Hoverable::new(Vec2::new(180.0, 32.0)),
        PointerResponse::hover_only(PointerProfile::scaled(1.05)),
        Clickable::new([NavAction::Navigate(SectionId::Home)]),
        InteractionPalette::new(Color::WHITE, colors::BRAND_GOLD, colors::BRAND_GOLD),
        ChildOf(bar),
    ));

    for (index, (link, target)) in site.nav_entries().into_iter().enumerate() {
        commands.spawn((
            Text2d::new(link.label.to_uppercase()),
            TextFont::from_font_size(12.0),
            TextColor(colors::NAV_IDLE),
            Transform::from_xyz(150.0 + 105.0 * index as f32, 0.0, 0.1),
            Hoverable::new(Vec2::new(96.0, 26.0)),
            Clickable::new([NavAction::Navigate(target)]),
            InteractionPalette::new(colors::NAV_IDLE, colors::NAV_ACTIVE, colors::BRAND_GOLD),
            ChildOf(bar),
        ));
    }

    if let Some(youtube) = site
        .social
        .iter()
        .position(|social| social.label.eq_ignore_ascii_case("youtube"))
    {
        commands.spawn((
            Sprite::from_color(colors::ACCENT_RED, Vec2::new(38.0, 38.0)),
            Transform::from_xyz(566.0, 0.0, 0.1),
            Hoverable::new(Vec2::new(38.0, 38.0)),
            PointerResponse::new(
                PointerProfile::new(Vec2::ZERO, 1.1, 0.087),
                PointerProfile::scaled(0.9),
            ),
            Clickable::new([NavAction::External(youtube)]),
            ChildOf(bar),
            children![(
                Text2d::new("▶"),
                TextFont::from_font_size(16.0),
                TextColor(Color::WHITE),
                Transform::from_xyz(0.0, 0.0, 0.1),
            )],
        ));
    }

    commands.spawn((
        Text2d::new("☰"),
        TextFont::from_font_size(24.0),
        TextColor(Color::WHITE),
        Transform::from_xyz(616.0, 0.0, 0.1),
        Hoverable::new(Vec2::new(40.0, 40.0)),
        PointerResponse::new(PointerProfile::scaled(1.05), PointerProfile::scaled(0.95)),
        Clickable::new([NavAction::OpenOverlay]),
        InteractionPalette::new(Color::WHITE, colors::BRAND_GOLD, colors::BRAND_GOLD),
        ChildOf(bar),
    ));
}

/// Resizes and re-tints the bar from the eased blend. `custom_size` instead
/// of a scale so the bar's children keep their proportions.
fn apply_header_surface(
    extent: Res<ViewportExtent>,
    mut query: Query<(&HeaderSurface, &HeaderBlend, &mut Sprite, &mut Transform)>,
) {
    for (surface, blend, mut sprite, mut transform) in query.iter_mut() {
        let height = surface.height_at(blend.progress);
        sprite.custom_size = Some(Vec2::new(extent.size.x.max(PAGE_WIDTH), height));
        sprite.color = colors::BRAND_NAVY.with_alpha(surface.alpha_at(blend.progress));
        transform.translation.y = extent.size.y / 2.0 - height / 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_interpolates_between_poses() {
        let surface = HeaderSurface::default();

        assert_eq!(surface.height_at(0.0), 96.0);
        assert_eq!(surface.height_at(1.0), 64.0);
        assert_eq!(surface.height_at(0.5), 80.0);

        assert!((surface.alpha_at(0.0) - 0.62).abs() < 1e-6);
        assert!((surface.alpha_at(1.0) - 0.95).abs() < 1e-6);
    }
}
