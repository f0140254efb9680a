use std::time::Duration;

use bevy::prelude::*;

use super::NavAction;
use crate::{
    data::{site::SITE, states::MenuState},
    systems::{
        colors::{self, ColorAnchor, InteractionPalette},
        interaction::{Clickable, Hoverable},
        motion::{Entrance, PointerProfile, PointerResponse},
        scroll::ViewportExtent,
    },
};

const SLIDE_DURATION: Duration = Duration::from_millis(350);

/// Marker for the single overlay instance. The entity is scoped to
/// `MenuState::Open`, so closing the menu tears the whole tree down and
/// with it every in-flight transition and pointer subscription.
#[derive(Component)]
#[require(Transform, Visibility)]
pub struct OverlayRoot;

pub struct OverlayScenePlugin;

impl Plugin for OverlayScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(MenuState::Open), spawn_overlay);
    }
}

fn spawn_overlay(mut commands: Commands, extent: Res<ViewportExtent>) {
    let site = &*SITE;

    let root = commands
        .spawn((
            OverlayRoot,
            StateScoped(MenuState::Open),
            Sprite::from_color(colors::BRAND_NAVY, extent.size),
            Transform::from_xyz(0.0, 0.0, 20.0),
            ColorAnchor::default(),
            Entrance::new(Vec2::new(extent.size.x, 0.0), SLIDE_DURATION),
        ))
        .id();

    let top = extent.size.y / 2.0;

    commands.spawn((
        Text2d::new(site.title.clone()),
        TextFont::from_font_size(24.0),
        TextColor(Color::WHITE),
        ColorAnchor::default(),
        Transform::from_xyz(-540.0, top - 70.0, 0.1),
        ChildOf(root),
    ));

    commands.spawn((
        Text2d::new("✕"),
        TextFont::from_font_size(30.0),
        TextColor(Color::WHITE),
        ColorAnchor::default(),
        Transform::from_xyz(560.0, top - 70.0, 0.1),
        Hoverable::new(Vec2::new(48.0, 48.0)),
        PointerResponse::new(
            PointerProfile::new(Vec2::ZERO, 1.0, std::f32::consts::FRAC_PI_2),
            PointerProfile::scaled(0.9),
        ),
        Clickable::new([NavAction::CloseOverlay]),
        InteractionPalette::new(Color::WHITE, colors::BRAND_GOLD, colors::BRAND_GOLD),
        ChildOf(root),
    ));

    for (row, (link, target)) in site.nav_entries().into_iter().enumerate() {
        commands.spawn((
            Text2d::new(link.label.to_uppercase()),
            TextFont::from_font_size(54.0),
            TextColor(colors::NAV_IDLE),
            ColorAnchor::default(),
            Transform::from_xyz(-300.0, 150.0 - 110.0 * row as f32, 0.1),
            Hoverable::new(Vec2::new(440.0, 80.0)),
            Clickable::new([NavAction::Navigate(target)]),
            InteractionPalette::new(colors::NAV_IDLE, colors::NAV_ACTIVE, colors::BRAND_GOLD),
            ChildOf(root),
        ));
    }

    for (index, social) in site.social.iter().enumerate() {
        commands.spawn((
            Text2d::new(social.label.clone()),
            TextFont::from_font_size(14.0),
            TextColor(colors::NAV_IDLE),
            ColorAnchor::default(),
            Transform::from_xyz(
                -460.0 + 150.0 * index as f32,
                -top + 70.0,
                0.1,
            ),
            Hoverable::new(Vec2::new(130.0, 30.0)),
            Clickable::new([NavAction::External(index)]),
            InteractionPalette::new(colors::NAV_IDLE, colors::NAV_ACTIVE, colors::BRAND_GOLD),
            ChildOf(root),
        ));
    }
}

#[cfg(test)]
mod tests {
    use bevy::{
        input::mouse::MouseWheel,
        state::app::StatesPlugin,
    };
    use enum_map::enum_map;

    use super::*;
    use crate::{
        data::{rng::RngPlugin, site::SectionId, states::MenuStatesPlugin},
        scenes::dispatch_nav_actions,
        systems::{
            colors::ColorsPlugin,
            interaction::{clickable_system, InteractionPlugin, InteractionSystem},
            motion::MotionPlugin,
            scroll::{HeaderState, PageLayout, PageScroll, ScrollPlugin, ScrollTranslation},
        },
    };

    fn make_overlay_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.add_event::<MouseWheel>();
        app.add_plugins((
            MenuStatesPlugin,
            RngPlugin,
            ScrollPlugin,
            ColorsPlugin,
            MotionPlugin,
            InteractionPlugin,
            OverlayScenePlugin,
        ));
        app.add_systems(
            Update,
            (
                clickable_system::<NavAction>.in_set(InteractionSystem::Clickable),
                dispatch_nav_actions.after(InteractionSystem::Clickable),
            ),
        );
        app.insert_resource(PageLayout {
            anchors: enum_map! {
                SectionId::Home => 0.0,
                SectionId::Statesman => 800.0,
                SectionId::Artist => 1600.0,
                SectionId::Author => 2400.0,
                SectionId::Contact => 3200.0,
            },
            height: 3640.0,
        });
        app
    }

    fn menu_state(app: &App) -> MenuState {
        *app.world().resource::<State<MenuState>>().get()
    }

    fn overlay_roots(app: &mut App) -> Vec<Entity> {
        let mut query = app.world_mut().query_filtered::<Entity, With<OverlayRoot>>();
        query.iter(app.world()).collect()
    }

    fn set_menu(app: &mut App, state: MenuState) {
        app.world_mut()
            .resource_mut::<NextState<MenuState>>()
            .set(state);
    }

    #[test]
    fn opening_spawns_one_viewport_covering_overlay() {
        let mut app = make_overlay_test_app();
        app.update();

        set_menu(&mut app, MenuState::Open);
        app.update();

        let roots = overlay_roots(&mut app);
        assert_eq!(roots.len(), 1);

        let sprite = app.world().get::<Sprite>(roots[0]).unwrap();
        let extent = app.world().resource::<crate::systems::scroll::ViewportExtent>();
        assert_eq!(sprite.custom_size, Some(extent.size));
    }

    #[test]
    fn opening_twice_is_idempotent() {
        let mut app = make_overlay_test_app();
        app.update();

        set_menu(&mut app, MenuState::Open);
        app.update();
        let first = overlay_roots(&mut app);
        assert_eq!(first.len(), 1);

        set_menu(&mut app, MenuState::Open);
        app.update();
        let second = overlay_roots(&mut app);
        assert_eq!(second, first, "re-opening must not respawn the overlay");
        assert_eq!(menu_state(&app), MenuState::Open);
    }

    #[test]
    fn closing_while_closed_is_a_no_op() {
        let mut app = make_overlay_test_app();
        app.update();

        set_menu(&mut app, MenuState::Closed);
        app.update();

        assert_eq!(menu_state(&app), MenuState::Closed);
        assert!(overlay_roots(&mut app).is_empty());
    }

    #[test]
    fn overlay_cycle_leaves_header_state_untouched() {
        let mut app = make_overlay_test_app();
        app.update();

        app.world_mut().resource_mut::<PageScroll>().offset = 200.0;
        app.update();
        assert!(app.world().resource::<HeaderState>().compact);

        set_menu(&mut app, MenuState::Open);
        app.update();
        assert_eq!(overlay_roots(&mut app).len(), 1);

        set_menu(&mut app, MenuState::Closed);
        app.update();
        app.update();

        assert!(overlay_roots(&mut app).is_empty());
        assert!(app.world().resource::<HeaderState>().compact);
        assert!((app.world().resource::<PageScroll>().offset - 200.0).abs() < 1e-3);
    }

    #[test]
    fn selecting_any_nav_link_closes_the_overlay_and_scrolls() {
        for target in [
            SectionId::Home,
            SectionId::Statesman,
            SectionId::Artist,
            SectionId::Author,
        ] {
            let mut app = make_overlay_test_app();
            app.update();

            set_menu(&mut app, MenuState::Open);
            app.update();
            assert_eq!(menu_state(&app), MenuState::Open);

            let link = app
                .world_mut()
                .spawn(Clickable::new([NavAction::Navigate(target)]))
                .id();
            app.world_mut()
                .get_mut::<Clickable<NavAction>>(link)
                .unwrap()
                .triggered = true;

            app.update();
            app.update();

            assert_eq!(menu_state(&app), MenuState::Closed);
            assert!(overlay_roots(&mut app).is_empty());

            let mut tweens = app.world_mut().query::<&ScrollTranslation>();
            let targets: Vec<f32> =
                tweens.iter(app.world()).map(|tween| tween.target()).collect();
            let expected = app.world().resource::<PageLayout>().anchors[target]
                .min(app.world().resource::<PageScroll>().max);
            assert_eq!(targets, vec![expected]);
        }
    }
}
