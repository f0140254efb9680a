pub mod career;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod hero;
pub mod overlay;
pub mod showcase;

use bevy::prelude::*;
use enum_map::EnumMap;

use crate::{
    data::{
        site::{SectionId, SITE},
        states::MenuState,
    },
    systems::{
        interaction::{clickable_system, Clickable, InteractionSystem},
        scroll::{PageLayout, PageScroll, ScrollRequest, ViewportExtent},
    },
};

/// Design width of the content strip; the window opens at this size.
pub const PAGE_WIDTH: f32 = 1280.0;
pub const SECTION_EXTENT: f32 = 800.0;
pub const FOOTER_EXTENT: f32 = 440.0;

const SECTION_ORDER: [SectionId; 5] = [
    SectionId::Home,
    SectionId::Statesman,
    SectionId::Artist,
    SectionId::Author,
    SectionId::Contact,
];

/// Everything a nav control can do. Dispatch interprets these; spawn sites
/// only declare them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    OpenOverlay,
    CloseOverlay,
    Navigate(SectionId),
    /// Index into the site's social links.
    External(usize),
}

/// Root of the scrolling content strip. Its translation follows
/// `PageScroll`; sections hang off it at fixed page offsets.
#[derive(Component)]
#[require(Transform, Visibility)]
pub struct PageRoot;

#[derive(Component)]
#[require(Transform, Visibility)]
pub struct Section {
    pub id: SectionId,
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((header::HeaderScenePlugin, overlay::OverlayScenePlugin))
            .add_systems(Startup, spawn_page)
            .add_systems(
                Update,
                clickable_system::<NavAction>.in_set(InteractionSystem::Clickable),
            )
            .add_systems(
                Update,
                (
                    dispatch_nav_actions.after(InteractionSystem::Clickable),
                    follow_page_scroll,
                ),
            );
    }
}

fn section_extent(id: SectionId) -> f32 {
    match id {
        SectionId::Contact => FOOTER_EXTENT,
        _ => SECTION_EXTENT,
    }
}

/// Lays the active sections out as one vertical strip and records their
/// anchors. Which sections exist is configuration, not code: the inactive
/// ones are simply never spawned.
fn spawn_page(mut commands: Commands, asset_server: Res<AssetServer>) {
    let site = &*SITE;
    let page = commands.spawn(PageRoot).id();

    let mut anchors: EnumMap<SectionId, f32> = EnumMap::default();
    let mut cursor = 0.0;

    for id in SECTION_ORDER {
        if !site.is_active(id) {
            continue;
        }
        anchors[id] = cursor;

        match id {
            SectionId::Home => hero::spawn(&mut commands, page, site, &asset_server, cursor),
            SectionId::Statesman => career::spawn(&mut commands, page, site, cursor),
            SectionId::Artist => gallery::spawn(&mut commands, page, site, cursor),
            SectionId::Author => {
                showcase::spawn(&mut commands, page, site, &asset_server, cursor)
            }
            SectionId::Contact => footer::spawn(&mut commands, page, site, cursor),
        }

        cursor += section_extent(id);
    }

    commands.insert_resource(PageLayout {
        anchors,
        height: cursor,
    });
}

pub(crate) fn spawn_section_root(
    commands: &mut Commands,
    page: Entity,
    id: SectionId,
    top: f32,
) -> Entity {
    let extent = section_extent(id);
    commands
        .spawn((
            Section { id },
            Transform::from_xyz(0.0, -(top + extent / 2.0), 0.0),
            ChildOf(page),
        ))
        .id()
}

/// The content strip tracks the scroll signal; the top of the page sits at
/// the top of the viewport when the offset is zero.
fn follow_page_scroll(
    scroll: Res<PageScroll>,
    extent: Res<ViewportExtent>,
    mut query: Query<&mut Transform, With<PageRoot>>,
) {
    for mut transform in query.iter_mut() {
        transform.translation.y = extent.size.y / 2.0 + scroll.offset;
    }
}

/// Single interpreter for every nav control on the page. Selecting an
/// anchor always leaves the overlay closed; open and close are idempotent
/// because identity state transitions are no-ops.
pub(crate) fn dispatch_nav_actions(
    mut clickable_q: Query<&mut Clickable<NavAction>>,
    mut next_menu: ResMut<NextState<MenuState>>,
    mut scroll_requests: EventWriter<ScrollRequest>,
) {
    for mut clickable in clickable_q.iter_mut() {
        let Some(actions) = clickable.take_triggered() else {
            continue;
        };
        for action in actions {
            match action {
                NavAction::OpenOverlay => {
                    next_menu.set(MenuState::Open);
                }
                NavAction::CloseOverlay => {
                    next_menu.set(MenuState::Closed);
                }
                NavAction::Navigate(target) => {
                    next_menu.set(MenuState::Closed);
                    scroll_requests.write(ScrollRequest(target));
                }
                NavAction::External(index) => {
                    if let Some(link) = SITE.social.get(index) {
                        log::debug!("external link activated: {}", link.url);
                    }
                }
            }
        }
    }
}
