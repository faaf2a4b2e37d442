//! Minimap overlay. A draggable window showing a cropped, scrolled part of
//! the world map with player, NPC, building and feature markers on top.
//!
//! The plugin runs one chain per frame: pick up config changes, apply drag
//! input, recompute the camera, then composite into [`DrawList`]. Nothing
//! here touches the GPU; a backend (see `crate::render`) draws the list.

pub mod border;
pub mod compose;
pub mod drag;
pub mod draw;
pub mod geometry;
pub mod view;

use bevy::prelude::*;

use crate::data::{DataPlugin, MapCatalogue};
use crate::shared::*;

pub use draw::{Destination, DrawCommand, DrawLayer, DrawList, TextureRef};
pub use view::MinimapView;

/// Ordering label for systems that consume the draw list.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MinimapComposed;

pub struct MinimapPlugin;

impl Plugin for MinimapPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<DataPlugin>() {
            app.add_plugins(DataPlugin);
        }

        app.init_resource::<MinimapConfig>()
            .init_resource::<WorldSnapshot>()
            .init_resource::<MinimapInput>()
            .init_resource::<DrawList>()
            .init_resource::<MinimapView>()
            .add_event::<MinimapConfigCommitted>()
            .add_systems(
                Update,
                (
                    apply_config_changes,
                    handle_minimap_drag,
                    update_minimap_camera,
                    compose_minimap,
                )
                    .chain()
                    .in_set(MinimapComposed),
            );
    }
}

/// Pick up resized windows or a swapped catalogue.
pub fn apply_config_changes(
    config: Res<MinimapConfig>,
    catalogue: Res<MapCatalogue>,
    mut view: ResMut<MinimapView>,
) {
    if config.is_changed() {
        view.apply_config(&config);
    }
    if catalogue.is_changed() {
        view.set_map_bounds(&catalogue);
    }
}

/// Drag state machine. A committed drag writes the position back into the
/// config and tells the host to persist it.
pub fn handle_minimap_drag(
    input: Res<MinimapInput>,
    mut view: ResMut<MinimapView>,
    mut config: ResMut<MinimapConfig>,
    mut committed: EventWriter<MinimapConfigCommitted>,
) {
    if input.pointer_pressed && input.drag_key_held {
        view.handle_pointer_down(input.cursor);
    }

    if input.pointer_released {
        if let Some(position) = view.handle_pointer_release(input.cursor, config.drag_settle_frames) {
            config.minimap_x = position.x;
            config.minimap_y = position.y;
            committed.send(MinimapConfigCommitted { position });
            info!("[Minimap] Moved to ({}, {})", position.x, position.y);
        }
    }

    view.drag_to(input.cursor, input.viewport);
}

pub fn update_minimap_camera(snapshot: Res<WorldSnapshot>, mut view: ResMut<MinimapView>) {
    view.update_camera(snapshot.focus);
}

pub fn compose_minimap(
    input: Res<MinimapInput>,
    snapshot: Res<WorldSnapshot>,
    catalogue: Res<MapCatalogue>,
    config: Res<MinimapConfig>,
    mut view: ResMut<MinimapView>,
    mut draw_list: ResMut<DrawList>,
) {
    *draw_list = view.draw(&input, &snapshot, &catalogue, &config);
}
