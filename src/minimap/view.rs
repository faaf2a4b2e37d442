use bevy::prelude::*;

use super::border::border_commands;
use super::compose::compose_markers;
use super::drag::MinimapWindow;
use super::draw::{DrawCommand, DrawLayer, DrawList, TextureRef};
use super::geometry::{compute_camera, CameraState};
use crate::data::MapCatalogue;
use crate::shared::*;

/// Map opacity while the pointer hovers the minimap.
const HOVER_ALPHA: f32 = 0.5;
const MAP_DEPTH: f32 = 0.86;

/// The minimap overlay: window geometry, drag state, this frame's camera,
/// and the settle counter that holds markers back after a move.
#[derive(Resource, Debug, Clone)]
pub struct MinimapView {
    window: MinimapWindow,
    camera: CameraState,
    map_bound: IVec2,
    settle_frames: u32,
    /// Position and size from a config change that arrived mid-drag.
    pending_config: Option<(IVec2, IVec2)>,
}

impl FromWorld for MinimapView {
    fn from_world(world: &mut World) -> Self {
        let config = world.get_resource::<MinimapConfig>().cloned().unwrap_or_default();
        let catalogue = world.get_resource::<MapCatalogue>().cloned().unwrap_or_default();
        Self::new(&config, &catalogue)
    }
}

impl MinimapView {
    pub fn new(config: &MinimapConfig, catalogue: &MapCatalogue) -> Self {
        let window = MinimapWindow::from_config(config);
        let map_bound = catalogue.map_bound();
        Self {
            camera: compute_camera(Vec2::ZERO, &window, map_bound),
            window,
            map_bound,
            settle_frames: 0,
            pending_config: None,
        }
    }

    pub fn window(&self) -> &MinimapWindow {
        &self.window
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn settle_frames(&self) -> u32 {
        self.settle_frames
    }

    /// Re-read position and size. Deferred mid-drag so the window does not
    /// jump back under the pointer; the release applies it.
    pub fn apply_config(&mut self, config: &MinimapConfig) {
        if self.window.is_dragging() {
            self.pending_config = Some((config.position(), config.screen_size()));
            return;
        }
        self.window.position = config.position();
        self.window.size = config.screen_size();
    }

    pub fn set_map_bounds(&mut self, catalogue: &MapCatalogue) {
        self.map_bound = catalogue.map_bound();
    }

    pub fn handle_pointer_down(&mut self, cursor: IVec2) -> bool {
        self.window.begin_drag(cursor)
    }

    /// Returns the position to persist when the drag is committed, and arms
    /// the settle delay. A deferred config change always keeps its size; its
    /// position only wins when the drag is not committed.
    pub fn handle_pointer_release(&mut self, cursor: IVec2, settle_frames: u32) -> Option<IVec2> {
        let committed = self.window.end_drag(cursor);
        if let Some((position, size)) = self.pending_config.take() {
            self.window.size = size;
            if committed.is_none() {
                self.window.position = position;
            }
        }
        let committed = committed?;
        self.settle_frames = settle_frames;
        Some(committed)
    }

    pub fn drag_to(&mut self, cursor: IVec2, viewport: IVec2) {
        self.window.drag_to(cursor, viewport);
    }

    pub fn update_camera(&mut self, focus: Vec2) {
        self.camera = compute_camera(focus, &self.window, self.map_bound);
    }

    /// Build this frame's draw list. Markers are left out while dragging,
    /// while settling (one frame consumed per call), and while hovered.
    pub fn draw(
        &mut self,
        input: &MinimapInput,
        snapshot: &WorldSnapshot,
        catalogue: &MapCatalogue,
        config: &MinimapConfig,
    ) -> DrawList {
        let hovering = self.window.contains(input.cursor);
        let map_alpha = if hovering { HOVER_ALPHA } else { 1.0 };

        let mut commands = vec![DrawCommand::scaled(
            DrawLayer::MapBase,
            TextureRef::Map,
            self.window.position,
            self.camera.map_source_rect(self.map_bound),
            PIXEL_ZOOM as f32,
            Color::srgba(1.0, 1.0, 1.0, map_alpha),
            MAP_DEPTH,
        )];

        if !self.window.is_dragging() {
            if self.settle_frames > 0 {
                self.settle_frames -= 1;
            } else if !hovering {
                commands.extend(compose_markers(&self.camera, &self.window, snapshot, catalogue, config));
            }
        }

        commands.extend(border_commands(&self.window, map_alpha));

        DrawList {
            commands,
            grab_cursor: hovering && input.drag_key_held,
        }
    }
}
