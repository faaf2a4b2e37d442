//! Shared components, resources, events, and constants for the minimap overlay.
//!
//! This is the type contract between the host game and the overlay. The host
//! fills [`WorldSnapshot`], [`MinimapInput`] and [`MinimapConfig`]; the overlay
//! answers with a [`DrawList`](crate::minimap::DrawList) and
//! [`MinimapConfigCommitted`] events.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

/// Integer scale between native map texels and map-space / screen pixels.
pub const PIXEL_ZOOM: i32 = 4;
/// Size of one world tile in screen pixels (16 texels × `PIXEL_ZOOM`).
pub const TILE_SIZE: i32 = 64;
/// Thickness of the frame drawn around the minimap, in screen pixels.
pub const BORDER_WIDTH: i32 = 12;
/// Markers closer than this to the minimap edge are culled.
pub const VISIBLE_MARGIN: i32 = TILE_SIZE / 4 + 2;

pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

/// Frames of marker suppression after a drag is committed.
pub const DEFAULT_DRAG_SETTLE_FRAMES: u32 = 30;

/// Identity of a farmer in a (possibly multiplayer) session.
pub type PlayerId = u64;

// ═══════════════════════════════════════════════════════════════════════
// SPRITE REGIONS
// ═══════════════════════════════════════════════════════════════════════

/// Source rectangle into a sprite sheet, in native texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SpriteRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl SpriteRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn to_irect(self) -> IRect {
        IRect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FARM TYPE
// ═══════════════════════════════════════════════════════════════════════

/// Layout of the player's farm. Every layout except `Standard` is painted
/// over the base map from a variant region stacked below the visible map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FarmType {
    #[default]
    Standard,
    Riverland,
    Forest,
    Hilltop,
    Wilderness,
}

impl FarmType {
    /// Index into the catalogue's overlay variants, `None` for the base layout.
    pub fn overlay_index(self) -> Option<usize> {
        match self {
            FarmType::Standard => None,
            FarmType::Riverland => Some(0),
            FarmType::Forest => Some(1),
            FarmType::Hilltop => Some(2),
            FarmType::Wilderness => Some(3),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// CONFIGURATION
// ═══════════════════════════════════════════════════════════════════════

/// User-facing minimap settings. Owned by the host, which persists it; the
/// overlay only writes the position back after a committed drag.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimapConfig {
    pub minimap_x: i32,
    pub minimap_y: i32,
    /// Logical width, before `PIXEL_ZOOM`.
    pub minimap_width: i32,
    /// Logical height, before `PIXEL_ZOOM`.
    pub minimap_height: i32,
    /// Debug name of the key that must be held to drag (e.g. `"AltLeft"`).
    pub drag_key: String,
    pub show_farm_buildings: bool,
    pub show_traveling_merchant: bool,
    pub drag_settle_frames: u32,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self {
            minimap_x: 12,
            minimap_y: 12,
            minimap_width: 75,
            minimap_height: 45,
            drag_key: String::from("AltLeft"),
            show_farm_buildings: true,
            show_traveling_merchant: true,
            drag_settle_frames: DEFAULT_DRAG_SETTLE_FRAMES,
        }
    }
}

impl MinimapConfig {
    pub fn position(&self) -> IVec2 {
        IVec2::new(self.minimap_x, self.minimap_y)
    }

    /// Window size in screen pixels.
    pub fn screen_size(&self) -> IVec2 {
        IVec2::new(self.minimap_width, self.minimap_height) * PIXEL_ZOOM
    }
}

// ═══════════════════════════════════════════════════════════════════════
// WORLD SNAPSHOT: read-only per-frame input
// ═══════════════════════════════════════════════════════════════════════

/// Current state of one tracked character.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NpcMarker {
    /// Map-space position; `Vec2::ZERO` means "unknown".
    pub map_position: Vec2,
    /// Whether the host has a marker texture for this character.
    pub has_sprite: bool,
    /// Indoors or otherwise not directly visible; drawn dimmed.
    pub is_hidden: bool,
    pub is_birthday: bool,
    pub has_quest: bool,
    /// Draw priority, ascending.
    pub layer: i32,
}

/// Last reported position of a farmer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FarmerMarker {
    pub map_position: Vec2,
    /// Frames left before this farmer's position is trusted again after a
    /// location change.
    pub settle_frames: u32,
}

/// A constructed farm building.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmBuilding {
    pub kind: String,
    pub map_position: Vec2,
}

/// Everything the compositor reads from the world for one frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct WorldSnapshot {
    /// Local player's map-space position; the camera follows it.
    pub focus: Vec2,
    pub local_player: PlayerId,
    pub multiplayer: bool,
    pub farm_type: FarmType,
    /// The trailer has been upgraded into a house.
    pub story_building_unlocked: bool,
    pub merchant_present: bool,
    pub npcs: BTreeMap<String, NpcMarker>,
    pub farmers: BTreeMap<PlayerId, FarmerMarker>,
    pub buildings: Vec<FarmBuilding>,
}

// ═══════════════════════════════════════════════════════════════════════
// INPUT
// ═══════════════════════════════════════════════════════════════════════

/// Pointer and keyboard state relevant to the minimap, in screen pixels
/// (origin top-left, y down). Written once per frame by the input layer.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MinimapInput {
    pub cursor: IVec2,
    pub pointer_pressed: bool,
    pub pointer_released: bool,
    pub drag_key_held: bool,
    pub viewport: IVec2,
}

impl Default for MinimapInput {
    fn default() -> Self {
        Self {
            cursor: IVec2::new(-1, -1),
            pointer_pressed: false,
            pointer_released: false,
            drag_key_held: false,
            viewport: IVec2::new(SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS
// ═══════════════════════════════════════════════════════════════════════

/// Sent when a drag ends inside the minimap and the new position has been
/// written into [`MinimapConfig`]. The host persists the config on receipt.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct MinimapConfigCommitted {
    pub position: IVec2,
}
