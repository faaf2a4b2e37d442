//! Data layer: the static map catalogue the minimap draws against.
//!
//! [`MapCatalogue`] is built from the hard-coded tables in the submodules and
//! injected as a resource. Hosts with a modded map can replace it wholesale
//! from a RON document; nothing in the catalogue changes during a session.

mod buildings;
mod locations;
mod npcs;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::shared::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapCatalogue>()
            .add_systems(Startup, log_catalogue);
    }
}

fn log_catalogue(catalogue: Res<MapCatalogue>) {
    info!(
        "[Minimap] Catalogue: map {}x{}, {} map vectors, {} building sprites, {} NPC crops",
        catalogue.map_size.0,
        catalogue.map_size.1,
        catalogue.map_vectors.len(),
        catalogue.building_rects.len(),
        catalogue.marker_crop_offsets.len(),
    );
}

// ═══════════════════════════════════════════════════════════════════════
// CATALOGUE
// ═══════════════════════════════════════════════════════════════════════

/// Largest bitmap side, in native texels, that stays representable in
/// map-space with room for window offsets.
pub const MAX_MAP_TEXELS: u32 = (i32::MAX / PIXEL_ZOOM / 4) as u32;

/// Where the alternative farm layouts live in the map bitmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmOverlayLayout {
    /// Top-left of the farm on the visible map, native texels.
    pub map_origin: (i32, i32),
    /// Size of one farm region, native texels.
    pub size: (i32, i32),
    /// Source origin of each variant, indexed by [`FarmType::overlay_index`].
    pub variants: [(i32, i32); 4],
}

impl Default for FarmOverlayLayout {
    fn default() -> Self {
        Self {
            map_origin: (0, 43),
            size: (131, 61),
            // Variants are stacked in a 2x2 grid below the 180-row map.
            variants: [(0, 180), (131, 180), (0, 241), (131, 241)],
        }
    }
}

/// Static per-session lookup tables.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapCatalogue {
    /// Size of the whole map bitmap, native texels (includes the farm variants).
    pub map_size: (u32, u32),
    /// Rows of the bitmap that belong to the world map proper.
    pub visible_map_height: i32,
    pub farm_overlay: FarmOverlayLayout,
    /// Named map-space positions of fixed features.
    pub map_vectors: BTreeMap<String, (f32, f32)>,
    /// Building kind → region of the building marker sheet.
    pub building_rects: BTreeMap<String, SpriteRect>,
    /// Character name → y offset of the head crop in its marker texture.
    pub marker_crop_offsets: BTreeMap<String, i32>,
}

impl Default for MapCatalogue {
    fn default() -> Self {
        let mut catalogue = Self {
            map_size: (300, 302),
            visible_map_height: 180,
            farm_overlay: FarmOverlayLayout::default(),
            map_vectors: BTreeMap::new(),
            building_rects: BTreeMap::new(),
            marker_crop_offsets: BTreeMap::new(),
        };
        locations::populate_map_vectors(&mut catalogue.map_vectors);
        buildings::populate_building_rects(&mut catalogue.building_rects);
        npcs::populate_marker_crop_offsets(&mut catalogue.marker_crop_offsets);
        catalogue
    }
}

impl MapCatalogue {
    /// Parse a full or partial catalogue; missing fields keep the built-in tables.
    pub fn from_ron(source: &str) -> Result<Self, String> {
        let catalogue: Self = ron::from_str(source).map_err(|e| format!("Catalogue parse failed: {}", e))?;
        catalogue.validate()?;
        Ok(catalogue)
    }

    /// Reject extents the view transform cannot represent and farm regions
    /// that fall outside the bitmap.
    pub fn validate(&self) -> Result<(), String> {
        let (width, height) = self.map_size;
        if width == 0 || height == 0 || width > MAX_MAP_TEXELS || height > MAX_MAP_TEXELS {
            return Err(format!(
                "Catalogue map size {}x{} must be between 1 and {} texels per side",
                width, height, MAX_MAP_TEXELS
            ));
        }
        if self.visible_map_height <= 0 || self.visible_map_height as u32 > height {
            return Err(format!(
                "Catalogue visible height {} must be between 1 and the map height {}",
                self.visible_map_height, height
            ));
        }

        let layout = &self.farm_overlay;
        let (farm_width, farm_height) = layout.size;
        if farm_width <= 0 || farm_height <= 0 {
            return Err(format!("Catalogue farm size {}x{} must be positive", farm_width, farm_height));
        }
        let regions = std::iter::once((layout.map_origin, self.visible_map_height as i64))
            .chain(layout.variants.iter().map(|&origin| (origin, height as i64)));
        for ((x, y), max_y) in regions {
            let inside = x >= 0
                && y >= 0
                && x as i64 + farm_width as i64 <= width as i64
                && y as i64 + farm_height as i64 <= max_y;
            if !inside {
                return Err(format!(
                    "Catalogue farm region at ({}, {}) sized {}x{} lies outside the {}x{} map",
                    x, y, farm_width, farm_height, width, max_y
                ));
            }
        }
        Ok(())
    }

    pub fn from_ron_or_default(source: &str) -> Self {
        match Self::from_ron(source) {
            Ok(catalogue) => catalogue,
            Err(err) => {
                warn!("[Minimap] {}. Falling back to built-in catalogue.", err);
                Self::default()
            }
        }
    }

    /// Extent of the visible map in map-space pixels. The bitmap's extra rows
    /// (farm variants) are excluded vertically.
    /// Out-of-range tables saturate rather than overflow.
    pub fn map_bound(&self) -> IVec2 {
        let width = self.map_size.0.min(MAX_MAP_TEXELS) as i32;
        let height = self.visible_map_height.clamp(0, MAX_MAP_TEXELS as i32);
        IVec2::new(width, height) * PIXEL_ZOOM
    }

    pub fn map_vector(&self, name: &str) -> Option<Vec2> {
        self.map_vectors.get(name).map(|&(x, y)| Vec2::new(x, y))
    }

    pub fn building_rect(&self, kind: &str) -> Option<SpriteRect> {
        self.building_rects.get(kind).copied()
    }

    pub fn crop_offset(&self, name: &str) -> Option<i32> {
        self.marker_crop_offsets.get(name).copied()
    }
}
