//! Marker compositing. Everything here is a pure function of the frame's
//! camera, the window, and the world snapshot.

use bevy::prelude::*;

use super::draw::{DrawCommand, DrawLayer, TextureRef};
use super::drag::MinimapWindow;
use super::geometry::CameraState;
use crate::data::MapCatalogue;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// SPRITES
// ═══════════════════════════════════════════════════════════════════════

/// Upgraded-house sprite, taken from the map bitmap itself.
const STORY_BUILDING_SPRITE: SpriteRect = SpriteRect::new(263, 181, 8, 8);
const MERCHANT_SPRITE: SpriteRect = SpriteRect::new(191, 1410, 22, 21);
const BIRTHDAY_ICON: SpriteRect = SpriteRect::new(147, 412, 10, 11);
const QUEST_ICON: SpriteRect = SpriteRect::new(403, 496, 5, 14);
const FARMER_PORTRAIT: SpriteRect = SpriteRect::new(0, 0, 16, 16);

/// Head crop taken from an NPC marker texture, offset vertically per NPC.
const NPC_CROP_SIZE: IVec2 = IVec2::new(16, 15);
const NPC_MARKER_SIZE: IVec2 = IVec2::new(30, 32);

const BIRTHDAY_ICON_OFFSET: Vec2 = Vec2::new(20.0, 0.0);
const QUEST_ICON_OFFSET: Vec2 = Vec2::new(22.0, -3.0);
/// Farmer portraits and the merchant cart are anchored near their middle.
const PORTRAIT_ANCHOR: Vec2 = Vec2::new(16.0, 15.0);
const MERCHANT_CULL_ANCHOR: Vec2 = Vec2::new(16.0, 16.0);

const BUILDING_SCALE: f32 = 3.0;
const MERCHANT_SCALE: f32 = 1.3;
const PORTRAIT_SCALE: f32 = 2.0;
const ICON_SCALE: f32 = 1.8;

const OVERLAY_DEPTH: f32 = 0.861;
const MARKER_DEPTH: f32 = 1.0;
const PORTRAIT_DEPTH: f32 = 0.000_11;

/// Tint for characters that are indoors or otherwise out of sight.
pub fn hidden_tint() -> Color {
    Color::srgba(0.41, 0.41, 0.41, 0.7)
}

// ═══════════════════════════════════════════════════════════════════════
// COMPOSITING
// ═══════════════════════════════════════════════════════════════════════

/// All marker layers for one frame, in draw order.
pub fn compose_markers(
    camera: &CameraState,
    window: &MinimapWindow,
    snapshot: &WorldSnapshot,
    catalogue: &MapCatalogue,
    config: &MinimapConfig,
) -> Vec<DrawCommand> {
    let mut commands = Vec::new();

    push_farm_overlay(&mut commands, camera, window, snapshot.farm_type, catalogue);

    if snapshot.story_building_unlocked {
        push_story_building(&mut commands, camera, catalogue);
    }

    if config.show_farm_buildings {
        push_farm_buildings(&mut commands, camera, &snapshot.buildings, catalogue);
    }

    if config.show_traveling_merchant && snapshot.merchant_present {
        push_traveling_merchant(&mut commands, camera, catalogue);
    }

    push_farmers(&mut commands, camera, snapshot);
    push_npcs(&mut commands, camera, snapshot, catalogue);

    commands
}

/// Paint the active farm layout over the base map, cropped to the window.
///
/// The overlay is placed like any marker, then clipped to whole texels that
/// lie inside the window so it can never spill past the frame.
fn push_farm_overlay(
    commands: &mut Vec<DrawCommand>,
    camera: &CameraState,
    window: &MinimapWindow,
    farm_type: FarmType,
    catalogue: &MapCatalogue,
) {
    let Some(index) = farm_type.overlay_index() else {
        return;
    };
    let layout = &catalogue.farm_overlay;
    let native_size = IVec2::new(layout.size.0, layout.size.1);
    let (variant_x, variant_y) = layout.variants[index];
    let map_origin = IVec2::new(layout.map_origin.0, layout.map_origin.1) * PIXEL_ZOOM;

    let origin = camera.to_screen(map_origin.as_vec2());
    let first = ceil_div(window.position - origin).max(IVec2::ZERO);
    let last = floor_div(window.position + window.size - origin).min(native_size);
    if first.x >= last.x || first.y >= last.y {
        return;
    }

    let source_min = IVec2::new(variant_x, variant_y) + first;
    commands.push(DrawCommand::scaled(
        DrawLayer::FarmOverlay,
        TextureRef::Map,
        origin + first * PIXEL_ZOOM,
        IRect::from_corners(source_min, source_min + (last - first)),
        PIXEL_ZOOM as f32,
        Color::WHITE,
        OVERLAY_DEPTH,
    ));
}

fn push_story_building(commands: &mut Vec<DrawCommand>, camera: &CameraState, catalogue: &MapCatalogue) {
    let Some(position) = catalogue.map_vector("Trailer") else {
        return;
    };
    if !camera.is_visible(position) {
        return;
    }
    commands.push(DrawCommand::scaled(
        DrawLayer::StoryBuilding,
        TextureRef::Map,
        camera.to_screen(position),
        STORY_BUILDING_SPRITE.to_irect(),
        PIXEL_ZOOM as f32,
        Color::WHITE,
        OVERLAY_DEPTH,
    ));
}

/// Buildings further up the map are drawn first.
fn push_farm_buildings(
    commands: &mut Vec<DrawCommand>,
    camera: &CameraState,
    buildings: &[FarmBuilding],
    catalogue: &MapCatalogue,
) {
    let mut sorted: Vec<&FarmBuilding> = buildings.iter().collect();
    sorted.sort_by(|a, b| a.map_position.y.total_cmp(&b.map_position.y));

    for building in sorted {
        let Some(rect) = catalogue.building_rect(&building.kind) else {
            continue;
        };
        let top_left = building.map_position - IVec2::new(rect.width / 2, rect.height / 2).as_vec2();
        if !camera.is_visible(top_left) {
            continue;
        }
        commands.push(DrawCommand::scaled(
            DrawLayer::FarmBuilding,
            TextureRef::BuildingMarkers,
            camera.to_screen(top_left),
            rect.to_irect(),
            BUILDING_SCALE,
            Color::WHITE,
            MARKER_DEPTH,
        ));
    }
}

fn push_traveling_merchant(commands: &mut Vec<DrawCommand>, camera: &CameraState, catalogue: &MapCatalogue) {
    let Some(position) = catalogue.map_vector("Merchant") else {
        return;
    };
    if !camera.is_visible(position - MERCHANT_CULL_ANCHOR) {
        return;
    }
    commands.push(DrawCommand::scaled(
        DrawLayer::TravelingMerchant,
        TextureRef::Cursors,
        camera.to_screen(position - PORTRAIT_ANCHOR),
        MERCHANT_SPRITE.to_irect(),
        MERCHANT_SCALE,
        Color::WHITE,
        MARKER_DEPTH,
    ));
}

/// Every known farmer in multiplayer, otherwise just the local one. Farmers
/// that recently changed location are held back until their position settles.
fn push_farmers(commands: &mut Vec<DrawCommand>, camera: &CameraState, snapshot: &WorldSnapshot) {
    let mut push_portrait = |id: PlayerId, position: Vec2| {
        let top_left = position - PORTRAIT_ANCHOR;
        if !camera.is_visible(top_left) {
            return;
        }
        commands.push(DrawCommand::scaled(
            DrawLayer::Farmer,
            TextureRef::FarmerPortrait(id),
            camera.to_screen(top_left),
            FARMER_PORTRAIT.to_irect(),
            PORTRAIT_SCALE,
            Color::WHITE,
            PORTRAIT_DEPTH,
        ));
    };

    if snapshot.multiplayer {
        for (&id, farmer) in &snapshot.farmers {
            if farmer.settle_frames == 0 {
                push_portrait(id, farmer.map_position);
            }
        }
    } else {
        push_portrait(snapshot.local_player, snapshot.focus);
    }
}

fn push_npcs(
    commands: &mut Vec<DrawCommand>,
    camera: &CameraState,
    snapshot: &WorldSnapshot,
    catalogue: &MapCatalogue,
) {
    let mut sorted: Vec<(&String, &NpcMarker)> = snapshot.npcs.iter().collect();
    sorted.sort_by_key(|(_, marker)| marker.layer);

    for (name, marker) in sorted {
        if marker.map_position == Vec2::ZERO || !marker.has_sprite {
            continue;
        }
        let Some(crop_offset) = catalogue.crop_offset(name) else {
            continue;
        };
        if !camera.is_visible(marker.map_position) {
            continue;
        }

        let tint = if marker.is_hidden { hidden_tint() } else { Color::WHITE };
        let position = camera.to_screen(marker.map_position);
        let crop_min = IVec2::new(0, crop_offset);
        commands.push(DrawCommand::stretched(
            DrawLayer::Npc,
            TextureRef::NpcMarker(name.clone()),
            IRect::from_corners(position, position + NPC_MARKER_SIZE),
            IRect::from_corners(crop_min, crop_min + NPC_CROP_SIZE),
            tint,
        ));

        if marker.is_birthday {
            commands.push(DrawCommand::scaled(
                DrawLayer::NpcIcon,
                TextureRef::Cursors,
                camera.to_screen(marker.map_position + BIRTHDAY_ICON_OFFSET),
                BIRTHDAY_ICON.to_irect(),
                ICON_SCALE,
                tint,
                0.0,
            ));
        }
        if marker.has_quest {
            commands.push(DrawCommand::scaled(
                DrawLayer::NpcIcon,
                TextureRef::Cursors,
                camera.to_screen(marker.map_position + QUEST_ICON_OFFSET),
                QUEST_ICON.to_irect(),
                ICON_SCALE,
                tint,
                0.0,
            ));
        }
    }
}

fn floor_div(v: IVec2) -> IVec2 {
    IVec2::new(v.x.div_euclid(PIXEL_ZOOM), v.y.div_euclid(PIXEL_ZOOM))
}

fn ceil_div(v: IVec2) -> IVec2 {
    floor_div(v + IVec2::splat(PIXEL_ZOOM - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimap::geometry::compute_camera;

    const MAP_BOUND: IVec2 = IVec2::new(1200, 720);

    fn window() -> MinimapWindow {
        MinimapWindow::new(IVec2::new(100, 60), IVec2::new(300, 180))
    }

    fn npc(position: Vec2, layer: i32) -> NpcMarker {
        NpcMarker {
            map_position: position,
            has_sprite: true,
            layer,
            ..default()
        }
    }

    fn compose(snapshot: &WorldSnapshot, config: &MinimapConfig) -> Vec<DrawCommand> {
        let window = window();
        let camera = compute_camera(snapshot.focus, &window, MAP_BOUND);
        compose_markers(&camera, &window, snapshot, &MapCatalogue::default(), config)
    }

    fn in_layer(commands: &[DrawCommand], layer: DrawLayer) -> Vec<&DrawCommand> {
        commands.iter().filter(|c| c.layer == layer).collect()
    }

    fn snapshot_at(focus: Vec2) -> WorldSnapshot {
        WorldSnapshot {
            focus,
            local_player: 7,
            ..default()
        }
    }

    #[test]
    fn test_npcs_draw_in_ascending_layer_order() {
        let mut snapshot = snapshot_at(Vec2::new(600.0, 360.0));
        // Map order is Lily, Sam; layers reverse it.
        snapshot.npcs.insert("Lily".into(), npc(Vec2::new(604.0, 364.0), 2));
        snapshot.npcs.insert("Sam".into(), npc(Vec2::new(604.0, 364.0), 1));

        let commands = compose(&snapshot, &MinimapConfig::default());
        let npcs = in_layer(&commands, DrawLayer::Npc);
        assert_eq!(npcs.len(), 2);
        assert_eq!(npcs[0].texture, TextureRef::NpcMarker("Sam".into()));
        assert_eq!(npcs[1].texture, TextureRef::NpcMarker("Lily".into()));
        // Same pixels: the later (layer 2) command covers the earlier one.
        assert_eq!(npcs[0].screen_rect(), npcs[1].screen_rect());
    }

    #[test]
    fn test_equal_layers_keep_name_order() {
        let mut snapshot = snapshot_at(Vec2::new(600.0, 360.0));
        snapshot.npcs.insert("Sam".into(), npc(Vec2::new(610.0, 360.0), 0));
        snapshot.npcs.insert("Doc".into(), npc(Vec2::new(590.0, 360.0), 0));

        let commands = compose(&snapshot, &MinimapConfig::default());
        let npcs = in_layer(&commands, DrawLayer::Npc);
        assert_eq!(npcs[0].texture, TextureRef::NpcMarker("Doc".into()));
        assert_eq!(npcs[1].texture, TextureRef::NpcMarker("Sam".into()));
    }

    #[test]
    fn test_npcs_without_data_are_skipped() {
        let mut snapshot = snapshot_at(Vec2::new(600.0, 360.0));
        snapshot.npcs.insert("Lily".into(), npc(Vec2::ZERO, 0));
        snapshot.npcs.insert(
            "Sam".into(),
            NpcMarker {
                has_sprite: false,
                ..npc(Vec2::new(600.0, 360.0), 0)
            },
        );
        // No crop offset in the catalogue.
        snapshot.npcs.insert("Stranger".into(), npc(Vec2::new(600.0, 360.0), 0));
        // Far outside the minimap.
        snapshot.npcs.insert("Doc".into(), npc(Vec2::new(1100.0, 100.0), 0));
        snapshot.npcs.insert("Nora".into(), npc(Vec2::new(620.0, 350.0), 0));

        let commands = compose(&snapshot, &MinimapConfig::default());
        let npcs = in_layer(&commands, DrawLayer::Npc);
        assert_eq!(npcs.len(), 1);
        assert_eq!(npcs[0].texture, TextureRef::NpcMarker("Nora".into()));
    }

    #[test]
    fn test_npc_marker_uses_crop_offset_and_grid_position() {
        let mut snapshot = snapshot_at(Vec2::new(600.0, 360.0));
        snapshot.npcs.insert("Sam".into(), npc(Vec2::new(621.0, 343.0), 0));

        let commands = compose(&snapshot, &MinimapConfig::default());
        let marker = in_layer(&commands, DrawLayer::Npc)[0];
        let crop = MapCatalogue::default().crop_offset("Sam").unwrap_or_default();
        assert_eq!(marker.source, IRect::new(0, crop, 16, crop + 15));
        assert_eq!(marker.position() % PIXEL_ZOOM, IVec2::ZERO);
        assert_eq!(marker.screen_rect().size(), NPC_MARKER_SIZE.as_vec2());
        assert_eq!(marker.tint, Color::WHITE);
    }

    #[test]
    fn test_hidden_npc_is_dimmed_with_matching_icons() {
        let mut snapshot = snapshot_at(Vec2::new(600.0, 360.0));
        snapshot.npcs.insert(
            "Lily".into(),
            NpcMarker {
                is_hidden: true,
                is_birthday: true,
                has_quest: true,
                ..npc(Vec2::new(600.0, 360.0), 0)
            },
        );

        let commands = compose(&snapshot, &MinimapConfig::default());
        let marker = in_layer(&commands, DrawLayer::Npc)[0];
        let icons = in_layer(&commands, DrawLayer::NpcIcon);
        assert_eq!(marker.tint, hidden_tint());
        assert_eq!(icons.len(), 2);
        assert!(icons.iter().all(|icon| icon.tint == hidden_tint()));
        assert_eq!(icons[0].source, BIRTHDAY_ICON.to_irect());
        assert_eq!(icons[0].position(), marker.position() + IVec2::new(20, 0));
        assert_eq!(icons[1].source, QUEST_ICON.to_irect());
        assert_eq!(icons[1].position(), marker.position() + IVec2::new(24, -4));
    }

    #[test]
    fn test_icons_follow_their_marker() {
        let mut snapshot = snapshot_at(Vec2::new(600.0, 360.0));
        snapshot.npcs.insert(
            "Lily".into(),
            NpcMarker {
                is_birthday: true,
                ..npc(Vec2::new(600.0, 360.0), 5)
            },
        );
        snapshot.npcs.insert("Sam".into(), npc(Vec2::new(600.0, 360.0), 1));

        let commands = compose(&snapshot, &MinimapConfig::default());
        let layers: Vec<DrawLayer> = commands
            .iter()
            .filter(|c| matches!(c.layer, DrawLayer::Npc | DrawLayer::NpcIcon))
            .map(|c| c.layer)
            .collect();
        assert_eq!(layers, vec![DrawLayer::Npc, DrawLayer::Npc, DrawLayer::NpcIcon]);
    }

    #[test]
    fn test_buildings_sorted_by_map_y() {
        let mut snapshot = snapshot_at(Vec2::new(600.0, 360.0));
        snapshot.buildings = vec![
            FarmBuilding { kind: "Barn".into(), map_position: Vec2::new(600.0, 400.0) },
            FarmBuilding { kind: "Coop".into(), map_position: Vec2::new(580.0, 330.0) },
            FarmBuilding { kind: "Spaceship".into(), map_position: Vec2::new(600.0, 300.0) },
            FarmBuilding { kind: "Silo".into(), map_position: Vec2::new(620.0, 360.0) },
        ];

        let commands = compose(&snapshot, &MinimapConfig::default());
        let buildings = in_layer(&commands, DrawLayer::FarmBuilding);
        let catalogue = MapCatalogue::default();
        let sources: Vec<IRect> = buildings.iter().map(|b| b.source).collect();
        assert_eq!(
            sources,
            vec![
                catalogue.building_rect("Coop").unwrap_or_default().to_irect(),
                catalogue.building_rect("Silo").unwrap_or_default().to_irect(),
                catalogue.building_rect("Barn").unwrap_or_default().to_irect(),
            ]
        );
        assert!(buildings.iter().all(|b| b.texture == TextureRef::BuildingMarkers));
    }

    #[test]
    fn test_buildings_hidden_when_disabled() {
        let mut snapshot = snapshot_at(Vec2::new(600.0, 360.0));
        snapshot.buildings = vec![FarmBuilding {
            kind: "Barn".into(),
            map_position: Vec2::new(600.0, 360.0),
        }];
        let config = MinimapConfig {
            show_farm_buildings: false,
            ..default()
        };
        assert!(in_layer(&compose(&snapshot, &config), DrawLayer::FarmBuilding).is_empty());
    }

    #[test]
    fn test_merchant_needs_toggle_and_presence() {
        let catalogue = MapCatalogue::default();
        let merchant = catalogue.map_vector("Merchant").unwrap_or_default();
        let mut snapshot = snapshot_at(merchant);

        assert!(in_layer(&compose(&snapshot, &MinimapConfig::default()), DrawLayer::TravelingMerchant).is_empty());

        snapshot.merchant_present = true;
        assert_eq!(in_layer(&compose(&snapshot, &MinimapConfig::default()), DrawLayer::TravelingMerchant).len(), 1);

        let config = MinimapConfig {
            show_traveling_merchant: false,
            ..default()
        };
        assert!(in_layer(&compose(&snapshot, &config), DrawLayer::TravelingMerchant).is_empty());
    }

    #[test]
    fn test_story_building_only_when_unlocked() {
        let catalogue = MapCatalogue::default();
        let trailer = catalogue.map_vector("Trailer").unwrap_or_default();
        let mut snapshot = snapshot_at(trailer);
        assert!(in_layer(&compose(&snapshot, &MinimapConfig::default()), DrawLayer::StoryBuilding).is_empty());

        snapshot.story_building_unlocked = true;
        let commands = compose(&snapshot, &MinimapConfig::default());
        let story = in_layer(&commands, DrawLayer::StoryBuilding);
        assert_eq!(story.len(), 1);
        assert_eq!(story[0].texture, TextureRef::Map);
        assert_eq!(story[0].source, STORY_BUILDING_SPRITE.to_irect());
    }

    #[test]
    fn test_single_player_draws_local_farmer() {
        let snapshot = snapshot_at(Vec2::new(600.0, 360.0));
        let commands = compose(&snapshot, &MinimapConfig::default());
        let farmers = in_layer(&commands, DrawLayer::Farmer);
        assert_eq!(farmers.len(), 1);
        assert_eq!(farmers[0].texture, TextureRef::FarmerPortrait(7));
    }

    #[test]
    fn test_multiplayer_skips_settling_farmers() {
        let mut snapshot = snapshot_at(Vec2::new(600.0, 360.0));
        snapshot.multiplayer = true;
        snapshot.farmers.insert(1, FarmerMarker { map_position: Vec2::new(600.0, 360.0), settle_frames: 0 });
        snapshot.farmers.insert(2, FarmerMarker { map_position: Vec2::new(620.0, 370.0), settle_frames: 3 });
        snapshot.farmers.insert(3, FarmerMarker { map_position: Vec2::new(580.0, 350.0), settle_frames: 0 });
        snapshot.farmers.insert(4, FarmerMarker { map_position: Vec2::new(10.0, 700.0), settle_frames: 0 });

        let commands = compose(&snapshot, &MinimapConfig::default());
        let textures: Vec<&TextureRef> = commands
            .iter()
            .filter(|c| c.layer == DrawLayer::Farmer)
            .map(|c| &c.texture)
            .collect();
        assert_eq!(textures, vec![&TextureRef::FarmerPortrait(1), &TextureRef::FarmerPortrait(3)]);
    }

    #[test]
    fn test_standard_farm_has_no_overlay() {
        let snapshot = snapshot_at(Vec2::new(200.0, 300.0));
        assert!(in_layer(&compose(&snapshot, &MinimapConfig::default()), DrawLayer::FarmOverlay).is_empty());
    }

    #[test]
    fn test_farm_overlay_stays_inside_window() {
        let window_sizes = [IVec2::new(300, 180), IVec2::new(80, 60), IVec2::new(40, 40), IVec2::new(600, 400)];
        let farm_types = [FarmType::Riverland, FarmType::Forest, FarmType::Hilltop, FarmType::Wilderness];
        let catalogue = MapCatalogue::default();

        for size in window_sizes {
            let window = MinimapWindow::new(IVec2::new(101, 57), size);
            for focus_x in (0..1200).step_by(37) {
                for focus_y in (0..720).step_by(29) {
                    let camera = compute_camera(Vec2::new(focus_x as f32, focus_y as f32), &window, MAP_BOUND);
                    for farm_type in farm_types {
                        let mut commands = Vec::new();
                        push_farm_overlay(&mut commands, &camera, &window, farm_type, &catalogue);
                        for command in &commands {
                            let rect = command.screen_rect();
                            assert!(rect.min.x >= window.position.x as f32 && rect.min.y >= window.position.y as f32);
                            let max = (window.position + window.size).as_vec2();
                            assert!(rect.max.x <= max.x && rect.max.y <= max.y, "{:?} spills past {:?}", rect, max);
                            assert!(command.source.width() <= 131 && command.source.height() <= 61);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_farm_variants_share_geometry() {
        let window = window();
        let camera = compute_camera(Vec2::new(200.0, 300.0), &window, MAP_BOUND);
        let catalogue = MapCatalogue::default();
        let mut overlays = Vec::new();
        for farm_type in [FarmType::Riverland, FarmType::Forest, FarmType::Hilltop, FarmType::Wilderness] {
            push_farm_overlay(&mut overlays, &camera, &window, farm_type, &catalogue);
        }
        assert_eq!(overlays.len(), 4);
        for (overlay, (vx, vy)) in overlays.iter().zip(catalogue.farm_overlay.variants) {
            assert_eq!(overlay.position(), overlays[0].position());
            assert_eq!(overlay.source.size(), overlays[0].source.size());
            assert_eq!(overlay.source.min - IVec2::new(vx, vy), overlays[0].source.min - IVec2::new(0, 180));
        }
    }

    #[test]
    fn test_farm_overlay_fully_visible_uses_native_size() {
        let window = MinimapWindow::new(IVec2::new(100, 60), IVec2::new(800, 600));
        let camera = compute_camera(Vec2::ZERO, &window, MAP_BOUND);
        let mut commands = Vec::new();
        push_farm_overlay(&mut commands, &camera, &window, FarmType::Forest, &MapCatalogue::default());
        assert_eq!(commands[0].source, IRect::new(131, 180, 262, 241));
        assert_eq!(commands[0].position(), IVec2::new(100, 60 + 172));
    }

    #[test]
    fn test_layers_are_emitted_in_draw_order() {
        let catalogue = MapCatalogue::default();
        let mut snapshot = snapshot_at(Vec2::new(300.0, 300.0));
        snapshot.farm_type = FarmType::Hilltop;
        snapshot.story_building_unlocked = true;
        snapshot.merchant_present = true;
        snapshot.npcs.insert("Lily".into(), npc(Vec2::new(300.0, 300.0), 0));
        snapshot.buildings = vec![FarmBuilding { kind: "Coop".into(), map_position: Vec2::new(300.0, 320.0) }];

        let window = MinimapWindow::new(IVec2::new(12, 12), IVec2::new(1200, 720));
        let camera = compute_camera(snapshot.focus, &window, MAP_BOUND);
        let commands = compose_markers(&camera, &window, &snapshot, &catalogue, &MinimapConfig::default());
        let layers: Vec<DrawLayer> = commands.iter().map(|c| c.layer).collect();
        assert_eq!(
            layers,
            vec![
                DrawLayer::FarmOverlay,
                DrawLayer::StoryBuilding,
                DrawLayer::FarmBuilding,
                DrawLayer::TravelingMerchant,
                DrawLayer::Farmer,
                DrawLayer::Npc,
            ]
        );
    }
}
