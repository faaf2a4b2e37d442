//! Reference backend: draws the minimap's [`DrawList`] with Bevy sprites.
//!
//! Screen-space commands are mapped onto a default `Camera2d` (origin at the
//! window center, y up). Sprites are rebuilt every frame; list order becomes
//! z order.

use bevy::prelude::*;
use bevy::sprite::Anchor;
use bevy::window::PrimaryWindow;
use std::collections::HashMap;

use crate::minimap::{DrawList, MinimapComposed, TextureRef};

/// Base z for minimap sprites, above the world.
const MINIMAP_Z: f32 = 900.0;
const Z_STEP: f32 = 0.01;

pub struct MinimapRenderPlugin;

impl Plugin for MinimapRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_minimap_textures)
            .add_systems(Update, sync_minimap_sprites.after(MinimapComposed));
    }
}

/// Image handles for every [`TextureRef`]. NPC markers load on first use.
#[derive(Resource)]
pub struct MinimapTextures {
    pub map: Handle<Image>,
    pub building_markers: Handle<Image>,
    pub cursors: Handle<Image>,
    pub menu: Handle<Image>,
    pub farmer_portrait: Handle<Image>,
    pub npc_markers: HashMap<String, Handle<Image>>,
}

impl MinimapTextures {
    fn handle(&mut self, texture: &TextureRef, asset_server: &AssetServer) -> Handle<Image> {
        match texture {
            TextureRef::Map => self.map.clone(),
            TextureRef::BuildingMarkers => self.building_markers.clone(),
            TextureRef::Cursors => self.cursors.clone(),
            TextureRef::Menu => self.menu.clone(),
            TextureRef::FarmerPortrait(_) => self.farmer_portrait.clone(),
            TextureRef::NpcMarker(name) => self
                .npc_markers
                .entry(name.clone())
                .or_insert_with(|| asset_server.load(format!("markers/{}.png", name)))
                .clone(),
        }
    }
}

/// Marker for sprites spawned from the draw list.
#[derive(Component)]
pub struct MinimapSprite;

fn load_minimap_textures(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(MinimapTextures {
        map: asset_server.load("minimap/map.png"),
        building_markers: asset_server.load("minimap/buildings.png"),
        cursors: asset_server.load("minimap/cursors.png"),
        menu: asset_server.load("minimap/menu.png"),
        farmer_portrait: asset_server.load("minimap/farmer.png"),
        npc_markers: HashMap::new(),
    });
}

/// Screen pixels (origin top-left, y down) to 2D world units of a camera
/// centered on the window.
pub fn screen_to_world(point: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(point.x - viewport.x / 2.0, viewport.y / 2.0 - point.y)
}

fn sync_minimap_sprites(
    mut commands: Commands,
    draw_list: Res<DrawList>,
    asset_server: Res<AssetServer>,
    textures: Option<ResMut<MinimapTextures>>,
    existing: Query<Entity, With<MinimapSprite>>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let Some(mut textures) = textures else {
        return;
    };
    let Ok(window) = windows.get_single() else {
        return;
    };
    let viewport = Vec2::new(window.width(), window.height());

    for (index, command) in draw_list.commands.iter().enumerate() {
        let rect = command.screen_rect();
        let origin = screen_to_world(rect.min, viewport);
        commands.spawn((
            MinimapSprite,
            Sprite {
                image: textures.handle(&command.texture, &asset_server),
                rect: Some(command.source.as_rect()),
                color: command.tint,
                custom_size: Some(rect.size()),
                anchor: Anchor::TopLeft,
                ..default()
            },
            // Commands rotate clockwise on screen; y is flipped here.
            Transform::from_translation(origin.extend(MINIMAP_Z + index as f32 * Z_STEP))
                .with_rotation(Quat::from_rotation_z(-command.rotation)),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_world_flips_y_around_center() {
        let viewport = Vec2::new(1280.0, 720.0);
        assert_eq!(screen_to_world(Vec2::ZERO, viewport), Vec2::new(-640.0, 360.0));
        assert_eq!(screen_to_world(Vec2::new(640.0, 360.0), viewport), Vec2::ZERO);
        assert_eq!(screen_to_world(Vec2::new(1280.0, 720.0), viewport), Vec2::new(640.0, -360.0));
    }
}
