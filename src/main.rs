use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use npc_minimap::input::MinimapInputPlugin;
use npc_minimap::minimap::MinimapPlugin;
use npc_minimap::render::MinimapRenderPlugin;
use npc_minimap::shared::*;

/// Map-space pixels the demo focus moves per second.
const FOCUS_SPEED: f32 = 240.0;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Minimap".into(),
                        resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                        present_mode: PresentMode::AutoVsync,
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .add_plugins(MinimapInputPlugin)
        .add_plugins(MinimapPlugin)
        .add_plugins(MinimapRenderPlugin)
        .add_systems(Startup, (setup_camera, seed_demo_world))
        .add_systems(Update, (move_focus, log_committed_position))
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// A small town: a few villagers, some farm buildings, the merchant in town.
fn seed_demo_world(mut snapshot: ResMut<WorldSnapshot>) {
    snapshot.focus = Vec2::new(600.0, 360.0);
    snapshot.farm_type = FarmType::Forest;
    snapshot.merchant_present = true;
    snapshot.story_building_unlocked = true;

    let villagers = [
        ("Margaret", Vec2::new(640.0, 380.0), false, false, false),
        ("Lily", Vec2::new(700.0, 420.0), false, true, false),
        ("Old Tom", Vec2::new(820.0, 600.0), true, false, false),
        ("Sam", Vec2::new(560.0, 340.0), false, false, true),
        ("Doc", Vec2::new(760.0, 300.0), true, false, false),
    ];
    for (layer, (name, map_position, is_hidden, is_birthday, has_quest)) in villagers.into_iter().enumerate() {
        snapshot.npcs.insert(
            name.into(),
            NpcMarker {
                map_position,
                has_sprite: true,
                is_hidden,
                is_birthday,
                has_quest,
                layer: layer as i32,
            },
        );
    }

    for (kind, x, y) in [("House", 240.0, 300.0), ("Coop", 200.0, 340.0), ("Barn", 300.0, 360.0), ("Silo", 330.0, 330.0)] {
        snapshot.buildings.push(FarmBuilding {
            kind: kind.into(),
            map_position: Vec2::new(x, y),
        });
    }
}

/// Arrow keys walk the camera focus across the map.
fn move_focus(time: Res<Time>, keys: Res<ButtonInput<KeyCode>>, mut snapshot: ResMut<WorldSnapshot>) {
    let mut axis = Vec2::ZERO;
    if keys.pressed(KeyCode::ArrowUp) {
        axis.y -= 1.0;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::ArrowLeft) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        axis.x += 1.0;
    }
    if axis == Vec2::ZERO {
        return;
    }
    let step = axis.normalize() * FOCUS_SPEED * time.delta_secs();
    snapshot.focus = (snapshot.focus + step).clamp(Vec2::ZERO, Vec2::new(1199.0, 719.0));
}

/// A real host would write the config to disk here.
fn log_committed_position(mut events: EventReader<MinimapConfigCommitted>) {
    for ev in events.read() {
        info!("[Demo] Minimap position committed at ({}, {})", ev.position.x, ev.position.y);
    }
}
