use bevy::input::InputSystem;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::shared::*;

pub struct MinimapInputPlugin;

impl Plugin for MinimapInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MinimapInput>()
            .add_systems(PreUpdate, read_minimap_input.after(InputSystem));
    }
}

/// The single point where hardware input becomes minimap input.
fn read_minimap_input(
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    config: Res<MinimapConfig>,
    mut input: ResMut<MinimapInput>,
) {
    if let Ok(window) = windows.get_single() {
        input.viewport = IVec2::new(window.width() as i32, window.height() as i32);
        // Keep the last known cursor when it leaves the window so an active
        // drag does not snap to the corner.
        if let Some(cursor) = window.cursor_position() {
            input.cursor = cursor.as_ivec2();
        }
    }

    input.pointer_pressed = mouse.just_pressed(MouseButton::Left);
    input.pointer_released = mouse.just_released(MouseButton::Left);
    input.drag_key_held = keys.get_pressed().any(|key| is_drag_key(key, &config.drag_key));
}

/// Config names keys by their `Debug` spelling, e.g. `"AltLeft"`.
pub fn is_drag_key(key: &KeyCode, name: &str) -> bool {
    format!("{:?}", key) == name
}
