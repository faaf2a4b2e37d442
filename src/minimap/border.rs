//! Frame around the minimap. Besides decoration it masks the map's overscan
//! and any marker half-way across the edge.

use bevy::prelude::*;
use std::f32::consts::TAU;

use super::draw::{DrawCommand, DrawLayer, TextureRef};
use super::drag::MinimapWindow;
use crate::shared::*;

/// Tileable edge strip of the menu sheet.
const EDGE_SPRITE: SpriteRect = SpriteRect::new(8, 256, 3, BORDER_WIDTH);
const CORNER_SOURCES: [IVec2; 4] = [
    IVec2::new(0, 256),
    IVec2::new(48, 256),
    IVec2::new(48, 304),
    IVec2::new(0, 304),
];

/// The frame brightens the map tint, so it stays opaque unless the map is faded.
pub fn frame_tint(map_alpha: f32) -> Color {
    Color::srgba(1.0, 1.0, 1.0, (map_alpha * 1.5).min(1.0))
}

/// Clockwise angle that turns the +x axis into the direction `begin → end`.
pub fn line_angle(begin: Vec2, end: Vec2) -> f32 {
    let direction = (begin - end).normalize();
    let angle = direction.dot(-Vec2::X).clamp(-1.0, 1.0).acos();
    if begin.y > end.y {
        TAU - angle
    } else {
        angle
    }
}

fn line(begin: IVec2, end: IVec2, thickness: i32, tint: Color) -> DrawCommand {
    let length = (end - begin).as_vec2().length() as i32 + 2;
    let mut command = DrawCommand::stretched(
        DrawLayer::Border,
        TextureRef::Menu,
        IRect::new(begin.x, begin.y, begin.x + length, begin.y + thickness),
        EDGE_SPRITE.to_irect(),
        tint,
    );
    command.rotation = line_angle(begin.as_vec2(), end.as_vec2());
    command
}

/// Four edges, clockwise from the top, then the four corners.
pub fn border_commands(window: &MinimapWindow, map_alpha: f32) -> Vec<DrawCommand> {
    let tint = frame_tint(map_alpha);
    let IVec2 { x, y } = window.position;
    let IVec2 { x: w, y: h } = window.size;
    let b = window.border;

    let mut commands = vec![
        line(IVec2::new(x, y - b), IVec2::new(x + w - 2, y - b), b, tint),
        line(IVec2::new(x + w + b, y), IVec2::new(x + w + b, y + h - 2), b, tint),
        line(IVec2::new(x + w, y + h + b), IVec2::new(x + 2, y + h + b), b, tint),
        line(IVec2::new(x - b, y + h), IVec2::new(x - b, y + 2), b, tint),
    ];

    let corners = [
        IVec2::new(x - b, y - b),
        IVec2::new(x + w, y - b),
        IVec2::new(x + w, y + h),
        IVec2::new(x - b, y + h),
    ];
    for (corner, source) in corners.into_iter().zip(CORNER_SOURCES) {
        commands.push(DrawCommand::stretched(
            DrawLayer::Border,
            TextureRef::Menu,
            IRect::from_corners(corner, corner + IVec2::splat(b)),
            IRect::from_corners(source, source + IVec2::splat(b)),
            tint,
        ));
    }

    commands
}
