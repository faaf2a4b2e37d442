//! Draw commands produced by the minimap. Plain data: a backend rasterizes
//! them in order, later commands on top.

use bevy::prelude::*;

use crate::shared::PlayerId;

/// Which compositing pass produced a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DrawLayer {
    MapBase,
    FarmOverlay,
    StoryBuilding,
    FarmBuilding,
    TravelingMerchant,
    Farmer,
    Npc,
    NpcIcon,
    Border,
}

/// Texture a command samples from. The host maps these to real images.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TextureRef {
    /// Full world map bitmap, including the farm variants.
    Map,
    BuildingMarkers,
    /// Shared UI sprite sheet (icons, merchant cart).
    Cursors,
    /// Menu sprite sheet, used for the frame.
    Menu,
    /// Marker texture of the named character.
    NpcMarker(String),
    /// Mini portrait of a farmer.
    FarmerPortrait(PlayerId),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Destination {
    /// Top-left at `position`, source drawn at `scale`.
    Scaled { position: IVec2, scale: f32 },
    /// Source stretched into a screen rectangle.
    Rect(IRect),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub layer: DrawLayer,
    pub texture: TextureRef,
    pub destination: Destination,
    /// Source region, texels.
    pub source: IRect,
    pub tint: Color,
    /// Clockwise radians about the destination's top-left corner.
    pub rotation: f32,
    pub depth: f32,
}

impl DrawCommand {
    pub fn scaled(
        layer: DrawLayer,
        texture: TextureRef,
        position: IVec2,
        source: IRect,
        scale: f32,
        tint: Color,
        depth: f32,
    ) -> Self {
        Self {
            layer,
            texture,
            destination: Destination::Scaled { position, scale },
            source,
            tint,
            rotation: 0.0,
            depth,
        }
    }

    pub fn stretched(layer: DrawLayer, texture: TextureRef, rect: IRect, source: IRect, tint: Color) -> Self {
        Self {
            layer,
            texture,
            destination: Destination::Rect(rect),
            source,
            tint,
            rotation: 0.0,
            depth: 0.0,
        }
    }

    pub fn position(&self) -> IVec2 {
        match self.destination {
            Destination::Scaled { position, .. } => position,
            Destination::Rect(rect) => rect.min,
        }
    }

    /// Unrotated screen footprint.
    pub fn screen_rect(&self) -> Rect {
        match self.destination {
            Destination::Scaled { position, scale } => {
                let min = position.as_vec2();
                Rect::from_corners(min, min + self.source.size().as_vec2() * scale)
            }
            Destination::Rect(rect) => rect.as_rect(),
        }
    }
}

/// The minimap's output for the current frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
    /// Pointer is over the minimap with the drag key held.
    pub grab_cursor: bool,
}

impl DrawList {
    pub fn layer(&self, layer: DrawLayer) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |command| command.layer == layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_screen_rect_multiplies_source() {
        let command = DrawCommand::scaled(
            DrawLayer::StoryBuilding,
            TextureRef::Map,
            IVec2::new(40, 80),
            IRect::new(263, 181, 271, 189),
            4.0,
            Color::WHITE,
            0.861,
        );
        let rect = command.screen_rect();
        assert_eq!(rect.min, Vec2::new(40.0, 80.0));
        assert_eq!(rect.max, Vec2::new(72.0, 112.0));
    }

    #[test]
    fn test_stretched_screen_rect_is_destination() {
        let command = DrawCommand::stretched(
            DrawLayer::Npc,
            TextureRef::NpcMarker("Lily".into()),
            IRect::new(8, 8, 38, 40),
            IRect::new(0, 1, 16, 16),
            Color::WHITE,
        );
        assert_eq!(command.position(), IVec2::new(8, 8));
        assert_eq!(command.screen_rect().size(), Vec2::new(30.0, 32.0));
    }
}
