//! View-to-map transform.
//!
//! Two coordinate spaces meet here. Map-space is the full map bitmap scaled by
//! [`PIXEL_ZOOM`]; screen-space is the host viewport. The camera keeps the
//! focus centered in the minimap until the crop would leave the map, then
//! moves the center instead of the crop.

use bevy::prelude::*;

use super::drag::MinimapWindow;
use crate::shared::*;

/// Camera state for one frame. Recomputed every update, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CameraState {
    /// Map-space point shown at the middle of the minimap.
    pub center: IVec2,
    /// Screen position of map-space origin; add a map-space point to get its
    /// screen position inside the minimap.
    pub map_offset: IVec2,
    /// Top-left of the cropped region, map-space.
    pub crop_origin: IVec2,
    /// Size of the cropped region, map-space (equal to the window size).
    pub crop_size: IVec2,
}

/// Snap to the map's native pixel grid so markers move in the same steps as
/// the map texture.
/// Saturates instead of overflowing; NaN snaps to 0.
pub fn normalize_to_map(n: f32) -> i32 {
    let cell = ((n / PIXEL_ZOOM as f32).floor() as i32).clamp(i32::MIN / PIXEL_ZOOM, i32::MAX / PIXEL_ZOOM);
    cell * PIXEL_ZOOM
}

pub fn normalize_vec(v: Vec2) -> IVec2 {
    IVec2::new(normalize_to_map(v.x), normalize_to_map(v.y))
}

/// Compute the camera for a focus point given in map-space pixels.
///
/// `map_bound` is the map's visible extent in map-space. Each axis is
/// corrected independently: at the low edge the crop pins to 0, at the high
/// edge it pins to `map_bound - size`, and `center` follows the crop.
pub fn compute_camera(focus: Vec2, window: &MinimapWindow, map_bound: IVec2) -> CameraState {
    let position = window.position;
    let size = window.size;
    let half = size / 2;

    // A focus more than a window past either edge corrects exactly like one
    // at that distance, so bounding it keeps the sums below in range.
    let low = -size.as_vec2();
    let high = map_bound.saturating_add(size).as_vec2();
    let focus = Vec2::new(focus.x.max(low.x).min(high.x), focus.y.max(low.y).min(high.y));

    let mut center = normalize_vec(focus);
    let mut map_offset = position.saturating_sub(center).saturating_add(half);
    let mut crop_origin = center.saturating_sub(half);

    for axis in 0..2 {
        if crop_origin[axis] < 0 || map_bound[axis] < size[axis] {
            // Low edge, or a window wider than the map: pin to the origin.
            center[axis] = half[axis];
            map_offset[axis] = position[axis];
            crop_origin[axis] = 0;
        } else if crop_origin[axis].saturating_add(size[axis]) > map_bound[axis] {
            center[axis] = map_bound[axis] - half[axis];
            map_offset[axis] = position[axis] - (map_bound[axis] - size[axis]);
            crop_origin[axis] = map_bound[axis] - size[axis];
        }
    }

    CameraState {
        center,
        map_offset,
        crop_origin,
        crop_size: size,
    }
}

impl CameraState {
    /// Whether a map-space point is far enough inside the minimap to draw.
    /// The margin hides markers before the frame would cut them off.
    pub fn is_visible(&self, point: Vec2) -> bool {
        let half_x = (self.crop_size.x / 2 - VISIBLE_MARGIN) as f32;
        let half_y = (self.crop_size.y / 2 - VISIBLE_MARGIN) as f32;
        let dx = point.x - self.center.x as f32;
        let dy = point.y - self.center.y as f32;
        dx > -half_x && dx < half_x && dy > -half_y && dy < half_y
    }

    /// Screen position of a map-space point, snapped to the grid.
    pub fn to_screen(&self, map_point: Vec2) -> IVec2 {
        normalize_vec(self.map_offset.as_vec2() + map_point)
    }

    /// Source rectangle of the map bitmap, in native texels. Two extra texels
    /// cover the remainder lost to flooring; the frame masks them. Clamped to
    /// the visible rows so the farm variants below never bleed in.
    pub fn map_source_rect(&self, map_bound: IVec2) -> IRect {
        let min = IVec2::new(
            self.crop_origin.x.div_euclid(PIXEL_ZOOM),
            self.crop_origin.y.div_euclid(PIXEL_ZOOM),
        );
        let native_bound = map_bound / PIXEL_ZOOM;
        let max = (min + self.crop_size / PIXEL_ZOOM + IVec2::splat(2)).min(native_bound);
        IRect::from_corners(min, max)
    }
}
