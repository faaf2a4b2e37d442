use std::collections::BTreeMap;

use crate::shared::SpriteRect;

/// Regions of the building marker sheet, one per constructible building kind.
/// Upgraded tiers share a footprint with their base building.
pub fn populate_building_rects(rects: &mut BTreeMap<String, SpriteRect>) {
    // Row 0: farmhouse and utility buildings
    rects.insert("House".into(), SpriteRect::new(0, 0, 9, 8));
    rects.insert("Greenhouse".into(), SpriteRect::new(9, 0, 7, 8));
    rects.insert("Shed".into(), SpriteRect::new(16, 0, 5, 6));
    rects.insert("Silo".into(), SpriteRect::new(21, 0, 3, 7));
    rects.insert("Well".into(), SpriteRect::new(24, 0, 3, 4));
    rects.insert("Mill".into(), SpriteRect::new(27, 0, 5, 8));

    // Row 1: animal housing
    rects.insert("Coop".into(), SpriteRect::new(0, 8, 6, 5));
    rects.insert("Big Coop".into(), SpriteRect::new(0, 8, 6, 5));
    rects.insert("Deluxe Coop".into(), SpriteRect::new(0, 8, 6, 5));
    rects.insert("Barn".into(), SpriteRect::new(6, 8, 7, 6));
    rects.insert("Big Barn".into(), SpriteRect::new(6, 8, 7, 6));
    rects.insert("Deluxe Barn".into(), SpriteRect::new(6, 8, 7, 6));
    rects.insert("Stable".into(), SpriteRect::new(13, 8, 6, 5));
    rects.insert("Fish Pond".into(), SpriteRect::new(19, 8, 5, 5));
}
