use std::collections::BTreeMap;

/// Vertical offset of each villager's head within their marker texture. Taller
/// sprites need a larger offset so the 16x15 crop lands on the face.
pub fn populate_marker_crop_offsets(offsets: &mut BTreeMap<String, i32>) {
    offsets.insert("Margaret".into(), 2);
    offsets.insert("Marco".into(), 0);
    offsets.insert("Lily".into(), 1);
    offsets.insert("Old Tom".into(), 2);
    offsets.insert("Elena".into(), 1);
    offsets.insert("Mira".into(), 0);
    offsets.insert("Doc".into(), 0);
    offsets.insert("Mayor Rex".into(), 3);
    offsets.insert("Sam".into(), 4);
    offsets.insert("Nora".into(), 2);
}
