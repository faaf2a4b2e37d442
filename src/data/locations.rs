use std::collections::BTreeMap;

/// Map-space positions of fixed features that are not tracked characters.
pub fn populate_map_vectors(vectors: &mut BTreeMap<String, (f32, f32)>) {
    // Trailer south of the square; replaced by a house once upgraded.
    vectors.insert("Trailer".into(), (780.0, 396.0));
    // Merchant cart at the forest clearing.
    vectors.insert("Merchant".into(), (452.0, 560.0));
}
