use mroi_fields::image::Grid;
use mroi_fields::{Field, Roi};
use serde_json::{json, Value};

/// One header scanfield entry.
pub fn scanfield_json(
    width_px: usize,
    height_px: usize,
    center_xy: [f64; 2],
    size_xy: [f64; 2],
) -> Value {
    json!({
        "pixelResolutionXY": [width_px, height_px],
        "centerXY": center_xy,
        "sizeXY": size_xy,
        "enable": 1,
    })
}

/// ROI header object with the given scanfields and depths.
pub fn roi_json(discrete: bool, zs: &[f64], scanfields: Vec<Value>) -> Value {
    json!({
        "discretePlaneMode": if discrete { 1 } else { 0 },
        "zs": zs,
        "scanfields": scanfields,
    })
}

pub fn roi(value: Value) -> Roi {
    Roi::from_value(value).expect("synthetic ROI is valid")
}

/// Single-scanfield ROI (valid at every depth) with the given centre and size.
pub fn single_roi(
    width_px: usize,
    height_px: usize,
    center_xy: [f64; 2],
    size_xy: [f64; 2],
) -> Roi {
    roi(roi_json(
        false,
        &[0.0],
        vec![scanfield_json(width_px, height_px, center_xy, size_xy)],
    ))
}

/// Page whose pixels all hold distinct values.
pub fn ramp_page(width: usize, height: usize) -> Vec<u32> {
    (0..width * height).map(|i| i as u32 + 1).collect()
}

/// Number of chunks covering each output pixel.
pub fn coverage(field: &Field) -> Grid<u32> {
    let mut counts = Grid::filled(field.width_px(), field.height_px(), 0u32);
    for chunk in field.chunks() {
        for y in chunk.placement_y.range() {
            for x in chunk.placement_x.range() {
                let c = counts.get(x, y);
                counts.set(x, y, c + 1);
            }
        }
    }
    counts
}
