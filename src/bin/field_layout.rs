use mroi_fields::config::layout::{load_config, load_rois};
use mroi_fields::image::io::{save_roi_mask_png, write_json_file};
use mroi_fields::{build_fields, Field};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let rois = load_rois(&config.input)?;

    let fields = build_fields(&rois, &config.depths, &config.layout, &config.contiguity)
        .map_err(|e| format!("Failed to lay out fields: {e}"))?;

    print_text_summary(&fields, rois.len(), config.depths.len());

    if let Some(path) = &config.output.json_out {
        let report = FieldLayoutReport {
            roi_count: rois.len(),
            depths: &config.depths,
            field_count: fields.len(),
            fields: &fields,
        };
        write_json_file(path, &report)?;
        println!("\nJSON report written to {}", path.display());
    }

    if let Some(dir) = &config.output.mask_dir {
        for (i, field) in fields.iter().enumerate() {
            let path = dir.join(format!("field_{i:03}_slice_{}.png", field.slice_id));
            save_roi_mask_png(&field.roi_mask(), &path)?;
        }
        println!("ROI masks written to {}", dir.display());
    }

    Ok(())
}

fn print_text_summary(fields: &[Field], roi_count: usize, depth_count: usize) {
    println!("Field layout summary");
    println!("  rois: {roi_count}");
    println!("  depths: {depth_count}");
    println!("  fields: {}", fields.len());
    for (i, field) in fields.iter().enumerate() {
        let g = &field.geometry;
        println!(
            "  [{i}] slice={} depth={:.2} size={}x{} px center=({:.3}, {:.3}) deg rois={:?}",
            field.slice_id,
            g.depth,
            g.height_px,
            g.width_px,
            g.x_center_deg,
            g.y_center_deg,
            field.roi_ids
        );
    }
}

fn usage() -> String {
    "Usage: field_layout <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldLayoutReport<'a> {
    roi_count: usize,
    depths: &'a [f64],
    field_count: usize,
    fields: &'a [Field],
}
