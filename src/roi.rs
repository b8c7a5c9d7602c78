//! Regions of interest and depth-indexed field synthesis.
//!
//! An ROI is defined by one or more scanfields, each pinned to a depth. In
//! discrete-plane mode the ROI only exists at those depths; otherwise a
//! single scanfield extends to every depth and two or more scanfields are
//! linearly interpolated between the shallowest and the deepest one.
//!
//! Rotated ROIs are not supported.

use crate::field::Field;
use crate::interp::{interp, is_strictly_increasing, round_to_even};
use crate::scanfield::Scanfield;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Header values that may be a single item or a list of items.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(item) => std::slice::from_ref(item),
            OneOrMany::Many(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// Truthy header flag; acquisition headers store booleans as 0/1.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Number(f64),
}

impl Flag {
    pub fn is_set(self) -> bool {
        match self {
            Flag::Bool(b) => b,
            Flag::Number(n) => n != 0.0,
        }
    }
}

/// One scanfield as stored in the acquisition header.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ScanfieldInfo {
    /// (width, height) in pixels.
    #[serde(rename = "pixelResolutionXY")]
    pub pixel_resolution_xy: [usize; 2],
    /// (x, y) centre in scan-angle degrees.
    #[serde(rename = "centerXY")]
    pub center_xy: [f64; 2],
    /// (width, height) in scan-angle degrees.
    #[serde(rename = "sizeXY")]
    pub size_xy: [f64; 2],
}

/// ROI definition as stored in the acquisition header.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RoiInfo {
    #[serde(rename = "discretePlaneMode")]
    pub discrete_plane_mode: Flag,
    pub scanfields: OneOrMany<ScanfieldInfo>,
    /// Depth of each scanfield in microns.
    pub zs: OneOrMany<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Reasons an ROI definition is rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum RoiError {
    /// Missing key or wrongly typed value in the header.
    Malformed(String),
    LengthMismatch { scanfields: usize, depths: usize },
    NoScanfields,
    /// Interpolation needs strictly increasing depths.
    NonIncreasingDepths { previous: f64, next: f64 },
}

impl std::fmt::Display for RoiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoiError::Malformed(msg) => write!(f, "malformed ROI definition: {msg}"),
            RoiError::LengthMismatch { scanfields, depths } => write!(
                f,
                "ROI defines {scanfields} scanfields but {depths} depths"
            ),
            RoiError::NoScanfields => write!(f, "ROI defines no scanfields"),
            RoiError::NonIncreasingDepths { previous, next } => write!(
                f,
                "scanfield depths must be strictly increasing for interpolation ({previous} then {next})"
            ),
        }
    }
}

impl std::error::Error for RoiError {}

impl From<serde_json::Error> for RoiError {
    fn from(e: serde_json::Error) -> Self {
        RoiError::Malformed(e.to_string())
    }
}

/// Region of interest with a lazily built, depth-sorted scanfield cache.
#[derive(Clone, Debug)]
pub struct Roi {
    info: RoiInfo,
    scanfields: OnceLock<Vec<Scanfield>>,
}

impl Roi {
    /// Validate the header definition. Scanfields are built on first use.
    pub fn new(info: RoiInfo) -> Result<Self, RoiError> {
        let (n_fields, n_depths) = (info.scanfields.len(), info.zs.len());
        if n_fields != n_depths {
            return Err(RoiError::LengthMismatch {
                scanfields: n_fields,
                depths: n_depths,
            });
        }
        if n_fields == 0 {
            return Err(RoiError::NoScanfields);
        }
        if let Some(z) = info.zs.as_slice().iter().find(|z| !z.is_finite()) {
            return Err(RoiError::Malformed(format!("non-finite depth {z}")));
        }
        if !info.discrete_plane_mode.is_set() && n_fields > 1 {
            let mut zs = info.zs.as_slice().to_vec();
            zs.sort_by(f64::total_cmp);
            if !is_strictly_increasing(&zs) {
                let w = zs
                    .windows(2)
                    .find(|w| w[0] >= w[1])
                    .map_or([zs[0], zs[0]], |w| [w[0], w[1]]);
                return Err(RoiError::NonIncreasingDepths {
                    previous: w[0],
                    next: w[1],
                });
            }
        }
        Ok(Self {
            info,
            scanfields: OnceLock::new(),
        })
    }

    /// Parse one ROI object from JSON.
    pub fn from_json(json: &str) -> Result<Self, RoiError> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, RoiError> {
        Self::new(serde_json::from_value(value)?)
    }

    pub fn info(&self) -> &RoiInfo {
        &self.info
    }

    pub fn name(&self) -> Option<&str> {
        self.info.name.as_deref()
    }

    pub fn is_discrete_plane_mode_on(&self) -> bool {
        self.info.discrete_plane_mode.is_set()
    }

    /// Scanfields sorted by depth; equal depths keep header order.
    pub fn scanfields(&self) -> &[Scanfield] {
        self.scanfields.get_or_init(|| self.create_scanfields())
    }

    fn create_scanfields(&self) -> Vec<Scanfield> {
        let mut scanfields: Vec<Scanfield> = self
            .info
            .scanfields
            .as_slice()
            .iter()
            .zip(self.info.zs.as_slice())
            .map(|(sf, &depth)| {
                let [width_px, height_px] = sf.pixel_resolution_xy;
                let [x_center_deg, y_center_deg] = sf.center_xy;
                let [width_deg, height_deg] = sf.size_xy;
                Scanfield {
                    height_px,
                    width_px,
                    depth,
                    y_center_deg,
                    x_center_deg,
                    height_deg,
                    width_deg,
                }
            })
            .collect();
        scanfields.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        debug!(
            "Roi::scanfields built {} scanfields for {:?}",
            scanfields.len(),
            self.name()
        );
        scanfields
    }

    /// Depth range covered in continuous mode, `None` in discrete mode.
    /// With two or more scanfields only integer depths inside it are valid.
    pub fn depth_range(&self) -> Option<(f64, f64)> {
        if self.is_discrete_plane_mode_on() {
            return None;
        }
        let scanfields = self.scanfields();
        if scanfields.len() == 1 {
            return Some((f64::NEG_INFINITY, f64::INFINITY));
        }
        Some((scanfields.first()?.depth, scanfields.last()?.depth))
    }

    /// The field this ROI produces at `depth`, if it reaches that depth.
    ///
    /// With duplicate depths in discrete-plane mode, the scanfield defined
    /// last wins. Interpolated ROIs cover whole-micron depths between the
    /// shallowest and the deepest scanfield, both included.
    pub fn get_field_at(&self, depth: f64) -> Option<Field> {
        let scanfields = self.scanfields();
        let field = if self.is_discrete_plane_mode_on() {
            scanfields
                .iter()
                .rev()
                .find(|sf| sf.depth == depth)
                .map(Scanfield::as_field)
        } else if let [only] = scanfields {
            Some(
                Scanfield {
                    depth,
                    ..*only
                }
                .as_field(),
            )
        } else if depth.fract() != 0.0 {
            // Interpolated ROIs are only defined on whole-micron depths.
            None
        } else {
            interpolate(scanfields, depth).map(Field::new)
        };
        if field.is_none() {
            debug!("Roi::get_field_at {:?} has no field at depth {depth}", self.name());
        }
        field
    }
}

fn interpolate(scanfields: &[Scanfield], depth: f64) -> Option<Scanfield> {
    let depths: Vec<f64> = scanfields.iter().map(|sf| sf.depth).collect();
    let at = |attr: fn(&Scanfield) -> f64| {
        let values: Vec<f64> = scanfields.iter().map(attr).collect();
        interp(depth, &depths, &values)
    };
    Some(Scanfield {
        height_px: round_to_even(at(|sf| sf.height_px as f64)?),
        width_px: round_to_even(at(|sf| sf.width_px as f64)?),
        depth,
        y_center_deg: at(|sf| sf.y_center_deg)?,
        x_center_deg: at(|sf| sf.x_center_deg)?,
        height_deg: at(|sf| sf.height_deg)?,
        width_deg: at(|sf| sf.width_deg)?,
    })
}
