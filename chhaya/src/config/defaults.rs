//! Default value functions for serde deserialization.

use std::f64::consts::E;

pub fn lattice_resolution() -> usize {
    301
}

pub fn jitter() -> f64 {
    0.001
}

pub fn spacing() -> f64 {
    150.0
}

pub fn julia_constant() -> [f64; 4] {
    [-0.450, -0.477, 0.181, 0.306]
}

pub fn escape_radius() -> f64 {
    2.0
}

pub fn max_iterations() -> u32 {
    30
}

pub fn power() -> u32 {
    2
}

pub fn frames() -> u32 {
    1024
}

pub fn precession_ratio() -> f64 {
    E
}

pub fn projection_scale() -> f64 {
    1.61
}

pub fn projection_offset() -> f64 {
    0.00010394
}

pub fn raster_size() -> usize {
    512
}

pub fn extent() -> f64 {
    2.0
}

pub fn output_dir() -> String {
    "./frames".to_string()
}

pub fn digits() -> usize {
    4
}

pub fn extension() -> String {
    "pnm".to_string()
}
