#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn shape_speeds_match_layout() {
    let speeds: Vec<f64> = SHAPES.iter().map(|d| d.speed).collect();
    assert_eq!(speeds, vec![0.3, 0.5, 0.2, 0.4]);
    assert!(SHAPES.iter().all(|d| d.content.is_empty()));
}

#[test]
fn symbols_drift_slower_than_shapes() {
    let fastest_symbol = SYMBOLS.iter().map(|d| d.speed).fold(0.0, f64::max);
    let slowest_shape = SHAPES.iter().map(|d| d.speed).fold(f64::INFINITY, f64::min);
    assert_eq!(fastest_symbol, 0.20);
    assert!(fastest_symbol <= slowest_shape);
    assert!(SYMBOLS.iter().all(|d| !d.content.is_empty()));
}
