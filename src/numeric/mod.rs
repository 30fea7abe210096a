// ============================================================================
// Numeric Module
// Exact decimal coordinates for vector arithmetic
// ============================================================================
//
// This module provides:
// - Coordinate: exact decimal component type (rust_decimal::Decimal)
// - ToCoordinate: conversion of integers, floats, strings, and decimals
// - is_close: absolute-tolerance comparison used by the vector predicates
// - VectorError: error taxonomy for all vector operations
//
// Design principles:
// - Coordinates never pass through binary floating point on the way in
// - All decimal arithmetic is checked and returns Result (no panics)
// - Only norms and arccosine go through f64

mod coordinate;
mod errors;

pub use coordinate::{
    approx_norm, from_approx, is_close, to_approx, Coordinate, ToCoordinate, DEFAULT_TOLERANCE,
    MAX_PRECISION,
};
pub(crate) use coordinate::{checked_add, checked_mul, checked_sub, round_for_display, sum_of_products};
pub use errors::{ErrorKind, VectorError, VectorResult};
