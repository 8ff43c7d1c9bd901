//! Result types for plant sizing.

use uom::si::f64::{Ratio, VolumeRate};

use super::{
    advice::{Recommendation, Warning},
    compressor::CompressorModel,
    input::CalculationRequest,
};

/// A "fewer, bigger units" compressor option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alternative {
    /// Compressor model offering this option.
    pub model: CompressorModel,
    /// Number of units required.
    pub unit_count: u32,
    /// Delivered air flow per unit.
    pub unit_capacity: VolumeRate,
}

/// Best-fit compressor configuration for a computed air demand.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressorSelection {
    /// Selected compressor model.
    pub model: CompressorModel,
    /// Number of units required.
    pub unit_count: u32,
    /// Combined capacity of the selected units.
    pub total_capacity: VolumeRate,
    /// Surplus capacity beyond the computed demand. Never negative.
    pub excess_capacity: VolumeRate,
    /// Larger-capacity options needing strictly fewer units, in catalog order.
    pub alternatives: Vec<Alternative>,
}

/// Full sizing output for one calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// Echo of the request that produced this result.
    pub request: CalculationRequest,
    /// Residual oxygen implied by the requested purity.
    pub residual_oxygen: Ratio,
    /// Resolved nitrogen extraction efficiency.
    pub efficiency: Ratio,
    /// Compressed-air flow required at the generator inlet.
    pub required_air_flow: VolumeRate,
    /// Air consumed per unit of nitrogen produced.
    pub specific_air_ratio: Ratio,
    /// Out-of-range operating conditions, in evaluation order.
    pub warnings: Vec<Warning>,
    /// Configuration advice, in evaluation order.
    pub recommendations: Vec<Recommendation>,
    /// Compressor configuration; absent above the catalog's pressure range.
    pub compressors: Option<CompressorSelection>,
}
