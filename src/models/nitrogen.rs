//! PSA nitrogen generation plant sizing.
//!
//! Given a desired nitrogen flow, a required purity, and an operating
//! pressure, this model resolves the nitrogen extraction efficiency,
//! derives the compressed-air demand, selects an air-compressor
//! configuration, and assembles operating warnings and recommendations.
//!
//! The computational core is in the internal [`core`] module; its value
//! types and the [`calculate`] entry point are re-exported here.
//! [`NitrogenPlantModel`] wraps the entry point as a [`twine_core::Model`].

mod core;

pub use core::{
    AirDemand, Alternative, CalculationRequest, CalculationResult, CompressorModel,
    CompressorSelection, PurityBreakpoint, Recommendation, Warning, air_demand, air_demand_curve,
    calculate, compressor_catalog, purity_table, residual_oxygen, resolve_efficiency,
    select_compressors,
};

use std::convert::Infallible;

use twine_core::Model;

/// Model adapter for PSA plant sizing.
///
/// A thin wrapper around [`calculate`]. Sizing is a total function of a
/// well-formed [`CalculationRequest`], so the error type is [`Infallible`];
/// out-of-range operating points surface as warnings in the result, not as
/// errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct NitrogenPlantModel;

impl Model for NitrogenPlantModel {
    type Input = CalculationRequest;
    type Output = CalculationResult;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(calculate(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Pressure, Ratio, VolumeRate},
        pressure::bar,
        ratio::percent,
        volume_rate::cubic_meter_per_hour,
    };

    #[test]
    fn model_adapter_matches_direct_call() {
        let request = CalculationRequest::new(
            VolumeRate::new::<cubic_meter_per_hour>(100.0),
            Ratio::new::<percent>(99.5),
            Pressure::new::<bar>(8.0),
        )
        .unwrap();

        let via_model = NitrogenPlantModel.call(&request).unwrap();
        let direct = calculate(&request);

        assert_eq!(via_model, direct);
    }
}
