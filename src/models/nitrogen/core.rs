//! PSA plant sizing computation.
//!
//! The sizing pipeline runs two sub-algorithms in sequence: the efficiency
//! resolver ([`purity`]) maps requested purity to an extraction efficiency,
//! and the compressor selector ([`compressor`]) searches the catalog for the
//! best-fit configuration once the air demand is derived.
//! Warnings and recommendations ([`advice`]) are assembled around them.

mod advice;
mod air_demand;
mod compressor;
mod input;
mod purity;
mod results;

pub use advice::{Recommendation, Warning};
pub use air_demand::{AirDemand, air_demand, air_demand_curve};
pub use compressor::{CompressorModel, compressor_catalog, select_compressors};
pub use input::CalculationRequest;
pub use purity::{PurityBreakpoint, purity_table, residual_oxygen, resolve_efficiency};
pub use results::{Alternative, CalculationResult, CompressorSelection};

/// Sizes a PSA nitrogen plant for the requested operating point.
///
/// Resolves the extraction efficiency for the requested purity, derives the
/// compressed-air demand, and, when the operating pressure lies within the
/// compressor catalog's range, selects a compressor configuration.
/// Out-of-range operating conditions surface as warnings; the calculation
/// always completes.
///
/// The computation is pure and deterministic: identical requests yield
/// identical results.
#[must_use]
pub fn calculate(request: &CalculationRequest) -> CalculationResult {
    let warnings = advice::warnings(request.purity(), request.pressure());

    let efficiency = resolve_efficiency(request.purity());
    let AirDemand {
        required_air_flow,
        specific_air_ratio,
    } = air_demand(request.nitrogen_flow(), efficiency);

    let compressors = compressor::catalog_covers(request.pressure())
        .then(|| select_compressors(required_air_flow));

    let recommendations = advice::recommendations(request.purity(), request.pressure());

    CalculationResult {
        request: *request,
        residual_oxygen: residual_oxygen(request.purity()),
        efficiency,
        required_air_flow,
        specific_air_ratio,
        warnings,
        recommendations,
        compressors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Pressure, Ratio, VolumeRate},
        pressure::bar,
        ratio::{part_per_million, percent, ratio},
        volume_rate::{cubic_meter_per_hour, cubic_meter_per_minute},
    };

    fn request(flow: f64, purity: f64, pressure: f64) -> CalculationRequest {
        CalculationRequest::new(
            VolumeRate::new::<cubic_meter_per_hour>(flow),
            Ratio::new::<percent>(purity),
            Pressure::new::<bar>(pressure),
        )
        .unwrap()
    }

    #[test]
    fn sizes_a_plant_at_an_exact_breakpoint() {
        let result = calculate(&request(100.0, 99.5, 8.0));

        assert_relative_eq!(result.efficiency.get::<ratio>(), 0.45);
        assert_relative_eq!(
            result.residual_oxygen.get::<part_per_million>(),
            5000.0,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            result.required_air_flow.get::<cubic_meter_per_hour>(),
            100.0 / (0.45 * 0.781),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.specific_air_ratio.get::<ratio>(),
            1.0 / (0.45 * 0.781),
            max_relative = 1e-12
        );

        assert!(result.warnings.is_empty());
        assert_eq!(result.recommendations, vec![Recommendation::SingleStagePsa]);

        // 284.5 Nm³/h is about 4.74 m³/min: one unit of the smallest model
        // covers it with the least surplus.
        let selection = result.compressors.expect("pressure is within catalog range");
        assert_eq!(selection.model.name, "UDT75A-10");
        assert_eq!(selection.unit_count, 1);
        assert_relative_eq!(
            selection.excess_capacity.get::<cubic_meter_per_minute>(),
            13.3 - 100.0 / (0.45 * 0.781) / 60.0,
            max_relative = 1e-12
        );
        assert!(selection.alternatives.is_empty());
    }

    #[test]
    fn interpolates_between_breakpoints() {
        let result = calculate(&request(100.0, 99.7, 8.0));

        // Between the 99.5 (0.45) and 99.8 (0.42) rows.
        assert_relative_eq!(result.efficiency.get::<ratio>(), 0.43, max_relative = 1e-12);
        assert_relative_eq!(
            result.required_air_flow.get::<cubic_meter_per_hour>(),
            100.0 / (0.43 * 0.781),
            max_relative = 1e-12
        );
    }

    #[test]
    fn high_pressure_skips_compressor_selection() {
        let result = calculate(&request(100.0, 99.5, 10.0));

        assert!(result.compressors.is_none());
        assert_eq!(result.warnings, vec![Warning::SpecialEquipmentRequired]);
        assert_eq!(
            result.recommendations,
            vec![
                Recommendation::SingleStagePsa,
                Recommendation::HighPressureCompressor,
            ]
        );
    }

    #[test]
    fn out_of_range_purity_warns_but_still_resolves() {
        let result = calculate(&request(100.0, 94.0, 8.0));

        assert_eq!(result.warnings, vec![Warning::PurityOutsideTypicalRange]);
        // Clamped to the 95.0 % boundary row.
        assert_relative_eq!(result.efficiency.get::<ratio>(), 0.60);
        assert!(result.compressors.is_some());
    }

    #[test]
    fn calculation_is_idempotent() {
        let request = request(250.0, 99.95, 6.5);

        assert_eq!(calculate(&request), calculate(&request));
    }

    #[test]
    fn low_pressure_and_high_purity_advice_combine() {
        let result = calculate(&request(250.0, 99.95, 6.5));

        assert_eq!(
            result.recommendations,
            vec![
                Recommendation::ConsiderCryogenic,
                Recommendation::RaiseOperatingPressure,
            ]
        );
    }
}
