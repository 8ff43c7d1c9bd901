//! Compressed-air demand derivation.

use uom::{
    ConstZero,
    si::{
        f64::{Ratio, VolumeRate},
        ratio::percent,
    },
};

use super::purity::{purity_table, resolve_efficiency};

/// Volume fraction of nitrogen in atmospheric air.
pub const ATMOSPHERIC_NITROGEN_FRACTION: f64 = 0.781;

/// Compressed-air demand for a nitrogen production target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirDemand {
    /// Compressed-air flow required at the generator inlet.
    pub required_air_flow: VolumeRate,
    /// Air consumed per unit of nitrogen produced.
    pub specific_air_ratio: Ratio,
}

/// Computes the compressed-air demand for a nitrogen flow at a given
/// extraction efficiency.
///
/// # Panics
///
/// Panics in debug builds if `eta` is not strictly positive. Efficiencies
/// resolved from the purity table are always in `(0, 1)`.
#[must_use]
pub fn air_demand(nitrogen_flow: VolumeRate, eta: Ratio) -> AirDemand {
    debug_assert!(
        eta > Ratio::ZERO,
        "extraction efficiency must be strictly positive"
    );

    let required_air_flow = nitrogen_flow / (eta * ATMOSPHERIC_NITROGEN_FRACTION);
    AirDemand {
        required_air_flow,
        specific_air_ratio: required_air_flow / nitrogen_flow,
    }
}

/// Samples the air demand across the purity table's domain.
///
/// Returns `(purity, required air flow)` pairs at evenly spaced purities,
/// including both domain endpoints, for presentation layers to plot.
/// Each sample goes through [`resolve_efficiency`]; fewer than two samples
/// are padded up to two.
#[must_use]
pub fn air_demand_curve(nitrogen_flow: VolumeRate, samples: usize) -> Vec<(Ratio, VolumeRate)> {
    let table = purity_table();
    let lo = table[0].purity;
    let hi = table[table.len() - 1].purity;
    let n = samples.max(2);

    (0..n)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let p = lo + (hi - lo) * (i as f64) / ((n - 1) as f64);
            let purity = Ratio::new::<percent>(p);
            let demand = air_demand(nitrogen_flow, resolve_efficiency(purity));
            (purity, demand.required_air_flow)
        })
        .collect()
}
