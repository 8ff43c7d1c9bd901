//! Operating warnings and configuration recommendations.
//!
//! Both assemblers are fixed-order rule tables: each rule contributes at
//! most one entry, and the output order is the evaluation order.

use std::fmt;

use uom::si::{
    f64::{Pressure, Ratio},
    pressure::bar,
    ratio::percent,
};

use super::compressor::MAX_CATALOG_PRESSURE_BAR;

/// Lowest recommended operating pressure for PSA generation, in bar.
pub const MIN_RECOMMENDED_PRESSURE_BAR: f64 = 7.0;

/// An out-of-range operating condition.
///
/// Warnings are advisory: the calculation proceeds normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// Purity outside the typical PSA range of 95–99.999 %.
    PurityOutsideTypicalRange,
    /// Operating pressure above the compressor catalog's 9.5 bar limit.
    SpecialEquipmentRequired,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PurityOutsideTypicalRange => {
                write!(f, "purity is outside the typical range (95-99.999%)")
            }
            Self::SpecialEquipmentRequired => {
                write!(f, "pressures above 9.5 bar require special equipment")
            }
        }
    }
}

/// Configuration advice for the requested operating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// At ultra-high purity, cryogenic separation may be more economical.
    ConsiderCryogenic,
    /// A two-stage PSA system saves energy at high purity.
    TwoStagePsa,
    /// A standard single-stage PSA generator is the optimal configuration.
    SingleStagePsa,
    /// Raising the pressure into the 7–9.5 bar band improves efficiency.
    RaiseOperatingPressure,
    /// Operation above 9.5 bar needs a high-pressure compressor.
    HighPressureCompressor,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConsiderCryogenic => {
                write!(f, "for ultra-high purity, consider cryogenic technology")
            }
            Self::TwoStagePsa => {
                write!(f, "use a two-stage PSA system to save energy")
            }
            Self::SingleStagePsa => {
                write!(f, "optimal configuration: a standard single-stage PSA generator")
            }
            Self::RaiseOperatingPressure => {
                write!(f, "raise the operating pressure to 7-9.5 bar to improve efficiency")
            }
            Self::HighPressureCompressor => {
                write!(f, "pressures above 9.5 bar require a high-pressure compressor")
            }
        }
    }
}

/// Evaluates the warning rules in fixed order.
///
/// Thresholds are compared in the quantity domain so a purity built with
/// `Ratio::new::<percent>(95.0)` sits exactly on the boundary.
#[must_use]
pub fn warnings(purity: Ratio, pressure: Pressure) -> Vec<Warning> {
    let mut out = Vec::new();

    if purity < Ratio::new::<percent>(95.0) || purity > Ratio::new::<percent>(100.0) {
        out.push(Warning::PurityOutsideTypicalRange);
    }
    if pressure > Pressure::new::<bar>(MAX_CATALOG_PRESSURE_BAR) {
        out.push(Warning::SpecialEquipmentRequired);
    }

    out
}

/// Evaluates the recommendation rules in fixed order.
///
/// The purity tier and the pressure tier are independent; one entry from
/// each may appear.
#[must_use]
pub fn recommendations(purity: Ratio, pressure: Pressure) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if purity >= Ratio::new::<percent>(99.95) {
        out.push(Recommendation::ConsiderCryogenic);
    } else if purity >= Ratio::new::<percent>(99.9) {
        out.push(Recommendation::TwoStagePsa);
    } else {
        out.push(Recommendation::SingleStagePsa);
    }

    if pressure < Pressure::new::<bar>(MIN_RECOMMENDED_PRESSURE_BAR) {
        out.push(Recommendation::RaiseOperatingPressure);
    } else if pressure > Pressure::new::<bar>(MAX_CATALOG_PRESSURE_BAR) {
        out.push(Recommendation::HighPressureCompressor);
    }

    out
}
