//! Purity reference data and efficiency resolution.

use uom::si::{
    f64::Ratio,
    ratio::{percent, ratio},
};

/// A reference point relating nitrogen purity to extraction efficiency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurityBreakpoint {
    /// Nitrogen purity, in percent.
    pub purity: f64,
    /// Residual oxygen concentration at this purity, in ppm.
    pub oxygen_ppm: f64,
    /// Extraction efficiency fraction at this purity.
    pub eta: f64,
    /// Efficiency band observed across real installations, as (min, max).
    pub plausible_eta: (f64, f64),
}

const fn breakpoint(purity: f64, oxygen_ppm: f64, eta: f64, plausible_eta: (f64, f64)) -> PurityBreakpoint {
    PurityBreakpoint {
        purity,
        oxygen_ppm,
        eta,
        plausible_eta,
    }
}

/// Purity-to-efficiency reference table, ordered by increasing purity.
const PURITY_TABLE: [PurityBreakpoint; 8] = [
    breakpoint(95.0, 50_000.0, 0.60, (0.55, 0.65)),
    breakpoint(99.0, 10_000.0, 0.50, (0.45, 0.55)),
    breakpoint(99.5, 5_000.0, 0.45, (0.40, 0.48)),
    breakpoint(99.8, 2_000.0, 0.42, (0.38, 0.45)),
    breakpoint(99.9, 1_000.0, 0.38, (0.35, 0.42)),
    breakpoint(99.95, 500.0, 0.35, (0.32, 0.38)),
    breakpoint(99.99, 100.0, 0.32, (0.28, 0.35)),
    breakpoint(99.999, 10.0, 0.25, (0.20, 0.30)),
];

/// Returns the purity-to-efficiency reference table.
///
/// Useful to presentation layers for plotting the resolver's domain.
#[must_use]
pub fn purity_table() -> &'static [PurityBreakpoint] {
    &PURITY_TABLE
}

/// Resolves the nitrogen extraction efficiency for a requested purity.
///
/// Exact breakpoint purities return the tabulated efficiency; purities
/// between breakpoints are linearly interpolated. Purities outside the
/// table's 95.0–99.999 % domain clamp to the nearest boundary row (the
/// caller is expected to warn about them separately).
#[must_use]
pub fn resolve_efficiency(purity: Ratio) -> Ratio {
    // Comparisons happen in the quantity domain so that a purity built with
    // `Ratio::new::<percent>(99.5)` matches the 99.5 row exactly, without a
    // unit round-trip disturbing the low bits.
    let row_purity = |bp: &&PurityBreakpoint| Ratio::new::<percent>(bp.purity);

    // Bounding rows. Outside the table domain both fall back to the same
    // boundary row, which also makes the interpolation degenerate.
    let lower = PURITY_TABLE
        .iter()
        .rev()
        .find(|bp| row_purity(bp) <= purity)
        .unwrap_or(&PURITY_TABLE[0]);
    let upper = PURITY_TABLE
        .iter()
        .find(|bp| row_purity(bp) >= purity)
        .unwrap_or(&PURITY_TABLE[PURITY_TABLE.len() - 1]);

    let p = purity.get::<percent>();

    let eta = if lower.purity == upper.purity {
        // Exact match or out-of-domain clamp: never divide by a zero span.
        lower.eta
    } else {
        lower.eta + (upper.eta - lower.eta) * (p - lower.purity) / (upper.purity - lower.purity)
    };

    Ratio::new::<ratio>(eta)
}

/// Residual oxygen implied by a purity, as `(100 − purity) %`.
///
/// Computed from the purity itself, not looked up from the reference table,
/// so it is exact for interpolated purities too.
#[must_use]
pub fn residual_oxygen(purity: Ratio) -> Ratio {
    Ratio::new::<percent>(100.0 - purity.get::<percent>())
}
