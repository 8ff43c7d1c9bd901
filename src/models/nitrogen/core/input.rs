use uom::si::f64::{Pressure, Ratio, VolumeRate};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// Inputs for one plant sizing calculation.
///
/// Nitrogen flow and operating pressure are guaranteed strictly positive.
/// Purity is deliberately unconstrained: values outside the typical PSA
/// range produce warnings in the result rather than a rejected request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationRequest {
    nitrogen_flow: VolumeRate,
    purity: Ratio,
    pressure: Pressure,
}

impl CalculationRequest {
    /// Constructs a validated request.
    ///
    /// # Errors
    ///
    /// Returns an error if the nitrogen flow or the operating pressure is
    /// not strictly positive.
    pub fn new(nitrogen_flow: VolumeRate, purity: Ratio, pressure: Pressure) -> ConstraintResult<Self> {
        let nitrogen_flow = Constrained::<VolumeRate, StrictlyPositive>::new(nitrogen_flow)?;
        let pressure = Constrained::<Pressure, StrictlyPositive>::new(pressure)?;
        Ok(Self {
            nitrogen_flow: nitrogen_flow.into_inner(),
            purity,
            pressure: pressure.into_inner(),
        })
    }

    /// Constructs a request without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure the nitrogen flow and operating pressure are
    /// strictly positive. Violating this invariant will result in
    /// nonsensical sizing output.
    #[must_use]
    pub fn new_unchecked(nitrogen_flow: VolumeRate, purity: Ratio, pressure: Pressure) -> Self {
        Self {
            nitrogen_flow,
            purity,
            pressure,
        }
    }

    /// Returns the desired nitrogen production flow.
    #[must_use]
    pub fn nitrogen_flow(&self) -> VolumeRate {
        self.nitrogen_flow
    }

    /// Returns the required nitrogen purity.
    #[must_use]
    pub fn purity(&self) -> Ratio {
        self.purity
    }

    /// Returns the operating pressure.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{pressure::bar, ratio::percent, volume_rate::cubic_meter_per_hour};

    #[test]
    fn rejects_non_positive_flow_and_pressure() {
        let purity = Ratio::new::<percent>(99.5);

        assert!(
            CalculationRequest::new(
                VolumeRate::new::<cubic_meter_per_hour>(0.0),
                purity,
                Pressure::new::<bar>(8.0),
            )
            .is_err()
        );
        assert!(
            CalculationRequest::new(
                VolumeRate::new::<cubic_meter_per_hour>(100.0),
                purity,
                Pressure::new::<bar>(-1.0),
            )
            .is_err()
        );
    }

    #[test]
    fn accepts_out_of_range_purity() {
        let request = CalculationRequest::new(
            VolumeRate::new::<cubic_meter_per_hour>(100.0),
            Ratio::new::<percent>(94.0),
            Pressure::new::<bar>(8.0),
        );

        assert!(request.is_ok());
    }
}
