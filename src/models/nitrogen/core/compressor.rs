//! Air-compressor catalog and selection.

use uom::si::{
    f64::{Pressure, VolumeRate},
    pressure::bar,
    ratio::ratio,
    volume_rate::cubic_meter_per_minute,
};

use super::results::{Alternative, CompressorSelection};

/// Highest operating pressure the compressor catalog covers, in bar.
pub const MAX_CATALOG_PRESSURE_BAR: f64 = 9.5;

/// An air-compressor model and its flow capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressorModel {
    /// Manufacturer model designation.
    pub name: &'static str,
    /// Delivered air flow per unit, in m³/min.
    pub unit_capacity_m3_min: f64,
}

impl CompressorModel {
    /// Delivered air flow per unit.
    #[must_use]
    pub fn unit_capacity(&self) -> VolumeRate {
        VolumeRate::new::<cubic_meter_per_minute>(self.unit_capacity_m3_min)
    }
}

const fn model(name: &'static str, unit_capacity_m3_min: f64) -> CompressorModel {
    CompressorModel {
        name,
        unit_capacity_m3_min,
    }
}

/// 10-bar compressor catalog, ordered by capacity descending.
///
/// Declaration order doubles as the selection tie-break order: when two
/// entries yield the same excess capacity, the earlier one wins.
const CATALOG: [CompressorModel; 14] = [
    model("UDT355A-10", 67.7),
    model("UDT315A-10", 53.0),
    model("UDT280A-10", 50.0),
    model("UDT250A-10", 46.0),
    model("UDT250A-10B", 46.0),
    model("UDT220A-10", 41.0),
    model("UDT220A-10B", 41.0),
    model("UDT200A-10", 37.0),
    model("UDT200A-10B", 37.0),
    model("UDT160A-10", 27.0),
    model("UDT132A-10", 23.0),
    model("UDT110A-10", 20.3),
    model("UDT90A-10", 15.2),
    model("UDT75A-10", 13.3),
];

/// Returns the compressor catalog.
#[must_use]
pub fn compressor_catalog() -> &'static [CompressorModel] {
    &CATALOG
}

/// Whether the catalog covers the given operating pressure.
#[must_use]
pub fn catalog_covers(pressure: Pressure) -> bool {
    pressure <= Pressure::new::<bar>(MAX_CATALOG_PRESSURE_BAR)
}

/// How many units of a model are needed to cover a demand.
fn units_required(model: &CompressorModel, demand: VolumeRate) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = (demand / model.unit_capacity()).get::<ratio>().ceil() as u32;
    count
}

/// Selects the best-fit compressor configuration for an air demand.
///
/// Every catalog entry is evaluated; the configuration with the least
/// excess capacity wins, and ties resolve to the first minimal entry in
/// catalog order. Alternatives list the "fewer, bigger units" options:
/// entries with a strictly larger unit capacity that cover the demand
/// with strictly fewer units, in catalog order.
#[must_use]
pub fn select_compressors(required_air_flow: VolumeRate) -> CompressorSelection {
    let mut selected = &CATALOG[0];
    let mut unit_count = units_required(selected, required_air_flow);
    let mut excess = selected.unit_capacity() * f64::from(unit_count) - required_air_flow;

    for model in &CATALOG[1..] {
        let count = units_required(model, required_air_flow);
        let model_excess = model.unit_capacity() * f64::from(count) - required_air_flow;
        if model_excess < excess {
            selected = model;
            unit_count = count;
            excess = model_excess;
        }
    }

    let alternatives = CATALOG
        .iter()
        .filter(|model| model.unit_capacity() > selected.unit_capacity())
        .filter_map(|model| {
            let count = units_required(model, required_air_flow);
            (count < unit_count).then_some(Alternative {
                model: *model,
                unit_count: count,
                unit_capacity: model.unit_capacity(),
            })
        })
        .collect();

    CompressorSelection {
        model: *selected,
        unit_count,
        total_capacity: selected.unit_capacity() * f64::from(unit_count),
        excess_capacity: excess,
        alternatives,
    }
}
