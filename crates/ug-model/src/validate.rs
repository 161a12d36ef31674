//! Model invariant checks.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::{ModelError, ModelResult};
use crate::model::Model;

fn violation(what: String) -> ModelError {
    ModelError::Invariant { what }
}

fn dangling(err: ModelError) -> ModelError {
    violation(format!("dangling reference: {}", err))
}

/// Fail if `items` contains the same entry twice.
fn ensure_distinct<T: Eq + Hash + std::fmt::Debug>(items: &[T], context: &str) -> ModelResult<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return Err(violation(format!("{:?} listed twice in {}", item, context)));
        }
    }
    Ok(())
}

/// Validate every cross-reference in the model.
///
/// Checks, for each station, that its district, zones and lines exist and
/// list it back, and for each district, zone and line, that every station it
/// lists exists and refers back to it. Keys must be unique and every
/// membership sequence free of repeats.
pub fn check_invariants(model: &Model) -> ModelResult<()> {
    // Keys resolve to the entity that carries them
    for station in model.station_entities() {
        if model.station(station.name()).map_err(dangling)?.name() != station.name() {
            return Err(violation(format!("station key '{}' is misindexed", station.name())));
        }
    }
    for line in model.line_entities() {
        if model.line(line.name()).map_err(dangling)?.name() != line.name() {
            return Err(violation(format!("line key '{}' is misindexed", line.name())));
        }
    }
    for district in model.district_entities() {
        if model.district(district.name()).map_err(dangling)?.name() != district.name() {
            return Err(violation(format!(
                "district key '{}' is misindexed",
                district.name()
            )));
        }
    }
    for zone in model.zone_entities() {
        if model.zone(zone.id()).map_err(dangling)?.id() != zone.id() {
            return Err(violation(format!("zone key {} is misindexed", zone.id())));
        }
    }

    ensure_distinct(&model.stations().collect::<Vec<_>>(), "stations")?;
    ensure_distinct(&model.lines().collect::<Vec<_>>(), "lines")?;
    ensure_distinct(&model.districts().collect::<Vec<_>>(), "districts")?;
    ensure_distinct(&model.zones().collect::<Vec<_>>(), "zones")?;

    // Station -> collection
    for station in model.station_entities() {
        let name = station.name();

        if station.zones().is_empty() || station.zones().contains(&0) {
            return Err(violation(format!("station '{}' has invalid zones", name)));
        }
        ensure_distinct(station.zones(), &format!("zones of '{}'", name))?;
        ensure_distinct(station.lines(), &format!("lines of '{}'", name))?;

        let district = model.district(station.district()).map_err(dangling)?;
        if !district.stations().iter().any(|s| s == name) {
            return Err(violation(format!(
                "station '{}' missing from district '{}'",
                name,
                district.name()
            )));
        }

        for &zone_id in station.zones() {
            if !model.zone(zone_id).map_err(dangling)?.stations().iter().any(|s| s == name) {
                return Err(violation(format!(
                    "station '{}' missing from zone {}",
                    name, zone_id
                )));
            }
        }

        for line_name in station.lines() {
            if !model.line(line_name).map_err(dangling)?.stations().iter().any(|s| s == name) {
                return Err(violation(format!(
                    "station '{}' missing from line '{}'",
                    name, line_name
                )));
            }
        }
    }

    // Collection -> station
    for district in model.district_entities() {
        ensure_distinct(district.stations(), &format!("district '{}'", district.name()))?;
        for station in district.stations() {
            if model.station(station).map_err(dangling)?.district() != district.name() {
                return Err(violation(format!(
                    "district '{}' lists '{}' which is in another district",
                    district.name(),
                    station
                )));
            }
        }
    }

    for zone in model.zone_entities() {
        ensure_distinct(zone.stations(), &format!("zone {}", zone.id()))?;
        for station in zone.stations() {
            if !model.station(station).map_err(dangling)?.zones().contains(&zone.id()) {
                return Err(violation(format!(
                    "zone {} lists '{}' which is not in it",
                    zone.id(),
                    station
                )));
            }
        }
    }

    for line in model.line_entities() {
        ensure_distinct(line.stations(), &format!("line '{}'", line.name()))?;
        for station in line.stations() {
            if !model.station(station).map_err(dangling)?.is_on_line(line.name()) {
                return Err(violation(format!(
                    "line '{}' lists '{}' which is not on it",
                    line.name(),
                    station
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_model_is_valid() {
        assert!(check_invariants(&Model::new()).is_ok());
    }

    #[test]
    fn populated_model_is_valid() {
        let mut model = Model::new();
        model.add_station("Aldgate", "City of London", [1]).unwrap();
        model.add_station("Bank", "City of London", [1]).unwrap();
        model.add_station("Stratford", "Newham", [2, 3]).unwrap();
        model.add_station_to_line("Aldgate", "Circle").unwrap();
        model.add_station_to_line("Bank", "Central").unwrap();
        model.add_station_to_line("Stratford", "Central").unwrap();

        assert!(check_invariants(&model).is_ok());
    }

    #[test]
    fn ensure_distinct_reports_repeats() {
        let err = ensure_distinct(&["A", "B", "A"], "test").unwrap_err();
        assert!(matches!(err, ModelError::Invariant { .. }));
        assert!(ensure_distinct(&[1, 2, 3], "test").is_ok());
    }
}
