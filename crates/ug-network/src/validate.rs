//! Network definition validation.

use std::collections::HashSet;

use crate::schema::{NetworkDef, StationDef};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Check a definition before any of it is applied to a model.
///
/// Repeated station names are allowed here: whether they merge or conflict
/// is decided by the loader's merge policy.
pub fn validate_network(network: &NetworkDef) -> Result<(), ValidationError> {
    if network.version == 0 || network.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: network.version,
        });
    }

    for station in &network.stations {
        validate_station(station, &network.name)?;
    }

    Ok(())
}

fn validate_station(station: &StationDef, network: &str) -> Result<(), ValidationError> {
    if station.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: format!("network '{}' station name", network),
            value: station.name.clone(),
            reason: "must not be blank".to_string(),
        });
    }

    if station.district.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: format!("station '{}' district", station.name),
            value: station.district.clone(),
            reason: "must not be blank".to_string(),
        });
    }

    if station.zones.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: format!("station '{}' zones", station.name),
            value: "[]".to_string(),
            reason: "at least one zone is required".to_string(),
        });
    }
    if let Some(zone) = station.zones.iter().find(|&&z| z == 0) {
        return Err(ValidationError::InvalidValue {
            field: format!("station '{}' zones", station.name),
            value: zone.to_string(),
            reason: "zones must be positive".to_string(),
        });
    }

    let mut lines = HashSet::new();
    for line in &station.lines {
        if line.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: format!("station '{}' lines", station.name),
                value: line.clone(),
                reason: "must not be blank".to_string(),
            });
        }
        if !lines.insert(line) {
            return Err(ValidationError::DuplicateId {
                id: line.clone(),
                context: format!("station '{}' lines", station.name),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(stations: Vec<StationDef>) -> NetworkDef {
        NetworkDef {
            stations,
            ..NetworkDef::new("test")
        }
    }

    #[test]
    fn valid_network() {
        let net = network(vec![
            StationDef::new("Bank", "City of London", vec![1]).on_lines(["Central", "Northern"]),
            StationDef::new("Bank", "City of London", vec![1]).on_lines(["Docklands Light Railway"]),
        ]);
        assert!(validate_network(&net).is_ok());
    }

    #[test]
    fn unsupported_version() {
        let mut net = network(vec![]);
        net.version = crate::LATEST_VERSION + 1;
        assert_eq!(
            validate_network(&net),
            Err(ValidationError::UnsupportedVersion {
                version: crate::LATEST_VERSION + 1
            })
        );

        net.version = 0;
        assert!(validate_network(&net).is_err());
    }

    #[test]
    fn bad_zones() {
        let net = network(vec![StationDef::new("Bank", "City", vec![])]);
        assert!(matches!(
            validate_network(&net),
            Err(ValidationError::InvalidValue { .. })
        ));

        let net = network(vec![StationDef::new("Bank", "City", vec![1, 0])]);
        assert!(matches!(
            validate_network(&net),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn repeated_line_on_one_station() {
        let net = network(vec![
            StationDef::new("Bank", "City", vec![1]).on_lines(["Central", "Central"]),
        ]);
        assert_eq!(
            validate_network(&net),
            Err(ValidationError::DuplicateId {
                id: "Central".to_string(),
                context: "station 'Bank' lines".to_string(),
            })
        );
    }

    #[test]
    fn blank_names() {
        let net = network(vec![StationDef::new("  ", "City", vec![1])]);
        assert!(validate_network(&net).is_err());

        let net = network(vec![StationDef::new("Bank", "", vec![1])]);
        assert!(validate_network(&net).is_err());
    }
}
