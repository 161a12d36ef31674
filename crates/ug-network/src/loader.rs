//! Populate a model from network definitions.

use tracing::{debug, warn};
use ug_model::{Model, ModelError};

use crate::schema::{NetworkDef, StationDef};
use crate::validate::validate_network;
use crate::{NetworkError, NetworkResult};

/// How a station already present in the model is treated when it appears
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Every repeat is an error.
    #[default]
    Strict,
    /// A repeated station in the same district is the same station: its new
    /// lines are added and repeated lines are skipped. A repeat in another
    /// district is a conflict.
    Merge,
}

/// Builds one model from any number of network definitions.
///
/// Definitions are validated before they are applied. If applying one
/// fails part way, stations applied before the failure stay in the model.
#[derive(Debug, Default)]
pub struct NetworkLoader {
    model: Model,
    policy: MergePolicy,
}

impl NetworkLoader {
    pub fn new(policy: MergePolicy) -> Self {
        Self {
            model: Model::new(),
            policy,
        }
    }

    /// Continue populating an existing model.
    pub fn with_model(model: Model, policy: MergePolicy) -> Self {
        Self { model, policy }
    }

    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    /// The model as populated so far.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Apply every station of `network` to the model.
    pub fn apply(&mut self, network: &NetworkDef) -> NetworkResult<()> {
        validate_network(network)?;

        for station in &network.stations {
            self.apply_station(station)?;
        }

        debug!(
            network = %network.name,
            stations = network.stations.len(),
            total_stations = self.model.station_count(),
            total_lines = self.model.line_count(),
            "applied network"
        );
        Ok(())
    }

    fn apply_station(&mut self, def: &StationDef) -> NetworkResult<()> {
        match self
            .model
            .add_station(def.name.as_str(), def.district.as_str(), def.zones.iter().copied())
        {
            Ok(()) => {}
            Err(ModelError::DuplicateStation { .. }) if self.policy == MergePolicy::Merge => {
                let existing = self.model.station(&def.name)?;
                if existing.district() != def.district {
                    return Err(NetworkError::ConflictingStation {
                        name: def.name.clone(),
                        existing: existing.district().to_string(),
                        incoming: def.district.clone(),
                    });
                }
                if existing.zones() != def.zones.as_slice() {
                    warn!(
                        station = %def.name,
                        kept = ?existing.zones(),
                        ignored = ?def.zones,
                        "merged station with different zones; keeping the first"
                    );
                }
            }
            Err(e) => return Err(e.into()),
        }

        for line in &def.lines {
            match self.model.add_station_to_line(&def.name, line) {
                Ok(()) => {}
                Err(ModelError::DuplicateMembership { .. }) if self.policy == MergePolicy::Merge => {
                    debug!(station = %def.name, line = %line, "station already on line");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(())
    }

    /// Check the populated model and hand it over.
    pub fn finish(self) -> NetworkResult<Model> {
        self.model.validate()?;
        Ok(self.model)
    }
}

/// Build a model from several definitions, applied in order.
pub fn build_model(networks: &[NetworkDef], policy: MergePolicy) -> NetworkResult<Model> {
    let mut loader = NetworkLoader::new(policy);
    for network in networks {
        loader.apply(network)?;
    }
    loader.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ug_model::ErrorKind;

    fn underground() -> NetworkDef {
        NetworkDef {
            stations: vec![
                StationDef::new("Bank", "City of London", vec![1])
                    .on_lines(["Central", "Northern"]),
                StationDef::new("Stratford", "Newham", vec![2, 3]).on_lines(["Central"]),
            ],
            ..NetworkDef::new("underground")
        }
    }

    fn dlr() -> NetworkDef {
        NetworkDef {
            stations: vec![
                StationDef::new("Bank", "City of London", vec![1])
                    .on_lines(["Docklands Light Railway"]),
                StationDef::new("Stratford", "Newham", vec![3])
                    .on_lines(["Docklands Light Railway"]),
            ],
            ..NetworkDef::new("dlr")
        }
    }

    #[test]
    fn single_network() {
        let model = build_model(&[underground()], MergePolicy::Strict).unwrap();
        assert_eq!(model.stations().collect::<Vec<_>>(), ["Bank", "Stratford"]);
        assert_eq!(
            model.line("Central").unwrap().stations(),
            ["Bank", "Stratford"]
        );
        assert_eq!(model.station("Stratford").unwrap().zones(), [2, 3]);
    }

    #[test]
    fn strict_policy_rejects_repeats() {
        let err = build_model(&[underground(), dlr()], MergePolicy::Strict).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::Model(ModelError::DuplicateStation { .. })
        ));
        assert_eq!(err.kind(), Some(ErrorKind::DuplicateEntity));
    }

    #[test]
    fn merge_policy_adds_lines_and_keeps_first_zones() {
        let model = build_model(&[underground(), dlr()], MergePolicy::Merge).unwrap();

        assert_eq!(model.station_count(), 2);
        assert_eq!(
            model.station("Bank").unwrap().lines(),
            ["Central", "Northern", "Docklands Light Railway"]
        );
        assert_eq!(model.station("Stratford").unwrap().zones(), [2, 3]);
        assert_eq!(
            model.line("Docklands Light Railway").unwrap().stations(),
            ["Bank", "Stratford"]
        );
    }

    #[test]
    fn merge_policy_skips_repeated_lines() {
        let model = build_model(&[dlr(), dlr()], MergePolicy::Merge).unwrap();
        assert_eq!(
            model.line("Docklands Light Railway").unwrap().stations(),
            ["Bank", "Stratford"]
        );
    }

    #[test]
    fn merge_policy_rejects_district_conflicts() {
        let other = NetworkDef {
            stations: vec![StationDef::new("Bank", "Southwark", vec![1])],
            ..NetworkDef::new("other")
        };
        let err = build_model(&[underground(), other], MergePolicy::Merge).unwrap_err();
        match err {
            NetworkError::ConflictingStation {
                name,
                existing,
                incoming,
            } => {
                assert_eq!(name, "Bank");
                assert_eq!(existing, "City of London");
                assert_eq!(incoming, "Southwark");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn invalid_definition_is_not_applied() {
        let mut loader = NetworkLoader::new(MergePolicy::Merge);
        loader.apply(&underground()).unwrap();
        let before = loader.model().clone();

        let bad = NetworkDef {
            stations: vec![
                StationDef::new("Aldgate", "City of London", vec![1]),
                StationDef::new("Nowhere", "Nowhere", vec![]),
            ],
            ..NetworkDef::new("bad")
        };
        assert!(matches!(
            loader.apply(&bad),
            Err(NetworkError::Validation(_))
        ));
        assert_eq!(loader.model(), &before);
    }

    #[test]
    fn extends_an_existing_model() {
        let base = build_model(&[underground()], MergePolicy::Strict).unwrap();
        let mut loader = NetworkLoader::with_model(base, MergePolicy::Merge);
        assert_eq!(loader.policy(), MergePolicy::Merge);
        loader.apply(&dlr()).unwrap();
        let model = loader.finish().unwrap();
        assert!(model.contains_line("Docklands Light Railway"));
    }
}
