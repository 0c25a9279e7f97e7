//! Crop reference catalog and the profile defaulting policy
//!
//! Mirrors the reference data an external crop store would supply. Callers
//! backed by their own store build the catalog from it with
//! [`CropCatalog::with_crops`]; everyone else gets the stock entries.
//! Defaulting for missing crops or missing GDD parameters happens in exactly
//! one place, [`CropCatalog::resolve`].

use crate::error::{EngineError, EngineResult};
use crate::models::{CropProfile, GrowthStage, ResolvedCropProfile};

/// Base moisture threshold assumed for crops missing from the catalog.
pub const DEFAULT_MOISTURE_THRESHOLD: i32 = 50;
/// GDD base temperature assumed when a profile does not specify one.
pub const DEFAULT_BASE_TEMPERATURE_C: f64 = 10.0;
/// Total GDD target assumed when a profile does not specify one.
pub const DEFAULT_TOTAL_GDD: f64 = 2000.0;

/// In-memory crop catalog with case-insensitive lookup.
#[derive(Debug, Clone)]
pub struct CropCatalog {
    crops: Vec<CropProfile>,
}

impl CropCatalog {
    /// Catalog over caller-supplied reference data.
    pub fn with_crops(crops: Vec<CropProfile>) -> Self {
        Self { crops }
    }

    /// Catalog preloaded with the stock crop set.
    pub fn builtin() -> Self {
        Self::with_crops(vec![
            CropProfile {
                name: "Rice".to_string(),
                base_moisture_threshold: 60,
                base_temperature_c: Some(10.0),
                total_required_gdd: Some(2000.0),
                stages: vec![
                    stage("Seedling", 0, 20, 15),
                    stage("Vegetative", 21, 50, 20),
                    stage("Reproductive", 51, 80, 25),
                    stage("Ripening", 81, 110, -5),
                ],
            },
            CropProfile {
                name: "Wheat".to_string(),
                base_moisture_threshold: 40,
                base_temperature_c: Some(5.0),
                total_required_gdd: Some(1800.0),
                stages: vec![
                    stage("Vegetative", 0, 30, 10),
                    stage("Reproductive", 31, 60, 20),
                    stage("Ripening", 61, 90, -10),
                ],
            },
            CropProfile {
                name: "Corn".to_string(),
                base_moisture_threshold: 50,
                base_temperature_c: None,
                total_required_gdd: None,
                stages: Vec::new(),
            },
            CropProfile {
                name: "Vegetables".to_string(),
                base_moisture_threshold: 55,
                base_temperature_c: None,
                total_required_gdd: None,
                stages: Vec::new(),
            },
            CropProfile {
                name: "Sugarcane".to_string(),
                base_moisture_threshold: 65,
                base_temperature_c: None,
                total_required_gdd: None,
                stages: Vec::new(),
            },
            CropProfile {
                name: "Cotton".to_string(),
                base_moisture_threshold: 35,
                base_temperature_c: None,
                total_required_gdd: None,
                stages: Vec::new(),
            },
        ])
    }

    /// Case-insensitive lookup.
    pub fn find(&self, name: &str) -> Option<&CropProfile> {
        self.crops.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Strict lookup for callers that treat an unknown crop as an error.
    pub fn lookup(&self, name: &str) -> EngineResult<&CropProfile> {
        self.find(name)
            .ok_or_else(|| EngineError::CropNotFound(name.to_string()))
    }

    /// Resolve a crop into the defaulted form the engine consumes.
    ///
    /// Unknown crops yield a fully defaulted profile with an empty stage
    /// table, so downstream decisions fall back to the generic growth stage.
    pub fn resolve(&self, name: &str) -> ResolvedCropProfile {
        match self.find(name) {
            Some(profile) => ResolvedCropProfile {
                name: profile.name.clone(),
                base_moisture_threshold: profile.base_moisture_threshold,
                base_temperature_c: profile
                    .base_temperature_c
                    .unwrap_or(DEFAULT_BASE_TEMPERATURE_C),
                total_required_gdd: profile
                    .total_required_gdd
                    .unwrap_or(DEFAULT_TOTAL_GDD),
                stages: profile.stages.clone(),
            },
            None => ResolvedCropProfile {
                name: name.to_string(),
                base_moisture_threshold: DEFAULT_MOISTURE_THRESHOLD,
                base_temperature_c: DEFAULT_BASE_TEMPERATURE_C,
                total_required_gdd: DEFAULT_TOTAL_GDD,
                stages: Vec::new(),
            },
        }
    }

    /// Names of all cataloged crops, in catalog order.
    pub fn crop_names(&self) -> Vec<&str> {
        self.crops.iter().map(|c| c.name.as_str()).collect()
    }
}

fn stage(name: &str, start_day: u32, end_day: u32, stage_factor: i32) -> GrowthStage {
    GrowthStage {
        name: name.to_string(),
        start_day,
        end_day,
        stage_factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup_is_case_insensitive() {
        let catalog = CropCatalog::builtin();
        assert!(catalog.find("wheat").is_some());
        assert!(catalog.find("WHEAT").is_some());
        assert!(catalog.find("Wheat").is_some());
    }

    #[test]
    fn lookup_unknown_crop_errors() {
        let catalog = CropCatalog::builtin();
        let err = catalog.lookup("Quinoa").unwrap_err();
        assert!(matches!(err, EngineError::CropNotFound(name) if name == "Quinoa"));
    }

    #[test]
    fn resolve_known_crop_keeps_its_parameters() {
        let catalog = CropCatalog::builtin();
        let wheat = catalog.resolve("wheat");
        assert_eq!(wheat.base_moisture_threshold, 40);
        assert_eq!(wheat.base_temperature_c, 5.0);
        assert_eq!(wheat.total_required_gdd, 1800.0);
        assert_eq!(wheat.stages.len(), 3);
    }

    #[test]
    fn resolve_defaults_missing_gdd_parameters() {
        let catalog = CropCatalog::builtin();
        let corn = catalog.resolve("Corn");
        assert_eq!(corn.base_moisture_threshold, 50);
        assert_eq!(corn.base_temperature_c, DEFAULT_BASE_TEMPERATURE_C);
        assert_eq!(corn.total_required_gdd, DEFAULT_TOTAL_GDD);
    }

    #[test]
    fn resolve_unknown_crop_is_fully_defaulted() {
        let catalog = CropCatalog::builtin();
        let unknown = catalog.resolve("Dragonfruit");
        assert_eq!(unknown.name, "Dragonfruit");
        assert_eq!(unknown.base_moisture_threshold, DEFAULT_MOISTURE_THRESHOLD);
        assert_eq!(unknown.base_temperature_c, DEFAULT_BASE_TEMPERATURE_C);
        assert_eq!(unknown.total_required_gdd, DEFAULT_TOTAL_GDD);
        assert!(unknown.stages.is_empty());
    }

    #[test]
    fn resolving_twice_yields_the_same_profile() {
        let catalog = CropCatalog::builtin();
        let a = catalog.resolve("Rice");
        let b = catalog.resolve("Rice");
        assert_eq!(a.base_moisture_threshold, b.base_moisture_threshold);
        assert_eq!(a.stages.len(), b.stages.len());
    }
}
