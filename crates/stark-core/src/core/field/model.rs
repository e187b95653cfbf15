use phf::phf_map;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// One charge-site role of a solvent model: the atom name that fills the
/// role and the partial charge it carries.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SiteSpec {
    pub role: String,
    pub charge: f64,
}

/// A data-driven solvent charge model: site roles, their charges, and the
/// role whose distance to the probe decides cutoff inclusion.
///
/// The reference role does not have to carry a charge of its own. Four-site
/// models use the oxygen purely as the cutoff reference while the negative
/// charge sits on a massless virtual site; in that case the reference role
/// appears nowhere in `sites`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ChargeModel {
    pub name: String,
    pub reference_role: String,
    pub sites: Vec<SiteSpec>,
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Unknown charge model preset: '{0}'")]
    UnknownPreset(String),
    #[error("Charge model '{0}' defines no charge sites")]
    EmptySites(String),
    #[error("Charge model '{model}' defines role '{role}' more than once")]
    DuplicateRole { model: String, role: String },
}

struct Preset {
    reference: &'static str,
    sites: &'static [(&'static str, f64)],
}

static PRESETS: phf::Map<&'static str, Preset> = phf_map! {
    "tip3p" => Preset {
        reference: "OH2",
        sites: &[("OH2", -0.834), ("H1", 0.417), ("H2", 0.417)],
    },
    // TIP4P charge set collapsed onto three atomic sites.
    "tip4p-3site" => Preset {
        reference: "OH2",
        sites: &[("OH2", -1.04), ("H1", 0.52), ("H2", 0.52)],
    },
    "tip4p" => Preset {
        reference: "OH2",
        sites: &[("MW", -1.04), ("H1", 0.52), ("H2", 0.52)],
    },
    "oxygen-only" => Preset {
        reference: "OH2",
        sites: &[("OH2", -1.04)],
    },
};

impl ChargeModel {
    /// Returns one of the built-in models by name.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownPreset`] if `name` is not a preset.
    pub fn preset(name: &str) -> Result<Self, ModelError> {
        let preset = PRESETS
            .get(name)
            .ok_or_else(|| ModelError::UnknownPreset(name.to_string()))?;
        Ok(Self {
            name: name.to_string(),
            reference_role: preset.reference.to_string(),
            sites: preset
                .sites
                .iter()
                .map(|&(role, charge)| SiteSpec {
                    role: role.to_string(),
                    charge,
                })
                .collect(),
        })
    }

    /// Loads a model descriptor from a TOML file and validates it.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(|e| ModelError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let model: Self = toml::from_str(&content).map_err(|e| ModelError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        model.validate()?;
        Ok(model)
    }

    /// Checks the structural invariants of the descriptor.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.sites.is_empty() {
            return Err(ModelError::EmptySites(self.name.clone()));
        }
        for (i, site) in self.sites.iter().enumerate() {
            if self.sites[..i].iter().any(|s| s.role == site.role) {
                return Err(ModelError::DuplicateRole {
                    model: self.name.clone(),
                    role: site.role.clone(),
                });
            }
        }
        Ok(())
    }

    /// All atom-name roles a residue must provide to form a complete
    /// molecule: every charge site plus the cutoff reference.
    pub fn required_roles(&self) -> Vec<&str> {
        let mut roles: Vec<&str> = self.sites.iter().map(|s| s.role.as_str()).collect();
        if !roles.contains(&self.reference_role.as_str()) {
            roles.push(self.reference_role.as_str());
        }
        roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn tip3p_preset_has_three_sites_and_oxygen_reference() {
        let model = ChargeModel::preset("tip3p").unwrap();
        assert_eq!(model.reference_role, "OH2");
        assert_eq!(model.sites.len(), 3);
        assert_eq!(model.sites[0].charge, -0.834);
        assert_eq!(model.sites[1].charge, 0.417);
    }

    #[test]
    fn tip4p_preset_keeps_reference_out_of_the_charge_sites() {
        let model = ChargeModel::preset("tip4p").unwrap();
        assert!(model.sites.iter().all(|s| s.role != model.reference_role));
        let total: f64 = model.sites.iter().map(|s| s.charge).sum();
        assert!(total.abs() < 1e-12);
    }

    #[test]
    fn required_roles_include_a_charge_free_reference_exactly_once() {
        let model = ChargeModel::preset("tip4p").unwrap();
        let roles = model.required_roles();
        assert_eq!(roles, vec!["MW", "H1", "H2", "OH2"]);

        let model = ChargeModel::preset("oxygen-only").unwrap();
        assert_eq!(model.required_roles(), vec!["OH2"]);
    }

    #[test]
    fn unknown_preset_name_is_rejected() {
        let result = ChargeModel::preset("tip5p");
        assert!(matches!(result, Err(ModelError::UnknownPreset(_))));
    }

    #[test]
    fn load_succeeds_with_valid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.toml");
        fs::write(
            &path,
            r#"
            name = "custom"
            reference_role = "OW"

            [[sites]]
            role = "OW"
            charge = -0.8476

            [[sites]]
            role = "HW1"
            charge = 0.4238

            [[sites]]
            role = "HW2"
            charge = 0.4238
            "#,
        )
        .unwrap();

        let model = ChargeModel::load(&path).unwrap();
        assert_eq!(model.name, "custom");
        assert_eq!(model.sites.len(), 3);
        assert_eq!(model.required_roles(), vec!["OW", "HW1", "HW2"]);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = ChargeModel::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ModelError::Io { .. })));
    }

    #[test]
    fn load_fails_for_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "this is not toml").unwrap();
        let result = ChargeModel::load(&path);
        assert!(matches!(result, Err(ModelError::Toml { .. })));
    }

    #[test]
    fn validate_rejects_empty_site_list() {
        let model = ChargeModel {
            name: "empty".to_string(),
            reference_role: "OW".to_string(),
            sites: Vec::new(),
        };
        assert!(matches!(model.validate(), Err(ModelError::EmptySites(_))));
    }

    #[test]
    fn validate_rejects_duplicate_roles() {
        let model = ChargeModel {
            name: "dup".to_string(),
            reference_role: "OW".to_string(),
            sites: vec![
                SiteSpec {
                    role: "OW".to_string(),
                    charge: -1.0,
                },
                SiteSpec {
                    role: "OW".to_string(),
                    charge: 1.0,
                },
            ],
        };
        assert!(matches!(
            model.validate(),
            Err(ModelError::DuplicateRole { .. })
        ));
    }

    #[test]
    fn every_preset_passes_validation() {
        for name in ["tip3p", "tip4p-3site", "tip4p", "oxygen-only"] {
            ChargeModel::preset(name).unwrap().validate().unwrap();
        }
    }
}
