use super::potentials::point_charge_field;
use crate::core::models::molecule::SolventMolecule;
use nalgebra::{Point3, Vector3};
use serde::Deserialize;
use std::str::FromStr;

/// Granularity at which the distance cutoff gates field contributions.
///
/// `ByMolecule` tests one reference distance per molecule and then includes
/// every site of an accepted molecule without re-filtering. This keeps the
/// truncated field continuous as whole molecules cross the cutoff boundary.
/// `BySite` gates each charge site by its own distance, reproducing the
/// behavior of prior analysis variants that filtered per site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CutoffPolicy {
    #[default]
    ByMolecule,
    BySite,
}

impl FromStr for CutoffPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "by-molecule" | "by_molecule" | "molecule" => Ok(CutoffPolicy::ByMolecule),
            "by-site" | "by_site" | "site" => Ok(CutoffPolicy::BySite),
            _ => Err(()),
        }
    }
}

/// Accumulates the Coulomb field at `probe` over all molecules accepted by
/// the cutoff test. Distances strictly below `cutoff` are included; a
/// molecule sitting exactly at the cutoff contributes nothing.
pub fn field_at(
    probe: &Point3<f64>,
    molecules: &[SolventMolecule],
    cutoff: f64,
    policy: CutoffPolicy,
) -> Vector3<f64> {
    let mut field = Vector3::zeros();

    for molecule in molecules {
        match policy {
            CutoffPolicy::ByMolecule => {
                if (molecule.reference - probe).norm() < cutoff {
                    for site in &molecule.sites {
                        field += point_charge_field(probe, &site.position, site.charge);
                    }
                }
            }
            CutoffPolicy::BySite => {
                for site in &molecule.sites {
                    if (site.position - probe).norm() < cutoff {
                        field += point_charge_field(probe, &site.position, site.charge);
                    }
                }
            }
        }
    }

    field
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::molecule::ChargeSite;

    const TOLERANCE: f64 = 1e-12;

    fn water(resid: i64, oxygen: Point3<f64>, h1: Point3<f64>, h2: Point3<f64>) -> SolventMolecule {
        SolventMolecule {
            resid,
            reference: oxygen,
            sites: vec![
                ChargeSite {
                    position: oxygen,
                    charge: -0.834,
                },
                ChargeSite {
                    position: h1,
                    charge: 0.417,
                },
                ChargeSite {
                    position: h2,
                    charge: 0.417,
                },
            ],
        }
    }

    #[test]
    fn no_molecules_yield_the_zero_vector() {
        let field = field_at(
            &Point3::origin(),
            &[],
            10.0,
            CutoffPolicy::ByMolecule,
        );
        assert_eq!(field, Vector3::zeros());
    }

    #[test]
    fn single_site_inside_cutoff_gives_analytic_field() {
        let molecule = SolventMolecule {
            resid: 1,
            reference: Point3::new(5.0, 0.0, 0.0),
            sites: vec![ChargeSite {
                position: Point3::new(5.0, 0.0, 0.0),
                charge: -1.04,
            }],
        };
        let field = field_at(
            &Point3::origin(),
            &[molecule],
            10.0,
            CutoffPolicy::ByMolecule,
        );
        assert!((field.norm() - 1.04 / 25.0).abs() < TOLERANCE);
        assert!(field.x < 0.0);
    }

    #[test]
    fn molecule_beyond_cutoff_contributes_nothing_even_with_near_hydrogens() {
        // Reference sits outside the cutoff while a hydrogen is well inside:
        // per-molecule gating must reject the whole molecule.
        let molecule = water(
            1,
            Point3::new(15.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(15.0, 1.0, 0.0),
        );
        let field = field_at(
            &Point3::origin(),
            &[molecule],
            10.0,
            CutoffPolicy::ByMolecule,
        );
        assert_eq!(field, Vector3::zeros());
    }

    #[test]
    fn accepted_molecule_sites_are_never_refiltered() {
        // Reference inside the cutoff, one hydrogen outside: per-molecule
        // gating still counts every site.
        let molecule = water(
            1,
            Point3::new(5.0, 0.0, 0.0),
            Point3::new(50.0, 0.0, 0.0),
            Point3::new(5.0, 1.0, 0.0),
        );
        let field = field_at(
            &Point3::origin(),
            &[molecule.clone()],
            10.0,
            CutoffPolicy::ByMolecule,
        );

        let mut expected = Vector3::zeros();
        for site in &molecule.sites {
            expected += point_charge_field(&Point3::origin(), &site.position, site.charge);
        }
        assert!((field - expected).norm() < TOLERANCE);
    }

    #[test]
    fn by_site_policy_gates_each_charge_individually() {
        let molecule = water(
            1,
            Point3::new(15.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(15.0, 1.0, 0.0),
        );
        let field = field_at(&Point3::origin(), &[molecule], 10.0, CutoffPolicy::BySite);

        // Only the near hydrogen survives the per-site test.
        let expected =
            point_charge_field(&Point3::origin(), &Point3::new(1.0, 0.0, 0.0), 0.417);
        assert!((field - expected).norm() < TOLERANCE);
    }

    #[test]
    fn reference_exactly_at_cutoff_is_excluded() {
        let molecule = SolventMolecule {
            resid: 1,
            reference: Point3::new(10.0, 0.0, 0.0),
            sites: vec![ChargeSite {
                position: Point3::new(10.0, 0.0, 0.0),
                charge: -1.04,
            }],
        };
        let field = field_at(
            &Point3::origin(),
            &[molecule],
            10.0,
            CutoffPolicy::ByMolecule,
        );
        assert_eq!(field, Vector3::zeros());
    }

    #[test]
    fn site_coincident_with_probe_is_skipped_without_nan() {
        let probe = Point3::new(2.0, 2.0, 2.0);
        let molecule = SolventMolecule {
            resid: 1,
            reference: probe,
            sites: vec![
                ChargeSite {
                    position: probe,
                    charge: -0.834,
                },
                ChargeSite {
                    position: Point3::new(3.0, 2.0, 2.0),
                    charge: 0.417,
                },
            ],
        };
        let field = field_at(&probe, &[molecule], 10.0, CutoffPolicy::ByMolecule);
        assert!(field.iter().all(|c| c.is_finite()));
        assert!((field.x - 0.417).abs() < TOLERANCE);
    }

    #[test]
    fn fields_of_multiple_molecules_accumulate() {
        let left = water(
            1,
            Point3::new(-5.0, 0.0, 0.0),
            Point3::new(-5.5, 0.8, 0.0),
            Point3::new(-5.5, -0.8, 0.0),
        );
        let right = water(
            2,
            Point3::new(5.0, 0.0, 0.0),
            Point3::new(5.5, 0.8, 0.0),
            Point3::new(5.5, -0.8, 0.0),
        );
        let both = field_at(
            &Point3::origin(),
            &[left.clone(), right.clone()],
            20.0,
            CutoffPolicy::ByMolecule,
        );
        let sum = field_at(&Point3::origin(), &[left], 20.0, CutoffPolicy::ByMolecule)
            + field_at(&Point3::origin(), &[right], 20.0, CutoffPolicy::ByMolecule);
        assert!((both - sum).norm() < TOLERANCE);
    }

    #[test]
    fn cutoff_policy_parses_from_str() {
        assert_eq!(
            CutoffPolicy::from_str("by-molecule"),
            Ok(CutoffPolicy::ByMolecule)
        );
        assert_eq!(CutoffPolicy::from_str("BY_SITE"), Ok(CutoffPolicy::BySite));
        assert_eq!(CutoffPolicy::from_str("site"), Ok(CutoffPolicy::BySite));
        assert_eq!(CutoffPolicy::from_str("per-atom"), Err(()));
    }
}
