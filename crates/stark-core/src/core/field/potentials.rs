use nalgebra::{Point3, Vector3};

/// Field at `probe` due to a point charge at `site`:
/// `q · (site − probe) / |site − probe|³`.
///
/// A site exactly coincident with the probe contributes nothing.
#[inline]
pub fn point_charge_field(probe: &Point3<f64>, site: &Point3<f64>, charge: f64) -> Vector3<f64> {
    let r_vec = site - probe;
    let r = r_vec.norm();
    if r == 0.0 {
        return Vector3::zeros();
    }
    r_vec * (charge / (r * r * r))
}
