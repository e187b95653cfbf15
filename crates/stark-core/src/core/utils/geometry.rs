use nalgebra::{Point3, Vector3};

fn unit_or_zero(v: Vector3<f64>) -> Vector3<f64> {
    let norm = v.norm();
    if norm == 0.0 { Vector3::zeros() } else { v / norm }
}

/// Unit vector bisecting the angle formed by the bonds from `center` to
/// `n1` and `n2`.
///
/// Returns the zero vector when either bond is zero-length or the two unit
/// bond vectors cancel (antiparallel bonds); degenerate geometry is a valid
/// input, never an error.
pub fn bond_bisector(
    center: &Point3<f64>,
    n1: &Point3<f64>,
    n2: &Point3<f64>,
) -> Vector3<f64> {
    let v1 = unit_or_zero(n1 - center);
    let v2 = unit_or_zero(n2 - center);
    unit_or_zero(v1 + v2)
}

/// Scalar component of `field` along `axis`.
#[inline]
pub fn project_onto(field: &Vector3<f64>, axis: &Vector3<f64>) -> f64 {
    axis.dot(field)
}
