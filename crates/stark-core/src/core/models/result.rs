use nalgebra::Vector3;

/// The evaluated field at one probe atom in one frame.
///
/// Created by the frame task after evaluation, appended to the output table
/// and never mutated afterward. `projection` is `f64::NAN` whenever the
/// probe carries no bisector (no neighbor pair configured, or a neighbor
/// missing from the frame).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldResult {
    pub timestep: i64,
    /// Probe atom name.
    pub atom: String,
    /// Field vector in elementary charges per squared length unit.
    pub field: Vector3<f64>,
    /// Scalar field component along the local bisector axis.
    pub projection: f64,
}

impl FieldResult {
    /// Whether the bisector projection is defined for this row.
    pub fn has_projection(&self) -> bool {
        !self.projection.is_nan()
    }
}
