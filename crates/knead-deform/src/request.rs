//! The [`DeformRequest`]: a validated description of one deformation.

use knead_core::{Point3, Vec3};

/// A validated deformation request.
///
/// Describes a single displacement of one source voxel, together with the
/// material parameters that govern how far the displacement spreads:
///
/// - `influence_radius`: number of surface layers around the source that
///   move rigidly with it (0 = the source alone). Unsigned by type, so a
///   negative radius is unrepresentable.
/// - `spacing`: rest distance between axis-adjacent voxels (mm).
/// - `stiffness`: allowed stretch and shear relative to the rest offset
///   (mm). Zero means a rigid lattice; larger values let the material
///   absorb more of the displacement per layer.
///
/// # Construction
///
/// Use the builder pattern:
///
/// ```
/// use knead_core::{Point3, Vec3};
/// use knead_deform::DeformRequest;
///
/// let request = DeformRequest::builder()
///     .source(Point3::new(1.0, 1.0, 1.0))
///     .displacement(Vec3::new(0.0, 0.0, -0.5))
///     .influence_radius(1)
///     .stiffness(0.25)
///     .build()
///     .unwrap();
/// assert_eq!(request.spacing(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DeformRequest {
    source: Point3,
    displacement: Vec3,
    influence_radius: u32,
    spacing: f64,
    stiffness: f64,
}

/// Builder for [`DeformRequest`].
///
/// Required fields: `source` and `displacement`.
pub struct DeformRequestBuilder {
    source: Option<Point3>,
    displacement: Option<Vec3>,
    influence_radius: u32,
    spacing: f64,
    stiffness: f64,
}

impl DeformRequest {
    /// Create a new builder for configuring a request.
    pub fn builder() -> DeformRequestBuilder {
        DeformRequestBuilder {
            source: None,
            displacement: None,
            influence_radius: 0,
            spacing: 1.0,
            stiffness: 0.0,
        }
    }

    /// Position of the voxel being displaced. Must be an exact element of
    /// the grid the request is applied to.
    pub fn source(&self) -> Point3 {
        self.source
    }

    /// Displacement applied to the source voxel, in millimetres.
    pub fn displacement(&self) -> Vec3 {
        self.displacement
    }

    /// Number of surface layers that move rigidly with the source.
    pub fn influence_radius(&self) -> u32 {
        self.influence_radius
    }

    /// Rest distance between axis-adjacent voxels, in millimetres.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Allowed stretch and shear from the rest offset, in millimetres.
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }
}

impl DeformRequestBuilder {
    /// Set the source voxel position (required).
    pub fn source(mut self, source: Point3) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the displacement vector (required).
    pub fn displacement(mut self, displacement: Vec3) -> Self {
        self.displacement = Some(displacement);
        self
    }

    /// Set the number of rigid surface layers. Default: `0`.
    pub fn influence_radius(mut self, radius: u32) -> Self {
        self.influence_radius = radius;
        self
    }

    /// Set the voxel spacing in millimetres. Default: `1.0`.
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the stiffness coefficient in millimetres. Default: `0.0`.
    pub fn stiffness(mut self, stiffness: f64) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Build the request, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `source` or `displacement` is not set, or has a non-finite
    ///   component
    /// - `spacing` is not strictly positive and finite
    /// - `stiffness` is negative or non-finite
    pub fn build(self) -> Result<DeformRequest, String> {
        let source = self.source.ok_or_else(|| "source is required".to_string())?;
        if !source.is_finite() {
            return Err(format!("source {source} has a non-finite component"));
        }
        let displacement = self
            .displacement
            .ok_or_else(|| "displacement is required".to_string())?;
        if !displacement.is_finite() {
            return Err(format!(
                "displacement {displacement} has a non-finite component"
            ));
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(format!(
                "spacing must be positive and finite, got {}",
                self.spacing
            ));
        }
        if !(self.stiffness.is_finite() && self.stiffness >= 0.0) {
            return Err(format!(
                "stiffness must be non-negative and finite, got {}",
                self.stiffness
            ));
        }

        Ok(DeformRequest {
            source,
            displacement,
            influence_radius: self.influence_radius,
            spacing: self.spacing,
            stiffness: self.stiffness,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> DeformRequestBuilder {
        DeformRequest::builder()
            .source(Point3::new(1.0, 1.0, 1.0))
            .displacement(Vec3::new(1.0, 0.0, 0.0))
    }

    #[test]
    fn builder_minimal_uses_defaults() {
        let request = base().build().unwrap();
        assert_eq!(request.influence_radius(), 0);
        assert_eq!(request.spacing(), 1.0);
        assert_eq!(request.stiffness(), 0.0);
    }

    #[test]
    fn builder_rejects_missing_source() {
        let result = DeformRequest::builder()
            .displacement(Vec3::ZERO)
            .build();
        assert!(result.unwrap_err().contains("source"));
    }

    #[test]
    fn builder_rejects_missing_displacement() {
        let result = DeformRequest::builder()
            .source(Point3::new(0.0, 0.0, 0.0))
            .build();
        assert!(result.unwrap_err().contains("displacement"));
    }

    #[test]
    fn builder_rejects_bad_spacing() {
        assert!(base().spacing(0.0).build().is_err());
        assert!(base().spacing(-1.0).build().is_err());
        assert!(base().spacing(f64::NAN).build().is_err());
        assert!(base().spacing(f64::INFINITY).build().is_err());
    }

    #[test]
    fn builder_rejects_bad_stiffness() {
        assert!(base().stiffness(-0.1).build().is_err());
        assert!(base().stiffness(f64::NAN).build().is_err());
        assert!(base().stiffness(0.0).build().is_ok());
    }

    #[test]
    fn builder_rejects_non_finite_coordinates() {
        let result = DeformRequest::builder()
            .source(Point3::new(f64::NAN, 0.0, 0.0))
            .displacement(Vec3::ZERO)
            .build();
        assert!(result.unwrap_err().contains("source"));

        let result = DeformRequest::builder()
            .source(Point3::new(0.0, 0.0, 0.0))
            .displacement(Vec3::new(0.0, f64::INFINITY, 0.0))
            .build();
        assert!(result.unwrap_err().contains("displacement"));
    }
}
