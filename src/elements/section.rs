//! Section properties for frame members

use serde::{Deserialize, Serialize};

use super::Strength;

/// Cross-section properties in input units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Moment of inertia in cm⁴
    pub i: f64,
    /// Cross-sectional area in cm²
    pub a: f64,
    /// Section modulus used by the section check in cm³
    pub z: f64,
    /// Section modulus about the strong axis in cm³
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zx: Option<f64>,
    /// Section modulus about the weak axis in cm³
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zy: Option<f64>,
    /// Radius of gyration about the strong axis in cm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ix: Option<f64>,
    /// Radius of gyration about the weak axis in cm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iy: Option<f64>,
}

impl SectionProperties {
    /// Create a section from I (cm⁴), A (cm²) and Z (cm³)
    pub fn new(i: f64, a: f64, z: f64) -> Self {
        Self {
            i,
            a,
            z,
            zx: None,
            zy: None,
            ix: None,
            iy: None,
        }
    }

    /// Set the strong and weak axis section moduli (cm³)
    pub fn with_moduli(mut self, zx: f64, zy: f64) -> Self {
        self.zx = Some(zx);
        self.zy = Some(zy);
        self
    }

    /// Set the radii of gyration (cm)
    pub fn with_radii(mut self, ix: f64, iy: f64) -> Self {
        self.ix = Some(ix);
        self.iy = Some(iy);
        self
    }

    /// Create a solid rectangular section from width and depth in mm
    pub fn rectangular(width_mm: f64, depth_mm: f64) -> Self {
        let b = width_mm / 10.0;
        let h = depth_mm / 10.0;
        let a = b * h;
        let ix_inertia = b * h.powi(3) / 12.0;
        let iy_inertia = h * b.powi(3) / 12.0;

        Self {
            i: ix_inertia,
            a,
            z: b * h * h / 6.0,
            zx: Some(b * h * h / 6.0),
            zy: Some(h * b * b / 6.0),
            ix: Some((ix_inertia / a).sqrt()),
            iy: Some((iy_inertia / a).sqrt()),
        }
    }
}

impl Default for SectionProperties {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Properties chosen for one member by an external section picker
///
/// Applied with [`FrameModel::apply_section_selection`](crate::FrameModel::apply_section_selection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSelection {
    /// 1-based index of the member to update
    pub target_member: usize,
    /// New modulus of elasticity in N/mm², if chosen
    #[serde(default)]
    pub e: Option<f64>,
    /// New allowable-stress basis, if chosen
    #[serde(default)]
    pub strength: Option<Strength>,
    /// New section properties
    pub section: SectionProperties,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangular_section() {
        // 105 x 105 timber post
        let s = SectionProperties::rectangular(105.0, 105.0);
        assert_relative_eq!(s.a, 110.25, max_relative = 1e-12);
        assert_relative_eq!(s.i, 10.5f64.powi(4) / 12.0, max_relative = 1e-12);
        assert_relative_eq!(s.z, 10.5f64.powi(3) / 6.0, max_relative = 1e-12);
        assert_relative_eq!(s.ix.unwrap(), 10.5 / 12f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let json = serde_json::to_string(&SectionProperties::new(1.0, 2.0, 3.0)).unwrap();
        assert!(!json.contains("ix"));

        let json = serde_json::to_string(&SectionProperties::new(1.0, 2.0, 3.0).with_moduli(3.0, 1.2)).unwrap();
        let back: SectionProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(back.zy, Some(1.2));
    }
}
