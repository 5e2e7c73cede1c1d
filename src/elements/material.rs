//! Material strength descriptors and preset values

use std::fmt;

use serde::{Deserialize, Serialize};

/// Timber species with tabulated allowable stresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WoodSpecies {
    /// Japanese cedar
    Sugi,
    /// Japanese cypress
    Hinoki,
    /// Pine
    Matsu,
    /// Any other species name; it has no table and fails the section check
    #[serde(other)]
    Unknown,
}

impl WoodSpecies {
    /// All species in table order
    pub const ALL: [WoodSpecies; 3] = [WoodSpecies::Sugi, WoodSpecies::Hinoki, WoodSpecies::Matsu];

    /// Typical modulus of elasticity in N/mm²
    pub fn elastic_modulus(&self) -> Option<f64> {
        match self {
            WoodSpecies::Sugi => Some(elastic_modulus::SUGI),
            WoodSpecies::Hinoki => Some(elastic_modulus::HINOKI),
            WoodSpecies::Matsu => Some(elastic_modulus::MATSU),
            WoodSpecies::Unknown => None,
        }
    }
}

/// Allowable-stress basis of a member
///
/// Serialized as `{"type": "F-value", "value": 235.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Strength {
    /// Steel reference strength F (N/mm²)
    #[serde(rename = "F-value")]
    SteelF(f64),
    /// Concrete design strength Fc (N/mm²)
    #[serde(rename = "Fc")]
    ConcreteFc(f64),
    /// Timber species
    #[serde(rename = "wood-type")]
    Wood(WoodSpecies),
    /// Stainless steel reference strength F (N/mm²)
    #[serde(rename = "F-stainless")]
    StainlessF(f64),
    /// Aluminum reference strength F (N/mm²)
    #[serde(rename = "F-aluminum")]
    AluminumF(f64),
}

impl Strength {
    /// The numeric basis value, if this variant carries one
    pub fn value(&self) -> Option<f64> {
        match self {
            Strength::SteelF(v)
            | Strength::ConcreteFc(v)
            | Strength::StainlessF(v)
            | Strength::AluminumF(v) => Some(*v),
            Strength::Wood(_) => None,
        }
    }

    /// Wire tag of the variant
    pub fn tag(&self) -> &'static str {
        match self {
            Strength::SteelF(_) => "F-value",
            Strength::ConcreteFc(_) => "Fc",
            Strength::Wood(_) => "wood-type",
            Strength::StainlessF(_) => "F-stainless",
            Strength::AluminumF(_) => "F-aluminum",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Wood(species) => write!(f, "{}={:?}", self.tag(), species),
            other => write!(f, "{}={}", other.tag(), other.value().unwrap_or_default()),
        }
    }
}

/// Moduli of elasticity offered by the material picker (N/mm²)
pub mod elastic_modulus {
    pub const STEEL: f64 = 205_000.0;
    pub const STAINLESS: f64 = 193_000.0;
    pub const ALUMINUM: f64 = 70_000.0;
    pub const SUGI: f64 = 7_500.0;
    pub const HINOKI: f64 = 9_000.0;
    pub const MATSU: f64 = 10_000.0;
}

/// Named strength grades (N/mm²)
pub mod grade {
    use super::Strength;

    /// SS400 / SN400B
    pub const SS400: Strength = Strength::SteelF(235.0);
    pub const SN400B: Strength = Strength::SteelF(235.0);
    pub const SM490: Strength = Strength::SteelF(295.0);
    pub const SN490B: Strength = Strength::SteelF(325.0);
    pub const SM520: Strength = Strength::SteelF(355.0);
    pub const SUS304: Strength = Strength::StainlessF(205.0);
    pub const SUS316: Strength = Strength::StainlessF(235.0);
    pub const A5052: Strength = Strength::AluminumF(150.0);
    pub const A6061_T6: Strength = Strength::AluminumF(185.0);
}
