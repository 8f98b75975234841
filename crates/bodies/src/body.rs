//! Planets and moons.

use std::fmt;

use stargen_core::units::solar_to_earth_masses;

use crate::atmosphere::Atmosphere;
use crate::list::BodyList;

/// Broad classification of a generated body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyKind {
    #[default]
    Unknown,
    Rock,
    Venusian,
    Terrestrial,
    Martian,
    Water,
    Ice,
    SubSubGasGiant,
    SubGasGiant,
    GasGiant,
    Asteroids,
    OneFace,
}

impl BodyKind {
    pub fn is_gaseous(self) -> bool {
        matches!(
            self,
            Self::GasGiant | Self::SubGasGiant | Self::SubSubGasGiant
        )
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unknown => "Unknown",
            Self::Rock => "Rock",
            Self::Venusian => "Venusian",
            Self::Terrestrial => "Terrestrial",
            Self::Martian => "Martian",
            Self::Water => "Water",
            Self::Ice => "Ice",
            Self::SubSubGasGiant => "Gas Dwarf",
            Self::SubGasGiant => "Sub-Jovian",
            Self::GasGiant => "Jovian",
            Self::Asteroids => "Asteroids",
            Self::OneFace => "1-Face",
        };
        f.write_str(label)
    }
}

/// A planet or moon. Moons share this shape and may, in principle, carry
/// moons of their own.
///
/// `Clone` and `PartialEq` go through [`BodyList`], which walks the moon tree
/// without recursing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CelestialBody {
    /// 1-based position in the owning list.
    pub number: u32,
    /// Semi-major axis (AU). For moons, relative to the host planet.
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    /// Axial tilt (degrees).
    pub axial_tilt_deg: f64,
    /// Dust mass (solar masses).
    pub dust_mass: f64,
    /// Gas mass (solar masses).
    pub gas_mass: f64,
    pub kind: BodyKind,
    pub radius_km: f64,
    /// Bulk density (g/cm³).
    pub density_g_cm3: f64,
    /// Mean surface temperature (K).
    pub surface_temperature_k: f64,
    /// Surface pressure (millibars).
    pub surface_pressure_mb: f64,
    /// Fraction of the surface covered by liquid water.
    pub hydrosphere: f64,
    pub cloud_cover: f64,
    pub ice_cover: f64,
    pub minor_moons: u32,
    pub atmosphere: Option<Atmosphere>,
    pub moons: BodyList,
}

impl CelestialBody {
    /// Zero-valued body with no atmosphere and no moons.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orbit(mut self, semi_major_axis_au: f64, eccentricity: f64) -> Self {
        self.semi_major_axis_au = semi_major_axis_au;
        self.eccentricity = eccentricity;
        self
    }

    pub fn with_mass(mut self, dust_mass: f64, gas_mass: f64) -> Self {
        self.dust_mass = dust_mass;
        self.gas_mass = gas_mass;
        self
    }

    pub fn with_atmosphere(mut self, atmosphere: Atmosphere) -> Self {
        self.atmosphere = Some(atmosphere);
        self
    }

    pub fn with_moon(mut self, moon: CelestialBody) -> Self {
        self.moons.push(moon);
        self
    }

    /// Total mass (solar masses).
    pub fn mass(&self) -> f64 {
        self.dust_mass + self.gas_mass
    }

    pub fn mass_earth(&self) -> f64 {
        solar_to_earth_masses(self.mass())
    }

    pub fn is_gas_giant(&self) -> bool {
        self.kind.is_gaseous()
    }

    pub fn has_atmosphere(&self) -> bool {
        self.atmosphere.is_some()
    }

    /// Copy of this body with an empty moon list.
    pub(crate) fn without_moons(&self) -> Self {
        Self {
            number: self.number,
            semi_major_axis_au: self.semi_major_axis_au,
            eccentricity: self.eccentricity,
            axial_tilt_deg: self.axial_tilt_deg,
            dust_mass: self.dust_mass,
            gas_mass: self.gas_mass,
            kind: self.kind,
            radius_km: self.radius_km,
            density_g_cm3: self.density_g_cm3,
            surface_temperature_k: self.surface_temperature_k,
            surface_pressure_mb: self.surface_pressure_mb,
            hydrosphere: self.hydrosphere,
            cloud_cover: self.cloud_cover,
            ice_cover: self.ice_cover,
            minor_moons: self.minor_moons,
            atmosphere: self.atmosphere.clone(),
            moons: BodyList::new(),
        }
    }

    /// Field-wise equality ignoring the moon lists.
    pub(crate) fn same_fields(&self, other: &Self) -> bool {
        self.number == other.number
            && self.semi_major_axis_au == other.semi_major_axis_au
            && self.eccentricity == other.eccentricity
            && self.axial_tilt_deg == other.axial_tilt_deg
            && self.dust_mass == other.dust_mass
            && self.gas_mass == other.gas_mass
            && self.kind == other.kind
            && self.radius_km == other.radius_km
            && self.density_g_cm3 == other.density_g_cm3
            && self.surface_temperature_k == other.surface_temperature_k
            && self.surface_pressure_mb == other.surface_pressure_mb
            && self.hydrosphere == other.hydrosphere
            && self.cloud_cover == other.cloud_cover
            && self.ice_cover == other.ice_cover
            && self.minor_moons == other.minor_moons
            && self.atmosphere == other.atmosphere
    }
}
