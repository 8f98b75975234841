//! What a generator hands back.

use stargen_bodies::BodyList;

/// Host star properties after generation filled in whatever the caller left at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct StellarProfile {
    pub name: String,
    /// Solar masses.
    pub mass: f64,
    /// Solar luminosities.
    pub luminosity: f64,
    pub ecosphere_radius_au: f64,
    pub lifetime_years: f64,
    pub age_years: f64,
}

/// Result of a single generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSystem {
    pub stellar_profile: StellarProfile,
    /// Innermost-to-outermost planets.
    pub planets: BodyList,
}

impl GeneratedSystem {
    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    /// Moons at any depth below the planets.
    pub fn moon_count(&self) -> usize {
        self.planets.total_bodies() - self.planets.len()
    }
}
