//! Core constants, unit conversions, and stellar relations for the stargen workspace.

/// Defaults applied when a generation request is initialised.
pub mod constants {
    /// Placeholder used for unnamed stars and systems.
    pub const DEFAULT_NAME: &str = "Unnamed";
    /// Display flag character used when none is supplied.
    pub const DEFAULT_FLAG_CHAR: char = '?';
    /// Default eccentricity coefficient for planetesimal orbits.
    pub const DEFAULT_ECCENTRICITY_COEFFICIENT: f64 = 0.077;
    /// Default inner planet factor (scales the innermost orbit by M^(1/3)).
    pub const DEFAULT_INNER_PLANET_FACTOR: f64 = 0.3;

    /// Earth masses per solar mass.
    pub const SUN_MASS_IN_EARTH_MASSES: f64 = 332_775.64;
    /// Mean Earth radius (km).
    pub const EARTH_RADIUS_KM: f64 = 6_371.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::SUN_MASS_IN_EARTH_MASSES;

    /// Convert solar masses to Earth masses.
    #[inline]
    pub fn solar_to_earth_masses(v: f64) -> f64 {
        v * SUN_MASS_IN_EARTH_MASSES
    }

    /// Convert Earth masses to solar masses.
    #[inline]
    pub fn earth_to_solar_masses(v: f64) -> f64 {
        v / SUN_MASS_IN_EARTH_MASSES
    }
}

/// Main-sequence relations used to fill in whichever of mass or luminosity is missing.
pub mod stellar {
    /// Luminosity (L☉) of a main-sequence star of the given mass (M☉).
    pub fn luminosity_from_mass(mass: f64) -> f64 {
        let n = if mass < 1.0 {
            1.75 * (mass - 0.1) + 3.325
        } else {
            0.5 * (2.0 - mass) + 4.4
        };
        mass.powf(n)
    }

    /// Approximate inverse of the mass-luminosity relation.
    pub fn mass_from_luminosity(luminosity: f64) -> f64 {
        luminosity.powf(0.25)
    }

    /// Radius (AU) at which an Earth-like planet receives Earth's insolation.
    #[inline]
    pub fn ecosphere_radius(luminosity: f64) -> f64 {
        luminosity.sqrt()
    }

    /// Snow line distance (AU).
    #[inline]
    pub fn snow_line(luminosity: f64) -> f64 {
        2.7 * luminosity.sqrt()
    }

    /// Main-sequence lifetime in years.
    #[inline]
    pub fn main_sequence_lifetime(mass: f64, luminosity: f64) -> f64 {
        1.0e10 * (mass / luminosity)
    }

    /// Outer edge of the dust disk (AU).
    #[inline]
    pub fn stellar_dust_limit(mass: f64) -> f64 {
        200.0 * mass.cbrt()
    }

    /// Innermost orbit allowed for a planet (AU).
    #[inline]
    pub fn innermost_planet(mass: f64, inner_planet_factor: f64) -> f64 {
        inner_planet_factor * mass.cbrt()
    }

    /// Outermost orbit allowed for a planet (AU).
    #[inline]
    pub fn outermost_planet(mass: f64) -> f64 {
        50.0 * mass.cbrt()
    }
}

#[cfg(test)]
mod tests {
    use super::stellar::*;

    #[test]
    fn solar_mass_has_solar_luminosity() {
        assert!((luminosity_from_mass(1.0) - 1.0).abs() < 1e-12);
        assert!((mass_from_luminosity(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn heavier_stars_are_brighter() {
        assert!(luminosity_from_mass(1.5) > luminosity_from_mass(1.0));
        assert!(luminosity_from_mass(0.5) < 1.0);
    }

    #[test]
    fn planet_limits_scale_with_mass() {
        assert!((innermost_planet(1.0, 0.3) - 0.3).abs() < 1e-12);
        assert!(outermost_planet(8.0) > outermost_planet(1.0));
        assert!((stellar_dust_limit(1.0) - 200.0).abs() < 1e-12);
    }
}
