//! Atmosphere leaf records attached to bodies.

/// A single gas in an atmosphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gas {
    pub atomic_number: u32,
    /// Partial pressure at the surface (millibars).
    pub surface_pressure_mb: f64,
}

/// Gas composition of a body's atmosphere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Atmosphere {
    pub gases: Vec<Gas>,
}

impl Atmosphere {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gas(mut self, atomic_number: u32, surface_pressure_mb: f64) -> Self {
        self.gases.push(Gas {
            atomic_number,
            surface_pressure_mb,
        });
        self
    }

    /// Sum of partial pressures (millibars).
    pub fn total_pressure_mb(&self) -> f64 {
        self.gases.iter().map(|g| g.surface_pressure_mb).sum()
    }
}
