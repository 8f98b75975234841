//! Host star record supplied by the caller.

use stargen_core::constants::DEFAULT_NAME;

use crate::release::ReleaseReport;

/// Caller-supplied star description.
///
/// A zero mass means "derive from luminosity" and a zero luminosity means
/// "derive from mass"; generation rejects a star where both are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub name: Option<String>,
    /// Mass in solar masses.
    pub mass: f64,
    /// Luminosity in solar luminosities.
    pub luminosity: f64,
}

impl Star {
    /// Zero-valued star carrying the placeholder name.
    pub fn new() -> Self {
        Self {
            name: Some(DEFAULT_NAME.to_string()),
            mass: 0.0,
            luminosity: 0.0,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_luminosity(mut self, luminosity: f64) -> Self {
        self.luminosity = luminosity;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// True unless both mass and luminosity are exactly zero.
    pub fn has_mass_or_luminosity(&self) -> bool {
        !(self.mass == 0.0 && self.luminosity == 0.0)
    }

    /// Drop the owned name. Safe to call repeatedly.
    pub fn release(&mut self) -> ReleaseReport {
        ReleaseReport {
            names: usize::from(self.name.take().is_some()),
            ..ReleaseReport::default()
        }
    }
}

impl Default for Star {
    fn default() -> Self {
        Self::new()
    }
}
