//! Volume unit conversion through litres.

use std::fmt;
use std::str::FromStr;

use atelier_core::{AtelierError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeUnit {
    Litre,
    UsGallon,
    Millilitre,
    FluidOunce,
    Pint,
    Quart,
    Cup,
    Tablespoon,
    Teaspoon,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 9] = [
        VolumeUnit::Litre,
        VolumeUnit::UsGallon,
        VolumeUnit::Millilitre,
        VolumeUnit::FluidOunce,
        VolumeUnit::Pint,
        VolumeUnit::Quart,
        VolumeUnit::Cup,
        VolumeUnit::Tablespoon,
        VolumeUnit::Teaspoon,
    ];

    /// How many of this unit make one litre (US customary units).
    pub fn per_litre(self) -> f64 {
        match self {
            VolumeUnit::Litre => 1.0,
            VolumeUnit::UsGallon => 0.264172,
            VolumeUnit::Millilitre => 1000.0,
            VolumeUnit::FluidOunce => 33.814,
            VolumeUnit::Pint => 2.11338,
            VolumeUnit::Quart => 1.05669,
            VolumeUnit::Cup => 4.22675,
            VolumeUnit::Tablespoon => 67.628,
            VolumeUnit::Teaspoon => 202.884,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VolumeUnit::Litre => "litre",
            VolumeUnit::UsGallon => "us_gallon",
            VolumeUnit::Millilitre => "millilitre",
            VolumeUnit::FluidOunce => "fluid_ounce",
            VolumeUnit::Pint => "pint",
            VolumeUnit::Quart => "quart",
            VolumeUnit::Cup => "cup",
            VolumeUnit::Tablespoon => "tablespoon",
            VolumeUnit::Teaspoon => "teaspoon",
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::Litre => "l",
            VolumeUnit::UsGallon => "gal",
            VolumeUnit::Millilitre => "ml",
            VolumeUnit::FluidOunce => "fl_oz",
            VolumeUnit::Pint => "pt",
            VolumeUnit::Quart => "qt",
            VolumeUnit::Cup => "cup",
            VolumeUnit::Tablespoon => "tbsp",
            VolumeUnit::Teaspoon => "tsp",
        }
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VolumeUnit {
    type Err = AtelierError;

    /// Accepts the snake_case name or the short symbol, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        VolumeUnit::ALL
            .into_iter()
            .find(|u| {
                u.name().eq_ignore_ascii_case(wanted) || u.symbol().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| AtelierError::InvalidArgument(format!("unknown volume unit {s:?}")))
    }
}

pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> Result<f64> {
    if !value.is_finite() {
        return Err(AtelierError::InvalidArgument(format!(
            "volume must be finite, got {value}"
        )));
    }
    Ok(value / from.per_litre() * to.per_litre())
}
