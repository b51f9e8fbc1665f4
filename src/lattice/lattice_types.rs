use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LatticeError;

/// The supported 2D lattice types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LatticeType2D {
    Square,
    Rectangular,
    Hexagonal,
}

/// The supported 3D lattice types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LatticeType3D {
    Cubic,
    Fcc,
    Bcc,
}

/// Any supported lattice type, as parsed from a caller-facing tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatticeTag {
    TwoD(LatticeType2D),
    ThreeD(LatticeType3D),
}

impl LatticeType2D {
    /// Display name for info output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Square => "Square",
            Self::Rectangular => "Rectangular",
            Self::Hexagonal => "Hexagonal",
        }
    }
}

impl LatticeType3D {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cubic => "Simple cubic",
            Self::Fcc => "Face-centered cubic",
            Self::Bcc => "Body-centered cubic",
        }
    }
}

impl fmt::Display for LatticeType2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for LatticeType3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LatticeType2D {
    type Err = LatticeError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "square" => Ok(Self::Square),
            "rectangular" => Ok(Self::Rectangular),
            "hexagonal" => Ok(Self::Hexagonal),
            _ => Err(LatticeError::InvalidLatticeType(tag.to_string())),
        }
    }
}

impl FromStr for LatticeType3D {
    type Err = LatticeError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "cubic" => Ok(Self::Cubic),
            "fcc" => Ok(Self::Fcc),
            "bcc" => Ok(Self::Bcc),
            _ => Err(LatticeError::InvalidLatticeType(tag.to_string())),
        }
    }
}

impl FromStr for LatticeTag {
    type Err = LatticeError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        if let Ok(t) = LatticeType2D::from_str(tag) {
            return Ok(Self::TwoD(t));
        }
        if let Ok(t) = LatticeType3D::from_str(tag) {
            return Ok(Self::ThreeD(t));
        }
        Err(LatticeError::InvalidLatticeType(tag.to_string()))
    }
}
