use std::fmt::{Display, Formatter};

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Right-angle rotation applied to a design before it is placed.
/// Serialized as the number of degrees (`0` or `90`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
}

impl Rotation {
    pub const ALL: [Rotation; 2] = [Rotation::Deg0, Rotation::Deg90];

    /// Footprint (width, height) of a `width` x `height` design under this rotation.
    #[inline(always)]
    pub fn apply(self, width: f64, height: f64) -> (f64, f64) {
        match self {
            Rotation::Deg0 => (width, height),
            Rotation::Deg90 => (height, width),
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
        }
    }

    pub fn is_rotated(self) -> bool {
        self == Rotation::Deg90
    }
}

impl From<Rotation> for u16 {
    fn from(r: Rotation) -> Self {
        r.degrees()
    }
}

impl TryFrom<u16> for Rotation {
    type Error = anyhow::Error;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            _ => bail!("unsupported rotation: {degrees}°, only 0° and 90° are allowed"),
        }
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
