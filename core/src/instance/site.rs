use serde::{Deserialize, Serialize};
use std::fmt;

/// Equipment class of a candidate camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraType {
    Fixed,
    #[serde(rename = "PTZ")]
    Ptz,
    Thermal,
}

impl fmt::Display for CameraType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CameraType::Fixed => "fixed",
            CameraType::Ptz => "ptz",
            CameraType::Thermal => "thermal",
        };
        f.write_str(label)
    }
}

/// Viewing angle of a candidate camera, persisted as degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum ViewAngle {
    Deg90,
    Deg180,
    Deg270,
    Deg360,
}

impl TryFrom<u16> for ViewAngle {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            90 => Ok(ViewAngle::Deg90),
            180 => Ok(ViewAngle::Deg180),
            270 => Ok(ViewAngle::Deg270),
            360 => Ok(ViewAngle::Deg360),
            other => Err(format!("unsupported viewing angle {other}")),
        }
    }
}

impl From<ViewAngle> for u16 {
    fn from(angle: ViewAngle) -> Self {
        match angle {
            ViewAngle::Deg90 => 90,
            ViewAngle::Deg180 => 180,
            ViewAngle::Deg270 => 270,
            ViewAngle::Deg360 => 360,
        }
    }
}

/// A candidate installation location. Immutable once loaded; identified
/// by its index within the instance's camera sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSite {
    pub x: f64,
    pub y: f64,
    pub cost: f64,
    pub range: f64,
    pub angle: ViewAngle,
    pub kind: CameraType,
}

impl CameraSite {
    pub fn new(x: f64, y: f64, cost: f64, range: f64, angle: ViewAngle, kind: CameraType) -> Self {
        Self {
            x,
            y,
            cost,
            range,
            angle,
            kind,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
