use crate::coord_seq::{CoordDimensions, CoordSeq, CoordSeqRead};
use crate::errors::Result;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoordinateZ {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<(f64, f64)> for Coordinate {
    fn from(coord: (f64, f64)) -> Self {
        Coordinate {
            x: coord.0,
            y: coord.1,
        }
    }
}

impl From<(f64, f64, f64)> for CoordinateZ {
    fn from(coord: (f64, f64, f64)) -> Self {
        CoordinateZ {
            x: coord.0,
            y: coord.1,
            z: coord.2,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for CoordinateZ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y }
    }
}

impl CoordinateZ {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        CoordinateZ { x, y, z }
    }
}

/// A coordinate value that can be moved in and out of a coordinate sequence.
pub trait CoordinateType: Copy {
    const DIMENSIONS: CoordDimensions;

    /// Read the coordinate at `index`; out-of-range ordinates read as 0.0.
    fn read<'c, S: CoordSeqRead<'c> + ?Sized>(seq: &S, index: usize) -> Self;

    fn write(&self, seq: &mut CoordSeq<'_>, index: usize) -> Result<()>;
}

impl CoordinateType for Coordinate {
    const DIMENSIONS: CoordDimensions = CoordDimensions::TwoD;

    fn read<'c, S: CoordSeqRead<'c> + ?Sized>(seq: &S, index: usize) -> Self {
        Coordinate::new(seq.x(index), seq.y(index))
    }

    fn write(&self, seq: &mut CoordSeq<'_>, index: usize) -> Result<()> {
        seq.set_x(index, self.x)?;
        seq.set_y(index, self.y)
    }
}

impl CoordinateType for CoordinateZ {
    const DIMENSIONS: CoordDimensions = CoordDimensions::ThreeD;

    fn read<'c, S: CoordSeqRead<'c> + ?Sized>(seq: &S, index: usize) -> Self {
        CoordinateZ::new(seq.x(index), seq.y(index), seq.z(index))
    }

    fn write(&self, seq: &mut CoordSeq<'_>, index: usize) -> Result<()> {
        seq.set_x(index, self.x)?;
        seq.set_y(index, self.y)?;
        seq.set_z(index, self.z)
    }
}
