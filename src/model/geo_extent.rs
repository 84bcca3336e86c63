use std::fmt;

/// A geographic bounding box in decimal degrees.
///
/// An extent only exists when all four bounds were read from the document;
/// there are no sentinel or zero-filled bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoExtent {
    east: f64,
    north: f64,
    south: f64,
    west: f64,
}

impl GeoExtent {
    /// Create a new `GeoExtent` from its easternmost longitude, northernmost latitude,
    /// southernmost latitude and westernmost longitude.
    pub fn new(east: f64, north: f64, south: f64, west: f64) -> Self {
        Self {
            east,
            north,
            south,
            west,
        }
    }

    pub fn east(&self) -> f64 {
        self.east
    }

    pub fn north(&self) -> f64 {
        self.north
    }

    pub fn south(&self) -> f64 {
        self.south
    }

    pub fn west(&self) -> f64 {
        self.west
    }

    /// An extent whose north equals its south and whose east equals its west
    /// describes a single location rather than an area.
    ///
    /// The comparison is exact.
    #[allow(clippy::float_cmp)]
    pub fn is_point(&self) -> bool {
        self.north == self.south && self.east == self.west
    }

    /// The box as `south west north east`, the ordering used by geo shapes.
    pub fn box_literal(&self) -> String {
        format!("{} {} {} {}", self.south, self.west, self.north, self.east)
    }
}

impl fmt::Display for GeoExtent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_point() {
            write!(f, "POINT ({} {})", self.west, self.south)
        } else {
            write!(
                f,
                "BOX (north: {}, south: {}, east: {}, west: {})",
                self.north, self.south, self.east, self.west
            )
        }
    }
}

/// Collects the four bounds of a bounding box while it is being read.
#[derive(Debug, Default)]
pub struct GeoExtentBuilder {
    pub east: Option<f64>,
    pub north: Option<f64>,
    pub south: Option<f64>,
    pub west: Option<f64>,
}

impl GeoExtentBuilder {
    /// Returns an extent only if every bound was observed.
    pub fn build(&self) -> Option<GeoExtent> {
        match (self.east, self.north, self.south, self.west) {
            (Some(east), Some(north), Some(south), Some(west)) => {
                Some(GeoExtent::new(east, north, south, west))
            }
            _ => None,
        }
    }
}
