//! Deterministic canvas and geographic placement.
//!
//! Placement is a pure function of an element's identity and the fixed
//! layout parameters; it does not depend on link topology. Identities map
//! onto a grid filled in boustrophedon order (odd rows mirrored) so that
//! consecutive identities stay visually adjacent. Once the grid's slots
//! are exhausted, positions wrap and repeat; that is accepted behavior,
//! not an error.

/// Grid bounds and step sizes for canvas placement, plus the fixed
/// geographic reference the canvas maps onto.
#[derive(Debug, Clone)]
pub struct LayoutParams {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
    pub x_step: u32,
    pub y_step: u32,
    pub lat_start: f64,
    pub lon_start: f64,
    /// Latitude decrease per grid row.
    pub lat_step: f64,
    /// Longitude increase per (mirrored) grid column.
    pub lon_step: f64,
    pub altitude: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            min_x: 100,
            min_y: 100,
            max_x: 900,
            max_y: 700,
            x_step: 100,
            y_step: 100,
            lat_start: 47.576,
            lon_start: -122.127,
            lat_step: 0.0005,
            lon_step: 0.0005,
            altitude: 2.0,
        }
    }
}

impl LayoutParams {
    /// Grid columns; degenerate bounds collapse to a single column.
    pub fn columns(&self) -> u32 {
        ((self.max_x - self.min_x) / self.x_step).max(1)
    }

    /// Grid rows; degenerate bounds collapse to a single row.
    pub fn rows(&self) -> u32 {
        ((self.max_y - self.min_y) / self.y_step).max(1)
    }

    /// Total distinct positions before wrap-around.
    pub fn slots(&self) -> u32 {
        self.columns() * self.rows()
    }
}

/// A computed element position. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: u32,
    pub y: u32,
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
}

/// Map an identity to its canvas and geographic position.
pub fn position_for(params: &LayoutParams, id: u32) -> Position {
    let columns = params.columns();
    let slot = id % params.slots();

    let row = slot / columns;
    let mut col = slot % columns;
    // Mirror odd rows so adjacent rows connect without long jumps.
    if row % 2 == 1 {
        col = columns - 1 - col;
    }

    Position {
        x: params.min_x + col * params.x_step,
        y: params.min_y + row * params.y_step,
        lat: params.lat_start - f64::from(row) * params.lat_step,
        lon: params.lon_start + f64::from(col) * params.lon_step,
        alt: params.altitude,
    }
}
