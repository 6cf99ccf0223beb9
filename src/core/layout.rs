use glam::Vec3;
use thiserror::Error;

/// Row letters for seat labels. Layouts are capped at one letter per row.
pub const ROW_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Elevation is measured down from a fixed top row, not from the configured
/// row count; the front row of the default layout sits at `0.5 * 11 * scale`.
pub const ROW_ELEVATION_TOP: f32 = 11.0;
/// Vertical drop per row, as a fraction of `chair_scale`.
pub const ROW_ELEVATION_STEP: f32 = 0.5;
/// Depth gained per row, as a multiple of `chair_scale`.
pub const ROW_DEPTH_STEP: f32 = 1.5;

/// Height of the depth plane every seat aims at, as a fraction of `chair_scale`.
pub const FACING_HEIGHT: f32 = 0.6;
/// Depth of the plane every seat aims at, as a fraction of `chair_scale`.
pub const FACING_DEPTH: f32 = -0.355;

/// Grid dimensions and sizing for the auditorium.
///
/// Fields:
/// - `rows`: number of seat rows (stadium-stepped, at most 26)
/// - `seats_per_row`: seats in every row
/// - `chair_scale`: uniform scale applied to chair geometry and spacing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    pub rows: usize,
    pub seats_per_row: usize,
    pub chair_scale: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            rows: 11,
            seats_per_row: 25,
            chair_scale: 0.2,
        }
    }
}

/// One seat of the generated grid. Immutable after generation.
///
/// Fields:
/// - `id`: unique `"row-col"` key
/// - `position`: world-space placement of the chair
/// - `facing_target`: point the seat nominally aims at (shared depth plane
///   for all rows; the original camera-follow feature was never finished and
///   the constant plane is kept on purpose)
/// - `label`: human-readable seat code, row letter plus column index
#[derive(Clone, Debug, PartialEq)]
pub struct SeatDescriptor {
    pub id: String,
    pub position: Vec3,
    pub facing_target: Vec3,
    pub label: String,
}

/// Rejected layout configurations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// More rows than row letters; labels would collide.
    #[error("layout has {rows} rows but labels support at most {max}")]
    TooManyRows { rows: usize, max: usize },
}

/// Generate the seat grid in row-major order, one descriptor per
/// `(row, col)` pair.
///
/// Deterministic: identical params always produce identical descriptors.
pub fn generate_seats(params: &LayoutParams) -> Result<Vec<SeatDescriptor>, LayoutError> {
    if params.rows > ROW_LETTERS.len() {
        return Err(LayoutError::TooManyRows {
            rows: params.rows,
            max: ROW_LETTERS.len(),
        });
    }
    let mut seats = Vec::with_capacity(params.rows * params.seats_per_row);
    for row in 0..params.rows {
        for col in 0..params.seats_per_row {
            seats.push(SeatDescriptor {
                id: format!("{row}-{col}"),
                position: seat_position(row, col, params),
                facing_target: seat_facing_target(row, col, params),
                label: seat_label(row, col),
            });
        }
    }
    Ok(seats)
}

/// World position of one seat.
///
/// The horizontal mapping centers columns around the middle of the row and
/// walks left as the column index grows; rows rise toward the back wall and
/// recede linearly in depth.
#[inline]
pub fn seat_position(row: usize, col: usize, params: &LayoutParams) -> Vec3 {
    let s = params.chair_scale;
    let half = (params.seats_per_row / 2) as f32;
    Vec3::new(
        -(half - col as f32) * s,
        ROW_ELEVATION_STEP * (ROW_ELEVATION_TOP - row as f32) * s,
        row as f32 * ROW_DEPTH_STEP * s,
    )
}

/// Point the seat aims at: same x as the seat, fixed height and depth for
/// every row.
#[inline]
pub fn seat_facing_target(row: usize, col: usize, params: &LayoutParams) -> Vec3 {
    let s = params.chair_scale;
    Vec3::new(
        seat_position(row, col, params).x,
        FACING_HEIGHT * s,
        FACING_DEPTH * s,
    )
}

/// Seat code, e.g. `"A0"` for the front-left seat.
#[inline]
pub fn seat_label(row: usize, col: usize) -> String {
    format!("{}{}", ROW_LETTERS[row % ROW_LETTERS.len()] as char, col)
}
