//! Ranking, input, sizing, and styling constants.

/// Priority given to rows that match neither the code, the hex, nor the
/// nearest-color set.
pub const NO_MATCH_PRIORITY: u32 = 999;

/// Priority of a floss code typed into the hex field.
pub const CODE_MATCH_PRIORITY: u32 = 1;

/// Priority of an exact hex color match.
pub const HEX_MATCH_PRIORITY: u32 = 2;

/// Priority of the nearest catalog color; the n-th nearest gets this plus n.
pub const FIRST_CLOSE_PRIORITY: u32 = 3;

/// Default size of the nearest-color tier.
pub const DEFAULT_CLOSEST_COUNT: usize = 5;

/// Longest hex input accepted from the user (`#` plus six digits).
pub const MAX_HEX_INPUT_LEN: usize = 7;

/// Row height in the result list
pub const ROW_HEIGHT: f32 = 28.0;

/// Swatch edge length inside a row
pub const SWATCH_SIZE: f32 = 20.0;

/// Swatch edge length next to the hex input
pub const PREVIEW_SIZE: f32 = 28.0;

/// Border radius for swatches and inputs
pub const RADIUS: f32 = 4.0;

/// Gap between view elements
pub const GAP: f32 = 8.0;

/// Padding around the whole view
pub const PADDING: f32 = 8.0;

/// Floss code column width
pub const CODE_WIDTH: f32 = 56.0;

/// Color name column width
pub const NAME_WIDTH: f32 = 180.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 64.0;

/// Text search field width
pub const TEXT_INPUT_WIDTH: f32 = 160.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;
