//! Flower palette and fixed scene colors.
//!
//! 32 visually distinct flower colors, indexed directly by the 5-bit
//! header field — no modulo needed.

/// Flower colors, one per 5-bit color index.
pub const PALETTE: [&str; 32] = [
    "#A846A0", "#7D4FFF", "#8A71CE", "#FF7FED",
    "#FFB766", "#FFD800", "#FFE14F", "#FF7A28",
    "#5EF1FF", "#FFECEA", "#FF877C", "#7C87FF",
    "#FF5E5E", "#FCFF54", "#DACCFF", "#8EC8FF",
    "#FFFFFF", "#FF99A1", "#FF3DAE", "#D756FF",
    "#FF757E", "#758EFF", "#9F4CFF", "#87FFFD",
    "#3D91FF", "#2172FF", "#FF26CC", "#FF7FEB",
    "#EE9EFF", "#FFC587", "#F9D8FF", "#FFF2CE",
];

/// Stem color the renderer returns to after drawing a flower dot.
pub const STEM_COLOR: &str = "#4C8033";

/// Background color of the rendering surface.
pub const BG_COLOR: &str = "#E6D4B2";
