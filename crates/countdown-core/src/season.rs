//! Season tables: month-to-season mapping, markers, and color themes.
//!
//! The mapping is total over months 1-12; December gets its own festive
//! entry separate from winter.

/// UI color pair for a time of year.
///
/// `primary_color` is meant for the page background, `secondary_color` for
/// borders and buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonTheme {
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
}

/// Time of year, selected by calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    /// January-February.
    Winter,
    /// March-May.
    Spring,
    /// June-August.
    Summer,
    /// September-November.
    Autumn,
    /// December stands apart from winter for the countdown theme.
    December,
}

impl Season {
    /// Map a 1-based calendar month to its season.
    ///
    /// Months outside 1-12 cannot come from a valid date; they fall into
    /// the December arm to keep the function total.
    pub fn from_month(month: u32) -> Self {
        match month {
            1..=2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::December,
        }
    }

    /// Short symbolic marker prefixed to the month label.
    pub fn marker(&self) -> &'static str {
        match self {
            Season::Winter => "\u{2744}\u{fe0f}",  // ❄️
            Season::Spring => "\u{1f338}",         // 🌸
            Season::Summer => "\u{2600}\u{fe0f}",  // ☀️
            Season::Autumn => "\u{1f342}",         // 🍂
            Season::December => "\u{1f384}",       // 🎄
        }
    }

    /// Color theme for this time of year.
    pub fn theme(&self) -> SeasonTheme {
        match self {
            Season::Winter => SeasonTheme {
                primary_color: "#03cffc",
                secondary_color: "#02a9cf",
            },
            Season::Spring => SeasonTheme {
                primary_color: "#03fca9",
                secondary_color: "#02cf8a",
            },
            Season::Summer => SeasonTheme {
                primary_color: "#6cff03",
                secondary_color: "#58d102",
            },
            Season::Autumn => SeasonTheme {
                primary_color: "#ff8903",
                secondary_color: "#db7704",
            },
            Season::December => SeasonTheme {
                primary_color: "#73d5ff",
                secondary_color: "#67bce0",
            },
        }
    }
}
