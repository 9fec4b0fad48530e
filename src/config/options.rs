// src/config/options.rs

/// The export documents this crate understands, one per entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DocKind {
    /// Player profile HTML → attribute ratings.
    Attributes,
    /// Player profile HTML → first/last/display name.
    Name,
    /// Player profile HTML → career history rows.
    History,
    /// Standings HTML → league table rows.
    League,
    /// Plain-text fixture list → win/loss/draw tally.
    Tally,
    /// Graphics `config.xml` → person id to portrait file stem.
    Facepack,
}

impl DocKind {
    pub fn title(&self) -> &'static str {
        match self {
            DocKind::Attributes => "Attributes",
            DocKind::Name => "Name",
            DocKind::History => "History",
            DocKind::League => "League",
            DocKind::Tally => "Tally",
            DocKind::Facepack => "Facepack",
        }
    }
}
