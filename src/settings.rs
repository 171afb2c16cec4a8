//! Output preferences shared by every formatter invocation.

/// Order in which a module's inputs are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Alphabetical by input name.
    Name,
    /// Required inputs first, each block alphabetical.
    RequiredFirst,
}

/// Formatter settings. One value is built per run and used identically for
/// every render call.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    /// Colorize output where the format supports it (pretty only).
    pub show_color: bool,
    pub sort: SortOrder,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            show_color: true,
            sort: SortOrder::Name,
        }
    }
}
