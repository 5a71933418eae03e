/// Widest table the renderer produces unless told otherwise.
pub const DEFAULT_MAX_WIDTH: usize = 160;

/// Narrowest width a table is squeezed to.
pub const MIN_WIDTH: usize = 40;

/// Configuration for report rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    /// Maximum width of a rendered table, in characters.
    pub max_width: usize,
    /// Whether to emit ANSI colour codes.
    pub color: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            color: true,
        }
    }
}

impl ReportConfig {
    /// Resolve the configuration from command-line overrides and the
    /// environment (`COLUMNS`, `NO_COLOR`).
    pub fn from_env(width: Option<usize>, no_color: bool) -> Self {
        let max_width = width.unwrap_or_else(|| {
            terminal_width(std::env::var("COLUMNS").ok().as_deref())
        });
        let color = !no_color && std::env::var_os("NO_COLOR").is_none();
        Self {
            max_width: max_width.max(MIN_WIDTH),
            color,
        }
    }
}

/// Width to use given the value of `$COLUMNS`: the smaller of the terminal
/// and [`DEFAULT_MAX_WIDTH`].
pub fn terminal_width(columns: Option<&str>) -> usize {
    columns
        .and_then(|c| c.trim().parse::<usize>().ok())
        .filter(|&c| c > 0)
        .map_or(DEFAULT_MAX_WIDTH, |c| c.min(DEFAULT_MAX_WIDTH))
}
