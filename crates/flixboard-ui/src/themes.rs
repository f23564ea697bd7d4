use ratatui::style::{Color, Modifier, Style};

/// Number of distinct series colours available for chart datasets.
pub const SERIES_COLORS: usize = 8;

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned as the safe
/// default.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Complete theme definition carrying all UI styles used by the dashboard.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    pub header_sparkle: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub bold: Style,
    pub label: Style,
    pub value: Style,

    // ── Status ───────────────────────────────────────────────────────────────
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,

    // ── Charts ───────────────────────────────────────────────────────────────
    /// Axis lines and tick labels.
    pub axis: Style,
    /// Single-series lines (price spread, quarterly trend).
    pub line_primary: Style,
    /// Positive signed values.
    pub positive: Style,
    /// Negative signed values.
    pub negative: Style,
    /// Categorical series palette, cycled per genre / rating.
    pub series: [Style; SERIES_COLORS],

    // ── Table ────────────────────────────────────────────────────────────────
    pub table_header: Style,
    pub table_border: Style,
    pub table_row: Style,
    pub table_row_alt: Style,
    pub table_total: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            header_sparkle: Style::default().fg(Color::Yellow),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Cyan),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            axis: Style::default().fg(Color::Gray),
            line_primary: Style::default().fg(Color::Cyan),
            positive: Style::default().fg(Color::Green),
            negative: Style::default().fg(Color::Red),
            series: [
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Magenta),
                Style::default().fg(Color::Green),
                Style::default().fg(Color::Yellow),
                Style::default().fg(Color::Blue),
                Style::default().fg(Color::Red),
                Style::default().fg(Color::LightGreen),
                Style::default().fg(Color::LightBlue),
            ],

            table_header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
            table_total: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Light-background terminal theme.
    ///
    /// Uses dark colours for text so that content remains legible against a
    /// white/light-grey terminal canvas.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            header_sparkle: Style::default().fg(Color::Magenta),
            separator: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            bold: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Blue),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            axis: Style::default().fg(Color::DarkGray),
            line_primary: Style::default().fg(Color::Blue),
            positive: Style::default().fg(Color::Green),
            negative: Style::default().fg(Color::Red),
            series: [
                Style::default().fg(Color::Blue),
                Style::default().fg(Color::Magenta),
                Style::default().fg(Color::Green),
                Style::default().fg(Color::Yellow),
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Red),
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::LightMagenta),
            ],

            table_header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::Gray),
            table_row: Style::default().fg(Color::Black),
            table_row_alt: Style::default().fg(Color::DarkGray),
            table_total: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Classic terminal theme using only the basic 8-colour ANSI palette.
    ///
    /// Avoids bold modifiers to maintain a retro aesthetic and maximise
    /// compatibility with minimal terminal emulators.
    pub fn classic() -> Self {
        Self {
            header: Style::default().fg(Color::Red),
            header_sparkle: Style::default().fg(Color::White),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default().fg(Color::White),
            label: Style::default().fg(Color::Gray),
            value: Style::default().fg(Color::White),

            info: Style::default().fg(Color::Cyan),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            axis: Style::default().fg(Color::White),
            line_primary: Style::default().fg(Color::Cyan),
            positive: Style::default().fg(Color::Green),
            negative: Style::default().fg(Color::Red),
            series: [
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Magenta),
                Style::default().fg(Color::Green),
                Style::default().fg(Color::Yellow),
                Style::default().fg(Color::Blue),
                Style::default().fg(Color::Red),
                Style::default().fg(Color::White),
                Style::default().fg(Color::Gray),
            ],

            table_header: Style::default().fg(Color::Cyan),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
            table_total: Style::default().fg(Color::Yellow),
        }
    }

    /// Choose a theme automatically based on the detected terminal background.
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Construct a theme by name.  Falls back to `auto_detect` for unknown
    /// names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => Self::auto_detect(),
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Series colour for the `idx`-th category, cycling past the palette end.
    pub fn series_style(&self, idx: usize) -> Style {
        self.series[idx % self.series.len()]
    }

    /// Style a signed value: `positive` for `>= 0`, `negative` otherwise.
    pub fn signed_style(&self, value: f64) -> Style {
        if value < 0.0 {
            self.negative
        } else {
            self.positive
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
