//! Midnight theme tokens for the Cortex TUI
//!
//! Content carries opaque color tags (`bg-green-500`, `text-blue-400`); this
//! module maps their color family onto the terminal palette.
//!
//! # Color Palette
//! - **Accent**: Sky blue (focus, active page, active tab)
//! - **Positive**: Emerald (completed, healthy, compliant)
//! - **Negative**: Rose (failed, critical)
//! - **Warning**: Amber (running, in progress, warnings)
//! - **Neutral**: Violet (secondary highlights)
//! - **Muted**: Slate (secondary text, hints)

use ratatui::style::{Color, Modifier, Style};

use cortex_core::catalog::{ColorTag, ComplianceStatus, StageStatus, Trend};

/// Midnight theme for the Cortex TUI
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

impl Theme {
    pub const fn midnight() -> Self {
        Self {
            background: Color::Rgb(15, 23, 42),
            accent: Color::Rgb(56, 189, 248),
            positive: Color::Rgb(52, 211, 153),
            negative: Color::Rgb(251, 113, 133),
            warning: Color::Rgb(251, 191, 36),
            neutral: Color::Rgb(167, 139, 250),
            muted: Color::Rgb(100, 116, 139),
            text_primary: Color::White,
            text_secondary: Color::Rgb(203, 213, 225),
        }
    }

    /// Map a content color tag onto the palette by its color family.
    pub fn tag_color(&self, tag: ColorTag) -> Color {
        tag.0
            .split('-')
            .find_map(|part| {
                FAMILIES
                    .iter()
                    .find(|(name, _)| *name == part)
                    .map(|(_, color)| *color)
            })
            .unwrap_or(self.text_secondary)
    }

    pub fn stage_color(&self, status: StageStatus) -> Color {
        match status {
            StageStatus::Completed => self.positive,
            StageStatus::Running => self.warning,
            StageStatus::Failed => self.negative,
            StageStatus::Pending => self.muted,
        }
    }

    pub fn compliance_color(&self, status: ComplianceStatus) -> Color {
        match status {
            ComplianceStatus::Compliant => self.positive,
            ComplianceStatus::InProgress => self.warning,
            ComplianceStatus::Ready => self.accent,
        }
    }

    pub fn trend_color(&self, trend: Trend) -> Color {
        match trend {
            Trend::Up => self.positive,
            Trend::Down => self.negative,
            Trend::Stable => self.muted,
        }
    }
}

const FAMILIES: [(&str, Color); 8] = [
    ("green", Color::Rgb(34, 197, 94)),
    ("blue", Color::Rgb(59, 130, 246)),
    ("purple", Color::Rgb(168, 85, 247)),
    ("red", Color::Rgb(239, 68, 68)),
    ("yellow", Color::Rgb(234, 179, 8)),
    ("indigo", Color::Rgb(99, 102, 241)),
    ("orange", Color::Rgb(249, 115, 22)),
    ("gray", Color::Rgb(107, 114, 128)),
];

const THEME: Theme = Theme::midnight();

pub fn palette() -> Theme {
    THEME
}

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(THEME.positive)
}

pub fn negative() -> Style {
    Style::default().fg(THEME.negative)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn neutral() -> Style {
    Style::default().fg(THEME.neutral)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

pub fn heading() -> Style {
    text().add_modifier(Modifier::BOLD)
}

pub fn tag(tag: ColorTag) -> Style {
    Style::default().fg(THEME.tag_color(tag))
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Highlight for the focused row or tab.
pub fn selected() -> Style {
    Style::default()
        .fg(THEME.background)
        .bg(THEME.accent)
        .add_modifier(Modifier::BOLD)
}

/// Glyph for an icon id. Unknown ids get a neutral bullet.
pub fn icon(id: cortex_core::catalog::IconId) -> &'static str {
    match id.0 {
        "home" => "⌂",
        "layers" => "≡",
        "shield" | "lock" => "◈",
        "git-branch" => "⎇",
        "monitor" | "eye" => "◉",
        "settings" => "⚙",
        "server" | "database" => "▤",
        "cpu" => "▣",
        "zap" | "rocket" => "↯",
        "network" => "⇄",
        "activity" | "bar-chart" | "trending-up" => "▲",
        "check-circle" => "✓",
        "alert-circle" => "!",
        "clock" => "◷",
        "refresh-cw" => "↻",
        "package" | "file-text" => "▧",
        "users" => "☺",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_family_mapping() {
        let theme = Theme::default();
        assert_eq!(theme.tag_color(ColorTag("bg-green-500")), Color::Rgb(34, 197, 94));
        assert_eq!(theme.tag_color(ColorTag("text-green-400")), Color::Rgb(34, 197, 94));
        assert_eq!(theme.tag_color(ColorTag("border-l-red-500")), Color::Rgb(239, 68, 68));
        assert_eq!(theme.tag_color(ColorTag("bg-teal-500")), theme.text_secondary);
    }

    #[test]
    fn stage_colors() {
        let theme = Theme::default();
        assert_eq!(theme.stage_color(StageStatus::Completed), theme.positive);
        assert_eq!(theme.stage_color(StageStatus::Running), theme.warning);
        assert_eq!(theme.stage_color(StageStatus::Failed), theme.negative);
        assert_eq!(theme.stage_color(StageStatus::Pending), theme.muted);
    }

    #[test]
    fn unknown_icon_falls_back() {
        use cortex_core::catalog::IconId;
        assert_eq!(icon(IconId("shield")), "◈");
        assert_eq!(icon(IconId("sparkles")), "•");
    }
}
