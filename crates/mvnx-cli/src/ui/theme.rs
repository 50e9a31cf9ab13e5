//! UI Theme - Design system constants

use crossterm::style::Color;

/// Default theme for mvnx output
#[derive(Debug, Clone, Default)]
pub struct Theme {
    /// Colors for different UI elements
    pub colors: ColorScheme,
    /// Status icons
    pub icons: Icons,
    /// Column widths for plain listings
    pub layout: Layout,
}

/// Color scheme for UI elements
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// `groupId:artifactId` coordinates
    pub coordinates: Color,
    /// Version numbers
    pub version: Color,
    /// Scopes and secondary info
    pub secondary: Color,
    /// Success states
    pub success: Color,
    /// Informational lines
    pub info: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            coordinates: Color::Cyan,
            version: Color::White,
            secondary: Color::DarkGrey,
            success: Color::Green,
            info: Color::Blue,
        }
    }
}

/// Status icons for different states
#[derive(Debug, Clone)]
pub struct Icons {
    /// Success/completed state (✓)
    pub success: &'static str,
    /// Info/Tip state (ℹ)
    pub info: &'static str,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            success: "✓",
            info: "ℹ",
        }
    }
}

/// Minimum column widths for the dependency listing
#[derive(Debug, Clone)]
pub struct Layout {
    /// Width of the `groupId:artifactId` column
    pub coordinates_width: usize,
    /// Width of the version column
    pub version_width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            coordinates_width: 40,
            version_width: 14,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults() {
        let theme = Theme::default();
        assert_eq!(theme.icons.success, "✓");
        assert_eq!(theme.icons.info, "ℹ");
        assert_eq!(theme.colors.success, Color::Green);
        assert!(theme.layout.coordinates_width > theme.layout.version_width);
    }
}
