//! Dependency listing output.

use super::theme::{Layout, Theme};
use crossterm::style::Stylize;
use mvnx_schema::Dependency;
use std::path::Path;

/// Print list header: a subtle section title, no column headers
pub fn print_list_header(pom: &Path) {
    println!();
    println!("  {}", format!("Dependencies in {}", pom.display()).dark_grey());
    println!();
}

/// Print a single dependency row
pub fn print_list_row(theme: &Theme, dep: &Dependency) {
    let (coordinates, version, scope) = columns(&theme.layout, dep);
    let line = format!(
        "  {} {} {}",
        coordinates.with(theme.colors.coordinates),
        version.with(theme.colors.version),
        scope.with(theme.colors.secondary)
    );
    println!("{}", line.trim_end());
}

/// Unstyled row, as printed by [`print_list_row`] minus the colors.
pub fn format_row(layout: &Layout, dep: &Dependency) -> String {
    let (coordinates, version, scope) = columns(layout, dep);
    format!("  {coordinates} {version} {scope}")
        .trim_end()
        .to_string()
}

/// Print list footer: dependency count
pub fn print_list_footer(count: usize) {
    println!();
    let msg = format!("{count} dependenc{}", if count == 1 { "y" } else { "ies" });
    println!("  {}", msg.dark_grey());
}

fn columns(layout: &Layout, dep: &Dependency) -> (String, String, String) {
    let coordinates = format!(
        "{: <width$}",
        dep.coordinates(),
        width = layout.coordinates_width
    );
    let version = format!("{: <width$}", dep.version(), width = layout.version_width);
    let scope = if dep.scope().is_default() {
        String::new()
    } else {
        dep.scope().to_string()
    };
    (coordinates, version, scope)
}
