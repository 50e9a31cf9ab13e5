//! Release stability rules for Maven version strings.

/// Markers that flag a snapshot, milestone or pre-release build.
///
/// Matching is a plain substring test on the lowercased version, so
/// `4.0.0-M2`, `2.0.0-beta.1` and `1.0.0.RC3` are all caught.
pub const UNSTABLE_MARKERS: [&str; 9] = [
    "-snapshot",
    "-alpha",
    "-beta",
    "-rc",
    "-m",
    ".alpha",
    ".beta",
    ".rc",
    ".m",
];

/// Returns `true` if `version` looks like a final release.
///
/// # Example
///
/// ```
/// use mvnx_schema::is_stable;
///
/// assert!(is_stable("1.2.3"));
/// assert!(!is_stable("1.0.0-SNAPSHOT"));
/// assert!(!is_stable("4.0.0-M2"));
/// ```
pub fn is_stable(version: &str) -> bool {
    let lower = version.to_lowercase();
    !UNSTABLE_MARKERS.iter().any(|marker| lower.contains(marker))
}
