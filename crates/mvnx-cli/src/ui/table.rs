//! Search results table.

use comfy_table::presets::NOTHING;
use comfy_table::{Cell, ContentArrangement, Table};
use mvnx_schema::ArtifactCandidate;

/// Column headers of the search table.
pub const HEADERS: [&str; 3] = ["GROUP ID", "ARTIFACT ID", "LATEST VERSION"];

/// Build a borderless table with one row per candidate.
pub fn candidate_table(candidates: &[ArtifactCandidate]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(HEADERS);

    for candidate in candidates {
        table.add_row(vec![
            Cell::new(candidate.group_id()),
            Cell::new(candidate.artifact_id()),
            Cell::new(candidate.latest_version()),
        ]);
    }
    table
}
