use serde::Serialize;

/// Counters collected while assembling snapshots from a sample stream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssemblyReport {
    pub samples_accepted: usize,
    pub skipped_lines: usize,
    pub snapshots_emitted: usize,
    pub interpolated_cells: usize,
    pub default_filled_cells: usize,
    pub last_snapshot_complete: bool,
}

impl AssemblyReport {
    /// Generate a human readable summary
    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Assembly Report ===\n");
        summary.push_str(&format!("Samples accepted: {}\n", self.samples_accepted));
        summary.push_str(&format!("Lines skipped: {}\n", self.skipped_lines));
        summary.push_str(&format!("Snapshots emitted: {}\n", self.snapshots_emitted));
        summary.push_str(&format!(
            "Interpolated cells: {}\n",
            self.interpolated_cells
        ));
        summary.push_str(&format!(
            "Default-filled cells: {}\n",
            self.default_filled_cells
        ));

        if self.snapshots_emitted > 0 && !self.last_snapshot_complete {
            summary.push_str("Last snapshot is partial (stream ended before the final cell)\n");
        }

        summary
    }
}
