//! Pattern addition report.

use gitig_merge::ops::PatternsOutcome;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct PatternsReport<'a> {
    pub outcome: &'a PatternsOutcome,
}

impl Report for PatternsReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        let outcome = self.outcome;

        if outcome.has_additions() {
            if outcome.dry_run {
                out.section(&format!("Would add to {}", outcome.path.display()));
            } else {
                out.success(&format!(
                    "Added {} pattern(s) to {}",
                    outcome.added.len(),
                    outcome.path.display()
                ));
            }
            for pattern in &outcome.added {
                out.added_item(pattern);
            }
        } else {
            out.success("All patterns are already present");
        }

        for pattern in &outcome.skipped {
            out.removed_item(&format!("{pattern} (already present)"));
        }
        if let Some(backup) = &outcome.backup {
            out.key_value("Backup", &backup.display().to_string());
        }
    }
}
