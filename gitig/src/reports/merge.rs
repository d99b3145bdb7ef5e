//! Reports for operations that merge templates into an ignore file.

use gitig_merge::{
    MergeOutcome, MergeStrategy,
    ops::{AutoOutcome, Change, Outcome, Plan},
};

use super::output::{Output, Report};

/// Report for init, append, update, sync and global add.
#[derive(Debug)]
pub struct OutcomeReport<'a> {
    pub outcome: &'a Outcome,
}

impl Report for OutcomeReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        for name in self.outcome.names.duplicates() {
            out.warning(&format!("ignoring duplicate template '{name}'"));
        }

        match &self.outcome.change {
            Change::Planned(plan) => render_plan(plan, out),
            Change::Merged(merge) => render_merge(merge, out),
            Change::Placeholder(path) => {
                out.success(&format!("Created {}", path.display()));
                out.hint("Add templates with 'gitig update <names>'");
            }
            Change::Unchanged(path) => {
                out.success(&format!("{} already exists, left untouched", path.display()));
            }
        }

        if let Some(backup) = &self.outcome.backup {
            out.key_value("Backup", &backup.display().to_string());
        }
    }
}

fn render_plan(plan: &Plan, out: &mut dyn Output) {
    out.section("Dry run");
    out.key_value("Target", &plan.target.display().to_string());
    match plan.strategy {
        Some(strategy) => {
            out.key_value("Strategy", &strategy.to_string());
            for name in &plan.templates {
                out.added_item(name);
            }
        }
        None if plan.target.exists() => out.key_value("Action", "leave the existing file untouched"),
        None => out.key_value("Action", "write a placeholder file"),
    }
}

fn render_merge(merge: &MergeOutcome, out: &mut dyn Output) {
    let verb = match merge.strategy {
        MergeStrategy::Replace => "Generated",
        MergeStrategy::Append | MergeStrategy::Smart => "Updated",
    };
    let count = merge.applied.len();
    let plural = if count == 1 { "" } else { "s" };
    out.success(&format!(
        "{verb} {} with {count} template{plural}",
        merge.output.display()
    ));

    for template in &merge.applied {
        out.added_item(&format!("{} ({})", template.name, template.origin));
    }
    out.key_value("Strategy", &merge.strategy.to_string());
    out.key_value("Patterns written", &merge.lines_written.to_string());
    if merge.lines_dropped > 0 {
        out.key_value("Already present", &merge.lines_dropped.to_string());
    }

    if merge.has_skips() {
        out.newline();
        out.section("Skipped");
        for skipped in &merge.skipped {
            out.removed_item(&format!("{}: {}", skipped.name, skipped.reason));
        }
    }
}

/// Report for auto-detection followed by init.
#[derive(Debug)]
pub struct AutoReport<'a> {
    pub outcome: &'a AutoOutcome,
}

impl Report for AutoReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        if self.outcome.detected.is_empty() {
            out.hint("No project type detected");
        } else {
            out.key_value("Detected", &self.outcome.detected.join(", "));
        }
        OutcomeReport {
            outcome: &self.outcome.init,
        }
        .render(out);
    }
}
