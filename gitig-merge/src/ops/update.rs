//! Update operation - add templates to an existing `.gitignore`.

use gitig_core::{Error, Result};
use gitig_templates::TemplateSource;

use super::{Change, Outcome, Plan, Project};
use crate::{engine::MergeStrategy, names::NameList};

/// Options for the update operation.
pub struct UpdateOptions<'a> {
    pub names: &'a [String],
    /// `Append` or `Smart`.
    pub strategy: MergeStrategy,
    pub dry_run: bool,
}

/// Execute the update operation.
///
/// The `.gitignore` must already exist, even for a dry run.
pub fn update(
    project: &Project,
    source: &dyn TemplateSource,
    opts: UpdateOptions,
) -> Result<Outcome> {
    if opts.strategy.truncates() {
        return Err(Error::invalid_argument(
            "update only appends; use 'gitig init' to regenerate the file",
        ));
    }

    let output = project.gitignore();
    if !output.exists() {
        return Err(Error::not_found(
            &output,
            "run 'gitig init' to create it first",
        ));
    }

    let names = NameList::normalize(opts.names);
    if names.is_empty() {
        return Err(Error::invalid_argument("no template names given"));
    }

    if opts.dry_run {
        let plan = Plan {
            target: output,
            templates: names.names().to_vec(),
            strategy: Some(opts.strategy),
        };
        return Ok(Outcome::planned(names, plan));
    }

    let backup = project.backup_if_enabled()?;
    let merge = project
        .engine(source)
        .merge(names.names(), &output, opts.strategy)?;

    Ok(Outcome {
        names,
        backup,
        change: Change::Merged(merge),
    })
}
