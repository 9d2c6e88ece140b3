//! Reference collection: turns CLI inputs into file references

use std::path::Path;

use anyhow::{bail, Result};
use filedigest_core::FileReference;
use ignore::WalkBuilder;

/// Build the list of references to hash, in input order
///
/// Opaque references pass through untouched. Directories are expanded
/// (respecting .gitignore) when `recursive` is set, with their files sorted
/// by path; otherwise a directory is an error.
///
/// # Errors
/// Returns an error if a directory is given without `recursive`.
pub fn collect_references(inputs: &[String], recursive: bool) -> Result<Vec<FileReference>> {
    let mut references = Vec::with_capacity(inputs.len());

    for input in inputs {
        let reference = FileReference::new(input.as_str());
        let Some(path) = reference.to_local_path() else {
            references.push(reference);
            continue;
        };

        if !path.is_dir() {
            references.push(reference);
            continue;
        }

        if !recursive {
            bail!("{} is a directory (use --recursive)", path.display());
        }
        references.extend(walk_files(&path));
    }

    Ok(references)
}

fn walk_files(root: &Path) -> Vec<FileReference> {
    let mut paths: Vec<_> = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .build()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(ignore::DirEntry::into_path)
        .collect();
    paths.sort();
    paths.into_iter().map(FileReference::from).collect()
}
