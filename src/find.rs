// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Driving a complete scan: from a root path and a PO file to the
//! entries appended to that file.

use crate::aggregate::{ScanStats, TagAggregator};
use crate::catalog::{parse_msgids, render_entries, CatalogIds};
use crate::error::FindError;
use crate::extract::extract_msgids;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Options for [`run`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FindOptions {
    /// Compute the new entries but leave the PO file untouched.
    pub dry_run: bool,
}

/// The outcome of [`run`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FindReport {
    /// Number of message ids declared in the PO file before the scan.
    pub existing_ids: usize,
    pub stats: ScanStats,
    /// Number of entries in `output`.
    pub new_tags: usize,
    /// The rendered entries, empty if nothing new was found.
    pub output: Vec<u8>,
    /// Whether `output` was appended to the PO file.
    pub written: bool,
}

/// Fail unless `po_file` is an existing regular file.
pub fn check_catalog(po_file: &Path) -> Result<(), FindError> {
    if po_file.is_file() {
        Ok(())
    } else {
        Err(FindError::MissingCatalog(po_file.to_path_buf()))
    }
}

/// Read the message ids already declared in `po_file`.
pub fn load_catalog_ids(po_file: &Path) -> anyhow::Result<CatalogIds> {
    let content =
        fs::read(po_file).with_context(|| format!("Could not read {}", po_file.display()))?;
    Ok(parse_msgids(&content))
}

/// Scan `root` recursively for trans tags.
///
/// The `root` can be a single file or a directory. Files are visited
/// in the order the file system lists them. Contents are matched as
/// raw bytes, whatever their encoding. Any error while walking or
/// reading aborts the scan.
pub fn find_tags(root: &Path, existing: &CatalogIds) -> anyhow::Result<TagAggregator> {
    let mut aggregator = TagAggregator::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.with_context(|| format!("Could not walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let bytes =
            fs::read(path).with_context(|| format!("Could not read {}", path.display()))?;
        let extracted = extract_msgids(&bytes, existing);
        debug!(
            path = %path.display(),
            new = extracted.msgids.len(),
            skipped = extracted.skipped,
            "Parsed file"
        );
        aggregator.record_file(path, extracted);
    }
    Ok(aggregator)
}

/// Append `output` to the end of `po_file`.
fn append_to_catalog(po_file: &Path, output: &[u8]) -> anyhow::Result<()> {
    let mut file = fs::OpenOptions::new()
        .append(true)
        .open(po_file)
        .with_context(|| format!("Could not open {}", po_file.display()))?;
    file.write_all(output)
        .with_context(|| format!("Could not write to {}", po_file.display()))?;
    Ok(())
}

/// Find new trans tags below `root` and append them to `po_file`.
///
/// The PO file must exist. Nothing is written when no new tags are
/// found or when `options.dry_run` is set.
pub fn run(root: &Path, po_file: &Path, options: &FindOptions) -> anyhow::Result<FindReport> {
    check_catalog(po_file)?;
    let existing = load_catalog_ids(po_file)?;
    info!("Found {} msgids in {}", existing.len(), po_file.display());

    info!("Searching for translations in {} recursively", root.display());
    let (index, stats) = find_tags(root, &existing)?.into_parts();
    info!(
        "Finished search! Found {} tags in {} files",
        stats.tags_found, stats.files_read
    );
    if stats.tags_skipped > 0 {
        info!("{} tags were already in the PO file", stats.tags_skipped);
    }

    let mut report = FindReport {
        existing_ids: existing.len(),
        stats,
        new_tags: index.len(),
        output: render_entries(&index),
        written: false,
    };
    if index.is_empty() {
        return Ok(report);
    }

    if options.dry_run {
        info!("Dry-run: PO file will not be touched");
    } else {
        append_to_catalog(po_file, &report.output)?;
        report.written = true;
        info!("PO file {} updated", po_file.display());
    }
    Ok(report)
}
