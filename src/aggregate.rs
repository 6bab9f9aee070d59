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

//! Collecting message ids across many files.

use crate::extract::ExtractedTags;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Message ids mapped to the files referencing them.
///
/// Both the ids and the file lists keep the order in which they were
/// first seen.
pub type TagIndex = IndexMap<Vec<u8>, Vec<PathBuf>>;

/// Counters collected during a scan.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScanStats {
    /// Number of files read.
    pub files_read: usize,
    /// Number of distinct new message ids.
    pub tags_found: usize,
    /// Number of tags matched, counted once per file, including tags
    /// already in the catalog.
    pub tags_matched: usize,
    /// Number of tags skipped because the catalog already has them.
    pub tags_skipped: usize,
}

/// Accumulates the message ids found in a sequence of files.
///
/// The aggregator does not care how the files are discovered: it
/// simply records them in the order they are given.
#[derive(Debug, Default)]
pub struct TagAggregator {
    index: TagIndex,
    stats: ScanStats,
}

impl TagAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the tags extracted from the file at `path`.
    ///
    /// The file is counted as read even when it has no tags.
    pub fn record_file(&mut self, path: &Path, extracted: ExtractedTags) {
        self.stats.files_read += 1;
        self.stats.tags_matched += extracted.msgids.len() + extracted.skipped;
        self.stats.tags_skipped += extracted.skipped;
        for msgid in extracted.msgids {
            self.add_tag(msgid, path);
        }
    }

    /// Add a reference from `path` to `msgid`.
    ///
    /// Returns `true` if the message id was not seen before.
    pub fn add_tag(&mut self, msgid: Vec<u8>, path: &Path) -> bool {
        match self.index.get_mut(&msgid) {
            Some(files) => {
                files.push(path.to_path_buf());
                false
            }
            None => {
                self.index.insert(msgid, vec![path.to_path_buf()]);
                self.stats.tags_found += 1;
                true
            }
        }
    }

    pub fn index(&self) -> &TagIndex {
        &self.index
    }

    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    pub fn into_parts(self) -> (TagIndex, ScanStats) {
        (self.index, self.stats)
    }
}
