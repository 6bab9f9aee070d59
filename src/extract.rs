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

//! Extraction of `{% trans %}` blocks from template text.
//!
//! Templates are matched as raw bytes: their encoding is not known,
//! and message bodies must reach the catalog exactly as written.

use crate::catalog::CatalogIds;
use regex::bytes::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// The unparsed text captured from a single trans block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTagMatch {
    /// The message body between the opening marker and either the
    /// plural marker or the closing marker.
    pub message: Vec<u8>,
    /// The count expression from `{% plural <expr> %}`, if any.
    pub plural_expr: Option<Vec<u8>>,
    /// The body following the plural marker, if any.
    ///
    /// Plural forms are captured but not yet written to the catalog.
    pub plural_message: Option<Vec<u8>>,
}

/// Message ids found in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedTags {
    /// Normalized message ids which are not in the catalog, in the
    /// order they were first matched.
    pub msgids: Vec<Vec<u8>>,
    /// Number of distinct bodies dropped because the catalog already
    /// declares them.
    pub skipped: usize,
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?s-u)\{%\s*trans\s*%\}(.*?)(?:\{%\s*plural\s+(.*?)\s*%\}(.*?))?\{%\s*endtrans\s*%\}",
        )
        .unwrap()
    })
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?-u)\{\{\s*([^{}]*?)\s*\}\}").unwrap())
}

/// Find all trans blocks in `text`.
///
/// Whitespace inside the markers is optional, so `{%trans%}` and
/// `{% trans %}` are equivalent. Bodies may span several lines. A
/// block without a closing `{% endtrans %}` produces no match.
///
/// # Examples
///
/// ```
/// use trans_finder::extract::extract_raw_tags;
///
/// let tags = extract_raw_tags(b"<p>{%trans%}Hello{% endtrans %}</p>");
/// assert_eq!(tags.len(), 1);
/// assert_eq!(tags[0].message, b"Hello");
/// assert_eq!(tags[0].plural_expr, None);
/// ```
pub fn extract_raw_tags(text: &[u8]) -> Vec<RawTagMatch> {
    tag_regex()
        .captures_iter(text)
        .map(|caps| RawTagMatch {
            message: caps.get(1).map_or_else(Vec::new, |m| m.as_bytes().to_vec()),
            plural_expr: caps.get(2).map(|m| m.as_bytes().to_vec()),
            plural_message: caps.get(3).map(|m| m.as_bytes().to_vec()),
        })
        .collect()
}

/// Rewrite template placeholders into catalog placeholders.
///
/// Every `{{ name }}` (with or without inner whitespace) becomes
/// `%name%`.
///
/// # Examples
///
/// ```
/// use trans_finder::extract::normalize_placeholders;
///
/// assert_eq!(
///     normalize_placeholders(b"Hi {{ user }}, you have {{count}} messages"),
///     b"Hi %user%, you have %count% messages"
/// );
/// ```
pub fn normalize_placeholders(body: &[u8]) -> Vec<u8> {
    placeholder_regex()
        .replace_all(body, &b"%${1}%"[..])
        .into_owned()
}

/// Extract the new message ids from the contents of a single file.
///
/// Identical bodies are only reported once per file. A body which is
/// already declared in `existing` is dropped. Note that this check
/// happens before placeholder normalization, so a body such as
/// `Hi {{ user }}` is not matched by a catalog entry `Hi %user%`.
pub fn extract_msgids(text: &[u8], existing: &CatalogIds) -> ExtractedTags {
    let mut seen = HashSet::new();
    let mut extracted = ExtractedTags::default();
    for tag in extract_raw_tags(text) {
        if !seen.insert(tag.message.clone()) {
            continue;
        }
        if existing.contains(&tag.message) {
            extracted.skipped += 1;
            continue;
        }
        extracted.msgids.push(normalize_placeholders(&tag.message));
    }
    extracted
}
