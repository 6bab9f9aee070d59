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

//! Helpers for finding translatable messages in templates.
//!
//! Templates mark translatable text with `{% trans %}...{% endtrans %}`
//! blocks. The functions here extract those messages, drop the ones
//! which a Gettext PO file already declares, and render the rest as
//! new PO entries which can be appended to the file.
//!
//! The [`find::run`] function ties everything together and is what
//! the `trans-finder` binary calls.
//!
//! # Examples
//!
//! ```
//! use std::path::Path;
//! use trans_finder::aggregate::TagAggregator;
//! use trans_finder::catalog::{parse_msgids, render_entries};
//! use trans_finder::extract::extract_msgids;
//!
//! let existing = parse_msgids(b"msgid \"Goodbye\"\nmsgstr \"\"\n");
//! let mut aggregator = TagAggregator::new();
//! aggregator.record_file(
//!     Path::new("index.html"),
//!     extract_msgids(b"{% trans %}Hi {{ user }}{% endtrans %}", &existing),
//! );
//! assert_eq!(
//!     render_entries(aggregator.index()),
//!     b"\n#: index.html\nmsgid \"Hi %user%\"\nmsgstr \"\"\n"
//! );
//! ```

pub mod aggregate;
pub mod catalog;
pub mod error;
pub mod extract;
pub mod find;
