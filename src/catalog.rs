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

//! Reading message ids from, and rendering new entries for, a PO file.
//!
//! PO files may use any charset, so ids are kept as raw bytes and the
//! rendered entries are written back without re-encoding.

use crate::aggregate::TagIndex;
use regex::bytes::Regex;
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

/// Message ids already declared in the target catalog.
pub type CatalogIds = HashSet<Vec<u8>>;

/// Collect the value of every `msgid "..."` line in `content`.
///
/// The value is taken verbatim from the first to the last quote on
/// the line. Escape sequences are not interpreted and continuation
/// lines are ignored.
///
/// # Examples
///
/// ```
/// use trans_finder::catalog::parse_msgids;
///
/// let ids = parse_msgids(b"msgid \"Hello\"\nmsgstr \"Hallo\"\n");
/// assert!(ids.contains(b"Hello".as_slice()));
/// assert_eq!(ids.len(), 1);
/// ```
pub fn parse_msgids(content: &[u8]) -> CatalogIds {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r#"(?-u)msgid "(.*)""#).unwrap());
    re.captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_bytes().to_vec())
        .collect()
}

/// Render a single catalog entry with one reference line per file.
pub fn render_entry<P: AsRef<Path>>(msgid: &[u8], files: &[P]) -> Vec<u8> {
    let mut entry = Vec::new();
    for file in files {
        entry.extend_from_slice(format!("\n#: {}", file.as_ref().display()).as_bytes());
    }
    entry.extend_from_slice(b"\nmsgid \"");
    entry.extend_from_slice(msgid);
    entry.extend_from_slice(b"\"\nmsgstr \"\"\n");
    entry
}

/// Render all entries of `index`, in index order.
pub fn render_entries(index: &TagIndex) -> Vec<u8> {
    index
        .iter()
        .flat_map(|(msgid, files)| render_entry(msgid, files))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn sorted(ids: CatalogIds) -> Vec<String> {
        let mut ids = ids
            .into_iter()
            .map(|id| String::from_utf8_lossy(&id).into_owned())
            .collect::<Vec<_>>();
        ids.sort();
        ids
    }

    fn rendered(index: &TagIndex) -> String {
        String::from_utf8_lossy(&render_entries(index)).into_owned()
    }

    #[test]
    fn test_parse_msgids_empty() {
        assert!(parse_msgids(b"").is_empty());
        assert!(parse_msgids(b"# just a comment\n").is_empty());
    }

    #[test]
    fn test_parse_msgids() {
        let content = b"msgid \"\"\n\
                        msgstr \"\"\n\
                        \"Content-Type: text/plain; charset=UTF-8\\n\"\n\
                        \n\
                        #: a.html\n\
                        msgid \"Hello %name%\"\n\
                        msgstr \"Hola %name%\"\n\
                        \n\
                        msgid \"One\"\n\
                        msgid_plural \"Many\"\n\
                        msgstr[0] \"Uno\"\n";
        assert_eq!(sorted(parse_msgids(content)), vec!["", "Hello %name%", "One"]);
    }

    #[test]
    fn test_parse_msgids_is_verbatim() {
        let ids = parse_msgids(b"msgid \"Say \\\"hi\\\"\"\n");
        assert!(ids.contains(b"Say \\\"hi\\\"".as_slice()));
    }

    #[test]
    fn test_parse_msgids_ignores_indentation() {
        let ids = parse_msgids(b"   msgid \"Indented\"  \r\n");
        assert!(ids.contains(b"Indented".as_slice()));
    }

    #[test]
    fn test_parse_msgids_latin1() {
        let content = b"\"Content-Type: text/plain; charset=ISO-8859-1\\n\"\n\
                        msgid \"Caf\xe9\"\n\
                        msgstr \"Caf\xe9\"\n";
        let ids = parse_msgids(content);
        assert_eq!(ids.len(), 1);
        assert!(ids.contains(b"Caf\xe9".as_slice()));
    }

    #[test]
    fn test_render_entry() {
        assert_eq!(
            render_entry(b"Hello %name%", &["a.html", "b.html"]),
            b"\n#: a.html\n#: b.html\nmsgid \"Hello %name%\"\nmsgstr \"\"\n"
        );
    }

    #[test]
    fn test_render_entry_without_files() {
        assert_eq!(
            render_entry::<&str>(b"Orphan", &[]),
            b"\nmsgid \"Orphan\"\nmsgstr \"\"\n"
        );
    }

    #[test]
    fn test_render_entry_keeps_bytes() {
        assert_eq!(
            render_entry(b"Caf\xe9", &["menu.html"]),
            b"\n#: menu.html\nmsgid \"Caf\xe9\"\nmsgstr \"\"\n"
        );
    }

    #[test]
    fn test_render_entries() {
        let mut index = TagIndex::new();
        index.insert(
            b"Hello %name%".to_vec(),
            vec![PathBuf::from("a.html"), PathBuf::from("b.html")],
        );
        assert_eq!(
            rendered(&index),
            "\n\
             #: a.html\n\
             #: b.html\n\
             msgid \"Hello %name%\"\n\
             msgstr \"\"\n"
        );
    }

    #[test]
    fn test_render_entries_keeps_order() {
        let mut index = TagIndex::new();
        index.insert(b"Zebra".to_vec(), vec![PathBuf::from("z.html")]);
        index.insert(b"Apple".to_vec(), vec![PathBuf::from("a.html")]);
        assert_eq!(
            rendered(&index),
            "\n#: z.html\nmsgid \"Zebra\"\nmsgstr \"\"\n\
             \n#: a.html\nmsgid \"Apple\"\nmsgstr \"\"\n"
        );
    }

    #[test]
    fn test_render_entries_empty() {
        assert!(render_entries(&TagIndex::new()).is_empty());
    }
}
