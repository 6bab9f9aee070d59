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

//! Find `{% trans %}` tags in a directory of templates
//!
//! This program works like `xgettext` for template files: it walks a
//! directory, extracts the messages inside trans blocks, and appends
//! the ones missing from the given PO file to the end of that file.

use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use trans_finder::find::{run, FindOptions};

#[derive(Clone, Debug, Parser)]
#[command(name = "trans-finder", version, about = "Find {%trans%} tags in a directory")]
struct Args {
    /// The file or directory to search for tags.
    path: PathBuf,
    /// PO file to check against and write to.
    #[arg(id = "po-file")]
    po_file: PathBuf,
    /// Do not write the new tags to the PO file.
    #[arg(short, long)]
    dry_run: bool,
    /// Output information about every step.
    #[arg(short, long)]
    verbose: bool,
    /// Output the tags as they will appear in the PO file.
    #[arg(short, long)]
    output_tags: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = FindOptions {
        dry_run: args.dry_run,
    };
    let report = run(&args.path, &args.po_file, &options).with_context(|| {
        format!(
            "Searching {} for tags missing from {}",
            args.path.display(),
            args.po_file.display()
        )
    })?;

    if args.output_tags && report.new_tags > 0 {
        tracing::info!("Outputting {} tags", report.new_tags);
        io::stdout()
            .write_all(&report.output)
            .context("Writing tags to stdout")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_args_debug_assert() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["trans-finder", "templates", "messages.po"]).unwrap();
        assert_eq!(args.path, PathBuf::from("templates"));
        assert_eq!(args.po_file, PathBuf::from("messages.po"));
        assert!(!args.dry_run);
        assert!(!args.verbose);
        assert!(!args.output_tags);
    }

    #[test]
    fn test_args_short_flags() {
        let args =
            Args::try_parse_from(["trans-finder", "-d", "-v", "-o", "templates", "messages.po"])
                .unwrap();
        assert!(args.dry_run);
        assert!(args.verbose);
        assert!(args.output_tags);
    }

    #[test]
    fn test_args_missing_po_file() {
        assert!(Args::try_parse_from(["trans-finder", "templates"]).is_err());
    }
}
