use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{debug, warn};
use serde::Serialize;

use spacemerge_core::{Space, can_merge, merge};

use crate::config::resolve_spaces;

#[derive(Serialize, Debug, PartialEq)]
pub struct MergeReport {
    pub overlap: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged: Option<Space<f64>>,
}

impl MergeReport {
    pub fn new(first: &Space<f64>, second: &Space<f64>) -> Self {
        MergeReport {
            overlap: can_merge(first, second),
            merged: Some(merge(first, second)),
        }
    }
}

///
/// Write a report either as plain text or as pretty JSON.
///
/// Plain text is the overlap flag on its own line, followed by the merged
/// space as `<start> <size>` when there is one.
///
pub fn write_report<W: Write>(report: &MergeReport, json: bool, writer: &mut W) -> Result<()> {
    if json {
        let json = serde_json::to_string_pretty(report)
            .context("Failed to serialize output to JSON")?;
        writeln!(writer, "{}", json)?;
    } else {
        writeln!(writer, "{}", report.overlap)?;
        if let Some(merged) = &report.merged {
            writeln!(writer, "{}", merged)?;
        }
    }

    Ok(())
}

pub fn run_merge(matches: &ArgMatches) -> Result<()> {
    let (first, second) = resolve_spaces(matches)?;
    debug!("Merging {:?} with {:?}", first, second);

    let report = MergeReport::new(&first, &second);
    if !report.overlap {
        warn!(
            "Spaces ({}) and ({}) do not overlap, merged space bridges the gap",
            first, second
        );
    }

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_report(&report, matches.get_flag("json"), &mut writer)?;
    writer.flush()?;

    Ok(())
}
