use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::ArgMatches;
use log::debug;

use spacemerge_core::can_merge;

use crate::config::resolve_spaces;
use crate::merge::handlers::{MergeReport, write_report};

pub fn run_overlap(matches: &ArgMatches) -> Result<()> {
    let (first, second) = resolve_spaces(matches)?;
    debug!("Testing overlap of {:?} with {:?}", first, second);

    let report = MergeReport {
        overlap: can_merge(&first, &second),
        merged: None,
    };

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_report(&report, matches.get_flag("json"), &mut writer)?;
    writer.flush()?;

    Ok(())
}
