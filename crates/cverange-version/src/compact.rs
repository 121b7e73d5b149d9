//! Compaction of a classified version sequence into minimal range sets

use crate::classify::ClassifiedVersion;
use crate::interval::VersionInterval;
use cverange_core::Result;

/// Collapse consecutive affected versions into the minimal set of
/// affected ranges.
///
/// Runs close into `<=hi,lo` intervals, except that a run starting at
/// the very first upstream version renders as `<=hi`: with no older safe
/// version on record, versions predating the registry's history may be
/// affected too. The upper anchor is always the observed newest version
/// of the run, since upstream history is authoritative for what exists.
pub fn affected_ranges(classified: &[ClassifiedVersion]) -> Result<Vec<VersionInterval>> {
    let mut ranges = Vec::new();
    let mut run: Vec<&str> = Vec::new();
    let mut unaffected_found = false;

    for cv in classified {
        if cv.is_affected {
            run.push(&cv.version);
            continue;
        }

        if !run.is_empty() {
            ranges.push(VersionInterval::from_boundary_list(
                &run,
                unaffected_found,
                true,
            )?);
            run.clear();
        }
        // every later run has a known safe predecessor
        unaffected_found = true;
    }

    if !run.is_empty() {
        ranges.push(VersionInterval::from_boundary_list(
            &run,
            unaffected_found,
            true,
        )?);
    }

    Ok(ranges)
}

/// Collapse consecutive unaffected versions into the minimal set of
/// safe ranges, scanning from the newest version down.
///
/// The run touching the newest version renders as `>=lo` (still safe
/// going forward); every run below an affected version closes on both
/// sides.
pub fn safe_ranges(classified: &[ClassifiedVersion]) -> Result<Vec<VersionInterval>> {
    let mut ranges = Vec::new();
    let mut run: Vec<&str> = Vec::new();
    let mut affected_found = false;

    for cv in classified.iter().rev() {
        if !cv.is_affected {
            run.insert(0, &cv.version);
            continue;
        }

        if !run.is_empty() {
            ranges.push(VersionInterval::from_boundary_list(&run, true, affected_found)?);
            run.clear();
        }
        affected_found = true;
    }

    if !run.is_empty() {
        ranges.push(VersionInterval::from_boundary_list(&run, true, affected_found)?);
    }

    Ok(ranges)
}
