//! Positional mapping of tab-separated BED tokens onto [Record] fields.

use super::record::Record;
use bedtrack_core_rs::loc::{Interval, Orientation};
use eyre::{bail, ensure, eyre, Context, OptionExt, Result};

pub fn seqid<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<&'a str> {
    parts.next().ok_or_eyre("Missing BED seqid")
}

pub fn interval<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<Interval<u64>> {
    let start = parts.next().ok_or_eyre("Missing BED start")?;
    let start = start
        .parse::<u64>()
        .wrap_err_with(|| format!("Invalid BED start: {start:?}"))?;

    let end = parts.next().ok_or_eyre("Missing BED end")?;
    let end = end
        .parse::<u64>()
        .wrap_err_with(|| format!("Invalid BED end: {end:?}"))?;

    Interval::new(start, end).wrap_err("Invalid BED interval")
}

pub fn name<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<&'a str> {
    parts.next().ok_or_eyre("Missing BED name")
}

pub fn score<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<f64> {
    let score = parts.next().ok_or_eyre("Missing BED score")?;
    score
        .parse::<f64>()
        .wrap_err_with(|| format!("Invalid BED score: {score:?}"))
}

pub fn orientation<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<Orientation> {
    let strand = parts.next().ok_or_eyre("Missing BED strand")?;
    Orientation::try_from(strand).wrap_err("Invalid BED strand")
}

pub fn thick<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<Interval<u64>> {
    let start = parts.next().ok_or_eyre("Missing BED thickStart")?;
    let start = start.parse::<u64>().wrap_err("Invalid BED thickStart")?;

    let end = parts.next().ok_or_eyre("Missing BED thickEnd")?;
    let end = end.parse::<u64>().wrap_err("Invalid BED thickEnd")?;

    Interval::new(start, end).wrap_err("Invalid BED thick interval")
}

pub fn rgb<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<(u8, u8, u8)> {
    let rgb = parts.next().ok_or_eyre("Missing BED itemRgb")?;
    if rgb == "0" {
        return Ok((0, 0, 0));
    }

    let mut channels = rgb.split(',').map(|x| {
        x.parse::<u8>()
            .wrap_err_with(|| format!("Invalid BED itemRgb value: {rgb:?}"))
    });
    let mut next = || {
        channels
            .next()
            .unwrap_or_else(|| Err(eyre!("BED itemRgb must be either 0 or r,g,b: {rgb:?}")))
    };
    let (r, g, b) = (next()?, next()?, next()?);

    ensure!(
        channels.next().is_none(),
        "BED itemRgb must be either 0 or r,g,b: {:?}",
        rgb
    );
    Ok((r, g, b))
}

pub fn blocks<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<Vec<Interval<u64>>> {
    let count = parts.next().ok_or_eyre("Missing BED blockCount")?;
    let count = count.parse::<usize>().wrap_err("Invalid BED blockCount")?;
    ensure!(count > 0, "BED blockCount must be greater than 0");

    let sizes = parts.next().ok_or_eyre("Missing BED blockSizes")?;
    let starts = parts.next().ok_or_eyre("Missing BED blockStarts")?;

    // A trailing comma is allowed in sizes/starts
    let mut sizes = sizes.strip_suffix(',').unwrap_or(sizes).split(',');
    let mut starts = starts.strip_suffix(',').unwrap_or(starts).split(',');

    // blockCount is untrusted until it matches the lists
    let mut results = Vec::new();
    for _ in 0..count {
        let (size, start) = match (sizes.next(), starts.next()) {
            (Some(size), Some(start)) => (size, start),
            _ => bail!("BED blockCount does not match the number of blocks in the record"),
        };

        let size = size.parse::<u64>().wrap_err("Invalid BED blockSizes")?;
        let start = start.parse::<u64>().wrap_err("Invalid BED blockStarts")?;
        let end = start
            .checked_add(size)
            .ok_or_eyre("BED block end overflows u64")?;
        results.push(Interval::new(start, end)?);
    }

    ensure!(
        sizes.next().is_none() && starts.next().is_none(),
        "BED blockCount does not match the number of blocks in the record"
    );

    Ok(results)
}

/// Fill the record with the first `width` columns. `width` must be a valid BED width, tokens
/// past it are left unread.
pub fn record<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    width: usize,
    into: &mut Record,
) -> Result<()> {
    into.assign(seqid(parts)?, interval(parts)?)?;
    if width >= 4 {
        into.set_name(name(parts)?.to_owned())?;
    }
    if width >= 5 {
        into.set_score(score(parts)?)?;
    }
    if width >= 6 {
        into.set_orientation(orientation(parts)?)?;
    }
    if width >= 8 {
        into.set_thick(thick(parts)?)?;
    }
    if width >= 9 {
        into.set_rgb(rgb(parts)?)?;
    }
    if width >= 12 {
        into.set_blocks(blocks(parts)?)?;
    }
    Ok(())
}
