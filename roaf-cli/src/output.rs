//! Text and JSON presentation of decoded pickup records.
//!
//! Degraded records never abort a run in either mode: an unknown fraction
//! code keeps an empty name and an unusable date list becomes an empty
//! line, each with a WARN event in the log.

use std::io::Write;

use anyhow::Result;
use roaf_core::PickupRecord;
use tracing::warn;

/// Print one `"<name>: <date>"` line per record, in response order.
///
/// # Errors
///
/// Fails only when writing to `out` fails.
pub(crate) fn render_text(records: &[PickupRecord], out: &mut impl Write) -> Result<()> {
    for record in records {
        writeln!(out, "{}", text_line(record))?;
    }
    Ok(())
}

/// Serialize the enriched records as one JSON array followed by a newline.
///
/// Dates pass through as the original wire strings; only the display name
/// is attached here.
///
/// # Errors
///
/// Fails when serialization or writing to `out` fails.
pub(crate) fn render_json(records: &[PickupRecord], out: &mut impl Write) -> Result<()> {
    let enriched: Vec<PickupRecord> = records
        .iter()
        .map(|record| {
            let mut record = record.clone();
            record.enrich();
            record
        })
        .collect();

    serde_json::to_writer(&mut *out, &enriched)?;
    writeln!(out)?;
    Ok(())
}

fn text_line(record: &PickupRecord) -> String {
    let name = record.display_name();
    if name.is_empty() {
        warn!(fraction_id = record.fraction_id, "unknown fraction code");
    }
    match record.next_pickup() {
        Ok(date) => format!("{name}: {date}"),
        Err(err) => {
            warn!(fraction_id = record.fraction_id, error = %err, "cannot format record");
            String::new()
        }
    }
}
