//! Output formatting for the generated record.

use std::io::Write;

use anyhow::Context;
use stackpasswd_core::CredentialRecord;

/// Render the record as the single output line, without the newline.
pub fn render_record(record: &CredentialRecord, json: bool) -> anyhow::Result<String> {
    if json {
        return serde_json::to_string(record).context("Failed to serialize record");
    }
    Ok(record.to_string())
}

/// Write the rendered record and a line terminator to `out`.
pub fn write_record<W: Write>(
    out: &mut W,
    record: &CredentialRecord,
    json: bool,
) -> anyhow::Result<()> {
    let line = render_record(record, json)?;
    writeln!(out, "{}", line).context("Failed to write record")?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}
