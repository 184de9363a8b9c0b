// File: crates/livechart-core/src/export.rs
// Summary: CSV snapshot export of the sample window.

use std::io::Write;

use crate::window::SampleWindow;

/// Write the window as CSV with header `time,seriesA,seriesB`, one row per
/// index. Missing values become empty fields; quoting (with doubled-quote
/// escaping) follows RFC 4180 via the csv writer.
pub fn write_csv<W: Write>(window: &SampleWindow, out: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["time", "seriesA", "seriesB"])?;
    for row in window.snapshot_rows() {
        let a = row.a.map(fmt_value).unwrap_or_default();
        let b = row.b.map(fmt_value).unwrap_or_default();
        wtr.write_record([row.label.as_str(), a.as_str(), b.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// In-memory variant of [`write_csv`].
pub fn to_csv_string(window: &SampleWindow) -> Result<String, csv::Error> {
    let mut buf = Vec::new();
    write_csv(window, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Samples carry at most 2 decimal places; print them without trailing
/// zeros, the way the source values read.
fn fmt_value(v: f64) -> String {
    let s = format!("{v:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
