//! Export of the live table to CSV (and Parquet with the `parquet` feature).

use std::io::Write;
use std::path::Path;

use crate::data::table::{LiveTable, LIVE_COLUMNS};
use crate::error::ExportError;

/// Write the table as comma-separated text with the live column headers.
pub fn write_table_csv<W: Write>(mut w: W, table: &LiveTable) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(&mut w);
    writer.write_record(LIVE_COLUMNS)?;
    for s in table.rows() {
        writer.write_record(&[
            s.time_s.to_string(),
            s.temperature_c.to_string(),
            s.power_pct.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_table_csv_path<P: AsRef<Path>>(path: P, table: &LiveTable) -> Result<(), ExportError> {
    let f = std::fs::File::create(path)?;
    write_table_csv(std::io::BufWriter::new(f), table)
}

#[cfg(feature = "parquet")]
pub fn write_table_parquet_path<P: AsRef<Path>>(
    path: P,
    table: &LiveTable,
) -> Result<(), ExportError> {
    use arrow_array::{Float64Array, RecordBatch};
    use arrow_schema::{DataType, Field, Schema};
    use parquet::arrow::arrow_writer::ArrowWriter;
    use parquet::file::properties::WriterProperties;
    use std::sync::Arc;

    let rows = table.rows();
    let time: Vec<f64> = rows.iter().map(|s| s.time_s).collect();
    let temperature: Vec<f64> = rows.iter().map(|s| s.temperature_c).collect();
    let power: Vec<f64> = rows.iter().map(|s| s.power_pct).collect();

    let schema = Arc::new(Schema::new(
        LIVE_COLUMNS
            .iter()
            .map(|name| Field::new(*name, DataType::Float64, false))
            .collect::<Vec<_>>(),
    ));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Float64Array::from(time)) as _,
            Arc::new(Float64Array::from(temperature)) as _,
            Arc::new(Float64Array::from(power)) as _,
        ],
    )?;
    let file = std::fs::File::create(path)?;
    let props = WriterProperties::builder().build();
    let mut writer = ArrowWriter::try_new(file, schema, Some(props))?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

/// Default export file name stamped with the local time, e.g. `pid_20240301_141500.csv`.
pub fn default_export_name(extension: &str) -> String {
    format!(
        "pid_{}.{}",
        chrono::Local::now().format("%Y%m%d_%H%M%S"),
        extension
    )
}
