use std::fs::File;
use std::io::Read;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use arrow::util::display::array_value_to_string;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::DataSourceError;
use super::model::{CellValue, Column, Dataset, Listing, YesNo};

/// Tokens read as missing, following the Pandas `read_csv` defaults.
/// Matched against the raw cell, without trimming.
const NULL_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the listings dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, one listing per record (primary format)
/// * `.json`    – `[{ "Price": 1200, "Neighborhood": "Verdun", ... }, ...]`
/// * `.parquet` – flat string / numeric / boolean columns
///
/// Only the twelve selected columns are kept and rows without a price are
/// dropped. Row order follows the source.
pub fn load_file(path: &Path) -> Result<Dataset, DataSourceError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => read_csv(open(path)?)?,
        "json" => read_json(open(path)?)?,
        "parquet" | "pq" => read_parquet(open(path)?)?,
        other => return Err(DataSourceError::UnsupportedFormat(other.to_string())),
    };

    log::info!(
        "Loaded {} listings from {} ({} rows without price skipped)",
        dataset.len(),
        path.display(),
        dataset.skipped_without_price()
    );
    Ok(dataset)
}

fn open(path: &Path) -> Result<File, DataSourceError> {
    File::open(path).map_err(|source| DataSourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Row → Listing conversion shared by every format
// ---------------------------------------------------------------------------

/// Accumulates converted rows, counting the ones dropped for a missing price.
#[derive(Default)]
struct DatasetBuilder {
    listings: Vec<Listing>,
    skipped: usize,
}

impl DatasetBuilder {
    /// `cells` is ordered like [`Column::ALL`].
    fn push_row(&mut self, row: usize, cells: Vec<CellValue>) -> Result<(), DataSourceError> {
        match build_listing(row, cells)? {
            Some(listing) => self.listings.push(listing),
            None => self.skipped += 1,
        }
        Ok(())
    }

    fn finish(self) -> Dataset {
        Dataset::new(self.listings, self.skipped)
    }
}

fn build_listing(row: usize, mut cells: Vec<CellValue>) -> Result<Option<Listing>, DataSourceError> {
    let mut take = |col: Column| std::mem::replace(&mut cells[col.index()], CellValue::Null);

    let price_cell = take(Column::Price);
    let price = match number_cell(row, Column::Price, price_cell.clone())? {
        None => return Ok(None),
        Some(p) if p.is_nan() => return Ok(None),
        Some(p) if p.is_infinite() => {
            return Err(DataSourceError::InvalidNumber {
                row,
                column: Column::Price.header().to_string(),
                value: price_cell.to_string(),
            })
        }
        Some(p) => p,
    };

    Ok(Some(Listing {
        property_type: take(Column::PropertyType).into_text(),
        area: number_cell(row, Column::Area, take(Column::Area))?.filter(|a| a.is_finite()),
        furnished: yes_no_cell(row, Column::Furnished, take(Column::Furnished)),
        lease_term: take(Column::LeaseTerm).into_text(),
        parking_type: take(Column::ParkingType).into_text(),
        heating: yes_no_cell(row, Column::Heating, take(Column::Heating)),
        water: yes_no_cell(row, Column::Water, take(Column::Water)),
        cable: yes_no_cell(row, Column::Cable, take(Column::Cable)),
        internet: yes_no_cell(row, Column::Internet, take(Column::Internet)),
        electricity: yes_no_cell(row, Column::Electricity, take(Column::Electricity)),
        neighborhood: take(Column::Neighborhood).into_text(),
        price,
    }))
}

fn number_cell(row: usize, col: Column, cell: CellValue) -> Result<Option<f64>, DataSourceError> {
    if cell.is_null() {
        return Ok(None);
    }
    match cell.as_f64() {
        Some(v) => Ok(Some(v)),
        None => Err(DataSourceError::InvalidNumber {
            row,
            column: col.header().to_string(),
            value: cell.to_string(),
        }),
    }
}

fn yes_no_cell(row: usize, col: Column, cell: CellValue) -> Option<YesNo> {
    match cell {
        CellValue::Null => None,
        CellValue::Bool(true) => Some(YesNo::Yes),
        CellValue::Bool(false) => Some(YesNo::No),
        CellValue::Text(ref s) => YesNo::parse(s).or_else(|| {
            log::warn!("Row {row}: ignoring '{s}' in {col}, expected Yes or No");
            None
        }),
        other => {
            log::warn!("Row {row}: ignoring '{other}' in {col}, expected Yes or No");
            None
        }
    }
}

/// Text is kept verbatim; only exact null tokens become `Null`.
fn text_cell(s: &str) -> CellValue {
    if NULL_TOKENS.contains(&s) {
        CellValue::Null
    } else {
        CellValue::Text(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, any column order, extra
/// columns ignored. All cells are kept as text until conversion; only the
/// header names are trimmed.
pub fn read_csv<R: Read>(source: R) -> Result<Dataset, DataSourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let positions = Column::ALL
        .iter()
        .map(|col| {
            headers
                .iter()
                .position(|h| h == col.header())
                .ok_or_else(|| DataSourceError::MissingColumn(col.header().to_string()))
        })
        .collect::<Result<Vec<usize>, _>>()?;

    let mut builder = DatasetBuilder::default();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let cells = positions
            .iter()
            .map(|&idx| text_cell(record.get(idx).unwrap_or("")))
            .collect();
        builder.push_row(row_no + 1, cells)?;
    }

    Ok(builder.finish())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Property_type": "Apartment", "Area": null, "Water": "Yes",
///     "Neighborhood": "Verdun", "Price": 1450.0, ... },
///   ...
/// ]
/// ```
pub fn read_json<R: Read>(source: R) -> Result<Dataset, DataSourceError> {
    let root: JsonValue = serde_json::from_reader(source)?;
    let records = root
        .as_array()
        .ok_or_else(|| DataSourceError::Malformed("expected top-level JSON array".into()))?;

    let mut builder = DatasetBuilder::default();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| DataSourceError::Malformed(format!("row {} is not a JSON object", i + 1)))?;

        let cells = Column::ALL
            .iter()
            .map(|col| {
                obj.get(col.header())
                    .map(json_to_cell)
                    .ok_or_else(|| DataSourceError::MissingColumn(col.header().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        builder.push_row(i + 1, cells)?;
    }

    Ok(builder.finish())
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => text_cell(s),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::Text(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load listings from a Parquet file written by Pandas (`df.to_parquet()`)
/// or Polars (`df.write_parquet()`).
///
/// Columns may be strings, integers, floats or booleans; anything else
/// (e.g. dictionary-encoded categories) is read through its display form.
pub fn read_parquet(file: File) -> Result<Dataset, DataSourceError> {
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut builder = DatasetBuilder::default();
    let mut row_no = 0;

    for batch_result in reader {
        let batch = batch_result?;
        let schema = batch.schema();

        let columns = Column::ALL
            .iter()
            .map(|col| {
                schema
                    .index_of(col.header())
                    .map(|idx| batch.column(idx).clone())
                    .map_err(|_| DataSourceError::MissingColumn(col.header().to_string()))
            })
            .collect::<Result<Vec<ArrayRef>, _>>()?;

        for row in 0..batch.num_rows() {
            row_no += 1;
            let cells = columns
                .iter()
                .map(|array| extract_cell(array, row))
                .collect::<Result<Vec<_>, _>>()?;
            builder.push_row(row_no, cells)?;
        }
    }

    Ok(builder.finish())
}

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell(col: &ArrayRef, row: usize) -> Result<CellValue, DataSourceError> {
    if col.is_null(row) {
        return Ok(CellValue::Null);
    }
    let cell = match col.data_type() {
        DataType::Utf8 => text_cell(col.as_string::<i32>().value(row)),
        DataType::LargeUtf8 => text_cell(col.as_string::<i64>().value(row)),
        DataType::Int32 => CellValue::Integer(col.as_primitive::<Int32Type>().value(row) as i64),
        DataType::Int64 => CellValue::Integer(col.as_primitive::<Int64Type>().value(row)),
        DataType::Float32 => CellValue::Float(col.as_primitive::<Float32Type>().value(row) as f64),
        DataType::Float64 => CellValue::Float(col.as_primitive::<Float64Type>().value(row)),
        DataType::Boolean => CellValue::Bool(col.as_boolean().value(row)),
        _ => text_cell(&array_value_to_string(col, row)?),
    };
    Ok(cell)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use arrow::array::{Float64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;

    use super::*;
    use crate::data::borough::MIN_BOROUGH_LISTINGS;
    use crate::data::query::RentalCatalog;

    const HEADER: &str = "Id,Property_type,Area,Furnished,Lease_term,Parking_type,Heating,Water,Cable,Internet,Electricity,Neighborhood,Price,Url";

    fn csv_with(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.push('\n');
        text
    }

    #[test]
    fn drops_rows_without_price_and_keeps_order() {
        let csv = csv_with(&[
            "1,Apartment,550,No,12 months,Garage,Yes,Yes,No,No,Yes,Verdun,1450,u1",
            "2,Apartment,,No,12 months,,Yes,Yes,No,No,Yes,Verdun,,u2",
            "3,Condo,700,Yes,,,No,No,No,Yes,No,Plateau-Mont-Royal,2100.5,u3",
            "4,Condo,,Yes,,,No,No,No,Yes,No,Plateau-Mont-Royal,NaN,u4",
        ]);
        let ds = read_csv(csv.as_bytes()).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.skipped_without_price(), 2);
        let prices: Vec<f64> = ds.listings().iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![1450.0, 2100.5]);
        assert_eq!(ds.listings()[1].neighborhood.as_deref(), Some("Plateau-Mont-Royal"));
    }

    #[test]
    fn projects_cells_into_listing_fields() {
        let csv = csv_with(&["9,Apartment, 550 ,No,12 months,N/A,Yes,Yes,,No,maybe,Verdun,1450,u"]);
        let ds = read_csv(csv.as_bytes()).unwrap();
        let l = &ds.listings()[0];

        assert_eq!(l.property_type.as_deref(), Some("Apartment"));
        assert_eq!(l.area, Some(550.0));
        assert_eq!(l.furnished, Some(YesNo::No));
        assert_eq!(l.lease_term.as_deref(), Some("12 months"));
        assert_eq!(l.parking_type, None);
        assert_eq!(l.water, Some(YesNo::Yes));
        assert_eq!(l.cable, None);
        // Unrecognised utility tokens are read as null.
        assert_eq!(l.electricity, None);
    }

    #[test]
    fn missing_required_column_is_reported() {
        let csv = "Property_type,Area,Neighborhood,Price\nApartment,500,Verdun,1200\n";
        match read_csv(csv.as_bytes()) {
            Err(DataSourceError::MissingColumn(col)) => assert_eq!(col, "Furnished"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_price_is_an_error() {
        let csv = csv_with(&["1,Apartment,,No,,,Yes,Yes,No,No,Yes,Verdun,call us,u"]);
        match read_csv(csv.as_bytes()) {
            Err(DataSourceError::InvalidNumber { row, column, value }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "Price");
                assert_eq!(value, "call us");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn neighborhood_whitespace_is_part_of_the_name() {
        let mut rows = Vec::new();
        for i in 0..4 {
            rows.push(format!("{i},Apartment,,No,,,Yes,Yes,No,No,Yes,Verdun,{},u", 1000 + i));
        }
        for i in 4..7 {
            rows.push(format!("{i},Apartment,,No,,,Yes,Yes,No,No,Yes,\"Verdun \",{},u", 1000 + i));
        }
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        let ds = read_csv(csv_with(&rows).as_bytes()).unwrap();

        assert_eq!(ds.len(), 7);
        assert_eq!(ds.listings()[6].neighborhood.as_deref(), Some("Verdun "));
        let catalog = RentalCatalog::new(ds, MIN_BOROUGH_LISTINGS);
        assert!(catalog.list_boroughs().is_empty());
    }

    #[test]
    fn all_pandas_null_tokens_are_missing() {
        let csv = csv_with(&[
            "1,#NA,-1.#IND,No,#N/A N/A,1.#IND,Yes,Yes,No,No,Yes,Verdun,1200,u",
            "2,Apartment,,No,,,Yes,Yes,No,No,Yes,Verdun,1.#QNAN,u",
            "3,Apartment,,No,,,Yes,Yes,No,No,Yes,Verdun,-1.#QNAN,u",
            "4,Apartment,,No,,,Yes,Yes,No,No,Yes, NA,1300,u",
        ]);
        let ds = read_csv(csv.as_bytes()).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.skipped_without_price(), 2);
        let first = &ds.listings()[0];
        assert_eq!(first.property_type, None);
        assert_eq!(first.area, None);
        assert_eq!(first.lease_term, None);
        assert_eq!(first.parking_type, None);
        // Only exact tokens count; padded text stays text.
        assert_eq!(ds.listings()[1].neighborhood.as_deref(), Some(" NA"));
    }

    #[test]
    fn infinite_price_is_an_error() {
        let csv = csv_with(&["1,Apartment,,No,,,Yes,Yes,No,No,Yes,Verdun,inf,u"]);
        match read_csv(csv.as_bytes()) {
            Err(DataSourceError::InvalidNumber { column, value, .. }) => {
                assert_eq!(column, "Price");
                assert_eq!(value, "inf");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn load_file_dispatches_on_extension() {
        let mut tmp = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(
            tmp,
            "{}",
            csv_with(&["1,Apartment,,No,,,Yes,Yes,No,No,Yes,Verdun,1300,u"])
        )
        .unwrap();
        let ds = load_file(tmp.path()).unwrap();
        assert_eq!(ds.len(), 1);

        let other = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        assert!(matches!(
            load_file(other.path()),
            Err(DataSourceError::UnsupportedFormat(ext)) if ext == "xlsx"
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_file(Path::new("/nonexistent/listings.csv")).unwrap_err();
        assert!(matches!(err, DataSourceError::Io { .. }));
    }

    #[test]
    fn reads_records_oriented_json() {
        let json = r#"[
            {"Property_type": "Apartment", "Area": null, "Furnished": "No", "Lease_term": "12 months",
             "Parking_type": null, "Heating": "Yes", "Water": true, "Cable": "No", "Internet": "No",
             "Electricity": "Yes", "Neighborhood": "Verdun", "Price": 1450, "Extra": 3},
            {"Property_type": "Condo", "Area": 610.5, "Furnished": "Yes", "Lease_term": null,
             "Parking_type": "Street", "Heating": "No", "Water": "No", "Cable": "No", "Internet": "Yes",
             "Electricity": "No", "Neighborhood": "Verdun", "Price": null}
        ]"#;
        let ds = read_json(json.as_bytes()).unwrap();

        assert_eq!(ds.len(), 1);
        assert_eq!(ds.skipped_without_price(), 1);
        let l = &ds.listings()[0];
        assert_eq!(l.price, 1450.0);
        assert_eq!(l.water, Some(YesNo::Yes));
        assert_eq!(l.area, None);
    }

    #[test]
    fn json_record_missing_a_column_is_rejected() {
        let json = r#"[{"Neighborhood": "Verdun", "Price": 1000}]"#;
        assert!(matches!(
            read_json(json.as_bytes()),
            Err(DataSourceError::MissingColumn(_))
        ));
    }

    #[test]
    fn reads_parquet_columns() {
        let text = |vals: Vec<Option<&str>>| Arc::new(StringArray::from(vals)) as ArrayRef;
        let mut fields = Vec::new();
        let mut arrays: Vec<ArrayRef> = Vec::new();
        for col in Column::ALL {
            let (dtype, array) = match col {
                Column::Area => (
                    DataType::Float64,
                    Arc::new(Float64Array::from(vec![Some(480.0), None])) as ArrayRef,
                ),
                Column::Price => (
                    DataType::Float64,
                    Arc::new(Float64Array::from(vec![Some(1250.0), Some(1600.0)])) as ArrayRef,
                ),
                Column::Neighborhood => (DataType::Utf8, text(vec![Some("Verdun"), Some("Outremont")])),
                Column::PropertyType => (DataType::Utf8, text(vec![Some("Apartment"), None])),
                _ => (DataType::Utf8, text(vec![Some("Yes"), Some("No")])),
            };
            fields.push(Field::new(col.header(), dtype, true));
            arrays.push(array);
        }
        let schema = Arc::new(Schema::new(fields));
        let batch = RecordBatch::try_new(schema.clone(), arrays).unwrap();

        let tmp = tempfile::Builder::new().suffix(".parquet").tempfile().unwrap();
        let mut writer = ArrowWriter::try_new(File::create(tmp.path()).unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(tmp.path()).unwrap();
        assert_eq!(ds.len(), 2);
        let second = &ds.listings()[1];
        assert_eq!(second.neighborhood.as_deref(), Some("Outremont"));
        assert_eq!(second.property_type, None);
        assert_eq!(second.area, None);
        assert_eq!(second.heating, Some(YesNo::No));
        assert_eq!(ds.listings()[0].price, 1250.0);
    }
}
