//! CSV loader for trailer catalogs
//!
//! Expected header:
//! id,name,type,max_length,max_width,max_height,max_weight,features,specialized_for
//!
//! `features` and `specialized_for` hold `;`-separated lists. An empty
//! `specialized_for` marks a general-purpose trailer.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use haulmatch_domain::model::{TrailerSpec, TrailerType};
use haulmatch_domain::TrailerCatalog;
use haulmatch_types::Error;

const REQUIRED_COLUMNS: [&str; 7] = [
    "id",
    "name",
    "type",
    "max_length",
    "max_width",
    "max_height",
    "max_weight",
];

#[derive(Error, Debug)]
pub enum CsvCatalogError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid number in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

impl From<CsvCatalogError> for Error {
    fn from(err: CsvCatalogError) -> Self {
        match err {
            CsvCatalogError::IoError(e) => Error::Io(e),
            other => Error::CatalogLoad(other.to_string()),
        }
    }
}

/// Column positions resolved from the header row
struct Columns {
    id: usize,
    name: usize,
    trailer_type: usize,
    max_length: usize,
    max_width: usize,
    max_height: usize,
    max_weight: usize,
    features: Option<usize>,
    specialized_for: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, CsvCatalogError> {
        let position = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
        let required = |name: &str| position(name).ok_or_else(|| CsvCatalogError::MissingColumn(name.to_string()));

        for column in REQUIRED_COLUMNS {
            required(column)?;
        }

        Ok(Self {
            id: required("id")?,
            name: required("name")?,
            trailer_type: required("type")?,
            max_length: required("max_length")?,
            max_width: required("max_width")?,
            max_height: required("max_height")?,
            max_weight: required("max_weight")?,
            features: position("features"),
            specialized_for: position("specialized_for"),
        })
    }
}

/// Parse trailer rows from CSV text
pub fn parse_trailers(content: &str) -> Result<Vec<TrailerSpec>, CsvCatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = Columns::from_headers(&headers)?;

    let mut trailers = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        // header is row 1
        let row_num = row_idx + 2;
        trailers.push(parse_record(&record, &columns, row_num)?);
    }

    Ok(trailers)
}

/// Load and validate a catalog from a CSV file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> haulmatch_types::Result<TrailerCatalog> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    let mut content = String::new();
    File::open(path)?.read_to_string(&mut content)?;

    let trailers = parse_trailers(&content)?;
    log::debug!("Parsed {} trailer(s) from {}", trailers.len(), path.display());
    TrailerCatalog::new(trailers)
}

fn parse_record(record: &csv::StringRecord, columns: &Columns, row_num: usize) -> Result<TrailerSpec, CsvCatalogError> {
    let text = |index: usize| record.get(index).unwrap_or("").to_string();
    let number = |index: usize, column: &str| parse_f64(record.get(index).unwrap_or(""), row_num, column);
    let list = |index: Option<usize>| {
        index
            .and_then(|i| record.get(i))
            .map(split_list)
            .unwrap_or_default()
    };

    let specialized_for = list(columns.specialized_for);

    Ok(TrailerSpec {
        id: text(columns.id),
        name: text(columns.name),
        trailer_type: TrailerType::from_name(record.get(columns.trailer_type).unwrap_or("")),
        max_length: number(columns.max_length, "max_length")?,
        max_width: number(columns.max_width, "max_width")?,
        max_height: number(columns.max_height, "max_height")?,
        max_weight: number(columns.max_weight, "max_weight")?,
        features: list(columns.features),
        specialized_for: if specialized_for.is_empty() {
            None
        } else {
            Some(specialized_for)
        },
    })
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_f64(value: &str, row: usize, column: &str) -> Result<f64, CsvCatalogError> {
    value
        .replace(',', "")
        .parse::<f64>()
        .map_err(|_| CsvCatalogError::InvalidNumber {
            row,
            column: column.to_string(),
            value: value.to_string(),
        })
}
