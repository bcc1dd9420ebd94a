// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Header-indexed tables read from CSV.

use core::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use hashbrown::HashMap;

use crate::fields::FieldSource;

/// Error returned when an input source cannot be read as a table at all.
///
/// Individual malformed rows are never an error; they are skipped during
/// ingestion.
#[derive(Debug)]
pub enum LoadError {
    /// The input file could not be opened.
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The CSV reader failed (I/O while reading, invalid UTF-8, ...).
    Csv(csv::Error),
    /// The input has no header row.
    MissingHeader,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, .. } => write!(f, "failed to open {}", path.display()),
            Self::Csv(err) => write!(f, "failed to read CSV: {err}"),
            Self::MissingHeader => f.write_str("input has no header row"),
        }
    }
}

impl core::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Csv(err) => Some(err),
            Self::MissingHeader => None,
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Rows of named string fields.
///
/// Records may be shorter than the header; missing trailing fields read as
/// absent.
#[derive(Clone, Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    index: HashMap<String, usize>,
    records: Vec<StringRecord>,
}

impl Table {
    /// Builds a table from a header and rows of values.
    pub fn new<H, R, V>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let records = rows
            .into_iter()
            .map(|row| row.into_iter().collect::<StringRecord>())
            .collect();
        Self::from_parts(headers, records)
    }

    /// Reads a CSV document with a header row.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, LoadError> {
        let mut rdr = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(reader);
        let headers = rdr.headers()?.clone();
        if headers.is_empty() || headers.iter().all(str::is_empty) {
            return Err(LoadError::MissingHeader);
        }
        let records = rdr.records().collect::<Result<Vec<_>, _>>()?;
        let table = Self::from_parts(headers.iter().map(str::to_owned).collect(), records);
        tracing::debug!(
            columns = table.headers.len(),
            rows = table.records.len(),
            "read CSV table"
        );
        Ok(table)
    }

    /// Reads a CSV file with a header row.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_owned(),
            source,
        })?;
        Self::from_reader(io::BufReader::new(file))
    }

    fn from_parts(headers: Vec<String>, records: Vec<StringRecord>) -> Self {
        let mut index = HashMap::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            // First occurrence wins for duplicated header names.
            index.entry(name.clone()).or_insert(i);
        }
        Self {
            headers,
            index,
            records,
        }
    }

    /// Column names in source order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns `true` if the table has a column with this name.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates rows in source order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        self.records.iter().map(move |record| Row {
            table: self,
            record,
        })
    }
}

/// One row of a [`Table`].
#[derive(Clone, Copy, Debug)]
pub struct Row<'a> {
    table: &'a Table,
    record: &'a StringRecord,
}

impl FieldSource for Row<'_> {
    fn field(&self, name: &str) -> Option<&str> {
        let i = *self.table.index.get(name)?;
        self.record.get(i)
    }
}
