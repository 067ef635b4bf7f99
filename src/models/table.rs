//! The validated risk table
//!
//! A `ValidatedTable` only exists in a fully valid state: every record has a
//! year, a non-empty risk and a non-empty name. It is never mutated after
//! construction; queries borrow it and build new values.

use std::sync::Arc;

use arrow::array::{ArrayRef, Int32Builder, StringBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use crate::config::ColumnNames;
use crate::error::Result;
use crate::models::record::RiskRecord;

/// Ordered, immutable collection of validated risk records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedTable {
    columns: ColumnNames,
    extra_columns: Vec<String>,
    records: Vec<RiskRecord>,
}

impl ValidatedTable {
    /// Assemble a table from already-validated parts
    ///
    /// Records violating the invariant are discarded, and passthrough values
    /// are padded or cut to the number of extra columns.
    #[must_use]
    pub fn new(columns: ColumnNames, extra_columns: Vec<String>, records: Vec<RiskRecord>) -> Self {
        let width = extra_columns.len();
        let records = records
            .into_iter()
            .filter(RiskRecord::is_well_formed)
            .map(|mut record| {
                record.extra.resize(width, None);
                record
            })
            .collect();

        Self {
            columns,
            extra_columns,
            records,
        }
    }

    /// Build a table with default column names and no passthrough columns
    ///
    /// Handy for programmatic construction; tuples with an empty risk or name
    /// are skipped.
    #[must_use]
    pub fn from_tuples<I, R, N>(rows: I) -> Self
    where
        I: IntoIterator<Item = (i32, R, N)>,
        R: Into<String>,
        N: Into<String>,
    {
        let records = rows
            .into_iter()
            .map(|(year, risk, name)| RiskRecord::new(year, risk, name))
            .collect();
        Self::new(ColumnNames::default(), Vec::new(), records)
    }

    /// Names of the required columns as they appeared in the source
    #[must_use]
    pub fn columns(&self) -> &ColumnNames {
        &self.columns
    }

    /// Names of the passthrough columns, in source order
    #[must_use]
    pub fn extra_columns(&self) -> &[String] {
        &self.extra_columns
    }

    /// All records in source order
    #[must_use]
    pub fn records(&self) -> &[RiskRecord] {
        &self.records
    }

    /// Iterate over the records
    pub fn iter(&self) -> std::slice::Iter<'_, RiskRecord> {
        self.records.iter()
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Passthrough value of `column` for the record at `row`
    #[must_use]
    pub fn extra_value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.extra_columns.iter().position(|c| c == column)?;
        self.records.get(row)?.extra.get(idx)?.as_deref()
    }

    /// Arrow schema of [`Self::to_record_batch`]
    #[must_use]
    pub fn schema(&self) -> Schema {
        let mut fields = vec![
            Field::new(&self.columns.year, DataType::Int32, false),
            Field::new(&self.columns.risk, DataType::Utf8, false),
            Field::new(&self.columns.name, DataType::Utf8, false),
        ];
        fields.extend(
            self.extra_columns
                .iter()
                .map(|c| Field::new(c, DataType::Utf8, true)),
        );
        Schema::new(fields)
    }

    /// Export the table as an Arrow `RecordBatch`
    ///
    /// Required columns keep their source headers; passthrough columns are
    /// nullable strings.
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let mut years = Int32Builder::with_capacity(self.len());
        let mut risks = StringBuilder::new();
        let mut names = StringBuilder::new();
        let mut extras: Vec<StringBuilder> =
            self.extra_columns.iter().map(|_| StringBuilder::new()).collect();

        for record in &self.records {
            years.append_value(record.year);
            risks.append_value(&record.risk);
            names.append_value(&record.name);
            for (builder, value) in extras.iter_mut().zip(&record.extra) {
                builder.append_option(value.as_deref());
            }
        }

        let mut columns: Vec<ArrayRef> = vec![
            Arc::new(years.finish()),
            Arc::new(risks.finish()),
            Arc::new(names.finish()),
        ];
        columns.extend(
            extras
                .iter_mut()
                .map(|builder| Arc::new(builder.finish()) as ArrayRef),
        );

        Ok(RecordBatch::try_new(Arc::new(self.schema()), columns)?)
    }
}

impl<'a> IntoIterator for &'a ValidatedTable {
    type Item = &'a RiskRecord;
    type IntoIter = std::slice::Iter<'a, RiskRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
