use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, BooleanArray, UInt32Array};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use siteanno_core::models::{AnnotationTable, AnnotationValues};

use crate::consts::{DATASET_REF_SEPARATOR, POS_COLUMN, POS_DIR, TABLE_EXT, VALUE_COLUMN};
use crate::error::{Result, StoreError};

///
/// Split a dataset reference of the form `path:dataset_group` into the store
/// root path and the dataset group name.
///
/// # Arguments:
/// - in_file: the combined reference, e.g. `data/store:train`
///
pub fn split_path(in_file: &str) -> Result<(PathBuf, String)> {
    match in_file.rsplit_once(DATASET_REF_SEPARATOR) {
        Some((path, group)) if !path.is_empty() && !group.is_empty() => {
            Ok((PathBuf::from(path), group.to_string()))
        }
        _ => Err(StoreError::InvalidDatasetRef(in_file.to_string())),
    }
}

///
/// Output group kind for annotation result tables. The distance variant
/// carries the `_dist` group suffix.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationGroup {
    Membership,
    Distance,
}

impl AnnotationGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationGroup::Membership => "annos",
            AnnotationGroup::Distance => "annos_dist",
        }
    }
}

///
/// Handle on one dataset group inside a position store. Position tables are
/// read from `<root>/<dataset>/pos/<chromo>.parquet`; annotation tables are
/// written to `<root>/<dataset>/<annos[_dist]>/<anno_name>/<chromo>.parquet`.
/// Writing to an existing table path overwrites it.
///
#[derive(Debug, Clone)]
pub struct PositionStore {
    root: PathBuf,
    dataset: String,
}

impl PositionStore {
    pub fn new<P: AsRef<Path>>(root: P, dataset: &str) -> Self {
        PositionStore {
            root: root.as_ref().to_path_buf(),
            dataset: dataset.to_string(),
        }
    }

    /// Open a store from a combined `path:dataset_group` reference.
    pub fn from_ref(in_file: &str) -> Result<Self> {
        let (root, dataset) = split_path(in_file)?;
        Ok(PositionStore::new(root, &dataset))
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    fn dataset_dir(&self) -> PathBuf {
        self.root.join(&self.dataset)
    }

    fn pos_path(&self, chromo: &str) -> PathBuf {
        self.dataset_dir()
            .join(POS_DIR)
            .join(format!("{}.{}", chromo, TABLE_EXT))
    }

    fn anno_path(&self, group: AnnotationGroup, anno_name: &str, chromo: &str) -> PathBuf {
        self.dataset_dir()
            .join(group.as_str())
            .join(anno_name)
            .join(format!("{}.{}", chromo, TABLE_EXT))
    }

    ///
    /// All chromosomes with a position table in this dataset group,
    /// lexicographically sorted.
    ///
    pub fn list_chromos(&self) -> Result<Vec<String>> {
        let pos_dir = self.dataset_dir().join(POS_DIR);
        if !pos_dir.is_dir() {
            return Err(StoreError::EmptyDataset(pos_dir.display().to_string()));
        }

        let mut chromos: Vec<String> = Vec::new();
        for entry in std::fs::read_dir(&pos_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some(TABLE_EXT) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    chromos.push(stem.to_string());
                }
            }
        }

        if chromos.is_empty() {
            return Err(StoreError::EmptyDataset(pos_dir.display().to_string()));
        }

        chromos.sort();
        Ok(chromos)
    }

    ///
    /// Positions for one chromosome, in stored (ascending) order.
    ///
    pub fn read_pos(&self, chromo: &str) -> Result<Vec<u32>> {
        let path = self.pos_path(chromo);
        if !path.is_file() {
            return Err(StoreError::MissingChromosome {
                dataset: self.dataset.clone(),
                chromo: chromo.to_string(),
            });
        }

        let file = File::open(&path)?;
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

        let mut pos: Vec<u32> = Vec::new();
        for batch in reader {
            let batch = batch?;
            let column = required_u32_column(&batch, POS_COLUMN)?;
            if column.null_count() > 0 {
                return Err(StoreError::InvalidColumn(
                    POS_COLUMN.to_string(),
                    "position column must not contain nulls".to_string(),
                ));
            }
            pos.extend(column.values().iter().copied());
        }

        Ok(pos)
    }

    ///
    /// Write the position table for one chromosome. Creates the dataset
    /// group directories as needed; an existing table is overwritten.
    ///
    pub fn write_pos(&self, chromo: &str, pos: &[u32]) -> Result<()> {
        let schema = Arc::new(Schema::new(vec![Field::new(
            POS_COLUMN,
            DataType::UInt32,
            false,
        )]));
        let columns: Vec<ArrayRef> = vec![Arc::new(UInt32Array::from(pos.to_vec())) as ArrayRef];
        self.write_table(&self.pos_path(chromo), schema, columns)
    }

    ///
    /// Persist one annotation result table under
    /// `<dataset>/<annos[_dist]>/<anno_name>/<chromo>`.
    ///
    pub fn write_annotation(
        &self,
        group: AnnotationGroup,
        anno_name: &str,
        chromo: &str,
        table: &AnnotationTable,
    ) -> Result<()> {
        let (value_field, value_column): (Field, ArrayRef) = match &table.values {
            AnnotationValues::Membership(values) => (
                Field::new(VALUE_COLUMN, DataType::Boolean, false),
                Arc::new(BooleanArray::from(values.clone())) as ArrayRef,
            ),
            AnnotationValues::Distance(values) => (
                Field::new(VALUE_COLUMN, DataType::UInt32, true),
                Arc::new(UInt32Array::from(values.clone())) as ArrayRef,
            ),
        };

        let schema = Arc::new(Schema::new(vec![
            Field::new(POS_COLUMN, DataType::UInt32, false),
            value_field,
        ]));
        let columns: Vec<ArrayRef> = vec![
            Arc::new(UInt32Array::from(table.pos.clone())) as ArrayRef,
            value_column,
        ];

        self.write_table(&self.anno_path(group, anno_name, chromo), schema, columns)
    }

    ///
    /// Read back one annotation result table. The value column type is
    /// implied by the group kind.
    ///
    pub fn read_annotation(
        &self,
        group: AnnotationGroup,
        anno_name: &str,
        chromo: &str,
    ) -> Result<AnnotationTable> {
        let path = self.anno_path(group, anno_name, chromo);
        let file = File::open(&path)?;
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

        let mut pos: Vec<u32> = Vec::new();
        let mut membership: Vec<bool> = Vec::new();
        let mut distance: Vec<Option<u32>> = Vec::new();

        for batch in reader {
            let batch = batch?;
            let pos_column = required_u32_column(&batch, POS_COLUMN)?;
            pos.extend(pos_column.values().iter().copied());

            match group {
                AnnotationGroup::Membership => {
                    let column = batch
                        .column_by_name(VALUE_COLUMN)
                        .ok_or_else(|| StoreError::MissingColumn(VALUE_COLUMN.to_string()))?;
                    let column =
                        column.as_any().downcast_ref::<BooleanArray>().ok_or_else(|| {
                            StoreError::InvalidColumn(
                                VALUE_COLUMN.to_string(),
                                "expected a Boolean column".to_string(),
                            )
                        })?;
                    membership.extend((0..column.len()).map(|i| column.value(i)));
                }
                AnnotationGroup::Distance => {
                    let column = required_u32_column(&batch, VALUE_COLUMN)?;
                    distance.extend(column.iter());
                }
            }
        }

        let values = match group {
            AnnotationGroup::Membership => AnnotationValues::Membership(membership),
            AnnotationGroup::Distance => AnnotationValues::Distance(distance),
        };
        Ok(AnnotationTable::new(pos, values))
    }

    fn write_table(&self, path: &Path, schema: SchemaRef, columns: Vec<ArrayRef>) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let batch = RecordBatch::try_new(schema.clone(), columns)?;

        let file = File::create(path)?;
        let props = WriterProperties::builder()
            .set_compression(Compression::SNAPPY)
            .build();
        let mut writer = ArrowWriter::try_new(file, schema, Some(props))?;
        writer.write(&batch)?;
        writer.close()?;

        Ok(())
    }
}

fn required_u32_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a UInt32Array> {
    let column = batch
        .column_by_name(name)
        .ok_or_else(|| StoreError::MissingColumn(name.to_string()))?;
    column.as_any().downcast_ref::<UInt32Array>().ok_or_else(|| {
        StoreError::InvalidColumn(name.to_string(), "expected a UInt32 column".to_string())
    })
}
