//! Whole-collection import and export in RFC 4180 CSV.
//!
//! The first record of every file is a header naming the columns. A file
//! whose header does not match the entity's header is copied aside to
//! `Erroneous<Entity>.csv` and replaced by an empty, header-only file.

use crate::error::Result;
use crate::paths;
use crate::repo::{AddMode, Collection};
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use organiser_core::domain::Record;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of reading a file into a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub attempted: usize,
    /// The header did not match; nothing was loaded.
    pub corrupted: bool,
    /// The collection filled up before the file ran out.
    pub truncated: bool,
    pub quarantined: Option<PathBuf>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        !self.corrupted && !self.truncated && self.loaded == self.attempted
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnMismatch {
    Quarantine,
    Leave,
}

/// A CSV file holding one entity type.
///
/// `template` is the blank entity each record is applied onto, so settings
/// such as the phone rule carry over to loaded entries.
#[derive(Debug, Clone)]
pub struct CsvFile<T: Record> {
    path: PathBuf,
    template: T,
}

impl<T: Record> CsvFile<T> {
    pub fn new(path: impl Into<PathBuf>, template: T) -> Self {
        Self {
            path: path.into(),
            template,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn quarantine_path(&self) -> PathBuf {
        let name = format!("Erroneous{}.csv", T::ENTITY);
        match self.path.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        }
    }

    /// Creates a header-only file when missing or empty; otherwise makes sure
    /// the last line is terminated so appends start on a fresh line.
    pub fn ensure_exists(&self) -> Result<()> {
        paths::ensure_parent_dir(&self.path)?;
        let len = match fs::metadata(&self.path) {
            Ok(meta) => meta.len(),
            Err(err) if err.kind() == ErrorKind::NotFound => 0,
            Err(err) => return Err(err.into()),
        };
        if len == 0 {
            debug!(path = %self.path.display(), "creating header-only file");
            return self.write_header_only();
        }

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)?;
        file.seek(SeekFrom::End(-1))?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last)?;
        if last[0] != b'\n' {
            file.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Loads every acceptable record into `collection`.
    ///
    /// A missing or empty file is given a header and loads nothing. A header mismatch quarantines the
    /// file and loads nothing.
    pub fn load(&self, collection: &mut Collection<T>) -> Result<LoadReport> {
        let is_blank = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(err) if err.kind() == ErrorKind::NotFound => true,
            Err(err) => return Err(err.into()),
        };
        if is_blank {
            self.ensure_exists()?;
            return Ok(LoadReport::default());
        }
        self.read_into(collection, OnMismatch::Quarantine)
    }

    /// Like [`CsvFile::load`] but never touches the file: a bad header is
    /// only reported.
    pub fn import(&self, collection: &mut Collection<T>) -> Result<LoadReport> {
        self.read_into(collection, OnMismatch::Leave)
    }

    /// Rewrites the whole file: header, then one record per entry.
    pub fn save(&self, collection: &Collection<T>) -> Result<()> {
        paths::ensure_parent_dir(&self.path)?;
        let staging = staging_path(&self.path);
        {
            let mut writer = writer_builder().from_path(&staging)?;
            writer.write_record(T::HEADER)?;
            for entity in collection {
                writer.write_record(entity.to_record())?;
            }
            writer.flush()?;
        }
        fs::rename(&staging, &self.path)?;
        paths::restrict_file_permissions(&self.path)?;
        debug!(
            path = %self.path.display(),
            entries = collection.len(),
            "collection saved"
        );
        Ok(())
    }

    /// Appends a single record without rewriting the header.
    pub fn append(&self, entity: &T) -> Result<()> {
        self.ensure_exists()?;
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = writer_builder().from_writer(file);
        writer.write_record(entity.to_record())?;
        writer.flush()?;
        Ok(())
    }

    fn read_into(
        &self,
        collection: &mut Collection<T>,
        on_mismatch: OnMismatch,
    ) -> Result<LoadReport> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;
        let mut records = reader.records();

        let header = match records.next() {
            Some(Ok(record)) => record,
            Some(Err(err)) if err.is_io_error() => return Err(err.into()),
            Some(Err(err)) => {
                debug!(path = %self.path.display(), error = %err, "unreadable header");
                drop(records);
                drop(reader);
                return self.handle_mismatch(on_mismatch);
            }
            None => StringRecord::new(),
        };
        if !header_matches::<T>(&header) {
            drop(records);
            drop(reader);
            return self.handle_mismatch(on_mismatch);
        }

        let mut report = LoadReport::default();
        for result in records {
            let record = match result {
                Ok(record) => record,
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    report.attempted += 1;
                    warn!(path = %self.path.display(), error = %err, "unreadable record skipped");
                    continue;
                }
            };
            report.attempted += 1;

            if collection.is_full() {
                report.truncated = true;
                continue;
            }
            if record.len() != T::arity() {
                debug!(
                    path = %self.path.display(),
                    fields = record.len(),
                    expected = T::arity(),
                    "record with wrong field count skipped"
                );
                continue;
            }

            let fields: Vec<String> = record.iter().map(str::to_string).collect();
            let mut entity = self.template.clone();
            entity.apply_record(&fields);
            match collection.add(entity, AddMode::Import) {
                Ok(()) => report.loaded += 1,
                Err(err) => debug!(path = %self.path.display(), error = %err, "record rejected"),
            }
        }

        if report.truncated {
            warn!(
                path = %self.path.display(),
                loaded = report.loaded,
                attempted = report.attempted,
                "file holds more entries than allowed, surplus discarded"
            );
        }
        info!(
            path = %self.path.display(),
            loaded = report.loaded,
            attempted = report.attempted,
            "file loaded"
        );
        Ok(report)
    }

    fn handle_mismatch(&self, on_mismatch: OnMismatch) -> Result<LoadReport> {
        let mut report = LoadReport {
            corrupted: true,
            ..LoadReport::default()
        };
        match on_mismatch {
            OnMismatch::Leave => {
                warn!(path = %self.path.display(), "header mismatch, file not imported");
            }
            OnMismatch::Quarantine => {
                let target = self.quarantine_path();
                fs::copy(&self.path, &target)?;
                self.write_header_only()?;
                warn!(
                    path = %self.path.display(),
                    quarantine = %target.display(),
                    "header mismatch, file moved aside and recreated"
                );
                report.quarantined = Some(target);
            }
        }
        Ok(report)
    }

    fn write_header_only(&self) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = writer_builder().from_writer(file);
        writer.write_record(T::HEADER)?;
        writer.flush()?;
        paths::restrict_file_permissions(&self.path)?;
        Ok(())
    }
}

fn writer_builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder.terminator(Terminator::Any(b'\n'));
    builder
}

fn header_matches<T: Record>(header: &StringRecord) -> bool {
    header.len() == T::HEADER.len()
        && header
            .iter()
            .zip(T::HEADER.iter())
            .all(|(found, expected)| found == *expected)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
