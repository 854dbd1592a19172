//! JSON documents on disk and the naming of dated output files.

use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter, Error, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_reader, to_writer_pretty};

/// Date format embedded in output filenames, e.g. `17.10.2026`.
pub const FILENAME_DATE_FORMAT: &str = "%d.%m.%Y";

/// Reads a JSON document from `path` through a buffered reader.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, Error> {
    let reader = BufReader::new(File::open(path)?);
    Ok(from_reader(reader)?)
}

/// JSON-encodes the `value` in pretty-printed form and writes it to a given `path`, creating
/// any missing parent directories. Non-ASCII text is written verbatim as UTF-8.
pub fn write_json(path: impl AsRef<Path>, value: &impl Serialize) -> Result<(), Error> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut writer = BufWriter::new(File::create(path)?);
    to_writer_pretty(&mut writer, value)?;
    writer.flush()
}

/// Composes `{prefix}_{date}.{extension}`, the date rendered in [`FILENAME_DATE_FORMAT`].
pub fn dated_filename(prefix: &str, date: NaiveDate, extension: &str) -> String {
    format!("{prefix}_{}.{extension}", date.format(FILENAME_DATE_FORMAT))
}

/// Resolves a dated file within `dir`. See [`dated_filename`].
pub fn dated_path(dir: impl AsRef<Path>, prefix: &str, date: NaiveDate, extension: &str) -> PathBuf {
    dir.as_ref().join(dated_filename(prefix, date, extension))
}
