use std::{
    error::Error,
    fs::File,
    io::{Error as IOError, ErrorKind},
    path::Path,
};

/// A module for reading and writing alignment results in a versioned,
/// tab-separated text format.
pub mod pairwise;

pub use pairwise::{PairwiseRecordReader, PairwiseRecordWriter};

/// An IO error annotated with the file it occurred for.
#[derive(Debug)]
struct RecordError {
    description: String,
    source:      Box<dyn Error + Send + Sync>,
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// File handling shared by record readers and writers, providing the file
/// path and record kind as context for error messages.
trait RecordFile {
    const RECORD_NAME: &'static str;

    /// Opens a file for reading, checking to ensure that it is non-empty.
    #[inline]
    fn open_nonempty_file<P: AsRef<Path>>(filename: P) -> std::io::Result<File> {
        let path = filename.as_ref();

        let file = File::open(path).map_err(|err| Self::with_context("file open error", path, err))?;
        let metadata = file
            .metadata()
            .map_err(|err| Self::with_context("metadata error", path, err))?;
        if metadata.len() == 0 {
            let err = IOError::new(ErrorKind::InvalidInput, "no data");
            return Err(Self::with_context("file empty", path, err));
        }

        Ok(file)
    }

    /// Creates (or truncates) a file for writing.
    #[inline]
    fn create_file<P: AsRef<Path>>(filename: P) -> std::io::Result<File> {
        let path = filename.as_ref();
        File::create(path).map_err(|err| Self::with_context("file create error", path, err))
    }

    /// Wraps `err`, keeping its kind, with a description naming the record
    /// kind and path.
    fn with_context(description: &str, path: &Path, err: IOError) -> IOError {
        IOError::new(
            err.kind(),
            RecordError {
                description: format!(
                    "{description} for {name}: '{path}'",
                    name = Self::RECORD_NAME,
                    path = path.display()
                ),
                source:      Box::new(err),
            },
        )
    }
}
