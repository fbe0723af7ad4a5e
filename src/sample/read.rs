use std::error::Error as StdError;
use std::fmt;
use std::path::Path;

use csv::ReaderBuilder;
use serde::de::DeserializeOwned;

use super::Sample;

/// Failure while loading observed data from disk.
#[derive(Debug)]
pub enum SampleError {
    Io(std::io::Error),
    Csv(csv::Error),
    EmptyFile,
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::Io(e) => write!(f, "I/O error: {}", e),
            SampleError::Csv(e) => write!(f, "CSV parsing error: {}", e),
            SampleError::EmptyFile => write!(f, "CSV file contains no data records"),
        }
    }
}

impl StdError for SampleError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            SampleError::Io(e) => Some(e),
            SampleError::Csv(e) => Some(e),
            SampleError::EmptyFile => None,
        }
    }
}

impl From<std::io::Error> for SampleError {
    fn from(e: std::io::Error) -> Self {
        SampleError::Io(e)
    }
}

impl From<csv::Error> for SampleError {
    fn from(e: csv::Error) -> Self {
        SampleError::Csv(e)
    }
}

impl<T> Sample<T> {
    /// Read sample data from a headered CSV file.
    ///
    /// Useful for feeding observed data into [`crate::BootstrapCritical`]
    /// instead of a synthetic draw.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, SampleError>
    where
        T: DeserializeOwned,
    {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;

        let mut records = Vec::new();
        for result in rdr.deserialize() {
            records.push(result?);
        }

        if records.is_empty() {
            return Err(SampleError::EmptyFile);
        }

        Ok(Self { data: records })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn read_single_column_csv() {
        let path = std::env::temp_dir().join("nulla_read_single_column.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "y\n1.5\n-0.25\n3.0").unwrap();
        drop(f);

        let sample: Sample<f64> = Sample::read(&path).unwrap();
        assert_eq!(sample.data, vec![1.5, -0.25, 3.0]);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn empty_file_is_an_error() {
        let path = std::env::temp_dir().join("nulla_read_empty.csv");
        std::fs::write(&path, "y\n").unwrap();

        let err = Sample::<f64>::read(&path).unwrap_err();
        assert!(matches!(err, SampleError::EmptyFile));
        std::fs::remove_file(&path).ok();
    }
}
