use crate::core::models::accelerator::Accelerator;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing persisted accelerator descriptions.
///
/// Implementors handle the format-specific parsing and serialization; the path
/// helpers only wrap file creation and buffering around them.
pub trait AcceleratorFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads an accelerator from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the reader fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Accelerator, Self::Error>;

    /// Writes an accelerator to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    fn write_to(accelerator: &Accelerator, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads an accelerator from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Accelerator, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes an accelerator to a file path, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        accelerator: &Accelerator,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(accelerator, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
