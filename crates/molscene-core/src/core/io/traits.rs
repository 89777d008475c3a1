use crate::core::models::atom::Atom;
use crate::core::models::scene::Scene;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading atom lists from coordinate file formats.
///
/// Implementors handle format-specific parsing and decide which malformed
/// records are skipped and which abort the read.
pub trait MoleculeFile {
    /// Format-specific reading options.
    type Options: Default;

    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads the atoms of a structure from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    /// * `options` - Format-specific options controlling the parse.
    ///
    /// # Return
    ///
    /// Returns the atoms in the order they appear in the input.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(
        reader: &mut impl BufRead,
        options: &Self::Options,
    ) -> Result<Vec<Atom>, Self::Error>;

    /// Reads the atoms of a structure from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
        options: &Self::Options,
    ) -> Result<Vec<Atom>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, options)
    }
}

/// Defines the interface for serializing scenes.
pub trait SceneFile {
    /// The error type for write operations.
    type Error: Error + From<io::Error>;

    /// Writes a scene to a writer, one record per line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(scene: &Scene, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Writes a scene to a file path, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(scene, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
