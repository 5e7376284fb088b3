/*
saver.rs

Copyright 2025 Hervé Quatremain

This file is part of Trisplit.

Trisplit is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Trisplit is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Trisplit. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Save and restore generated partitions.
//!
//! The saved object is a serialization of a list of [`Partition`] objects in JSON format by using
//! [`serde`].

use log::debug;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::generator::partition::Partition;

/// Object to save and restore partitions.
pub struct SaverPartitions {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverPartitions {
    /// Create a [`SaverPartitions`] object for the given file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Partition file: {save_file:?}");
        SaverPartitions { save_file }
    }

    /// Retrieve the saved partitions.
    ///
    /// Return None if the file does not exist.
    pub fn get_partitions(&self) -> Result<Option<Vec<Partition>>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let partitions: Vec<Partition> = serde_json::from_reader(reader)?;
        Ok(Some(partitions))
    }

    /// Save the provided partitions.
    pub fn save_partitions(&self, partitions: &[Partition]) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, partitions)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the saved partitions.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}
