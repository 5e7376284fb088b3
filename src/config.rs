/*
config.rs

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

//! Generator settings.
//!
//! The [`GeneratorConfig`] object groups the parameters that tune the level generator.
//! Its default values are the ones used by the game. Developers can override them with a JSON
//! file passed to the `--config` command-line option.

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::generator::errors::GenerateError;

/// Smallest number of pieces in a level.
pub const MIN_SHAPE_COUNT: u32 = 6;

/// Largest number of pieces in a level.
pub const MAX_SHAPE_COUNT: u32 = 12;

/// Grid size used when none is given.
pub const DEFAULT_GRID_SIZE: u32 = 3;

/// Text displayed by `--version` in long form.
pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain
License GPL-3.0-or-later <https://www.gnu.org/licenses/gpl-3.0.html>";

/// Parameters of the level generator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Requested shape counts below this value are raised to it.
    pub min_shape_count: u32,

    /// Requested shape counts above this value are lowered to it.
    /// The level progression never goes past this value either.
    pub max_shape_count: u32,

    /// Merge the small pockets left behind each piece before growing the next one.
    /// Without this pass, tiny enclosed spaces are only repaired once all the pieces are grown.
    pub fill_between_pieces: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_shape_count: MIN_SHAPE_COUNT,
            max_shape_count: MAX_SHAPE_COUNT,
            fill_between_pieces: true,
        }
    }
}

impl GeneratorConfig {
    /// Read a [`GeneratorConfig`] object from a JSON file.
    ///
    /// Missing fields get their default value.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        debug!("Loading generator configuration from {path:?}");
        let file: File = File::open(path)?;
        let reader: BufReader<File> = BufReader::new(file);
        let config: GeneratorConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Verify that the shape count bounds are usable.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.min_shape_count < 1 {
            return Err(GenerateError::Configuration(
                "the minimum shape count must be at least 1".to_string(),
            ));
        }
        if self.min_shape_count > self.max_shape_count {
            return Err(GenerateError::Configuration(format!(
                "the minimum shape count ({}) is greater than the maximum ({})",
                self.min_shape_count, self.max_shape_count
            )));
        }
        Ok(())
    }

    /// Clamp the requested shape count between the configured bounds.
    pub fn clamp_shape_count(&self, shape_count: u32) -> u32 {
        shape_count.clamp(self.min_shape_count, self.max_shape_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds() {
        let config = GeneratorConfig::default();
        assert_eq!(config.min_shape_count, 6);
        assert_eq!(config.max_shape_count, 12);
        assert!(config.fill_between_pieces);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn clamp_shape_count() {
        let config = GeneratorConfig::default();
        assert_eq!(config.clamp_shape_count(0), 6);
        assert_eq!(config.clamp_shape_count(9), 9);
        assert_eq!(config.clamp_shape_count(40), 12);
    }

    #[test]
    fn rejects_inverted_bounds() {
        let config = GeneratorConfig {
            min_shape_count: 8,
            max_shape_count: 7,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenerateError::Configuration(_))
        ));

        let config = GeneratorConfig {
            min_shape_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"fill_between_pieces": false}"#).unwrap();
        assert_eq!(config.min_shape_count, MIN_SHAPE_COUNT);
        assert_eq!(config.max_shape_count, MAX_SHAPE_COUNT);
        assert!(!config.fill_between_pieces);
    }
}
