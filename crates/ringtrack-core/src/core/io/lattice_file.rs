use crate::core::io::traits::AcceleratorFile;
use crate::core::models::accelerator::Accelerator;
use crate::core::models::element::Element;
use crate::core::models::lattice::Lattice;
use crate::core::status::Status;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Read, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LatticeFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parsing error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid element #{index} ('{fam_name}'): {reason}")]
    InvalidElement {
        index: usize,
        fam_name: String,
        reason: String,
    },
}

impl LatticeFileError {
    pub fn status(&self) -> Status {
        match self {
            LatticeFileError::Io(e) if e.kind() == io::ErrorKind::NotFound => Status::FileNotFound,
            LatticeFileError::Io(_) => Status::FileNotOpened,
            _ => Status::FlatFileError,
        }
    }
}

fn default_harmonic_number() -> u32 {
    1
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct AcceleratorSection {
    energy: f64,
    #[serde(default = "default_harmonic_number")]
    harmonic_number: u32,
    #[serde(default)]
    cavity_on: bool,
    #[serde(default)]
    radiation_on: bool,
    #[serde(default)]
    vchamber_on: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct LatticeDocument {
    accelerator: AcceleratorSection,
    #[serde(default, rename = "element")]
    elements: Vec<Element>,
}

fn validate(elements: &[Element]) -> Result<(), LatticeFileError> {
    for (index, element) in elements.iter().enumerate() {
        let reason = if !(element.length >= 0.0) {
            Some(format!("length must be non-negative, got {}", element.length))
        } else if element.nr_steps == 0 {
            Some("nr-steps must be positive".to_string())
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(LatticeFileError::InvalidElement {
                index,
                fam_name: element.fam_name.clone(),
                reason,
            });
        }
    }
    Ok(())
}

/// TOML lattice description: an `[accelerator]` table followed by one
/// `[[element]]` table per element, in ring order.
///
/// ```toml
/// [accelerator]
/// energy = 3.0e9
/// harmonic-number = 864
/// cavity-on = true
///
/// [[element]]
/// fam-name = "QF"
/// length = 0.2
/// pass-method = "str_mpole_symplectic4_pass"
/// nr-steps = 10
/// polynom-b = [0.0, 2.5, 0.0]
/// ```
pub struct LatticeFile;

impl AcceleratorFile for LatticeFile {
    type Error = LatticeFileError;

    fn read_from(reader: &mut impl BufRead) -> Result<Accelerator, Self::Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        let document: LatticeDocument = toml::from_str(&content)?;
        validate(&document.elements)?;

        let section = document.accelerator;
        Ok(Accelerator {
            energy: section.energy,
            harmonic_number: section.harmonic_number,
            cavity_on: section.cavity_on,
            radiation_on: section.radiation_on,
            vchamber_on: section.vchamber_on,
            lattice: Lattice::from_elements(document.elements),
        })
    }

    fn write_to(accelerator: &Accelerator, writer: &mut impl Write) -> Result<(), Self::Error> {
        let document = LatticeDocument {
            accelerator: AcceleratorSection {
                energy: accelerator.energy,
                harmonic_number: accelerator.harmonic_number,
                cavity_on: accelerator.cavity_on,
                radiation_on: accelerator.radiation_on,
                vchamber_on: accelerator.vchamber_on,
            },
            elements: accelerator.lattice.elements().to_vec(),
        };
        let text = toml::to_string(&document)?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }
}
