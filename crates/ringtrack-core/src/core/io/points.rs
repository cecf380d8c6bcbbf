use crate::core::models::tracking::{DynApGridPoint, Plane, Pos};
use crate::core::status::Status;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PointsFileError {
    #[error("CSV error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

impl PointsFileError {
    pub fn status(&self) -> Status {
        match self {
            PointsFileError::Csv { source, .. } => match source.kind() {
                csv::ErrorKind::Io(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    Status::FileNotFound
                }
                csv::ErrorKind::Io(_) => Status::FileNotOpened,
                _ => Status::InconsistentDimensions,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct GridRecord {
    start_element: usize,
    lost_turn: u32,
    lost_element: usize,
    lost_plane: Plane,
    rx: f64,
    px: f64,
    ry: f64,
    py: f64,
    de: f64,
    dl: f64,
    #[serde(default)]
    nux1: f64,
    #[serde(default)]
    nuy1: f64,
    #[serde(default)]
    nux2: f64,
    #[serde(default)]
    nuy2: f64,
}

impl From<GridRecord> for DynApGridPoint {
    fn from(r: GridRecord) -> Self {
        Self {
            start_element: r.start_element,
            lost_turn: r.lost_turn,
            lost_element: r.lost_element,
            lost_plane: r.lost_plane,
            p: Pos::new(r.rx, r.px, r.ry, r.py, r.de, r.dl),
            nux1: r.nux1,
            nuy1: r.nuy1,
            nux2: r.nux2,
            nuy2: r.nuy2,
        }
    }
}

fn csv_error(origin: &str) -> impl Fn(csv::Error) -> PointsFileError + '_ {
    move |source| PointsFileError::Csv {
        path: origin.to_string(),
        source,
    }
}

/// Reads phase-space points from CSV with header `rx,px,ry,py,de,dl`.
pub fn read_points(reader: impl Read, origin: &str) -> Result<Vec<Pos>, PointsFileError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    reader
        .deserialize::<Pos>()
        .map(|record| record.map_err(csv_error(origin)))
        .collect()
}

pub fn read_points_from_path(path: &Path) -> Result<Vec<Pos>, PointsFileError> {
    let origin = path.to_string_lossy();
    let file = std::fs::File::open(path).map_err(|e| PointsFileError::Csv {
        path: origin.to_string(),
        source: e.into(),
    })?;
    read_points(file, &origin)
}

/// Reads a dynamic-aperture grid from CSV.
///
/// Header: `start_element,lost_turn,lost_element,lost_plane,rx,px,ry,py,de,dl`,
/// optionally followed by `nux1,nuy1,nux2,nuy2`. Planes are `none`, `x`, `y` or `z`.
pub fn read_dynap_grid(
    reader: impl Read,
    origin: &str,
) -> Result<Vec<DynApGridPoint>, PointsFileError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    reader
        .deserialize::<GridRecord>()
        .map(|record| record.map(Into::into).map_err(csv_error(origin)))
        .collect()
}

pub fn read_dynap_grid_from_path(path: &Path) -> Result<Vec<DynApGridPoint>, PointsFileError> {
    let origin = path.to_string_lossy();
    let file = std::fs::File::open(path).map_err(|e| PointsFileError::Csv {
        path: origin.to_string(),
        source: e.into(),
    })?;
    read_dynap_grid(file, &origin)
}
