//! KMZ container packing and unpacking.
//!
//! A route file is a zip archive holding exactly two entries, both stored
//! without compression so consumers can read them with a plain zip walk:
//!
//! * `wpmz/template.kml` - the authoring document
//! * `wpmz/waylines.wpml` - the execution document

use std::fs::{self, File};
use std::io::{BufReader, Read, Seek, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::builder::{build_template, build_waylines};
use crate::codec;
use crate::document::KmlFile;
use crate::error::{Error, Result};
use crate::mission::RouteMission;

pub const TEMPLATE_ENTRY: &str = "wpmz/template.kml";
pub const WAYLINES_ENTRY: &str = "wpmz/waylines.wpml";

/// The two documents carried by a route file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KmzDocuments {
    pub template: KmlFile,
    pub waylines: KmlFile,
}

/// Build both documents from the mission and write `<out_dir>/<name>.kmz`.
/// Returns the path of the written file.
pub fn build_kmz(out_dir: &Path, name: &str, mission: &RouteMission) -> Result<PathBuf> {
    let template = build_template(mission)?;
    let waylines = build_waylines(mission)?;
    write_kmz(out_dir, name, &template, &waylines)
}

/// Write the two documents into `<out_dir>/<name>.kmz`, creating `out_dir`
/// if needed.
pub fn write_kmz(
    out_dir: &Path,
    name: &str,
    template: &KmlFile,
    waylines: &KmlFile,
) -> Result<PathBuf> {
    fs::create_dir_all(out_dir).map_err(|source| Error::DirectoryCreation {
        path: out_dir.to_path_buf(),
        source,
    })?;
    let path = out_dir.join(format!("{name}.kmz"));
    let mut writer = ZipWriter::new(File::create(&path)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    writer
        .start_file(TEMPLATE_ENTRY, options)
        .map_err(std::io::Error::from)?;
    writer.write_all(codec::to_xml(template)?.as_bytes())?;
    writer
        .start_file(WAYLINES_ENTRY, options)
        .map_err(std::io::Error::from)?;
    writer.write_all(codec::to_xml(waylines)?.as_bytes())?;
    writer.finish().map_err(std::io::Error::from)?;

    tracing::debug!(path = %path.display(), "wrote route file");
    Ok(path)
}

/// Read both documents back out of a route file.
pub fn read_kmz<R: Read + Seek>(reader: R) -> Result<KmzDocuments> {
    let mut archive =
        ZipArchive::new(reader).map_err(|e| Error::MalformedContainer(e.to_string()))?;
    let template = read_entry(&mut archive, TEMPLATE_ENTRY)?;
    let waylines = read_entry(&mut archive, WAYLINES_ENTRY)?;
    Ok(KmzDocuments { template, waylines })
}

/// Read a route file from disk.
pub fn read_kmz_file(path: &Path) -> Result<KmzDocuments> {
    read_kmz(File::open(path)?)
}

fn read_entry<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<KmlFile> {
    let entry = archive
        .by_name(name)
        .map_err(|e| Error::MalformedContainer(format!("{name}: {e}")))?;
    codec::from_reader(BufReader::new(entry))
        .map_err(|e| Error::MalformedContainer(format!("{name}: {e}")))
}
