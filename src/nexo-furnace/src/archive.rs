//! Resource pack archive extraction

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use crate::Result;

/// Extract every entry of a ZIP archive into `destination`.
///
/// Entries whose names would escape `destination` are skipped. Returns the
/// number of files written.
pub fn extract_archive(archive_path: &Path, destination: &Path) -> Result<usize> {
    let file = File::open(archive_path)?;
    let reader = BufReader::new(file);
    let mut archive = zip::ZipArchive::new(reader)?;

    fs::create_dir_all(destination)?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let entry_path = match entry.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => {
                tracing::warn!("Skipping unsafe archive entry: {}", entry.name());
                continue;
            }
        };

        let output_path = destination.join(&entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&output_path)?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = File::create(&output_path)?;
            std::io::copy(&mut entry, &mut outfile)?;
            written += 1;
        }
    }

    Ok(written)
}
