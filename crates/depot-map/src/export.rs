use std::path::PathBuf;

use anyhow::{Context, Result};

/// Writes the captured frame to disk as a PNG.
///
/// The destination is a fixed directory plus a fixed descriptive filename;
/// there is no versioning, so repeated writes overwrite the same file. The
/// exporter does not guard against partial files on failure; the caller
/// reports the error and aborts.
#[derive(Debug, Clone)]
pub struct FrameExporter {
    out_dir: PathBuf,
    file_name: String,
}

impl Default for FrameExporter {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("valid_warehouse_layouts"),
            file_name: "map_elites_paper_12.png".to_string(),
        }
    }
}

impl FrameExporter {
    pub fn new(out_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            out_dir: out_dir.into(),
            file_name: file_name.into(),
        }
    }

    /// Destination path of the exported image.
    pub fn path(&self) -> PathBuf {
        self.out_dir.join(&self.file_name)
    }

    /// Encodes `rgba` (tightly packed rows, top row first) and writes it.
    ///
    /// Creates the output directory if absent. Returns the written path.
    pub fn write_png(&self, width: u32, height: u32, rgba: &[u8]) -> Result<PathBuf> {
        anyhow::ensure!(
            rgba.len() as u64 == u64::from(width) * u64::from(height) * 4,
            "pixel buffer is {} bytes, expected {}x{}x4",
            rgba.len(),
            width,
            height
        );

        std::fs::create_dir_all(&self.out_dir).with_context(|| {
            format!("failed to create output directory {}", self.out_dir.display())
        })?;

        let path = self.path();
        image::save_buffer(&path, rgba, width, height, image::ExtendedColorType::Rgba8)
            .with_context(|| format!("failed to write {}", path.display()))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_exporter(name: &str) -> FrameExporter {
        let dir = std::env::temp_dir().join(format!("depot-export-test-{name}"));
        let _ = std::fs::remove_dir_all(&dir);
        FrameExporter::new(dir, format!("{name}.png"))
    }

    #[test]
    fn writes_png_and_creates_directory() {
        let exporter = temp_exporter("basic");
        let pixels = vec![255u8; 4 * 4 * 4];
        let path = exporter.write_png(4, 4, &pixels).unwrap();
        assert!(path.exists());
        assert_eq!(path, exporter.path());
    }

    #[test]
    fn repeated_writes_overwrite_in_place() {
        let exporter = temp_exporter("overwrite");
        let white = vec![255u8; 4 * 2 * 2];
        let black = {
            let mut px = vec![0u8; 4 * 2 * 2];
            for a in px.iter_mut().skip(3).step_by(4) {
                *a = 255;
            }
            px
        };
        exporter.write_png(2, 2, &white).unwrap();
        let first = std::fs::read(exporter.path()).unwrap();
        exporter.write_png(2, 2, &black).unwrap();
        let second = std::fs::read(exporter.path()).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn rejects_wrong_buffer_size() {
        let exporter = temp_exporter("short-buffer");
        assert!(exporter.write_png(4, 4, &[0u8; 7]).is_err());
    }

    #[test]
    fn default_destination_is_the_warehouse_folder() {
        let exporter = FrameExporter::default();
        assert_eq!(
            exporter.path(),
            PathBuf::from("valid_warehouse_layouts/map_elites_paper_12.png")
        );
    }
}
