//! Background image loading.
//!
//! Decoding a large image on the event loop thread would stall input, so a
//! worker thread owns the file read and decode. The event loop submits paths
//! with [`ImageLoader::request`] and polls [`ImageLoader::try_take_result`]
//! each iteration; whatever decoded last wins. There is no cancellation, a
//! request that completes after the canvas was cleared still paints.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use image::RgbaImage;
use log::debug;
use thiserror::Error;

/// Errors produced by the loader worker.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Handle to the decode worker thread.
pub struct ImageLoader {
    request_tx: mpsc::Sender<PathBuf>,
    result_rx: mpsc::Receiver<Result<RgbaImage, LoadError>>,
    pending: usize,
}

impl ImageLoader {
    /// Spawns the worker thread. The thread exits when the loader is
    /// dropped and its request channel closes.
    pub fn new() -> Self {
        let (request_tx, request_rx) = mpsc::channel::<PathBuf>();
        let (result_tx, result_rx) = mpsc::channel();

        thread::Builder::new()
            .name("image-loader".into())
            .spawn(move || {
                while let Ok(path) = request_rx.recv() {
                    debug!("Decoding image: {}", path.display());
                    let _ = result_tx.send(load_image(path));
                }
            })
            .ok();

        Self {
            request_tx,
            result_rx,
            pending: 0,
        }
    }

    /// Queues a path for decoding.
    pub fn request(&mut self, path: PathBuf) {
        if self.request_tx.send(path).is_ok() {
            self.pending += 1;
        }
    }

    /// Whether any request has not produced a result yet.
    pub fn is_pending(&self) -> bool {
        self.pending > 0
    }

    /// Takes the most recent completed result, if any.
    ///
    /// Drains the result queue so that when several requests complete
    /// between polls only the latest decode is returned.
    pub fn try_take_result(&mut self) -> Option<Result<RgbaImage, LoadError>> {
        let mut latest = None;
        while let Ok(result) = self.result_rx.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            latest = Some(result);
        }
        latest
    }
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn load_image(path: PathBuf) -> Result<RgbaImage, LoadError> {
    let bytes = std::fs::read(&path).map_err(|source| LoadError::Read {
        path: path.clone(),
        source,
    })?;
    let img = image::load_from_memory(&bytes)
        .map_err(|source| LoadError::Decode { path, source })?;
    Ok(img.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn take_with_timeout(loader: &mut ImageLoader) -> Result<RgbaImage, LoadError> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = loader.try_take_result() {
                return result;
            }
            assert!(Instant::now() < deadline, "loader produced no result");
            thread::sleep(Duration::from_millis(10));
        }
    }

    fn write_test_png(name: &str, width: u32, height: u32) -> PathBuf {
        let path = std::env::temp_dir().join(format!("squiggles-{}-{}.png", name, std::process::id()));
        let img = RgbaImage::from_pixel(width, height, image::Rgba([0, 128, 255, 255]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn decodes_a_png_from_disk() {
        let path = write_test_png("decode", 4, 3);
        let mut loader = ImageLoader::new();
        loader.request(path.clone());

        let img = take_with_timeout(&mut loader).unwrap();
        assert_eq!((img.width(), img.height()), (4, 3));
        assert!(!loader.is_pending());

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_file_reports_a_read_error() {
        let mut loader = ImageLoader::new();
        loader.request(PathBuf::from("/nonexistent/squiggles-test.png"));

        match take_with_timeout(&mut loader) {
            Err(LoadError::Read { .. }) => {}
            other => panic!("expected read error, got {:?}", other.map(|_| "image")),
        }
    }

    #[test]
    fn garbage_bytes_report_a_decode_error() {
        let path = std::env::temp_dir().join(format!("squiggles-garbage-{}.bin", std::process::id()));
        std::fs::write(&path, b"not an image").unwrap();

        let mut loader = ImageLoader::new();
        loader.request(path.clone());

        match take_with_timeout(&mut loader) {
            Err(LoadError::Decode { .. }) => {}
            other => panic!("expected decode error, got {:?}", other.map(|_| "image")),
        }

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn draining_returns_only_the_latest_result() {
        let small = write_test_png("small", 2, 2);
        let large = write_test_png("large", 8, 8);

        let mut loader = ImageLoader::new();
        loader.request(small.clone());
        loader.request(large.clone());

        // Wait until both decodes have landed, then drain in one poll.
        let deadline = Instant::now() + Duration::from_secs(5);
        let img = loop {
            if let Some(result) = loader.try_take_result() {
                if !loader.is_pending() {
                    break result.unwrap();
                }
            }
            assert!(Instant::now() < deadline, "loader produced no result");
            thread::sleep(Duration::from_millis(10));
        };
        assert_eq!((img.width(), img.height()), (8, 8));

        let _ = std::fs::remove_file(small);
        let _ = std::fs::remove_file(large);
    }
}
