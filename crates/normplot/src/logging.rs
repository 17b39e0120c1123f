use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Maximum log file size before rotation (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Size to keep after rotation (1 MB of most recent logs)
const KEEP_SIZE: u64 = 1024 * 1024;

/// Trim an oversized log file down to its most recent [`KEEP_SIZE`] bytes,
/// dropping any partial first line.
fn rotate_log_if_needed(log_path: &Path) -> std::io::Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let file_size = fs::metadata(log_path)?.len();
    if file_size <= MAX_LOG_SIZE {
        return Ok(());
    }

    let mut tail = Vec::new();
    {
        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(file_size.saturating_sub(KEEP_SIZE)))?;
        file.read_to_end(&mut tail)?;
    }

    // Start at the first complete line
    let skip = tail
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut file = File::create(log_path)?;
    file.write_all(b"--- Log rotated (older entries removed) ---\n")?;
    file.write_all(&tail[skip..])?;

    Ok(())
}

/// Initialize logging to a file in the data directory.
///
/// The chart occupies the terminal, so logs go to `{data_dir}/normplot.log`
/// with size-based rotation: past 5MB only the most recent 1MB is kept. The
/// `RUST_LOG` environment variable overrides the `level` parameter.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    std::fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join("normplot.log");

    if let Err(e) = rotate_log_if_needed(&log_path) {
        eprintln!("Warning: Failed to rotate log file: {}", e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let default_filter = format!("normplot={level},normplot_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!("normplot logging initialized (log_path={})", log_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_skips_small_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("normplot.log");
        fs::write(&path, b"line one\nline two\n").unwrap();

        rotate_log_if_needed(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "line one\nline two\n");
    }

    #[test]
    fn test_rotate_missing_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        rotate_log_if_needed(&dir.path().join("absent.log")).unwrap();
    }

    #[test]
    fn test_rotate_trims_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("normplot.log");

        // Just over the rotation threshold, in full lines
        let line = "x".repeat(127) + "\n";
        let lines = (MAX_LOG_SIZE / 128 + 16) as usize;
        fs::write(&path, line.repeat(lines)).unwrap();

        rotate_log_if_needed(&path).unwrap();

        let rotated = fs::read_to_string(&path).unwrap();
        assert!(rotated.starts_with("--- Log rotated"));
        assert!(rotated.len() as u64 <= KEEP_SIZE + 64);
        // No partial line survives the trim
        assert!(rotated.ends_with('\n'));
    }
}
