//! Test utilities and shared fixtures for the SLE Plot workspace.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests at debug level, once per test binary.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Input file fixtures backed by temporary files.
#[cfg(feature = "tempfile")]
pub mod fixtures {
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// A temporary directory that owns the fixture files written into it.
    pub struct FixtureDir {
        dir: TempDir,
    }

    impl FixtureDir {
        /// Creates a fresh temporary directory.
        pub fn new() -> Self {
            Self {
                dir: tempfile::tempdir().expect("Failed to create temporary directory"),
            }
        }

        /// Writes `contents` to `name` inside the directory and returns its path.
        pub fn write(&self, name: &str, contents: &str) -> PathBuf {
            let path = self.dir.path().join(name);
            let mut file = std::fs::File::create(&path).expect("Failed to create fixture file");
            file.write_all(contents.as_bytes())
                .expect("Failed to write fixture file");
            path
        }

        /// Path for a file inside the directory that has not been written yet.
        pub fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }
    }

    impl Default for FixtureDir {
        fn default() -> Self {
            Self::new()
        }
    }

    /// Horizontal distance ratio samples with a comment header, as written by
    /// the simulator.
    pub const RATIO_SAMPLES: &str = "# kappa = 6\n# horizontal distance ratio\n0.12\n0.48\n0.33\n0.91\n0.05\n0.67\n";

    /// A short path in the plane with a comment header.
    pub const PATH_POINTS: &str = "# x,y\n0.0,0.0\n0.1,0.4\n-0.2,0.9\n0.3,1.3\n";
}
