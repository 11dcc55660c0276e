//! Response recording for building test fixtures (`test-mode` only).
//!
//! With `VSME_RECORD=1`, every JSON body read through the crate is written to
//! `$VSME_FIXDIR` (default `tests/fixtures`) as `{endpoint}_{key}.json`.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

fn fixture_dir() -> PathBuf {
    env::var_os("VSME_FIXDIR").map_or_else(
        || Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures"),
        PathBuf::from,
    )
}

/// Keys come from user data (activity types, entry ids); keep file names portable.
fn file_stem(endpoint: &str, key: &str) -> String {
    let key: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("{endpoint}_{key}")
}

pub(crate) fn record_fixture(endpoint: &str, key: &str, ext: &str, body: &str) -> io::Result<()> {
    let dir = fixture_dir();
    fs::create_dir_all(&dir)?;
    let path = dir.join(file_stem(endpoint, key)).with_extension(ext);
    fs::write(&path, body)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), "recorded fixture");
    Ok(())
}
