//! Downloads over HTTPS

use crate::{Error, Result};
use cljup_fs::checksum;
use std::path::Path;

/// Fetches a URL into a local file.
pub trait Downloader {
    /// Download `url` to `dest`, replacing any existing file. `dest` must
    /// not be left half-written on failure.
    fn fetch(&self, url: &str, dest: &Path) -> Result<()>;
}

/// [`Downloader`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: reqwest::blocking::Client,
}

impl HttpDownloader {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("cljup/", env!("CARGO_PKG_VERSION")))
            .https_only(true)
            .build()
            .map_err(|e| Error::download("<client>", e))?;
        Ok(Self { client })
    }
}

impl Downloader for HttpDownloader {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        tracing::info!(url, dest = %dest.display(), "downloading");

        let mut response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::download(url, e))?;

        let parent = dest
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).map_err(|e| Error::write(parent, e))?;

        // Stream next to the destination and rename into place
        let mut staged = tempfile::NamedTempFile::new_in(parent).map_err(|e| Error::write(parent, e))?;
        response
            .copy_to(&mut staged)
            .map_err(|e| Error::download(url, e))?;
        staged
            .persist(dest)
            .map_err(|e| Error::write(dest, e.error))?;

        Ok(())
    }
}

/// Download `url` to `dest` and check it against a pinned checksum, if any.
///
/// On mismatch the file is removed and the download fails.
pub fn download_verified(
    downloader: &dyn Downloader,
    url: &str,
    sha256: Option<&str>,
    dest: &Path,
) -> Result<()> {
    downloader.fetch(url, dest)?;

    let Some(expected) = sha256 else {
        return Ok(());
    };
    if let Err(actual) = checksum::verify_file(dest, expected)? {
        if let Err(e) = std::fs::remove_file(dest) {
            tracing::warn!(path = %dest.display(), "cannot remove rejected download: {e}");
        }
        return Err(Error::download(
            url,
            format!(
                "checksum mismatch: expected {}, got {}",
                checksum::normalize(expected),
                actual
            ),
        ));
    }
    tracing::debug!(url, "checksum verified");
    Ok(())
}
