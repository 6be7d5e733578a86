//! Result download endpoint.

use crate::FindEmailClient;
use findemail_core::Result;
use std::path::PathBuf;

/// Builder for download requests
pub struct DownloadRequestBuilder<'a> {
    client: &'a FindEmailClient,
    id: String,
    kind: String,
    file_name: Option<PathBuf>,
}

impl<'a> DownloadRequestBuilder<'a> {
    pub(crate) const fn new(client: &'a FindEmailClient, id: String, kind: String) -> Self {
        Self {
            client,
            id,
            kind,
            file_name: None,
        }
    }

    /// Write to this path instead of `<id>.txt`
    #[must_use]
    pub fn file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_name = Some(path.into());
        self
    }

    /// The path the body will be written to
    #[must_use]
    pub fn target(&self) -> PathBuf {
        self.file_name
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.txt", self.id)))
    }

    /// Execute the download, overwriting any existing file.
    ///
    /// Returns the path that was written.
    pub fn send(self) -> Result<PathBuf> {
        let target = self.target();
        self.client.download_to(&self.id, &self.kind, &target)?;
        Ok(target)
    }
}
