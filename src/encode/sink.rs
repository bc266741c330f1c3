use std::path::PathBuf;

use anyhow::Context;

use crate::{encode::codec::NamedImage, foundation::error::CardsmithResult};

/// Destination for encoded output images.
pub trait OutputSink {
    /// Persist one image; returns where it went, if anywhere on disk.
    fn write(&mut self, image: &NamedImage) -> CardsmithResult<Option<PathBuf>>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    pub(crate) images: Vec<NamedImage>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the captured images in write order.
    pub fn images(&self) -> &[NamedImage] {
        &self.images
    }

    pub fn get(&self, name: &str) -> Option<&NamedImage> {
        self.images.iter().find(|im| im.name == name)
    }
}

impl OutputSink for InMemorySink {
    fn write(&mut self, image: &NamedImage) -> CardsmithResult<Option<PathBuf>> {
        self.images.retain(|im| im.name != image.name);
        self.images.push(image.clone());
        Ok(None)
    }
}

/// Writes each image as a file inside `dir`, creating the directory on first write.
#[derive(Clone, Debug)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl OutputSink for DirSink {
    fn write(&mut self, image: &NamedImage) -> CardsmithResult<Option<PathBuf>> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        let path = self.dir.join(&image.name);
        std::fs::write(&path, &image.bytes)
            .with_context(|| format!("write '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = image.bytes.len(), "wrote output");
        Ok(Some(path))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
