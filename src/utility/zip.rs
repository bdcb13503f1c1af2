use std::io::{self, Read};

use anyhow::{Context, Result};
use zip::{read::ZipFile, ZipArchive};

pub struct ZipReader<R> {
    archive: ZipArchive<R>,
}

impl<R: Read + io::Seek> ZipReader<R> {
    pub fn new(reader: R) -> Result<ZipReader<R>> {
        let archive = ZipArchive::new(reader).context("Failed to open zip archive")?;
        Ok(ZipReader { archive })
    }

    pub fn entry_names(&self) -> Vec<&str> {
        self.archive.file_names().collect()
    }

    pub fn get_by_path(&mut self, path: &str) -> Result<ZipEntry> {
        self.archive
            .by_name(path)
            .with_context(|| format!("Failed to open {}", path))
            .map(|file| ZipEntry { file })
    }
}

pub struct ZipEntry<'a> {
    file: ZipFile<'a>,
}

impl ZipEntry<'_> {
    pub fn name(&self) -> &str {
        self.file.name()
    }

    // コーパスは行ストリームを巻き戻せるようメモリに読み込む
    pub fn as_bytes(&mut self) -> Result<Vec<u8>> {
        let mut data = Vec::<u8>::with_capacity(self.file.size() as usize);
        self.file
            .read_to_end(&mut data)
            .with_context(|| format!("Failed to read {}", self.name()))?;

        Ok(data)
    }
}
