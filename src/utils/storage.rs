use actix_web::web::Bytes;
use chrono::Utc;
use futures::{Stream, StreamExt};
use std::fmt::Display;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::{fs, io::AsyncWriteExt};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::UploadConfig;
use crate::types::{
    error::AppError,
    footage::{stored_extension, stored_file_name},
};

/// "File too large. Maximum size is 2GB." for the default limit.
pub fn too_large_message(max_bytes: u64) -> String {
    const KIB: u64 = 1024;
    let size = match max_bytes {
        b if b >= KIB.pow(3) && b % KIB.pow(3) == 0 => format!("{}GB", b / KIB.pow(3)),
        b if b >= KIB.pow(2) && b % KIB.pow(2) == 0 => format!("{}MB", b / KIB.pow(2)),
        b if b >= KIB && b % KIB == 0 => format!("{}KB", b / KIB),
        b => format!("{b} bytes"),
    };
    format!("File too large. Maximum size is {size}.")
}

const MAX_NAME_ATTEMPTS: u32 = 1000;

#[derive(Debug, Clone)]
pub struct StoredFile {
    pub disk_path: PathBuf,
    pub public_path: String,
    pub size: u64,
}

/// Footage files on local disk, one file per upload, written in a single pass.
#[derive(Debug, Clone)]
pub struct FootageStore {
    dir: PathBuf,
    public_prefix: String,
    max_bytes: u64,
}

impl FootageStore {
    pub fn new(cfg: &UploadConfig) -> Self {
        Self {
            dir: cfg.dir.clone(),
            public_prefix: cfg.public_prefix.trim_end_matches('/').to_string(),
            max_bytes: cfg.max_bytes,
        }
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Streams the body to `{dir}/{user_id}_{millis}.{ext}`. Nothing is left behind on failure.
    pub async fn save<S, E>(
        &self,
        user_id: Uuid,
        original_name: &str,
        content_type: &str,
        body: S,
    ) -> Result<StoredFile, AppError>
    where
        S: Stream<Item = Result<Bytes, E>> + Unpin,
        E: Display,
    {
        fs::create_dir_all(&self.dir).await?;

        let ext = stored_extension(original_name, content_type);
        let (name, disk_path, file) = self.create_unique(user_id, &ext).await?;

        match self.write_body(file, body).await {
            Ok(size) => {
                info!("stored {} bytes at {}", size, disk_path.display());
                Ok(StoredFile {
                    disk_path,
                    public_path: format!("{}/{}", self.public_prefix, name),
                    size,
                })
            }
            Err(err) => {
                discard(&disk_path).await;
                Err(err)
            }
        }
    }

    /// Claims a fresh file name. An existing file is never reopened, so two uploads in the
    /// same millisecond get `_1`, `_2`, ... suffixes instead of sharing one file.
    async fn create_unique(&self, user_id: Uuid, ext: &str) -> Result<(String, PathBuf, fs::File), AppError> {
        let millis = Utc::now().timestamp_millis();
        for collision in 0..MAX_NAME_ATTEMPTS {
            let name = stored_file_name(user_id, millis, collision, ext);
            let path = self.dir.join(&name);
            match fs::OpenOptions::new().write(true).create_new(true).open(&path).await {
                Ok(file) => return Ok((name, path, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Err(AppError::Internal(format!(
            "no free file name for user {user_id} at {millis} after {MAX_NAME_ATTEMPTS} attempts"
        )))
    }

    async fn write_body<S, E>(&self, mut file: fs::File, mut body: S) -> Result<u64, AppError>
    where
        S: Stream<Item = Result<Bytes, E>> + Unpin,
        E: Display,
    {
        let mut written: u64 = 0;

        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| AppError::BadRequest(format!("upload interrupted: {e}")))?;
            written += chunk.len() as u64;
            if written > self.max_bytes {
                return Err(AppError::PayloadTooLarge(too_large_message(self.max_bytes)));
            }
            file.write_all(&chunk).await?;
        }

        file.flush().await?;
        Ok(written)
    }

    /// Maps a stored public path back into the upload dir. Only the final component is
    /// trusted, so a crafted row can't point outside the directory.
    pub fn disk_path_for(&self, public_path: &str) -> Option<PathBuf> {
        let name = Path::new(public_path).file_name()?;
        Some(self.dir.join(name))
    }

    /// Already-missing files are fine.
    pub async fn remove(&self, public_path: &str) -> Result<(), AppError> {
        let Some(path) = self.disk_path_for(public_path) else {
            return Ok(());
        };
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

pub async fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path).await {
        if e.kind() != ErrorKind::NotFound {
            warn!("failed to remove partial upload {}: {e}", path.display());
        }
    }
}
