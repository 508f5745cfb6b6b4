//! Flat-file JSON store used by the file-mode endpoints.
//!
//! Layout below the data directory:
//!
//! - `sessions/<stamp>_<session_id>.json`
//! - `responses/<stamp>_<session_id>_<respondent_id>_<sha256[..12]>.json`
//!
//! `<stamp>` is the UTC write time as `%Y%m%dT%H%M%SZ`, which makes file names
//! sort chronologically and lets summaries work from names alone.

use crate::error::FileStoreError;
use crate::hashing::{canonical_json_ascii, sha256_hex};
use chrono::{NaiveDateTime, Utc};
use common::model::session::SessionSummary;
use common::requests::{FileFounderInputs, FileResponsePayload, FileResponseStored};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

pub type FileResult<T> = Result<T, FileStoreError>;

const STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const FILE_VERSION: &str = "v0";

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn sessions_dir(&self) -> PathBuf {
        self.root.join("sessions")
    }

    pub fn responses_dir(&self) -> PathBuf {
        self.root.join("responses")
    }

    /// Creates the directory layout if missing.
    pub fn init(&self) -> FileResult<()> {
        fs::create_dir_all(self.sessions_dir())?;
        fs::create_dir_all(self.responses_dir())?;
        Ok(())
    }

    /// Archives founder inputs under a new session id.
    pub fn create_session(&self, founder_inputs: &FileFounderInputs) -> FileResult<String> {
        let session_id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();
        let path = self.sessions_dir().join(format!(
            "{}_{}.json",
            now.format(STAMP_FORMAT),
            session_id
        ));
        let document = json!({
            "session_id": session_id,
            "founder_inputs": founder_inputs,
            "created_at_utc": now.to_rfc3339(),
            "version": FILE_VERSION,
        });
        write_json(&path, &document)?;
        log::debug!("Saved file-mode session {} to {:?}", session_id, path);
        Ok(session_id)
    }

    /// Writes one response file; the name carries a prefix of the payload's
    /// SHA-256 so identical resubmissions within a second collapse to one file.
    pub fn store_response(&self, payload: &FileResponsePayload) -> FileResult<FileResponseStored> {
        check_id(&payload.session_id)?;
        check_id(&payload.respondent_id)?;

        let digest = sha256_hex(canonical_json_ascii(payload)?.as_bytes());
        let now = Utc::now();
        let file = format!(
            "{}_{}_{}_{}.json",
            now.format(STAMP_FORMAT),
            payload.session_id,
            payload.respondent_id,
            &digest[..12]
        );
        let document = json!({
            "received_at_utc": now.to_rfc3339(),
            "hash_sha256": digest,
            "payload": payload,
            "version": FILE_VERSION,
        });
        write_json(&self.responses_dir().join(&file), &document)?;
        Ok(FileResponseStored {
            ok: true,
            hash: digest,
            file,
        })
    }

    /// Response count and first/last receive time, read from file names.
    pub fn summary(&self, session_id: &str) -> FileResult<SessionSummary> {
        check_id(session_id)?;
        let files = self.response_files(session_id)?;
        let mut stamps: Vec<NaiveDateTime> = files
            .iter()
            .filter_map(|name| stamp_from_file_name(name))
            .collect();
        stamps.sort();
        let iso = |ts: &NaiveDateTime| ts.format("%Y-%m-%dT%H:%M:%SZ").to_string();
        Ok(SessionSummary {
            session_id: session_id.to_string(),
            responses_count: files.len(),
            first_ts: stamps.first().map(iso),
            last_ts: stamps.last().map(iso),
        })
    }

    fn response_files(&self, session_id: &str) -> FileResult<Vec<String>> {
        let dir = self.responses_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let name = entry?.file_name().to_string_lossy().into_owned();
            if session_of_file_name(&name) == Some(session_id) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }
}

fn write_json(path: &Path, value: &serde_json::Value) -> FileResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Ids end up in file names, so they must not be able to leave the directory.
/// `_` separates name fields and is not allowed inside an id.
fn check_id(id: &str) -> FileResult<()> {
    let valid = !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(FileStoreError::InvalidId(id.to_string()))
    }
}

/// Session id field of `<stamp>_<session_id>_<respondent_id>_<hash>.json`.
fn session_of_file_name(name: &str) -> Option<&str> {
    let mut fields = name.strip_suffix(".json")?.split('_');
    let (_stamp, session_id) = (fields.next()?, fields.next()?);
    let (_respondent_id, _hash) = (fields.next()?, fields.next()?);
    if fields.next().is_some() {
        return None;
    }
    Some(session_id)
}

fn stamp_from_file_name(name: &str) -> Option<NaiveDateTime> {
    let stamp = name.split('_').next()?;
    if stamp.len() != 16 || !stamp.ends_with('Z') {
        return None;
    }
    NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT).ok()
}
