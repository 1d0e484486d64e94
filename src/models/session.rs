//! On-disk shape of the persisted auth store.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::user::User;

/// Token and user written by the login flow.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersistedSession {
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: String,
    #[serde(alias = "usuario")]
    pub user: User,
}

impl PersistedSession {
    /// Reads the session file; a missing file yields `Ok(None)`.
    pub fn read_from(path: impl AsRef<Path>) -> io::Result<Option<Self>> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };
        let session = serde_json::from_str(&raw)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Some(session))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn reads_session_with_frontend_aliases() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"accessToken": "abc", "usuario": {{"id": 3, "nombre": "Ana", "is_superuser": true}}}}"#
        )
        .unwrap();

        let session = PersistedSession::read_from(file.path()).unwrap().unwrap();

        assert_eq!(session.token, "abc");
        assert!(session.user.can_manage());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PersistedSession::read_from(dir.path().join("auth.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn corrupt_file_is_invalid_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = PersistedSession::read_from(file.path()).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
