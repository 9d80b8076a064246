// File: src/session.rs
// Purpose: The signed-in user, loaded explicitly from a session store

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{SessionError, SessionResult};

/// Who is signed in; decides which dashboard they land on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    Admin,
    ClinicOwner,
    Receptionist,
    Patient,
}

impl Role {
    /// Value as stored by the backend
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::ClinicOwner => "CHUPHONGKHAM",
            Role::Receptionist => "LETAN",
            Role::Patient => "BENHNHAN",
        }
    }

    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::ClinicOwner => "/clinic",
            Role::Receptionist => "/reception",
            Role::Patient => "/patient",
        }
    }

    /// Staff roles are bound to one clinic
    pub fn requires_clinic(self) -> bool {
        matches!(self, Role::ClinicOwner | Role::Receptionist)
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_uppercase();

        match normalized.as_str() {
            "ADMIN" | "QUANTRI" => Ok(Role::Admin),
            "CHUPHONGKHAM" | "CLINICOWNER" | "OWNER" => Ok(Role::ClinicOwner),
            "LETAN" | "RECEPTIONIST" => Ok(Role::Receptionist),
            "BENHNHAN" | "PATIENT" => Ok(Role::Patient),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user record kept in the session store after login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(rename = "maNguoiDung", alias = "id")]
    pub id: i64,
    #[serde(rename = "tenTaiKhoan", alias = "accountName")]
    pub account_name: String,
    #[serde(rename = "hoTen", alias = "fullName", default)]
    pub full_name: String,
    #[serde(rename = "vaiTro", alias = "role")]
    pub role: Role,
    #[serde(
        rename = "maPhongKham",
        alias = "clinicId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub clinic_id: Option<i64>,
}

/// Where raw session blobs are kept (browser storage, a file, memory)
pub trait SessionSource {
    fn read(&self, key: &str) -> SessionResult<Option<String>>;
    fn write(&mut self, key: &str, raw: &str) -> SessionResult<()>;
    fn remove(&mut self, key: &str) -> SessionResult<()>;
}

/// In-memory store, keyed like browser local storage
#[derive(Debug, Clone, Default)]
pub struct MemorySessionSource {
    entries: HashMap<String, String>,
}

impl MemorySessionSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionSource for MemorySessionSource {
    fn read(&self, key: &str) -> SessionResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, raw: &str) -> SessionResult<()> {
        self.entries.insert(key.to_string(), raw.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> SessionResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per session key inside a directory
#[derive(Debug, Clone)]
pub struct FileSessionSource {
    dir: PathBuf,
}

impl FileSessionSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> SessionResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(SessionError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl SessionSource for FileSessionSource {
    fn read(&self, key: &str) -> SessionResult<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&mut self, key: &str, raw: &str) -> SessionResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(path, raw)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> SessionResult<()> {
        let path = self.path_for(key)?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Explicit session context handed to each page
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    user: CurrentUser,
}

impl Session {
    /// Build a session from an already-parsed user, checking it first
    pub fn new(user: CurrentUser) -> SessionResult<Self> {
        validate_user(&user)?;
        Ok(Self { user })
    }

    /// Load, parse and validate the session stored under `key`
    pub fn load<S>(source: &S, key: &str) -> SessionResult<Self>
    where
        S: SessionSource + ?Sized,
    {
        let raw = source.read(key)?.ok_or_else(|| {
            debug!(key, "no stored session");
            SessionError::NotFound {
                key: key.to_string(),
            }
        })?;

        let session = Self::parse(key, &raw)?;
        info!(
            user = %session.user.account_name,
            role = %session.user.role,
            "session loaded"
        );
        Ok(session)
    }

    /// Parse and validate a raw session blob
    pub fn parse(key: &str, raw: &str) -> SessionResult<Self> {
        let user: CurrentUser =
            serde_json::from_str(raw).map_err(|source| SessionError::Malformed {
                key: key.to_string(),
                source,
            })?;

        Self::new(user).map_err(|err| {
            warn!(key, %err, "rejected stored session");
            err
        })
    }

    /// Persist the session (after login)
    pub fn store<S>(&self, source: &mut S, key: &str) -> SessionResult<()>
    where
        S: SessionSource + ?Sized,
    {
        let raw = serde_json::to_string(&self.user)?;
        source.write(key, &raw)
    }

    /// Forget the stored session (logout)
    pub fn clear<S>(source: &mut S, key: &str) -> SessionResult<()>
    where
        S: SessionSource + ?Sized,
    {
        source.remove(key)
    }

    pub fn user(&self) -> &CurrentUser {
        &self.user
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn clinic_id(&self) -> Option<i64> {
        self.user.clinic_id
    }

    pub fn dashboard_path(&self) -> &'static str {
        self.user.role.dashboard_path()
    }

    /// Guard for role-specific pages
    pub fn require_role(&self, allowed: &[Role]) -> SessionResult<&Self> {
        if allowed.contains(&self.user.role) {
            Ok(self)
        } else {
            Err(SessionError::Forbidden {
                role: self.user.role,
            })
        }
    }
}

fn validate_user(user: &CurrentUser) -> SessionResult<()> {
    if user.id <= 0 {
        return Err(SessionError::invalid("user id must be positive"));
    }
    if user.account_name.trim().is_empty() {
        return Err(SessionError::invalid("account name is empty"));
    }
    if user.role.requires_clinic() && user.clinic_id.is_none() {
        return Err(SessionError::invalid(format!(
            "{} account has no clinic",
            user.role
        )));
    }
    Ok(())
}
