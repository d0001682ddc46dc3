use std::fmt;

use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body returned by the IP lookup endpoint. Extra fields are ignored.
///
/// `ip` is kept as whatever JSON value the endpoint sent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IpInfo {
    pub ip: Value,
}

impl IpInfo {
    /// `ip` for logging: strings unquoted, anything else as JSON.
    #[must_use]
    pub fn ip_text(&self) -> String {
        match &self.ip {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Status and body of an HTTP response, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl fmt::Display for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Response [{}]>", self.status)
    }
}

/// Version of the compiler that built the crate, captured by `build.rs`.
///
/// Serialised as `[major, minor, patch, release_level, serial]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub release_level: &'static str,
    pub serial: u32,
}

impl RuntimeVersion {
    #[must_use]
    pub fn current() -> Self {
        Self::parse(env!("RUSTC_SEMVER"), env!("RUSTC_RELEASE_LEVEL"))
    }

    /// Parses `major[.minor[.patch]][-pre]`; missing or non-numeric components become 0.
    ///
    /// `serial` is the trailing number of the pre-release tag (`beta.3` gives 3).
    #[must_use]
    pub fn parse(version: &str, release_level: &'static str) -> Self {
        let version = version.trim().split('+').next().unwrap_or_default();
        let (core, pre) = match version.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (version, None),
        };

        let mut parts = core
            .split('.')
            .map(|part| part.parse::<u32>().unwrap_or(0));

        let serial = pre
            .and_then(|pre| pre.rsplit('.').next())
            .and_then(|last| last.parse::<u32>().ok())
            .unwrap_or(0);

        Self {
            major: parts.next().unwrap_or(0),
            minor: parts.next().unwrap_or(0),
            patch: parts.next().unwrap_or(0),
            release_level,
            serial,
        }
    }

    /// Human-readable form, e.g. `1.95.0 (x86_64-linux)`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{}.{}.{} ({}-{})",
            self.major,
            self.minor,
            self.patch,
            std::env::consts::ARCH,
            std::env::consts::OS
        )
    }
}

impl Serialize for RuntimeVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(5)?;
        tuple.serialize_element(&self.major)?;
        tuple.serialize_element(&self.minor)?;
        tuple.serialize_element(&self.patch)?;
        tuple.serialize_element(self.release_level)?;
        tuple.serialize_element(&self.serial)?;
        tuple.end()
    }
}

/// Record returned by the simple handler.
#[derive(Debug, Clone, Serialize)]
pub struct SyntaxDemoRecord {
    pub event: Value,
    pub formatted: String,
    pub primes: Vec<i64>,
    pub one_thousand: i64,
    pub one_million_underscore: String,
    pub sys_version: String,
    pub sys_version_info: RuntimeVersion,
}
