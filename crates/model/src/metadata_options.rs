//! Selection of which metadata attributes are written.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::object::Metadata;

/// Which metadata categories are enabled.
///
/// Parsed from strings such as `"all"`, `"none"` or
/// `"version+timestamp+user"`. An empty string enables everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetadataOptions {
    version: bool,
    timestamp: bool,
    changeset: bool,
    uid: bool,
    user: bool,
}

impl Default for MetadataOptions {
    fn default() -> Self {
        Self::all()
    }
}

impl MetadataOptions {
    pub const fn all() -> Self {
        Self {
            version: true,
            timestamp: true,
            changeset: true,
            uid: true,
            user: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            version: false,
            timestamp: false,
            changeset: false,
            uid: false,
            user: false,
        }
    }

    pub fn version(&self) -> bool {
        self.version
    }

    pub fn timestamp(&self) -> bool {
        self.timestamp
    }

    pub fn changeset(&self) -> bool {
        self.changeset
    }

    pub fn uid(&self) -> bool {
        self.uid
    }

    pub fn user(&self) -> bool {
        self.user
    }

    pub fn any(&self) -> bool {
        self.version || self.timestamp || self.changeset || self.uid || self.user
    }

    pub fn all_enabled(&self) -> bool {
        *self == Self::all()
    }

    pub fn set_version(&mut self, enabled: bool) -> &mut Self {
        self.version = enabled;
        self
    }

    pub fn set_timestamp(&mut self, enabled: bool) -> &mut Self {
        self.timestamp = enabled;
        self
    }

    pub fn set_changeset(&mut self, enabled: bool) -> &mut Self {
        self.changeset = enabled;
        self
    }

    pub fn set_uid(&mut self, enabled: bool) -> &mut Self {
        self.uid = enabled;
        self
    }

    pub fn set_user(&mut self, enabled: bool) -> &mut Self {
        self.user = enabled;
        self
    }

    /// Narrows the options to the categories that actually hold a value in
    /// `meta`.
    pub fn present_in(&self, meta: &Metadata) -> Self {
        Self {
            version: self.version && meta.version != 0,
            timestamp: self.timestamp && meta.timestamp.is_set(),
            changeset: self.changeset && meta.changeset != 0,
            uid: self.uid && meta.uid != 0,
            user: self.user && !meta.user_is_anonymous(),
        }
    }

    fn names(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.version, "version"),
            (self.timestamp, "timestamp"),
            (self.changeset, "changeset"),
            (self.uid, "uid"),
            (self.user, "user"),
        ]
        .into_iter()
        .filter_map(|(enabled, name)| enabled.then_some(name))
    }
}

impl FromStr for MetadataOptions {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" | "true" | "yes" => return Ok(Self::all()),
            "none" | "false" | "no" => return Ok(Self::none()),
            _ => {}
        }

        let mut options = Self::none();
        for name in s.split('+') {
            match name {
                "version" => options.version = true,
                "timestamp" => options.timestamp = true,
                "changeset" => options.changeset = true,
                "uid" => options.uid = true,
                "user" => options.user = true,
                other => return Err(ModelError::InvalidMetadataOption(other.to_string())),
            }
        }
        Ok(options)
    }
}

impl fmt::Display for MetadataOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.all_enabled() {
            return f.write_str("all");
        }
        if !self.any() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.names().collect();
        f.write_str(&names.join("+"))
    }
}
