use serde::Deserialize;
use std::sync::Arc;

use crate::defaults::ResolverDefaults;
use crate::errors::ArgumentError;
use crate::params::QueryParams;

/// Full options record, the most explicit call shape.
///
/// Field names follow the conventional DoT client option spelling
/// (`servername`, `klass`, `type`) when deserialized, so an options
/// document written for other stub clients parses unchanged. A blank
/// `host`, `servername` or `name` is treated the same as an absent one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryOptions {
    #[serde(default)]
    pub host: String,

    #[serde(default, rename = "servername")]
    pub server_name: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default, rename = "klass")]
    pub record_class: Option<String>,

    #[serde(default, rename = "type")]
    pub record_type: Option<String>,
}

/// The three accepted call shapes.
#[derive(Debug, Clone)]
pub enum QueryArgs {
    /// Bare domain name; resolver defaults supply everything else.
    Name(String),

    /// Positional `(host, server_name, name)`.
    Triple {
        host: String,
        server_name: String,
        name: String,
    },

    /// Explicit options record.
    Options(QueryOptions),
}

impl From<&str> for QueryArgs {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for QueryArgs {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<(&str, &str, &str)> for QueryArgs {
    fn from((host, server_name, name): (&str, &str, &str)) -> Self {
        Self::Triple {
            host: host.to_string(),
            server_name: server_name.to_string(),
            name: name.to_string(),
        }
    }
}

impl From<(String, String, String)> for QueryArgs {
    fn from((host, server_name, name): (String, String, String)) -> Self {
        Self::Triple {
            host,
            server_name,
            name,
        }
    }
}

impl From<QueryOptions> for QueryArgs {
    fn from(options: QueryOptions) -> Self {
        Self::Options(options)
    }
}

impl QueryArgs {
    /// Classifies a positional argument list the way callers holding a
    /// dynamic argument vector pass it: one element is a bare name, three
    /// are `(host, server_name, name)`, any other count is rejected.
    pub fn from_positional(args: &[&str]) -> Result<Self, ArgumentError> {
        match args {
            [name] => Ok(Self::Name((*name).to_string())),
            [host, server_name, name] => Ok(Self::Triple {
                host: (*host).to_string(),
                server_name: (*server_name).to_string(),
                name: (*name).to_string(),
            }),
            _ => Err(ArgumentError::InvalidArguments(format!(
                "expected 1 or 3 positional arguments, got {}",
                args.len()
            ))),
        }
    }

    /// Resolves this call shape against `defaults` into the complete
    /// parameter set for one query.
    ///
    /// Explicit values always win over defaults. Whichever shape is used,
    /// the effective host, server name and query name must be non-blank and
    /// the effective port non-zero.
    pub fn normalize(&self, defaults: &ResolverDefaults) -> Result<QueryParams, ArgumentError> {
        match self {
            Self::Name(name) => Ok(QueryParams {
                host: defaults.host.into(),
                server_name: defaults.server_name.into(),
                name: require("name", name)?,
                record_class: defaults.record_class.into(),
                record_type: defaults.record_type.into(),
                port: require_port(defaults.port)?,
            }),
            Self::Triple {
                host,
                server_name,
                name,
            } => Ok(QueryParams {
                host: require("host", host)?,
                server_name: require("servername", server_name)?,
                name: require("name", name)?,
                record_class: defaults.record_class.into(),
                record_type: defaults.record_type.into(),
                port: require_port(defaults.port)?,
            }),
            Self::Options(options) => Ok(QueryParams {
                host: require("host", &options.host)?,
                server_name: require("servername", &options.server_name)?,
                name: require("name", &options.name)?,
                record_class: or_default(options.record_class.as_deref(), defaults.record_class),
                record_type: or_default(options.record_type.as_deref(), defaults.record_type),
                port: require_port(options.port.unwrap_or(defaults.port))?,
            }),
        }
    }
}

fn require(field: &'static str, value: &str) -> Result<Arc<str>, ArgumentError> {
    if value.trim().is_empty() {
        return Err(ArgumentError::MissingRequiredField(field));
    }
    Ok(value.into())
}

fn require_port(port: u16) -> Result<u16, ArgumentError> {
    if port == 0 {
        return Err(ArgumentError::InvalidArguments(
            "port must be non-zero".to_string(),
        ));
    }
    Ok(port)
}

fn or_default(value: Option<&str>, fallback: &'static str) -> Arc<str> {
    match value {
        Some(v) if !v.trim().is_empty() => v.into(),
        _ => fallback.into(),
    }
}
