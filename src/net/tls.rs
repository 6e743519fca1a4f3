//! Client-side TLS configuration for talking to store status endpoints.

use std::fs;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Certificate material for reaching stores over https.
///
/// All paths point at PEM files. An entirely empty config means TLS is
/// not in use. Deserializable so an embedding process can carry it inside
/// its own configuration file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SecurityConfig {
    /// CA bundle used to verify the store's certificate.
    pub ca_path: String,

    /// Client certificate presented to the store.
    pub cert_path: String,

    /// Private key for the client certificate.
    pub key_path: String,
}

impl SecurityConfig {
    /// True when no certificate material is configured at all.
    pub fn is_empty(&self) -> bool {
        self.ca_path.is_empty() && self.cert_path.is_empty() && self.key_path.is_empty()
    }
}

/// Errors that can occur while building the TLS client.
#[derive(Debug, Error)]
pub enum TlsError {
    /// A certificate or key file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The material did not build into a usable client.
    #[error("invalid certificate material: {0}")]
    Build(#[from] reqwest::Error),
}

/// Build an https-capable client from the supplied certificate material.
///
/// Returns `Ok(None)` when `security` carries no paths, telling the caller
/// to stay on plain http. A CA without a client certificate pair is valid
/// (server verification only).
pub fn build_https_client(security: &SecurityConfig) -> Result<Option<reqwest::Client>, TlsError> {
    if security.is_empty() {
        return Ok(None);
    }

    let mut builder = reqwest::Client::builder().use_rustls_tls();
    if !security.ca_path.is_empty() {
        let ca = read_pem(&security.ca_path)?;
        builder = builder.add_root_certificate(reqwest::Certificate::from_pem(&ca)?);
    }
    if !security.cert_path.is_empty() || !security.key_path.is_empty() {
        // reqwest expects certificate and key concatenated in one PEM blob
        let mut identity = read_pem(&security.cert_path)?;
        identity.extend(read_pem(&security.key_path)?);
        builder = builder.identity(reqwest::Identity::from_pem(&identity)?);
    }

    Ok(Some(builder.build()?))
}

fn read_pem(path: &str) -> Result<Vec<u8>, TlsError> {
    fs::read(path).map_err(|source| TlsError::Io {
        path: path.to_string(),
        source,
    })
}
