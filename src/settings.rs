use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{builder::BoolishValueParser, ArgAction, Parser};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsPaths {
    pub certificate: PathBuf,
    pub private_key: PathBuf,
}

/// Serves per-application JSON configuration files.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Settings {
    #[arg(long, env = "CONFIG_SERVER_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Directory the registry's config paths are resolved against
    #[arg(long, env = "CONFIG_SERVER_BASE_DIR", default_value = "public")]
    pub base_dir: PathBuf,

    /// JSON registry file; the built-in registry is used when unset
    #[arg(long = "registry", env = "CONFIG_SERVER_REGISTRY")]
    pub registry_file: Option<PathBuf>,

    /// PEM certificate chain, enables HTTPS together with --tls-key
    #[arg(long, env = "CONFIG_SERVER_TLS_CERT", requires = "tls_key")]
    pub tls_cert: Option<PathBuf>,

    /// PKCS#8 private key in PEM form
    #[arg(long, env = "CONFIG_SERVER_TLS_KEY", requires = "tls_cert")]
    pub tls_key: Option<PathBuf>,

    /// Wrap every route in a permissive CORS policy
    #[arg(
        long = "cors",
        env = "CONFIG_SERVER_CORS",
        action = ArgAction::Set,
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    pub permissive_cors: bool,
}

impl Settings {
    pub fn tls(&self) -> Option<TlsPaths> {
        match (&self.tls_cert, &self.tls_key) {
            (Some(certificate), Some(private_key)) => Some(TlsPaths {
                certificate: certificate.clone(),
                private_key: private_key.clone(),
            }),
            _ => None,
        }
    }
}
