use std::{fs::File, io::BufReader, path::Path};

use rustls::pki_types::PrivateKeyDer;
use rustls_pemfile::{certs, pkcs8_private_keys};

use crate::errors::StartupError;
use crate::settings::TlsPaths;

fn open_pem(path: &Path) -> Result<BufReader<File>, StartupError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| StartupError::Tls(format!("{}: {}", path.display(), e)))
}

pub fn load_tls_config(paths: &TlsPaths) -> Result<rustls::ServerConfig, StartupError> {
    let config = rustls::ServerConfig::builder().with_no_client_auth();

    let certificate_file = &mut open_pem(&paths.certificate)?;
    let key_file = &mut open_pem(&paths.private_key)?;

    let cert_chain = certs(certificate_file)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StartupError::Tls(format!("{}: {}", paths.certificate.display(), e)))?;
    if cert_chain.is_empty() {
        return Err(StartupError::Tls(format!(
            "No certificates found in {}",
            paths.certificate.display()
        )));
    }

    let mut keys: Vec<_> = pkcs8_private_keys(key_file)
        .filter_map(Result::ok)
        .map(PrivateKeyDer::Pkcs8)
        .collect();

    if keys.is_empty() {
        return Err(StartupError::Tls(format!(
            "Could not locate PKCS 8 private keys in {}",
            paths.private_key.display()
        )));
    }

    config
        .with_single_cert(cert_chain, keys.remove(0))
        .map_err(|e| StartupError::Tls(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_files_error() {
        let paths = TlsPaths {
            certificate: "/nonexistent/cert.pem".into(),
            private_key: "/nonexistent/key.pem".into(),
        };
        assert!(matches!(load_tls_config(&paths), Err(StartupError::Tls(_))));
    }

    #[test]
    fn empty_pem_files_error() {
        let dir = TempDir::new().unwrap();
        let certificate = dir.path().join("cert.pem");
        let private_key = dir.path().join("key.pem");
        std::fs::write(&certificate, "").unwrap();
        std::fs::write(&private_key, "").unwrap();

        let result = load_tls_config(&TlsPaths {
            certificate,
            private_key,
        });
        assert!(matches!(result, Err(StartupError::Tls(_))));
    }
}
