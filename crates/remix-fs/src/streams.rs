use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::io::atomic_write_str;

#[derive(Debug, Error)]
pub enum FsError {
  #[error("io error: {0}")]
  Io(#[from] io::Error),
}

/// Origen de un documento: ruta con nombre o entrada estándar.
///
/// Los dos son intercambiables desde fuera; quien llama solo decide con
/// `from_arg` según haya ruta o no.
#[derive(Debug, Clone)]
pub enum DocumentSource {
  Path(PathBuf),
  Stdin,
}

impl DocumentSource {
  pub fn from_arg(path: Option<PathBuf>) -> Self {
    match path {
      Some(path) => DocumentSource::Path(path),
      None => DocumentSource::Stdin,
    }
  }

  /// Lee el documento completo de una vez.
  pub fn read_to_string(&self) -> Result<String, FsError> {
    match self {
      DocumentSource::Path(path) => Ok(fs::read_to_string(path)?),
      DocumentSource::Stdin => {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
      }
    }
  }
}

/// Destino del documento mutado: ruta (escritura atómica) o salida estándar.
#[derive(Debug, Clone)]
pub enum DocumentSink {
  Path(PathBuf),
  Stdout,
}

impl DocumentSink {
  pub fn from_arg(path: Option<PathBuf>) -> Self {
    match path {
      Some(path) => DocumentSink::Path(path),
      None => DocumentSink::Stdout,
    }
  }

  /// Escribe el documento completo de una vez.
  pub fn write_str(&self, contents: &str) -> Result<(), FsError> {
    match self {
      DocumentSink::Path(path) => Ok(atomic_write_str(path, contents)?),
      DocumentSink::Stdout => {
        let mut stdout = io::stdout().lock();
        stdout.write_all(contents.as_bytes())?;
        stdout.flush()?;
        Ok(())
      }
    }
  }
}
