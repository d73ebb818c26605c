use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;

use toml_edit::{DocumentMut, Item};

use crate::paths::{ConfigError, RemixPaths};

/// Backend de configuración por secciones.
///
/// Cada consumidor es dueño de su propia sección de `remix.toml` y no ve
/// las demás.
pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

/// Backend TOML. La escritura pasa por toml_edit para no pisar los
/// comentarios que el usuario tenga en su fichero.
pub struct TomlConfigBackend {
  paths: RemixPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: RemixPaths) -> Self {
    Self { paths }
  }

  /// Como `load_section`, pero un fichero ausente o una sección ausente
  /// devuelven el default del tipo en lugar de error.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let path = self.paths.config_file();
    let content = match fs::read_to_string(&path) {
      Ok(content) => content,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
      Err(e) => return Err(e.into()),
    };

    let root: toml::Value = toml::from_str(&content)?;
    let Some(table) = root.get(section) else {
      return Ok(T::default());
    };

    decode_section(section, table)
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, table: &toml::Value) -> Result<T, ConfigError> {
  table
    .clone()
    .try_into()
    .map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let content = fs::read_to_string(&path)?;
    let root: toml::Value = toml::from_str(&content)?;

    let table = root
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    decode_section(section, table)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // fichero actual como documento editable, o documento nuevo si no existe
    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse {:?}: {e}", path)))?,
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // la sección se serializa con serde/toml ("clave = valor" por línea)
    // y se reinyecta como tabla del documento editable
    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;
    let section_item: Item = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section [{section}]: {e}")))?
      .into_item();

    doc[section] = section_item;

    remix_fs::atomic_write_str(&path, &doc.to_string())?;

    Ok(())
  }
}
