use std::path::{Path, PathBuf};

use log::info;

use crate::{error::EmbedError, write_byte_header};

/// The shaders to convert in byte mode and the folder containing them.
#[derive(Debug, PartialEq, Clone)]
pub struct BatchConfig {
    /// Base names processed in order like `"vert"` for `vert.spv`.
    pub shader_names: Vec<String>,
    pub base_dir: PathBuf,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            shader_names: vec!["vert".to_string(), "frag".to_string()],
            base_dir: PathBuf::from("shaders"),
        }
    }
}

impl BatchConfig {
    pub fn spv_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("{name}.spv"))
    }

    pub fn header_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("{name}.h"))
    }
}

/// Convert `<name>.spv` to `<name>.h` in byte mode for each shader in `config`.
///
/// Shaders are converted in order and the first error stops the batch.
/// Headers written before the error are kept.
pub fn generate_shader_headers(config: &BatchConfig) -> Result<(), EmbedError> {
    if let Ok(cwd) = std::env::current_dir() {
        info!("Current working directory: {cwd:?}");
    }

    for name in &config.shader_names {
        let spv = config.spv_path(name);
        let header = config.header_path(name);
        info!("Converting {spv:?} to {header:?}");
        write_byte_header(&spv, &header, name)?;
    }

    Ok(())
}

/// Convert every `*.spv` file directly inside `base_dir` ordered by name.
pub fn config_from_folder<P: AsRef<Path>>(base_dir: P) -> Result<BatchConfig, EmbedError> {
    let base_dir = base_dir.as_ref();
    let entries = std::fs::read_dir(base_dir).map_err(|source| EmbedError::InputUnreadable {
        path: base_dir.to_owned(),
        source,
    })?;

    let mut shader_names = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| EmbedError::InputUnreadable {
                path: base_dir.to_owned(),
                source,
            })?
            .path();
        if path.extension().and_then(|e| e.to_str()) == Some("spv") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                shader_names.push(stem.to_string());
            }
        }
    }
    shader_names.sort();

    Ok(BatchConfig {
        shader_names,
        base_dir: base_dir.to_owned(),
    })
}
