use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::sync::{Arc, Mutex};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for YamlConfigSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: Serialize + DeserializeOwned,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {e}"))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {e}"))
    }
}

/// Storage backend for serialized content. `Ok(None)` means nothing has been
/// stored yet, which callers treat as "use defaults" rather than an error.
pub trait ContentProvider {
    fn get_content(&self) -> Result<Option<String>, String>;
    fn set_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentProvider {
    file_path: String,
}

impl FileContentProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ContentProvider for FileContentProvider {
    fn get_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(format!("Failed to read file {}: {e}", self.file_path)),
        }
    }

    fn set_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.file_path, content)
            .map_err(|e| format!("Failed to write file {}: {e}", self.file_path))
    }
}

pub struct ConfigManager<TProvider, TConfig, TSerializer = YamlConfigSerializer> {
    provider: TProvider,
    serializer: TSerializer,
    cached: Arc<Mutex<Option<TConfig>>>,
}

impl<TProvider, TConfig, TSerializer> ConfigManager<TProvider, TConfig, TSerializer>
where
    TProvider: ContentProvider,
    TConfig: Validate + Default + Clone,
    TSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(provider: TProvider, serializer: TSerializer) -> Self {
        Self {
            provider,
            serializer,
            cached: Arc::new(Mutex::new(None)),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut cached = self
            .cached
            .lock()
            .map_err(|e| format!("Failed to lock config cache: {e}"))?;
        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let config = match self.provider.get_content()? {
            Some(content) => {
                let config: TConfig = self.serializer.deserialize(&content)?;
                config.validate()?;
                config
            }
            None => TConfig::default(),
        };

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn save_config(&self, config: &TConfig) -> Result<(), String> {
        config.validate()?;
        let content = self.serializer.serialize(config)?;
        self.provider.set_content(&content)?;

        let mut cached = self
            .cached
            .lock()
            .map_err(|e| format!("Failed to lock config cache: {e}"))?;
        *cached = Some(config.clone());
        Ok(())
    }
}

impl<TConfig> ConfigManager<FileContentProvider, TConfig>
where
    TConfig: Validate + Default + Clone,
    YamlConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn yaml_file(file_path: String) -> Self {
        Self::new(FileContentProvider::new(file_path), YamlConfigSerializer::new())
    }
}
