use super::*;
use crate::query;

impl SigilConfig {
    /// Get a typed value from the configuration using dot notation.
    ///
    /// # Examples
    /// ```no_run
    /// # use sigil_cfg::SigilConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = SigilConfig::from_file("workflow.yaml")?;
    /// let host: String = config.get("server.host")?;
    /// let port: u16 = config.get("server.port")?;
    /// let debug: bool = config.get("debug")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if path doesn't exist or value can't be converted to type T.
    pub fn get<T>(&self, path: &str) -> Result<T, SigilError>
    where
        T: TryFrom<Value, Error = SigilError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value)
    }

    /// Get an optional typed value - returns `None` if the path doesn't exist.
    ///
    /// # Examples
    /// ```no_run
    /// # use sigil_cfg::SigilConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = SigilConfig::from_file("workflow.yaml")?;
    /// if let Ok(Some(api_key)) = config.get_optional::<String>("api.key") {
    ///     println!("API key: {}", api_key);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, SigilError>
    where
        T: TryFrom<Value, Error = SigilError>,
    {
        match self.get_value(path) {
            Ok(value) => Ok(Some(T::try_from(value)?)),
            Err(SigilError::PathNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```no_run
    /// # use sigil_cfg::SigilConfig;
    /// # let config = SigilConfig::from_file("workflow.yaml").unwrap();
    /// let timeout = config.get_or("server.timeout", 30u64);
    /// let debug = config.get_or("debug", false);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = SigilError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get a raw `Value` from the resolved configuration.
    pub fn get_value(&self, path: &str) -> Result<Value, SigilError> {
        query::get(&self.root, path).cloned()
    }

    /// Get all keys at a given path level.
    ///
    /// # Examples
    /// ```no_run
    /// # use sigil_cfg::SigilConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = SigilConfig::from_file("workflow.yaml")?;
    /// let keys = config.get_keys("server")?;
    /// for key in keys {
    ///     println!("server.{}", key);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, SigilError> {
        let value = self.get_value(path)?;
        match value {
            Value::Object(map) => Ok(map.keys().cloned().collect()),
            _ => Err(SigilError::TypeError {
                message: format!("Path '{}' is not an object", path),
                hint: Some("Only objects have keys".into()),
                code: Some(306),
            }),
        }
    }

    /// Check if a configuration path exists.
    ///
    /// # Examples
    /// ```no_run
    /// # use sigil_cfg::SigilConfig;
    /// # let config = SigilConfig::from_file("workflow.yaml").unwrap();
    /// if config.has("server.ssl.enabled") {
    ///     println!("SSL is configured");
    /// }
    /// ```
    pub fn has(&self, path: &str) -> bool {
        query::get(&self.root, path).is_ok()
    }
}
