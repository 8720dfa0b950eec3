use super::*;

impl SigilConfig {
    /// Get a value with validation - returns a detailed error if validation fails
    pub fn get_validated<T, F>(
        &self,
        path: &str,
        validator: F,
        valid_values: &str,
    ) -> Result<T, SigilError>
    where
        T: TryFrom<Value, Error = SigilError>,
        F: FnOnce(&T) -> bool,
    {
        let value = self.get_value(path)?;
        let typed_value = T::try_from(value)?;

        if !validator(&typed_value) {
            return Err(SigilError::ValidationError {
                message: format!("Invalid value for `{}`\nExpected: {}", path, valid_values),
                hint: Some(format!("Valid values are: {}", valid_values)),
                code: Some(450),
            });
        }

        Ok(typed_value)
    }

    /// Get a string value and validate it's one of the allowed values
    pub fn get_string_enum(&self, path: &str, allowed_values: &[&str]) -> Result<String, SigilError> {
        let value: String = self.get(path)?;
        let lower_value = value.to_lowercase();

        if !allowed_values.iter().any(|&v| v.to_lowercase() == lower_value) {
            return Err(SigilError::ValidationError {
                message: format!("Invalid value '{}' for `{}`", value, path),
                hint: Some(format!("Expected one of: {}", allowed_values.join(", "))),
                code: Some(451),
            });
        }

        Ok(value)
    }
}
