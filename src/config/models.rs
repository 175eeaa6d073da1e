use crate::core::models::OwnerId;
use crate::errors::Error;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerConfigItem {
    pub value: OwnerId,
    pub description: String,
}

impl Default for OwnerConfigItem {
    fn default() -> Self {
        Self {
            value: OwnerId::new("local"),
            description: "Owner whose tasks the dashboard loads.".into(),
        }
    }
}

impl ConfigItem<OwnerId> for OwnerConfigItem {
    fn get_value(&self) -> &OwnerId {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let trimmed = new_value.trim();
        if trimmed.is_empty() {
            return Err(Error::config("Owner id must not be empty."));
        }
        self.value = OwnerId::new(trimmed);
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: true,
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        match new_value.trim().to_ascii_lowercase().as_str() {
            "true" => self.value = true,
            "false" => self.value = false,
            other => {
                return Err(Error::config(format!(
                    "Invalid boolean '{other}'. Expected 'true' or 'false'."
                )));
            }
        }
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}
