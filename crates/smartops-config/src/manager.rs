use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{ConfigError, FinancePolicy};

const TMP_SUFFIX: &str = "tmp";

/// Handles persistence for [`FinancePolicy`].
#[derive(Debug, Clone)]
pub struct PolicyManager {
    policy_path: PathBuf,
}

impl PolicyManager {
    pub fn new(policy_path: PathBuf) -> Self {
        Self { policy_path }
    }

    /// Anchors the policy file under `base/config/policy.json`, creating
    /// the directories when missing.
    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        let config_dir = base.join("config");
        fs::create_dir_all(&config_dir)?;
        Ok(Self::new(config_dir.join("policy.json")))
    }

    /// Default location under the user's config directory.
    pub fn default_base_dir() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("smartops")
    }

    pub fn policy_path(&self) -> &Path {
        &self.policy_path
    }

    /// Loads the persisted policy, or the default when no file exists yet.
    pub fn load(&self) -> Result<FinancePolicy, ConfigError> {
        if self.policy_path.exists() {
            let data = fs::read_to_string(&self.policy_path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(FinancePolicy::default())
        }
    }

    pub fn save(&self, policy: &FinancePolicy) -> Result<(), ConfigError> {
        if let Some(parent) = self.policy_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(policy)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.policy_path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.policy_path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".");
    tmp.push(TMP_SUFFIX);
    PathBuf::from(tmp)
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    Ok(())
}
