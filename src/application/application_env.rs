use crate::{
    platform::Permission,
    repository::DEFAULT_LEDGER_CAPACITY,
    service::notifications_service::{DEFAULT_ICON, DEFAULT_TAG},
};
use anyhow::anyhow;
use std::{path::PathBuf, str::FromStr};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub ledger_path: PathBuf,
    pub ledger_capacity: usize,

    pub icon: String,
    pub tag: String,

    pub permission: Permission,
    pub auto_grant: bool,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("SESSION_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("SESSION_NOTIFIER_LOG_FILENAME")?;
        let ledger_path = Self::env_var("SESSION_NOTIFIER_LEDGER_PATH")?.into();
        let ledger_capacity = Self::env_var_or(
            "SESSION_NOTIFIER_LEDGER_CAPACITY",
            DEFAULT_LEDGER_CAPACITY.to_string(),
        )
        .parse()?;
        if ledger_capacity == 0 {
            return Err(anyhow!(
                "SESSION_NOTIFIER_LEDGER_CAPACITY need to be greater than 0"
            ));
        }
        let icon = Self::env_var_or("SESSION_NOTIFIER_ICON", DEFAULT_ICON.to_string());
        let tag = Self::env_var_or("SESSION_NOTIFIER_TAG", DEFAULT_TAG.to_string());
        let permission = Self::env_var_or("SESSION_NOTIFIER_PERMISSION", "undetermined".into());
        let permission = Permission::from_str(&permission)
            .map_err(|_| anyhow!("SESSION_NOTIFIER_PERMISSION invalid: {permission}"))?;
        let auto_grant = Self::env_var_or("SESSION_NOTIFIER_AUTO_GRANT", "false".into()).parse()?;

        Ok(Self {
            log_directory,
            log_filename,
            ledger_path,
            ledger_capacity,
            icon,
            tag,
            permission,
            auto_grant,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn env_var_or(name: &'static str, default: String) -> String {
        std::env::var(name).unwrap_or(default)
    }
}
