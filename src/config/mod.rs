use crate::core::reminders::ReminderPolicy;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_due_soon_days")]
    pub reminder_due_soon_days: i64,
    #[serde(default = "default_urgent_days")]
    pub reminder_urgent_days: i64,
    #[serde(default = "default_due_soon_km")]
    pub reminder_due_soon_km: f64,
    #[serde(default = "default_urgent_km")]
    pub reminder_urgent_km: f64,
}

fn default_currency() -> String {
    "€".to_string()
}
fn default_due_soon_days() -> i64 {
    ReminderPolicy::default().due_soon_days
}
fn default_urgent_days() -> i64 {
    ReminderPolicy::default().urgent_days
}
fn default_due_soon_km() -> f64 {
    ReminderPolicy::default().due_soon_km
}
fn default_urgent_km() -> f64 {
    ReminderPolicy::default().urgent_km
}

impl Default for Config {
    fn default() -> Self {
        let policy = ReminderPolicy::default();
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            currency: default_currency(),
            reminder_due_soon_days: policy.due_soon_days,
            reminder_urgent_days: policy.urgent_days,
            reminder_due_soon_km: policy.due_soon_km,
            reminder_urgent_km: policy.urgent_km,
        }
    }
}

impl Config {
    /// Standard configuration directory, per platform.
    pub fn config_dir() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join("drivelog"),
            None => PathBuf::from(".").join(".drivelog"),
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("drivelog.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("drivelog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Config::default())
        }
    }

    /// The reminder thresholds as the engine expects them.
    pub fn reminder_policy(&self) -> ReminderPolicy {
        ReminderPolicy {
            due_soon_days: self.reminder_due_soon_days,
            urgent_days: self.reminder_urgent_days,
            due_soon_km: self.reminder_due_soon_km,
            urgent_km: self.reminder_urgent_km,
        }
    }

    /// Initialize configuration and database files.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file (skipped in test mode so test runs never
        // touch the user's real configuration)
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }

    /// Check for suspicious threshold values; returns human-readable
    /// findings, empty when everything looks sane.
    pub fn check(&self) -> Vec<String> {
        let mut findings = Vec::new();

        if self.reminder_urgent_days > self.reminder_due_soon_days {
            findings.push(format!(
                "reminder_urgent_days ({}) is larger than reminder_due_soon_days ({})",
                self.reminder_urgent_days, self.reminder_due_soon_days
            ));
        }
        if self.reminder_urgent_km > self.reminder_due_soon_km {
            findings.push(format!(
                "reminder_urgent_km ({}) is larger than reminder_due_soon_km ({})",
                self.reminder_urgent_km, self.reminder_due_soon_km
            ));
        }
        if self.database.trim().is_empty() {
            findings.push("database path is empty".to_string());
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_policy() {
        let cfg = Config::default();
        let policy = cfg.reminder_policy();
        assert_eq!(policy.due_soon_days, 7);
        assert_eq!(policy.urgent_days, 2);
        assert_eq!(policy.due_soon_km, 500.0);
        assert_eq!(policy.urgent_km, 100.0);
    }

    #[test]
    fn check_flags_inverted_thresholds() {
        let cfg = Config {
            reminder_urgent_days: 10,
            ..Config::default()
        };
        assert_eq!(cfg.check().len(), 1);
    }

    #[test]
    fn yaml_roundtrip_keeps_thresholds() {
        let cfg = Config::default();
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.reminder_due_soon_km, cfg.reminder_due_soon_km);
    }
}
