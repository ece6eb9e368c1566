use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigSave)?;
            println!("# {}", Config::config_file().display());
            println!("{yaml}");
        }

        if *check {
            let findings = cfg.check();
            if findings.is_empty() {
                success("Configuration looks good.");
            } else {
                for f in findings {
                    warning(f);
                }
            }
        }
    }

    Ok(())
}
