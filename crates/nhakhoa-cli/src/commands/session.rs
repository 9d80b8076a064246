use anyhow::{Context, Result};
use colored::Colorize;
use nhakhoa_forms::{AppConfig, Session};
use std::process::ExitCode;

pub fn execute(config: &AppConfig, key: Option<&str>) -> Result<ExitCode> {
    let key = key.unwrap_or(&config.session.key);
    let source = config.session_source();

    let session = Session::load(&source, key)
        .with_context(|| format!("Failed to load session from {:?}", source.dir()))?;
    let user = session.user();

    println!("{}", "Signed in".green().bold());
    println!("  Account:   {}", user.account_name.cyan());
    if !user.full_name.is_empty() {
        println!("  Name:      {}", user.full_name);
    }
    println!("  Role:      {}", session.role());
    if let Some(clinic) = session.clinic_id() {
        println!("  Clinic:    {}", clinic);
    }
    println!("  Dashboard: {}", session.dashboard_path());

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nhakhoa_forms::{CurrentUser, Role};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> AppConfig {
        let mut config = AppConfig::default();
        config.session.storage_dir = dir.path().join("session");
        config
    }

    fn store_receptionist(config: &AppConfig) {
        let user = CurrentUser {
            id: 7,
            account_name: "letan01".to_string(),
            full_name: "Trần Thị B".to_string(),
            role: Role::Receptionist,
            clinic_id: Some(3),
        };
        let mut source = config.session_source();
        Session::new(user)
            .unwrap()
            .store(&mut source, &config.session.key)
            .unwrap();
    }

    #[test]
    fn test_stored_session_succeeds() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        store_receptionist(&config);

        assert_eq!(execute(&config, None).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_missing_key_is_error() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        store_receptionist(&config);

        let err = execute(&config, Some("missing")).unwrap_err();
        assert!(err.to_string().contains("Failed to load session"));
    }
}
