use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if cfg.general.port == 0 {
        errors.push("general.port must be > 0".to_string());
    }

    if cfg.logging.rust_log.trim().is_empty() {
        errors.push("logging.rust_log must not be empty".to_string());
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.general.port = 0;
        let err = validate(&cfg).expect_err("port 0 should be rejected");
        assert!(err.to_string().contains("general.port must be > 0"));
    }

    #[test]
    fn every_violation_is_reported() {
        let mut cfg = AppConfig::default();
        cfg.general.host = "   ".to_string();
        cfg.general.port = 0;
        cfg.logging.rust_log = String::new();

        let message = validate(&cfg).expect_err("config should be invalid").to_string();
        assert!(message.starts_with("invalid app config:"));
        assert!(message.contains("general.host must not be empty"));
        assert!(message.contains("general.port must be > 0"));
        assert!(message.contains("logging.rust_log must not be empty"));
        assert_eq!(message.lines().count(), 4);
    }
}
