#[cfg(test)]
mod tests {
    use super::super::*;
    use std::io::Write;

    #[test]
    fn test_default_thresholds_are_ordered() {
        let scoring = ScoringConfig::default();
        assert!(scoring.tier1_min > scoring.tier2_min);
        assert_eq!(scoring.tier1_min, 7.5);
    }

    #[test]
    fn test_default_server_binds_localhost() {
        let addr = ServerConfig::default().bind_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8501);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = Config::from_toml("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.scoring.tier2_min, 5.0);
        assert_eq!(config.logging.filter, "expansa=debug,info");
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let err = Config::from_toml("[scoring]\ntier1_min = 4.0\ntier2_min = 6.0\n").unwrap_err();
        assert!(matches!(err, ExpansaError::Config(_)), "got {err:?}");
    }

    #[test]
    fn test_bad_host_rejected() {
        let err = Config::from_toml("[server]\nhost = \"not a host\"\n").unwrap_err();
        assert!(matches!(err, ExpansaError::Config(_)));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.server.port, 8501);
        assert!(config.source.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scoring]\ntier1_min = 8.0\ntier2_min = 4.0").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.scoring.tier1_min, 8.0);
        assert_eq!(config.scoring.tier2_min, 4.0);
        assert_eq!(config.source.as_deref(), Some(file.path()));
    }
}
