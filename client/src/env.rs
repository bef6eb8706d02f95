use envconfig::Envconfig;
use std::time::Duration;
use upcheck_common::env::Mode;

#[derive(Envconfig)]
pub(crate) struct Env {
    #[envconfig(from = "APP_MODE", default = "production")]
    pub mode: Mode,

    #[envconfig(from = "VERSION_API", default = "http://127.0.0.1:8080/api.php")]
    pub version_api: String,

    #[envconfig(from = "CHECK_TIMEOUT", default = "3")]
    pub check_timeout_secs: u64,

    /// Version the running installation reports; empty means this crate's version.
    #[envconfig(from = "CURRENT_VERSION", default = "")]
    pub current_version: String,
}

impl Env {
    pub fn check_timeout(&self) -> Duration {
        Duration::from_secs(self.check_timeout_secs)
    }

    pub fn current_version(&self) -> &str {
        match self.current_version.trim() {
            "" => version(),
            v => v,
        }
    }
}

pub(crate) fn init() -> Result<Env, envconfig::Error> {
    Env::init_from_env()
}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_apply() {
        let env = Env::init_from_hashmap(&HashMap::new()).unwrap();
        assert_eq!(env.mode, Mode::Production);
        assert_eq!(env.version_api, "http://127.0.0.1:8080/api.php");
        assert_eq!(env.check_timeout(), Duration::from_secs(3));
        assert_eq!(env.current_version(), version());
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let vars = HashMap::from([("CHECK_TIMEOUT".to_string(), "abc".to_string())]);
        assert!(Env::init_from_hashmap(&vars).is_err());
    }

    #[test]
    fn test_current_version_override() {
        let vars = HashMap::from([("CURRENT_VERSION".to_string(), " 1.0.2 ".to_string())]);
        let env = Env::init_from_hashmap(&vars).unwrap();
        assert_eq!(env.current_version(), "1.0.2");
    }
}
