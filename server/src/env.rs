use envconfig::Envconfig;
use upcheck_common::env::Mode;

#[derive(Envconfig)]
pub(crate) struct Env {
    #[cfg_attr(
        debug_assertions,
        envconfig(from = "APP_MODE", default = "development")
    )]
    #[cfg_attr(
        not(debug_assertions),
        envconfig(from = "APP_MODE", default = "production")
    )]
    pub mode: Mode,

    #[envconfig(from = "HOST", default = "0.0.0.0")]
    pub host: String,

    #[envconfig(from = "PORT", default = "8080")]
    pub port: u16,
}

impl Env {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub(crate) fn init() -> anyhow::Result<Env> {
    let config = Env::init_from_env()?;
    Ok(config)
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
        assert_eq!(env.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides_from_map() {
        let vars = HashMap::from([
            ("APP_MODE".to_string(), "prod".to_string()),
            ("HOST".to_string(), "127.0.0.1".to_string()),
            ("PORT".to_string(), "9000".to_string()),
        ]);
        let env = Env::init_from_hashmap(&vars).unwrap();
        assert_eq!(env.mode, Mode::Production);
        assert_eq!(env.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_mode_rejected() {
        let vars = HashMap::from([("APP_MODE".to_string(), "staging".to_string())]);
        assert!(Env::init_from_hashmap(&vars).is_err());
    }

    #[test]
    fn test_invalid_port_rejected() {
        let vars = HashMap::from([("PORT".to_string(), "http".to_string())]);
        assert!(Env::init_from_hashmap(&vars).is_err());
    }
}
