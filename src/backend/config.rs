use crate::backend::error::BackendResult;
use config::Config;
use doku::Document;
use serde::Deserialize;
use smart_default::SmartDefault;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Document, SmartDefault)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct KisanConfig {
    /// Address and port where the server listens
    #[default("127.0.0.1:8131")]
    #[doku(example = "127.0.0.1:8131")]
    pub bind: String,
}

impl KisanConfig {
    pub fn read() -> BackendResult<Self> {
        let config = Config::builder()
            .add_source(config::File::with_name("config.toml"))
            // Cant use _ as separator due to https://github.com/mehcode/config-rs/issues/391
            .add_source(config::Environment::with_prefix("KISAN").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_bind() {
        assert_eq!("127.0.0.1:8131", KisanConfig::default().bind);
    }
}
