#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::Arg;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

use crate::domain::models::BackendName;
use crate::domain::models::Language;
use crate::domain::models::SpeechName;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ApiURL,
    AutoSubmitVoice,
    Backend,
    BackendHealthCheckTimeout,
    ChatEndpoint,
    ConfigFile,
    Language,
    ListenCommand,
    Speech,
    SpeechCommand,
    Username,
}

fn find_arg(cmd: &Command, key: ConfigKey) -> Option<&Arg> {
    let long = key.to_string();
    return cmd
        .get_arguments()
        .find(|e| return e.get_long() == Some(long.as_str()));
}

fn possible_values(arg: &Arg) -> Vec<String> {
    return arg
        .get_possible_values()
        .iter()
        .map(|e| return e.get_name().to_string())
        .collect();
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn get_bool(key: ConfigKey) -> bool {
        return Config::get(key) == "true";
    }

    pub fn default(key: ConfigKey) -> String {
        if key == ConfigKey::Username {
            let mut user = env::var("USER").unwrap_or_else(|_| return "".to_string());
            if user.is_empty() {
                user = "User".to_string();
            }

            return user;
        }

        let default_backend = BackendName::SoilSync.to_string();
        let default_speech = SpeechName::None.to_string();
        let config_path = dirs::config_dir()
            .unwrap_or_else(|| return path::PathBuf::from("."))
            .join("soilsync/config.toml")
            .to_string_lossy()
            .to_string();

        let res = match key {
            ConfigKey::ApiURL => "http://localhost:5000",
            ConfigKey::AutoSubmitVoice => "true",
            ConfigKey::Backend => &default_backend,
            ConfigKey::BackendHealthCheckTimeout => "1000",
            ConfigKey::ChatEndpoint => "/api/chatbot/query",
            ConfigKey::Language => Language::English.code(),
            ConfigKey::ListenCommand => "",
            ConfigKey::Speech => &default_speech,
            ConfigKey::SpeechCommand => "espeak-ng -v {lang}",

            // Special
            ConfigKey::ConfigFile => &config_path,
            ConfigKey::Username => "",
        };

        return res.to_string();
    }

    pub async fn load(cmd: Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                let val = match doc.get(&key.to_string()) {
                    Some(val) => val,
                    None => continue,
                };

                // Use clap value parsers to do validation.
                let allowed = find_arg(&cmd, key)
                    .map(possible_values)
                    .unwrap_or_default();

                if let Some(val_int) = val.as_integer() {
                    Config::set(key, &val_int.to_string());
                } else if let Some(val_bool) = val.as_bool() {
                    Config::set(key, &val_bool.to_string());
                } else if let Some(val_str) = val.as_str() {
                    if val_str.is_empty() {
                        continue;
                    }
                    if !allowed.is_empty() && !allowed.contains(&val_str.to_string()) {
                        bail!(format!("config.toml has an invalid value for key '{key}': {val_str}\nPossible values are: {}", allowed.join(", ")));
                    }
                    Config::set(key, val_str);
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            username = %Config::get(ConfigKey::Username),
            backend = %Config::get(ConfigKey::Backend),
            api_url = %Config::get(ConfigKey::ApiURL),
            language = %Config::get(ConfigKey::Language),
            speech = %Config::get(ConfigKey::Speech),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                if key == ConfigKey::Username {
                    return Some(
                        "# Your name shown next to your messages.\n# username = \"\"".to_string(),
                    );
                }

                let arg = find_arg(&cmd, key)?;
                let help = arg.get_help().map(|e| return e.to_string()).unwrap_or_default();
                let mut description = help
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                let allowed = possible_values(arg);
                if !allowed.is_empty() {
                    description = format!("{description} [possible values: {}]", allowed.join(", "));
                }

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<i32>().is_ok() || val.parse::<bool>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
