use clap::Parser;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "config-viewer")]
#[command(about = "Operation Engine UI - serves the F5 configuration viewer", long_about = None)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE", default_value = "./config.yaml", help = "Path to configuration file")]
    pub config: PathBuf,

    #[arg(long, env = "HOST", help = "Server bind address [env: HOST or CONFIG_VIEWER_SERVER__HOST]")]
    pub host: Option<String>,

    #[arg(long, env = "PORT", help = "Server bind port [env: PORT or CONFIG_VIEWER_SERVER__PORT]")]
    pub port: Option<u16>,

    #[arg(long, env = "LOG_LEVEL", help = "Log level: trace, debug, info, warn, error [env: LOG_LEVEL or CONFIG_VIEWER_SERVER__LOG_LEVEL]")]
    pub log_level: Option<String>,

    #[arg(long = "f5-config", value_name = "FILE", env = "F5_CONFIG_FILE", help = "JSON file served at /api/f5Config; the built-in mock is used when unset [env: F5_CONFIG_FILE or CONFIG_VIEWER_F5__CONFIG_FILE]")]
    pub f5_config_file: Option<PathBuf>,

    #[arg(long, value_name = "DIR", env = "STATICS_DIR", help = "Directory holding the built front-end bundle [env: STATICS_DIR or CONFIG_VIEWER_STATICS__DIR]")]
    pub statics_dir: Option<PathBuf>,
}

fn remove_nulls(value: serde_json::Value) -> serde_json::Value {
    use serde_json::{Map, Value};

    match value {
        Value::Object(map) => {
            let filtered: Map<String, Value> = map
                .into_iter()
                .filter_map(|(k, v)| {
                    let cleaned = remove_nulls(v);
                    if cleaned.is_null() {
                        None
                    } else if let Value::Object(ref obj) = cleaned {
                        if obj.is_empty() {
                            None
                        } else {
                            Some((k, cleaned))
                        }
                    } else {
                        Some((k, cleaned))
                    }
                })
                .collect();
            Value::Object(filtered)
        }
        other => other,
    }
}

impl Cli {
    fn to_figment_map(&self) -> serde_json::Value {
        use serde_json::json;

        let value = json!({
            "server": {
                "host": self.host,
                "port": self.port,
                "log_level": self.log_level,
            },
            "f5": {
                "config_file": self.f5_config_file,
            },
            "statics": {
                "dir": self.statics_dir,
            }
        });

        remove_nulls(value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Where `/api/f5Config` reads its document from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct F5Config {
    /// `None` serves the mock declaration compiled into the binary.
    #[serde(default)]
    pub config_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticsConfig {
    #[serde(default = "default_statics_dir")]
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub f5: F5Config,

    #[serde(default)]
    pub statics: StaticsConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_statics_dir() -> PathBuf {
    PathBuf::from("./crates/config-viewer-front/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl Default for StaticsConfig {
    fn default() -> Self {
        Self {
            dir: default_statics_dir(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Self::from_cli(&Cli::parse())
    }

    /// Defaults, then the YAML file, then `CONFIG_VIEWER_*` env vars, then CLI flags.
    pub fn from_cli(cli: &Cli) -> Result<Self, figment::Error> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if cli.config.exists() {
            figment = figment.merge(Yaml::file(&cli.config));
        }

        figment = figment
            .merge(Env::prefixed("CONFIG_VIEWER_").split("__"))
            .merge(Serialized::defaults(cli.to_figment_map()));

        figment.extract()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
