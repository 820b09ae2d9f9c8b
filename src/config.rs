use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 程序配置
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
    /// 主题目录文件
    pub themes_list_file: PathBuf,
    /// 主题题目文件所在目录
    pub themes_dir: PathBuf,
    /// 静态页面目录（index.html / style.css / script.js）
    pub static_dir: PathBuf,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            themes_list_file: PathBuf::from("themes-list.json"),
            themes_dir: PathBuf::from("themes"),
            static_dir: PathBuf::from("."),
            verbose_logging: false,
        }
    }
}

/// 读取环境变量，空值视为未设置
fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

impl Config {
    /// 加载配置：默认值 → `QCM_CONFIG` 指定的 TOML 文件 → 环境变量
    pub fn load() -> Result<Self> {
        let base = match env_value("QCM_CONFIG") {
            Some(path) => Self::from_toml_file(Path::new(&path))?,
            None => Self::default(),
        };
        Ok(base.with_env_overrides())
    }

    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载配置，缺失的字段使用默认值
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", path.display()))
    }

    fn with_env_overrides(self) -> Self {
        Self {
            host: env_value("HOST").unwrap_or(self.host),
            port: env_value("PORT").and_then(|v| v.parse().ok()).unwrap_or(self.port),
            themes_list_file: env_value("THEMES_LIST_FILE").map(PathBuf::from).unwrap_or(self.themes_list_file),
            themes_dir: env_value("THEMES_DIR").map(PathBuf::from).unwrap_or(self.themes_dir),
            static_dir: env_value("STATIC_DIR").map(PathBuf::from).unwrap_or(self.static_dir),
            verbose_logging: env_value("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
        }
    }

    /// 监听地址 `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_toml_partial_keys_fall_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 9090\nthemes_dir = \"data/themes\"").unwrap();

        let config = Config::from_toml_file(file.path()).unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.themes_dir, PathBuf::from("data/themes"));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.themes_list_file, PathBuf::from("themes-list.json"));
    }

    #[test]
    fn test_toml_missing_file_is_error() {
        assert!(Config::from_toml_file(Path::new("/nonexistent/qcm.toml")).is_err());
    }

    #[test]
    fn test_bind_addr() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..Config::default()
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }
}
