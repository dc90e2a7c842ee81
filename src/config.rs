use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// 程序配置
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 学生 API 根地址
    pub api_base_url: String,
    /// 查询全部学生的路径
    pub find_all_path: String,
    /// 新增学生的路径
    pub insert_path: String,
    /// 修改姓名的路径
    pub update_path: String,
    /// 删除学生的路径（id 以查询参数传递）
    pub delete_path: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:2083/api/v1/user".to_string(),
            find_all_path: "findAll".to_string(),
            insert_path: "insertOne".to_string(),
            update_path: "updateNameByID".to_string(),
            delete_path: "deleteByID".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量读取配置，缺失的项使用默认值
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().overlay_env()
    }

    /// 从 TOML 文件读取配置，文件中缺失的项使用默认值
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 加载配置：先读 `STUDENT_FORM_CONFIG` 指向的文件（如果有），再用环境变量覆盖
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var("STUDENT_FORM_CONFIG") {
            Ok(path) => Self::from_toml_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        base.overlay_env()
    }

    fn overlay_env(self) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: std::env::var("STUDENT_API_BASE_URL").unwrap_or(self.api_base_url),
            find_all_path: std::env::var("STUDENT_API_FIND_ALL_PATH")
                .unwrap_or(self.find_all_path),
            insert_path: std::env::var("STUDENT_API_INSERT_PATH").unwrap_or(self.insert_path),
            update_path: std::env::var("STUDENT_API_UPDATE_PATH").unwrap_or(self.update_path),
            delete_path: std::env::var("STUDENT_API_DELETE_PATH").unwrap_or(self.delete_path),
            verbose_logging: match std::env::var("VERBOSE_LOGGING") {
                Ok(value) => parse_bool("VERBOSE_LOGGING", &value)?,
                Err(_) => self.verbose_logging,
            },
        })
    }

    /// 拼接完整的接口地址
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_bool(var_name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type: "bool".to_string(),
        }),
    }
}
