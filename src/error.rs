use thiserror::Error;

/// 应用程序错误类型
///
/// API 调用失败不在这里：它们被转换成 [`crate::services::Outcome::TransportError`]
/// 并以提示的形式显示，不会中断主循环。
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 终端读写错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

/// API 调用错误
///
/// 只描述传输层面的失败；业务码（403 / 404 等）不算错误，
/// 由 [`crate::services::Outcome`] 负责分类。
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败（连接失败、读取响应体失败等）
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 响应不是合法的 `{code, body}` 信封
    #[error("JSON解析失败 ({endpoint}): {source}")]
    DecodeFailed {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// 创建请求失败错误
    pub fn request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// 创建解析失败错误
    pub fn decode_failed(endpoint: impl Into<String>, source: serde_json::Error) -> Self {
        ApiError::DecodeFailed {
            endpoint: endpoint.into(),
            source,
        }
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_message_names_the_variable() {
        let err = ConfigError::EnvVarParseFailed {
            var_name: "VERBOSE_LOGGING".to_string(),
            value: "maybe".to_string(),
            expected_type: "bool".to_string(),
        };
        let app: AppError = err.into();
        let text = app.to_string();
        assert!(text.starts_with("配置错误"));
        assert!(text.contains("VERBOSE_LOGGING"));
        assert!(text.contains("maybe"));
    }

    #[test]
    fn decode_error_keeps_endpoint() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ApiError::decode_failed("http://localhost/findAll", source);
        assert!(err.to_string().contains("http://localhost/findAll"));
    }
}
