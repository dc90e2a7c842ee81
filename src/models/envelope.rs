//! 响应信封
//!
//! 服务端所有响应都是 `{code, body}` 形式，调用方只看 `code`，不看 HTTP 状态行。

use serde::Deserialize;
use serde_json::Value;

/// 成功码
pub const CODE_OK: u16 = 200;
/// 重复帐号
pub const CODE_CONFLICT: u16 = 403;
/// 找不到记录
pub const CODE_NOT_FOUND: u16 = 404;

/// 未解码 body 的原始信封
#[derive(Debug, Clone, Deserialize)]
pub struct RawEnvelope {
    pub code: u16,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub body: Value,
}

/// 已解码的信封；只有 `code == 200` 时 `body` 才有值
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub code: u16,
    pub message: Option<String>,
    pub body: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(body: T) -> Self {
        Self {
            code: CODE_OK,
            message: None,
            body: Some(body),
        }
    }

    /// 非成功响应（body 不解码）
    pub fn with_code(code: u16) -> Self {
        Self {
            code,
            message: None,
            body: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.code == CODE_OK
    }
}

impl RawEnvelope {
    /// 按操作的 payload 类型解码 body
    pub fn decode<T: serde::de::DeserializeOwned>(self) -> Result<Envelope<T>, serde_json::Error> {
        let body = if self.code == CODE_OK {
            Some(serde_json::from_value(self.body)?)
        } else {
            None
        };
        Ok(Envelope {
            code: self.code,
            message: self.message,
            body,
        })
    }
}
