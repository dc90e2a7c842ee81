use crate::error::ApiError;
use crate::models::envelope::{CODE_CONFLICT, CODE_NOT_FOUND, CODE_OK};
use crate::models::Envelope;

/// 单次远程调用的结果分类
///
/// 调用方必须穷举处理每一种情况，而不是对 `code` 做开放式比较。
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// code 200
    Success(T),
    /// code 404
    NotFound,
    /// code 403
    Conflict,
    /// 其他业务码
    ServerError { code: u16 },
    /// 网络失败或响应无法解析，保留原始错误文本
    TransportError(String),
}

impl<T> Outcome<T> {
    pub fn from_response(response: Result<Envelope<T>, ApiError>) -> Self {
        match response {
            Ok(envelope) => Self::from_envelope(envelope),
            Err(e) => Outcome::TransportError(e.to_string()),
        }
    }

    pub fn from_envelope(envelope: Envelope<T>) -> Self {
        match envelope.code {
            CODE_OK => match envelope.body {
                Some(body) => Outcome::Success(body),
                None => Outcome::TransportError("响应缺少 body".to_string()),
            },
            CODE_NOT_FOUND => Outcome::NotFound,
            CODE_CONFLICT => Outcome::Conflict,
            code => Outcome::ServerError { code },
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::NotFound => Outcome::NotFound,
            Outcome::Conflict => Outcome::Conflict,
            Outcome::ServerError { code } => Outcome::ServerError { code },
            Outcome::TransportError(detail) => Outcome::TransportError(detail),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_codes() {
        assert_eq!(
            Outcome::from_envelope(Envelope::ok(7)),
            Outcome::Success(7)
        );
        assert_eq!(
            Outcome::<i32>::from_envelope(Envelope::with_code(404)),
            Outcome::NotFound
        );
        assert_eq!(
            Outcome::<i32>::from_envelope(Envelope::with_code(403)),
            Outcome::Conflict
        );
        assert_eq!(
            Outcome::<i32>::from_envelope(Envelope::with_code(500)),
            Outcome::ServerError { code: 500 }
        );
    }

    #[test]
    fn ok_without_body_is_transport_error() {
        let envelope = Envelope::<i32> {
            code: 200,
            message: None,
            body: None,
        };
        assert!(matches!(
            Outcome::from_envelope(envelope),
            Outcome::TransportError(_)
        ));
    }

    #[test]
    fn api_error_keeps_raw_text() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = ApiError::decode_failed("http://api/findAll", source);
        let expected = err.to_string();
        let outcome = Outcome::<()>::from_response(Err(err));
        assert_eq!(outcome, Outcome::TransportError(expected));
    }

    #[test]
    fn map_preserves_failures() {
        assert_eq!(Outcome::Success(2).map(|v| v * 10), Outcome::Success(20));
        assert_eq!(Outcome::<i32>::NotFound.map(|v| v * 10), Outcome::NotFound);
    }
}
