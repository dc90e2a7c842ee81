//! 学生 API 客户端
//!
//! 封装所有与学生 API 相关的调用逻辑

use crate::config::Config;
use crate::error::ApiError;
use crate::models::envelope::RawEnvelope;
use crate::models::{Envelope, NewStudent, StudentRecord, UpdateName};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// 学生 API 能力
///
/// 只负责把请求送出去、把 `{code, body}` 信封取回来；
/// 业务码的含义由调用方判断。
#[async_trait]
pub trait StudentApi: Send + Sync {
    /// 查询全部学生
    async fn find_all(&self) -> Result<Envelope<Vec<StudentRecord>>, ApiError>;

    /// 新增学生
    async fn insert_one(&self, student: &NewStudent) -> Result<Envelope<Value>, ApiError>;

    /// 按 ID 修改姓名
    async fn update_name(&self, update: &UpdateName) -> Result<Envelope<Value>, ApiError>;

    /// 按 ID 删除
    async fn delete_by_id(&self, id: &str) -> Result<Envelope<Value>, ApiError>;
}

/// 基于 reqwest 的学生 API 客户端
#[derive(Clone)]
pub struct HttpStudentClient {
    http: reqwest::Client,
    find_all_url: String,
    insert_url: String,
    update_url: String,
    delete_url: String,
}

impl HttpStudentClient {
    /// 创建新的学生 API 客户端
    pub fn new(config: &Config) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// 使用外部提供的 reqwest 客户端
    ///
    /// 四个接口地址在创建时由 [`Config::endpoint`] 拼好，之后不再读取配置。
    ///
    /// # 参数
    /// - `http`: 已配置好的 reqwest 客户端（代理、超时等由调用方决定）
    /// - `config`: 提供 API 根地址和各接口路径
    pub fn with_client(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            find_all_url: config.endpoint(&config.find_all_path),
            insert_url: config.endpoint(&config.insert_path),
            update_url: config.endpoint(&config.update_path),
            delete_url: config.endpoint(&config.delete_path),
        }
    }

    /// 发送请求并解码信封
    ///
    /// HTTP 状态行被忽略：服务端在非 2xx 响应里同样返回信封。
    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<Envelope<T>, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(endpoint, e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::request_failed(endpoint, e))?;

        let raw: RawEnvelope = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::decode_failed(endpoint, e))?;

        debug!(
            "{} -> HTTP {} / code {} ({:?})",
            endpoint, status, raw.code, raw.message
        );

        raw.decode().map_err(|e| ApiError::decode_failed(endpoint, e))
    }
}

#[async_trait]
impl StudentApi for HttpStudentClient {
    async fn find_all(&self) -> Result<Envelope<Vec<StudentRecord>>, ApiError> {
        let request = self.http.get(&self.find_all_url);
        self.send(&self.find_all_url, request).await
    }

    async fn insert_one(&self, student: &NewStudent) -> Result<Envelope<Value>, ApiError> {
        debug!("新增学生 Payload: {:?}", student);
        let request = self.http.post(&self.insert_url).json(student);
        self.send(&self.insert_url, request).await
    }

    async fn update_name(&self, update: &UpdateName) -> Result<Envelope<Value>, ApiError> {
        debug!("修改姓名 Payload: {:?}", update);
        let request = self.http.put(&self.update_url).json(update);
        self.send(&self.update_url, request).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<Envelope<Value>, ApiError> {
        let request = self.http.delete(&self.delete_url).query(&[("id", id)]);
        self.send(&self.delete_url, request).await
    }
}
