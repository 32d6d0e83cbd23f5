use std::{io::Read, time::Duration};

use flate2::read::GzDecoder;
use reqwest::{
    Client, ClientBuilder, Response,
    header::{ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, REFERER, USER_AGENT},
};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use super::error::ApiError;

// 无登录态的基础客户端，所有请求都带同一套通用请求头
#[derive(Debug, Clone)]
pub struct BiliClient {
    pub inner: Client,
}

impl BiliClient {
    pub fn new() -> Self {
        let headers = Self::get_default_headers();

        Self {
            inner: match ClientBuilder::new()
                .timeout(Duration::from_secs(10))
                .default_headers(headers)
                .build()
            {
                Ok(client) => client,
                Err(e) => {
                    error!("Error creating client: {}", e);
                    panic!("Failed to create client");
                }
            },
        }
    }

    pub fn get_default_headers() -> reqwest::header::HeaderMap {
        // 创建默认请求头
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(ACCEPT, reqwest::header::HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7"));
        headers.insert(
            ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static("zh-CN,zh;q=0.9"),
        );
        headers.insert(
            ACCEPT_ENCODING,
            reqwest::header::HeaderValue::from_static("gzip, deflate"),
        );
        headers.insert(
            REFERER,
            reqwest::header::HeaderValue::from_static("https://www.bilibili.com/"),
        );
        headers.insert(USER_AGENT, reqwest::header::HeaderValue::from_static("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/135.0.0.0 Safari/537.36"));

        headers
    }

    // 通用 JSON GET
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let text = self.get_text(url).await?;

        match serde_json::from_str::<T>(&text) {
            Ok(data) => Ok(data),
            Err(e) => {
                error!("失败的请求的URL: {}", url);
                error!("JSON 结构匹配失败: {}", e);
                Err(ApiError::InvalidResponse(format!(
                    "结构匹配失败: {}. 响应: {}",
                    e, text
                )))
            }
        }
    }

    // 取回响应原文，XML 接口也走这里
    pub async fn get_text(&self, url: &str) -> Result<String, ApiError> {
        debug!("GET {}", url);

        let resp = self
            .inner
            .get(url)
            .headers(Self::get_default_headers())
            .send()
            .await?;

        Self::read_body(resp).await
    }

    fn try_decompress(raw: &[u8]) -> Result<Vec<u8>, std::io::Error> {
        let mut decoder = GzDecoder::new(raw);
        let mut decoded = Vec::new();
        decoder.read_to_end(&mut decoded)?;
        Ok(decoded)
    }

    async fn read_body(resp: Response) -> Result<String, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::InvalidResponse(format!("HTTP 状态异常: {}", status)));
        }

        let raw_body = resp.bytes().await?;

        let decompressed = match Self::try_decompress(&raw_body) {
            Ok(data) => data,
            Err(_) => raw_body.to_vec(), // 解压失败则原样使用
        };

        Ok(String::from_utf8_lossy(&decompressed).into_owned())
    }
}

impl Default for BiliClient {
    fn default() -> Self {
        Self::new()
    }
}
