use thiserror::Error;

use crate::common::error::ApiError;

#[derive(Debug, Error)]
pub enum DanmakuError {
    #[error("参数无效: {0}")]
    InvalidArgument(String),
    #[error("接口返回错误: {0}")]
    Upstream(String),
    #[error("弹幕解析失败: {0}")]
    Parse(String),
}

impl From<ApiError> for DanmakuError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Api(_, msg) => DanmakuError::Upstream(msg),
            ApiError::Reqwest(e) => DanmakuError::Upstream(e.to_string()),
            ApiError::InvalidResponse(msg) => DanmakuError::Upstream(msg),
        }
    }
}
