use serde_derive::Deserialize;

use crate::common::error::ApiError;

/// B站接口的通用响应壳
#[derive(Debug, Deserialize)]
pub struct CommonResponse<T> {
    pub code: i64,

    pub message: Option<String>,

    pub data: Option<T>,
}

impl<T> CommonResponse<T> {
    // code 非 0 即接口失败，message 缺失时用占位文本
    pub fn validate(self) -> Result<Option<T>, ApiError> {
        if self.code != 0 {
            return Err(ApiError::Api(
                self.code,
                self.message.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }
        Ok(self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let resp: CommonResponse<Vec<i64>> =
            serde_json::from_str(r#"{"code":0,"message":"0","data":[1,2]}"#).unwrap();
        assert_eq!(resp.validate().unwrap(), Some(vec![1, 2]));
    }

    #[test]
    fn test_validate_error_code() {
        let resp: CommonResponse<Vec<i64>> =
            serde_json::from_str(r#"{"code":-400,"message":"invalid"}"#).unwrap();
        match resp.validate() {
            Err(ApiError::Api(code, message)) => {
                assert_eq!(code, -400);
                assert_eq!(message, "invalid");
            }
            other => panic!("期望 ApiError::Api, 实际: {:?}", other),
        }
    }

    #[test]
    fn test_validate_missing_message() {
        let resp: CommonResponse<Vec<i64>> = serde_json::from_str(r#"{"code":-1}"#).unwrap();
        match resp.validate() {
            Err(ApiError::Api(_, message)) => assert_eq!(message, "Unknown error"),
            other => panic!("期望 ApiError::Api, 实际: {:?}", other),
        }
    }
}
