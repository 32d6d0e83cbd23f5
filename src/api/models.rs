use lazy_static::lazy_static;
use regex::Regex;
use serde_derive::Deserialize;

/// 搜索结果中的单个视频摘要
#[derive(Debug, Clone, PartialEq)]
pub struct VideoSummary {
    pub id: String,    // bvid，缺失时回退为 aid
    pub title: String, // 已去除高亮标签
    pub cover: String,
    pub desc: String,
}

/// 视频的一个分P
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoPage {
    pub cid: i64,
    pub page: i32,
    #[serde(rename = "part")]
    pub name: String,
}

/// 单条弹幕，字段来自 p 属性的固定位置加元素正文
#[derive(Debug, Clone, PartialEq)]
pub struct DanmakuItem {
    /// 出现时间，距视频开头的秒数
    pub time: f64,
    /// 弹幕类型，滚动/顶部/底部等
    pub mode: i32,
    pub font_size: i32,
    /// RGB 颜色打包成的整数
    pub color: i32,
    /// 发送时间（Unix 秒）
    pub timestamp: i64,
    /// 弹幕池，普通弹幕或字幕弹幕
    pub pool: i32,
    /// 发送者 mid 的散列，不是稳定的账号标识
    pub mid_hash: String,
    /// 弹幕自身的唯一 id，可能超出安全整数范围，保留为字符串
    pub dmid: String,
    pub content: String,
}

/// 视频标识的两种形态：BV号走 bvid 参数，其余一律按旧版数字 id 走 aid 参数
#[derive(Debug, Clone, PartialEq)]
pub enum VideoId {
    Bvid(String),
    Aid(String),
}

impl VideoId {
    /// 空串视为无效；前缀判断是二分分发，不做完整格式校验
    pub fn parse(raw: &str) -> Option<Self> {
        lazy_static! {
            static ref BV_PATTERN: Regex = Regex::new(r"^(?i)bv").unwrap();
        }

        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if BV_PATTERN.is_match(raw) {
            Some(Self::Bvid(raw.to_string()))
        } else {
            Some(Self::Aid(raw.to_string()))
        }
    }

    pub fn query_param(&self) -> (&'static str, &str) {
        match self {
            Self::Bvid(id) => ("bvid", id),
            Self::Aid(id) => ("aid", id),
        }
    }
}

// 搜索接口的原始响应，字段都可能缺失，回退规则在转换处统一处理
#[derive(Debug, Default, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub result: Vec<SearchResultItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResultItem {
    pub bvid: Option<String>,
    pub aid: Option<i64>,
    pub title: Option<String>,
    pub pic: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_id_bv_prefix() {
        assert_eq!(
            VideoId::parse("BV1xx411c7mD"),
            Some(VideoId::Bvid("BV1xx411c7mD".to_string()))
        );
        // 前缀判断不区分大小写
        assert_eq!(
            VideoId::parse("bv1xx411c7mD"),
            Some(VideoId::Bvid("bv1xx411c7mD".to_string()))
        );
    }

    #[test]
    fn test_video_id_numeric_fallback() {
        assert_eq!(
            VideoId::parse("170001"),
            Some(VideoId::Aid("170001".to_string()))
        );
        // 不是格式校验器，非BV前缀的串原样透传
        assert_eq!(
            VideoId::parse("av170001"),
            Some(VideoId::Aid("av170001".to_string()))
        );
    }

    #[test]
    fn test_video_id_empty() {
        assert_eq!(VideoId::parse(""), None);
        assert_eq!(VideoId::parse("   "), None);
    }

    #[test]
    fn test_query_param() {
        let bv = VideoId::parse("BV1xx411c7mD").unwrap();
        assert_eq!(bv.query_param(), ("bvid", "BV1xx411c7mD"));

        let av = VideoId::parse("170001").unwrap();
        assert_eq!(av.query_param(), ("aid", "170001"));
    }
}
