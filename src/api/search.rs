use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::common::client::BiliClient;
use crate::common::models::CommonResponse;

use super::errors::DanmakuError;
use super::models::{SearchData, VideoSummary};

const SEARCH_URL: &str = "https://api.bilibili.com/x/web-interface/search/type";

pub(crate) async fn search_video(
    client: &BiliClient,
    keyword: &str,
    page: u32,
) -> Result<Vec<VideoSummary>, DanmakuError> {
    let url = format!(
        "{}?search_type=video&keyword={}&page={}",
        SEARCH_URL,
        urlencoding::encode(keyword),
        page
    );

    let resp = client.get::<CommonResponse<SearchData>>(&url).await?;
    let data = resp.validate()?.unwrap_or_default();

    let videos = map_search_result(data);
    debug!("搜索 \"{}\" 第{}页，命中 {} 个视频", keyword, page, videos.len());
    Ok(videos)
}

fn map_search_result(data: SearchData) -> Vec<VideoSummary> {
    data.result
        .into_iter()
        .map(|item| {
            // bvid 缺失或为空串时回退到 aid
            let id = match item.bvid.filter(|s| !s.is_empty()) {
                Some(bvid) => bvid,
                None => item.aid.map(|aid| aid.to_string()).unwrap_or_default(),
            };

            VideoSummary {
                id,
                title: strip_tags(&item.title.unwrap_or_default()),
                cover: item.pic.unwrap_or_default(),
                desc: item.description.unwrap_or_default(),
            }
        })
        .collect()
}

// 搜索接口会在标题里塞 <em class="keyword"> 高亮标签
fn strip_tags(title: &str) -> String {
    lazy_static! {
        static ref TAG_PATTERN: Regex = Regex::new(r"<[^>]*>").unwrap();
    }

    TAG_PATTERN.replace_all(title, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_and_map(body: &str) -> Result<Vec<VideoSummary>, DanmakuError> {
        let resp: CommonResponse<SearchData> = serde_json::from_str(body).unwrap();
        let data = resp.validate().map_err(DanmakuError::from)?.unwrap_or_default();
        Ok(map_search_result(data))
    }

    #[test]
    fn test_search_result_mapping() {
        let body = r#"{"code":0,"data":{"result":[{"bvid":"BV1xx","title":"<em>Foo</em>Bar","pic":"p.jpg","description":"d"}]}}"#;
        let videos = parse_and_map(body).unwrap();
        assert_eq!(
            videos,
            vec![VideoSummary {
                id: "BV1xx".to_string(),
                title: "FooBar".to_string(),
                cover: "p.jpg".to_string(),
                desc: "d".to_string(),
            }]
        );
    }

    #[test]
    fn test_search_error_code() {
        let body = r#"{"code":-400,"message":"invalid"}"#;
        match parse_and_map(body) {
            Err(DanmakuError::Upstream(msg)) => assert_eq!(msg, "invalid"),
            other => panic!("期望 Upstream 错误, 实际: {:?}", other),
        }
    }

    #[test]
    fn test_search_aid_fallback() {
        let body = r#"{"code":0,"data":{"result":[{"bvid":"","aid":170001,"title":"t"},{"title":"u"}]}}"#;
        let videos = parse_and_map(body).unwrap();
        assert_eq!(videos[0].id, "170001");
        // bvid 和 aid 都缺失时回退为空串
        assert_eq!(videos[1].id, "");
        assert_eq!(videos[1].cover, "");
        assert_eq!(videos[1].desc, "");
    }

    #[test]
    fn test_search_missing_result_list() {
        let body = r#"{"code":0,"data":{}}"#;
        assert!(parse_and_map(body).unwrap().is_empty());
    }

    #[test]
    fn test_strip_tags_removes_all_markup() {
        assert_eq!(
            strip_tags(r#"<em class="keyword">Rust</em> 教程 <b>1</b>"#),
            "Rust 教程 1"
        );
        assert!(!strip_tags("<a><b>嵌套</b></a>").contains(['<', '>']));
    }
}
