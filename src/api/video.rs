use tracing::debug;

use crate::common::client::BiliClient;
use crate::common::models::CommonResponse;

use super::errors::DanmakuError;
use super::models::{VideoId, VideoPage};

const PAGELIST_URL: &str = "https://api.bilibili.com/x/player/pagelist";

pub(crate) async fn get_cid_list(
    client: &BiliClient,
    video_id: &str,
) -> Result<Vec<VideoPage>, DanmakuError> {
    // 先于任何网络请求做参数检查
    let id = VideoId::parse(video_id)
        .ok_or_else(|| DanmakuError::InvalidArgument("视频ID不能为空".to_string()))?;

    let (key, value) = id.query_param();
    let url = format!("{}?{}={}", PAGELIST_URL, key, value);

    let resp = client.get::<CommonResponse<Vec<VideoPage>>>(&url).await?;
    let pages = resp.validate()?.unwrap_or_default();
    debug!("视频 {} 共 {} 个分P", video_id, pages.len());
    Ok(pages)
}
