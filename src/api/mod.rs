use crate::common::client::BiliClient;

pub mod errors;
pub mod models;
pub mod tools;

mod danmaku;
mod search;
mod video;

pub use errors::DanmakuError;
pub use models::{DanmakuItem, VideoId, VideoPage, VideoSummary};

/// 无状态的弹幕接口客户端
///
/// 三个操作彼此独立，调用方通常按 搜索 → 分P → 弹幕 的顺序串起来，
/// 但组合只发生在调用方手里，这里不保存任何跨调用状态。
#[derive(Debug, Clone)]
pub struct DanmakuClient {
    client: BiliClient,
}

impl DanmakuClient {
    pub fn new() -> Self {
        Self {
            client: BiliClient::new(),
        }
    }

    pub fn with_client(client: BiliClient) -> Self {
        Self { client }
    }

    /// 按关键词搜索视频，page 从 1 开始原样透传给上游
    pub async fn search_video(
        &self,
        keyword: &str,
        page: u32,
    ) -> Result<Vec<VideoSummary>, DanmakuError> {
        search::search_video(&self.client, keyword, page).await
    }

    /// 获取视频的分P(cid)列表，顺序与上游一致
    pub async fn get_cid_list(&self, video_id: &str) -> Result<Vec<VideoPage>, DanmakuError> {
        video::get_cid_list(&self.client, video_id).await
    }

    /// 获取某个分P的全部弹幕，按出现时间升序
    pub async fn get_comments(&self, cid: i64) -> Result<Vec<DanmakuItem>, DanmakuError> {
        danmaku::get_comments(&self.client, cid).await
    }
}

impl Default for DanmakuClient {
    fn default() -> Self {
        Self::new()
    }
}
