pub mod api;
pub mod common;

pub use api::{DanmakuClient, DanmakuError, DanmakuItem, VideoId, VideoPage, VideoSummary};
