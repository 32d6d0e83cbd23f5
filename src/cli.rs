use clap::{Parser, Subcommand};

/// B站弹幕获取工具
#[derive(Parser, Debug)]
#[command(name = "bilidm")]
#[command(version = "0.1.0")]
#[command(about = "搜索B站视频并获取弹幕", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 按关键词搜索视频
    Search {
        /// 搜索关键词
        #[arg(value_name = "KEYWORD")]
        keyword: String,

        /// 页码
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// 列出视频的分P(cid)
    Pages {
        /// BV号或旧版数字id
        #[arg(value_name = "VIDEO_ID")]
        video_id: String,
    },

    /// 获取某个分P的弹幕
    Danmaku {
        /// 分P的cid
        #[arg(value_name = "CID")]
        cid: i64,

        /// 最多打印的弹幕条数
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}
