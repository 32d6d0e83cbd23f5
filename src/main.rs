use clap::Parser;
use colored::Colorize;
use tracing::debug;

use bili_danmaku::DanmakuClient;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = cli::Cli::parse();
    let client = DanmakuClient::new();

    match args.command {
        cli::Commands::Search { keyword, page } => {
            debug!("搜索关键词: {} 第{}页", keyword, page);
            let videos = client.search_video(&keyword, page).await?;

            println!(
                "{} 第{}页共 {} 个结果",
                "✓".green().bold(),
                page,
                videos.len()
            );
            for video in &videos {
                println!("  {}  {}", video.id.cyan(), video.title.bold());
                if !video.desc.is_empty() {
                    println!("      {}", video.desc.bright_black());
                }
            }
        }

        cli::Commands::Pages { video_id } => {
            let pages = client.get_cid_list(&video_id).await?;

            println!("{} {} 共 {} 个分P", "✓".green().bold(), video_id, pages.len());
            for p in &pages {
                println!("  P{}  cid={}  {}", p.page, p.cid.to_string().cyan(), p.name);
            }
        }

        cli::Commands::Danmaku { cid, limit } => {
            let items = client.get_comments(cid).await?;

            println!("{} cid={} 共 {} 条弹幕", "✓".green().bold(), cid, items.len());
            for item in items.iter().take(limit) {
                println!(
                    "  [{:>8.2}s] {}",
                    item.time,
                    item.content
                );
            }
            if items.len() > limit {
                println!("  {} 仅显示前 {} 条", "…".bright_black(), limit);
            }
        }
    }

    Ok(())
}
