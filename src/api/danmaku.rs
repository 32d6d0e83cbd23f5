use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use tracing::debug;

use crate::common::client::BiliClient;

use super::errors::DanmakuError;
use super::models::DanmakuItem;

pub(crate) async fn get_comments(
    client: &BiliClient,
    cid: i64,
) -> Result<Vec<DanmakuItem>, DanmakuError> {
    // 先于任何网络请求做参数检查
    if cid <= 0 {
        return Err(DanmakuError::InvalidArgument("cid 不能为空".to_string()));
    }

    let url = format!("https://comment.bilibili.com/{}.xml", cid);
    let xml = client.get_text(&url).await?;

    let mut items = parse_danmaku_xml(&xml)?;
    debug!("cid {} 共 {} 条弹幕", cid, items.len());

    // sort_by 是稳定排序，time 相同的弹幕保持文档内的相对顺序
    items.sort_by(|a, b| a.time.total_cmp(&b.time));
    Ok(items)
}

/// 解析旧版弹幕 XML，单条格式异常只丢弃该条，整个文档损坏才报错
fn parse_danmaku_xml(xml: &str) -> Result<Vec<DanmakuItem>, DanmakuError> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut buf = Vec::new();

    let mut current_attr: Option<String> = None;
    let mut current_text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"d" => {
                current_attr = read_p_attr(&e);
                current_text.clear();
            }
            Ok(Event::Text(e)) => {
                if current_attr.is_some() {
                    current_text.push_str(&e.unescape().unwrap_or_default());
                }
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"d" => {
                if let Some(attr) = current_attr.take() {
                    match build_item(&attr, &current_text) {
                        Some(item) => items.push(item),
                        None => debug!("跳过格式异常的弹幕: p=\"{}\"", attr),
                    }
                }
            }
            // 自闭合的 <d/> 没有正文，内容为空串
            Ok(Event::Empty(e)) if e.name().as_ref() == b"d" => {
                if let Some(attr) = read_p_attr(&e) {
                    match build_item(&attr, "") {
                        Some(item) => items.push(item),
                        None => debug!("跳过格式异常的弹幕: p=\"{}\"", attr),
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(DanmakuError::Parse(format!("XML 解析错误: {}", e))),
            _ => {}
        }
        buf.clear();
    }

    Ok(items)
}

// p 属性缺失或为空串时返回 None，该条弹幕整条跳过
fn read_p_attr(e: &BytesStart) -> Option<String> {
    let attr = e.try_get_attribute("p").ok().flatten()?;
    let value = attr.unescape_value().ok()?;
    if value.is_empty() {
        return None;
    }
    Some(value.into_owned())
}

/// p 属性按逗号切成固定位置的字段：
/// time,mode,fontSize,color,timestamp,pool,midHash,dmid
/// 不足 8 段或数值解析失败的整条丢弃，不产出半填充的记录
fn build_item(p: &str, content: &str) -> Option<DanmakuItem> {
    let fields: Vec<&str> = p.split(',').collect();
    if fields.len() < 8 {
        return None;
    }

    Some(DanmakuItem {
        time: fields[0].parse().ok()?,
        mode: fields[1].parse().ok()?,
        font_size: fields[2].parse().ok()?,
        color: fields[3].parse().ok()?,
        timestamp: fields[4].parse().ok()?,
        pool: fields[5].parse().ok()?,
        mid_hash: fields[6].to_string(),
        dmid: fields[7].to_string(),
        content: content.to_string(),
    })
}
