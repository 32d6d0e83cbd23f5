use serde_json::{Value, json};

/// 宿主侧三个操作的参数表，纯静态数据，核心逻辑不读取它
pub fn get_tool_definitions() -> Vec<Value> {
    vec![
        json!({
            "name": "searchVideo",
            "description": "按关键词搜索B站视频",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "keyword": {
                        "type": "string",
                        "description": "搜索关键词"
                    },
                    "page": {
                        "type": "number",
                        "description": "页码",
                        "default": 1
                    }
                },
                "required": ["keyword"]
            }
        }),
        json!({
            "name": "getCidList",
            "description": "获取视频的分P(cid)列表",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "bvId": {
                        "type": "string",
                        "description": "BV号或旧版数字id"
                    }
                },
                "required": ["bvId"]
            }
        }),
        json!({
            "name": "getComments",
            "description": "获取某个分P的弹幕列表",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "cid": {
                        "type": "number",
                        "description": "分P的cid"
                    }
                },
                "required": ["cid"]
            }
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_operations_declared() {
        let tools = get_tool_definitions();
        let names: Vec<&str> = tools
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["searchVideo", "getCidList", "getComments"]);
    }

    #[test]
    fn test_required_params() {
        let tools = get_tool_definitions();
        assert_eq!(
            tools[0]["inputSchema"]["required"],
            json!(["keyword"])
        );
        assert_eq!(tools[0]["inputSchema"]["properties"]["page"]["default"], json!(1));
        assert_eq!(tools[1]["inputSchema"]["required"], json!(["bvId"]));
        assert_eq!(tools[2]["inputSchema"]["required"], json!(["cid"]));
    }
}
