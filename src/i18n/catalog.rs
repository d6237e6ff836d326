//! Built-in string tables.

use super::Locale;

/// Look up `key` in the table of `locale`.
pub(super) fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    match locale {
        Locale::En => en(key),
        Locale::Zh => zh(key),
    }
}

fn en(key: &str) -> Option<&'static str> {
    Some(match key {
        "common.toggle_theme" => "Toggle theme",
        "home.supported_api.title" => "Supported APIs",
        "home.supported_api.description" => {
            "Point any client at one of these paths and Proxify forwards the request to the official upstream."
        }
        "home.supported_api.expand_button.show_more" => "Show more",
        "home.supported_api.expand_button.show_less" => "Show less",
        "home.supported_api.note" => "The full list is always available at ",
        "home.supported_api.loading" => "Loading routes...",
        "home.supported_api.empty" => "No routes to show.",
        "home.supported_api.path_label" => "Path:",
        "home.supported_api.url_label" => "URL:",
        "home.hints" => "m more/less  arrows focus  r reload  q quit",
        _ => return None,
    })
}

fn zh(key: &str) -> Option<&'static str> {
    Some(match key {
        "common.toggle_theme" => "切换主题",
        "home.supported_api.title" => "支持的 API",
        "home.supported_api.description" => "将客户端指向以下任一路径，Proxify 会把请求转发到官方上游。",
        "home.supported_api.expand_button.show_more" => "显示更多",
        "home.supported_api.expand_button.show_less" => "收起",
        "home.supported_api.note" => "完整列表可随时通过以下接口获取：",
        "home.supported_api.loading" => "正在加载路由...",
        "home.supported_api.empty" => "暂无可显示的路由。",
        "home.supported_api.path_label" => "路径:",
        "home.supported_api.url_label" => "地址:",
        "home.hints" => "m 展开/收起  方向键 聚焦  r 重新加载  q 退出",
        _ => return None,
    })
}
