//! Domain keyword annotation.

/// Agricultural vocabulary used to annotate chunks and classify questions.
pub const AGRICULTURAL_KEYWORDS: [&str; 27] = [
    "水稻", "玉米", "小麦", "大豆", "蔬菜", "水果", "种植", "栽培", "施肥", "浇水",
    "病虫害", "防治", "农药", "收获", "播种", "育苗", "田间", "管理", "土壤",
    "温度", "湿度", "光照", "肥料", "有机肥", "氮肥", "磷肥", "钾肥",
];

/// Vocabulary terms contained in `text`, in vocabulary order.
pub fn extract_keywords(text: &str) -> Vec<&'static str> {
    AGRICULTURAL_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| text.contains(keyword))
        .collect()
}

/// Returns `true` if `text` mentions at least one domain keyword.
pub fn is_in_domain(text: &str) -> bool {
    AGRICULTURAL_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}
