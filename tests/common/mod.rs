//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use harvest::InMemoryDocumentStore;

pub const RICE_TEXT: &str = "水稻常见病害包括稻瘟病和白叶枯病，防治方法是喷洒农药并轮作";

/// A small multi-document farm corpus.
pub const FARM_DOCS: [(&str, &str); 4] = [
    ("rice.txt", RICE_TEXT),
    (
        "wheat.txt",
        "小麦需要在返青期追施氮肥。拔节期注意田间排水，防止倒伏。",
    ),
    (
        "corn.txt",
        "玉米播种前要深翻土壤。出苗后保证光照充足，适时施肥浇水。",
    ),
    (
        "vegetables.txt",
        "蔬菜育苗需要控制温度和湿度。病虫害防治以预防为主，少用农药。",
    ),
];

pub fn rice_store() -> Arc<InMemoryDocumentStore> {
    store_with(&[("rice.txt", RICE_TEXT)])
}

pub fn farm_store() -> Arc<InMemoryDocumentStore> {
    store_with(&FARM_DOCS)
}

pub fn store_with(docs: &[(&str, &str)]) -> Arc<InMemoryDocumentStore> {
    let store = InMemoryDocumentStore::default();
    for (filename, content) in docs {
        store
            .upload(content.as_bytes(), filename)
            .expect("fixture upload should succeed");
    }
    Arc::new(store)
}
