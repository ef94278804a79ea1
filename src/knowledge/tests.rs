use super::*;

const RICE_TEXT: &str = "水稻常见病害包括稻瘟病和白叶枯病，防治方法是喷洒农药并轮作";

#[test]
fn test_extract_keywords_in_vocabulary_order() {
    assert_eq!(extract_keywords(RICE_TEXT), vec!["水稻", "防治", "农药"]);
    assert_eq!(extract_keywords("水稻病害防治"), vec!["水稻", "防治"]);
}

#[test]
fn test_extract_keywords_out_of_domain() {
    assert!(extract_keywords("今天天气怎么样").is_empty());
    assert!(!is_in_domain("what is the capital of France"));
    assert!(is_in_domain("玉米什么时候播种"));
}

#[test]
fn test_vocabulary_size() {
    assert_eq!(AGRICULTURAL_KEYWORDS.len(), 27);
}

#[test]
fn test_chunk_text_empty() {
    assert!(chunk_text("", ChunkingConfig::default()).is_empty());
    assert!(chunk_text("  \n ", ChunkingConfig::default()).is_empty());
}

#[test]
fn test_chunk_text_short_text_is_single_chunk() {
    let chunks = chunk_text("第一句。第二句。", ChunkingConfig::default());
    assert_eq!(chunks, vec!["第一句。第二句。"]);
}

#[test]
fn test_chunk_text_appends_terminator_to_trailing_sentence() {
    let chunks = chunk_text("没有句号的文本", ChunkingConfig::default());
    assert_eq!(chunks, vec!["没有句号的文本。"]);
}

#[test]
fn test_chunk_text_splits_with_overlap() {
    let config = ChunkingConfig {
        chunk_size: 6,
        overlap: 2,
    };

    let chunks = chunk_text("一二三四。五六七八。", config);

    assert_eq!(chunks, vec!["一二三四。", "四。 五六七八。"]);
}

#[test]
fn test_chunk_text_newlines_become_spaces() {
    let chunks = chunk_text("第一行\n第二行。", ChunkingConfig::default());
    assert_eq!(chunks, vec!["第一行 第二行。"]);
}

#[tokio::test]
async fn test_upload_creates_annotated_chunks() {
    let store = InMemoryDocumentStore::default();

    let receipt = store
        .upload(RICE_TEXT.as_bytes(), "rice.txt")
        .expect("upload should succeed");

    assert_eq!(receipt.chunk_count, 1);
    let chunks = store.list_chunks().await.expect("list chunks");
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].document_id, receipt.document_id);
    assert_eq!(chunks[0].chunk_index, 0);
    assert_eq!(chunks[0].filename, "rice.txt");
    assert_eq!(chunks[0].keywords, vec!["水稻", "防治", "农药"]);
    assert_eq!(store.document_count().await.expect("count"), 1);
}

#[test]
fn test_upload_rejects_duplicates() {
    let store = InMemoryDocumentStore::default();
    let first = store.upload(RICE_TEXT.as_bytes(), "rice.txt").expect("first");

    let err = store
        .upload(RICE_TEXT.as_bytes(), "rice-copy.txt")
        .expect_err("duplicate content must be rejected");

    assert_eq!(
        err,
        StoreError::Duplicate {
            filename: "rice-copy.txt".to_string(),
            existing_id: first.document_id,
        }
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn test_upload_rejects_empty_content() {
    let store = InMemoryDocumentStore::default();

    let err = store.upload(b"   \n", "blank.txt").expect_err("empty");

    assert!(matches!(err, StoreError::EmptyContent { .. }));
    assert!(store.is_empty());
}

#[test]
fn test_upload_rejects_content_without_chunks() {
    let store = InMemoryDocumentStore::default();

    let err = store.upload("。。。".as_bytes(), "dots.txt").expect_err("no chunks");

    assert!(matches!(err, StoreError::NoChunks { .. }));
    assert!(store.is_empty());
}

#[test]
fn test_upload_records_metadata() {
    let store = InMemoryDocumentStore::default();
    let receipt = store.upload("玉米种植。".as_bytes(), "Corn.TXT").expect("upload");

    let doc = store.get(receipt.document_id).expect("document exists");
    assert_eq!(doc.file_type, ".txt");
    assert_eq!(doc.size_bytes, "玉米种植。".len() as u64);
    assert_eq!(doc.content_hash, crate::hashing::content_hash("玉米种植。".as_bytes()));
    assert!(doc.processed);
}

#[tokio::test]
async fn test_delete_removes_chunks() {
    let store = InMemoryDocumentStore::default();
    let rice = store.upload(RICE_TEXT.as_bytes(), "rice.txt").expect("rice");
    store.upload("小麦施肥。".as_bytes(), "wheat.txt").expect("wheat");

    let deleted = store.delete(rice.document_id).expect("delete");

    assert_eq!(deleted.filename, "rice.txt");
    let chunks = store.list_chunks().await.expect("chunks");
    assert!(chunks.iter().all(|c| c.filename == "wheat.txt"));
    assert!(matches!(
        store.delete(rice.document_id),
        Err(StoreError::NotFound { id }) if id == rice.document_id
    ));
}

#[test]
fn test_documents_newest_first() {
    let store = InMemoryDocumentStore::default();
    let first = store.upload("第一份。".as_bytes(), "a.txt").expect("a");
    let second = store.upload("第二份。".as_bytes(), "b.md").expect("b");

    let ids: Vec<u64> = store.documents().iter().map(|d| d.id).collect();

    assert_eq!(ids, vec![second.document_id, first.document_id]);
}

#[test]
fn test_stats_counts_types_and_size() {
    let store = InMemoryDocumentStore::default();
    store.upload("第一份。".as_bytes(), "a.txt").expect("a");
    store.upload("第二份。".as_bytes(), "b.txt").expect("b");
    store.upload("notes without terminator".as_bytes(), "c.md").expect("c");

    let stats = store.stats();

    assert_eq!(stats.total_documents, 3);
    assert_eq!(stats.total_chunks, 3);
    assert_eq!(stats.file_types.get(".txt"), Some(&2));
    assert_eq!(stats.file_types.get(".md"), Some(&1));
    assert_eq!(stats.total_size_mb, 0.0);
}
