//! Prompt templates sent to the completion service.

use crate::search::SearchResult;

/// Wraps a question in the agricultural-expert instruction used for
/// ungrounded answers.
pub fn build_general_prompt(question: &str) -> String {
    format!(
        "你是一名农业专家，请用中文回答以下农业相关问题。回答要详细、实用，适合农民朋友理解，非农业相关的问题请拒绝回答。\n\n\
         问题：{question}\n\n\
         请提供专业、准确的农业知识解答："
    )
}

/// Renders retrieved chunks in rank order, one numbered block per chunk.
pub fn build_context(docs: &[SearchResult]) -> String {
    docs.iter()
        .enumerate()
        .map(|(i, doc)| {
            format!(
                "文档片段 {} (相似度: {:.2}):\n{}\n",
                i + 1,
                doc.similarity_score,
                doc.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Instructions, retrieved context and the question in a single prompt.
pub fn build_grounded_prompt(question: &str, docs: &[SearchResult]) -> String {
    let context = build_context(docs);
    format!(
        "你是一名农业专家，请基于以下知识库内容回答用户的问题。\n\n\
         知识库内容：\n{context}\n\n\
         用户问题：{question}\n\n\
         请根据知识库内容提供准确、详细的回答。如果知识库内容不足以回答问题，请基于你的专业知识补充回答，但请明确标注哪些信息来自知识库，哪些是你的专业判断。\n\n\
         回答要求：\n\
         1. 优先使用知识库中的信息\n\
         2. 回答要详细、实用，适合农民朋友理解\n\
         3. 如果知识库信息与你的专业知识有冲突，请以知识库信息为准\n\
         4. 如果知识库信息不完整，请补充相关建议\n\
         5. 用中文回答"
    )
}
