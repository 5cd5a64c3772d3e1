//! Block bodies for `PATCH /blocks/{id}/children` and `PATCH /blocks/{id}`.

use super::properties::RichTextInput;
use serde::Serialize;

/// Body of an append-children request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppendBlockChildren {
    pub children: Vec<BlockInput>,
}

/// A new paragraph block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockInput {
    object: &'static str,
    #[serde(rename = "type")]
    block_type: &'static str,
    paragraph: ParagraphInput,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParagraphInput {
    pub rich_text: Vec<RichTextInput>,
}

/// Body that replaces a paragraph block's text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateParagraph {
    pub paragraph: ParagraphInput,
}

/// One paragraph block per text, in order.
pub fn new_plain_text_blocks<S: AsRef<str>>(texts: &[S]) -> AppendBlockChildren {
    AppendBlockChildren {
        children: texts
            .iter()
            .map(|text| BlockInput {
                object: "block",
                block_type: "paragraph",
                paragraph: ParagraphInput {
                    rich_text: vec![RichTextInput::text(text.as_ref())],
                },
            })
            .collect(),
    }
}

/// Replaces a paragraph's rich text with a single plain run.
pub fn update_plain_text_block(text: &str) -> UpdateParagraph {
    UpdateParagraph {
        paragraph: ParagraphInput {
            rich_text: vec![RichTextInput::content(text)],
        },
    }
}
