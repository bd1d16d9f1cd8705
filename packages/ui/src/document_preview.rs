use dioxus::prelude::*;
use pdf::PreviewBlock;

/// Generated text laid out the way the exported PDF reads.
#[component]
pub fn DocumentPreview(text: String) -> Element {
    let blocks = pdf::preview_blocks(&text)
        .into_iter()
        .enumerate()
        .map(|(i, block)| match block {
            PreviewBlock::Heading(heading) => rsx! {
                h3 { key: "{i}", class: "preview-heading", "{heading}" }
            },
            PreviewBlock::ListItem(item) => rsx! {
                p { key: "{i}", class: "preview-list-item", "{item}" }
            },
            PreviewBlock::Paragraph(body) => rsx! {
                p { key: "{i}", class: "preview-paragraph", "{body}" }
            },
        });

    rsx! {
        div {
            class: "document-preview",
            {blocks}
        }
    }
}
