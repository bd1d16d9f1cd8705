use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section {
            class: "content-page",
            h1 { "About LawPal" }

            h2 { "Our Mission" }
            p {
                "LawPal makes legal paperwork approachable. Describe what happened in your own words "
                "and get a structured, formal document you can review, edit and file."
            }

            h2 { "What you can do" }
            ul {
                class: "about-list",
                li { "Generate formal complaints for theft, harassment, cybercrime and domestic violence." }
                li { "Preview the document exactly as it will be exported." }
                li { "Keep a history of your documents and edit them at any time." }
                li { "Download any document as a print-ready PDF." }
            }
        }
    }
}
