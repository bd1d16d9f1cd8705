use dioxus::prelude::*;
use ui::icons::{FaFileLines, FaLock, FaScaleBalanced, FaUserCheck};
use ui::{use_auth, Icon};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let start = if auth().is_signed_in() {
        Route::Dashboard {}
    } else {
        Route::Register {}
    };

    rsx! {
        section {
            class: "hero",
            h1 { "Legal Documents, Simplified" }
            p {
                class: "hero-lead",
                "AI-powered legal document and complaint generation in plain English. No law degree required."
            }
            Link { class: "cta", to: start.clone(), "Get Started" }
            ul {
                class: "hero-badges",
                li { "No credit card required" }
                li { "100% Secure" }
                li { "AI-Powered Accuracy" }
            }
        }

        section {
            class: "features",
            h2 { "Everything you need to create legal documents" }
            div {
                class: "feature-grid",
                div {
                    class: "feature-card",
                    Icon { icon: FaScaleBalanced, width: 28, height: 28 }
                    h3 { "AI-Powered Legal Assistance" }
                    p { "Generate accurate legal documents with the power of artificial intelligence." }
                }
                div {
                    class: "feature-card",
                    Icon { icon: FaFileLines, width: 28, height: 28 }
                    h3 { "Complaints Made Easy" }
                    p { "Create formal complaints in simple language without legal jargon." }
                }
                div {
                    class: "feature-card",
                    Icon { icon: FaUserCheck, width: 28, height: 28 }
                    h3 { "User-Friendly Interface" }
                    p { "Designed for everyone, regardless of legal knowledge or technical skills." }
                }
                div {
                    class: "feature-card",
                    Icon { icon: FaLock, width: 28, height: 28 }
                    h3 { "Secure & Confidential" }
                    p { "Your documents and data stay private to your account." }
                }
            }
        }

        section {
            class: "cta-band",
            h2 { "Ready to draft your first document?" }
            Link { class: "cta", to: start, "Start now" }
        }
    }
}
