//! Landing page.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(page, "src/pages/page.module.css");
stylance::import_crate_style!(css, "src/pages/home.module.css");

struct Feature {
    icon: IconData,
    title: &'static str,
    description: &'static str,
    href: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: ic::CHAT,
        title: "Chat with Book",
        description: "Upload your notes or books and have interactive conversations with AI to \
                      understand complex topics.",
        href: "#/chat",
    },
    Feature {
        icon: ic::MAP,
        title: "Get Chapter Roadmap",
        description: "Generate visual study roadmaps that break down chapters into manageable \
                      learning steps.",
        href: "#/roadmap",
    },
    Feature {
        icon: ic::FILE_TEXT,
        title: "Summarize Notes",
        description: "Transform lengthy notes into concise summaries that capture all the key \
                      points.",
        href: "#/summarize",
    },
];

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div>
            <section class=css::hero>
                <div class=css::heroBadge><Icon icon=ic::SPARKLES /></div>
                <h1 class=css::heroTitle>
                    "Learn Smart. " <span class=page::gradient>"Study Less."</span>
                    <br />
                    <span class=css::heroAccent>"AI-Powered Learning."</span>
                </h1>
                <p class=css::heroText>
                    "Transform your study experience with AI that understands your learning \
                     style. Chat with your materials, create roadmaps, and summarize complex \
                     topics instantly."
                </p>
                <div class=css::actions>
                    <a href="#/chat" class=stylance::classes!(page::button, page::large)>
                        "Start Learning" <Icon icon=ic::ARROW_RIGHT />
                    </a>
                    <a href="#/roadmap" class=stylance::classes!(page::buttonOutline, page::large)>
                        "See Demo"
                    </a>
                </div>
            </section>

            <section class=css::features>
                <div class=page::header>
                    <h2 class=page::title>"Powerful Features for Smart Learning"</h2>
                    <p class=page::subtitle>
                        "Discover how AI can revolutionize your study routine with these \
                         intelligent tools."
                    </p>
                </div>
                <div class=stylance::classes!(page::cols3, css::featureGrid)>
                    {FEATURES
                        .iter()
                        .map(|f| view! {
                            <a href=f.href class=stylance::classes!(page::card, page::cardHover, css::feature)>
                                <span class=css::featureIcon><Icon icon=f.icon /></span>
                                <h3 class=css::featureTitle>{f.title}</h3>
                                <p class=page::muted>{f.description}</p>
                                <span class=page::buttonGhost>
                                    "Try Now" <Icon icon=ic::ARROW_RIGHT />
                                </span>
                            </a>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class=css::cta>
                <h2 class=page::title>"Ready to Transform Your Learning?"</h2>
                <p class=page::subtitle>
                    "Join thousands of students who are already learning smarter with AI Notes Buddy."
                </p>
                <a href="#/chat" class=stylance::classes!(page::button, page::large, css::ctaButton)>
                    "Get Started for Free" <Icon icon=ic::ARROW_RIGHT />
                </a>
            </section>
        </div>
    }
}
