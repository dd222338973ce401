use crate::composer::PromptComposer;
use crate::layout::Shell;
use crate::shared::document::set_document_title;
use leptos::prelude::*;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "Intuitive Design",
        "Beautiful, responsive websites created automatically from your description.",
        "feature-card--design",
    ),
    (
        "Clean Code",
        "Generate well-structured, maintainable code ready for production.",
        "feature-card--code",
    ),
    (
        "Full Control",
        "Examine and edit every file to customize your website exactly how you want it.",
        "feature-card--control",
    ),
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "Alex",
        "Frontend Engineer",
        "This tool saved me hours of development time. I described what I wanted, and in \
         minutes I had a fully functional website ready to customize.",
    ),
    (
        "Bianca",
        "Freelance Designer",
        "I hand clients a working prototype the same day we talk. The generated markup is \
         clean enough to restyle without fighting it.",
    ),
    (
        "Chen",
        "Indie Maker",
        "Went from an idea written in plain English to a deployed landing page over one \
         coffee. Editing the files afterwards felt like editing my own code.",
    ),
];

/// The entry screen: hero copy, the prompt composer and the marketing
/// sections below it. Everything except the composer is static.
#[component]
pub fn LandingPage() -> impl IntoView {
    set_document_title("SiteWeaver | Create Websites with Natural Language");

    view! {
        <Shell>
            <section class="hero">
                <span class="hero__badge">"Powered by Advanced AI"</span>
                <h1 class="hero__headline">
                    "Create Websites with " <span class="hero__accent">"Natural Language"</span>
                </h1>
                <p class="hero__subtitle">
                    "Describe your dream website and watch it come to life. \
                     No coding knowledge required."
                </p>
                <div class="hero__stats">
                    <span class="hero__stat">"4,200+ websites generated"</span>
                    <span class="hero__stat">"Used by 720+ developers"</span>
                </div>
            </section>

            <PromptComposer />

            <section class="features" id="features">
                {FEATURES
                    .iter()
                    .map(|(title, description, modifier)| {
                        view! {
                            <div class=format!("feature-card {}", modifier)>
                                <h3 class="feature-card__title">{*title}</h3>
                                <p class="feature-card__description">{*description}</p>
                                <span class="feature-card__note">"Instant generation"</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="testimonials" id="testimonials">
                <h2 class="testimonials__heading">"Trusted by Developers"</h2>
                <p class="testimonials__subheading">
                    "See what others are creating with our AI-powered website builder"
                </p>
                <div class="testimonials__grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|(name, role, quote)| {
                            view! {
                                <div class="testimonial">
                                    <div class="testimonial__author">
                                        <span class="testimonial__avatar">
                                            {name.chars().next().unwrap_or('?')}
                                        </span>
                                        <div class="testimonial__who">
                                            <h4 class="testimonial__name">{*name}</h4>
                                            <p class="testimonial__role">{*role}</p>
                                        </div>
                                    </div>
                                    <p class="testimonial__quote">{*quote}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </Shell>
    }
}
