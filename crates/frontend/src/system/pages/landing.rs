use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::Shell;
use crate::shared::icons::icon;

struct Card {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

static STEPS: [Card; 3] = [
    Card {
        icon: "upload",
        title: "1. Upload Your Document",
        text: "Upload any legal file as PDF, DOCX or image. The analysis starts right away.",
    },
    Card {
        icon: "sparkles",
        title: "2. Get AI-Powered Insights",
        text: "Receive a colour-coded risk report, a plain-language summary and a wellness score.",
    },
    Card {
        icon: "shield-check",
        title: "3. Act with Confidence",
        text: "Use the \"What If?\" chat to resolve your doubts before you sign.",
    },
];

static FEATURES: [Card; 3] = [
    Card {
        icon: "shield-alert",
        title: "In-Depth Risk Analysis",
        text: "Every clause is segmented and assigned a risk level, so the dangerous ones stand out.",
    },
    Card {
        icon: "user-group",
        title: "Persona-Tailored Explanations",
        text: "Explanations fit your situation, whether you are a student, a small business or a senior citizen.",
    },
    Card {
        icon: "globe",
        title: "Multilingual & Accessible",
        text: "Read the report in your own language, or have it read aloud.",
    },
];

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    title: &'static str,
}

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "LexiGuard turned a 40-page rental agreement into something I could understand in 5 minutes.",
        name: "Sanath Shetty",
        title: "Student Renter",
    },
    Testimonial {
        quote: "I deal with contracts constantly. Now I sign knowing I haven't missed a critical clause.",
        name: "Varun Kumar",
        title: "Small Business Owner",
    },
    Testimonial {
        quote: "I could ask specific questions about my loan document and get clear answers instantly.",
        name: "Thilak Shastri",
        title: "First-time Homebuyer",
    },
];

fn cards(items: &'static [Card], class: &'static str) -> impl IntoView {
    items
        .iter()
        .map(|card| {
            view! {
                <div class=class>
                    <div class="card-icon">{icon(card.icon)}</div>
                    <h3>{card.title}</h3>
                    <p>{card.text}</p>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Shell>
            <section class="landing-hero">
                <h1>"Clarity in Every Clause."</h1>
                <h1 class="landing-hero__accent">"Confidence in Every Contract."</h1>
                <p>
                    "Stop signing documents you don't understand. LexiGuard turns dense legal "
                    "jargon into simple, actionable advice."
                </p>
                <A href="/auth" attr:class="btn-primary btn-large">
                    "Analyze a Document Now"
                </A>
            </section>

            <section class="landing-section landing-section--muted">
                <h2>"How It Works"</h2>
                <p class="landing-section__lead">
                    "In three simple steps, gain complete understanding and confidence."
                </p>
                <div class="landing-grid">{cards(&STEPS, "step-card")}</div>
            </section>

            <section class="landing-section">
                <h2 class="landing-section__eyebrow">"Core Features"</h2>
                <p class="landing-section__title">"An Assistant That Understands You"</p>
                <div class="landing-grid">{cards(&FEATURES, "feature-card")}</div>
            </section>

            <section class="landing-section landing-section--muted">
                <h2>"Trusted by Users Like You"</h2>
                <div class="landing-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <figure class="testimonial">
                                    <blockquote>{format!("\"{}\"", t.quote)}</blockquote>
                                    <figcaption>
                                        <strong>{t.name}</strong>
                                        <span>{t.title}</span>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="landing-cta">
                <h2>"Ready to demystify your documents?"</h2>
                <p>"Take control of your legal agreements today."</p>
                <A href="/auth" attr:class="btn-primary btn-large">
                    "Get Started with LexiGuard"
                </A>
            </section>
        </Shell>
    }
}
