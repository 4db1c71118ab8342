//! Static copy blocks of the home page.

use yew::prelude::*;

struct Card {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const STEPS: [Card; 3] = [
    Card {
        icon: "⌖",
        title: "Scan Your Body",
        description: "Download the VLV app and perform a quick, precise scan to create a digital mold of your intimate features.",
    },
    Card {
        icon: "◈",
        title: "Create Your Replica",
        description: "Our advanced 3D technology turns your scan into a custom, high-quality silicone replica that mirrors your unique form with exquisite detail. We even closely match your skin tone for a truly personalized finish.",
    },
    Card {
        icon: "£",
        title: "Sell & Earn",
        description: "Enjoy a straightforward 50/50 revenue share, £50 for you, £50 for VLV. We print and ship on demand, so you skip inventory hassles.",
    },
];

const BENEFITS: [Card; 4] = [
    Card {
        icon: "£",
        title: "Zero Upfront Costs",
        description: "We cover all scanning and production expenses, letting you focus on your brand.",
    },
    Card {
        icon: "🔒",
        title: "Privacy & Security",
        description: "Your scan and personal data remain completely confidential.",
    },
    Card {
        icon: "◈",
        title: "Personalised Precision",
        description: "Our cutting-edge process not only replicates your body but also closely matches your skin tone for a truly authentic product.",
    },
    Card {
        icon: "✓",
        title: "Fair Partnership",
        description: "Enjoy a straightforward 50/50 revenue share. Every sale directly boosts your earnings.",
    },
];

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-glow hero-glow-right"></div>
            <div class="hero-glow hero-glow-left"></div>
            <div class="section-container narrow centered">
                <h1 class="hero-title">
                    {"Your Body, "}<span class="gradient-text">{"Perfectly Replicated"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"At VLV, we empower OnlyFans creators to transform their unique image into personalised products, with zero upfront costs."}
                </p>
                <p class="hero-subtitle"><strong>{"Simply scan, sell, and profit."}</strong></p>
                <a href="#signup" class="button-primary">{"Register Your Interest ↓"}</a>
            </div>
        </section>
    }
}

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id="how-it-works" class="section">
            <div class="section-container">
                <div class="section-intro">
                    <h2 class="section-heading">{"How It "}<span class="gradient-text">{"Works"}</span></h2>
                    <p class="section-subheading">
                        {"Our streamlined process makes it easy to turn your unique body into a profitable product"}
                    </p>
                </div>
                <div class="card-grid three">
                    { for STEPS.iter().enumerate().map(|(i, step)| html! {
                        <div class="card step-card" key={i}>
                            <div class="card-icon">{step.icon}</div>
                            <span class="step-number">{i + 1}</span>
                            <h3>{step.title}</h3>
                            <p class="muted">{step.description}</p>
                        </div>
                    }) }
                </div>
                <div class="centered">
                    <a href="#signup" class="button-primary">{"Start Your Journey Now"}</a>
                </div>
            </div>
        </section>
    }
}

#[function_component(Benefits)]
pub fn benefits() -> Html {
    html! {
        <section id="benefits" class="section tinted">
            <div class="section-container">
                <div class="section-intro">
                    <h2 class="section-heading">{"Why Choose "}<span class="gradient-text">{"VLV"}</span></h2>
                    <p class="section-subheading">
                        {"We've designed our service to make monetisation easy, secure, and profitable for creators"}
                    </p>
                </div>
                <div class="card-grid two">
                    { for BENEFITS.iter().map(|benefit| html! {
                        <div class="card benefit-card" key={benefit.title}>
                            <div class="card-icon">{benefit.icon}</div>
                            <div>
                                <h3>{benefit.title}</h3>
                                <p class="muted">{benefit.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
