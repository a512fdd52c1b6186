//! Landing page services grid.

use dioxus::prelude::*;

struct Service {
    title: &'static str,
    description: &'static str,
    features: [&'static str; 3],
}

const SERVICES: [Service; 6] = [
    Service {
        title: "Personal Loans",
        description: "Quick personal loans with competitive rates for your immediate financial needs.",
        features: ["Low interest rates", "Fast approval", "Flexible repayment"],
    },
    Service {
        title: "Home Loans",
        description: "Make your dream home a reality with our comprehensive home loan packages.",
        features: ["Up to 30 years tenure", "Competitive rates", "Minimal documentation"],
    },
    Service {
        title: "Auto Loans",
        description: "Drive your dream car today with our easy auto financing solutions.",
        features: ["New & used cars", "Quick processing", "Insurance options"],
    },
    Service {
        title: "Education Loans",
        description: "Invest in your future with our education loan programs for students.",
        features: ["Covers full tuition", "Flexible EMI", "Grace period"],
    },
    Service {
        title: "Business Loans",
        description: "Grow your business with our tailored business financing solutions.",
        features: ["Working capital", "Equipment finance", "Business expansion"],
    },
    Service {
        title: "Investment Plans",
        description: "Secure your financial future with our investment and savings plans.",
        features: ["High returns", "Tax benefits", "Risk management"],
    },
];

#[component]
pub fn Services() -> Element {
    rsx! {
        section { class: "services",
            div { class: "container",
                div { class: "services-intro",
                    h2 {
                        "Our "
                        span { class: "text-primary", "Financial Services" }
                    }
                    p {
                        "Crestline Lending offers comprehensive financial solutions tailored to \
                         your personal and business needs. Chat with our assistant to learn more."
                    }
                }

                div { class: "services-grid",
                    for service in SERVICES.iter() {
                        div { key: "{service.title}", class: "card service-card",
                            h3 { "{service.title}" }
                            p { class: "text-muted", "{service.description}" }
                            ul { class: "service-features",
                                for feature in service.features.iter() {
                                    li { key: "{feature}", "{feature}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
