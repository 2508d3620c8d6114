//! Landing page component
//!
//! - SEO meta tags
//! - Hero section with a call to apply
//! - Features grid
//! - Pricing section built from the plan catalogue
//! - Contact section and footer

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use leptos_router::components::A;

use crate::core::{Plan, all_plans};
use crate::ui::icon::{Icon, icons};

/// Address used by the contact section
pub const CONTACT_EMAIL: &str = "contact@centerhub.app";

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen bg-theme-primary overflow-x-hidden">
            <Header />

            // Hero Section
            <section class="min-h-[80vh] flex items-center justify-center relative pt-16">
                <div class="text-center px-4 max-w-4xl mx-auto">
                    <h1 class="text-5xl sm:text-6xl font-bold text-theme-primary mb-6 tracking-tight landing-fade-in-up">
                        "Run modern centers with CenterHub"
                    </h1>
                    <p class="text-xl text-theme-secondary max-w-2xl mx-auto mb-10 leading-relaxed landing-fade-in-up landing-delay-200">
                        "Students, teachers, attendance and progress in one place. Apply in minutes and get your center online with a theme that matches your brand."
                    </p>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4 landing-fade-in-up landing-delay-400">
                        <A href="/apply-for-center" attr:class="landing-btn-primary">
                            "Get Started now"
                        </A>
                        <a href="#pricing" class="landing-btn-secondary">"See pricing"</a>
                    </div>
                </div>

                <div class="absolute inset-0 -z-10 overflow-hidden" aria-hidden="true">
                    <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-accent-primary/5 rounded-full blur-3xl"></div>
                    <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-blue-500/5 rounded-full blur-3xl"></div>
                </div>
            </section>

            // Features Section
            <section id="features" class="py-20 px-4 bg-theme-secondary/10">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                            "Everything your center needs"
                        </h2>
                        <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                            "One platform for administrators, teachers, students and parents."
                        </p>
                    </div>

                    <div class="grid md:grid-cols-3 gap-8">
                        <FeatureCard
                            icon=icons::DASHBOARD
                            title="Unified Dashboard"
                            description="Manage every center from one powerful dashboard."
                        />
                        <FeatureCard
                            icon=icons::TRENDING_UP
                            title="Real-Time Tracking"
                            description="Track attendance and performance in real time."
                        />
                        <FeatureCard
                            icon=icons::USERS
                            title="Teacher Collaboration"
                            description="Empower teachers to share homework, lessons and more."
                        />
                        <FeatureCard
                            icon=icons::SHIELD
                            title="Role-Based Access"
                            description="Give every user the right tools at the right time."
                        />
                        <FeatureCard
                            icon=icons::MESSAGE
                            title="Instant Communication"
                            description="Send updates instantly, keep everyone in sync."
                        />
                        <FeatureCard
                            icon=icons::PALETTE
                            title="Brand Customization"
                            description="Customize themes to match your brand perfectly."
                        />
                    </div>
                </div>
            </section>

            <PricingSection />
            <ContactSection />
            <Footer />
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="fixed top-0 inset-x-0 z-40 bg-theme-primary/80 backdrop-blur border-b border-theme">
            <nav class="max-w-6xl mx-auto flex items-center justify-between px-4 h-16">
                <A href="/" attr:class="text-xl font-bold text-theme-primary">"CenterHub"</A>
                <div class="hidden md:flex items-center gap-8 text-sm text-theme-secondary">
                    <a href="#features" class="hover:text-theme-primary">"Features"</a>
                    <a href="#pricing" class="hover:text-theme-primary">"Pricing"</a>
                    <a href="#contact" class="hover:text-theme-primary">"Contact"</a>
                </div>
                <A href="/apply-for-center" attr:class="btn-primary">"Apply"</A>
            </nav>
        </header>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-theme-primary p-6 rounded-xl border border-theme hover:border-accent-primary/50
                    transition-all duration-300 hover:shadow-lg hover:-translate-y-1">
            <div class="w-12 h-12 rounded-lg bg-accent-primary/10 flex items-center justify-center mb-4">
                <Icon name=icon class="w-6 h-6" />
            </div>
            <h3 class="text-lg font-semibold text-theme-primary mb-2">{title}</h3>
            <p class="text-theme-secondary text-sm leading-relaxed">{description}</p>
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="CenterHub - Management Platform for Educational Centers" />
        <Meta name="description" content="Manage students, teachers, attendance and progress from one dashboard. Apply for your center in minutes." />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="CenterHub - Management Platform for Educational Centers" />
        <Meta property="og:description" content="Manage students, teachers, attendance and progress from one dashboard." />
        <Link rel="canonical" href="https://centerhub.app/" />
    }
}

#[component]
fn PricingSection() -> impl IntoView {
    view! {
        <section id="pricing" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Simple, transparent pricing"
                    </h2>
                    <p class="text-lg text-theme-secondary">
                        "Free setup and training on every plan."
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-8 items-start">
                    {all_plans().iter().map(|plan| view! { <PricingCard plan=*plan /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingCard(plan: Plan) -> impl IntoView {
    let card_class = if plan.popular {
        "relative bg-theme-primary p-8 rounded-2xl border-2 border-accent-primary shadow-xl md:scale-105"
    } else {
        "bg-theme-primary p-8 rounded-2xl border border-theme hover:border-theme-secondary transition-colors"
    };

    view! {
        <div class=card_class>
            {plan.popular.then(|| view! {
                <div class="absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 bg-accent-primary text-white text-sm font-medium rounded-full">
                    "Most Popular"
                </div>
            })}

            <div class="text-center mb-6">
                <Icon name=plan.icon class="w-8 h-8 mx-auto mb-3" />
                <h3 class="text-xl font-bold text-theme-primary mb-2">{plan.name}</h3>
                <div class="flex items-baseline justify-center gap-1">
                    <span class="text-4xl font-bold text-theme-primary">{plan.price}</span>
                    <span class="text-theme-secondary">{plan.period}</span>
                </div>
                <p class="text-sm text-theme-secondary mt-2">{plan.description}</p>
            </div>

            <ul class="space-y-3 mb-8">
                {plan.features.iter().map(|feature| view! {
                    <li class="flex items-center gap-3">
                        <Icon name=icons::CHECK class="w-5 h-5 flex-shrink-0" />
                        <span class="text-theme-primary">{*feature}</span>
                    </li>
                }).collect_view()}
            </ul>

            <A
                href=plan.id.apply_href()
                attr:class=if plan.popular { "block w-full text-center landing-btn-primary" } else { "block w-full text-center landing-btn-secondary" }
            >
                "Get started"
            </A>
        </div>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-4 bg-theme-secondary/20">
            <div class="max-w-3xl mx-auto text-center">
                <h2 class="text-3xl font-bold text-theme-primary mb-4">"Questions before applying?"</h2>
                <p class="text-theme-secondary mb-8">
                    "Our team answers within 24 hours and can walk you through setup."
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-6 text-theme-secondary">
                    <a href=format!("mailto:{}", CONTACT_EMAIL) class="flex items-center gap-2 hover:text-theme-primary">
                        <Icon name=icons::MAIL class="w-5 h-5" />
                        {CONTACT_EMAIL}
                    </a>
                    <span class="flex items-center gap-2">
                        <Icon name=icons::MAP_PIN class="w-5 h-5" />
                        "Casablanca, Morocco"
                    </span>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-theme py-10 px-4">
            <div class="max-w-6xl mx-auto flex flex-col sm:flex-row items-center justify-between gap-4 text-sm text-theme-tertiary">
                <p>"© 2025 CenterHub. All rights reserved."</p>
                <div class="flex gap-6">
                    <a href="#features" class="hover:text-theme-primary">"Features"</a>
                    <a href="#pricing" class="hover:text-theme-primary">"Pricing"</a>
                    <A href="/apply-for-center" attr:class="hover:text-theme-primary">"Apply"</A>
                </div>
            </div>
        </footer>
    }
}
