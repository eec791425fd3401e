//! Home Page

use leptos::prelude::*;

use crate::sections::{
    Features, Footer, Guarantees, Hero, Integrations, Nav, PricingSection, Statistics,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <Nav />
            <Hero />
            <Features />
            <Statistics />
            <Integrations />
            <Guarantees />
            <PricingSection />
            <Footer />
        </div>
    }
}
