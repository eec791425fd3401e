//! Landing page sections

mod features;
mod footer;
mod guarantees;
mod hero;
mod integrations;
mod nav;
mod pricing;
mod statistics;

pub use features::Features;
pub use footer::Footer;
pub use guarantees::Guarantees;
pub use hero::Hero;
pub use integrations::Integrations;
pub use nav::Nav;
pub use pricing::PricingSection;
pub use statistics::Statistics;
