//! Page Components

mod home;
mod register;

pub use home::HomePage;
pub use register::RegisterPage;
