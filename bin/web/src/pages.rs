//! Page components for the application.
//!
//! Each page is an independent Leptos component bound to one route.

pub mod about;
pub mod home;
pub mod i18n_demo;
pub mod not_found;

pub use about::AboutPage;
pub use home::HomePage;
pub use i18n_demo::I18nDemoPage;
pub use not_found::NotFoundPage;
