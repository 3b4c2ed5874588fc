//! Custom widget components

mod banner;
mod demos;
mod doc_page;
mod header;
mod logo;
mod sidebar;
mod status_bar;

pub use banner::{Banner, HeroImagePanel};
pub use demos::DemosPage;
pub use doc_page::{DocPageView, TableOfContents};
pub use header::Header;
pub use logo::Logo;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
