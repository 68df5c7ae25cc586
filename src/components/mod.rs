mod filter_bar;
mod footer;
pub mod icons;
mod logo;
mod mobile_bottom_bar;
mod modal;
pub mod navbar;
mod page_hero;
mod plan_card;
mod plan_estimator;
mod project_card;
mod project_grid;
mod reveal;
mod service_card;

pub use filter_bar::{filter_options, FilterBar, FilterOption};
pub use footer::Footer;
pub use logo::{Logo, LogoPalette};
pub use mobile_bottom_bar::MobileBottomBar;
pub use modal::Modal;
pub use navbar::{is_transparent, nav_link_active, Navbar};
pub use page_hero::PageHero;
pub use plan_card::PlanCard;
pub use plan_estimator::PlanEstimator;
pub use project_card::ProjectCard;
pub use project_grid::{results_label, ProjectGrid, ProjectGridEmpty};
pub use reveal::Reveal;
pub use service_card::ServiceCard;
