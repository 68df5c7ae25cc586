mod about;
mod catalogue;
mod contact;
mod home;
mod not_found;
mod projects;
mod services;

pub use about::AboutPage;
pub use catalogue::CataloguePage;
pub use contact::{failure_message, ContactPage};
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use projects::ProjectsPage;
pub use services::{ServiceDetailPage, ServicesListPage};
