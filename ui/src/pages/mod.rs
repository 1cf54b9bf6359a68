pub mod entity_page;
pub mod home;
pub mod not_found;

pub use entity_page::EntityPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
