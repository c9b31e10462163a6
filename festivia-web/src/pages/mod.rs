pub mod admin;
pub mod creator;
mod error;
mod landing;
pub mod login;
mod maintenance;
pub mod user;

pub use error::ErrorPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use maintenance::MaintenancePage;
