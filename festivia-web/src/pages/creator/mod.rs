mod dashboard;
mod events;
mod plans;

pub use dashboard::CreatorDashboardPage;
pub use events::EventManagementPage;
pub use plans::PlansPage;
