mod account;
mod dashboard;
mod subscriptions;

pub use account::AccountPage;
pub use dashboard::UserDashboardPage;
pub use subscriptions::SubscriptionsPage;
