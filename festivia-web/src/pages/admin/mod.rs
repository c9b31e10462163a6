mod approvals;
mod creators;
mod dashboard;
mod users;

pub use approvals::ApprovalsPage;
pub use creators::CreatorManagementPage;
pub use dashboard::AdminDashboardPage;
pub use users::UsersManagementPage;

/// Native confirmation prompt guarding destructive admin actions.
pub(crate) fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
