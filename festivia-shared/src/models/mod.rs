pub mod accounts;
pub mod auth;
pub mod booking;
pub mod dashboard;
pub mod errors;
pub mod event;
pub mod paging;
pub mod profile;
pub mod role;
pub mod subscription;

pub use accounts::{CreatorSummary, Moderated, UserSummary, toggle_blocked};
pub use auth::{LoginRequest, LoginResponse};
pub use booking::{BookingStatus, BookingSummary};
pub use dashboard::{DashboardStats, MonthlyPoint};
pub use errors::ErrorResponse;
pub use event::{ApprovalStatus, EventSummary, NewEvent, ParseApprovalStatusError};
pub use paging::{PageQuery, Paged};
pub use profile::RoleProfile;
pub use role::{ParseRoleError, Role};
pub use subscription::{FieldError, NewSubscription, Subscription, SubscriptionForm};
