//! Frontend routes the shell links to.

pub const HOME: &str = "/";
pub const USERS: &str = "/users";
pub const ORGANIZATIONS: &str = "/organizations";
pub const EMPLOYEES: &str = "/employees";
pub const PERFORMANCE_EVALUATIONS: &str = "/performance-evaluations";
pub const INVITES: &str = "/invites";
pub const CHAT: &str = "/chat";
