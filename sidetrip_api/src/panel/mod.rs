pub mod create;
pub mod get;
pub mod route;
pub mod sidebar;
pub mod toggle;
pub mod view;
