//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guard, loading, submit) and
//! delegates the decisions to the `yoga-studio` use cases.

pub mod home;
pub mod login;
pub mod me;
pub mod not_found;
pub mod register;
pub mod session_detail;
pub mod session_form;
pub mod session_list;
