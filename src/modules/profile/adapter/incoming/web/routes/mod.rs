pub mod create_profile;
pub mod delete_profile;
pub mod get_profile;
pub mod update_profile;

pub use create_profile::{create_profile_handler, CreateProfileRequest};
pub use delete_profile::delete_profile_handler;
pub use get_profile::get_profile_handler;
pub use update_profile::{update_profile_handler, UpdateProfileRequest};
