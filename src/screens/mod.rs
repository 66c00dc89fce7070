pub mod community;
pub mod community_portal;
pub mod names;
