pub mod adhd_subtype;
pub mod age_group;
pub mod descriptor;
pub mod identity;
pub mod profile;
pub mod profile_patch;
