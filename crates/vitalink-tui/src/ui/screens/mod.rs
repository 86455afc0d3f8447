//! One render module per screen, mirroring the web client's routes.

pub mod choose_profile;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod signup;
