pub mod button;
pub mod github_symbol;
pub mod google_symbol;
pub mod social_auth;
