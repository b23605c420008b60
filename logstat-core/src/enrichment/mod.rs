pub mod crawler;
pub mod user_agent;
