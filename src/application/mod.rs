pub mod dto;
pub mod session;
pub mod use_cases;
