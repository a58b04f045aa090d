pub mod responses;
pub mod user_response;
