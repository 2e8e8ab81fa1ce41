// Care companion core
// "The Brain" - intent, mood and concern scoring for chat messages

pub mod brain;
pub mod config;
pub mod error;
pub mod telemetry;

pub use brain::{CallerContext, ElderCareResponder, IntentCategory, ResponseResult};
pub use error::AppError;

#[cfg(test)]
mod tests;
