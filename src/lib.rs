pub mod blending;
pub mod fetch;
pub mod infra;
pub mod locations;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod services;
