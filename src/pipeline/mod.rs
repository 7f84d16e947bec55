pub mod contrast;
pub mod generate;
pub mod hash;
pub mod mapper;
pub mod mood;
