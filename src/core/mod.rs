pub mod engine;
pub mod factorial;
pub mod primality;
