pub mod fetch;

pub use fetch::PageClient;
