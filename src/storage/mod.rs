pub mod sum;

// Re-export commonly used types
pub use sum::ThreadSafeSum;
