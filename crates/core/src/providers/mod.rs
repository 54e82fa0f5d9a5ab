pub mod traits;

// Advice service implementations
pub mod groq;
