pub mod gemfile;

pub use gemfile::GemfileWriter;
