//! Keyword Source Adapters
//!
//! - **FileKeywordSource** - Comma-delimited text file
//! - **StaticKeywordSource** - Fixed list (testing/embedding)

mod file_keyword_source;
mod static_keyword_source;

pub use file_keyword_source::FileKeywordSource;
pub use static_keyword_source::StaticKeywordSource;
