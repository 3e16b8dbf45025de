//! # m3u-rs
//! A library for parsing IPTV m3u channel lists
//!
//! # Example
//! ```rust
//! use m3u_rs::parse_playlist;
//!
//! let result = parse_playlist(r#"
//! #EXTM3U x-tvg-url="test"
//! #EXTINF:-1 tvg-id="a" group-title="iptv",A
//! http://example.com/A.m3u8"#);
//!
//! assert_eq!(result.channels.len(), 1);
//! assert_eq!(result.channels[0].name, "A");
//! ```

pub mod format;
mod parser;
pub use parser::*;
