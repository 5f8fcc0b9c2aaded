//! Browser client assets compiled into the binary.

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "public/"]
pub struct Public;
