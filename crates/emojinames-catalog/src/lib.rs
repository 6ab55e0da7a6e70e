//! Emoji metadata and image catalog providers
//!
//! The naming engine never reads files itself. It talks to two providers:
//!
//! - [`UnicodeMetadata`]: emoji groups, member sequences, sequence names and
//!   code point names
//! - [`ImageCatalog`]: which sequences have an image file, plus the alias and
//!   exclusion tables that travel with the image set
//!
//! ## Example
//!
//! ```rust,ignore
//! use emojinames_catalog::{EmojiTestData, ImageDirectory};
//!
//! let metadata = EmojiTestData::from_file(Path::new("data/emoji-test.txt"))?;
//! let images = ImageDirectory::scan(Path::new("pngs"), "png", "emoji_u", &metadata)?
//!     .with_aliases_file(Path::new("emoji_aliases.txt"), &metadata)?;
//! ```

pub mod provider;
pub mod image_dir;
pub mod mock;

pub use provider::{ImageCatalog, ProviderError, UnicodeMetadata};
pub use emoji_test::{EmojiTestData, MISC_GROUP};
pub use image_dir::ImageDirectory;
pub use mock::{MockImageCatalog, MockMetadata};
