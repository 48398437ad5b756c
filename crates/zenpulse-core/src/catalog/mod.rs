mod item;

pub use item::{Catalog, ContentItem};
