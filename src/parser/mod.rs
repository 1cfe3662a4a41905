pub mod frontmatter;
pub mod metadata;

pub use frontmatter::{extract_block, normalize_content, split_frontmatter};
pub use metadata::{parse_block, unquote, ParsedBlock};
