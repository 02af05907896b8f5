pub mod frontmatter;
pub mod sheet;

pub use frontmatter::Frontmatter;
pub use sheet::Sheet;
