mod node_path;
mod source_map;
mod source_pos;
mod source_range;
mod value;

pub use node_path::{NodePath, PathSegment};
pub use source_map::{SourceMap, SourceMapEntry};
pub use source_pos::SourcePos;
pub use source_range::SourceRange;
pub use value::Value;
