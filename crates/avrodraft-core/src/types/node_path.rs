use std::fmt;
use std::str::FromStr;

use crate::error::PathError;

/// One step in a `NodePath`: an object key or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // RFC 6901 escaping: '~' -> '~0', '/' -> '~1'
            Self::Key(k) => write!(f, "{}", k.replace('~', "~0").replace('/', "~1")),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

/// The address of a node inside a `Value`, in JSON Pointer style.
///
/// The empty path addresses the root. `Display` and `FromStr` use
/// RFC 6901 syntax: `""` is the root, `/fields/0/name` descends through
/// the key `fields`, index `0`, and key `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodePath {
    segments: Vec<PathSegment>,
}

impl NodePath {
    /// The empty path addressing the root node.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Returns this path extended by an object key.
    pub fn child_key(&self, key: impl Into<String>) -> Self {
        let mut child = self.clone();
        child.push(PathSegment::Key(key.into()));
        child
    }

    /// Returns this path extended by a sequence index.
    pub fn child_index(&self, index: usize) -> Self {
        let mut child = self.clone();
        child.push(PathSegment::Index(index));
        child
    }

    /// Returns the parent path, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Whether `self` is `prefix` or a descendant of it.
    pub fn starts_with(&self, prefix: &NodePath) -> bool {
        self.segments.len() >= prefix.segments.len()
            && self.segments[..prefix.segments.len()] == prefix.segments[..]
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for NodePath {
    type Err = PathError;

    /// Parses an RFC 6901 pointer. Segments made of digits with no leading
    /// zero (or exactly "0") become indices; everything else becomes a key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::root());
        }
        if !s.starts_with('/') {
            return Err(PathError::MissingLeadingSlash(s.to_string()));
        }

        let mut segments = Vec::new();
        for raw in s[1..].split('/') {
            let unescaped = unescape_segment(raw)?;
            if is_index_segment(&unescaped) {
                // Digit runs within usize range are indices; larger runs
                // can only have been object keys.
                match unescaped.parse::<usize>() {
                    Ok(i) => segments.push(PathSegment::Index(i)),
                    Err(_) => segments.push(PathSegment::Key(unescaped)),
                }
            } else {
                segments.push(PathSegment::Key(unescaped));
            }
        }
        Ok(Self { segments })
    }
}

fn is_index_segment(s: &str) -> bool {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    s == "0" || !s.starts_with('0')
}

fn unescape_segment(raw: &str) -> Result<String, PathError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '~' {
            match chars.next() {
                Some('0') => out.push('~'),
                Some('1') => out.push('/'),
                _ => {
                    return Err(PathError::InvalidEscape {
                        segment: raw.to_string(),
                    })
                }
            }
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_empty() {
        let root = NodePath::root();
        assert!(root.is_root());
        assert_eq!(root.len(), 0);
        assert_eq!(root.to_string(), "");
    }

    #[test]
    fn child_builders() {
        let path = NodePath::root().child_key("fields").child_index(0).child_key("name");
        assert_eq!(path.to_string(), "/fields/0/name");
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn parent_walks_up() {
        let path = NodePath::root().child_key("fields").child_index(2);
        let parent = path.parent().unwrap();
        assert_eq!(parent.to_string(), "/fields");
        assert_eq!(parent.parent().unwrap(), NodePath::root());
        assert!(NodePath::root().parent().is_none());
    }

    #[test]
    fn starts_with_prefixes() {
        let path = NodePath::root().child_key("fields").child_index(0);
        assert!(path.starts_with(&NodePath::root()));
        assert!(path.starts_with(&NodePath::root().child_key("fields")));
        assert!(path.starts_with(&path));
        assert!(!path.starts_with(&NodePath::root().child_key("name")));
    }

    #[test]
    fn parse_empty_is_root() {
        let path: NodePath = "".parse().unwrap();
        assert!(path.is_root());
    }

    #[test]
    fn parse_mixed_segments() {
        let path: NodePath = "/fields/0/name".parse().unwrap();
        assert_eq!(
            path.segments(),
            &[
                PathSegment::Key("fields".into()),
                PathSegment::Index(0),
                PathSegment::Key("name".into()),
            ]
        );
    }

    #[test]
    fn parse_rejects_missing_slash() {
        let result: Result<NodePath, _> = "fields/0".parse();
        assert!(matches!(result, Err(PathError::MissingLeadingSlash(_))));
    }

    #[test]
    fn parse_unescapes_tilde_sequences() {
        let path: NodePath = "/a~1b/c~0d".parse().unwrap();
        assert_eq!(
            path.segments(),
            &[
                PathSegment::Key("a/b".into()),
                PathSegment::Key("c~d".into()),
            ]
        );
    }

    #[test]
    fn parse_rejects_bad_escape() {
        let result: Result<NodePath, _> = "/a~2b".parse();
        assert!(matches!(result, Err(PathError::InvalidEscape { .. })));
    }

    #[test]
    fn display_escapes_special_keys() {
        let path = NodePath::root().child_key("a/b").child_key("c~d");
        assert_eq!(path.to_string(), "/a~1b/c~0d");
    }

    #[test]
    fn leading_zero_segment_is_a_key() {
        let path: NodePath = "/01".parse().unwrap();
        assert_eq!(path.segments(), &[PathSegment::Key("01".into())]);
    }

    #[test]
    fn roundtrip_display_parse() {
        let path = NodePath::root().child_key("fields").child_index(12).child_key("type");
        let back: NodePath = path.to_string().parse().unwrap();
        assert_eq!(path, back);
    }
}
