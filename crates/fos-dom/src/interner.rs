//! String Interner - Deduplicate strings to save memory
//!
//! Tag names, attribute names and namespace URIs are stored once and
//! referenced by ID. The namespaces and the attribute names the a11y
//! helpers touch on every call are pre-interned.

use std::collections::HashMap;

/// Namespace URIs
pub mod ns {
    pub const HTML: &str = "http://www.w3.org/1999/xhtml";
    pub const SVG: &str = "http://www.w3.org/2000/svg";
    pub const MATHML: &str = "http://www.w3.org/1998/Math/MathML";
}

/// Interned string ID - just 4 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct InternedString(pub u32);

impl InternedString {
    /// Empty string
    pub const EMPTY: InternedString = InternedString(0);
    /// HTML namespace, pre-interned by `StringInterner::new`
    pub const HTML_NS: InternedString = InternedString(1);
    /// SVG namespace
    pub const SVG_NS: InternedString = InternedString(2);
    /// MathML namespace
    pub const MATHML_NS: InternedString = InternedString(3);
}

/// Qualified name (namespace + local name)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QualName {
    pub ns: InternedString,
    pub local: InternedString,
}

impl QualName {
    pub fn new(ns: InternedString, local: InternedString) -> Self {
        Self { ns, local }
    }

    /// Name without namespace (attributes)
    pub fn local(local: InternedString) -> Self {
        Self { ns: InternedString::EMPTY, local }
    }
}

/// String entry storing offset and length
#[derive(Debug, Clone, Copy)]
struct StringEntry {
    offset: u32,
    len: u32,
}

/// String interner for deduplicating strings
///
/// Memory layout:
/// - All strings stored in a single contiguous buffer
/// - Each InternedString is just a 4-byte index
/// - Lengths stored separately (supports null bytes in strings)
#[derive(Debug)]
pub struct StringInterner {
    buffer: String,
    map: HashMap<Box<str>, u32>,
    entries: Vec<StringEntry>,
}

impl StringInterner {
    /// Create a new string interner with namespaces and common names pre-interned
    pub fn new() -> Self {
        let mut interner = Self {
            buffer: String::with_capacity(2048),
            map: HashMap::with_capacity(128),
            entries: Vec::with_capacity(128),
        };

        // Order matters: the InternedString namespace constants index these
        interner.intern("");
        interner.intern(ns::HTML);
        interner.intern(ns::SVG);
        interner.intern(ns::MATHML);

        const COMMON_TAGS: &[&str] = &[
            "html", "head", "body", "div", "span", "p", "a", "img",
            "form", "input", "button", "select", "option", "textarea",
            "h1", "h2", "h3", "h4", "h5", "h6",
            "header", "footer", "nav", "main", "section", "article", "aside",
            "dialog", "title", "svg", "g",
        ];

        const COMMON_ATTRS: &[&str] = &[
            "id", "class", "style", "href", "title", "type", "name", "disabled",
            "role", "tabindex", "aria-label", "aria-labelledby", "aria-modal",
            "aria-hidden",
        ];

        for tag in COMMON_TAGS {
            interner.intern(tag);
        }
        for attr in COMMON_ATTRS {
            interner.intern(attr);
        }

        interner
    }

    /// Intern a string, returning its ID
    /// If the string is already interned, returns the existing ID
    pub fn intern(&mut self, s: &str) -> InternedString {
        if let Some(&index) = self.map.get(s) {
            return InternedString(index);
        }

        let index = self.entries.len() as u32;
        let offset = self.buffer.len() as u32;
        self.buffer.push_str(s);
        self.entries.push(StringEntry { offset, len: s.len() as u32 });
        self.map.insert(s.into(), index);

        InternedString(index)
    }

    /// Look up a string without interning it
    pub fn lookup(&self, s: &str) -> Option<InternedString> {
        self.map.get(s).map(|&idx| InternedString(idx))
    }

    /// Get the string for an interned ID
    #[inline]
    pub fn get(&self, id: InternedString) -> &str {
        match self.entries.get(id.0 as usize) {
            Some(entry) => {
                let start = entry.offset as usize;
                &self.buffer[start..start + entry.len as usize]
            }
            None => "",
        }
    }

    /// Number of interned strings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total memory used by the interner
    pub fn memory_usage(&self) -> usize {
        self.buffer.capacity()
            + self.map.capacity() * (std::mem::size_of::<Box<str>>() + std::mem::size_of::<u32>())
            + self.entries.capacity() * std::mem::size_of::<StringEntry>()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_dedup() {
        let mut interner = StringInterner::new();
        let id1 = interner.intern("hello");
        let id2 = interner.intern("hello");
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_namespace_constants() {
        let interner = StringInterner::new();
        assert_eq!(interner.get(InternedString::HTML_NS), ns::HTML);
        assert_eq!(interner.get(InternedString::SVG_NS), ns::SVG);
        assert_eq!(interner.get(InternedString::MATHML_NS), ns::MATHML);
        assert_eq!(interner.lookup(ns::HTML), Some(InternedString::HTML_NS));
    }

    #[test]
    fn test_lookup_does_not_intern() {
        let interner = StringInterner::new();
        let before = interner.len();
        assert_eq!(interner.lookup("data-never-seen"), None);
        assert_eq!(interner.len(), before);
        assert!(interner.lookup("aria-labelledby").is_some());
    }

    #[test]
    fn test_null_bytes() {
        let mut interner = StringInterner::new();
        let s = "null\0byte\0string";
        let id = interner.intern(s);
        assert_eq!(interner.get(id), s, "Null bytes should be preserved");
    }
}
