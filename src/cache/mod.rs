//! Cacheability metadata attached to rendered output.
//!
//! A cache context declares what a cached render varies by (`route`,
//! `url.path`, ...); a cache tag names a piece of content whose change
//! invalidates the render. The caching layer itself lives in the host - this
//! module only carries the declarations.

use std::borrow::Cow;

use serde::ser::SerializeStruct;
use serde::Serialize;
use smallvec::SmallVec;

/// Vary the cached result by matched route.
pub const CONTEXT_ROUTE: &str = "route";

/// Vary the cached result by request path.
pub const CONTEXT_URL_PATH: &str = "url.path";

type TagList = SmallVec<[Cow<'static, str>; 2]>;

/// Cache contexts and tags declared by a piece of rendered output
///
/// Context and tag lists are kept sorted and deduplicated, so two metadata
/// values built from the same declarations compare equal regardless of
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CacheableMetadata {
    contexts: TagList,
    tags: TagList,
}

impl CacheableMetadata {
    /// Empty metadata: cacheable everywhere, never invalidated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare cache contexts.
    pub fn add_contexts<I, S>(&mut self, contexts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        for context in contexts {
            insert_sorted(&mut self.contexts, context.into());
        }
    }

    /// Declare cache tags.
    pub fn add_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        for tag in tags {
            insert_sorted(&mut self.tags, tag.into());
        }
    }

    /// Declared cache contexts, sorted.
    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.contexts.iter().map(Cow::as_ref)
    }

    /// Declared cache tags, sorted.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(Cow::as_ref)
    }

    /// Check whether a context is declared.
    pub fn has_context(&self, context: &str) -> bool {
        self.contexts.iter().any(|c| c == context)
    }

    /// Absorb another metadata value (union of contexts and tags).
    ///
    /// Used when a render depends on multiple cacheable pieces.
    pub fn merge(&mut self, other: &Self) {
        for context in &other.contexts {
            insert_sorted(&mut self.contexts, context.clone());
        }
        for tag in &other.tags {
            insert_sorted(&mut self.tags, tag.clone());
        }
    }
}

/// Insert into a sorted list, skipping duplicates.
fn insert_sorted(list: &mut TagList, value: Cow<'static, str>) {
    if let Err(pos) = list.binary_search(&value) {
        list.insert(pos, value);
    }
}

impl Serialize for CacheableMetadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("CacheableMetadata", 2)?;
        state.serialize_field("contexts", &self.contexts.as_slice())?;
        state.serialize_field("tags", &self.tags.as_slice())?;
        state.end()
    }
}
