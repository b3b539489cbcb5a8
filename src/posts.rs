//! Posts and the store that holds them.
//!
//! The store keeps every post in memory and persists to a single JSON file:
//! an array of post objects.

mod pagination;

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::toc::{extract_headings, TocEntry};
use crate::Listing;

pub use pagination::{paginate, Page, PageWindow};

/// A published post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Stable identifier, used in URLs.
    pub id: String,

    /// Post title.
    pub title: String,

    /// Publication time.
    pub date: DateTime<Utc>,

    /// Short summary shown in listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Markdown-like body.
    pub content: String,

    /// Tags, in the author's order.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Post {
    /// The table of contents of the body.
    pub fn toc(&self) -> Vec<TocEntry> {
        extract_headings(&self.content)
    }

    /// Whether the post carries `tag`, ignoring case.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .iter()
            .any(|t| caseless::default_caseless_match_str(t, tag))
    }
}

/// The author-supplied fields of a new or edited post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    /// Required.
    pub title: String,

    /// Optional; blank counts as absent.
    #[serde(default)]
    pub excerpt: Option<String>,

    /// Required.
    pub content: String,

    /// Blank tags are dropped.
    #[serde(default)]
    pub tags: Vec<String>,
}

struct Checked {
    title: String,
    excerpt: Option<String>,
    content: String,
    tags: Vec<String>,
}

impl PostDraft {
    fn check(self) -> Result<Checked> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(Error::MissingField("title"));
        }
        let content = self.content.trim();
        if content.is_empty() {
            return Err(Error::MissingField("content"));
        }

        Ok(Checked {
            title: title.to_string(),
            excerpt: self
                .excerpt
                .as_deref()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string),
            content: content.to_string(),
            tags: self
                .tags
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

/// Every post of the blog.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    /// An empty store.
    pub fn new() -> Self {
        PostStore::default()
    }

    /// A store holding `posts`.
    pub fn from_posts(posts: Vec<Post>) -> Self {
        PostStore { posts }
    }

    /// Reads a store from a JSON file. A missing file is an empty store.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("{} not found, starting with no posts", path.display());
                return Ok(PostStore::new());
            }
            Err(e) => return Err(e.into()),
        };

        let posts: Vec<Post> = serde_json::from_str(&json)?;
        log::debug!("loaded {} posts from {}", posts.len(), path.display());
        Ok(PostStore { posts })
    }

    /// Writes the store to a JSON file, replacing its contents.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, serde_json::to_vec_pretty(&self.posts)?)?;
        log::debug!("saved {} posts to {}", self.posts.len(), path.display());
        Ok(())
    }

    /// Number of posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether there are no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// All posts, newest first. Posts with the same date keep their
    /// insertion order.
    pub fn all(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    /// The post with the given id.
    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Posts carrying `tag` (ignoring case), newest first.
    pub fn by_tag(&self, tag: &str) -> Vec<&Post> {
        self.all().into_iter().filter(|p| p.has_tag(tag)).collect()
    }

    /// Every distinct tag, sorted.
    pub fn tags(&self) -> Vec<&str> {
        self.posts
            .iter()
            .flat_map(|p| p.tags.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// One page of posts, optionally limited to a tag.
    pub fn list(&self, tag: Option<&str>, page: usize, listing: &Listing) -> Page<&Post> {
        let posts = match tag {
            Some(tag) => self.by_tag(tag),
            None => self.all(),
        };
        paginate(posts, page, listing.page_size)
    }

    /// Publishes a draft at `now` and returns the new post's id.
    ///
    /// Ids are the millisecond timestamp of `now`, bumped past any id already
    /// in use.
    pub fn create(&mut self, draft: PostDraft, now: DateTime<Utc>) -> Result<String> {
        let checked = draft.check()?;

        let mut stamp = now.timestamp_millis();
        while self.get(&stamp.to_string()).is_some() {
            stamp += 1;
        }
        let id = stamp.to_string();

        log::info!("creating post {}: {:?}", id, checked.title);
        self.posts.push(Post {
            id: id.clone(),
            title: checked.title,
            date: now,
            excerpt: checked.excerpt,
            content: checked.content,
            tags: checked.tags,
        });
        Ok(id)
    }

    /// Replaces the fields of an existing post. Its id and date are kept.
    pub fn update(&mut self, id: &str, draft: PostDraft) -> Result<()> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        let checked = draft.check()?;

        log::info!("updating post {}", id);
        post.title = checked.title;
        post.excerpt = checked.excerpt;
        post.content = checked.content;
        post.tags = checked.tags;
        Ok(())
    }

    /// Removes a post, returning it.
    pub fn delete(&mut self, id: &str) -> Result<Post> {
        let ix = self
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        log::info!("deleting post {}", id);
        Ok(self.posts.remove(ix))
    }
}
