use crate::models::Post;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostError {
    #[error("Missing fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Post with id {0} not found.")]
    NotFound(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Search criteria. Filters are case-insensitive substring matches and are
/// combined with AND; a `None` filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    pub title: Option<String>,
    pub content: Option<String>,
    pub sort: Option<SortField>,
    pub direction: SortDirection,
}

impl PostQuery {
    fn matches(&self, post: &Post) -> bool {
        let contains = |haystack: &str, needle: &Option<String>| {
            needle
                .as_ref()
                .is_none_or(|n| haystack.to_lowercase().contains(&n.to_lowercase()))
        };
        contains(&post.title, &self.title) && contains(&post.content, &self.content)
    }
}

/// In-memory, insertion-ordered post collection.
///
/// Reads share the lock. Every mutation holds the write lock for its whole
/// duration, so id allocation and insertion cannot interleave.
#[derive(Debug, Default)]
pub struct PostStore {
    posts: RwLock<Vec<Post>>,
}

impl PostStore {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    /// Store holding the two posts every fresh process starts with.
    pub fn seeded() -> Self {
        Self::new(vec![
            Post::new(1, "First post", "This is the first post."),
            Post::new(2, "Second post", "This is the second post."),
        ])
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }

    pub async fn list(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    pub async fn search(&self, query: &PostQuery) -> Vec<Post> {
        let mut found: Vec<Post> = self
            .posts
            .read()
            .await
            .iter()
            .filter(|post| query.matches(post))
            .cloned()
            .collect();

        if let Some(field) = query.sort {
            let key = |post: &Post| match field {
                SortField::Title => post.title.to_lowercase(),
                SortField::Content => post.content.to_lowercase(),
            };
            // stable in both directions: ties keep collection order
            match query.direction {
                SortDirection::Asc => found.sort_by_key(key),
                SortDirection::Desc => found.sort_by(|a, b| key(b).cmp(&key(a))),
            }
        }

        found
    }

    pub async fn create(&self, title: String, content: String) -> Post {
        let mut posts = self.posts.write().await;
        let post = Post {
            id: next_id(&posts),
            title,
            content,
        };
        posts.push(post.clone());
        post
    }

    pub async fn update(
        &self,
        id: u64,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Post, PostError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(PostError::NotFound(id))?;

        if let Some(title) = title {
            post.title = title;
        }
        if let Some(content) = content {
            post.content = content;
        }

        Ok(post.clone())
    }

    pub async fn delete(&self, id: u64) -> Result<Post, PostError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|post| post.id == id)
            .ok_or(PostError::NotFound(id))?;
        Ok(posts.remove(index))
    }
}

/// `max(id) + 1`, or 1 for an empty collection. Gaps below the maximum are
/// never refilled.
fn next_id(posts: &[Post]) -> u64 {
    posts.iter().map(|post| post.id).max().map_or(1, |max| max + 1)
}
