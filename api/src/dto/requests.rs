use crate::store::{PostError, PostQuery, SortDirection, SortField};
use serde::Deserialize;
use validator::Validate;

/// Fields a new post must carry, in the order they are reported when missing.
const REQUIRED_FIELDS: [&str; 2] = ["title", "content"];

/// Body of `POST /api/posts`.
///
/// Both fields are optional at the serde level so that an absent key reaches
/// validation instead of failing deserialization.
#[derive(Debug, Default, Validate, Deserialize)]
pub struct CreatePostRequest {
    #[validate(required)]
    pub title: Option<String>,
    #[validate(required)]
    pub content: Option<String>,
}

impl CreatePostRequest {
    /// Returns the title and content, or every required field that is missing.
    pub fn into_fields(self) -> Result<(String, String), PostError> {
        if let Err(errors) = self.validate() {
            let field_errors = errors.field_errors();
            let missing = REQUIRED_FIELDS
                .iter()
                .copied()
                .filter(|field| field_errors.contains_key(*field))
                .collect();
            return Err(PostError::MissingFields(missing));
        }

        match (self.title, self.content) {
            (Some(title), Some(content)) => Ok((title, content)),
            _ => Err(PostError::MissingFields(REQUIRED_FIELDS.to_vec())),
        }
    }
}

/// Body of `PUT /api/posts/{id}`. Omitted fields keep their current value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// GET /api/posts/search?title=..&content=..&sort=title|content&direction=asc|desc
#[derive(Debug, Default)]
pub struct SearchParams {
    pub title: Option<String>,
    pub content: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

/// Built from raw query pairs. The first value of a repeated key wins and
/// unknown keys are ignored.
impl FromIterator<(String, String)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = SearchParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "title" => &mut params.title,
                "content" => &mut params.content,
                "sort" => &mut params.sort,
                "direction" => &mut params.direction,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

impl From<SearchParams> for PostQuery {
    fn from(params: SearchParams) -> Self {
        let sort = match params.sort.as_deref() {
            Some("title") => Some(SortField::Title),
            Some("content") => Some(SortField::Content),
            _ => None,
        };
        let direction = match params.direction.as_deref() {
            Some("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        };

        PostQuery {
            title: params.title.filter(|t| !t.is_empty()),
            content: params.content.filter(|c| !c.is_empty()),
            sort,
            direction,
        }
    }
}
