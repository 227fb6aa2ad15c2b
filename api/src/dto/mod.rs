mod requests;
mod responses;

pub use requests::{CreatePostRequest, SearchParams, UpdatePostRequest};
pub use responses::{HealthResponse, MessageResponse};
