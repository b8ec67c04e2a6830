//! Exa API endpoint groups.

pub mod contents;
pub mod context;
pub mod research;
pub mod search;

pub use contents::{ContentsApi, ContentsRequest};
pub use context::{ContextApi, ContextRequest, ContextResponse};
pub use research::{CreateResearchRequest, ResearchApi, ResearchModel, ResearchTask};
pub use search::{
    ContentsOptions, SearchApi, SearchRequest, SearchResponse, SearchResult, TextOptions,
};
