//! Content API client and payload types.

mod client;
mod error;
mod types;

pub use client::{endpoints, ContentClient};
pub use error::FetchError;
pub use types::{
    Collection, ContactMessage, CoverImage, Education, Experience, Post, Profile, Project, Skill,
    SoftSkill, Solution, TagRef,
};
