use serde::{Deserialize, Serialize};

/// A blog post as served by the content API.
///
/// Posts are read-only from the client's perspective; `slug` is the
/// identity used for detail lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tag: Vec<String>,
    /// Creation timestamp as emitted by the API. Kept as a string and
    /// parsed lazily: a post with a malformed timestamp is still a
    /// valid record, it just never lands in the archive index.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub is_published: Option<bool>,
    #[serde(default)]
    pub read_time: Option<u32>,
    #[serde(default)]
    pub view_count: Option<u64>,
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tag: Vec<String>,
    /// Repository URL, when the project is public.
    #[serde(default)]
    pub git_hub: Option<String>,
    /// Live deployment URL.
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub cover_images: Vec<CoverImage>,
}

impl Project {
    /// First usable cover: the direct image if set, otherwise the
    /// first entry of `cover_images`.
    pub fn cover(&self) -> Option<&str> {
        self.image
            .as_deref()
            .or_else(|| self.cover_images.first().map(|c| c.image.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverImage {
    pub image: String,
}

/// A published algorithm solution (list view shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub id: u64,
    pub problem_number: u32,
    pub title: String,
    pub difficulty: String,
    pub language: String,
    #[serde(default)]
    pub time_complexity: Option<String>,
    #[serde(default)]
    pub space_complexity: Option<String>,
    pub slug: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub tags: Vec<TagRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRef {
    pub name: String,
}

/// Site owner profile returned by `user/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub softskills: Vec<SoftSkill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftSkill {
    pub name: String,
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: u64,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Contact-form payload, the only write in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// A collection endpoint returns either a bare array or a paginated
/// envelope; both shapes deserialize transparently.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Collection<T> {
    Paginated { results: Vec<T> },
    Bare(Vec<T>),
}

impl<T> Collection<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Collection::Paginated { results } => results,
            Collection::Bare(items) => items,
        }
    }
}
