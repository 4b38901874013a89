use crate::config::CatalogSettings;
use crate::models::{Profile, ProfileId};
use reqwest::Client;
use serde_json::Value;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while loading the profile deck
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read profile file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid profile JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Catalog returned error: {0}")]
    Api(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Profile catalog is empty")]
    Empty,

    #[error("Duplicate profile id: {0}")]
    DuplicateId(ProfileId),

    #[error("Invalid catalog settings: {0}")]
    Settings(String),
}

/// Where the deck comes from at startup
#[derive(Debug, Clone)]
pub enum ProfileSource {
    /// Sample deck compiled into the binary
    Builtin,
    /// JSON array of profiles on disk
    File(PathBuf),
    /// JSON array of profiles served over HTTP
    Remote(RemoteCatalog),
}

impl ProfileSource {
    /// Build a source from the `[catalog]` configuration section
    pub fn from_settings(settings: &CatalogSettings) -> Result<Self, CatalogError> {
        match settings.source.to_lowercase().as_str() {
            "builtin" => Ok(ProfileSource::Builtin),
            "file" => {
                let path = settings
                    .path
                    .clone()
                    .ok_or_else(|| CatalogError::Settings("catalog.path is required for file source".into()))?;
                Ok(ProfileSource::File(PathBuf::from(path)))
            }
            "remote" => {
                let url = settings
                    .url
                    .clone()
                    .ok_or_else(|| CatalogError::Settings("catalog.url is required for remote source".into()))?;
                let client = RemoteCatalog::new(url, Duration::from_secs(settings.timeout_secs))?;
                Ok(ProfileSource::Remote(client))
            }
            other => Err(CatalogError::Settings(format!(
                "unknown catalog source '{}', expected builtin, file or remote",
                other
            ))),
        }
    }

    /// Load and validate the deck
    pub async fn load(&self) -> Result<Vec<Profile>, CatalogError> {
        let profiles = match self {
            ProfileSource::Builtin => sample_profiles(),
            ProfileSource::File(path) => {
                tracing::debug!("Reading profiles from {}", path.display());
                let raw = tokio::fs::read_to_string(path).await?;
                parse_profiles(serde_json::from_str(&raw)?)?
            }
            ProfileSource::Remote(client) => client.fetch().await?,
        };

        validate_deck(&profiles)?;
        Ok(profiles)
    }
}

/// HTTP client for a remote profile catalog
#[derive(Debug, Clone)]
pub struct RemoteCatalog {
    url: String,
    client: Client,
}

impl RemoteCatalog {
    pub fn new(url: String, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { url, client })
    }

    /// Fetch the deck
    ///
    /// Accepts either a bare JSON array or an object with a `profiles` array.
    pub async fn fetch(&self) -> Result<Vec<Profile>, CatalogError> {
        tracing::debug!("Fetching profiles from: {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Api(format!(
                "Failed to fetch profiles: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;
        parse_profiles(json)
    }
}

fn parse_profiles(json: Value) -> Result<Vec<Profile>, CatalogError> {
    let list = match json {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut obj) => obj
            .remove("profiles")
            .ok_or_else(|| CatalogError::InvalidResponse("Missing profiles array".into()))?,
        _ => return Err(CatalogError::InvalidResponse("Expected a JSON array of profiles".into())),
    };

    Ok(serde_json::from_value(list)?)
}

/// A deck must be non-empty and ids must be unique
pub fn validate_deck(profiles: &[Profile]) -> Result<(), CatalogError> {
    if profiles.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::with_capacity(profiles.len());
    for profile in profiles {
        if !seen.insert(profile.id) {
            return Err(CatalogError::DuplicateId(profile.id));
        }
    }
    Ok(())
}

/// The sample deck shown when no catalog is configured
pub fn sample_profiles() -> Vec<Profile> {
    #[allow(clippy::too_many_arguments)]
    fn profile(
        id: ProfileId,
        name: &str,
        title: &str,
        image: &str,
        experience: &str,
        skills: &[&str],
        education: &str,
        bio: &str,
    ) -> Profile {
        Profile {
            id,
            name: name.to_string(),
            title: title.to_string(),
            image: format!(
                "https://images.unsplash.com/{}?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60",
                image
            ),
            experience: experience.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            education: education.to_string(),
            bio: bio.to_string(),
        }
    }

    vec![
        profile(
            1,
            "Alex Johnson",
            "Frontend Developer",
            "photo-1507003211169-0a1dd7228f2d",
            "5 years",
            &["React", "TypeScript", "CSS", "Node.js"],
            "B.S. Computer Science, Stanford University",
            "Passionate developer with experience building scalable web applications. Previously worked at Google and Facebook.",
        ),
        profile(
            2,
            "Samantha Lee",
            "UX Designer",
            "photo-1494790108377-be9c29b29330",
            "4 years",
            &["Figma", "User Research", "Prototyping", "UI Design"],
            "M.A. Human-Computer Interaction, Carnegie Mellon",
            "Creative designer focused on creating intuitive and accessible user experiences. Portfolio includes work for Fortune 500 companies.",
        ),
        profile(
            3,
            "Marcus Williams",
            "Data Scientist",
            "photo-1500648767791-00dcc994a43e",
            "3 years",
            &["Python", "Machine Learning", "SQL", "Data Visualization"],
            "Ph.D. Statistics, MIT",
            "Data scientist specializing in predictive modeling and machine learning algorithms. Published researcher with industry experience.",
        ),
        profile(
            4,
            "Priya Patel",
            "Product Manager",
            "photo-1573496359142-b8d87734a5a2",
            "6 years",
            &["Product Strategy", "Agile", "Market Research", "User Stories"],
            "MBA, Harvard Business School",
            "Strategic product manager with experience launching successful products from concept to market. Strong background in user-centered design.",
        ),
        profile(
            5,
            "David Chen",
            "Backend Engineer",
            "photo-1506794778202-cad84cf45f1d",
            "7 years",
            &["Java", "Spring Boot", "AWS", "Microservices"],
            "M.S. Computer Engineering, UC Berkeley",
            "Experienced backend developer specializing in high-performance, scalable systems. Led engineering teams at multiple startups.",
        ),
    ]
}
