use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use folio::api::{
    endpoints, ContentClient, Education, Experience, Post, Profile, Project, Skill, SoftSkill,
    Solution,
};
use folio::archive::ChronoIndex;
use folio::config::Config;
use folio::filter::{apply, FilterCriteria};

#[derive(Parser)]
#[command(name = "folio", about = "Portfolio content pipeline, in a terminal")]
struct Cli {
    /// Path to a config file (defaults to the platform config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch posts and print the chronological archive.
    Archive,
    /// Fetch projects and print them.
    Projects,
    /// Fetch solutions, optionally filtered.
    Solutions {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        difficulty: Option<String>,
        #[arg(long)]
        language: Option<String>,
    },
    /// Fetch the profile and skill collections.
    Profile,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    let client = ContentClient::new(&config.api);

    match cli.command {
        Command::Archive => print_archive(&client).await,
        Command::Projects => print_projects(&client).await,
        Command::Solutions {
            search,
            difficulty,
            language,
        } => print_solutions(&client, search, difficulty, language).await,
        Command::Profile => print_profile(&client).await,
    }

    Ok(())
}

/// Fetch failures degrade to an empty collection, matching how the
/// views render a placeholder section instead of an error page.
async fn fetch_or_empty<T: serde::de::DeserializeOwned>(
    client: &ContentClient,
    endpoint: &str,
) -> Vec<T> {
    match client.fetch_collection(endpoint).await {
        Ok(items) => items,
        Err(err) => {
            warn!(endpoint, error = %err, "fetch failed, showing empty section");
            Vec::new()
        }
    }
}

async fn print_archive(client: &ContentClient) {
    let posts: Vec<Post> = fetch_or_empty(client, endpoints::BLOGS).await;
    let index = ChronoIndex::from_posts(&posts);

    for year in &index.years {
        println!("{}", year.year);
        for month in &year.months {
            println!("  {}", month.name);
            for post in &month.posts {
                let date = post.created_at.as_deref().unwrap_or("");
                println!("    {:10}  {}", date, post.title);
            }
        }
    }
}

async fn print_projects(client: &ContentClient) {
    let projects: Vec<Project> = fetch_or_empty(client, endpoints::PROJECTS).await;
    for project in &projects {
        let tags = project.tag.join(", ");
        println!("{:32} [{}]", project.title, tags);
        if let Some(cover) = project.cover() {
            println!("  cover: {}", cover);
        }
        if let Some(url) = &project.project_url {
            println!("  live: {}", url);
        }
        if let Some(url) = &project.git_hub {
            println!("  code: {}", url);
        }
    }
}

async fn print_solutions(
    client: &ContentClient,
    search: Option<String>,
    difficulty: Option<String>,
    language: Option<String>,
) {
    let solutions: Vec<Solution> = fetch_or_empty(client, endpoints::SOLUTIONS).await;

    let mut criteria = FilterCriteria::new();
    if let Some(search) = search {
        criteria = criteria.with_search(search);
    }
    if let Some(difficulty) = difficulty {
        criteria = criteria.with_facet("difficulty", difficulty);
    }
    if let Some(language) = language {
        criteria = criteria.with_facet("language", language);
    }

    for solution in apply(&solutions, &criteria) {
        println!(
            "#{:4} {:40} {:8} {}",
            solution.problem_number, solution.title, solution.difficulty, solution.language
        );
    }
}

async fn print_profile(client: &ContentClient) {
    // The home view fires these concurrently at mount; completions are
    // independent and each section tolerates its own failure.
    let (profiles, skills, softskills, experiences, educations) = tokio::join!(
        client.fetch_collection::<Profile>(endpoints::USER),
        client.fetch_collection::<Skill>(endpoints::SKILLS),
        client.fetch_collection::<SoftSkill>(endpoints::SOFT_SKILLS),
        client.fetch_collection::<Experience>(endpoints::EXPERIENCES),
        client.fetch_collection::<Education>(endpoints::EDUCATIONS),
    );

    match profiles.ok().and_then(|mut p| {
        if p.is_empty() {
            None
        } else {
            Some(p.remove(0))
        }
    }) {
        Some(profile) => {
            println!("{} {}", profile.first_name, profile.last_name);
            if let Some(job) = &profile.job {
                println!("{}", job);
            }
            if let Some(location) = &profile.location {
                println!("{}", location);
            }
        }
        None => println!("(profile unavailable)"),
    }

    let skills = skills.unwrap_or_default();
    if !skills.is_empty() {
        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        println!("skills: {}", names.join(", "));
    }
    let softskills = softskills.unwrap_or_default();
    if !softskills.is_empty() {
        let names: Vec<&str> = softskills.iter().map(|s| s.name.as_str()).collect();
        println!("soft skills: {}", names.join(", "));
    }

    for experience in experiences.unwrap_or_default() {
        let company = experience.company.as_deref().unwrap_or("");
        println!("experience: {} {}", experience.title, company);
    }
    for education in educations.unwrap_or_default() {
        let school = education.school.as_deref().unwrap_or("");
        let degree = education.degree.as_deref().unwrap_or("");
        println!("education: {} {}", school, degree);
    }
}
