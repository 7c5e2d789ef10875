use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on
    pub port: u16,
    /// GraphQL endpoint of the publishing platform
    pub publishing_api_url: String,
    /// Publication owner whose posts are listed
    pub publication_username: String,
    /// Base URL that article slugs are appended to
    pub article_base_url: String,
    /// Number of posts shown by the home page blog list (negative shows all)
    pub home_blog_count: i64,
    pub fetch_timeout: Duration,
    /// JSON file replacing the built-in project table
    pub projects_file: Option<PathBuf>,
    pub site: SiteInfo,
}

/// Owner details shown by the navbar and footer
#[derive(Debug, Clone)]
pub struct SiteInfo {
    pub owner: String,
    pub github_url: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            owner: "Kalash Sharma".to_string(),
            github_url: "https://github.com/kalashsharma99".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = SiteInfo::default();

        Self {
            port: parse_or("PORT", 8080),
            publishing_api_url: env::var("PUBLISHING_API_URL")
                .unwrap_or_else(|_| "https://api.hashnode.com/".to_string()),
            publication_username: env::var("PUBLICATION_USERNAME")
                .unwrap_or_else(|_| "kalashsharma99".to_string()),
            article_base_url: env::var("ARTICLE_BASE_URL")
                .unwrap_or_else(|_| "https://kalashsharma.hashnode.dev".to_string()),
            home_blog_count: parse_or("HOME_BLOG_COUNT", 3),
            fetch_timeout: Duration::from_secs(parse_or("FETCH_TIMEOUT_SECS", 10)),
            projects_file: env::var("PROJECTS_FILE").ok().map(PathBuf::from),
            site: SiteInfo {
                owner: env::var("SITE_OWNER").unwrap_or(defaults.owner),
                github_url: env::var("SITE_GITHUB_URL").unwrap_or(defaults.github_url),
            },
        }
    }
}

/// Read a numeric variable, falling back to `default` when unset or invalid
fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}
