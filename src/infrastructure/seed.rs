use chrono::{Duration, Utc};

use crate::domain::articles::NewArticle;
use crate::domain::magazines::NewMagazine;

/// The fallback set: fixed demo articles served whenever no remote call is
/// made or the remote call fails.
pub fn demo_articles() -> Vec<NewArticle> {
    let now = Utc::now();

    vec![
        NewArticle {
            title: "Rust 1.80 Stabilizes LazyCell and LazyLock".to_string(),
            content: "The latest Rust release brings lazily initialized statics into the \
                      standard library, along with improvements to cargo and rustdoc."
                .to_string(),
            author: "Rust Release Team".to_string(),
            description: "What's new in the latest Rust release".to_string(),
            source: "Rust Blog".to_string(),
            url: "https://blog.rust-lang.org/".to_string(),
            image_url: Some("https://picsum.photos/400/200?random=10".to_string()),
            published_at: now - Duration::days(1),
            category: "Technology".to_string(),
            tags: vec![
                "rust".to_string(),
                "release".to_string(),
                "tooling".to_string(),
            ],
        },
        NewArticle {
            title: "Kotlin 2.0 Compiler Reaches Stable".to_string(),
            content: "The K2 compiler is now the default, cutting build times significantly \
                      for large multiplatform projects."
                .to_string(),
            author: "Kotlin Team".to_string(),
            description: "The K2 compiler becomes the default".to_string(),
            source: "Kotlin Blog".to_string(),
            url: "https://kotlinlang.org/docs/whatsnew20.html".to_string(),
            image_url: Some("https://picsum.photos/400/200?random=11".to_string()),
            published_at: now - Duration::hours(6),
            category: "Programming".to_string(),
            tags: vec![
                "kotlin".to_string(),
                "programming".to_string(),
                "update".to_string(),
            ],
        },
        NewArticle {
            title: "Document Databases Rethink Query Performance".to_string(),
            content: "A new generation of document stores is closing the gap with relational \
                      engines on analytical workloads."
                .to_string(),
            author: "Data Desk".to_string(),
            description: "Performance trends in document databases".to_string(),
            source: "Database Weekly".to_string(),
            url: "https://example.com/document-databases".to_string(),
            image_url: Some("https://picsum.photos/400/200?random=12".to_string()),
            published_at: now - Duration::hours(2),
            category: "Database".to_string(),
            tags: vec![
                "database".to_string(),
                "performance".to_string(),
            ],
        },
    ]
}

pub fn demo_magazines() -> Vec<NewMagazine> {
    let now = Utc::now();

    vec![
        NewMagazine {
            title: "Developer Weekly".to_string(),
            publisher: "Code Publications".to_string(),
            description: "Weekly magazine for software developers".to_string(),
            cover_image: Some("https://picsum.photos/300/400?random=1".to_string()),
            issue_number: 15,
            published_at: now - Duration::days(7),
            articles: Vec::new(),
            category: "Programming".to_string(),
        },
        NewMagazine {
            title: "Tech Insights".to_string(),
            publisher: "Tech Media Group".to_string(),
            description: "Monthly technology trends and analysis".to_string(),
            cover_image: Some("https://picsum.photos/300/400?random=2".to_string()),
            issue_number: 42,
            published_at: now - Duration::days(14),
            articles: Vec::new(),
            category: "Technology".to_string(),
        },
        NewMagazine {
            title: "AI Today".to_string(),
            publisher: "Future Publications".to_string(),
            description: "Cutting-edge artificial intelligence research".to_string(),
            cover_image: Some("https://picsum.photos/300/400?random=3".to_string()),
            issue_number: 8,
            published_at: now - Duration::days(21),
            articles: Vec::new(),
            category: "Artificial Intelligence".to_string(),
        },
    ]
}
