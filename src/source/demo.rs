//! Built-in demo source for running without an API key.
//!
//! Serves a fixed set of articles with the same pagination and filtering
//! contract as the live client, so the whole UI (categories, search, load
//! more) works offline. Selected by configuration when `api_key` is unset;
//! it is an alternate [`NewsSource`], not a fallback wired into the
//! controller.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use super::types::{Article, Category, NewsPage};
use super::{NewsSource, SourceError};

struct DemoSeed {
    title: &'static str,
    description: &'static str,
    url: &'static str,
    image_url: Option<&'static str>,
    published: &'static str,
    source_name: &'static str,
    author: Option<&'static str>,
    categories: &'static [Category],
}

/// Every demo article matches General; the extra tags drive the category
/// filter the same way the live endpoint scopes headlines.
const DEMO_SEEDS: &[DemoSeed] = &[
    DemoSeed {
        title: "Revolutionary Solar Technology Breakthrough in Kenya",
        description: "Scientists at Nairobi University have developed a new solar panel technology that increases efficiency by 40%, marking a significant advancement for renewable energy in Africa.",
        url: "https://example.com/solar-kenya",
        image_url: Some("https://images.example.com/solar.jpg"),
        published: "2024-12-20T10:30:00Z",
        source_name: "Tech Africa Today",
        author: Some("Dr. Amina Hassan"),
        categories: &[Category::Technology, Category::Science],
    },
    DemoSeed {
        title: "Ghana's Digital Economy Shows 25% Growth in 2024",
        description: "The latest economic data reveals that Ghana's digital sector has experienced unprecedented growth, driven by fintech innovations and increased internet penetration.",
        url: "https://example.com/ghana-digital",
        image_url: Some("https://images.example.com/ghana.jpg"),
        published: "2024-12-20T08:15:00Z",
        source_name: "African Business Weekly",
        author: Some("Kwame Asante"),
        categories: &[Category::Business, Category::Technology],
    },
    DemoSeed {
        title: "New Medical Research Center Opens in Lagos",
        description: "A state-of-the-art medical research facility focusing on tropical diseases and genomics has officially opened in Lagos, Nigeria, promising to advance healthcare across West Africa.",
        url: "https://example.com/lagos-medical",
        image_url: Some("https://images.example.com/lagos.jpg"),
        published: "2024-12-20T06:45:00Z",
        source_name: "Health Africa Network",
        author: Some("Dr. Folake Adebayo"),
        categories: &[Category::Health, Category::Science],
    },
    DemoSeed {
        title: "South African Startup Wins Global AI Competition",
        description: "A Cape Town-based artificial intelligence startup has won the prestigious Global AI Innovation Award for their work in agricultural technology and food security.",
        url: "https://example.com/sa-ai-startup",
        image_url: Some("https://images.example.com/ai.jpg"),
        published: "2024-12-19T16:20:00Z",
        source_name: "Innovation Africa",
        author: Some("Thabo Mthembu"),
        categories: &[Category::Technology, Category::Business],
    },
    DemoSeed {
        title: "Morocco Launches Ambitious Green Hydrogen Project",
        description: "Morocco has announced a $10 billion green hydrogen initiative that aims to make the country a leading exporter of clean energy to Europe by 2030.",
        url: "https://example.com/morocco-hydrogen",
        image_url: Some("https://images.example.com/hydrogen.jpg"),
        published: "2024-12-19T14:30:00Z",
        source_name: "Energy Africa",
        author: Some("Laila Benali"),
        categories: &[Category::Science, Category::Business],
    },
    DemoSeed {
        title: "Ethiopian Coffee Farmers Embrace Blockchain Technology",
        description: "Coffee farmers in Ethiopia are using blockchain technology to ensure fair trade practices and provide transparency in the supply chain from farm to cup.",
        url: "https://example.com/ethiopia-coffee-blockchain",
        image_url: Some("https://images.example.com/coffee.jpg"),
        published: "2024-12-19T12:00:00Z",
        source_name: "Agricultural Tech Today",
        author: Some("Meron Tadesse"),
        categories: &[Category::Technology],
    },
    DemoSeed {
        title: "Nigerian Afrobeats Star Announces World Tour",
        description: "The Grammy-winning artist will visit 30 cities across five continents, with a documentary crew recording the tour for a streaming release next year.",
        url: "https://example.com/afrobeats-tour",
        image_url: Some("https://images.example.com/tour.jpg"),
        published: "2024-12-19T09:40:00Z",
        source_name: "Culture Wire",
        author: None,
        categories: &[Category::Entertainment],
    },
    DemoSeed {
        title: "Senegal Qualifies for Continental Championship Final",
        description: "A stoppage-time winner sent the national team to its third final in a decade, sparking celebrations across Dakar.",
        url: "https://example.com/senegal-final",
        image_url: None,
        published: "2024-12-18T22:05:00Z",
        source_name: "Sports Desk Africa",
        author: Some("Issa Ndiaye"),
        categories: &[Category::Sports],
    },
    DemoSeed {
        title: "Cairo Film Festival Breaks Attendance Records",
        description: "Organizers report the highest turnout in the festival's history, with premieres from twelve African countries and a restored classics program.",
        url: "https://example.com/cairo-film",
        image_url: Some("https://images.example.com/film.jpg"),
        published: "2024-12-18T18:30:00Z",
        source_name: "Culture Wire",
        author: Some("Omar Farouk"),
        categories: &[Category::Entertainment],
    },
    DemoSeed {
        title: "Rwanda Expands Drone Network for Medical Deliveries",
        description: "Blood and vaccine deliveries by drone now reach every district hospital in the country, cutting average delivery times from hours to minutes.",
        url: "https://example.com/rwanda-drones",
        image_url: Some("https://images.example.com/drones.jpg"),
        published: "2024-12-18T11:10:00Z",
        source_name: "Health Africa Network",
        author: Some("Claudine Uwase"),
        categories: &[Category::Health, Category::Technology],
    },
    DemoSeed {
        title: "Marathon Record Falls at Cape Town International",
        description: "Perfect conditions and a fast field produced a course record and three national bests at the annual race along the Atlantic seaboard.",
        url: "https://example.com/cape-town-marathon",
        image_url: None,
        published: "2024-12-17T15:55:00Z",
        source_name: "Sports Desk Africa",
        author: None,
        categories: &[Category::Sports],
    },
    DemoSeed {
        title: "Central Banks Weigh Digital Currency Pilots",
        description: "Monetary authorities in four countries announced coordinated pilots for retail digital currencies, citing falling cash usage and remittance costs.",
        url: "https://example.com/cbdc-pilots",
        image_url: Some("https://images.example.com/cbdc.jpg"),
        published: "2024-12-17T09:25:00Z",
        source_name: "African Business Weekly",
        author: Some("Kwame Asante"),
        categories: &[Category::Business],
    },
    DemoSeed {
        title: "Telescope Array in Namibia Detects Rare Gamma-Ray Burst",
        description: "Astronomers recorded one of the brightest gamma-ray bursts ever observed, offering a rare window into the collapse of massive stars.",
        url: "https://example.com/namibia-grb",
        image_url: Some("https://images.example.com/telescope.jpg"),
        published: "2024-12-16T21:40:00Z",
        source_name: "Science Horizon",
        author: Some("Dr. Petra Amukwaya"),
        categories: &[Category::Science],
    },
    DemoSeed {
        title: "Mobile Clinics Bring Screening to Remote Villages",
        description: "A fleet of solar-powered mobile clinics completed its first year of operation, screening over 200,000 patients for hypertension and diabetes.",
        url: "https://example.com/mobile-clinics",
        image_url: None,
        published: "2024-12-16T08:00:00Z",
        source_name: "Health Africa Network",
        author: None,
        categories: &[Category::Health],
    },
    DemoSeed {
        title: "Streaming Platforms Bid for African Football Rights",
        description: "Competition for continental football broadcast rights intensified as two global streaming services entered the latest auction round.",
        url: "https://example.com/football-rights",
        image_url: Some("https://images.example.com/football.jpg"),
        published: "2024-12-15T19:15:00Z",
        source_name: "Sports Desk Africa",
        author: Some("Issa Ndiaye"),
        categories: &[Category::Sports, Category::Business],
    },
];

pub struct DemoSource {
    articles: Vec<(Article, &'static [Category])>,
}

impl DemoSource {
    pub fn new() -> Self {
        let articles = DEMO_SEEDS
            .iter()
            .map(|seed| {
                let published = seed
                    .published
                    .parse::<DateTime<Utc>>()
                    .ok();
                (
                    Article {
                        title: Arc::from(seed.title),
                        description: Some(Arc::from(seed.description)),
                        url: Arc::from(seed.url),
                        image_url: seed.image_url.map(Arc::from),
                        published,
                        source_name: Arc::from(seed.source_name),
                        author: seed.author.map(Arc::from),
                    },
                    seed.categories,
                )
            })
            .collect();
        Self { articles }
    }

    fn paginate(matching: Vec<Article>, page: u32, page_size: u32) -> NewsPage {
        let total_results = matching.len() as u32;
        let start = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);
        let articles = matching
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .collect();
        NewsPage {
            articles,
            total_results,
        }
    }
}

impl Default for DemoSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsSource for DemoSource {
    async fn fetch_headlines(
        &self,
        category: Category,
        page: u32,
        page_size: u32,
    ) -> Result<NewsPage, SourceError> {
        let matching: Vec<Article> = self
            .articles
            .iter()
            .filter(|(_, cats)| category == Category::General || cats.contains(&category))
            .map(|(a, _)| a.clone())
            .collect();
        Ok(Self::paginate(matching, page, page_size))
    }

    async fn search_articles(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> Result<NewsPage, SourceError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(SourceError::InvalidQuery);
        }

        let matching: Vec<Article> = self
            .articles
            .iter()
            .filter(|(a, _)| {
                a.title.to_lowercase().contains(&needle)
                    || a.description
                        .as_deref()
                        .map(|d| d.to_lowercase().contains(&needle))
                        .unwrap_or(false)
            })
            .map(|(a, _)| a.clone())
            .collect();
        Ok(Self::paginate(matching, page, page_size))
    }
}
