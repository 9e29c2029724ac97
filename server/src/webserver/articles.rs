use chrono::{DateTime, Utc};
use rocket::State;
use rocket_dyn_templates::Template;
use serde::{Deserialize, Serialize};

use dataset::{
    pagination::{page_slice, Pager},
    Dataset, LoadState,
};

use crate::{
    configuration::{Configuration, PageSize},
    webserver::{FullPathAndQuery, RequestData},
};

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

#[derive(Debug, Serialize, Deserialize)]
struct ArticleCard {
    id: i64,
    author_name: String,
    title: String,
    body: String,
    image_url: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PageLink {
    number: usize,
    active: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct PaginationBar {
    pages: Vec<PageLink>,
    has_previous: bool,
    has_next: bool,
    previous_page: usize,
    next_page: usize,
}

#[derive(Debug, Serialize, Deserialize)]
struct ArticlesContext {
    request: RequestData,
    articles: Vec<ArticleCard>,
    pagination: PaginationBar,
}

#[get("/?<page>")]
pub async fn home(
    page: Option<usize>,
    dataset: &State<LoadState>,
    path: FullPathAndQuery,
) -> Template {
    let context = articles_context(
        RequestData::new(path),
        dataset.dataset(),
        PageSize::get().unwrap(),
        page.unwrap_or(1),
    );

    Template::render("articles", context)
}

/// Pure view computation: joins each visible article to its author and lays
/// out the pagination bar. A missing or failed dataset renders the empty
/// state.
fn articles_context(
    request: RequestData,
    dataset: Option<&Dataset>,
    page_size: usize,
    requested_page: usize,
) -> ArticlesContext {
    let empty = Dataset::default();
    let dataset = dataset.unwrap_or(&empty);

    let pager = Pager::new(dataset.articles.len(), page_size).jump_to(requested_page);
    let visible = page_slice(&dataset.articles, page_size, pager.current_page);

    let articles = visible
        .iter()
        .map(|article| ArticleCard {
            id: article.id,
            author_name: dataset
                .author_by_id(article.author_id)
                .map(|author| author.name.clone())
                .unwrap_or_else(|| String::from(UNKNOWN_AUTHOR)),
            title: article.title.clone(),
            body: article.body.clone(),
            image_url: article.image_url.clone(),
            created_at: article.created_at,
        })
        .collect();

    let pages = (1..=pager.total_pages)
        .map(|number| PageLink {
            number,
            active: number == pager.current_page,
        })
        .collect();

    ArticlesContext {
        request,
        articles,
        pagination: PaginationBar {
            pages,
            has_previous: pager.has_previous(),
            has_next: pager.has_next(),
            previous_page: pager.previous().current_page,
            next_page: pager.next().current_page,
        },
    }
}
