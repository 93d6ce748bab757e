//! Static genre catalog and the navigation links derived from it.

use regex::Regex;
use std::sync::LazyLock;

static SLUG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

/// A genre the dashboard offers as a navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenreEntry {
    /// URL-safe identifier, `[a-z0-9-]+`
    pub slug: &'static str,
    /// Display text; also the genre name used by the catalog API
    pub label: &'static str,
}

/// Genres shown in the header menu, in display order.
pub const GENRES: &[GenreEntry] = &[
    GenreEntry { slug: "drama", label: "Drama" },
    GenreEntry { slug: "comedy", label: "Comedy" },
    GenreEntry { slug: "action", label: "Action" },
    GenreEntry { slug: "thriller", label: "Thriller" },
    GenreEntry { slug: "crime", label: "Crime" },
    GenreEntry { slug: "science-fiction", label: "Science-Fiction" },
    GenreEntry { slug: "fantasy", label: "Fantasy" },
    GenreEntry { slug: "horror", label: "Horror" },
    GenreEntry { slug: "romance", label: "Romance" },
    GenreEntry { slug: "mystery", label: "Mystery" },
    GenreEntry { slug: "adventure", label: "Adventure" },
    GenreEntry { slug: "family", label: "Family" },
    GenreEntry { slug: "anime", label: "Anime" },
];

/// A rendered menu entry pointing at a genre listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenreLink {
    pub slug: &'static str,
    pub label: &'static str,
    pub href: String,
}

pub fn is_valid_slug(slug: &str) -> bool {
    SLUG.is_match(slug)
}

pub fn genre_href(slug: &str) -> String {
    format!("/genre/{}", slug)
}

/// Map a catalog one-to-one onto links, preserving catalog order.
pub fn genre_links(catalog: &[GenreEntry]) -> Vec<GenreLink> {
    catalog
        .iter()
        .map(|genre| GenreLink {
            slug: genre.slug,
            label: genre.label,
            href: genre_href(genre.slug),
        })
        .collect()
}

/// Look up a genre of the default catalog by slug.
pub fn find_genre(slug: &str) -> Option<&'static GenreEntry> {
    GENRES.iter().find(|genre| genre.slug == slug)
}
