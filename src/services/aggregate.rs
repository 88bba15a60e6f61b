use crate::error::StatsError;
use crate::models::responses::{BookCountReport, ReadershipRecord};
use crate::models::upstream::Book;
use crate::services::catalog::CatalogClient;
use crate::services::geo::GeoClient;
use crate::services::population::PopulationClient;
use std::collections::HashSet;
use tracing::info;

// The readership flow never reports a fraction, so its aggregation run uses a
// placeholder total instead of an extra catalog round trip.
const PLACEHOLDER_TOTAL: u64 = 1;

/// Number of distinct author names across all books. Identity is exact string
/// equality of the name; two authors sharing a name count once.
pub fn count_unique_authors(books: &[Book]) -> usize {
    let mut names = HashSet::new();
    for book in books {
        for author in &book.authors {
            names.insert(author.name.as_str());
        }
    }
    names.len()
}

/// Share of the global catalog held by `books`. A zero total yields 0.0
/// rather than NaN or infinity.
pub fn fraction_of_total(books: u64, global_total: u64) -> f64 {
    if global_total == 0 {
        return 0.0;
    }
    books as f64 / global_total as f64
}

/// Walk every catalog page for one language, accumulating books until the
/// `next` cursor runs out. The final page's reported count is authoritative.
/// Any page failure aborts the run; callers never see a partial report.
pub async fn collect_language(
    catalog: &CatalogClient,
    language: &str,
    global_total: u64,
) -> Result<BookCountReport, StatsError> {
    let mut page = 1u32;
    let mut all_books: Vec<Book> = Vec::new();
    let count;

    loop {
        let current = catalog.fetch_page(language, page).await?;
        let has_next = current.has_next();
        let reported_count = current.count;
        all_books.extend(current.results);

        if !has_next {
            count = reported_count;
            break;
        }
        page += 1;
    }

    info!(
        "collected {} pages for language {} ({} books)",
        page,
        language,
        all_books.len()
    );

    Ok(BookCountReport {
        language: language.to_string(),
        books: count,
        authors: count_unique_authors(&all_books),
        fraction: fraction_of_total(count, global_total),
    })
}

/// Book-count flow: one report per requested language, in input order. The
/// global total is fetched once per request. The first failing language
/// aborts the request and discards earlier reports.
pub async fn book_counts(
    catalog: &CatalogClient,
    languages: &str,
) -> Result<Vec<BookCountReport>, StatsError> {
    let global_total = catalog.fetch_global_total().await?;

    let mut reports = Vec::new();
    for language in languages.split(',') {
        reports.push(collect_language(catalog, language, global_total).await?);
    }

    Ok(reports)
}

/// Readership flow: resolve the countries for a language, aggregate that
/// language's books once, then attach each country's population. Records
/// follow the resolver's country order; the first population failure aborts
/// the request and discards earlier records.
pub async fn readership(
    catalog: &CatalogClient,
    geo: &GeoClient,
    population: &PopulationClient,
    language: &str,
    limit: Option<usize>,
) -> Result<Vec<ReadershipRecord>, StatsError> {
    let countries = geo.countries_for_language(language, limit).await?;
    let report = collect_language(catalog, language, PLACEHOLDER_TOTAL).await?;

    let mut records = Vec::with_capacity(countries.len());
    for country in countries {
        let readership = population.population_of(&country.official_name).await?;
        records.push(ReadershipRecord {
            country: country.official_name,
            isocode: country.iso_two,
            books: report.books,
            authors: report.authors,
            readership,
        });
    }

    Ok(records)
}
