//! Extraction of sightings from the alert summary page.
//!
//! Each `.Observation` block becomes at most one `Sighting`. Every field is
//! looked up independently; a lookup that finds nothing leaves the field
//! `None` and never affects the other fields or the other blocks.

use crate::constants;
use crate::document::{CompiledQuery, Document, Node, Query};
use crate::error::Result;
use crate::types::Sighting;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, instrument, warn};

static COORDINATES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"query=([0-9.-]+),([0-9.-]+)").expect("coordinate pattern is valid")
});

static QUERIES: Lazy<ObservationQueries> =
    Lazy::new(|| ObservationQueries::build().expect("observation selectors are valid"));

/// Compiled lookups for every field of an observation block.
pub struct ObservationQueries {
    observation: CompiledQuery,
    species: CompiledQuery,
    scientific_name: CompiledQuery,
    count: CompiledQuery,
    status: CompiledQuery,
    checklist_link: CompiledQuery,
    map_link: CompiledQuery,
    grid_cell: CompiledQuery,
    hidden_label: CompiledQuery,
    visible_span: CompiledQuery,
}

impl ObservationQueries {
    pub fn build() -> Result<Self> {
        Ok(Self {
            observation: Query::class(constants::OBSERVATION_CLASS).compile()?,
            species: Query::class(constants::SPECIES_CLASS).compile()?,
            scientific_name: Query::class(constants::SCIENTIFIC_NAME_CLASS).compile()?,
            count: Query::class(constants::COUNT_CLASS).compile()?,
            status: Query::class(constants::TAGS_CLASS)
                .descendant(Query::tag("strong"))
                .compile()?,
            checklist_link: Query::tag("a")
                .and(Query::attr_contains("href", constants::CHECKLIST_HREF_MARKER))
                .compile()?,
            map_link: Query::tag("a")
                .and(Query::attr_contains("href", constants::MAP_HREF_MARKER))
                .compile()?,
            grid_cell: Query::class(constants::GRID_CELL_CLASS).compile()?,
            hidden_label: Query::class(constants::HIDDEN_LABEL_CLASS).compile()?,
            visible_span: Query::tag("span")
                .and(Query::class(constants::HIDDEN_LABEL_CLASS).not())
                .compile()?,
        })
    }
}

pub struct AlertPageParser {
    origin: String,
}

impl Default for AlertPageParser {
    fn default() -> Self {
        Self::new(constants::SITE_ORIGIN)
    }
}

impl AlertPageParser {
    /// `origin` is prepended to checklist links that start with `/`.
    pub fn new(origin: &str) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    /// Extracts every sighting with a species, in document order.
    /// A page without observation blocks yields an empty list.
    #[instrument(skip_all, fields(html_len = html.len()))]
    pub fn parse(&self, html: &str) -> Vec<Sighting> {
        let document = Document::parse(html);
        let q = &*QUERIES;

        let blocks = document.select_all(&q.observation);
        info!("Found {} observations", blocks.len());
        if blocks.is_empty() {
            warn!("No observation blocks found - the page structure may have changed");
        }

        let mut sightings = Vec::with_capacity(blocks.len());
        for (index, block) in blocks.iter().enumerate() {
            let sighting = self.extract(block, q);
            if has_species(&sighting) {
                sightings.push(sighting);
            } else {
                debug!(index, "Dropping observation block without a species");
            }
        }

        info!("Kept {} sightings", sightings.len());
        sightings
    }

    fn extract(&self, block: &Node<'_>, q: &ObservationQueries) -> Sighting {
        let checklist = block.select_first(&q.checklist_link);
        let map_link = block.select_first(&q.map_link);

        let (latitude, longitude) = map_link
            .and_then(|link| parse_coordinates(link.attr("href").unwrap_or("")))
            .unzip();

        Sighting {
            species: stripped_text(block, &q.species),
            scientific_name: stripped_text(block, &q.scientific_name),
            count: stripped_text(block, &q.count).map(|raw| clean_count(&raw)),
            status: stripped_text(block, &q.status),
            date: checklist.map(|link| link.stripped_text()),
            checklist_url: checklist
                .map(|link| resolve_url(link.attr("href").unwrap_or(""), &self.origin)),
            location: map_link.map(|link| link.stripped_text()),
            latitude,
            longitude,
            observer: observer(block, q),
        }
    }
}

/// Parses with the default site origin.
pub fn parse_sightings(html: &str) -> Vec<Sighting> {
    AlertPageParser::default().parse(html)
}

fn has_species(sighting: &Sighting) -> bool {
    sighting
        .species
        .as_deref()
        .is_some_and(|species| !species.is_empty())
}

fn stripped_text(block: &Node<'_>, query: &CompiledQuery) -> Option<String> {
    block.select_first(query).map(|node| node.stripped_text())
}

/// Removes the "Number observed:" label from the count text.
pub fn clean_count(raw: &str) -> String {
    raw.replace(constants::COUNT_LABEL, "").trim().to_string()
}

/// Makes site-relative links absolute; anything else passes through unchanged.
pub fn resolve_url(href: &str, origin: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", origin, href)
    } else {
        href.to_string()
    }
}

/// Reads `query=<lat>,<lon>` from a map link. Both values parse or neither is returned.
pub fn parse_coordinates(href: &str) -> Option<(f64, f64)> {
    let caps = COORDINATES.captures(href)?;
    let latitude = caps[1].parse::<f64>().ok()?;
    let longitude = caps[2].parse::<f64>().ok()?;
    Some((latitude, longitude))
}

/// The first grid cell whose hidden label mentions the observer decides the
/// result, even when that cell has no visible span.
fn observer(block: &Node<'_>, q: &ObservationQueries) -> Option<String> {
    let cell = block.select_all(&q.grid_cell).into_iter().find(|cell| {
        cell.select_first(&q.hidden_label)
            .is_some_and(|label| label.text().contains(constants::OBSERVER_LABEL))
    })?;

    cell.select_first(&q.visible_span)
        .map(|span| span.stripped_text())
}
