//! Scraped ESPN HTML roster page: the fallback candidate source. Catches
//! IR and other players the structured API omits; practice-squad status is
//! not visible here, so scraped candidates always report it false.

use anyhow::Result;
use scraper::{Html, Selector};

use crate::http_client::fetch_text;
use crate::reconcile::SourceCandidate;
use crate::teams::TeamInfo;

const ROSTER_PAGE_URL: &str = "https://www.espn.com/nfl/team/roster/_/name";

/// Roster abbreviations as the page prints them; a cell matching one of
/// these is taken as the player's position.
const POSITION_ABBRS: &[&str] = &[
    "QB", "RB", "FB", "WR", "TE", "OL", "OT", "OG", "C", "T", "G", "DL", "DE", "DT", "NT", "LB",
    "ILB", "OLB", "MLB", "DB", "CB", "S", "FS", "SS", "K", "P", "LS", "KR", "PR", "EDGE",
];

pub fn fetch_html_roster(team: &TeamInfo) -> Result<Vec<SourceCandidate>> {
    let url = format!("{ROSTER_PAGE_URL}/{}/{}", team.abbr, team.slug);
    let body = fetch_text(&url)?;
    parse_roster_html(&body)
}

/// Walks every table row with a player link, pulling the jersey number
/// from the first all-digit cell and the position from the first cell
/// matching a known abbreviation. Rows without a usable name are skipped.
pub fn parse_roster_html(html: &str) -> Result<Vec<SourceCandidate>> {
    let row_selector = Selector::parse("table tr")
        .map_err(|e| anyhow::anyhow!("failed to create row selector: {e}"))?;
    let cell_selector = Selector::parse("td")
        .map_err(|e| anyhow::anyhow!("failed to create cell selector: {e}"))?;
    let name_selector = Selector::parse(r#"a[href*="/nfl/player/"]"#)
        .map_err(|e| anyhow::anyhow!("failed to create name selector: {e}"))?;

    let document = Html::parse_document(html);
    let mut candidates = Vec::new();

    for row in document.select(&row_selector) {
        let cells: Vec<String> = row
            .select(&cell_selector)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();
        if cells.len() < 2 {
            continue;
        }

        let Some(name_link) = row.select(&name_selector).next() else {
            continue;
        };
        let name = name_link.text().collect::<String>().trim().to_string();
        if name.is_empty() {
            continue;
        }
        let espn_id = name_link
            .value()
            .attr("href")
            .and_then(espn_id_from_href);

        let mut number = None;
        let mut position = String::new();
        for text in &cells {
            if number.is_none() && !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
                number = text.parse::<u32>().ok();
            } else if position.is_empty() && POSITION_ABBRS.contains(&text.as_str()) {
                position = text.clone();
            }
        }

        candidates.push(SourceCandidate {
            name,
            position,
            number,
            practice_squad: false,
            espn_id,
        });
    }
    Ok(candidates)
}

/// Pulls the athlete id out of a player href of the form
/// `/nfl/player/_/id/4047650/khalil-shakir`.
fn espn_id_from_href(href: &str) -> Option<String> {
    let rest = href.split("/id/").nth(1)?;
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() || !rest[digits.len()..].starts_with('/') {
        return None;
    }
    Some(digits)
}
