use std::collections::HashMap;

/// Long-form depth-chart labels as ESPN renders them, mapped to roster
/// abbreviations. Unlisted labels pass through
/// [`PositionTable::canonicalize`] unchanged.
const LONG_LABELS: &[(&str, &str)] = &[
    ("QUARTERBACK", "QB"),
    ("RUNNING BACK", "RB"),
    ("FULLBACK", "FB"),
    ("WIDE RECEIVER", "WR"),
    ("TIGHT END", "TE"),
    ("LEFT TACKLE", "LT"),
    ("LEFT GUARD", "LG"),
    ("CENTER", "C"),
    ("RIGHT GUARD", "RG"),
    ("RIGHT TACKLE", "RT"),
    ("DEFENSIVE END", "DE"),
    ("DEFENSIVE TACKLE", "DT"),
    ("LINEBACKER", "LB"),
    ("CORNERBACK", "CB"),
    ("SAFETY", "S"),
    ("KICKER", "K"),
    ("PUNTER", "P"),
    ("LONG SNAPPER", "LS"),
];

/// Recognizability points per position group. This table is part of the
/// scoring contract consumed downstream, so the groupings and values must
/// stay exactly as they are.
const TIER_POINTS: &[(&[&str], i32)] = &[
    (&["QB"], 50),
    (&["RB", "WR", "TE"], 40),
    (&["CB", "S", "FS", "SS", "DB"], 35),
    (&["DE", "DT", "LB", "OLB", "ILB", "MLB", "EDGE", "NT"], 30),
    (&["K", "P"], 25),
    (&["OT", "OG", "C", "G", "T", "LT", "RT", "LG", "RG"], 20),
];

pub const DEFAULT_TIER_POINTS: i32 = 15;

/// Immutable position lookup tables, built once at startup and handed to
/// the scraping and scoring code. Tests can construct their own instance.
#[derive(Debug, Clone)]
pub struct PositionTable {
    long_labels: Vec<(&'static str, &'static str)>,
    points: HashMap<&'static str, i32>,
}

impl Default for PositionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionTable {
    pub fn new() -> Self {
        let mut points = HashMap::new();
        for (codes, value) in TIER_POINTS {
            for code in *codes {
                points.insert(*code, *value);
            }
        }
        Self {
            long_labels: LONG_LABELS.to_vec(),
            points,
        }
    }

    /// Maps a long-form label ("QUARTERBACK") to its abbreviation ("QB").
    /// Headers sometimes carry trailing text after the label, so matching
    /// is by containment, in table order. Input that matches no known long
    /// label comes back exactly as given, whitespace included.
    pub fn canonicalize<'a>(&self, raw: &'a str) -> &'a str {
        let trimmed = raw.trim();
        for &(long, short) in &self.long_labels {
            if trimmed.contains(long) {
                return short;
            }
        }
        raw
    }

    /// Tier points for a canonical abbreviation; unknown or empty
    /// positions score the default tier.
    pub fn tier_points(&self, code: &str) -> i32 {
        self.points
            .get(code)
            .copied()
            .unwrap_or(DEFAULT_TIER_POINTS)
    }

    /// True if the text contains one of the long-form depth-chart headers.
    pub fn is_long_label(&self, text: &str) -> bool {
        self.long_labels.iter().any(|(long, _)| text.contains(long))
    }
}
