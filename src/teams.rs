/// Static metadata for one NFL franchise.
///
/// `id` is ESPN's numeric team id; `abbr` and `slug` are the path segments
/// used by the HTML roster and depth-chart pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamInfo {
    pub id: u32,
    pub abbr: &'static str,
    pub slug: &'static str,
    pub name: &'static str,
    pub conference: &'static str,
    pub division: &'static str,
}

pub const NFL_TEAMS: &[TeamInfo] = &[
    // AFC East
    TeamInfo {
        id: 2,
        abbr: "buf",
        slug: "buffalo-bills",
        name: "Buffalo Bills",
        conference: "AFC",
        division: "AFC East",
    },
    TeamInfo {
        id: 15,
        abbr: "mia",
        slug: "miami-dolphins",
        name: "Miami Dolphins",
        conference: "AFC",
        division: "AFC East",
    },
    TeamInfo {
        id: 17,
        abbr: "ne",
        slug: "new-england-patriots",
        name: "New England Patriots",
        conference: "AFC",
        division: "AFC East",
    },
    TeamInfo {
        id: 20,
        abbr: "nyj",
        slug: "new-york-jets",
        name: "New York Jets",
        conference: "AFC",
        division: "AFC East",
    },
    // AFC North
    TeamInfo {
        id: 33,
        abbr: "bal",
        slug: "baltimore-ravens",
        name: "Baltimore Ravens",
        conference: "AFC",
        division: "AFC North",
    },
    TeamInfo {
        id: 4,
        abbr: "cin",
        slug: "cincinnati-bengals",
        name: "Cincinnati Bengals",
        conference: "AFC",
        division: "AFC North",
    },
    TeamInfo {
        id: 5,
        abbr: "cle",
        slug: "cleveland-browns",
        name: "Cleveland Browns",
        conference: "AFC",
        division: "AFC North",
    },
    TeamInfo {
        id: 23,
        abbr: "pit",
        slug: "pittsburgh-steelers",
        name: "Pittsburgh Steelers",
        conference: "AFC",
        division: "AFC North",
    },
    // AFC South
    TeamInfo {
        id: 34,
        abbr: "hou",
        slug: "houston-texans",
        name: "Houston Texans",
        conference: "AFC",
        division: "AFC South",
    },
    TeamInfo {
        id: 11,
        abbr: "ind",
        slug: "indianapolis-colts",
        name: "Indianapolis Colts",
        conference: "AFC",
        division: "AFC South",
    },
    TeamInfo {
        id: 30,
        abbr: "jax",
        slug: "jacksonville-jaguars",
        name: "Jacksonville Jaguars",
        conference: "AFC",
        division: "AFC South",
    },
    TeamInfo {
        id: 10,
        abbr: "ten",
        slug: "tennessee-titans",
        name: "Tennessee Titans",
        conference: "AFC",
        division: "AFC South",
    },
    // AFC West
    TeamInfo {
        id: 7,
        abbr: "den",
        slug: "denver-broncos",
        name: "Denver Broncos",
        conference: "AFC",
        division: "AFC West",
    },
    TeamInfo {
        id: 12,
        abbr: "kc",
        slug: "kansas-city-chiefs",
        name: "Kansas City Chiefs",
        conference: "AFC",
        division: "AFC West",
    },
    TeamInfo {
        id: 13,
        abbr: "lv",
        slug: "las-vegas-raiders",
        name: "Las Vegas Raiders",
        conference: "AFC",
        division: "AFC West",
    },
    TeamInfo {
        id: 24,
        abbr: "lac",
        slug: "los-angeles-chargers",
        name: "Los Angeles Chargers",
        conference: "AFC",
        division: "AFC West",
    },
    // NFC East
    TeamInfo {
        id: 6,
        abbr: "dal",
        slug: "dallas-cowboys",
        name: "Dallas Cowboys",
        conference: "NFC",
        division: "NFC East",
    },
    TeamInfo {
        id: 19,
        abbr: "nyg",
        slug: "new-york-giants",
        name: "New York Giants",
        conference: "NFC",
        division: "NFC East",
    },
    TeamInfo {
        id: 21,
        abbr: "phi",
        slug: "philadelphia-eagles",
        name: "Philadelphia Eagles",
        conference: "NFC",
        division: "NFC East",
    },
    TeamInfo {
        id: 28,
        abbr: "wsh",
        slug: "washington-commanders",
        name: "Washington Commanders",
        conference: "NFC",
        division: "NFC East",
    },
    // NFC North
    TeamInfo {
        id: 3,
        abbr: "chi",
        slug: "chicago-bears",
        name: "Chicago Bears",
        conference: "NFC",
        division: "NFC North",
    },
    TeamInfo {
        id: 8,
        abbr: "det",
        slug: "detroit-lions",
        name: "Detroit Lions",
        conference: "NFC",
        division: "NFC North",
    },
    TeamInfo {
        id: 9,
        abbr: "gb",
        slug: "green-bay-packers",
        name: "Green Bay Packers",
        conference: "NFC",
        division: "NFC North",
    },
    TeamInfo {
        id: 16,
        abbr: "min",
        slug: "minnesota-vikings",
        name: "Minnesota Vikings",
        conference: "NFC",
        division: "NFC North",
    },
    // NFC South
    TeamInfo {
        id: 1,
        abbr: "atl",
        slug: "atlanta-falcons",
        name: "Atlanta Falcons",
        conference: "NFC",
        division: "NFC South",
    },
    TeamInfo {
        id: 29,
        abbr: "car",
        slug: "carolina-panthers",
        name: "Carolina Panthers",
        conference: "NFC",
        division: "NFC South",
    },
    TeamInfo {
        id: 18,
        abbr: "no",
        slug: "new-orleans-saints",
        name: "New Orleans Saints",
        conference: "NFC",
        division: "NFC South",
    },
    TeamInfo {
        id: 27,
        abbr: "tb",
        slug: "tampa-bay-buccaneers",
        name: "Tampa Bay Buccaneers",
        conference: "NFC",
        division: "NFC South",
    },
    // NFC West
    TeamInfo {
        id: 22,
        abbr: "ari",
        slug: "arizona-cardinals",
        name: "Arizona Cardinals",
        conference: "NFC",
        division: "NFC West",
    },
    TeamInfo {
        id: 14,
        abbr: "lar",
        slug: "los-angeles-rams",
        name: "Los Angeles Rams",
        conference: "NFC",
        division: "NFC West",
    },
    TeamInfo {
        id: 26,
        abbr: "sf",
        slug: "san-francisco-49ers",
        name: "San Francisco 49ers",
        conference: "NFC",
        division: "NFC West",
    },
    TeamInfo {
        id: 25,
        abbr: "sea",
        slug: "seattle-seahawks",
        name: "Seattle Seahawks",
        conference: "NFC",
        division: "NFC West",
    },
];

pub fn team_by_abbr(abbr: &str) -> Option<&'static TeamInfo> {
    let needle = abbr.trim().to_ascii_lowercase();
    NFL_TEAMS.iter().find(|team| team.abbr == needle)
}

pub fn team_by_id(id: u32) -> Option<&'static TeamInfo> {
    NFL_TEAMS.iter().find(|team| team.id == id)
}
