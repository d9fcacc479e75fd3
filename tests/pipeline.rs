//! End-to-end reconciliation: candidate sets in, sorted canonical
//! records out.

use roster_sync::assemble::{assemble_team, CanonicalPlayer, RosterAssembler};
use roster_sync::depth_chart::{DepthChart, DepthEntry};
use roster_sync::positions::PositionTable;
use roster_sync::reconcile::{annotate_depth, merge_sources, NameIdentity, SourceCandidate};
use roster_sync::scoring::Difficulty;
use roster_sync::teams::team_by_abbr;

fn candidate(
    name: &str,
    position: &str,
    number: Option<u32>,
    practice_squad: bool,
    espn_id: Option<&str>,
) -> SourceCandidate {
    SourceCandidate {
        name: name.to_string(),
        position: position.to_string(),
        number,
        practice_squad,
        espn_id: espn_id.map(str::to_string),
    }
}

#[test]
fn one_team_reconciles_scores_and_orders() {
    let team = team_by_abbr("buf").unwrap();
    let positions = PositionTable::new();

    let api = vec![
        candidate("Josh Allen", "QB", Some(17), false, Some("3918298")),
        candidate("Tyler Bass", "K", Some(2), true, None),
        candidate("Ghost Receiver", "WR", None, false, Some("77")),
    ];
    let html = vec![
        // Conflicting duplicate of the API record; the API fields stand.
        candidate("Josh Allen", "RB", Some(99), false, None),
        candidate("Injured Corner", "CB", Some(39), false, Some("101")),
    ];
    let chart = DepthChart::from_entries(&[DepthEntry {
        espn_id: Some("3918298".to_string()),
        name: None,
        position: "QB".to_string(),
        rank: 1,
    }]);

    let mut merged = merge_sources(&NameIdentity, &[api, html]);
    annotate_depth(&mut merged, &chart);
    let mut assembler = RosterAssembler::new();
    assembler.add_team(assemble_team(team, merged, &positions));
    let records = assembler.finish();

    // The jersey-less receiver never appears.
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.name != "Ghost Receiver"));

    // Sorted by name within one team: Injured Corner, Josh Allen, Tyler Bass.
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Injured Corner", "Josh Allen", "Tyler Bass"]);

    let allen = &records[1];
    assert_eq!(allen.position, "QB");
    assert_eq!(allen.number, 17);
    assert_eq!(allen.depth_chart.as_deref(), Some("QB1"));
    // 50 (QB) + 20 (espn id) + 30 (starter) = 100.
    assert_eq!(allen.popularity, 100);
    assert_eq!(allen.difficulty, Difficulty::Easy);

    let bass = records.iter().find(|r| r.name == "Tyler Bass").unwrap();
    // 25 (K) - 20 (practice squad) = 5, tier forced to expert.
    assert_eq!(bass.popularity, 5);
    assert_eq!(bass.difficulty, Difficulty::Expert);
    assert!(bass.depth_chart.is_none());

    let corner = &records[0];
    // 35 (CB) + 20 (espn id) = 55.
    assert_eq!(corner.popularity, 55);
    assert_eq!(corner.difficulty, Difficulty::Medium);
}

#[test]
fn name_keyed_depth_chart_joins_without_ids() {
    let team = team_by_abbr("no").unwrap();
    let positions = PositionTable::new();

    let api = vec![candidate("Wing Punter", "P", Some(6), false, None)];
    let chart = DepthChart::from_entries(&[DepthEntry {
        espn_id: None,
        name: Some("Wing Punter".to_string()),
        position: "P".to_string(),
        rank: 1,
    }]);

    let mut merged = merge_sources(&NameIdentity, &[api]);
    annotate_depth(&mut merged, &chart);
    let records = assemble_team(team, merged, &positions);

    assert_eq!(records[0].depth_chart.as_deref(), Some("P1"));
    // 25 (P) + 30 (starter) = 55.
    assert_eq!(records[0].popularity, 55);
}

#[test]
fn run_output_sorts_across_conferences_and_teams() {
    let positions = PositionTable::new();
    let mut assembler = RosterAssembler::new();

    for abbr in ["sea", "gb", "buf", "kc"] {
        let team = team_by_abbr(abbr).unwrap();
        let merged = merge_sources(
            &NameIdentity,
            &[vec![candidate("Zane", "WR", Some(1), false, None),
                   candidate("Abner", "TE", Some(2), false, None)]],
        );
        assembler.add_team(assemble_team(team, merged, &positions));
    }

    let records = assembler.finish();
    assert_eq!(records.len(), 8);

    let keys: Vec<(&str, &str, &str, &str)> = records
        .iter()
        .map(|r| {
            (
                r.conference.as_str(),
                r.division.as_str(),
                r.team.as_str(),
                r.name.as_str(),
            )
        })
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    // AFC teams lead, and Abner precedes Zane on each roster.
    assert_eq!(records[0].conference, "AFC");
    assert_eq!(records[0].name, "Abner");
    assert_eq!(records[1].name, "Zane");
}

#[test]
fn output_round_trips_through_json() {
    let team = team_by_abbr("dal").unwrap();
    let positions = PositionTable::new();

    let api = vec![
        candidate("Roundtrip Quarterback", "QB", Some(4), false, Some("2577417")),
        candidate("Roundtrip Squadman", "G", Some(65), true, None),
    ];
    let records = assemble_team(team, merge_sources(&NameIdentity, &[api]), &positions);

    let json = serde_json::to_string_pretty(&records).unwrap();
    let reread: Vec<CanonicalPlayer> = serde_json::from_str(&json).unwrap();
    assert_eq!(records, reread);
}

#[test]
fn players_file_round_trips_on_disk() {
    let team = team_by_abbr("min").unwrap();
    let positions = PositionTable::new();
    let source = vec![candidate("Disk Checker", "TE", Some(85), false, Some("31"))];
    let records = assemble_team(team, merge_sources(&NameIdentity, &[source]), &positions);

    let path = std::env::temp_dir().join(format!("roster_sync_players_{}.json", std::process::id()));
    roster_sync::persist::write_players(&path, &records).unwrap();
    let reread = roster_sync::persist::load_players(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(records, reread);
}

#[test]
fn reruns_on_identical_input_are_byte_identical() {
    let team = team_by_abbr("chi").unwrap();
    let positions = PositionTable::new();
    let sources = [
        vec![candidate("Det Player", "LB", Some(52), false, Some("8"))],
        vec![candidate("Other Player", "SS", Some(21), false, None)],
    ];

    let run = || {
        let mut merged = merge_sources(&NameIdentity, &sources);
        annotate_depth(&mut merged, &DepthChart::from_entries(&[]));
        let records = assemble_team(team, merged, &positions);
        serde_json::to_string(&records).unwrap()
    };
    assert_eq!(run(), run());
}
