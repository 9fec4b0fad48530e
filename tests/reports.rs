// tests/reports.rs
use fm_import::{
    ExtractError, ManagerSeasonTally, decode_document, extract_facepack_mapping,
    extract_league_table, extract_season_tally,
};

#[test]
fn league_rows_in_document_order() {
    let rows = extract_league_table(include_str!("fixtures/standings.html"));
    let teams: Vec<&str> = rows.iter().map(|r| r.team.as_str()).collect();
    assert_eq!(teams, ["Hull City", "Leeds", "Stoke"]);
    assert_eq!(rows[2].pos, "3rd");
    assert_eq!(rows[2].pts, "86");
    assert_eq!(rows[1].inf, "P");
    assert_eq!(rows[0].played, "46");
}

#[test]
fn league_without_points_column_is_empty() {
    let doc = r#"
        <table>
          <tr><th>Pos</th><th>Team</th><th>Pld</th></tr>
          <tr><td>1</td><td>Hull</td><td>46</td></tr>
        </table>
    "#;
    assert!(extract_league_table(doc).is_empty());
}

#[test]
fn fixture_report_tally() {
    // friendlies, the "W 3-2" annotated result, P - P and the blank result add nothing
    let t = extract_season_tally(include_str!("fixtures/fixtures.txt"));
    assert_eq!(t, ManagerSeasonTally { wins: 1, losses: 1, draws: 1 });
    assert_eq!(t.played(), 3);
}

#[test]
fn fixture_report_without_header() {
    assert_eq!(extract_season_tally(""), ManagerSeasonTally::default());
    assert_eq!(
        extract_season_tally("5/8/2023 Leeds (H) Sky Bet Championship 2 - 1\n"),
        ManagerSeasonTally::default()
    );
}

#[test]
fn facepack_manifest() {
    let m = extract_facepack_mapping(include_str!("fixtures/config.xml")).unwrap();
    assert_eq!(m.len(), 2);
    assert_eq!(m["12345"], "Heffler_v2");
    assert_eq!(m["2000123"], "2000123");
}

#[test]
fn facepack_rejects_broken_xml() {
    let err = extract_facepack_mapping("<record><list></record>").unwrap_err();
    assert!(matches!(err, ExtractError::Xml(_)));
}

#[test]
fn decode_then_extract() {
    let bytes = b"\xEF\xBB\xBF<list><record from=\"x\" to=\"a/person/5/portrait\"/></list>";
    let text = decode_document(bytes).unwrap();
    assert_eq!(extract_facepack_mapping(text).unwrap()["5"], "x");
}
