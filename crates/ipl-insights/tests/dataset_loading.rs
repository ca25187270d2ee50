use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use ipl_insights::dataset::{DatasetError, MatchTable, TableLoader, TossDecision};

fn fixture_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

#[test]
fn loads_every_fixture_row() {
    let table = MatchTable::from_path(fixture_path("matches.csv")).expect("fixture loads");
    assert_eq!(table.len(), 20);

    let first = &table.records()[0];
    assert_eq!(first.season, 2017);
    assert_eq!(first.venue, "Rajiv Gandhi International Stadium, Uppal");
    assert_eq!(first.toss_decision, Some(TossDecision::Field));
    assert_eq!(first.win_by_runs, Some(35));
}

#[test]
fn keeps_rows_with_missing_values() {
    let table = MatchTable::from_path(fixture_path("matches.csv")).expect("fixture loads");

    let no_result = table
        .records()
        .iter()
        .find(|record| record.season == 2011)
        .expect("no-result row present");
    assert!(no_result.winner.is_none());
    assert!(no_result.player_of_match.is_none());

    let neutral = table
        .records()
        .iter()
        .find(|record| record.venue == "Dubai International Cricket Stadium")
        .expect("neutral venue row present");
    assert!(neutral.city.is_none());
}

#[test]
fn reads_day_first_dates() {
    let table = MatchTable::from_path(fixture_path("matches.csv")).expect("fixture loads");
    let final_2019 = table
        .records()
        .iter()
        .find(|record| record.player_of_match.as_deref() == Some("JJ Bumrah"))
        .expect("2019 final present");
    assert_eq!(final_2019.date, NaiveDate::from_ymd_opt(2019, 5, 12).expect("valid date"));
}

#[test]
fn accepts_timestamped_dates() {
    let csv = "id,season,city,date,team1,team2,toss_winner,toss_decision,result,dl_applied,winner,win_by_runs,win_by_wickets,player_of_match,venue\n\
1,2008,Bangalore,2008-04-18 00:00:00,Kolkata Knight Riders,Royal Challengers Bangalore,Royal Challengers Bangalore,field,normal,0,Kolkata Knight Riders,140,0,BB McCullum,M Chinnaswamy Stadium\n";
    let table = MatchTable::from_reader(csv.as_bytes()).expect("timestamped date parses");
    assert_eq!(table.len(), 1);
    assert_eq!(
        table.records()[0].date,
        NaiveDate::from_ymd_opt(2008, 4, 18).expect("valid date")
    );
}

#[test]
fn loader_memoizes_the_table() {
    let loader = TableLoader::new(fixture_path("matches.csv"));
    let first = loader.load().expect("first load");
    let second = loader.load().expect("second load");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.len(), 20);
}

#[test]
fn missing_file_is_an_io_error() {
    let loader = TableLoader::new(fixture_path("does-not-exist.csv"));
    assert!(matches!(loader.load(), Err(DatasetError::Io(_))));
}

#[test]
fn missing_columns_are_reported() {
    let csv = "season,team1,team2,venue,date\n2008,Kolkata Knight Riders,Royal Challengers Bangalore,M Chinnaswamy Stadium,2008-04-18\n";
    let err = MatchTable::from_reader(csv.as_bytes()).expect_err("columns are missing");
    match err {
        DatasetError::MissingColumns(columns) => {
            assert!(columns.iter().any(|column| column == "toss_decision"));
            assert!(columns.iter().any(|column| column == "city"));
        }
        other => panic!("expected missing columns, got {other:?}"),
    }
}
