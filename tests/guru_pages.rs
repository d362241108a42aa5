use gridiron_scrape::scrapers::guru::scrape_player;
use scraper::Html;

const PLAYER: &str = include_str!("fixtures/guru_player.html");
const DEFENSE: &str = include_str!("fixtures/guru_defense.html");

#[test]
fn scrapes_player_page() {
    let player = scrape_player(&Html::parse_document(PLAYER));

    assert_eq!(player.first, "Tarik");
    assert_eq!(player.last, "Cohen");
    assert_eq!(player.position, "RB");
    assert!(player.errors.is_empty());
}

#[test]
fn defense_page_without_position() {
    let player = scrape_player(&Html::parse_document(DEFENSE));

    assert_eq!(player.first, "Chicago");
    assert_eq!(player.last, "Defense");
    assert_eq!(player.position, "");
    assert_eq!(player.errors.iter().collect::<Vec<_>>(), vec!["position"]);
}

#[test]
fn missing_name_label() {
    let player = scrape_player(&Html::parse_document("<html><body><p>Not found</p></body></html>"));

    assert_eq!(player.first, "");
    assert_eq!(player.last, "");
    assert!(player.errors.contains("name"));
    assert!(player.errors.contains("position"));

    let json = serde_json::to_value(&player).unwrap();
    assert_eq!(json["errors"], serde_json::json!(["name", "position"]));
}

#[test]
fn single_word_name_is_a_failure() {
    let player = scrape_player(&Html::parse_document(
        r#"<font size="3"><b>Smith</b></font>DraftKings position: <b>WR</b>"#,
    ));

    assert_eq!((player.first.as_str(), player.last.as_str()), ("", ""));
    assert_eq!(player.position, "WR");
    assert_eq!(player.errors.iter().collect::<Vec<_>>(), vec!["name"]);
}
