use cinebd_source::catalog::parse_catalog;
use cinebd_source::detail::parse_detail;
use cinebd_source::episodes::assemble_episodes;
use cinebd_source::ScrapeStrategy;

const BASE: &str = "http://cineplexbd.net";

const LISTING: &str = r#"
<html><body>
<div class="grid">
    <a href="view.php?id=101">
        <img data-src="/thumbs/101.jpg" src="/thumbs/blank.gif" alt="Harbor Lights">
        <span class="truncate">Harbor Lights</span>
    </a>
    <a href="watch.php?id=202">
        <img src="thumbs/202.jpg" alt="Night Shift">
        <div class="cp-title">Night Shift</div>
    </a>
    <a href="view.php?id=101">
        <span class="truncate">Harbor Lights (duplicate card)</span>
    </a>
    <a href="login.php">Login</a>
</div>
<ul class="pagination">
    <li class="active"><a href="search.php?q=&page=1">1</a></li>
    <li><a href="search.php?q=&page=2">2</a></li>
</ul>
</body></html>
"#;

#[test]
fn listing_page_end_to_end() {
    let page = parse_catalog(LISTING, BASE, &ScrapeStrategy::canonical()).unwrap();

    assert_eq!(page.items.len(), 2);
    assert!(page.has_next_page);

    let movie = &page.items[0];
    assert_eq!(movie.path, "view.php?id=101");
    assert_eq!(movie.title, "Harbor Lights");
    assert_eq!(
        movie.thumbnail_url.as_deref(),
        Some("http://cineplexbd.net/thumbs/101.jpg")
    );

    let series = &page.items[1];
    assert_eq!(series.path, "watch.php?id=202");
    assert_eq!(series.title, "Night Shift");
    assert_eq!(
        series.thumbnail_url.as_deref(),
        Some("http://cineplexbd.net/thumbs/202.jpg")
    );
}

#[test]
fn detail_page_end_to_end() {
    let html = r#"
        <html><head><title>Night Shift — Watch</title></head><body>
        <h1>Night Shift — Watch</h1>
        <p class="leading-relaxed">A paramedic works the graveyard run.</p>
        <div class="ganre-wrapper">
            <a href="tcategory.php?category=Web%20Series">Web Series</a>
            <a href="tcategory.php?category=English%20Series">English Series</a>
        </div>
        <img class="poster" src="/posters/202.jpg">
        </body></html>
    "#;
    let detail = parse_detail(html, BASE, &ScrapeStrategy::canonical()).unwrap();

    assert_eq!(detail.title, "Night Shift");
    assert_eq!(detail.synopsis, "A paramedic works the graveyard run.");
    assert_eq!(detail.genre_line(), "Web Series, English Series");
    assert_eq!(
        detail.thumbnail_url.as_deref(),
        Some("http://cineplexbd.net/posters/202.jpg")
    );
}

#[test]
fn season_fanout_end_to_end() {
    // Season 2's manifest came back as an error page; it must not poison
    // seasons 1 and 3.
    let payloads = vec![
        (
            "1".to_string(),
            Ok(r#"{"episodes":{
                "1":{"title":"Pilot","path":"/d/s1e1.mp4"},
                "2":{"title":"E02 Arrival","path":"/d/s1e2.mp4"}
            }}"#
            .to_string()),
        ),
        ("2".to_string(), Ok("<html>502</html>".to_string())),
        (
            "3".to_string(),
            Ok(r#"{"episodes":{
                "x":{"title":"Show.S03E07.1080p","path":"/d/s3e7.mp4"}
            }}"#
            .to_string()),
        ),
    ];

    let episodes = assemble_episodes(payloads, &ScrapeStrategy::canonical());

    let names: Vec<_> = episodes.iter().map(|e| e.display_name.as_str()).collect();
    assert_eq!(names, vec!["S1 Pilot", "S1 E02 Arrival", "S3 Show.S03E07.1080p"]);
    assert_eq!(episodes[2].sort_key, 7.0);
}
