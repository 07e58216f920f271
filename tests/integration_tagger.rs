use scene_tagger::core::normalize::{
    CountryTable, RecordNormalizer, ScrapedPerformer, ScrapedScene, ScrapedStudio, ScrapedTag,
};
use scene_tagger::core::{filter_performer, parse_path, sort_scenes_by_duration};
use scene_tagger::error::{NormalizeError, RecordKind};

const PROVIDER_RESPONSE: &str = r#"[
    {
        "remote_site_id": "far",
        "title": "Long Cut",
        "date": "2020-01-01",
        "duration": 2400,
        "studio": {"remote_site_id": "st-1", "name": "Acme"},
        "fingerprints": null
    },
    null,
    {
        "remote_site_id": "close-one",
        "title": "Opening Night",
        "date": "2020-02-02",
        "duration": 1815,
        "image": "https://img.example/one.jpg",
        "studio": {"remote_site_id": "st-1", "stored_id": "4", "name": "Acme"},
        "tags": [{"name": "Outdoor"}, {"stored_id": "9", "name": null}],
        "performers": [{
            "remote_site_id": "p-1",
            "name": "Jane Doe",
            "gender": "FEMALE",
            "ethnicity": "CAUCASIAN",
            "eye_color": "light brown",
            "country": "US",
            "birthdate": "",
            "images": ["https://img.example/jane.jpg"]
        }],
        "fingerprints": [{"hash": "aa", "algorithm": "OSHASH", "duration": 1700}]
    },
    {
        "remote_site_id": "broken",
        "title": "No Studio"
    },
    {
        "remote_site_id": "close-two",
        "title": "Director's Cut",
        "duration": 1790,
        "studio": {"remote_site_id": "st-2", "name": "Other"},
        "fingerprints": [
            {"hash": "bb", "algorithm": "OSHASH", "duration": 1812},
            {"hash": "cc", "algorithm": "PHASH", "duration": 1810}
        ]
    }
]"#;

fn provider_scenes() -> Vec<Option<ScrapedScene>> {
    serde_json::from_str(PROVIDER_RESPONSE).unwrap()
}

#[test]
fn test_provider_response_to_ranked_matches() {
    let raw = provider_scenes();
    let normalizer = RecordNormalizer::new();

    let mut batch = normalizer.normalize_scenes_lenient(Some(raw.as_slice()));
    assert_eq!(batch.scenes.len(), 3, "null entry skipped and broken scene reported");
    assert_eq!(
        batch.errors,
        vec![NormalizeError::MissingIdentifier {
            record: RecordKind::Studio,
            name: None,
        }]
    );

    // Local file is 30:12
    let ranked = sort_scenes_by_duration(&mut batch.scenes, Some(1812));
    let ids: Vec<_> = ranked.iter().map(|s| s.stash_id.as_str()).collect();
    assert_eq!(ids, vec!["close-two", "close-one", "far"]);

    let scene = &ranked[1];
    assert_eq!(scene.images, vec!["https://img.example/one.jpg"]);
    assert_eq!(scene.studio.id.as_deref(), Some("4"));
    assert_eq!(scene.tags[1].name, "");
    assert_eq!(scene.tags[1].id.as_deref(), Some("9"));

    let jane = &scene.performers[0];
    assert_eq!(jane.ethnicity.as_deref(), Some("Caucasian"));
    assert_eq!(jane.eye_color.as_deref(), Some("Light Brown"));
    assert_eq!(jane.country.as_deref(), Some("United States"));
    assert_eq!(jane.birthdate, None);
}

#[test]
fn test_strict_batch_rejects_broken_record() {
    let raw = provider_scenes();
    let result = RecordNormalizer::new().normalize_scenes(Some(raw.as_slice()));
    assert!(result.is_err());
}

#[test]
fn test_ranking_without_target_keeps_provider_order() {
    let raw = provider_scenes();
    let mut batch = RecordNormalizer::new().normalize_scenes_lenient(Some(raw.as_slice()));

    let ranked = sort_scenes_by_duration(&mut batch.scenes, None);
    let ids: Vec<_> = ranked.iter().map(|s| s.stash_id.as_str()).collect();
    assert_eq!(ids, vec!["far", "close-one", "close-two"]);
}

#[test]
fn test_performer_submission_from_provider_record() {
    let raw: ScrapedPerformer = serde_json::from_str(
        r#"{"remote_site_id": "p-1", "name": "Jane", "gender": "FEMALE", "birthdate": "",
            "tattoos": "LOWER BACK", "url": "https://example.com/jane"}"#,
    )
    .unwrap();

    let performer = RecordNormalizer::new().normalize_performer(&raw).unwrap();
    let submission = filter_performer(&performer, &["gender"]);

    assert_eq!(submission.name.as_deref(), Some("Jane"));
    assert_eq!(submission.gender, None);
    assert_eq!(submission.birthdate, None);
    assert_eq!(submission.tattoos.as_deref(), Some("Lower Back"));

    let json = serde_json::to_value(&submission).unwrap();
    assert!(json.get("url").is_none(), "url is not a submission field");
}

#[test]
fn test_normalized_records_renormalize_unchanged() {
    let normalizer = RecordNormalizer::with_countries(CountryTable::new());

    let performer = normalizer
        .normalize_performer(&ScrapedPerformer {
            stored_id: Some("12".to_string()),
            remote_site_id: Some("p-1".to_string()),
            name: Some("Jane".to_string()),
            ethnicity: Some("latin".to_string()),
            piercings: Some("BELLY BUTTON".to_string()),
            country: Some("br".to_string()),
            images: Some(vec!["https://img.example/j.jpg".to_string()]),
            ..Default::default()
        })
        .unwrap();
    let json = serde_json::to_string(&performer).unwrap();
    let again = normalizer
        .normalize_performer(&serde_json::from_str(&json).unwrap())
        .unwrap();
    assert_eq!(again, performer);

    let studio = normalizer
        .normalize_studio(&ScrapedStudio {
            stored_id: None,
            remote_site_id: Some("st-1".to_string()),
            name: Some("Acme".to_string()),
            url: Some("https://acme.example".to_string()),
        })
        .unwrap();
    let json = serde_json::to_string(&studio).unwrap();
    let again = normalizer
        .normalize_studio(&serde_json::from_str(&json).unwrap())
        .unwrap();
    assert_eq!(again, studio);

    let tag = normalizer.normalize_tag(&ScrapedTag {
        stored_id: Some("3".to_string()),
        name: Some("Outdoor".to_string()),
    });
    let json = serde_json::to_string(&tag).unwrap();
    assert_eq!(
        normalizer.normalize_tag(&serde_json::from_str(&json).unwrap()),
        tag
    );
}

#[test]
fn test_normalized_scene_renormalizes_unchanged() {
    let raw = provider_scenes();
    let normalizer = RecordNormalizer::new();

    let scene = raw
        .iter()
        .flatten()
        .find(|s| s.remote_site_id.as_deref() == Some("close-one"))
        .map(|s| normalizer.normalize_scene(s).unwrap())
        .unwrap();
    assert_eq!(scene.images, vec!["https://img.example/one.jpg"]);
    assert_eq!(scene.tags.len(), 2);
    assert_eq!(scene.performers.len(), 1);
    assert_eq!(scene.fingerprints.len(), 1);

    let json = serde_json::to_string(&scene).unwrap();
    let reparsed: ScrapedScene = serde_json::from_str(&json).unwrap();
    let again = normalizer.normalize_scene(&reparsed).unwrap();
    assert_eq!(again, scene);
}

#[test]
fn test_optional_performer_fields_are_never_blank() {
    let raw = ScrapedPerformer {
        remote_site_id: Some("p-1".to_string()),
        url: Some(String::new()),
        twitter: Some(" ".to_string()),
        instagram: Some("jane".to_string()),
        ethnicity: Some(String::new()),
        country: Some(String::new()),
        eye_color: Some("  ".to_string()),
        height: Some("".to_string()),
        aliases: Some("JD".to_string()),
        weight: Some("  ".to_string()),
        ..Default::default()
    };

    let performer = RecordNormalizer::new().normalize_performer(&raw).unwrap();
    for (field, value) in performer.optional_fields() {
        if let Some(value) = value {
            assert!(!value.trim().is_empty(), "{} should be absent", field);
        }
    }
    assert_eq!(performer.instagram.as_deref(), Some("jane"));
    assert_eq!(performer.aliases.as_deref(), Some("JD"));
}

#[test]
fn test_path_parsing_for_matching() {
    let parsed = parse_path("C:\\Shows\\Foo\\Bar\\scene.mp4").unwrap();
    assert_eq!(parsed.directory_segments, vec!["shows", "foo"]);
    assert_eq!(parsed.file_base_name, "scene");
    assert_eq!(parsed.extension, ".mp4");

    let parsed = parse_path("/a/b.mkv").unwrap();
    assert!(parsed.directory_segments.is_empty());
    assert_eq!(parsed.file_base_name, "b");
    assert_eq!(parsed.extension, ".mkv");

    assert!(parse_path("///").is_err());
}
