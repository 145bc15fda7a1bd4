//! Loading records and config from disk, and driving a session over them.

mod common;

use common::{bundled, ids};
use faqih::{
    select_top_matches, Category, ConfigError, Dataset, DatasetError, QueryController,
    SearchConfig, SessionState, Verdict,
};
use std::io::Write;
use tempfile::NamedTempFile;

const TWO_RECORDS: &str = r#"[
  {
    "id": "ivf",
    "title": "أطفال الأنابيب",
    "category": "OBGYN",
    "question": "ما حكم التلقيح الصناعي بين الزوجين؟",
    "medical_context": "ivf in vitro fertilization",
    "ruling": "يجوز إذا كان بين الزوجين وفي أثناء قيام الزوجية.",
    "verdict": "CONDITIONAL",
    "source": "مجمع الفقه الإسلامي",
    "tags": ["تلقيح", "ivf"]
  },
  {
    "id": "sanitizer",
    "title": "المعقمات الكحولية",
    "category": "ICU",
    "question": "هل يجوز استعمال المعقم الكحولي؟",
    "ruling": "يجوز استعماله للتعقيم.",
    "verdict": "PERMITTED",
    "source": "اللجنة الدائمة"
  }
]"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_loads_records_from_file() {
    let file = write_temp(TWO_RECORDS);
    let dataset = Dataset::from_path(file.path()).unwrap();

    assert_eq!(dataset.len(), 2);
    let ivf = dataset.get("ivf").unwrap();
    assert_eq!(ivf.category, Category::Obgyn);
    assert_eq!(ivf.verdict, Verdict::Conditional);

    // Optional fields default to empty
    let sanitizer = dataset.get("sanitizer").unwrap();
    assert_eq!(sanitizer.medical_context, "");
    assert!(sanitizer.tags.is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dataset::from_path(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, DatasetError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_unknown_verdict_rejected() {
    let bad = TWO_RECORDS.replace("\"PERMITTED\"", "\"MAKRUH\"");
    let err = Dataset::from_json_str(&bad).unwrap_err();
    assert!(matches!(err, DatasetError::Parse(_)));
}

#[test]
fn test_duplicate_ids_rejected() {
    let dup = TWO_RECORDS.replace("\"sanitizer\"", "\"ivf\"");
    let file = write_temp(&dup);
    match Dataset::from_path(file.path()) {
        Err(DatasetError::DuplicateId { id, first, second }) => {
            assert_eq!(id, "ivf");
            assert_eq!((first, second), (0, 1));
        }
        other => panic!("expected duplicate id error, got {:?}", other),
    }
}

#[test]
fn test_bundled_dataset_is_well_formed() {
    let dataset = bundled();
    assert_eq!(dataset.len(), 10);
    for fatwa in &dataset {
        assert!(!fatwa.title.trim().is_empty(), "{} has no title", fatwa.id);
        assert!(!fatwa.ruling.trim().is_empty(), "{} has no ruling", fatwa.id);
    }
    assert!(dataset.iter().any(|f| f.verdict == Verdict::Forbidden));
    assert!(dataset.iter().any(|f| f.category == Category::Unit8Worship));
}

#[test]
fn test_file_dataset_end_to_end() {
    let file = write_temp(TWO_RECORDS);
    let dataset = Dataset::from_path(file.path()).unwrap();

    let found = select_top_matches("fertilization", dataset.as_slice());
    assert_eq!(ids(&found), vec!["ivf"]);

    let controller = QueryController::new(dataset, SearchConfig::default());
    let state = controller.submit(SessionState::new(), "ivf");
    assert_eq!(state.messages()[1].related_fatwa_ids, vec!["ivf"]);
}

#[test]
fn test_config_file_overrides_defaults() {
    let file = write_temp(r#"{ "max_results": 1, "expand_synonyms": false }"#);
    let config = SearchConfig::from_path(file.path()).unwrap();
    assert_eq!(config.max_results, 1);
    assert!(!config.expand_synonyms);
    assert_eq!(config.min_score, SearchConfig::default().min_score);

    let controller = QueryController::new(bundled(), config);
    let state = controller.submit(SessionState::new(), "kidney");
    assert_eq!(
        state.messages()[1].related_fatwa_ids,
        vec!["internal-dialysis-fasting"]
    );
}

#[test]
fn test_config_file_rejects_bad_values() {
    let zero = write_temp(r#"{ "max_results": 0 }"#);
    assert!(matches!(
        SearchConfig::from_path(zero.path()),
        Err(ConfigError::Invalid { field: "max_results", .. })
    ));

    let typo = write_temp(r#"{ "max_result": 3 }"#);
    assert!(matches!(
        SearchConfig::from_path(typo.path()),
        Err(ConfigError::Parse(_))
    ));
}
