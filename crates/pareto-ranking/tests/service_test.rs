//! RankingService over an in-memory source: filtering, limits, error propagation.

use chrono::NaiveDate;
use pareto_core::errors::{ParetoResult, SourceError};
use pareto_core::models::{ReportFilters, ReportItem, ReportRecord};
use pareto_core::traits::IReportSource;
use pareto_core::ParetoError;
use pareto_ranking::{InMemoryReportSource, RankingEngine, RankingService};
use test_fixtures::{load_corpus, CorpusFixture};

fn plant_floor() -> InMemoryReportSource {
    let fixture: CorpusFixture<ReportRecord> = load_corpus("plant_floor");
    InMemoryReportSource::new("plant_floor", fixture.records)
}

fn engine() -> RankingEngine {
    RankingEngine::default().with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
}

fn ids(source: &InMemoryReportSource, filters: &ReportFilters) -> Vec<String> {
    source
        .fetch_filtered(filters)
        .unwrap()
        .into_iter()
        .map(|item| item.id)
        .collect()
}

#[test]
fn unfiltered_service_ranks_every_non_blank_record() {
    let source = plant_floor();
    let service = RankingService::new(&source, engine());
    let outcome = service.top_problems(&ReportFilters::default(), None).unwrap();

    assert_eq!(outcome.stats.total_items, 13);
    assert!(outcome.problems.len() <= 6);
    assert!(!outcome.problems.is_empty());
}

#[test]
fn department_filter_is_case_insensitive() {
    let source = plant_floor();
    let filters = ReportFilters {
        department: Some("produksi".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&source, &filters), vec!["pf-01", "pf-03", "pf-11", "pf-14"]);
}

#[test]
fn status_filter_is_exact() {
    let source = plant_floor();
    let filters = ReportFilters {
        status: Some("closed".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&source, &filters), vec!["pf-03", "pf-08", "pf-13"]);

    let filters = ReportFilters {
        status: Some("Closed".to_string()),
        ..Default::default()
    };
    assert!(ids(&source, &filters).is_empty());
}

#[test]
fn date_range_is_inclusive_and_drops_undated() {
    let source = plant_floor();
    let filters = ReportFilters {
        start_date: NaiveDate::from_ymd_opt(2024, 5, 1),
        end_date: NaiveDate::from_ymd_opt(2024, 5, 31),
        ..Default::default()
    };
    assert_eq!(
        ids(&source, &filters),
        vec!["pf-01", "pf-02", "pf-03", "pf-06", "pf-07", "pf-11", "pf-14"]
    );
}

#[test]
fn search_covers_text_and_reporter() {
    let source = plant_floor();
    let by_reporter = ReportFilters {
        search: Some("sari".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&source, &by_reporter), vec!["pf-02", "pf-04", "pf-13"]);

    let by_text = ReportFilters {
        search: Some("PINTU".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&source, &by_text), vec!["pf-02", "pf-09", "pf-13"]);
}

#[test]
fn filtered_ranking_only_sees_matching_reports() {
    let source = plant_floor();
    let service = RankingService::new(&source, engine());
    let filters = ReportFilters {
        category: Some("material".to_string()),
        ..Default::default()
    };
    let outcome = service.top_problems(&filters, Some(10)).unwrap();

    // pf-12 is a blank Material record and never participates.
    assert_eq!(outcome.stats.total_items, 4);
    let total: usize = outcome.problems.iter().map(|p| p.frequency).sum();
    assert_eq!(total, 4);
    for problem in &outcome.problems {
        assert_eq!(problem.category.as_deref(), Some("Material"));
    }
}

#[test]
fn explicit_limit_overrides_default() {
    let source = plant_floor();
    let service = RankingService::new(&source, engine());
    let outcome = service.top_problems(&ReportFilters::default(), Some(1)).unwrap();
    assert_eq!(outcome.problems.len(), 1);
    assert_eq!(outcome.problems[0].rank, 1);
}

#[test]
fn word_cloud_through_service() {
    let source = plant_floor();
    let service = RankingService::new(&source, engine());
    let words = service.word_cloud(&ReportFilters::default(), None).unwrap();

    assert_eq!(words[0].word, "kaca");
    assert_eq!(words[0].count, 4);
    assert!(words.iter().all(|w| w.count >= 2));
    assert!(words.iter().all(|w| w.word != "tidak" && w.word != "dan"));
    assert!(words.len() <= 30);

    let capped = service.word_cloud(&ReportFilters::default(), Some(3)).unwrap();
    assert_eq!(capped.len(), 3);
    assert_eq!(capped[..], words[..3]);
}

#[test]
fn debug_info_through_service() {
    let source = plant_floor();
    let service = RankingService::new(&source, engine());
    let info = service.debug_info(&ReportFilters::default()).unwrap();
    assert_eq!(info.stats.total_items, 13);
    assert_eq!(info.similarity_pairs.len(), 45);

    let none = ReportFilters {
        department: Some("tidak-ada".to_string()),
        ..Default::default()
    };
    let empty = service.debug_info(&none).unwrap();
    assert!(empty.similarity_pairs.is_empty());
    assert_eq!(empty.stats.total_items, 0);
}

struct OfflineSource;

impl IReportSource for OfflineSource {
    fn fetch_filtered(&self, _filters: &ReportFilters) -> ParetoResult<Vec<ReportItem>> {
        Err(SourceError::Unavailable {
            reason: "database offline".to_string(),
        }
        .into())
    }

    fn name(&self) -> &str {
        "offline"
    }
}

#[test]
fn source_errors_propagate() {
    let source = OfflineSource;
    let service = RankingService::new(&source, engine());
    let err = service.top_problems(&ReportFilters::default(), None).unwrap_err();
    assert!(matches!(err, ParetoError::Source(SourceError::Unavailable { .. })));
    assert!(err.to_string().contains("database offline"));

    assert!(service.word_cloud(&ReportFilters::default(), None).is_err());
    assert!(service.debug_info(&ReportFilters::default()).is_err());
}
