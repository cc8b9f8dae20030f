//! Integration tests for plugview library types.
//!
//! These tests exercise index/results loading against temp files and the
//! windowing-to-rendering pipeline through the public API.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test helper holding a temp directory with index and results files.
struct TestFixtures {
    _temp_dir: TempDir,
    pub root: PathBuf,
}

impl TestFixtures {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();

        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Write a two-record plugin index and return its path.
    fn index(&self) -> PathBuf {
        let path = self.root.join("index.json");
        let index = r#"[
    {
        "name": "napari-cell-seg",
        "summary": "Cell segmentation tools",
        "description_text": "An interactive viewer plugin for segmenting cells in large volumetric images using seeded watershed.",
        "authors": [{"name": "Ada Lovelace"}],
        "version": "0.3.1",
        "release_date": "2021-04-13",
        "license": "BSD-3-Clause",
        "python_version": ">=3.8",
        "operating_system": ["Operating System :: OS Independent"],
        "category": {"Workflow step": ["Image segmentation"], "Supported data": ["2D"]}
    },
    {"name": "stack-inspector"}
]"#;
        fs::write(&path, index).expect("Failed to write index");
        path
    }

    /// Write a results file pairing the first index record with engine
    /// matches, and return its path.
    fn results(&self) -> PathBuf {
        let path = self.root.join("results.json");
        let results = r#"[
    {
        "plugin": {
            "name": "napari-cell-seg",
            "summary": "Cell segmentation tools",
            "description_text": "An interactive viewer plugin for segmenting cells in large volumetric images using seeded watershed.",
            "authors": [{"name": "Ada Lovelace"}]
        },
        "matches": {
            "summary": {"match": "Cell", "start": 0, "end": 3},
            "description_text": {"match": "segmenting", "start": 33, "end": 42}
        }
    },
    {"plugin": {"name": "stack-inspector"}}
]"#;
        fs::write(&path, results).expect("Failed to write results");
        path
    }
}

// =============================================================================
// Registry Loading Tests
// =============================================================================

mod registry_tests {
    use super::*;
    use plugview::registry::{Registry, RegistryError};

    #[test]
    fn load_valid_index() {
        let fixtures = TestFixtures::new();
        let registry = Registry::load(&fixtures.index()).expect("index should load");

        assert_eq!(registry.plugins().len(), 2);
        assert_eq!(registry.plugins()[0].name, "napari-cell-seg");
        assert_eq!(registry.plugins()[0].authors[0].name, "Ada Lovelace");
    }

    #[test]
    fn minimal_record_gets_defaults() {
        let fixtures = TestFixtures::new();
        let registry = Registry::load(&fixtures.index()).expect("index should load");

        let minimal = &registry.plugins()[1];
        assert_eq!(minimal.summary, "");
        assert!(minimal.version.is_none());
        assert!(minimal.category.is_empty());
    }

    #[test]
    fn missing_index_file() {
        let fixtures = TestFixtures::new();
        let result = Registry::load(&fixtures.root.join("nope.json"));

        assert!(matches!(result, Err(RegistryError::IndexNotFound(_))));
    }

    #[test]
    fn invalid_index_json() {
        let fixtures = TestFixtures::new();
        let path = fixtures.root.join("bad.json");
        fs::write(&path, "not valid json").expect("Failed to write");

        assert!(matches!(
            Registry::load(&path),
            Err(RegistryError::ParseError(_))
        ));
    }

    #[test]
    fn record_missing_name_fails_schema() {
        let fixtures = TestFixtures::new();
        let path = fixtures.root.join("noname.json");
        fs::write(&path, r#"[{"summary": "nameless"}]"#).expect("Failed to write");

        assert!(Registry::load(&path).is_err());
    }
}

// =============================================================================
// Results Loading Tests
// =============================================================================

mod results_tests {
    use super::*;
    use plugview::search::{Results, ResultsError};

    #[test]
    fn load_valid_results() {
        let fixtures = TestFixtures::new();
        let results = Results::load(&fixtures.results()).expect("results should load");

        assert_eq!(results.hits.len(), 2);
        let first = &results.hits[0];
        assert_eq!(first.matches["description_text"].word, "segmenting");
        assert_eq!(first.matches["description_text"].start, 33);
    }

    #[test]
    fn hit_without_matches() {
        let fixtures = TestFixtures::new();
        let results = Results::load(&fixtures.results()).expect("results should load");

        assert!(results.hits[1].matches.is_empty());
    }

    #[test]
    fn missing_results_file() {
        let fixtures = TestFixtures::new();
        let result = Results::load(&fixtures.root.join("nope.json"));

        assert!(matches!(result, Err(ResultsError::ResultsNotFound(_))));
    }
}

// =============================================================================
// Windowing Pipeline Tests
// =============================================================================

mod pipeline_tests {
    use super::*;
    use plugview::render::{RenderOptions, render_results};
    use plugview::search::Results;
    use plugview::snippet::{self, Span};

    #[test]
    fn engine_offsets_window_the_description() {
        let fixtures = TestFixtures::new();
        let results = Results::load(&fixtures.results()).expect("results should load");
        let hit = &results.hits[0];

        let m = &hit.matches["description_text"];
        let preview = snippet::extract(&hit.plugin.description_text, m.span(), 10)
            .expect("span should fit");

        assert_eq!(preview.text, "...lugin for segmenting cells in ...");
        // The preview still contains the literal matched word, so the
        // highlighter can relocate it by string search.
        assert!(preview.text.contains(&m.word));
    }

    #[test]
    fn rendered_listing_shows_windowed_preview() {
        let fixtures = TestFixtures::new();
        let results = Results::load(&fixtures.results()).expect("results should load");

        let options = RenderOptions {
            context_width: 10,
            use_color: false,
        };
        let listing = render_results(&results.hits, &options);

        assert!(listing.contains("napari-cell-seg"));
        assert!(listing.contains("...lugin for segmenting cells in ..."));
        assert!(!listing.contains("watershed"));
        assert!(listing.ends_with("2 result(s) found"));
    }

    #[test]
    fn unmatched_hit_renders_without_preview() {
        let fixtures = TestFixtures::new();
        let results = Results::load(&fixtures.results()).expect("results should load");

        let listing = render_results(&results.hits, &RenderOptions::default());

        assert!(listing.contains("stack-inspector"));
        assert!(listing.contains("version: information not submitted"));
    }

    #[test]
    fn window_near_text_start_spends_budget_on_the_right() {
        let preview = snippet::extract("0123456789", Span::new(0, 0), 3).expect("valid span");
        assert_eq!(preview.text, "0123456...");
    }
}
