//! Build-side invariants: drafts never indexed, order is total and stable.

use folio::build::{assemble_index, compare_documents, CollectionDef, CollectionKind, LoadedCollection, RawEntry};
use folio::QueryEngine;
use proptest::prelude::*;
use serde_json::json;
use std::cmp::Ordering;

fn entry_strategy() -> impl Strategy<Value = (String, bool, Option<bool>, Option<u32>)> {
    (
        prop::sample::select(vec!["Secret", "Public", "Draft", "Post", "Notes", "Rust"]),
        any::<bool>(),
        prop::option::of(any::<bool>()),
        prop::option::of(2015u32..2026),
    )
        .prop_map(|(word, draft, featured, year)| (word.to_string(), draft, featured, year))
}

fn collection(entries: &[(String, bool, Option<bool>, Option<u32>)]) -> LoadedCollection {
    LoadedCollection {
        def: CollectionDef {
            name: "blog".to_string(),
            kind: CollectionKind::Blog,
            path: "blog.json".to_string(),
        },
        entries: Ok(entries
            .iter()
            .enumerate()
            .map(|(i, (word, draft, featured, year))| {
                let mut value = json!({
                    "slug": format!("post-{}", i),
                    "title": format!("{} {}", word, i),
                    "draft": draft,
                });
                if let Some(featured) = featured {
                    value["featured"] = json!(featured);
                }
                if let Some(year) = year {
                    value["publishDate"] = json!(format!("{}-01-01", year));
                }
                RawEntry {
                    source: format!("blog.json[{}]", i),
                    value: Ok(value),
                }
            })
            .collect()),
    }
}

proptest! {
    #[test]
    fn prop_drafts_never_indexed(entries in prop::collection::vec(entry_strategy(), 0..20)) {
        let drafts: Vec<String> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.1)
            .map(|(i, _)| format!("blog:post-{}", i))
            .collect();

        let (index, report) = assemble_index(vec![collection(&entries)]).unwrap();
        prop_assert_eq!(report.excluded, drafts.len());
        prop_assert_eq!(index.len(), entries.len() - drafts.len());

        let engine = QueryEngine::new(index.clone());
        for doc in index.docs() {
            prop_assert!(!drafts.contains(&doc.id));
        }
        for query in ["secret", "draft", "post", "rust"] {
            for result in engine.query(query).results {
                prop_assert!(!drafts.contains(&result.id));
            }
        }
    }

    #[test]
    fn prop_build_order_is_sorted(entries in prop::collection::vec(entry_strategy(), 0..20)) {
        let (index, _) = assemble_index(vec![collection(&entries)]).unwrap();
        for pair in index.docs().windows(2) {
            prop_assert_ne!(compare_documents(&pair[0], &pair[1]), Ordering::Greater);
        }
        let featured_seen_after_plain = index
            .docs()
            .windows(2)
            .any(|w| !w[0].is_featured() && w[1].is_featured());
        prop_assert!(!featured_seen_after_plain);
    }
}
