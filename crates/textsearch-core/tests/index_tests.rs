//! Document store invariants of TextIndex

use textsearch_core::index::{Document, TextIndex};
use textsearch_core::{FieldSpec, Quad, Term};

fn ex(name: &str) -> Term {
    Term::named(format!("http://example.org/{}", name))
}

fn quad(subject: &str, predicate: &str, value: &str) -> Quad {
    Quad::triple(ex(subject), ex(predicate), Term::literal(value))
}

fn snapshot(index: &TextIndex) -> Vec<Document> {
    index.documents().cloned().collect()
}

fn test_index() -> TextIndex {
    TextIndex::new(&[
        FieldSpec::new(ex("label").value()),
        FieldSpec::weighted(ex("description").value(), 2.0),
    ])
    .unwrap()
}

#[test]
fn test_add_then_delete_restores_store() {
    let mut index = test_index();
    index.add(&quad("subject0", "label", "test"));
    index.add(&quad("subject0", "label", "test"));
    index.add(&quad("subject1", "description", "text"));

    let statements = vec![
        quad("subject0", "label", "test"),
        quad("subject0", "label", "other"),
        quad("subject0", "description", "new"),
        quad("subject1", "label", "text"),
        quad("subject2", "label", "fresh"),
        quad("subject2", "comment", "ignored"),
    ];

    for statement in &statements {
        let before = snapshot(&index);

        index.add(statement);
        index.delete(statement);

        assert_eq!(snapshot(&index), before, "statement {}", statement);
    }
}

#[test]
fn test_no_empty_documents_or_fields() {
    let mut index = test_index();
    let statements = vec![
        quad("subject0", "label", "a"),
        quad("subject0", "description", "b"),
        quad("subject1", "label", "c"),
    ];
    for statement in &statements {
        index.add(statement);
    }

    for statement in &statements {
        index.delete(statement);
        for doc in index.documents() {
            assert!(!doc.is_empty());
            assert!(doc.fields().all(|(_, values)| !values.is_empty()));
        }
    }

    assert!(index.is_empty());
}

#[test]
fn test_field_ids_are_sequential() {
    let index = TextIndex::new(&[
        FieldSpec::new(ex("a").value()),
        FieldSpec::new(ex("b").value()),
        FieldSpec::new(ex("c").value()),
    ])
    .unwrap();

    let ids: Vec<&str> = index.fields().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn test_normalized_weights() {
    let index = test_index();

    let weights: Vec<f64> = index.normalized_weights().iter().map(|k| k.weight).collect();

    assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    assert!((weights[0] - 1.0 / 3.0).abs() < 1e-9);
    assert!((weights[1] - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_rebuild_only_when_dirty() {
    let mut index = test_index();
    index.add(&quad("subject0", "label", "test"));

    index.search("test");
    assert!(!index.is_dirty());

    index.search("other");
    assert!(!index.is_dirty());

    index.delete(&quad("subject0", "label", "missing"));
    assert!(!index.is_dirty());

    index.delete(&quad("subject0", "label", "test"));
    assert!(index.is_dirty());
    assert!(index.search("test").is_empty());
}

#[test]
fn test_scores_parallel_terms() {
    let mut index = test_index();
    index.add(&quad("subject0", "label", "test"));
    index.add(&quad("subject1", "label", "text"));
    index.add(&quad("subject2", "description", "tests"));

    let results = index.search("test");
    let pairs: Vec<(&Term, f64)> = results.iter_scored().collect();

    assert_eq!(pairs.len(), results.len());
    assert_eq!(pairs[0], (&results[0], results.scores()[0]));
    assert_eq!(results[0], ex("subject0"));
    assert_eq!(results.scores()[0], 0.0);
    assert!(results.scores().windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_exact_match_in_one_field_ranks_first() {
    let mut index = TextIndex::new(&[
        FieldSpec::new(ex("label").value()),
        FieldSpec::new(ex("description").value()),
    ])
    .unwrap();
    index.add(&quad("subject0", "label", "test"));
    index.add(&quad("subject1", "label", "tests"));
    index.add(&quad("subject1", "description", "testing"));

    let results = index.search("test");

    assert_eq!(results.terms(), [ex("subject0"), ex("subject1")]);
    assert_eq!(results.scores()[0], 0.0);
    assert!(results.scores()[1] > 0.0 && results.scores()[1] <= 0.6);
}
