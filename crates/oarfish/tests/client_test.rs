//! End-to-end client tests against the in-memory executor

use oarfish::prelude::*;

fn sample_table() -> TableDef {
    TableDef::new("t1")
        .column(ColumnDef::new("c1", ColumnType::Integer).primary_key())
        .column(ColumnDef::new("c2", ColumnType::Vector(Some(3))))
}

#[test]
fn create_table_with_vector_index() {
    let mut indexes = IndexParams::new();
    indexes
        .register(
            "c2",
            IndexAlgorithm::Hnsw,
            "idx1",
            [("distance", "l2"), ("lib", "vsag")],
        )
        .unwrap();

    let mut engine = MemoryExecutor::new();
    let mut client = Client::new(&mut engine);
    client
        .create_table_with_indexes(&sample_table(), &indexes)
        .unwrap();

    assert_eq!(
        engine.statements(),
        &[
            "CREATE TABLE t1 (c1 INT PRIMARY KEY, c2 VECTOR(3))".to_string(),
            "CREATE VECTOR INDEX idx1 (c2) ON t1 WITH (distance=l2,lib=vsag,type=hnsw)"
                .to_string(),
        ]
    );
}

#[test]
fn check_first_skips_existing() {
    let mut engine = MemoryExecutor::new().with_table("t1");
    let mut client = Client::new(&mut engine);

    client.create_table(&sample_table()).unwrap();
    assert!(engine.statements().is_empty());
}

#[test]
fn check_first_disabled_always_executes() {
    let mut engine = MemoryExecutor::new().with_table("t1");
    let config = ClientConfig { check_first: false };
    let mut client = Client::with_config(&mut engine, config);

    client.create_table(&sample_table()).unwrap();
    assert_eq!(engine.statements().len(), 1);
}

#[test]
fn create_index_on_missing_table_fails() {
    let descriptor =
        IndexDescriptor::new("idx1", &["c2"], Some(IndexAlgorithm::IvfFlat)).unwrap();

    let mut engine = MemoryExecutor::new();
    let mut client = Client::new(&mut engine);

    let err = client.create_vector_index("nope", &descriptor).unwrap_err();
    assert!(matches!(err, OarfishError::NotFound(_)));
}

#[test]
fn create_vector_index_is_idempotent_under_check_first() {
    let descriptor =
        IndexDescriptor::new("idx1", &["c2"], Some(IndexAlgorithm::Hnsw)).unwrap();

    let mut engine = MemoryExecutor::new().with_table("t1");
    let mut client = Client::new(&mut engine);

    client.create_vector_index("t1", &descriptor).unwrap();
    client.create_vector_index("t1", &descriptor).unwrap();

    assert_eq!(engine.statements().len(), 1);
}

#[test]
fn plain_index_creation() {
    let mut engine = MemoryExecutor::new().with_table("t1");
    let mut client = Client::new(&mut engine);

    client.create_index("t1", "by_c1", &["c1"]).unwrap();
    assert_eq!(engine.statements(), &["CREATE INDEX by_c1 ON t1 (c1)".to_string()]);
}

#[test]
fn insert_encodes_vector_columns() {
    let table = sample_table();
    let mut engine = MemoryExecutor::new().with_table("t1");
    let mut client = Client::new(&mut engine);

    client
        .insert(
            &table,
            &Row::new().with("c1", 1i64).with("c2", vec![1.0f32, 2.0, 3.0]),
        )
        .unwrap();

    assert_eq!(
        engine.statements(),
        &["INSERT INTO t1 (c1, c2) VALUES (1, '[1,2,3]')".to_string()]
    );
}

#[test]
fn insert_rejects_wrong_dimension() {
    let table = sample_table();
    let mut engine = MemoryExecutor::new().with_table("t1");
    let mut client = Client::new(&mut engine);

    let err = client
        .insert(&table, &Row::new().with("c2", vec![1.0f32, 2.0]))
        .unwrap_err();
    assert!(matches!(
        err,
        OarfishError::DimensionMismatch {
            expected: 3,
            actual: 2
        }
    ));
}

#[test]
fn ann_search_renders_and_decodes() {
    let table = sample_table();
    let mut engine = MemoryExecutor::new().with_table("t1");
    engine.push_response(vec![Row::new()
        .with("c1", 1i64)
        .with("c2", SqlValue::Text("[1.0,2.0,3.0]".into()))
        .with("distance", 0.0f64)]);

    let mut client = Client::new(&mut engine);
    let search = AnnSearch::new(&table, "c2")
        .unwrap()
        .distance(DistanceFn::L2Distance)
        .limit(10)
        .output(&["c1", "c2"]);

    let hits = client
        .ann_search(&search, &Vector::new(vec![1.0, 2.0, 3.0]))
        .unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(
        hits[0].get("c2"),
        Some(&SqlValue::Vector(vec![1.0, 2.0, 3.0]))
    );

    assert_eq!(
        engine.statements(),
        &["SELECT c1, c2, l2_distance(c2, '[1,2,3]') AS distance FROM t1 \
           ORDER BY l2_distance(c2, '[1,2,3]') APPROXIMATE LIMIT 10"
            .to_string()]
    );
}

#[test]
fn ann_search_rejects_query_of_wrong_dimension() {
    let table = sample_table();
    let mut engine = MemoryExecutor::new().with_table("t1");
    let mut client = Client::new(&mut engine);

    let search = AnnSearch::new(&table, "c2").unwrap();
    let err = client
        .ann_search(&search, &Vector::new(vec![1.0, 2.0]))
        .unwrap_err();
    assert!(matches!(err, OarfishError::DimensionMismatch { .. }));
}

#[test]
fn ann_search_on_missing_table_fails() {
    let table = sample_table();
    let mut engine = MemoryExecutor::new();
    let mut client = Client::new(&mut engine);

    let search = AnnSearch::new(&table, "c2").unwrap();
    let err = client
        .ann_search(&search, &Vector::new(vec![1.0, 2.0, 3.0]))
        .unwrap_err();
    assert!(matches!(err, OarfishError::NotFound(_)));
}
