
use frameflow_core::{
    CreateData, Creator, EngineError, Fingerprint, Load, ParamDict, Schema, WorkflowCompileError,
    Yielded,
};
use serde_json::json;
use test_support::{Call, RecordingEngine};

fn producer() -> Fingerprint {
    Fingerprint::of(&json!("upstream"))
}

#[test]
fn yielded_file_is_loaded_from_its_path() {
    let engine = RecordingEngine::new();
    let node = CreateData::new(Yielded::file(producer(), "/data/x.parquet"), None, None).unwrap();

    let out = node.create(&engine).expect("load should succeed");

    let expected = Call::Load {
        path: "/data/x.parquet".into(),
        format_hint: String::new(),
        columns: None,
        options: ParamDict::new(),
    };
    assert_eq!(out, expected);
    // Nunca se usa la conversión para un archivo.
    assert_eq!(engine.calls(), vec![expected]);
}

#[test]
fn in_process_yielded_is_converted_without_shape() {
    let engine = RecordingEngine::new();
    let handoff = Yielded::dataframe(producer(), json!([[1, 2]]));
    let node = CreateData::new(handoff, None, None).unwrap();

    node.create(&engine).unwrap();

    assert_eq!(
        engine.calls(),
        vec![Call::ToDf {
            data: json!([[1, 2]]),
            schema: None,
            metadata: None,
        }]
    );
}

#[test]
fn raw_payload_passes_schema_and_metadata_through() {
    let engine = RecordingEngine::new();
    let schema = Schema::parse("a:int,b:str").unwrap();
    let meta = ParamDict::new().with("owner", "team-a");
    let node =
        CreateData::new(json!([[1, "x"]]), Some(schema.clone()), Some(meta.clone())).unwrap();

    node.create(&engine).unwrap();

    assert_eq!(
        engine.calls(),
        vec![Call::ToDf {
            data: json!([[1, "x"]]),
            schema: Some(schema),
            metadata: Some(meta),
        }]
    );
}

#[test]
fn raw_payload_without_shape_passes_two_nones() {
    let engine = RecordingEngine::new();
    CreateData::raw(json!([1, 2, 3])).create(&engine).unwrap();
    assert_eq!(
        engine.calls(),
        vec![Call::ToDf {
            data: json!([1, 2, 3]),
            schema: None,
            metadata: None,
        }]
    );
}

#[test]
fn load_node_forwards_every_parameter() {
    let engine = RecordingEngine::new();
    let params = ParamDict::new()
        .with("path", "/data/events.jsonl")
        .with("fmt", "jsonl")
        .with("columns", json!(["id", "ts"]))
        .with("params", json!({"schema": "id:long,ts:str"}));
    let node = Load::new(&params).unwrap();

    node.create(&engine).unwrap();

    assert_eq!(
        engine.calls(),
        vec![Call::Load {
            path: "/data/events.jsonl".into(),
            format_hint: "jsonl".into(),
            columns: Some(vec!["id".into(), "ts".into()]),
            options: ParamDict::new().with("schema", "id:long,ts:str"),
        }]
    );
}

#[test]
fn construction_fails_before_any_engine_call() {
    let engine = RecordingEngine::new();
    let result = CreateData::new(
        Yielded::dataframe(producer(), json!([[1]])),
        Some(Schema::parse("a:int").unwrap()),
        None,
    );

    assert!(matches!(
        result,
        Err(WorkflowCompileError::YieldedWithShape { schema: true, .. })
    ));
    assert!(engine.calls().is_empty());
}

#[test]
fn engine_errors_are_propagated_unchanged() {
    let access = EngineError::DataAccess {
        path: "/data/x.parquet".into(),
        reason: "not found".into(),
    };
    let engine = RecordingEngine::failing(access.clone());
    let node = CreateData::new(Yielded::file(producer(), "/data/x.parquet"), None, None).unwrap();
    assert_eq!(node.create(&engine), Err(access));

    let conversion = EngineError::Conversion("bad shape".into());
    let engine = RecordingEngine::failing(conversion.clone());
    assert_eq!(CreateData::raw(json!(1)).create(&engine), Err(conversion));
    // Un único intento: sin reintentos.
    assert_eq!(engine.calls().len(), 1);
}

#[test]
fn sibling_nodes_are_independent() {
    let engine = RecordingEngine::new();
    let failing = RecordingEngine::failing(EngineError::Conversion("boom".into()));
    let a = CreateData::raw(json!([1]));
    let b = CreateData::raw(json!([2]));

    assert!(a.create(&failing).is_err());
    assert!(b.create(&engine).is_ok());
}

#[test]
fn creators_work_as_trait_objects() {
    let engine = RecordingEngine::new();
    let nodes: Vec<Box<dyn Creator<RecordingEngine>>> = vec![
        Box::new(CreateData::raw(json!([1]))),
        Box::new(Load::from_parts("/x.json", "json", None, ParamDict::new())),
    ];
    let kinds: Vec<&str> = nodes.iter().map(|n| n.kind()).collect();
    assert_eq!(kinds, vec!["create_data", "load"]);
    for n in &nodes {
        n.create(&engine).unwrap();
    }
    assert_eq!(engine.calls().len(), 2);
}
