use polars::prelude::*;
use purchase_etl::{CliConfig, EtlEngine, EtlError, LocalStorage, PurchasePipeline};
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

fn output_path(dir: &TempDir) -> String {
    dir.path()
        .join("summary.parquet")
        .to_str()
        .unwrap()
        .to_string()
}

fn config(input: String, output: String) -> CliConfig {
    CliConfig {
        input,
        output,
        verbose: false,
        monitor: false,
    }
}

async fn run(config: CliConfig) -> purchase_etl::Result<String> {
    let pipeline = PurchasePipeline::new(LocalStorage::new(), config);
    EtlEngine::new(pipeline).run().await
}

fn read_parquet(path: &str) -> DataFrame {
    let file = std::fs::File::open(path).unwrap();
    ParquetReader::new(file).finish().unwrap()
}

#[tokio::test]
async fn test_end_to_end_summary() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        &temp_dir,
        "input.csv",
        "Customer ID,Purchase Amount\n\
         C1,50\n\
         C1,150\n\
         C1,600\n\
         C2,\n\
         C2,-10\n",
    );
    let output = output_path(&temp_dir);

    let result = run(config(input, output.clone())).await;
    assert!(result.is_ok());

    let frame = read_parquet(&output);

    // C2 only had invalid rows, so it produces no summary at all.
    assert_eq!(frame.height(), 1);

    let ids = frame.column("customer_id").unwrap();
    assert_eq!(ids.str().unwrap().get(0), Some("C1"));

    let avg = frame
        .column("avg_purchase")
        .unwrap()
        .f64()
        .unwrap()
        .get(0)
        .unwrap();
    assert!((avg - 800.0 / 3.0).abs() < 1e-9);

    let uniques = frame
        .column("unique_categories")
        .unwrap()
        .u32()
        .unwrap()
        .get(0)
        .unwrap();
    assert_eq!(uniques, 3);
}

#[tokio::test]
async fn test_second_run_fully_replaces_the_first() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        &temp_dir,
        "input.csv",
        "Customer ID,Purchase Amount\nC1,200\nC1,600\nC2,40\n",
    );
    let output = output_path(&temp_dir);

    run(config(input.clone(), output.clone())).await.unwrap();
    let first = read_parquet(&output)
        .sort(["customer_id"], Default::default())
        .unwrap();

    run(config(input, output.clone())).await.unwrap();
    let second = read_parquet(&output)
        .sort(["customer_id"], Default::default())
        .unwrap();

    assert_eq!(first.height(), 2);
    assert!(first.equals(&second));

    let avgs = first.column("avg_purchase").unwrap().f64().unwrap().clone();
    assert_eq!(avgs.get(0), Some(400.0));
    assert_eq!(avgs.get(1), Some(40.0));

    let uniques = first
        .column("unique_categories")
        .unwrap()
        .u32()
        .unwrap()
        .clone();
    assert_eq!(uniques.get(0), Some(2));
    assert_eq!(uniques.get(1), Some(1));
}

#[tokio::test]
async fn test_missing_input_is_source_unavailable() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir
        .path()
        .join("nope.csv")
        .to_str()
        .unwrap()
        .to_string();

    let err = run(config(missing, output_path(&temp_dir))).await.unwrap_err();
    assert!(matches!(err, EtlError::SourceUnavailable { .. }));
}

#[tokio::test]
async fn test_missing_required_column_is_schema_mismatch() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "input.csv", "Customer ID,Total\nC1,100\n");

    let err = run(config(input, output_path(&temp_dir))).await.unwrap_err();
    match err {
        EtlError::SchemaMismatch { field } => assert_eq!(field, "purchase_amount"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_fatal_error_leaves_prior_sink_content_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let good_input = write_input(
        &temp_dir,
        "good.csv",
        "Customer ID,Purchase Amount\nC1,250\n",
    );
    let bad_input = write_input(&temp_dir, "bad.csv", "Customer ID,Total\nC1,250\n");
    let output = output_path(&temp_dir);

    run(config(good_input, output.clone())).await.unwrap();
    let before = std::fs::read(&output).unwrap();

    // Schema mismatch fails before the load phase ever runs.
    run(config(bad_input, output.clone())).await.unwrap_err();
    let after = std::fs::read(&output).unwrap();

    assert_eq!(before, after);
}

#[tokio::test]
async fn test_ragged_row_is_malformed_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        &temp_dir,
        "input.csv",
        "Customer ID,Purchase Amount\nC1,100\nC2,200,extra\n",
    );
    let output = output_path(&temp_dir);

    let err = run(config(input, output.clone())).await.unwrap_err();
    assert!(matches!(err, EtlError::MalformedInput { .. }));
    assert!(!std::path::Path::new(&output).exists());
}
