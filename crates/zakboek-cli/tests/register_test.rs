use zakboek_testing::TestWorld;
use zakboek_testing::fixtures::StatementBuilder;
use zakboek_types::{Amount, BagId, BagType};

#[test]
fn test_register_records_pending_rows() {
    let world = TestWorld::new();
    world.run(&["init"]).expect("Failed to run init");

    let result = world
        .run(&["register", "8412", "8413", "--date", "2024-02-01"])
        .expect("Failed to run register");
    assert!(result.success(), "register failed: {}", result.stderr());

    let rows = world.read_workbook().expect("Failed to read workbook");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, BagId::new(8412));
    assert!(!rows[0].processed);
    assert_eq!(rows[0].amount, None);
    // Default config carries a single source, so --source may be omitted
    assert_eq!(rows[0].source.as_ref().map(|s| s.as_str()), Some("Supermarkt"));
    assert_eq!(rows[0].bag_type, Some(BagType::Mini));
}

#[test]
fn test_register_strips_barcode_prefix() {
    let world = TestWorld::new();
    world.run(&["init"]).expect("Failed to run init");

    let result = world
        .run(&["register", "19915718412", "--date", "2024-02-01"])
        .expect("Failed to run register");
    assert!(result.success(), "register failed: {}", result.stderr());

    let rows = world.read_workbook().expect("Failed to read workbook");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, BagId::new(8412));
}

#[test]
fn test_register_reads_codes_from_stdin() {
    let world = TestWorld::new();
    world.run(&["init"]).expect("Failed to run init");

    let result = world
        .run_with_stdin(&["register", "--date", "2024-02-01"], "8412\n8413\n\n")
        .expect("Failed to run register");
    assert!(result.success(), "register failed: {}", result.stderr());

    let rows = world.read_workbook().expect("Failed to read workbook");
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_register_same_bag_twice_is_rejected_not_fatal() {
    let world = TestWorld::new();
    world.run(&["init"]).expect("Failed to run init");

    world
        .run(&["register", "8412", "--date", "2024-02-01"])
        .expect("Failed to run register");

    let result = world
        .run(&["register", "8412", "--date", "2024-02-02", "--format", "json"])
        .expect("Failed to rerun register");
    assert!(result.success(), "duplicates must not fail the run");

    let outcomes = result.json().expect("register output was not JSON");
    assert_eq!(outcomes[0]["status"], "duplicate_rejected");

    let rows = world.read_workbook().expect("Failed to read workbook");
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_register_unreadable_code_gets_its_own_verdict() {
    let world = TestWorld::new();
    world.run(&["init"]).expect("Failed to run init");

    let result = world
        .run(&[
            "register", "8412", "teacup", "8413", "--date", "2024-02-01", "--format", "json",
        ])
        .expect("Failed to run register");
    assert!(result.success(), "one bad code must not sink the rest");

    let outcomes = result.json().expect("register output was not JSON");
    assert_eq!(outcomes[0]["status"], "inserted");
    assert_eq!(outcomes[1]["status"], "error");
    assert_eq!(outcomes[1]["code"], "teacup");
    assert_eq!(outcomes[2]["status"], "inserted");

    let rows = world.read_workbook().expect("Failed to read workbook");
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_register_needs_source_when_several_configured() {
    let world = TestWorld::new();
    world.run(&["init"]).expect("Failed to run init");

    std::fs::write(
        world.data_dir().join("config.toml"),
        "sources = [\"Supermarkt\", \"Markt\"]\n",
    )
    .expect("Failed to write config");

    let result = world
        .run(&["register", "8412", "--date", "2024-02-01"])
        .expect("Failed to run register");
    assert!(!result.success());
    assert!(result.stderr().contains("--source"));

    let result = world
        .run(&[
            "register", "8412", "--source", "Markt", "--date", "2024-02-01",
        ])
        .expect("Failed to run register");
    assert!(result.success(), "register failed: {}", result.stderr());

    let rows = world.read_workbook().expect("Failed to read workbook");
    assert_eq!(rows[0].source.as_ref().map(|s| s.as_str()), Some("Markt"));
}

#[test]
fn test_registered_bag_reconciles_with_its_statement() {
    let world = TestWorld::new();
    world.run(&["init"]).expect("Failed to run init");

    world
        .run(&["register", "8412", "--type", "small", "--date", "2024-02-01"])
        .expect("Failed to run register");

    let statement = world
        .write_statement(
            "20240229.chr",
            &StatementBuilder::new("29-2-2024").with_bag(8412, "1,75").build(),
        )
        .expect("Failed to write statement");
    let result = world
        .run(&["process", statement.to_str().unwrap()])
        .expect("Failed to run process");
    assert!(result.success(), "process failed: {}", result.stderr());

    let rows = world.read_workbook().expect("Failed to read workbook");
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert!(row.processed);
    assert_eq!(row.amount, Some(Amount::from_cents(175)));
    // Registration half survives the reconciliation
    assert_eq!(row.bag_type, Some(BagType::Small));
    assert!(row.submission_date.is_some());
}
