use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("orderpad").unwrap();
    cmd.current_dir(dir.path()).env("HOME", dir.path());
    cmd
}

fn add(dir: &TempDir, product: &str, quantity: &str, warehouse: &str) {
    cmd_in(dir)
        .args(["add", product, quantity, warehouse])
        .assert()
        .success();
}

#[test]
fn empty_list_shows_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    cmd_in(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No orders recorded."));
}

#[test]
fn add_then_list_renders_the_order() {
    let dir = tempfile::tempdir().unwrap();

    cmd_in(&dir)
        .args(["add", "Hex bolts M8", "250", "Primary"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Order added (#1): Hex bolts M8"));

    cmd_in(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Hex bolts M8"))
        .stdout(predicates::str::contains("250"))
        .stdout(predicates::str::contains("Primary"))
        .stdout(predicates::str::contains("No orders recorded.").not());
}

#[test]
fn invalid_add_reports_each_field_and_saves_nothing() {
    let dir = tempfile::tempdir().unwrap();

    cmd_in(&dir)
        .args(["add", "   ", "0", "garage"])
        .assert()
        .failure()
        .stdout(predicates::str::contains("Product cannot be empty"))
        .stdout(predicates::str::contains(
            "Quantity must be an integer greater than 0",
        ))
        .stdout(predicates::str::contains(
            "Warehouse must be Primary, Secondary or Temporary",
        ));

    cmd_in(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No orders recorded."));
}

#[test]
fn deleted_ids_are_never_reused() {
    let dir = tempfile::tempdir().unwrap();
    add(&dir, "A", "1", "Primary");
    add(&dir, "B", "1", "Secondary");
    add(&dir, "C", "1", "Temporary");

    cmd_in(&dir)
        .args(["delete", "2", "--yes"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Order deleted (#2): B"));

    cmd_in(&dir)
        .args(["add", "D", "1", "Primary"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Order added (#4): D"));
}

#[test]
fn delete_prompt_cancels_unless_confirmed() {
    let dir = tempfile::tempdir().unwrap();
    add(&dir, "Bolts", "10", "Primary");

    cmd_in(&dir)
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Operation cancelled."));

    cmd_in(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Bolts"));

    cmd_in(&dir)
        .args(["delete", "1"])
        .write_stdin("Y\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Order deleted (#1): Bolts"));
}

#[test]
fn delete_of_absent_id_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    add(&dir, "Bolts", "10", "Primary");

    cmd_in(&dir)
        .args(["delete", "42", "--yes"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No order with id 42."));
}

#[test]
fn one_shot_edit_commits_and_invalid_edit_leaves_record_alone() {
    let dir = tempfile::tempdir().unwrap();
    add(&dir, "Bolts", "10", "Primary");

    cmd_in(&dir)
        .args(["edit", "1", "quantity", "7"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Order updated (#1): quantity = 7"));

    cmd_in(&dir)
        .args(["edit", "1", "quantity", "abc"])
        .assert()
        .failure()
        .stdout(predicates::str::contains(
            "Quantity must be an integer greater than 0",
        ));

    cmd_in(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("7"));
}

#[test]
fn edit_stores_the_trimmed_product() {
    let dir = tempfile::tempdir().unwrap();
    add(&dir, "Bolts", "10", "Primary");

    cmd_in(&dir)
        .args(["edit", "1", "product", "  Washers "])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Order updated (#1): product = Washers",
        ));
}

#[test]
fn corrupted_storage_degrades_to_an_empty_book() {
    let dir = tempfile::tempdir().unwrap();
    add(&dir, "Bolts", "10", "Primary");

    std::fs::write(dir.path().join(".orderpad/orders.json"), "{broken").unwrap();

    cmd_in(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No orders recorded."));
}

#[test]
fn trig_reports_rounded_values_and_infinite_tangent() {
    let dir = tempfile::tempdir().unwrap();

    cmd_in(&dir)
        .args(["trig", "45"])
        .assert()
        .success()
        .stdout(predicates::str::contains("sin(45°) = 0.7071"))
        .stdout(predicates::str::contains("cos(45°) = 0.7071"));

    cmd_in(&dir)
        .args(["trig", "90"])
        .assert()
        .success()
        .stdout(predicates::str::contains("tan(90°) = infinite"));
}

#[test]
fn trig_rejects_out_of_range_angles() {
    let dir = tempfile::tempdir().unwrap();

    for angle in ["370", "-5"] {
        cmd_in(&dir)
            .args(["trig", angle])
            .assert()
            .failure()
            .stderr(predicates::str::contains("between 0 and 360"));
    }
}

#[test]
fn config_disables_the_delete_prompt() {
    let dir = tempfile::tempdir().unwrap();
    add(&dir, "Bolts", "10", "Primary");

    cmd_in(&dir)
        .args(["config", "confirm-delete", "false"])
        .assert()
        .success()
        .stdout(predicates::str::contains("confirm-delete = false"));

    // No prompt, no stdin needed.
    cmd_in(&dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Order deleted (#1): Bolts"));
}
