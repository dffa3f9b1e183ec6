use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_battleship-skills"))
}

#[test]
fn board_command_prints_board() {
    let output = bin().arg("board").output().expect("failed to run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines[0], "Board (0=water, 3=ship, 5=affected):");
    assert_eq!(lines[2], "0 0 0 0 5 0 0 0 0 0");
    assert_eq!(lines[11], "0 0 0 0 0 0 5 0 0 0");
}

#[test]
fn board_command_json() {
    let output = bin()
        .args(["board", "--json"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["board"][6][6], 5);
    assert!(v["masks"]["diamond"].is_array());
}

#[test]
fn board_command_rejects_even_size() {
    let output = bin()
        .args(["board", "--size", "4"])
        .output()
        .expect("failed to run binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must be odd"));
}

#[test]
fn fleet_out_of_bounds_fails() {
    let output = bin()
        .args(["fleet", "--second-row", "8"])
        .output()
        .expect("failed to run binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of bounds"));
}

#[test]
fn fleet_huge_row_reports_out_of_bounds() {
    let row = usize::MAX.to_string();
    let output = bin()
        .args(["fleet", "--second-row", row.as_str()])
        .output()
        .expect("failed to run binary");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of bounds"));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn board_command_rejects_oversized_mask() {
    let output = bin()
        .args(["board", "--size", "10000001"])
        .output()
        .expect("failed to run binary");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at most 21"));
}

#[test]
fn fleet_overlap_fails() {
    let output = bin()
        .args(["fleet", "--second-row", "0", "--second-col", "2"])
        .output()
        .expect("failed to run binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("overlaps"));
}

#[test]
fn fleet_random_with_seed_is_stable() {
    let run = || {
        bin()
            .args(["fleet", "--random", "--seed", "99"])
            .output()
            .expect("failed to run binary")
    };
    let a = run();
    let b = run();
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn mask_command_prints_cone() {
    let output = bin()
        .args(["mask", "cone", "--size", "3"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert_eq!(stdout, "cone mask 3x3 (1=affected, 0=not):\n0 1 0\n1 1 1\n1 1 1\n\n");
}
