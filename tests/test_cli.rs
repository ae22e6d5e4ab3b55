/// End-to-end tests for the percolation binary
use anyhow::Result;
use std::process::Command;

fn percolation() -> Command {
    Command::new(env!("CARGO_BIN_EXE_percolation"))
}

#[test]
fn test_reports_summary() -> Result<()> {
    let output = percolation()
        .args(["-n", "10", "-T", "20", "--seed", "5", "--quiet"])
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "unexpected output: {stdout}");
    assert!(lines[0].starts_with("mean                    = "));
    assert!(lines[1].starts_with("stddev                  = "));
    assert!(lines[2].starts_with("95% confidence interval = ["));
    Ok(())
}

#[test]
fn test_seeded_output_is_stable() -> Result<()> {
    let run = || {
        percolation()
            .args(["-n", "12", "-T", "10", "-s", "77", "--quiet", "-t", "3"])
            .output()
    };
    let a = run()?;
    let b = run()?;
    assert!(a.status.success() && b.status.success());
    assert_eq!(a.stdout, b.stdout);
    Ok(())
}

#[test]
fn test_show_prints_grid() -> Result<()> {
    let output = percolation()
        .args(["-n", "5", "-T", "2", "-s", "1", "--show", "--quiet"])
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let grid: Vec<&str> = stdout
        .lines()
        .filter(|l| l.len() == 5 && l.chars().all(|c| matches!(c, '#' | '.' | 'o')))
        .collect();
    assert_eq!(grid.len(), 5, "expected a 5x5 grid in: {stdout}");
    assert!(grid[0].contains('o'));
    assert!(grid[4].contains('o'));
    assert!(stdout.contains("open sites = "));
    Ok(())
}

#[test]
fn test_zero_size_fails() -> Result<()> {
    let output = percolation().args(["-n", "0", "--quiet"]).output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        stderr.matches("invalid grid size").count(),
        1,
        "size error should be reported exactly once, got: {stderr}"
    );
    assert!(stderr.contains("grid setup failed"), "got: {stderr}");
    Ok(())
}

#[test]
fn test_negative_size_fails() -> Result<()> {
    let output = percolation().args(["-n", "-1", "--quiet"]).output()?;
    assert!(!output.status.success(), "negative size must be rejected");
    Ok(())
}

#[test]
fn test_zero_trials_fails() -> Result<()> {
    let output = percolation()
        .args(["-n", "3", "-T", "0", "--quiet"])
        .output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at least one trial"), "got: {stderr}");
    Ok(())
}
