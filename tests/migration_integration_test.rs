use anyhow::Result;
use menu_migrate::{FileReport, LocalStorage, MigrationRunner, Rewriter};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const USERS_PAGE: &str = include_str!("fixtures/UsersPage.tsx");
const USERS_PAGE_MIGRATED: &str = include_str!("fixtures/UsersPage.migrated.tsx");
const PV_PAGE: &str = include_str!("fixtures/PVPage.tsx");
const PV_PAGE_MIGRATED: &str = include_str!("fixtures/PVPage.migrated.tsx");

fn write_page(root: &Path, relative: &str, content: &str) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

fn targets(paths: &[&str]) -> Vec<String> {
    paths.iter().map(|p| p.to_string()).collect()
}

#[test]
fn test_pipeline_migrates_page_fixtures() -> Result<()> {
    let rewriter = Rewriter::new()?;

    let users = rewriter.rewrite(USERS_PAGE);
    assert!(users.changed());
    assert_eq!(users.content, USERS_PAGE_MIGRATED);

    let pv = rewriter.rewrite(PV_PAGE);
    assert_eq!(pv.content, PV_PAGE_MIGRATED);
    let counts: Vec<_> = pv.rules.iter().map(|r| r.replacements).collect();
    assert_eq!(counts, vec![1, 1, 1]);

    Ok(())
}

#[test]
fn test_migrated_page_has_wrapper_shape() -> Result<()> {
    let output = Rewriter::new()?.rewrite(USERS_PAGE).content;

    assert!(!output.contains("users-layout"));
    assert!(!output.contains("users-content"));
    assert!(!output.contains("<Menu />"));
    assert!(output.contains("    <Menu>\n      <div className=\"users-container\">"));
    assert!(output.ends_with(
        "      )}\n      </div>\n    </Menu>\n  );\n};\n\nexport default UsersPage;\n"
    ));

    Ok(())
}

#[test]
fn test_second_pass_is_noop() -> Result<()> {
    let rewriter = Rewriter::new()?;

    for page in [USERS_PAGE, PV_PAGE] {
        let first = rewriter.rewrite(page);
        let second = rewriter.rewrite(&first.content);
        assert!(!second.changed());
        assert_eq!(second.content, first.content);
        assert_eq!(second.total_replacements(), 0);
    }

    Ok(())
}

#[test]
fn test_missing_second_target_does_not_stop_the_rest() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    write_page(root, "src/components/MyContractsPage.tsx", USERS_PAGE)?;
    write_page(root, "src/components/UsersMappingPage.tsx", PV_PAGE)?;
    write_page(root, "src/components/PVPage.tsx", PV_PAGE)?;

    let storage = LocalStorage::new(root.to_str().unwrap().to_string());
    let runner = MigrationRunner::new(storage)?;
    let targets = targets(&[
        "src/components/MyContractsPage.tsx",
        "src/components/UsersPage.tsx",
        "src/components/UsersMappingPage.tsx",
        "src/components/PVPage.tsx",
    ]);

    let mut out = Vec::new();
    let summary = runner.run(&targets, &mut out);
    let printed = String::from_utf8(out)?;
    let lines: Vec<_> = printed.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "✓ Updated src/components/MyContractsPage.tsx");
    assert!(lines[1].starts_with("✗ Error updating src/components/UsersPage.tsx: "));
    assert_eq!(lines[2], "✓ Updated src/components/UsersMappingPage.tsx");
    assert_eq!(lines[3], "✓ Updated src/components/PVPage.tsx");

    assert_eq!(summary.updated(), 3);
    assert_eq!(summary.failed(), 1);
    assert!(matches!(summary.reports[1], FileReport::Failed { .. }));

    assert_eq!(
        fs::read_to_string(root.join("src/components/MyContractsPage.tsx"))?,
        USERS_PAGE_MIGRATED
    );
    assert_eq!(
        fs::read_to_string(root.join("src/components/PVPage.tsx"))?,
        PV_PAGE_MIGRATED
    );
    assert!(!root.join("src/components/UsersPage.tsx").exists());

    Ok(())
}

#[test]
fn test_dry_run_leaves_files_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_page(temp_dir.path(), "UsersPage.tsx", USERS_PAGE)?;

    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    let runner = MigrationRunner::new(storage)?.with_dry_run(true);

    let mut out = Vec::new();
    let summary = runner.run(&targets(&["UsersPage.tsx"]), &mut out);

    assert_eq!(String::from_utf8(out)?, "✓ Would update UsersPage.tsx\n");
    assert_eq!(summary.updated(), 1);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("UsersPage.tsx"))?,
        USERS_PAGE
    );

    Ok(())
}

#[test]
fn test_atomic_writes_produce_same_result() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_page(temp_dir.path(), "pages/PVPage.tsx", PV_PAGE)?;

    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string())
        .with_atomic_writes(true);
    let runner = MigrationRunner::new(storage)?;
    let summary = runner.run(&targets(&["pages/PVPage.tsx"]), &mut Vec::new());

    assert_eq!(summary.failed(), 0);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("pages/PVPage.tsx"))?,
        PV_PAGE_MIGRATED
    );
    assert_eq!(fs::read_dir(temp_dir.path().join("pages"))?.count(), 1);

    Ok(())
}

#[test]
fn test_already_migrated_file_is_reported_unchanged() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_page(temp_dir.path(), "UsersPage.tsx", USERS_PAGE_MIGRATED)?;

    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    let runner = MigrationRunner::new(storage)?;

    let mut out = Vec::new();
    let summary = runner.run(&targets(&["UsersPage.tsx"]), &mut out);

    assert_eq!(String::from_utf8(out)?, "✓ Updated UsersPage.tsx\n");
    assert_eq!(summary.unchanged(), 1);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("UsersPage.tsx"))?,
        USERS_PAGE_MIGRATED
    );

    Ok(())
}
