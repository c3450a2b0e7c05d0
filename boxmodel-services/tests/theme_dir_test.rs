use boxmodel_services::ThemeDirectory;
use boxmodel_theme::color::Color;
use boxmodel_theme::properties::ThemeProperty;
use boxmodel_theme::theme_resolver::ThemeResolver;
use boxmodel_theme::ThemeRegistry;
use std::fs;
use std::path::PathBuf;

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("boxmodel_services_theme_dir_{}", name));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[tokio::test]
async fn test_theme_files_are_sorted_and_filtered() {
    let dir = test_dir("list");
    fs::write(dir.join("Zeta.theme"), "").unwrap();
    fs::write(dir.join("Alpha.theme"), "").unwrap();
    fs::write(dir.join("readme.md"), "").unwrap();
    fs::create_dir_all(dir.join("Folder.theme")).unwrap();

    let files = ThemeDirectory::new(&dir).theme_files().await.unwrap();
    assert_eq!(files, vec![dir.join("Alpha.theme"), dir.join("Zeta.theme")]);
}

#[cfg(unix)]
#[tokio::test]
async fn test_symlinked_theme_files_are_listed() {
    let dir = test_dir("symlink");
    let shared = test_dir("symlink_shared");
    fs::write(shared.join("Shared.theme"), "radius = 2\n").unwrap();
    std::os::unix::fs::symlink(shared.join("Shared.theme"), dir.join("Linked.theme")).unwrap();
    std::os::unix::fs::symlink(shared.join("Gone.theme"), dir.join("Dangling.theme")).unwrap();
    std::os::unix::fs::symlink(&shared, dir.join("Folder.theme")).unwrap();

    let themes = ThemeDirectory::new(&dir);
    assert_eq!(themes.theme_files().await.unwrap(), vec![dir.join("Linked.theme")]);

    let mut resolver = ThemeResolver::new();
    let report = themes.load_into(&mut resolver).await.unwrap();
    assert_eq!(report.loaded, vec!["Linked"]);
    assert_eq!(resolver.resolve("Linked").unwrap().radius, 2);
}

#[tokio::test]
async fn test_missing_directory_has_no_themes() {
    let dir = std::env::temp_dir().join("boxmodel_services_theme_dir_missing");
    let _ = fs::remove_dir_all(&dir);
    let themes = ThemeDirectory::new(&dir);
    assert!(themes.theme_files().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_load_into_resolver() {
    let dir = test_dir("load");
    fs::write(
        dir.join("Ember.theme"),
        "base = \"Dark\"\nhighlight_color = \"#ff4500\"\n",
    )
    .unwrap();
    fs::write(dir.join("Broken.theme"), "highlight_color = ").unwrap();
    fs::write(dir.join("Dark.theme"), "radius = 0\n").unwrap();

    let mut resolver = ThemeResolver::new();
    let report = ThemeDirectory::new(&dir).load_into(&mut resolver).await.unwrap();

    assert_eq!(report.loaded, vec!["Ember".to_string()]);
    let skipped: Vec<PathBuf> = report.skipped.iter().map(|(path, _)| path.clone()).collect();
    assert_eq!(skipped, vec![dir.join("Broken.theme"), dir.join("Dark.theme")]);

    let ember = resolver.resolve("Ember").unwrap();
    let dark = ThemeRegistry::builtin().get("Dark").unwrap();
    assert_eq!(ember.diff(dark), vec![ThemeProperty::HighlightColor]);
    assert_eq!(ember.highlight_color, Color::from_rgb(0xff4500));

    // The preset is untouched by the file that tried to shadow it.
    assert_eq!(&resolver.resolve("Dark").unwrap(), dark);
}

#[tokio::test]
async fn test_save_then_load() {
    let dir = test_dir("save");
    let themes = ThemeDirectory::new(&dir);
    let record = ThemeRegistry::builtin().resolve("Tiffany").unwrap();

    let path = themes.save(&record, "Pearl").unwrap();
    assert_eq!(path, dir.join("Pearl.theme"));
    assert!(themes.save(&record, "Pearl").is_err());

    let resolver = ThemeResolver::new();
    let (name, loaded) = themes.load_theme(&path, &resolver).await.unwrap();
    assert_eq!(name, "Pearl");
    assert_eq!(loaded, record);
}
