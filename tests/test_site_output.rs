use std::fs;

use cookbook_gen::{html_filename, RecipeParser, SiteGenerator, Template, UnparseablePolicy};
use tempfile::tempdir;

const RECIPE_TEMPLATE: &str = "<h1>$title</h1><ul>$ingredients</ul><ol>$steps</ol><p>$servings $time $tags</p>";
const INDEX_TEMPLATE: &str = "<nav>$all_tags</nav><main>$recipes</main>";

#[test]
fn test_pages_are_written_under_title_slugs() {
    let dir = tempdir().unwrap();
    let recipe_path = dir.path().join("pasta.yaml");
    fs::write(
        &recipe_path,
        "title: Creamy Pasta with Peas & Ham\nservings: 2\ntags: [pasta]\ningredients:\n  - 2 slice bacon\n",
    )
    .unwrap();
    let out_dir = dir.path().join("www");

    let report = SiteGenerator::new(Template::new(RECIPE_TEMPLATE), &out_dir)
        .index_template(Template::new(INDEX_TEMPLATE))
        .generate(&[recipe_path])
        .unwrap();

    assert_eq!(report.pages.len(), 2);
    assert!(report.warnings.is_empty());

    let page_path = out_dir.join(html_filename("Creamy Pasta with Peas & Ham"));
    assert_eq!(
        page_path.file_name().unwrap().to_str().unwrap(),
        "creamy-pasta-with-peas-and-ham.html"
    );
    let page = fs::read_to_string(&page_path).unwrap();
    assert!(page.contains("<h1>Creamy Pasta with Peas & Ham</h1>"));
    assert!(page.contains(r#"<span class="unit">slice</span>"#));

    let index = fs::read_to_string(out_dir.join("index.html")).unwrap();
    assert!(index.contains(r#"href="creamy-pasta-with-peas-and-ham.html""#));
    assert!(index.contains(r#"data-tag="pasta""#));
}

#[test]
fn test_index_is_optional() {
    let dir = tempdir().unwrap();
    let recipe_path = dir.path().join("toast.yaml");
    fs::write(&recipe_path, "title: Toast\nservings: 1\n").unwrap();
    let out_dir = dir.path().join("www");

    let report = SiteGenerator::new(Template::new(RECIPE_TEMPLATE), &out_dir)
        .generate(&[recipe_path])
        .unwrap();

    assert_eq!(report.pages.len(), 1);
    assert!(!out_dir.join("index.html").exists());
}

#[test]
fn test_warnings_carry_the_source_path() {
    let dir = tempdir().unwrap();
    let recipe_path = dir.path().join("eggs.yaml");
    fs::write(
        &recipe_path,
        "title: Eggs\nservings: 1\ningredients:\n  - a pinch of salt\n",
    )
    .unwrap();

    let report = SiteGenerator::new(Template::new(RECIPE_TEMPLATE), dir.path().join("www"))
        .parser(RecipeParser::with_policy(UnparseablePolicy::Warn))
        .generate(&[recipe_path.clone()])
        .unwrap();

    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("eggs.yaml"));
    assert!(report.warnings[0].contains("a pinch of salt"));
}

#[test]
fn test_earlier_pages_survive_a_later_failure() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("a-toast.yaml");
    fs::write(&good, "title: Toast\nservings: 1\n").unwrap();
    let bad = dir.path().join("broken.yaml");
    fs::write(&bad, "servings: 1\n").unwrap();
    let out_dir = dir.path().join("www");

    let result = SiteGenerator::new(Template::new(RECIPE_TEMPLATE), &out_dir)
        .generate(&[good, bad]);

    assert!(result.is_err());
    // No rollback: the first document's page stays on disk
    assert!(out_dir.join("toast.html").exists());
}
