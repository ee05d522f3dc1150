//! Init command - scaffold a new webes project
//!
//! Creates the `dist/` and `dev/` trees plus a few starter files. Existing
//! files are left untouched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use webes_scanner::output::text::header;

/// Directories created under the project root
pub const PROJECT_DIRS: [&str; 9] = [
    "dist/imgs",
    "dist/pages",
    "dist/scripts",
    "dist/styles",
    "dev/components",
    "dev/imgs",
    "dev/pages",
    "dev/scripts",
    "dev/styles",
];

const PROJECT_TREE: &str = "\
<root>
  ┣━ dist/
  ┃   ┣━ imgs/
  ┃   ┣━ pages/
  ┃   ┣━ scripts/
  ┃   ┣━ styles/
  ┃   ┗━ index.html
  ┗━ dev/
      ┣━ components/
      ┣━ imgs/
      ┣━ pages/
      ┣━ scripts/
      ┗━ styles/";

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en-us">
<head>
    <title></title>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="">
    <meta name="author" content="">
    <link rel="stylesheet" href="styles/style.css">
</head>
<body>

    <script type="text/javascript" src="scripts/script.js"></script>
</body>
</html>
"#;

const STYLE_CSS: &str = "html, body {
    margin: 0;
    background-color: #333;
    color: white;
}
";

const HELLO_WORLD_COMPONENT: &str = "<template>
    <div class='_helloWorld'>
        <h1>Hello, World!</h1>
    </div>
</template>


<style>
    h1 {
        font-size: 250%;
    }
</style>


<script>

</script>
";

const SCRIPT_JS: &str = "console.log('Hello World!');\n";

/// Starter files, relative to the project root
pub const STARTER_FILES: [(&str, &str); 4] = [
    ("dist/index.html", INDEX_HTML),
    ("dev/styles/style.css", STYLE_CSS),
    ("dev/components/_helloWorld.webes", HELLO_WORLD_COMPONENT),
    ("dev/scripts/script.js", SCRIPT_JS),
];

/// Initialize a project under `root` and print the resulting tree
pub fn execute(root: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", header("Initializing Project"));

    let created = make_project_tree(root)?;
    for path in &created {
        tracing::info!("Created {}", path.display());
    }

    println!("New project with directory tree:");
    println!("{PROJECT_TREE}");
    println!("\nCreated {} files in {}", created.len(), root.display());
    Ok(())
}

/// Create all project directories and any missing starter files.
///
/// Returns the starter files that were written.
pub fn make_project_tree(root: &Path) -> io::Result<Vec<PathBuf>> {
    for dir in PROJECT_DIRS {
        fs::create_dir_all(root.join(dir))?;
    }

    let mut created = Vec::new();
    for (relative, content) in STARTER_FILES {
        let path = root.join(relative);
        if path.exists() {
            tracing::debug!("Keeping existing {}", path.display());
            continue;
        }
        fs::write(&path, content)?;
        created.push(path);
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_make_project_tree() {
        let dir = TempDir::new().unwrap();
        let created = make_project_tree(dir.path()).unwrap();

        assert_eq!(created.len(), STARTER_FILES.len());
        for relative in PROJECT_DIRS {
            assert!(dir.path().join(relative).is_dir(), "{relative} missing");
        }
    }

    #[test]
    fn test_existing_files_are_kept() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("dev/scripts")).unwrap();
        fs::write(dir.path().join("dev/scripts/script.js"), "custom();").unwrap();

        let created = make_project_tree(dir.path()).unwrap();

        assert_eq!(created.len(), STARTER_FILES.len() - 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("dev/scripts/script.js")).unwrap(),
            "custom();"
        );
    }
}
