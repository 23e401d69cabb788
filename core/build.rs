use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const STAGE_SLUGS: [&str; 3] = ["waiting", "catching", "digesting"];

#[derive(Deserialize)]
struct ContentFile {
    title: String,
    subtitle: String,
    game_title: String,
    game_subtitle: String,
    instructions: String,
    reset_label: String,
    next_stage_label: String,
    facts_title: String,
    footer_tagline: String,
    footer_owner: String,
    stages: Vec<StageEntry>,
    facts: Vec<FactEntry>,
}

#[derive(Deserialize)]
struct StageEntry {
    slug: String,
    title: String,
    caption: String,
}

#[derive(Deserialize)]
struct FactEntry {
    text: String,
}

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=FLYTRAP_CONTENT_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let content_path = resolve_content_path(workspace_root);
    println!("cargo:rerun-if-changed={}", content_path.display());

    let contents = fs::read_to_string(&content_path).unwrap_or_else(|err| {
        panic!(
            "failed to read page content at {}: {err}",
            content_path.display()
        )
    });

    let content: ContentFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse page content at {}: {err}",
            content_path.display()
        )
    });

    validate_content(&content, &content_path);

    let mut output = String::new();
    writeln!(&mut output, "pub const PAGE: PageCopy = PageCopy {{").unwrap();
    let page_fields = [
        ("title", &content.title),
        ("subtitle", &content.subtitle),
        ("game_title", &content.game_title),
        ("game_subtitle", &content.game_subtitle),
        ("instructions", &content.instructions),
        ("reset_label", &content.reset_label),
        ("next_stage_label", &content.next_stage_label),
        ("facts_title", &content.facts_title),
        ("footer_tagline", &content.footer_tagline),
        ("footer_owner", &content.footer_owner),
    ];
    for (name, value) in page_fields {
        writeln!(&mut output, "    {name}: {},", rust_string(value)).unwrap();
    }
    writeln!(&mut output, "}};").unwrap();
    writeln!(&mut output).unwrap();

    writeln!(&mut output, "pub static STAGES: [StageCopy; 3] = [").unwrap();
    for entry in &content.stages {
        writeln!(&mut output, "    StageCopy {{").unwrap();
        writeln!(&mut output, "        slug: {},", rust_string(&entry.slug)).unwrap();
        writeln!(&mut output, "        title: {},", rust_string(&entry.title)).unwrap();
        writeln!(&mut output, "        caption: {},", rust_string(&entry.caption)).unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }
    writeln!(&mut output, "];").unwrap();
    writeln!(&mut output).unwrap();

    writeln!(&mut output, "pub const FACTS: &[&str] = &[").unwrap();
    for fact in &content.facts {
        writeln!(&mut output, "    {},", rust_string(&fact.text)).unwrap();
    }
    writeln!(&mut output, "];").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("content_catalog.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_content_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("FLYTRAP_CONTENT_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("content/flytrap.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn validate_content(content: &ContentFile, content_path: &Path) {
    let required = [
        ("title", &content.title),
        ("subtitle", &content.subtitle),
        ("game_title", &content.game_title),
        ("instructions", &content.instructions),
        ("reset_label", &content.reset_label),
        ("next_stage_label", &content.next_stage_label),
        ("facts_title", &content.facts_title),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            panic!("'{name}' cannot be empty in {}", content_path.display());
        }
    }

    if content.stages.len() != STAGE_SLUGS.len() {
        panic!(
            "expected {} stages in {}, found {}",
            STAGE_SLUGS.len(),
            content_path.display(),
            content.stages.len()
        );
    }
    for (entry, expected) in content.stages.iter().zip(STAGE_SLUGS) {
        if entry.slug != expected {
            panic!(
                "stage '{}' is out of order in {}; expected '{}'",
                entry.slug,
                content_path.display(),
                expected
            );
        }
        if entry.title.trim().is_empty() || entry.caption.trim().is_empty() {
            panic!(
                "stage '{}' needs both a title and a caption in {}",
                entry.slug,
                content_path.display()
            );
        }
    }

    if content.facts.is_empty() {
        panic!("page content {} has no facts", content_path.display());
    }
    if let Some(index) = content.facts.iter().position(|fact| fact.text.trim().is_empty()) {
        panic!(
            "fact #{} is empty in {}",
            index + 1,
            content_path.display()
        );
    }
}
