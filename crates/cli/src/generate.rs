//! `typeschema generate`

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use typeschema_core::{GeneratorConfig, SchemaGenerator};

use crate::load_registry;

/// Arguments for `typeschema generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Model file describing the types (TOML, or JSON by extension).
    #[arg(long)]
    pub model: PathBuf,

    /// Type to generate the schema for.
    #[arg(long = "type", conflicts_with = "all")]
    pub type_name: Option<String>,

    /// Generate a schema for every type in the model.
    #[arg(long, requires = "out_dir")]
    pub all: bool,

    /// Write the schema to this file instead of stdout.
    #[arg(long, conflicts_with = "all")]
    pub output: Option<PathBuf>,

    /// Directory receiving one `<Type>.schema.json` per type.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

/// Execute `typeschema generate`.
pub fn run_generate(args: &GenerateArgs, config: GeneratorConfig) -> Result<()> {
    let registry = load_registry(&args.model)?;
    let generator = SchemaGenerator::new(&registry).with_config(config);

    if args.all {
        let Some(out_dir) = &args.out_dir else {
            bail!("--all requires --out-dir");
        };
        return write_all(&generator, out_dir);
    }

    let Some(type_name) = &args.type_name else {
        bail!("either --type or --all is required");
    };

    let schema = generator
        .generate(type_name)
        .with_context(|| format!("failed to generate schema for {type_name}"))?;
    let json = generator.to_json_string(&schema)?;

    match &args.output {
        Some(path) => {
            write_file(path, &json)?;
            tracing::info!("Wrote schema for {} to {}", type_name, path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn write_all(generator: &SchemaGenerator<'_>, out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    for (name, schema) in generator.generate_all()? {
        let path = out_dir.join(format!("{name}.schema.json"));
        write_file(&path, &generator.to_json_string(&schema)?)?;
        tracing::debug!("Wrote {}", path.display());
    }
    Ok(())
}

fn write_file(path: &Path, json: &str) -> Result<()> {
    std::fs::write(path, format!("{json}\n"))
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MODEL: &str = r#"
[[types]]
name = "Point"
methods = [{ name = "getX" }, { name = "setX" }]
fields = [{ name = "x", type = "integer" }]

[[types]]
name = "Label"
methods = [{ name = "getText" }]
fields = [{ name = "text", type = "string" }]
"#;

    fn model(dir: &Path) -> PathBuf {
        let path = dir.join("model.toml");
        std::fs::write(&path, MODEL).unwrap();
        path
    }

    #[test]
    fn test_generate_single_type_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("point.json");
        let args = GenerateArgs {
            model: model(dir.path()),
            type_name: Some("Point".into()),
            all: false,
            output: Some(output.clone()),
            out_dir: None,
        };
        let config = GeneratorConfig {
            pretty: false,
            ..Default::default()
        };

        run_generate(&args, config).unwrap();
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "{\"type\":\"object\",\"properties\":{\"x\":{\"type\":\"integer\"}}}\n"
        );
    }

    #[test]
    fn test_generate_all_writes_one_file_per_type() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("schemas");
        let args = GenerateArgs {
            model: model(dir.path()),
            type_name: None,
            all: true,
            output: None,
            out_dir: Some(out_dir.clone()),
        };

        run_generate(&args, GeneratorConfig::default()).unwrap();
        assert!(out_dir.join("Point.schema.json").exists());
        assert!(out_dir.join("Label.schema.json").exists());
    }

    #[test]
    fn test_unknown_type_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs {
            model: model(dir.path()),
            type_name: Some("Missing".into()),
            all: false,
            output: None,
            out_dir: None,
        };
        assert!(run_generate(&args, GeneratorConfig::default()).is_err());
    }

    #[test]
    fn test_type_or_all_required() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs {
            model: model(dir.path()),
            type_name: None,
            all: false,
            output: None,
            out_dir: None,
        };
        let err = run_generate(&args, GeneratorConfig::default()).unwrap_err();
        assert!(err.to_string().contains("--type"));
    }
}
