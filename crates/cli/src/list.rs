//! `typeschema list`

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::load_registry;

/// Arguments for `typeschema list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Model file describing the types.
    #[arg(long)]
    pub model: PathBuf,
}

/// Names of the model's types, built-ins excluded
pub fn type_names(args: &ListArgs) -> Result<Vec<String>> {
    let registry = load_registry(&args.model)?;
    Ok(registry.user_types().map(|ty| ty.name.clone()).collect())
}

/// Execute `typeschema list`.
pub fn run_list(args: &ListArgs) -> Result<()> {
    for name in type_names(args)? {
        println!("{name}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_not_listed() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("model.json");
        std::fs::write(
            &model,
            r#"{"types": [{"name": "Zebra"}, {"name": "Apple", "extends": "List"}]}"#,
        )
        .unwrap();

        let names = type_names(&ListArgs { model }).unwrap();
        assert_eq!(names, vec!["Apple", "Zebra"]);
    }

    #[test]
    fn test_missing_model_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = ListArgs {
            model: dir.path().join("absent.toml"),
        };
        let err = type_names(&args).unwrap_err();
        assert!(err.to_string().contains("failed to load model file"));
    }
}
