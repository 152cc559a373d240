//! Sass compilation via the `grass` crate.

use std::path::{Path, PathBuf};

use crate::compiler::StylesheetCompiler;
use crate::config::{OutputStyle, SassyConfig};
use crate::error::CompileError;

/// Pure-Rust Sass compiler.
#[derive(Debug, Clone, Default)]
pub struct GrassCompiler {
    style: OutputStyle,
    load_paths: Vec<PathBuf>,
}

impl GrassCompiler {
    pub fn new(style: OutputStyle, load_paths: Vec<PathBuf>) -> Self {
        Self { style, load_paths }
    }

    /// Build a compiler matching the middleware options.
    pub fn from_config(config: &SassyConfig) -> Self {
        Self::new(config.output_style, config.load_paths.clone())
    }
}

impl StylesheetCompiler for GrassCompiler {
    fn compile(&self, path: &Path) -> Result<String, CompileError> {
        let style = match self.style {
            OutputStyle::Expanded => grass::OutputStyle::Expanded,
            OutputStyle::Compressed => grass::OutputStyle::Compressed,
        };
        let options = grass::Options::default()
            .style(style)
            .load_paths(&self.load_paths);

        grass::from_path(path, &options).map_err(|e| CompileError::Sass {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_compile_nested_rules() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.scss");
        fs::write(&path, "$c: red;\n.a { .b { color: $c; } }\n").unwrap();

        let css = GrassCompiler::default().compile(&path).unwrap();
        assert!(css.contains(".a .b"));
        assert!(css.contains("color: red"));
    }

    #[test]
    fn test_compile_indented_syntax() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.sass");
        fs::write(&path, "$c: red\nbody\n  color: $c\n").unwrap();

        let css = GrassCompiler::default().compile(&path).unwrap();
        assert_eq!(css, "body {\n  color: red;\n}\n");
    }

    #[test]
    fn test_compressed_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.scss");
        fs::write(&path, ".a {\n  color: red;\n}\n").unwrap();

        let compiler = GrassCompiler::new(OutputStyle::Compressed, Vec::new());
        let css = compiler.compile(&path).unwrap();
        assert_eq!(css.trim(), ".a{color:red}");
    }

    #[test]
    fn test_imports_partial_from_same_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_vars.scss"), "$c: blue;\n").unwrap();
        let path = dir.path().join("main.scss");
        fs::write(&path, "@import 'vars';\n.a { color: $c; }\n").unwrap();

        let css = GrassCompiler::default().compile(&path).unwrap();
        assert!(css.contains("color: blue"));
    }

    #[test]
    fn test_syntax_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.scss");
        fs::write(&path, ".a { color: $undefined; }\n").unwrap();

        let err = GrassCompiler::default().compile(&path).unwrap_err();
        assert!(matches!(err, CompileError::Sass { .. }));
        assert_eq!(err.path(), path.as_path());
    }
}
