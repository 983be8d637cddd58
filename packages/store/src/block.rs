//! Code "block" workspace: a handful of file tabs, each with its own text
//! buffer, plus a terminal log. Code is never executed.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    JavaScript,
    Css,
    Python,
    Html,
}

impl Language {
    pub fn from_file_name(name: &str) -> Self {
        match name.rsplit('.').next().unwrap_or_default() {
            "css" => Language::Css,
            "py" => Language::Python,
            "html" | "htm" => Language::Html,
            _ => Language::JavaScript,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::Css => "CSS",
            Language::Python => "Python",
            Language::Html => "HTML",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

impl SourceFile {
    pub fn language(&self) -> Language {
        Language::from_file_name(&self.name)
    }
}

const APP_JS: &str = r#"import React from 'react';

function MavecodeApp() {
  return (
    <div className="app">
      <h1>Mavecode Block Online IDE</h1>
      <p>Start coding with your classmates here in real time!</p>
      <button>Run code</button>
    </div>
  );
}

export default MavecodeApp;
"#;

const STYLES_CSS: &str = ".app {\n  min-height: 100vh;\n  padding: 2rem;\n}\n";
const UTILS_PY: &str = "def greet(name):\n    return f\"Hello, {name}!\"\n";
const INDEX_HTML: &str = "<!doctype html>\n<html>\n  <body>\n    <div id=\"root\"></div>\n  </body>\n</html>\n";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeWorkspace {
    files: Vec<SourceFile>,
    active: usize,
    terminal: Vec<String>,
}

impl Default for CodeWorkspace {
    fn default() -> Self {
        let files = [
            ("App.js", APP_JS),
            ("styles.css", STYLES_CSS),
            ("utils.py", UTILS_PY),
            ("index.html", INDEX_HTML),
        ]
        .into_iter()
        .map(|(name, content)| SourceFile {
            name: name.to_string(),
            content: content.to_string(),
        })
        .collect();
        Self {
            files,
            active: 0,
            terminal: vec![
                "Initializing Mavecode environment...".to_string(),
                "Editor is ready.".to_string(),
            ],
        }
    }
}

impl CodeWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn active_file(&self) -> &SourceFile {
        &self.files[self.active]
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active_file().name == name
    }

    /// Make `name` the active tab. Returns `false` for an unknown file.
    pub fn open(&mut self, name: &str) -> bool {
        match self.files.iter().position(|f| f.name == name) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    /// Replace the active file's buffer. Other tabs keep their text.
    pub fn edit(&mut self, content: String) {
        self.files[self.active].content = content;
    }

    pub fn terminal(&self) -> &[String] {
        &self.terminal
    }

    /// Log a run of the active file.
    pub fn run(&mut self) {
        let file = self.active_file();
        let line = format!(
            "$ run {} ({}, {} lines)",
            file.name,
            file.language().label(),
            file.content.lines().count()
        );
        self.terminal.push(line);
    }

    pub fn clear_terminal(&mut self) {
        self.terminal.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_keep_their_own_buffers() {
        let mut ws = CodeWorkspace::new();
        assert!(ws.is_active("App.js"));

        ws.edit("console.log(1);".to_string());
        assert!(ws.open("utils.py"));
        assert_eq!(ws.active_file().language(), Language::Python);
        assert!(ws.active_file().content.starts_with("def greet"));

        ws.open("App.js");
        assert_eq!(ws.active_file().content, "console.log(1);");
    }

    #[test]
    fn test_unknown_file_keeps_active_tab() {
        let mut ws = CodeWorkspace::new();
        ws.open("styles.css");
        assert!(!ws.open("main.rs"));
        assert!(ws.is_active("styles.css"));
    }

    #[test]
    fn test_run_logs_active_file() {
        let mut ws = CodeWorkspace::new();
        ws.clear_terminal();
        ws.open("index.html");
        ws.run();
        assert_eq!(ws.terminal(), ["$ run index.html (HTML, 6 lines)"]);
    }

    #[test]
    fn test_language_from_name() {
        assert_eq!(Language::from_file_name("a.css"), Language::Css);
        assert_eq!(Language::from_file_name("Makefile"), Language::JavaScript);
    }
}
