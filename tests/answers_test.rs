use std::cell::RefCell;

use indexmap::IndexMap;
use tombot::answers::{parse_var, resolve_variables};
use tombot::error::{Error, Result};
use tombot::prompt::{DefaultsPrompter, Prompter};
use tombot::transformers::Transformers;

/// Answers from a fixed list and records every default it was offered.
struct ScriptedPrompter {
    answers: RefCell<Vec<&'static str>>,
    offered: RefCell<Vec<(String, String)>>,
}

impl ScriptedPrompter {
    fn new(answers: &[&'static str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().rev().copied().collect()),
            offered: RefCell::new(Vec::new()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, name: &str, default: &str) -> Result<String> {
        self.offered.borrow_mut().push((name.to_string(), default.to_string()));
        let answer = self.answers.borrow_mut().pop().unwrap_or_default();
        Ok(if answer.is_empty() { default.to_string() } else { answer.to_string() })
    }
}

fn configured() -> IndexMap<String, String> {
    [
        ("project_name", "My Project"),
        ("package", "${project_name|to_snake_case}"),
        ("title", "$project_name by $author"),
        ("author", "nobody"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[test]
fn test_parse_var() {
    assert_eq!(parse_var("name=demo").unwrap(), ("name".to_string(), "demo".to_string()));
    assert_eq!(parse_var("expr=a=b").unwrap(), ("expr".to_string(), "a=b".to_string()));
    assert_eq!(parse_var("empty=").unwrap(), ("empty".to_string(), String::new()));
    assert!(matches!(parse_var("novalue"), Err(Error::ConfigError(_))));
    assert!(matches!(parse_var("Bad=1"), Err(Error::InvalidVariableName(_))));
}

#[test]
fn test_defaults_render_against_current_answers() {
    let transformers = Transformers::with_defaults();
    let prompter = ScriptedPrompter::new(&["Cool Tool", "", "", "me"]);

    let variables =
        resolve_variables(&configured(), &IndexMap::new(), &transformers, &prompter).unwrap();

    assert_eq!(variables["project_name"], "Cool Tool");
    assert_eq!(variables["package"], "cool_tool");
    // `author` is resolved after `title`, so its raw value is used.
    assert_eq!(variables["title"], "Cool Tool by nobody");
    assert_eq!(variables["author"], "me");

    let offered = prompter.offered.borrow();
    assert_eq!(offered[1], ("package".to_string(), "cool_tool".to_string()));
}

#[test]
fn test_presets_skip_prompt() {
    let transformers = Transformers::with_defaults();
    let prompter = ScriptedPrompter::new(&[]);
    let presets: IndexMap<_, _> = [("package".to_string(), "${literal}".to_string())].into();

    let variables =
        resolve_variables(&configured(), &presets, &transformers, &prompter).unwrap();

    assert_eq!(variables["package"], "${literal}");
    let asked: Vec<_> = prompter.offered.borrow().iter().map(|(n, _)| n.clone()).collect();
    assert_eq!(asked, vec!["project_name", "title", "author"]);
}

#[test]
fn test_defaults_prompter() {
    let transformers = Transformers::with_defaults();
    let variables =
        resolve_variables(&configured(), &IndexMap::new(), &transformers, &DefaultsPrompter)
            .unwrap();

    assert_eq!(variables["package"], "my_project");
    assert_eq!(variables["title"], "My Project by nobody");
    let names: Vec<_> = variables.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["project_name", "package", "title", "author"]);
}

#[test]
fn test_unknown_preset() {
    let transformers = Transformers::with_defaults();
    let presets: IndexMap<_, _> = [("missing".to_string(), "x".to_string())].into();
    let result = resolve_variables(&configured(), &presets, &transformers, &DefaultsPrompter);
    assert!(matches!(result, Err(Error::UnknownVariable(name)) if name == "missing"));
}

#[test]
fn test_invalid_default_fails() {
    let transformers = Transformers::with_defaults();
    let configured: IndexMap<_, _> = [("cost".to_string(), "5 $".to_string())].into();
    let result = resolve_variables(&configured, &IndexMap::new(), &transformers, &DefaultsPrompter);
    assert!(matches!(result, Err(Error::InvalidTemplate { .. })));
}
