//! # Template Engine
//!
//! The render pipeline only needs two capabilities from a template
//! language: compile text, then execute the compiled form against a
//! profile. [`TemplateEngine`] captures that seam; [`GoTemplateEngine`]
//! implements it with Go `text/template` syntax via `gtmpl`.

use crate::{EditorError, EditorResult};
use covlet_profile::{Education, Experience, Profile, Project, ScalarField};
use gtmpl::{Context, Template, Value};
use std::collections::HashMap;

/// Parse/execute capability used by [`crate::RenderPipeline`]
pub trait TemplateEngine {
    /// Compiled form of a template
    type Compiled;

    /// Compile `text`, failing with [`EditorError::TemplateSyntax`]
    fn parse(&self, text: &str) -> EditorResult<Self::Compiled>;

    /// Execute a compiled template, failing with
    /// [`EditorError::RenderExecution`]
    fn execute(&self, compiled: &Self::Compiled, profile: &Profile) -> EditorResult<String>;
}

/// Go template engine backed by `gtmpl`
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTemplateEngine;

impl GoTemplateEngine {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateEngine for GoTemplateEngine {
    type Compiled = Template;

    fn parse(&self, text: &str) -> EditorResult<Template> {
        let mut template = Template::default();
        template
            .parse(text)
            .map_err(|e| EditorError::TemplateSyntax(e.to_string()))?;
        Ok(template)
    }

    fn execute(&self, compiled: &Template, profile: &Profile) -> EditorResult<String> {
        let context = Context::from(profile_value(profile));
        compiled
            .render(&context)
            .map_err(|e| EditorError::RenderExecution(execution_message(&e.to_string())))
    }
}

/// `gtmpl` appends the whole receiver to "no field" errors, which would
/// leak the profile into logs. Keep only the part naming the problem.
fn execution_message(message: &str) -> String {
    match message.find(" for ") {
        Some(cut) => message[..cut].to_string(),
        None => message.to_string(),
    }
}

/// Expose a profile to templates under its PascalCase field names
pub fn profile_value(profile: &Profile) -> Value {
    let mut fields: HashMap<String, Value> = ScalarField::ALL
        .iter()
        .map(|field| (field.name().to_string(), string(field.get(profile))))
        .collect();

    fields.insert(
        "Education".to_string(),
        Value::Array(profile.education.iter().map(education_value).collect()),
    );
    fields.insert(
        "Experience".to_string(),
        Value::Array(profile.experience.iter().map(experience_value).collect()),
    );
    fields.insert("Skills".to_string(), strings(&profile.skills));
    fields.insert(
        "Projects".to_string(),
        Value::Array(profile.projects.iter().map(project_value).collect()),
    );

    Value::Object(fields)
}

fn education_value(education: &Education) -> Value {
    object([
        ("Institution", string(&education.institution)),
        ("Degree", string(&education.degree)),
        ("StartDate", string(&education.start_date)),
        ("EndDate", string(&education.end_date)),
        ("GPA", string(&education.gpa)),
    ])
}

fn experience_value(experience: &Experience) -> Value {
    object([
        ("Company", string(&experience.company)),
        ("Position", string(&experience.position)),
        ("StartDate", string(&experience.start_date)),
        ("EndDate", string(&experience.end_date)),
        ("Responsibilities", strings(&experience.responsibilities)),
    ])
}

fn project_value(project: &Project) -> Value {
    object([
        ("Name", string(&project.name)),
        ("Description", string(&project.description)),
        ("URL", string(&project.url)),
    ])
}

fn object<const N: usize>(fields: [(&str, Value); N]) -> Value {
    Value::Object(
        fields
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect(),
    )
}

fn string(s: &str) -> Value {
    Value::String(s.to_string())
}

fn strings(items: &[String]) -> Value {
    Value::Array(items.iter().map(|s| string(s)).collect())
}
