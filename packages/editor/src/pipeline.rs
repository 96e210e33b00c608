//! # Render Pipeline
//!
//! Coordinates a single render: Parse → Merge → Execute
//!
//! A render either fully succeeds or fully fails. Syntax errors are
//! reported before any merging happens, and nothing a render does touches
//! the session's history or overrides.

use crate::{EditorResult, GoTemplateEngine, TemplateEngine};
use covlet_profile::{merge, OverrideMap, Profile};
use tracing::{debug, info, warn};

/// Turns template text plus profile data into rendered text
pub struct RenderPipeline<E = GoTemplateEngine> {
    engine: E,
}

impl RenderPipeline<GoTemplateEngine> {
    /// Pipeline using the Go template engine
    pub fn new() -> Self {
        Self::with_engine(GoTemplateEngine::new())
    }
}

impl Default for RenderPipeline<GoTemplateEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TemplateEngine> RenderPipeline<E> {
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    /// Render `template` against `base` with `overrides` layered on top
    ///
    /// 1. Parse the template (syntax errors surface immediately)
    /// 2. Merge overrides into a fresh copy of the base profile
    /// 3. Execute against the merged profile
    pub fn render(
        &self,
        template: &str,
        base: &Profile,
        overrides: &OverrideMap,
    ) -> EditorResult<String> {
        let compiled = self.engine.parse(template).map_err(|e| {
            warn!(error = %e, "template failed to parse");
            e
        })?;

        let merged = merge(base, overrides);
        debug!(overrides = overrides.len(), "merged overrides into profile");

        let output = self.engine.execute(&compiled, &merged).map_err(|e| {
            warn!(error = %e, "template failed to execute");
            e
        })?;

        info!(bytes = output.len(), "rendered template");
        Ok(output)
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}
