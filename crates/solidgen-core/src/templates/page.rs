//! Page template rendering

use super::{ArtifactKind, SourceWriter, Template};

/// Template for a routed SolidJS page
///
/// Pages carry a `Page` suffix on the component identifier and read their
/// `id` route parameter via `useParams`.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    name: String,
}

impl PageTemplate {
    /// Create a template from an already-normalized PascalCase name; the
    /// `Page` suffix is applied here.
    pub fn new(name: String) -> Self {
        Self {
            name: format!("{}Page", name),
        }
    }

    fn write_imports(&self, w: &mut SourceWriter) {
        w.line(0, "import { useParams } from '@solidjs/router';");
        w.line(0, "import type { Component } from 'solid-js';");
        w.blank();
        w.line(0, &format!("import styles from './{}.module.css';", self.name));
        w.blank();
    }

    fn write_params(&self, w: &mut SourceWriter) {
        w.line(0, "type Params = {");
        w.line(1, "id: string;");
        w.line(0, "}");
        w.blank();
    }

    fn write_component(&self, w: &mut SourceWriter) {
        w.line(0, &format!("export const {}: Component = () => {{", self.name));
        w.line(1, "const params = useParams<Params>();");
        w.blank();
        w.line(1, "return <div>");
        w.line(2, &format!("{}: {{params.id}}", self.name));
        w.line(1, "</div>;");
        w.line(0, "};");
    }
}

impl Template for PageTemplate {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Page
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn build(&self) -> String {
        let mut w = SourceWriter::new();
        self.write_imports(&mut w);
        self.write_params(&mut w);
        self.write_component(&mut w);
        w.finish()
    }
}
