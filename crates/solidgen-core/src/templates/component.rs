//! Component template rendering

use super::{ArtifactKind, SourceWriter, Template};
use clap::ValueEnum;
use std::fmt;

/// SolidJS component variants
///
/// The variant drives the imported component type and the shape of the
/// generated `Props`. `Void` structurally never emits a children field or a
/// children expression; adding a fourth variant forces every `match` below to
/// be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ComponentVariant {
    /// Generic component with an optional children prop
    #[default]
    Base,
    /// Component that requires a children prop
    Parent,
    /// Component without children
    Void,
}

impl ComponentVariant {
    /// The solid-js type name imported and used in the signature
    pub fn solid_type(&self) -> &'static str {
        match self {
            ComponentVariant::Base => "Component",
            ComponentVariant::Parent => "ParentComponent",
            ComponentVariant::Void => "VoidComponent",
        }
    }

    /// Whether the generated component accepts children at all
    pub fn has_children(&self) -> bool {
        match self {
            ComponentVariant::Void => false,
            ComponentVariant::Base | ComponentVariant::Parent => true,
        }
    }

    /// The `Props` children field, if this variant has one
    fn children_field(&self) -> Option<&'static str> {
        match self {
            ComponentVariant::Base => Some("children?: JSX.Element;"),
            ComponentVariant::Parent => Some("children: JSX.Element;"),
            ComponentVariant::Void => None,
        }
    }
}

impl fmt::Display for ComponentVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComponentVariant::Base => "base",
            ComponentVariant::Parent => "parent",
            ComponentVariant::Void => "void",
        };
        write!(f, "{}", s)
    }
}

/// Template for a SolidJS UI component
#[derive(Debug, Clone)]
pub struct ComponentTemplate {
    name: String,
    variant: ComponentVariant,
}

impl ComponentTemplate {
    /// Create a template from an already-normalized PascalCase name
    pub fn new(name: String, variant: ComponentVariant) -> Self {
        Self { name, variant }
    }

    fn write_imports(&self, w: &mut SourceWriter) {
        w.line(0, "import type {");
        w.line(1, &format!("{},", self.variant.solid_type()));
        if self.variant.has_children() {
            w.line(1, "JSX,");
        }
        w.line(0, "} from 'solid-js';");
        w.blank();

        w.line(0, &format!("import styles from './{}.module.css';", self.name));
        w.blank();
    }

    fn write_props(&self, w: &mut SourceWriter) {
        w.line(0, "type Props = {");
        w.line(1, "ref?: HTMLDivElement | ((el: HTMLDivElement) => void);");
        if let Some(field) = self.variant.children_field() {
            w.line(1, field);
        }
        w.line(0, "};");
        w.blank();
    }

    fn write_component(&self, w: &mut SourceWriter) {
        w.line(
            0,
            &format!(
                "export const {}: {}<Props> = (props) => {{",
                self.name,
                self.variant.solid_type()
            ),
        );
        w.line(1, "return (");
        w.line(2, "<div ref={props.ref}>");
        w.line(3, &self.name);
        if self.variant.has_children() {
            w.line(3, "{props.children}");
        }
        w.line(2, "</div>");
        w.line(1, ");");
        w.line(0, "};");
    }
}

impl Template for ComponentTemplate {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Component
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn build(&self) -> String {
        let mut w = SourceWriter::new();
        self.write_imports(&mut w);
        self.write_props(&mut w);
        self.write_component(&mut w);
        w.finish()
    }
}
