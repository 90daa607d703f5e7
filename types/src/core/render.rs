//! The four renderings of a descriptor tree.
//!
//! Each walks the tree in declaration order and writes into a single buffer;
//! none of them touches anything but the tree and the alias tables.

use core::fmt;

use hashbrown::HashSet;

use super::ty::TypeDescriptor;
use crate::aliases::{SYSTEM_ROOT, is_system_qualified, qualified_alias, simple_alias};

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Labels {
    Keep,
    Omit,
}

impl TypeDescriptor {
    /// The token used inside generated member names: `Int`, `NullableInt`,
    /// `ListOfInt`, `DictionaryOfString_Int`.
    pub fn readable_name(&self) -> String {
        let mut out = String::new();
        self.write_readable(&mut out);
        out
    }

    /// Declaration syntax for generated signatures: `int`, `int?`,
    /// `List<int>`, `(int? Id, string Name)`.
    pub fn fully_qualified_name(&self) -> String {
        let mut out = String::new();
        self.write_declaration(&mut out, Labels::Keep);
        out
    }

    /// A short key that stays unique per instantiation, for naming emitted
    /// artifacts. Not valid declaration syntax.
    pub fn hint_name(&self) -> String {
        let alias = qualified_alias(self.qualified_name());
        let children = self.children();
        if children.is_empty() {
            if self.is_nullable_annotated() {
                return format!("Nullable{alias}");
            }
            return alias.to_string();
        }
        if self.is_nullable_value() || self.is_tuple() {
            return self.readable_name();
        }

        let mut out = String::from(alias);
        out.push('<');
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                out.push('_');
            }
            child.write_declaration(&mut out, Labels::Keep);
        }
        out.push('>');
        out
    }

    /// Namespaces under `System` that the declaration rendering depends on,
    /// excluding the bare root.
    pub fn system_namespaces(&self) -> HashSet<String> {
        let mut namespaces = HashSet::new();
        self.collect_namespaces(&mut namespaces);
        namespaces
    }

    fn write_readable(&self, out: &mut String) {
        push_capitalized(out, simple_alias(self.simple_name()));

        let children = self.children();
        if children.is_empty() {
            return;
        }
        // The leaf rule already rendered "Nullable", which reads as a prefix.
        if !self.is_nullable_value() {
            out.push_str("Of");
        }
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                out.push('_');
            }
            child.write_readable(out);
        }
    }

    pub(crate) fn write_declaration(&self, out: &mut String, labels: Labels) {
        self.write_bare_declaration(out, labels);
        if labels == Labels::Keep
            && let Some(field) = self.field_name()
        {
            out.push(' ');
            out.push_str(field);
        }
    }

    fn write_bare_declaration(&self, out: &mut String, labels: Labels) {
        let alias = qualified_alias(self.qualified_name());

        // The qualified form of a nullable value already ends in `?`.
        if self.is_nullable_value() {
            out.push_str(alias);
            return;
        }

        let children = self.children();
        if children.is_empty() {
            out.push_str(alias);
            if self.is_nullable_reference() {
                out.push('?');
            }
            return;
        }

        let (open, close) = if self.is_tuple() {
            ('(', ')')
        } else {
            out.push_str(alias);
            ('<', '>')
        };
        out.push(open);
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            child.write_declaration(out, labels);
        }
        out.push(close);
    }

    fn collect_namespaces(&self, namespaces: &mut HashSet<String>) {
        let qualified = self.qualified_name();
        if is_system_qualified(qualified)
            && let Some(dot) = qualified.rfind('.')
        {
            let namespace = &qualified[..dot];
            if namespace != SYSTEM_ROOT && !namespaces.contains(namespace) {
                namespaces.insert(namespace.to_string());
            }
        }
        for child in self.children() {
            child.collect_namespaces(namespaces);
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fully_qualified_name())
    }
}

fn push_capitalized(out: &mut String, name: &str) {
    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}
